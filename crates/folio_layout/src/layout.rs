//! Generic section layout
//!
//! [`ThemeLayout::render`] is a pure function of the theme, the content and
//! the transient UI state the host owns. It renders every section for every
//! theme; sections a theme does not fully support render the theme's
//! placeholder.

use folio_theme::{Section, ThemeConfig};
use serde::{Deserialize, Serialize};

use crate::card::CardTransform;
use crate::components::{self, RenderContext};
use crate::content::Content;
use crate::element::{div, Element};
use crate::timeline::YearMonth;
use crate::views::{FormView, NowPlayingView};

/// Transient UI state read by the layout
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LayoutState {
    /// Key of the themed subtree; changes on every theme switch
    pub remount_key: String,
    pub is_mobile: bool,
    /// Page scroll progress in `0..=1`
    #[serde(default)]
    pub scroll_progress: Option<f32>,
    /// The email address was just copied
    pub copied_email: bool,
    pub card: CardTransform,
    pub form: FormView,
    pub now_playing: NowPlayingView,
    pub active_section: Section,
    /// Section named by the selector tooltip
    #[serde(default)]
    pub tooltip: Option<Section>,
    /// Timeline card opened by hover or tap
    #[serde(default)]
    pub expanded_timeline: Option<usize>,
    /// Month that `Present` resolves to
    pub today: YearMonth,
}

impl LayoutState {
    pub fn new(remount_key: impl Into<String>, today: YearMonth) -> Self {
        Self {
            remount_key: remount_key.into(),
            is_mobile: false,
            scroll_progress: None,
            copied_email: false,
            card: CardTransform::default(),
            form: FormView::default(),
            now_playing: NowPlayingView::default(),
            active_section: Section::Home,
            tooltip: None,
            expanded_timeline: None,
            today,
        }
    }

    pub fn mobile(mut self, is_mobile: bool) -> Self {
        self.is_mobile = is_mobile;
        self
    }
}

/// Renders a full page for any theme
pub struct ThemeLayout;

impl ThemeLayout {
    pub fn render(theme: &ThemeConfig, content: &Content, state: &LayoutState) -> Element {
        let ctx = RenderContext::new(theme, content, state);
        tracing::trace!(theme = %theme.id, key = %state.remount_key, mobile = state.is_mobile, "rendering layout");

        let mut root = div()
            .key(state.remount_key.clone())
            .class(theme.page.container_class.clone())
            .style("font-family", theme.fonts.body.clone())
            .attr("data-theme", theme.id.id());
        if let Some(background) = theme.page_background(state.is_mobile) {
            root = root.style("background", background.to_string());
        }

        let sections = Section::all().iter().map(|&section| {
            components::section_shell(&ctx, section, |ctx| match section {
                Section::Home => components::profile_card(ctx),
                Section::About => components::about(ctx),
                Section::Journey => components::journey(ctx),
                Section::Artworks => components::artworks(ctx),
                Section::Lifestyle => components::lifestyle(ctx),
                Section::Connect => components::connect(ctx),
            })
        });

        root.child(components::section_selector(&ctx))
            .child(div().key("sections").class("relative w-full").children(sections))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_theme::{ThemeId, ThemeRegistry};

    fn state() -> LayoutState {
        LayoutState::new("minimalism-0", YearMonth::new(2025, 6).unwrap())
    }

    #[test]
    fn root_is_keyed_and_themed() {
        let content = Content::embedded().unwrap();
        let theme = ThemeRegistry::global().get(ThemeId::Minimalism);
        let tree = ThemeLayout::render(theme, &content, &state());
        assert_eq!(tree.key.as_deref(), Some("minimalism-0"));
        assert_eq!(tree.attr_value("data-theme"), Some("minimalism"));
        assert_eq!(tree.style_value("background"), None);

        let mobile = ThemeLayout::render(theme, &content, &state().mobile(true));
        assert_eq!(mobile.style_value("background"), Some(theme.mobile.background.as_str()));
    }

    #[test]
    fn copied_email_swaps_icon() {
        let content = Content::embedded().unwrap();
        let theme = ThemeRegistry::global().get(ThemeId::Terminal);
        let mut state = state();
        let before = ThemeLayout::render(theme, &content, &state);
        state.copied_email = true;
        let after = ThemeLayout::render(theme, &content, &state);

        let icon = |tree: &Element| {
            tree.find_by_key("copy-email")
                .and_then(|b| b.children.first())
                .map(|icon| icon.class.clone())
        };
        assert_eq!(icon(&before), Some(theme.links.copy_icon_class.clone()));
        assert_eq!(icon(&after), Some(theme.links.check_icon_class.clone()));
    }
}
