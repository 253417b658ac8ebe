//! Leaf components
//!
//! Every component is a function from a [`RenderContext`] to an [`Element`].
//! Components read classes, motion and decorations from the theme and never
//! ask which theme is active.

mod background;
mod connect;
mod profile;
mod sections;
mod selector;

pub use background::background;
pub use connect::{connect, contact_form, now_playing, socials};
pub use profile::{badge, links, location, profile_card, profile_header, project};
pub use sections::{about, artworks, journey, lifestyle, section_shell};
pub use selector::section_selector;

use folio_theme::{Section, ThemeAnimations, ThemeConfig};

use crate::content::Content;
use crate::element::{div, Element};
use crate::layout::LayoutState;

/// Inputs shared by every component of one render
pub struct RenderContext<'a> {
    pub theme: &'a ThemeConfig,
    pub content: &'a Content,
    pub state: &'a LayoutState,
    /// Entrance animations after the mobile switch is applied
    pub animations: ThemeAnimations,
}

impl<'a> RenderContext<'a> {
    pub fn new(theme: &'a ThemeConfig, content: &'a Content, state: &'a LayoutState) -> Self {
        Self {
            theme,
            content,
            state,
            animations: theme.animations_for(state.is_mobile),
        }
    }

    pub fn is_mobile(&self) -> bool {
        self.state.is_mobile
    }

    pub fn scroll_progress(&self) -> f32 {
        self.state.scroll_progress.unwrap_or(0.0)
    }

    /// Scroll-linked decorations for a section
    pub fn decorations(&self, section: Section) -> Vec<Element> {
        let progress = self.scroll_progress();
        self.theme
            .page
            .decorations_for(section)
            .enumerate()
            .map(|(i, decoration)| {
                let (y, rotate) = decoration.offset(progress);
                div()
                    .key(format!("decoration-{}-{i}", section.id()))
                    .class(decoration.class.clone())
                    .attr("aria-hidden", "true")
                    .style("transform", format!("translateY({y:.1}px) rotate({rotate:.1}deg)"))
            })
            .collect()
    }
}
