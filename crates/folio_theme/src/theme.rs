//! The theme contract

use std::fmt;
use std::sync::Arc;

use thiserror::Error;

use crate::background::{BackgroundContext, BackgroundLayer, BackgroundRenderer};
use crate::registry::ThemeId;
use crate::sections::{SectionSupport, SectionTable};
use crate::tokens::*;

/// Errors produced by the theme system
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    #[error("theme `{theme}` is missing a value for `{field}`")]
    Incomplete { theme: ThemeId, field: &'static str },

    #[error("theme `{theme}` has an out-of-range `{field}`: {reason}")]
    OutOfRange {
        theme: ThemeId,
        field: &'static str,
        reason: String,
    },

    #[error("unknown theme `{0}`")]
    UnknownTheme(String),
}

/// One complete visual skin
///
/// Shared layout code reads everything it needs from here; nothing outside a
/// theme's own module knows which theme is active.
#[derive(Clone)]
pub struct ThemeConfig {
    pub id: ThemeId,
    pub name: String,
    pub colors: ThemeColors,
    pub fonts: ThemeFonts,
    pub card: CardStyles,
    pub badge: BadgeStyles,
    pub heading: HeadingStyles,
    pub links: LinkStyles,
    pub location: LocationStyles,
    pub project_link: ProjectLinkStyles,
    pub page: PageStyles,
    pub animations: ThemeAnimations,
    pub interaction: InteractionConfig,
    pub mobile: MobileConfig,
    pub sections: SectionTable,
    pub background: Arc<dyn BackgroundRenderer>,
}

impl fmt::Debug for ThemeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeConfig")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("colors", &self.colors)
            .field("fonts", &self.fonts)
            .field("interaction", &self.interaction)
            .field("mobile", &self.mobile)
            .field("sections", &self.sections)
            .field("background", &self.background.name())
            .finish_non_exhaustive()
    }
}

impl ThemeConfig {
    /// Entrance animations for a viewport class
    pub fn animations_for(&self, is_mobile: bool) -> ThemeAnimations {
        if is_mobile && self.mobile.disable_animations {
            self.animations.disabled()
        } else {
            self.animations
        }
    }

    /// Page background for a viewport class, `None` when the container class
    /// already paints it
    pub fn page_background(&self, is_mobile: bool) -> Option<&str> {
        if is_mobile {
            Some(&self.mobile.background)
        } else {
            self.page.desktop_background.as_deref()
        }
    }

    pub fn render_background(&self, ctx: &BackgroundContext) -> Vec<BackgroundLayer> {
        self.background.render(ctx)
    }

    /// Check that every required value is present and in range
    pub fn validate(&self) -> Result<(), ThemeError> {
        for (field, value) in self.required_strings() {
            if value.trim().is_empty() {
                return Err(ThemeError::Incomplete {
                    theme: self.id,
                    field,
                });
            }
        }

        let interaction = &self.interaction;
        if !(interaction.card_tilt_max > 0.0) {
            return Err(self.out_of_range("interaction.card_tilt_max", "must be positive"));
        }
        if !(interaction.card_scale_min > 0.0 && interaction.card_scale_min <= 1.0) {
            return Err(self.out_of_range("interaction.card_scale_min", "must be in (0, 1]"));
        }
        if !interaction.card_glare_rest.is_within_card() {
            return Err(self.out_of_range("interaction.card_glare_rest", "must be within 0-100%"));
        }
        if interaction.pointer_velocity_multiplier < 0.0 {
            return Err(self.out_of_range(
                "interaction.pointer_velocity_multiplier",
                "must not be negative",
            ));
        }
        if !self.card.gradient.is_animated() {
            return Err(self.out_of_range("card.gradient", "needs two stops and a duration"));
        }

        for section in crate::sections::Section::all() {
            if let SectionSupport::Placeholder { message } = self.sections.support(*section) {
                if message.trim().is_empty() {
                    return Err(ThemeError::Incomplete {
                        theme: self.id,
                        field: "sections.placeholder",
                    });
                }
            }
        }

        Ok(())
    }

    fn out_of_range(&self, field: &'static str, reason: &str) -> ThemeError {
        ThemeError::OutOfRange {
            theme: self.id,
            field,
            reason: reason.to_string(),
        }
    }

    fn required_strings(&self) -> Vec<(&'static str, &str)> {
        let card = &self.card;
        let links = &self.links;
        let location = &self.location;
        let page = &self.page;
        let form = &page.form;
        let now_playing = &page.now_playing;

        let mut fields: Vec<(&'static str, &str)> = vec![
            ("name", self.name.as_str()),
            ("fonts.heading", self.fonts.heading.as_str()),
            ("fonts.body", self.fonts.body.as_str()),
            ("card.container_class", card.container_class.as_str()),
            ("card.border_class", card.border_class.as_str()),
            ("card.shadow_class", card.shadow_class.as_str()),
            ("card.background_class", card.background_class.as_str()),
            ("badge.container_class", self.badge.container_class.as_str()),
            ("badge.dot_class", self.badge.dot_class.as_str()),
            ("heading.title_class", self.heading.title_class.as_str()),
            ("heading.bio_class", self.heading.bio_class.as_str()),
            ("links.container_class", links.container_class.as_str()),
            ("links.label_class", links.label_class.as_str()),
            ("links.caption_class", links.caption_class.as_str()),
            ("links.icon_container_class", links.icon_container_class.as_str()),
            ("links.hover_effect", links.hover_effect.as_str()),
            ("links.copy_button_class", links.copy_button_class.as_str()),
            ("links.copy_icon_class", links.copy_icon_class.as_str()),
            ("links.check_icon_class", links.check_icon_class.as_str()),
            ("links.arrow_container_class", links.arrow_container_class.as_str()),
            ("links.arrow_class", links.arrow_class.as_str()),
            ("links.hover_accent_class", links.hover_accent_class.as_str()),
            ("location.container_class", location.container_class.as_str()),
            ("location.icon_container_class", location.icon_container_class.as_str()),
            ("location.text_class", location.text_class.as_str()),
            ("location.icon_class", location.icon_class.as_str()),
            ("location.icon_glow_class", location.icon_glow_class.as_str()),
            ("project_link.link_class", self.project_link.link_class.as_str()),
            ("project_link.text_class", self.project_link.text_class.as_str()),
            ("page.container_class", page.container_class.as_str()),
            ("page.section_class", page.section_class.as_str()),
            ("page.section_heading_class", page.section_heading_class.as_str()),
            ("page.section_card_class", page.section_card_class.as_str()),
            ("page.placeholder_class", page.placeholder_class.as_str()),
            ("page.tooltip_class", page.tooltip_class.as_str()),
            ("page.selector_button_class", page.selector_button_class.as_str()),
            ("page.selector_idle_class", page.selector_idle_class.as_str()),
            ("page.selector_active_class", page.selector_active_class.as_str()),
            ("page.selector_indicator_class", page.selector_indicator_class.as_str()),
            ("page.activity_graph_theme", page.activity_graph_theme.as_str()),
            ("page.form.container_class", form.container_class.as_str()),
            ("page.form.prompt_class", form.prompt_class.as_str()),
            ("page.form.label_class", form.label_class.as_str()),
            ("page.form.input_class", form.input_class.as_str()),
            ("page.form.textarea_class", form.textarea_class.as_str()),
            ("page.form.button_class", form.button_class.as_str()),
            ("page.form.idle_class", form.idle_class.as_str()),
            ("page.form.success_class", form.success_class.as_str()),
            ("page.form.error_class", form.error_class.as_str()),
            ("page.now_playing.container_class", now_playing.container_class.as_str()),
            ("page.now_playing.artwork_class", now_playing.artwork_class.as_str()),
            ("page.now_playing.title_class", now_playing.title_class.as_str()),
            ("page.now_playing.artist_class", now_playing.artist_class.as_str()),
            ("page.now_playing.progress_track_class", now_playing.progress_track_class.as_str()),
            ("page.now_playing.progress_bar_class", now_playing.progress_bar_class.as_str()),
            ("page.now_playing.offline_class", now_playing.offline_class.as_str()),
            ("mobile.background", self.mobile.background.as_str()),
        ];

        fields.extend(card.gradient.stops.iter().map(|stop| ("card.gradient.stops", stop.as_str())));
        for overlay in &card.overlays {
            match overlay {
                CardOverlay::Sheen(sheen) => {
                    fields.push(("card.overlays.sheen.template", sheen.template.as_str()));
                    fields.push(("card.overlays.sheen.blend_mode", sheen.blend_mode.as_str()));
                }
                CardOverlay::Pattern(pattern) => {
                    fields.push(("card.overlays.pattern.class", pattern.class.as_str()));
                }
            }
        }
        fields
    }
}
