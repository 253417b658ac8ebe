//! Style descriptor tokens
//!
//! Each group holds opaque class strings for one UI element plus the
//! structured data (gradient cycles, overlays, gestures, decorations) that
//! would otherwise force shared components to ask which theme is active.

use folio_animation::{Gesture, GradientCycle, LoopAnimation};
use serde::{Deserialize, Serialize};

use crate::sections::Section;
use crate::tokens::GlarePoint;

/// Ordered inline style declarations
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct InlineStyle(Vec<(String, String)>);

impl InlineStyle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: add or replace a declaration
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(entry) => entry.1 = value,
            None => self.0.push((property, value)),
        }
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

// =============================================================================
// Card
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardStyles {
    pub container_class: String,
    pub border_class: String,
    pub shadow_class: String,
    pub background_class: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glass_effect: Option<String>,
    /// Looping gradient wash behind the card content
    pub gradient: GradientCycle,
    /// Sheen and pattern layers drawn above the gradient, in order
    #[serde(default)]
    pub overlays: Vec<CardOverlay>,
}

impl CardStyles {
    pub fn sheen(&self) -> Option<&SheenOverlay> {
        self.overlays.iter().find_map(|overlay| match overlay {
            CardOverlay::Sheen(sheen) => Some(sheen),
            CardOverlay::Pattern(_) => None,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CardOverlay {
    /// Highlight following the glare position; only drawn with glare enabled
    Sheen(SheenOverlay),
    /// Static texture
    Pattern(PatternOverlay),
}

/// Glare-following highlight
///
/// `template` is a CSS background where `{x}` and `{y}` are replaced by the
/// current glare position in percent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SheenOverlay {
    pub template: String,
    pub radius_class: String,
    pub blend_mode: String,
    /// Opacity with the pointer at rest
    pub rest_opacity: f32,
    /// Opacity at full pointer speed
    pub active_opacity: f32,
    pub mobile_opacity: f32,
    pub mobile_blend_mode: String,
}

impl SheenOverlay {
    /// Resolve the template for a glare position
    pub fn background(&self, glare: GlarePoint) -> String {
        self.template
            .replace("{x}", &format_percent(glare.x))
            .replace("{y}", &format_percent(glare.y))
    }

    /// Opacity for a pointer speed in `0..=1`
    pub fn opacity(&self, pointer_speed: f32, is_mobile: bool) -> f32 {
        if is_mobile {
            return self.mobile_opacity;
        }
        let t = pointer_speed.clamp(0.0, 1.0);
        self.rest_opacity + (self.active_opacity - self.rest_opacity) * t
    }

    pub fn blend_mode(&self, is_mobile: bool) -> &str {
        if is_mobile {
            &self.mobile_blend_mode
        } else {
            &self.blend_mode
        }
    }
}

fn format_percent(value: f32) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    if rounded.fract() == 0.0 {
        format!("{}", rounded as i32)
    } else {
        format!("{rounded}")
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternOverlay {
    pub class: String,
    pub style: InlineStyle,
}

// =============================================================================
// Profile header
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeStyles {
    pub container_class: String,
    pub dot_class: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingStyles {
    pub title_class: String,
    pub bio_class: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectLinkStyles {
    pub link_class: String,
    pub text_class: String,
}

// =============================================================================
// Links
// =============================================================================

/// What a profile link does when activated
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkKind {
    #[default]
    Link,
    /// Mail link with a copy-to-clipboard button
    Email,
}

/// Per-kind values
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ByLinkKind<T> {
    pub link: T,
    pub email: T,
}

impl<T> ByLinkKind<T> {
    pub fn both(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            link: value.clone(),
            email: value,
        }
    }

    pub fn get(&self, kind: LinkKind) -> &T {
        match kind {
            LinkKind::Link => &self.link,
            LinkKind::Email => &self.email,
        }
    }
}

/// Hover and tap behaviour of links and their icon buttons
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LinkMotion {
    pub link: ByLinkKind<Gesture>,
    pub icon: Gesture,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinkStyles {
    pub container_class: String,
    pub label_class: String,
    pub caption_class: String,
    pub icon_container_class: String,
    pub hover_effect: String,
    /// Inline styles on the link container, by kind
    pub kind_style: ByLinkKind<InlineStyle>,
    pub icon_style: InlineStyle,
    pub copy_button_class: String,
    pub copy_icon_class: String,
    pub check_icon_class: String,
    pub arrow_container_class: String,
    pub arrow_class: String,
    /// Idle loop on the arrow icon
    pub arrow_loop: LoopAnimation,
    /// Extra arrow loop delay per link index
    pub arrow_stagger_ms: u32,
    /// Decoration revealed on hover
    pub hover_accent_class: String,
    pub motion: LinkMotion,
}

impl LinkStyles {
    /// Arrow loop for the link at `index`
    pub fn arrow_loop_for(&self, index: usize) -> LoopAnimation {
        self.arrow_loop.staggered(index, self.arrow_stagger_ms)
    }
}

// =============================================================================
// Location
// =============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationStyles {
    pub container_class: String,
    pub icon_container_class: String,
    pub text_class: String,
    pub icon_class: String,
    pub icon_glow_class: String,
    pub icon_loop: LoopAnimation,
    pub glow_loop: LoopAnimation,
}

// =============================================================================
// Page chrome
// =============================================================================

/// Scroll-linked decoration drawn inside a section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Decoration {
    pub section: Section,
    pub class: String,
    /// Vertical offset in px at progress 0 and 1
    pub y_range: (f32, f32),
    /// Rotation in degrees at progress 0 and 1
    pub rotate_range: (f32, f32),
}

impl Decoration {
    pub fn new(section: Section, class: impl Into<String>) -> Self {
        Self {
            section,
            class: class.into(),
            y_range: (0.0, 0.0),
            rotate_range: (0.0, 0.0),
        }
    }

    pub fn with_y(mut self, from: f32, to: f32) -> Self {
        self.y_range = (from, to);
        self
    }

    pub fn with_rotate(mut self, from: f32, to: f32) -> Self {
        self.rotate_range = (from, to);
        self
    }

    /// `(y, rotate)` at a scroll progress in `0..=1`
    pub fn offset(&self, progress: f32) -> (f32, f32) {
        (
            folio_core::scroll::transform(progress, self.y_range.0, self.y_range.1),
            folio_core::scroll::transform(progress, self.rotate_range.0, self.rotate_range.1),
        )
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormStyles {
    pub container_class: String,
    pub prompt_class: String,
    pub label_class: String,
    pub input_class: String,
    pub textarea_class: String,
    pub button_class: String,
    /// Button state classes, appended to `button_class`
    pub idle_class: String,
    pub success_class: String,
    pub error_class: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NowPlayingStyles {
    pub container_class: String,
    pub artwork_class: String,
    pub title_class: String,
    pub artist_class: String,
    pub progress_track_class: String,
    pub progress_bar_class: String,
    pub offline_class: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageStyles {
    pub container_class: String,
    /// Desktop page background; `None` keeps the container class background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desktop_background: Option<String>,
    pub section_class: String,
    pub section_heading_class: String,
    pub section_card_class: String,
    pub placeholder_class: String,
    pub tooltip_class: String,
    pub selector_container_class: String,
    pub selector_button_class: String,
    pub selector_idle_class: String,
    pub selector_active_class: String,
    /// Ring drawn over the active selector button
    pub selector_indicator_class: String,
    /// Color scheme passed to the contribution graph service
    pub activity_graph_theme: String,
    pub form: FormStyles,
    pub now_playing: NowPlayingStyles,
    #[serde(default)]
    pub decorations: Vec<Decoration>,
}

impl PageStyles {
    pub fn decorations_for(&self, section: Section) -> impl Iterator<Item = &Decoration> {
        self.decorations.iter().filter(move |d| d.section == section)
    }
}
