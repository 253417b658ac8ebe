//! Background renderers
//!
//! Every theme owns one renderer that turns `(is_mobile, scroll_progress)`
//! into a stack of decorative layers drawn behind the page content. The
//! layers are data; hosts decide how to paint them. Renderers never fail:
//! a missing or malformed asset drops the layer that needed it and keeps
//! the rest of the stack.

mod brutalism;
mod liquid_glass;
mod minimalism;
mod synthwave;
mod terminal;

pub use brutalism::BrutalismBackground;
pub(crate) use brutalism::STRIPE_FIELD;
pub use liquid_glass::LiquidGlassBackground;
pub use minimalism::MinimalismBackground;
pub use synthwave::SynthwaveBackground;
pub use terminal::TerminalBackground;

use folio_animation::LoopAnimation;
use serde::{Deserialize, Serialize};

use crate::tokens::InlineStyle;

/// Inputs shared by every renderer
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BackgroundContext {
    pub is_mobile: bool,
    /// Scroll progress in `0..=1`, when the host tracks one
    #[serde(default)]
    pub scroll_progress: Option<f32>,
}

impl BackgroundContext {
    pub fn desktop() -> Self {
        Self::default()
    }

    pub fn mobile() -> Self {
        Self {
            is_mobile: true,
            scroll_progress: None,
        }
    }

    pub fn with_scroll(mut self, progress: f32) -> Self {
        self.scroll_progress = Some(progress.clamp(0.0, 1.0));
        self
    }

    /// Parallax offset for a layer travelling `range` px over the window
    pub fn parallax(&self, range: f32) -> f32 {
        self.scroll_progress.unwrap_or(0.0) * range
    }
}

/// Kind of decorative layer
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    Fill,
    Gradient,
    Shape,
    Grid,
    Scanlines,
    GlyphColumn,
    Orb,
    Starfield,
    Horizon,
    Video,
}

impl LayerKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Fill => "fill",
            Self::Gradient => "gradient",
            Self::Shape => "shape",
            Self::Grid => "grid",
            Self::Scanlines => "scanlines",
            Self::GlyphColumn => "glyph_column",
            Self::Orb => "orb",
            Self::Starfield => "starfield",
            Self::Horizon => "horizon",
            Self::Video => "video",
        }
    }
}

/// One decorative layer
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BackgroundLayer {
    pub kind: LayerKind,
    pub class: String,
    #[serde(default, skip_serializing_if = "InlineStyle::is_empty")]
    pub style: InlineStyle,
    /// Text content (glyph columns)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Media source (video layers)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation: Option<LoopAnimation>,
}

impl BackgroundLayer {
    pub fn new(kind: LayerKind, class: impl Into<String>) -> Self {
        Self {
            kind,
            class: class.into(),
            style: InlineStyle::new(),
            text: None,
            src: None,
            animation: None,
        }
    }

    /// Builder: add an inline style declaration
    pub fn style(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.style.set(property, value);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn src(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    pub fn animated(mut self, animation: LoopAnimation) -> Self {
        self.animation = Some(animation);
        self
    }

    /// Builder: translate the layer vertically by a parallax offset
    pub fn parallax(self, offset_y: f32) -> Self {
        if offset_y == 0.0 {
            return self;
        }
        self.style("transform", format!("translateY({offset_y:.1}px)"))
    }
}

/// A theme's background
pub trait BackgroundRenderer: Send + Sync {
    /// Stable renderer name, used in render keys and logs
    fn name(&self) -> &'static str;

    /// Layers for a context, back to front
    fn render(&self, ctx: &BackgroundContext) -> Vec<BackgroundLayer>;
}

/// `pointer-events-none absolute inset-0` plus extra classes
pub(crate) fn full_bleed(extra: &str) -> String {
    if extra.is_empty() {
        "pointer-events-none absolute inset-0".to_string()
    } else {
        format!("pointer-events-none absolute inset-0 {extra}")
    }
}
