//! Palette and font tokens

use folio_core::Color;
use serde::{Deserialize, Serialize};

/// Descriptive palette of a theme
///
/// Style descriptors carry their own colors; the palette is what other
/// consumers (the CLI, analytics, contrast checks) read when they need to
/// talk about a theme's colors without parsing class strings.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeColors {
    pub background: Color,
    pub text: Color,
    pub card_background: Color,
    pub card_border: Color,
    pub accent_primary: Color,
    pub accent_secondary: Color,
}

impl ThemeColors {
    /// All palette entries with their names, in declaration order
    pub fn entries(&self) -> [(&'static str, Color); 6] {
        [
            ("background", self.background),
            ("text", self.text),
            ("card_background", self.card_background),
            ("card_border", self.card_border),
            ("accent_primary", self.accent_primary),
            ("accent_secondary", self.accent_secondary),
        ]
    }

    /// Whether the page background is dark enough to need light text
    pub fn is_dark(&self) -> bool {
        self.background.luminance() < 0.5
    }
}

/// Font family stacks
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeFonts {
    pub heading: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mono: Option<String>,
}

impl ThemeFonts {
    pub fn new(heading: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            body: body.into(),
            mono: None,
        }
    }

    pub fn with_mono(mut self, mono: impl Into<String>) -> Self {
        self.mono = Some(mono.into());
        self
    }

    /// Family for code-like text, falling back to the body stack
    pub fn mono_or_body(&self) -> &str {
        self.mono.as_deref().unwrap_or(&self.body)
    }
}
