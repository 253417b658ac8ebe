//! RGBA colors
//!
//! Theme palettes are authored as CSS strings (`#FCEE4B`,
//! `rgba(15, 23, 42, 1)`), so parsing lives next to the color type.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced while parsing a CSS color string
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,
    #[error("invalid hex color `{0}`")]
    InvalidHex(String),
    #[error("invalid functional color `{0}`")]
    InvalidFunction(String),
    #[error("unsupported color syntax `{0}`")]
    Unsupported(String),
}

/// RGBA color with components in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.a = alpha;
        self
    }

    /// Linear interpolation between two colors
    pub fn lerp(a: &Color, b: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: a.r + (b.r - a.r) * t,
            g: a.g + (b.g - a.g) * t,
            b: a.b + (b.b - a.b) * t,
            a: a.a + (b.a - a.a) * t,
        }
    }

    /// Parse a CSS color: `#rgb`, `#rrggbb`, `rgb(r, g, b)` or `rgba(r, g, b, a)`
    pub fn parse(input: &str) -> Result<Color, ColorParseError> {
        let s = input.trim();
        if s.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(hex) = s.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(s.to_string()));
        }

        let lower = s.to_ascii_lowercase();
        if let Some(body) = lower
            .strip_prefix("rgba(")
            .or_else(|| lower.strip_prefix("rgb("))
        {
            let body = body
                .strip_suffix(')')
                .ok_or_else(|| ColorParseError::InvalidFunction(s.to_string()))?;
            return parse_components(body)
                .ok_or_else(|| ColorParseError::InvalidFunction(s.to_string()));
        }

        Err(ColorParseError::Unsupported(s.to_string()))
    }

    /// Render as `#rrggbb`, or `rgba(...)` when translucent
    pub fn to_css(&self) -> String {
        let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a < 1.0 {
            format!(
                "rgba({}, {}, {}, {})",
                to_byte(self.r),
                to_byte(self.g),
                to_byte(self.b),
                self.a
            )
        } else {
            format!(
                "#{:02x}{:02x}{:02x}",
                to_byte(self.r),
                to_byte(self.g),
                to_byte(self.b)
            )
        }
    }

    /// Relative luminance (sRGB weights, no gamma correction)
    pub fn luminance(&self) -> f32 {
        0.2126 * self.r + 0.7152 * self.g + 0.0722 * self.b
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    match hex.len() {
        3 => {
            let expanded: String = hex.chars().flat_map(|c| [c, c]).collect();
            u32::from_str_radix(&expanded, 16).ok().map(Color::from_hex)
        }
        6 => u32::from_str_radix(hex, 16).ok().map(Color::from_hex),
        _ => None,
    }
}

fn parse_components(body: &str) -> Option<Color> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 && parts.len() != 4 {
        return None;
    }
    let channel = |p: &str| -> Option<f32> {
        let v: f32 = p.parse().ok()?;
        (0.0..=255.0).contains(&v).then_some(v / 255.0)
    };
    let r = channel(parts[0])?;
    let g = channel(parts[1])?;
    let b = channel(parts[2])?;
    let a = match parts.get(3) {
        Some(p) => {
            let v: f32 = p.parse().ok()?;
            if !(0.0..=1.0).contains(&v) {
                return None;
            }
            v
        }
        None => 1.0,
    };
    Some(Color::rgba(r, g, b, a))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        assert_eq!(Color::parse("#111").unwrap(), Color::from_hex(0x111111));
        assert_eq!(Color::parse("#FCEE4B").unwrap(), Color::from_hex(0xFCEE4B));
    }

    #[test]
    fn parses_rgba() {
        let c = Color::parse("rgba(255, 255, 255, 0.1)").unwrap();
        assert_eq!(c.r, 1.0);
        assert!((c.a - 0.1).abs() < f32::EPSILON);
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(Color::parse(""), Err(ColorParseError::Empty));
        assert!(matches!(
            Color::parse("#12345"),
            Err(ColorParseError::InvalidHex(_))
        ));
        assert!(matches!(
            Color::parse("rgb(300, 0, 0)"),
            Err(ColorParseError::InvalidFunction(_))
        ));
        assert!(matches!(
            Color::parse("hsl(0, 0%, 0%)"),
            Err(ColorParseError::Unsupported(_))
        ));
    }

    #[test]
    fn css_round_trip_for_opaque_colors() {
        assert_eq!(Color::from_hex(0x00ff41).to_css(), "#00ff41");
    }
}
