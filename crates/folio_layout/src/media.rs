//! Media references: video ids, aspect ratios and artwork rows

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Height of an artwork row in px
pub const ARTWORK_ROW_HEIGHT: f32 = 280.0;

fn watch_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/)([^&\n?#]+)").ok())
        .as_ref()
}

fn shorts_pattern() -> Option<&'static Regex> {
    static PATTERN: OnceLock<Option<Regex>> = OnceLock::new();
    PATTERN
        .get_or_init(|| Regex::new(r"youtube\.com/shorts/([^&\n?#]+)").ok())
        .as_ref()
}

/// Video id from a watch, short-link or shorts URL
pub fn youtube_id(url: &str) -> Option<&str> {
    shorts_pattern()
        .and_then(|p| p.captures(url))
        .or_else(|| watch_pattern().and_then(|p| p.captures(url)))
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str())
}

pub fn youtube_embed_url(id: &str) -> String {
    format!("https://www.youtube.com/embed/{id}")
}

/// Declared aspect ratio of an artwork
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AspectRatio {
    /// `16:9`
    Widescreen,
    /// `9:16`
    Vertical,
    /// `3:4`
    Portrait,
    /// Anything else renders square
    #[default]
    Square,
}

impl AspectRatio {
    /// Width over height
    pub fn ratio(self) -> f32 {
        match self {
            Self::Widescreen => 16.0 / 9.0,
            Self::Vertical => 9.0 / 16.0,
            Self::Portrait => 3.0 / 4.0,
            Self::Square => 1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Widescreen => "16:9",
            Self::Vertical => "9:16",
            Self::Portrait => "3:4",
            Self::Square => "1:1",
        }
    }

    /// Width of a tile `height` px tall
    pub fn width_for(self, height: f32) -> f32 {
        height * self.ratio()
    }
}

impl From<String> for AspectRatio {
    fn from(value: String) -> Self {
        match value.trim() {
            "16:9" => Self::Widescreen,
            "9:16" => Self::Vertical,
            "3:4" => Self::Portrait,
            _ => Self::Square,
        }
    }
}

impl From<AspectRatio> for String {
    fn from(value: AspectRatio) -> Self {
        value.as_str().to_string()
    }
}

/// Split items into two rows; the first row takes the extra item
pub fn split_rows<T>(items: &[T]) -> (&[T], &[T]) {
    items.split_at(items.len().div_ceil(2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_ids_from_every_url_shape() {
        assert_eq!(youtube_id("https://www.youtube.com/watch?v=dQw4w9WgXcQ&t=42"), Some("dQw4w9WgXcQ"));
        assert_eq!(youtube_id("https://youtu.be/dQw4w9WgXcQ?si=abc"), Some("dQw4w9WgXcQ"));
        assert_eq!(youtube_id("https://youtube.com/shorts/AbC123#top"), Some("AbC123"));
        assert_eq!(youtube_id("https://vimeo.com/12345"), None);
        assert_eq!(youtube_id(""), None);
    }

    #[test]
    fn unknown_ratios_render_square() {
        assert_eq!(AspectRatio::from("4:3".to_string()), AspectRatio::Square);
        assert_eq!(AspectRatio::from("9:16".to_string()).width_for(280.0), 157.5);
        assert_eq!(AspectRatio::Widescreen.as_str(), "16:9");
    }

    #[test]
    fn first_row_takes_the_odd_item() {
        let items = [1, 2, 3, 4, 5];
        assert_eq!(split_rows(&items), (&items[..3], &items[3..]));
        let empty: [u8; 0] = [];
        assert_eq!(split_rows(&empty).0.len(), 0);
    }
}
