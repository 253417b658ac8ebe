//! Design tokens for theming
//!
//! Tokens are the data a theme is made of:
//! - Palette and font families
//! - Style descriptors per UI element
//! - Entrance animation variants
//! - Interaction tuning and the constrained-viewport fallback

mod animation;
mod interaction;
mod palette;
mod styles;

pub use animation::*;
pub use interaction::*;
pub use palette::*;
pub use styles::*;
