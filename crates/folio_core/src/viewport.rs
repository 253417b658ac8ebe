//! Viewport classification

use serde::{Deserialize, Serialize};

/// Default width at or below which a viewport is treated as constrained
pub const MOBILE_BREAKPOINT: f32 = 768.0;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
    pub max_touch_points: u32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            max_touch_points: 0,
        }
    }

    pub fn with_touch_points(mut self, points: u32) -> Self {
        self.max_touch_points = points;
        self
    }

    /// Narrow or multi-touch viewports cannot provide continuous pointer input
    pub fn is_constrained(&self, breakpoint: f32) -> bool {
        self.width <= breakpoint || self.max_touch_points > 1
    }

    pub fn is_mobile(&self) -> bool {
        self.is_constrained(MOBILE_BREAKPOINT)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1440.0, 900.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classification() {
        assert!(Viewport::new(768.0, 1000.0).is_mobile());
        assert!(!Viewport::new(1024.0, 768.0).is_mobile());
        assert!(Viewport::new(1366.0, 1024.0)
            .with_touch_points(5)
            .is_mobile());
        assert!(!Viewport::new(1366.0, 1024.0)
            .with_touch_points(1)
            .is_mobile());
    }
}
