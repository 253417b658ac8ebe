//! Interaction tuning and constrained-viewport fallback

use serde::{Deserialize, Serialize};

/// Glare position in percent of the card box
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlarePoint {
    pub x: f32,
    pub y: f32,
}

impl GlarePoint {
    pub const CENTER: GlarePoint = GlarePoint { x: 50.0, y: 50.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn is_within_card(&self) -> bool {
        (0.0..=100.0).contains(&self.x) && (0.0..=100.0).contains(&self.y)
    }
}

/// Numeric tuning for the profile card controller
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct InteractionConfig {
    /// Maximum tilt in degrees on either axis
    pub card_tilt_max: f32,
    pub card_glare_rest: GlarePoint,
    /// Lower bound of the fit-to-viewport scale
    pub card_scale_min: f32,
    pub enable_card_tilt: bool,
    pub enable_glare_effect: bool,
    /// Weight of pointer movement in the sheen speed signal; `0` disables it
    pub pointer_velocity_multiplier: f32,
}

impl Default for InteractionConfig {
    fn default() -> Self {
        Self {
            card_tilt_max: 6.0,
            card_glare_rest: GlarePoint::CENTER,
            card_scale_min: 0.78,
            enable_card_tilt: true,
            enable_glare_effect: true,
            pointer_velocity_multiplier: 0.0,
        }
    }
}

/// Fallback used on constrained viewports
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MobileConfig {
    /// CSS background replacing the desktop page background
    pub background: String,
    /// Collapse every entrance animation to its final pose
    pub disable_animations: bool,
}
