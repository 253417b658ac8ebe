//! Entrance animation variants
//!
//! A variant pairs an `initial` pose with an `animate` pose and a timed
//! transition between them. Sampling is a pure function of elapsed time, so
//! a render at a given instant is reproducible.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::spring::SpringConfig;

/// Animatable pose of an element
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionState {
    pub opacity: f32,
    pub x: f32,
    pub y: f32,
    pub scale: f32,
    /// Rotation in degrees
    pub rotate: f32,
}

impl MotionState {
    /// Fully visible, untransformed
    pub const VISIBLE: MotionState = MotionState {
        opacity: 1.0,
        x: 0.0,
        y: 0.0,
        scale: 1.0,
        rotate: 0.0,
    };

    /// Transparent, untransformed
    pub const HIDDEN: MotionState = MotionState {
        opacity: 0.0,
        ..MotionState::VISIBLE
    };

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_x(mut self, x: f32) -> Self {
        self.x = x;
        self
    }

    pub fn with_y(mut self, y: f32) -> Self {
        self.y = y;
        self
    }

    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_rotate(mut self, rotate: f32) -> Self {
        self.rotate = rotate;
        self
    }

    pub fn lerp(a: &MotionState, b: &MotionState, t: f32) -> MotionState {
        let mix = |from: f32, to: f32| from + (to - from) * t;
        MotionState {
            opacity: mix(a.opacity, b.opacity),
            x: mix(a.x, b.x),
            y: mix(a.y, b.y),
            scale: mix(a.scale, b.scale),
            rotate: mix(a.rotate, b.rotate),
        }
    }

    /// CSS `transform` value, or `None` for the identity transform
    pub fn to_css_transform(&self) -> Option<String> {
        let mut parts = Vec::new();
        if self.x != 0.0 || self.y != 0.0 {
            parts.push(format!("translate({}px, {}px)", self.x, self.y));
        }
        if self.scale != 1.0 {
            parts.push(format!("scale({})", self.scale));
        }
        if self.rotate != 0.0 {
            parts.push(format!("rotate({}deg)", self.rotate));
        }
        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

impl Default for MotionState {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// Timing of a variant
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Transition {
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
}

impl Transition {
    pub const INSTANT: Transition = Transition {
        duration_ms: 0,
        delay_ms: 0,
        easing: Easing::Linear,
    };

    pub const fn new(duration_ms: u32, delay_ms: u32, easing: Easing) -> Self {
        Self {
            duration_ms,
            delay_ms,
            easing,
        }
    }

    pub fn end_ms(&self) -> u64 {
        u64::from(self.delay_ms) + u64::from(self.duration_ms)
    }
}

/// Initial/animate pose pair with a transition
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationVariant {
    pub initial: MotionState,
    pub animate: MotionState,
    pub transition: Transition,
}

impl AnimationVariant {
    pub const fn new(initial: MotionState, animate: MotionState, transition: Transition) -> Self {
        Self {
            initial,
            animate,
            transition,
        }
    }

    /// Fade in while travelling from `(x, y)` to rest
    pub fn fade_from(x: f32, y: f32, transition: Transition) -> Self {
        Self::new(
            MotionState::HIDDEN.with_x(x).with_y(y),
            MotionState::VISIBLE,
            transition,
        )
    }

    /// Pose at `elapsed_ms` after mount
    pub fn sample(&self, elapsed_ms: u64) -> MotionState {
        let Transition {
            duration_ms,
            delay_ms,
            easing,
        } = self.transition;
        let delay = u64::from(delay_ms);
        if elapsed_ms < delay {
            return self.initial;
        }
        if duration_ms == 0 {
            return self.animate;
        }
        let t = ((elapsed_ms - delay) as f32 / duration_ms as f32).min(1.0);
        MotionState::lerp(&self.initial, &self.animate, easing.apply(t))
    }

    pub fn is_complete(&self, elapsed_ms: u64) -> bool {
        elapsed_ms >= self.transition.end_ms()
    }

    /// Collapse to the final pose with no timing
    pub fn disabled(&self) -> Self {
        Self::new(self.animate, self.animate, Transition::INSTANT)
    }
}

/// Per-index variant generator for list items
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StaggerSpec {
    pub initial: MotionState,
    pub animate: MotionState,
    pub base_delay_ms: u32,
    pub step_ms: u32,
    pub duration_ms: u32,
    pub easing: Easing,
}

impl StaggerSpec {
    /// Variant for the item at `index`
    pub fn variant(&self, index: usize) -> AnimationVariant {
        let step = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(self.step_ms);
        AnimationVariant::new(
            self.initial,
            self.animate,
            Transition::new(
                self.duration_ms,
                self.base_delay_ms.saturating_add(step),
                self.easing,
            ),
        )
    }
}

/// Hover/tap poses for an interactive element
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Gesture {
    pub hover: Option<MotionState>,
    pub tap: Option<MotionState>,
    /// Spring driving the gesture; `None` uses the tween default
    pub spring: Option<SpringConfig>,
}

impl Gesture {
    pub fn pose(&self, hovered: bool, pressed: bool) -> MotionState {
        match (pressed, hovered) {
            (true, _) => self.tap.or(self.hover).unwrap_or_default(),
            (false, true) => self.hover.unwrap_or_default(),
            (false, false) => MotionState::VISIBLE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge() -> AnimationVariant {
        AnimationVariant::fade_from(0.0, 16.0, Transition::new(900, 100, Easing::EASE))
    }

    #[test]
    fn sample_holds_initial_during_delay() {
        assert_eq!(badge().sample(0), badge().initial);
        assert_eq!(badge().sample(99), badge().initial);
    }

    #[test]
    fn sample_reaches_animate() {
        let variant = badge();
        assert_eq!(variant.sample(1_000), MotionState::VISIBLE);
        assert!(variant.is_complete(1_000));
        assert!(!variant.is_complete(999));

        let mid = variant.sample(550);
        assert!(mid.opacity > 0.0 && mid.opacity < 1.0);
        assert!(mid.y > 0.0 && mid.y < 16.0);
    }

    #[test]
    fn disabled_is_static() {
        let disabled = badge().disabled();
        assert_eq!(disabled.sample(0), MotionState::VISIBLE);
        assert!(disabled.is_complete(0));
    }

    #[test]
    fn stagger_offsets_delay() {
        let spec = StaggerSpec {
            initial: MotionState::HIDDEN.with_y(24.0),
            animate: MotionState::VISIBLE,
            base_delay_ms: 650,
            step_ms: 120,
            duration_ms: 850,
            easing: Easing::CubicBezier(0.25, 0.8, 0.25, 1.0),
        };
        assert_eq!(spec.variant(0).transition.delay_ms, 650);
        assert_eq!(spec.variant(2).transition.delay_ms, 890);
        assert_eq!(spec.variant(usize::MAX).transition.delay_ms, u32::MAX);
    }

    #[test]
    fn identity_has_no_transform() {
        assert_eq!(MotionState::VISIBLE.to_css_transform(), None);
        assert_eq!(
            MotionState::VISIBLE.with_y(-8.0).with_rotate(-1.2).to_css_transform(),
            Some("translate(0px, -8px) rotate(-1.2deg)".to_string())
        );
    }

    #[test]
    fn gesture_prefers_tap_when_pressed() {
        let gesture = Gesture {
            hover: Some(MotionState::VISIBLE.with_y(-2.0)),
            tap: Some(MotionState::VISIBLE.with_scale(0.99)),
            spring: None,
        };
        assert_eq!(gesture.pose(true, true).scale, 0.99);
        assert_eq!(gesture.pose(true, false).y, -2.0);
        assert_eq!(gesture.pose(false, false), MotionState::VISIBLE);
    }
}
