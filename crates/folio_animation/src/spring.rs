//! Spring physics
//!
//! Damped harmonic oscillators integrated with fourth-order Runge-Kutta.
//! Springs are interruptible: retargeting keeps the current velocity.

use serde::{Deserialize, Serialize};

/// Spring parameters
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
    pub mass: f32,
}

impl SpringConfig {
    pub const fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
        }
    }

    pub const fn stiff() -> Self {
        Self::new(400.0, 30.0, 1.0)
    }

    pub const fn snappy() -> Self {
        Self::new(300.0, 20.0, 1.0)
    }

    pub const fn gentle() -> Self {
        Self::new(120.0, 14.0, 1.0)
    }

    pub const fn wobbly() -> Self {
        Self::new(180.0, 12.0, 1.0)
    }

    // Card interaction presets

    /// Card rotation toward the pointer
    pub const fn tilt() -> Self {
        Self::new(160.0, 22.0, 1.0)
    }

    /// Glare highlight following the pointer
    pub const fn glare() -> Self {
        Self::new(150.0, 20.0, 1.0)
    }

    /// Fit-to-viewport scale changes
    pub const fn scale() -> Self {
        Self::new(160.0, 24.0, 1.0)
    }

    /// Smoothed pointer speed feeding sheen intensity
    pub const fn pointer_speed() -> Self {
        Self::new(120.0, 24.0, 1.0)
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::gentle()
    }
}

const REST_DISPLACEMENT: f32 = 0.001;
const REST_VELOCITY: f32 = 0.001;
/// Largest integration step; longer frames are subdivided
const MAX_STEP: f32 = 1.0 / 120.0;

/// A single animated scalar
#[derive(Clone, Debug, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f32) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    pub fn config(&self) -> SpringConfig {
        self.config
    }

    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Jump to `value` with no motion
    pub fn snap_to(&mut self, value: f32) {
        self.value = value;
        self.target = value;
        self.velocity = 0.0;
    }

    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < REST_DISPLACEMENT && self.velocity.abs() < REST_VELOCITY
    }

    /// Advance by `dt` seconds
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 || self.is_settled() {
            if self.is_settled() {
                self.value = self.target;
                self.velocity = 0.0;
            }
            return;
        }

        let mut remaining = dt;
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP);
            self.rk4(h);
            remaining -= h;
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    fn acceleration(&self, x: f32, v: f32) -> f32 {
        let SpringConfig {
            stiffness,
            damping,
            mass,
        } = self.config;
        let mass = mass.max(f32::EPSILON);
        (-stiffness * (x - self.target) - damping * v) / mass
    }

    fn rk4(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.acceleration(x, v);

        let k2x = v + k1v * h / 2.0;
        let k2v = self.acceleration(x + k1x * h / 2.0, k2x);

        let k3x = v + k2v * h / 2.0;
        let k3v = self.acceleration(x + k2x * h / 2.0, k3x);

        let k4x = v + k3v * h;
        let k4v = self.acceleration(x + k3x * h, k4x);

        self.value = x + h / 6.0 * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + h / 6.0 * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converges_to_target() {
        let mut spring = Spring::new(SpringConfig::tilt(), 0.0);
        spring.set_target(6.0);
        for _ in 0..240 {
            spring.step(1.0 / 60.0);
        }
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 6.0);
    }

    #[test]
    fn retarget_keeps_velocity() {
        let mut spring = Spring::new(SpringConfig::glare(), 50.0);
        spring.set_target(100.0);
        spring.step(0.05);
        let v = spring.velocity();
        spring.set_target(0.0);
        assert_eq!(spring.velocity(), v);
    }

    #[test]
    fn snap_stops_motion() {
        let mut spring = Spring::new(SpringConfig::scale(), 1.0);
        spring.set_target(0.8);
        spring.step(0.02);
        spring.snap_to(0.9);
        assert!(spring.is_settled());
        assert_eq!(spring.value(), 0.9);
    }

    #[test]
    fn large_frames_are_stable() {
        let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
        spring.set_target(1.0);
        spring.step(2.0);
        assert!(spring.value().is_finite());
        assert!((spring.value() - 1.0).abs() < 0.01);
    }
}
