//! Folio Animation System
//!
//! Spring physics, entrance variants and looping gradient cycles.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Variants**: initial/animate pose pairs sampled at any elapsed time
//! - **Stagger**: per-index variants for list items
//! - **Loops**: infinitely repeating keyframe tracks for decorations
//! - **Gradient Cycles**: looping sequences of CSS gradients
//! - **Interruptible**: springs keep their velocity when retargeted

pub mod easing;
pub mod gradient;
pub mod keyframe;
pub mod motion;
pub mod scheduler;
pub mod spring;

pub use easing::Easing;
pub use gradient::{GradientCycle, GradientFrame};
pub use keyframe::{KeyframeProperty, KeyframeTrack, LoopAnimation, PlayDirection};
pub use motion::{AnimationVariant, Gesture, MotionState, StaggerSpec, Transition};
pub use scheduler::{AnimationScheduler, SpringId};
pub use spring::{Spring, SpringConfig};
