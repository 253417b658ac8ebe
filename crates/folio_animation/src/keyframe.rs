//! Looping keyframe animations
//!
//! Decorative motion that repeats forever: floating stickers, bobbing icons,
//! drifting orbs. Each animated property carries its own evenly spaced
//! keyframe track, so `y: [0, -4, 0]` and `rotate: [0, 4, -4, 0]` can share
//! one loop.

use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::motion::MotionState;

/// Property animated by a keyframe track
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyframeProperty {
    Opacity,
    X,
    Y,
    Scale,
    Rotate,
}

/// Playback direction for each iteration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayDirection {
    /// Restart from the first keyframe every iteration
    #[default]
    Forward,
    /// Play forward, then backward, alternating (CSS `alternate`)
    Alternate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyframeTrack {
    pub property: KeyframeProperty,
    pub values: Vec<f32>,
}

impl KeyframeTrack {
    pub fn new(property: KeyframeProperty, values: impl Into<Vec<f32>>) -> Self {
        Self {
            property,
            values: values.into(),
        }
    }

    /// Value at `progress` in `0..=1`, keyframes evenly spaced
    pub fn value_at(&self, progress: f32, easing: Easing) -> Option<f32> {
        let first = *self.values.first()?;
        if self.values.len() == 1 {
            return Some(first);
        }

        let segments = (self.values.len() - 1) as f32;
        let scaled = progress.clamp(0.0, 1.0) * segments;
        let index = (scaled.floor() as usize).min(self.values.len() - 2);
        let local = easing.apply(scaled - index as f32);
        let (from, to) = (self.values[index], self.values[index + 1]);
        Some(from + (to - from) * local)
    }
}

/// Infinitely repeating multi-track animation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoopAnimation {
    pub tracks: Vec<KeyframeTrack>,
    pub duration_ms: u32,
    pub delay_ms: u32,
    pub easing: Easing,
    pub direction: PlayDirection,
}

impl LoopAnimation {
    pub fn new(duration_ms: u32) -> Self {
        Self {
            tracks: Vec::new(),
            duration_ms,
            delay_ms: 0,
            easing: Easing::EaseInOut,
            direction: PlayDirection::Forward,
        }
    }

    /// Builder: add a keyframe track
    pub fn track(mut self, property: KeyframeProperty, values: impl Into<Vec<f32>>) -> Self {
        self.tracks.push(KeyframeTrack::new(property, values));
        self
    }

    pub fn with_delay(mut self, delay_ms: u32) -> Self {
        self.delay_ms = delay_ms;
        self
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn alternate(mut self) -> Self {
        self.direction = PlayDirection::Alternate;
        self
    }

    /// Same loop delayed for the item at `index`
    pub fn staggered(&self, index: usize, step_ms: u32) -> Self {
        let step = u32::try_from(index)
            .unwrap_or(u32::MAX)
            .saturating_mul(step_ms);
        self.clone().with_delay(self.delay_ms.saturating_add(step))
    }

    /// Progress through the current iteration
    pub fn progress(&self, elapsed_ms: u64) -> f32 {
        let delay = u64::from(self.delay_ms);
        if elapsed_ms < delay || self.duration_ms == 0 {
            return 0.0;
        }
        let duration = u64::from(self.duration_ms);
        let since = elapsed_ms - delay;
        let iteration = since / duration;
        let phase = (since % duration) as f32 / duration as f32;
        match self.direction {
            PlayDirection::Forward => phase,
            PlayDirection::Alternate if iteration % 2 == 1 => 1.0 - phase,
            PlayDirection::Alternate => phase,
        }
    }

    /// Pose at `elapsed_ms`; untracked properties stay at rest
    pub fn sample(&self, elapsed_ms: u64) -> MotionState {
        let progress = self.progress(elapsed_ms);
        let mut state = MotionState::VISIBLE;
        for track in &self.tracks {
            let Some(value) = track.value_at(progress, self.easing) else {
                continue;
            };
            match track.property {
                KeyframeProperty::Opacity => state.opacity = value,
                KeyframeProperty::X => state.x = value,
                KeyframeProperty::Y => state.y = value,
                KeyframeProperty::Scale => state.scale = value,
                KeyframeProperty::Rotate => state.rotate = value,
            }
        }
        state
    }
}
