//! Looping gradient cycles
//!
//! A card overlay that walks through a list of CSS gradients, evenly spaced
//! over the cycle duration, and loops forever. The last stop usually repeats
//! the first so the loop is seamless.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GradientCycle {
    pub stops: Vec<String>,
    pub duration_ms: u32,
    /// Corner radius class applied to the overlay so it matches the card
    pub radius_class: Option<String>,
}

/// Position within a gradient cycle
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientFrame<'a> {
    pub from: &'a str,
    pub to: &'a str,
    /// Blend factor from `from` toward `to`
    pub blend: f32,
}

impl GradientCycle {
    pub fn new(stops: impl IntoIterator<Item = impl Into<String>>, duration_ms: u32) -> Self {
        Self {
            stops: stops.into_iter().map(Into::into).collect(),
            duration_ms,
            radius_class: None,
        }
    }

    pub fn with_radius_class(mut self, class: impl Into<String>) -> Self {
        self.radius_class = Some(class.into());
        self
    }

    /// A cycle needs at least two stops to animate
    pub fn is_animated(&self) -> bool {
        self.stops.len() >= 2 && self.duration_ms > 0
    }

    /// Frame at `elapsed_ms`, looping. `None` when there are no stops.
    pub fn stop_at(&self, elapsed_ms: u64) -> Option<GradientFrame<'_>> {
        let first = self.stops.first()?;
        if !self.is_animated() {
            return Some(GradientFrame {
                from: first,
                to: first,
                blend: 0.0,
            });
        }

        let segments = self.stops.len() - 1;
        let phase = (elapsed_ms % u64::from(self.duration_ms)) as f32 / self.duration_ms as f32;
        let scaled = phase * segments as f32;
        let index = (scaled.floor() as usize).min(segments - 1);

        Some(GradientFrame {
            from: &self.stops[index],
            to: &self.stops[index + 1],
            blend: scaled - index as f32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cycle() -> GradientCycle {
        GradientCycle::new(["a", "b", "c", "a"], 12_000)
    }

    #[test]
    fn walks_segments_evenly() {
        let c = cycle();
        let f = c.stop_at(0).unwrap();
        assert_eq!((f.from, f.to, f.blend), ("a", "b", 0.0));

        let f = c.stop_at(6_000).unwrap();
        assert_eq!((f.from, f.to), ("b", "c"));
        assert!((f.blend - 0.5).abs() < 1e-5);
    }

    #[test]
    fn loops() {
        let c = cycle();
        assert_eq!(c.stop_at(12_000), c.stop_at(0));
        assert_eq!(c.stop_at(30_000), c.stop_at(6_000));
    }

    #[test]
    fn degenerate_cycles() {
        assert!(GradientCycle::new(Vec::<String>::new(), 1_000)
            .stop_at(5)
            .is_none());
        let single = GradientCycle::new(["only"], 1_000);
        assert!(!single.is_animated());
        assert_eq!(single.stop_at(500).unwrap().to, "only");
    }
}
