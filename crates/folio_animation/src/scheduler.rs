//! Animation scheduler
//!
//! Owns springs and steps them with the host-provided frame delta.

use slotmap::{new_key_type, SlotMap};

use crate::spring::Spring;

new_key_type! {
    pub struct SpringId;
}

/// The animation scheduler that ticks all active springs
#[derive(Default)]
pub struct AnimationScheduler {
    springs: SlotMap<SpringId, Spring>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_spring(&mut self, spring: Spring) -> SpringId {
        self.springs.insert(spring)
    }

    pub fn get_spring(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id)
    }

    pub fn get_spring_mut(&mut self, id: SpringId) -> Option<&mut Spring> {
        self.springs.get_mut(id)
    }

    pub fn remove_spring(&mut self, id: SpringId) -> Option<Spring> {
        self.springs.remove(id)
    }

    /// Current value of a spring, if it still exists
    pub fn value(&self, id: SpringId) -> Option<f32> {
        self.springs.get(id).map(Spring::value)
    }

    pub fn set_target(&mut self, id: SpringId, target: f32) {
        if let Some(spring) = self.springs.get_mut(id) {
            spring.set_target(target);
        }
    }

    /// Step every spring by `dt` seconds; returns how many are still moving
    pub fn tick(&mut self, dt: f32) -> usize {
        let mut active = 0;
        for (_, spring) in self.springs.iter_mut() {
            spring.step(dt);
            if !spring.is_settled() {
                active += 1;
            }
        }
        tracing::trace!(dt, active, total = self.springs.len(), "springs ticked");
        active
    }

    pub fn has_active_animations(&self) -> bool {
        self.springs.iter().any(|(_, s)| !s.is_settled())
    }

    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }

    pub fn clear(&mut self) {
        self.springs.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spring::SpringConfig;

    #[test]
    fn ticks_all_springs() {
        let mut scheduler = AnimationScheduler::new();
        let a = scheduler.add_spring(Spring::new(SpringConfig::tilt(), 0.0));
        let b = scheduler.add_spring(Spring::new(SpringConfig::glare(), 50.0));

        assert!(!scheduler.has_active_animations());
        scheduler.set_target(a, 4.0);
        scheduler.set_target(b, 80.0);
        assert!(scheduler.has_active_animations());

        assert_eq!(scheduler.tick(1.0 / 60.0), 2);
        for _ in 0..300 {
            scheduler.tick(1.0 / 60.0);
        }
        assert_eq!(scheduler.tick(1.0 / 60.0), 0);
        assert_eq!(scheduler.value(a), Some(4.0));
        assert_eq!(scheduler.value(b), Some(80.0));
        assert!(!scheduler.has_active_animations());

        scheduler.remove_spring(a);
        assert_eq!(scheduler.value(a), None);
        assert_eq!(scheduler.spring_count(), 1);
    }
}
