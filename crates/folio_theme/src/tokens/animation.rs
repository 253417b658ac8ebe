//! Entrance animation tokens

use folio_animation::{AnimationVariant, StaggerSpec};
use serde::{Deserialize, Serialize};

/// The four entrance animations every theme supplies
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThemeAnimations {
    pub badge: AnimationVariant,
    pub heading: AnimationVariant,
    pub body: AnimationVariant,
    /// Per-index variant for list items
    pub links: StaggerSpec,
}

impl ThemeAnimations {
    /// Variant for the link at `index`
    pub fn link(&self, index: usize) -> AnimationVariant {
        self.links.variant(index)
    }

    /// Same animations collapsed to their final pose
    pub fn disabled(&self) -> Self {
        let mut links = self.links;
        links.initial = links.animate;
        links.base_delay_ms = 0;
        links.step_ms = 0;
        links.duration_ms = 0;
        Self {
            badge: self.badge.disabled(),
            heading: self.heading.disabled(),
            body: self.body.disabled(),
            links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_animation::{Easing, MotionState, Transition};

    fn animations() -> ThemeAnimations {
        let t = Transition::new(600, 100, Easing::QUINT_OUT);
        ThemeAnimations {
            badge: AnimationVariant::fade_from(-20.0, 0.0, t),
            heading: AnimationVariant::fade_from(0.0, 20.0, t),
            body: AnimationVariant::fade_from(0.0, 20.0, t),
            links: StaggerSpec {
                initial: MotionState::HIDDEN.with_y(10.0),
                animate: MotionState::VISIBLE,
                base_delay_ms: 500,
                step_ms: 80,
                duration_ms: 600,
                easing: Easing::QUINT_OUT,
            },
        }
    }

    #[test]
    fn link_delay_grows_with_index() {
        let a = animations();
        assert_eq!(a.link(0).transition.delay_ms, 500);
        assert_eq!(a.link(3).transition.delay_ms, 740);
    }

    #[test]
    fn disabled_starts_at_rest() {
        let a = animations().disabled();
        assert_eq!(a.badge.sample(0), MotionState::VISIBLE);
        assert_eq!(a.link(5).sample(0), MotionState::VISIBLE);
    }
}
