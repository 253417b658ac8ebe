//! Property tests for entrance variants and springs

use folio_animation::{AnimationVariant, Easing, MotionState, Spring, SpringConfig, Transition};
use proptest::prelude::*;

fn easings() -> impl Strategy<Value = Easing> {
    prop_oneof![
        Just(Easing::Linear),
        Just(Easing::EaseOut),
        Just(Easing::EaseInOutQuad),
        Just(Easing::EXPO_OUT),
        Just(Easing::QUINT_OUT),
        Just(Easing::EASE),
    ]
}

proptest! {
    /// Non-overshooting curves keep opacity within the initial/animate range
    #[test]
    fn prop_sample_stays_between_poses(
        easing in easings(),
        duration in 1u32..3_000,
        delay in 0u32..1_000,
        y in -50f32..50.0,
        elapsed in 0u64..6_000,
    ) {
        let variant = AnimationVariant::fade_from(0.0, y, Transition::new(duration, delay, easing));
        let pose = variant.sample(elapsed);
        prop_assert!(pose.opacity >= -1e-4 && pose.opacity <= 1.0 + 1e-4);
        prop_assert!(pose.y.abs() <= y.abs() + 1e-3);
    }

    /// Disabled variants never move
    #[test]
    fn prop_disabled_is_constant(elapsed in 0u64..10_000) {
        let variant = AnimationVariant::new(
            MotionState::HIDDEN.with_x(-30.0).with_scale(0.9),
            MotionState::VISIBLE,
            Transition::new(700, 500, Easing::BACK_OUT),
        )
        .disabled();
        prop_assert_eq!(variant.sample(elapsed), MotionState::VISIBLE);
    }

    /// Card springs settle on any target within a few seconds
    #[test]
    fn prop_card_springs_settle(target in -100f32..100.0) {
        for config in [SpringConfig::tilt(), SpringConfig::glare(), SpringConfig::scale(), SpringConfig::pointer_speed()] {
            let mut spring = Spring::new(config, 0.0);
            spring.set_target(target);
            for _ in 0..600 {
                spring.step(1.0 / 60.0);
            }
            prop_assert!(spring.is_settled());
        }
    }
}
