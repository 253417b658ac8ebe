//! Minimalism: monochrome, square corners, restrained motion

use std::sync::Arc;

use folio_animation::{Gesture, GradientCycle, KeyframeProperty, LoopAnimation, MotionState};
use folio_core::Color;

use super::shared::{self, LinkBase};
use crate::background::MinimalismBackground;
use crate::registry::ThemeId;
use crate::theme::ThemeConfig;
use crate::tokens::*;

const FONT: &str = r#""Helvetica Neue", "Arial", sans-serif"#;

pub(crate) fn theme() -> ThemeConfig {
    ThemeConfig {
        id: ThemeId::Minimalism,
        name: ThemeId::Minimalism.display_name().into(),
        colors: ThemeColors {
            background: Color::from_hex(0x0A0A0A),
            text: Color::WHITE,
            card_background: Color::from_hex(0xFAFAFA),
            card_border: Color::BLACK,
            accent_primary: Color::BLACK,
            accent_secondary: Color::from_hex(0x666666),
        },
        fonts: ThemeFonts::new(FONT, FONT),
        card: CardStyles {
            container_class: "relative z-10 w-full max-w-md space-y-4 rounded-none border-2 border-black bg-white p-[1.125rem] shadow-[0_8px_24px_0_rgba(0,0,0,0.4)] sm:max-w-2xl sm:space-y-8 sm:border-[3px] sm:p-[1.75rem] sm:shadow-[0_12px_32px_0_rgba(0,0,0,0.5)] md:space-y-10 md:p-[2.25rem]".into(),
            border_class: "border-2 border-black sm:border-[3px]".into(),
            shadow_class: "shadow-[0_8px_24px_0_rgba(0,0,0,0.4)] sm:shadow-[0_12px_32px_0_rgba(0,0,0,0.5)]".into(),
            background_class: "bg-white".into(),
            glass_effect: None,
            gradient: GradientCycle::new(
                [
                    "radial-gradient(circle at 20% 30%, rgba(0, 0, 0, 0.08) 0%, transparent 50%)",
                    "radial-gradient(circle at 80% 70%, rgba(120, 120, 120, 0.12) 0%, transparent 50%)",
                    "radial-gradient(circle at 40% 80%, rgba(60, 60, 60, 0.1) 0%, transparent 50%)",
                    "radial-gradient(circle at 20% 30%, rgba(0, 0, 0, 0.08) 0%, transparent 50%)",
                ],
                16_000,
            )
            .with_radius_class("rounded-none"),
            overlays: vec![shared::glare_sheen("rounded-none")],
        },
        badge: BadgeStyles {
            container_class: "relative z-10 inline-flex items-center gap-1.5 rounded-none border-b-2 border-black bg-white px-3 py-1.5 text-[0.6rem] font-semibold uppercase tracking-[0.25em] text-black sm:gap-2 sm:px-4 sm:py-2 sm:text-[0.65rem] sm:tracking-[0.3em]".into(),
            dot_class: "h-1.5 w-1.5 bg-black sm:h-2 sm:w-2".into(),
        },
        heading: HeadingStyles {
            title_class: "text-[1.875rem] font-bold leading-[1.1] tracking-[-0.02em] text-black sm:text-4xl md:text-5xl lg:text-6xl".into(),
            bio_class: "max-w-xl text-[0.875rem] font-normal leading-[1.7] text-neutral-700 sm:text-base md:text-xl".into(),
        },
        links: links(),
        location: shared::location(
            "relative z-10 flex items-center gap-1.5 text-[0.65rem] font-normal text-neutral-700 sm:gap-3 sm:text-sm",
            "relative flex h-7 w-7 items-center justify-center overflow-hidden border-2 border-black bg-white sm:h-10 sm:w-10",
            "text-[0.75rem] font-normal leading-[1.4] tracking-wide text-black sm:text-sm",
        ),
        project_link: ProjectLinkStyles {
            link_class: "font-bold text-black underline decoration-2 underline-offset-4 transition-colors hover:text-neutral-600".into(),
            text_class: "max-w-xl text-[0.875rem] font-normal leading-[1.7] text-neutral-700 sm:text-base md:text-xl".into(),
        },
        page: shared::page(),
        animations: shared::quick_slide(),
        interaction: InteractionConfig {
            card_tilt_max: 2.0,
            card_glare_rest: GlarePoint::CENTER,
            card_scale_min: 0.78,
            enable_card_tilt: true,
            enable_glare_effect: false,
            pointer_velocity_multiplier: 0.0,
        },
        mobile: MobileConfig {
            background: "linear-gradient(135deg, #0A0A0A 0%, #1A1A1A 100%)".into(),
            disable_animations: false,
        },
        sections: shared::lifestyle_placeholder(),
        background: Arc::new(MinimalismBackground),
    }
}

fn links() -> LinkStyles {
    let white = InlineStyle::new().with("background-color", "#FFFFFF");
    LinkStyles {
        kind_style: ByLinkKind::both(white),
        copy_button_class: "flex h-6 w-6 items-center justify-center border-2 border-black bg-white text-black sm:h-7 sm:w-7".into(),
        copy_icon_class: "h-3 w-3 text-black sm:h-3.5 sm:w-3.5".into(),
        check_icon_class: "h-3 w-3 text-black sm:h-3.5 sm:w-3.5".into(),
        arrow_container_class: "flex h-7 w-7 items-center justify-center border-2 border-black bg-white text-black sm:h-10 sm:w-10".into(),
        arrow_class: "text-xs font-semibold text-black transition-transform duration-300 group-hover:translate-x-1 sm:text-sm".into(),
        arrow_loop: LoopAnimation::new(3_000).track(KeyframeProperty::X, [0.0, 2.0, 0.0]),
        arrow_stagger_ms: 200,
        hover_accent_class: "pointer-events-none absolute bottom-0 left-0 right-0 h-px bg-black opacity-0 transition-opacity duration-300 group-hover:opacity-100".into(),
        motion: LinkMotion {
            link: ByLinkKind::both(Gesture {
                hover: Some(MotionState::VISIBLE.with_y(-1.0)),
                tap: Some(MotionState::VISIBLE.with_scale(0.98)),
                spring: None,
            }),
            icon: Gesture {
                hover: Some(MotionState::VISIBLE.with_scale(1.05)),
                tap: Some(MotionState::VISIBLE.with_scale(0.92)),
                spring: None,
            },
        },
        ..shared::links(LinkBase {
            container: "group relative flex flex-col gap-0.5 overflow-hidden border-b-2 border-neutral-200 bg-white px-3 py-3 transition-all duration-300 hover:border-black sm:px-4 sm:py-4",
            label: "text-[0.875rem] font-semibold tracking-wide text-black sm:text-base",
            caption: "text-[0.65rem] font-normal leading-[1.4] text-neutral-600 sm:text-xs",
            icon_container: "flex h-6 w-6 items-center justify-center border border-black/20 bg-white sm:h-7 sm:w-7",
            hover_effect: "border-black",
        })
    }
}
