//! Synthwave: neon magenta and cyan over a retro horizon

use std::sync::Arc;

use folio_animation::{AnimationVariant, Easing, GradientCycle, MotionState, StaggerSpec, Transition};
use folio_core::Color;

use super::shared::{self, LinkBase};
use crate::background::SynthwaveBackground;
use crate::registry::ThemeId;
use crate::theme::ThemeConfig;
use crate::tokens::*;

const RADIUS: &str = "rounded-2xl sm:rounded-[1.5rem] md:rounded-[2rem]";

pub(crate) fn theme() -> ThemeConfig {
    ThemeConfig {
        id: ThemeId::Synthwave,
        name: ThemeId::Synthwave.display_name().into(),
        colors: ThemeColors {
            background: Color::from_hex(0x0A0014),
            text: Color::from_hex(0xF0E6FF),
            card_background: Color::from_hex(0x1A0033).with_alpha(0.8),
            card_border: Color::from_hex(0xFF006E),
            accent_primary: Color::from_hex(0xFF006E),
            accent_secondary: Color::from_hex(0x00F5FF),
        },
        fonts: ThemeFonts::new(
            r#""Orbitron", "Exo 2", "Rajdhani", -apple-system, sans-serif"#,
            r#""Rajdhani", "Exo 2", -apple-system, sans-serif"#,
        )
        .with_mono(r#""Share Tech Mono", "Courier New", monospace"#),
        card: CardStyles {
            container_class: "relative z-10 w-full max-w-md space-y-4 rounded-2xl border-2 border-[#FF006E] bg-gradient-to-br from-[#1a0033]/95 via-[#2d004d]/90 to-[#1a0033]/95 p-[1.125rem] shadow-[0_0_30px_0_rgba(255,0,110,0.4),0_0_60px_0_rgba(0,245,255,0.2),inset_0_0_40px_0_rgba(255,0,255,0.1)] backdrop-blur-xl sm:max-w-2xl sm:space-y-8 sm:rounded-[1.5rem] sm:border-[3px] sm:p-[1.75rem] sm:shadow-[0_0_40px_0_rgba(255,0,110,0.5),0_0_80px_0_rgba(0,245,255,0.3),inset_0_0_50px_0_rgba(255,0,255,0.15)] md:space-y-10 md:rounded-[2rem] md:p-[2.25rem] md:border-[3px]".into(),
            border_class: "border-2 border-[#FF006E] sm:border-[3px]".into(),
            shadow_class: "shadow-[0_0_30px_0_rgba(255,0,110,0.4),0_0_60px_0_rgba(0,245,255,0.2)] md:shadow-[0_0_40px_0_rgba(255,0,110,0.5),0_0_80px_0_rgba(0,245,255,0.3)]".into(),
            background_class: "bg-gradient-to-br from-[#1a0033]/95 via-[#2d004d]/90 to-[#1a0033]/95 backdrop-blur-xl".into(),
            glass_effect: Some("backdrop-blur-xl".into()),
            gradient: GradientCycle::new(
                [
                    "radial-gradient(circle at 20% 30%, rgba(255, 0, 110, 0.25) 0%, transparent 50%)",
                    "radial-gradient(circle at 80% 70%, rgba(0, 245, 255, 0.2) 0%, transparent 50%)",
                    "radial-gradient(circle at 50% 50%, rgba(181, 55, 242, 0.18) 0%, transparent 60%)",
                    "radial-gradient(circle at 70% 20%, rgba(255, 107, 0, 0.15) 0%, transparent 55%)",
                    "radial-gradient(circle at 20% 30%, rgba(255, 0, 110, 0.25) 0%, transparent 50%)",
                ],
                16_000,
            )
            .with_radius_class(RADIUS),
            overlays: vec![shared::glare_sheen(RADIUS)],
        },
        badge: BadgeStyles {
            container_class: "relative z-10 inline-flex items-center gap-1.5 rounded-full border-2 border-[#00F5FF] bg-gradient-to-r from-[#FF006E]/20 to-[#00F5FF]/20 px-3 py-1.5 text-[0.6rem] font-bold uppercase tracking-[0.25em] text-[#00F5FF] sm:gap-2 sm:px-4 sm:py-2 sm:text-[0.65rem] sm:tracking-[0.3em] shadow-[0_0_15px_0_rgba(0,245,255,0.6),inset_0_0_10px_0_rgba(255,0,110,0.3)]".into(),
            dot_class: "h-1.5 w-1.5 rounded-full bg-[#00F5FF] animate-pulse sm:h-2 sm:w-2 shadow-[0_0_8px_2px_rgba(0,245,255,1)]".into(),
        },
        heading: HeadingStyles {
            title_class: "text-[1.875rem] font-black leading-[1.05] tracking-tight text-transparent bg-clip-text bg-gradient-to-r from-[#FF006E] via-[#FF00FF] to-[#00F5FF] sm:text-4xl md:text-5xl lg:text-6xl drop-shadow-[0_0_20px_rgba(255,0,110,0.8)]".into(),
            bio_class: "max-w-xl text-[0.875rem] font-medium leading-[1.65] text-[#E0D4FF] sm:text-base md:text-xl drop-shadow-[0_0_5px_rgba(224,212,255,0.3)]".into(),
        },
        links: shared::links(LinkBase {
            container: "group relative flex flex-col gap-0.5 overflow-hidden rounded-xl border-2 border-[#FF006E]/40 bg-gradient-to-br from-[#1a0033]/80 to-[#2d004d]/60 px-3 py-3 transition-all duration-300 hover:border-[#00F5FF] hover:bg-gradient-to-br hover:from-[#2d004d]/90 hover:to-[#4d007d]/70 sm:px-4 sm:py-4 hover:shadow-[0_0_25px_0_rgba(0,245,255,0.5),inset_0_0_20px_0_rgba(255,0,110,0.2)] backdrop-blur-sm",
            label: "text-[0.875rem] font-bold tracking-wide text-[#00F5FF] sm:text-base drop-shadow-[0_0_8px_rgba(0,245,255,0.8)]",
            caption: "text-[0.65rem] font-medium leading-[1.4] text-[#B8A8FF] sm:text-xs",
            icon_container: "flex h-6 w-6 items-center justify-center rounded-lg border-2 border-[#FF006E]/60 bg-gradient-to-br from-[#FF006E]/30 to-[#B537F2]/30 sm:h-7 sm:w-7 shadow-[0_0_10px_0_rgba(255,0,110,0.5)]",
            hover_effect: "border-[#00F5FF] bg-gradient-to-br from-[#00F5FF]/30 to-[#B537F2]/30 shadow-[0_0_15px_0_rgba(0,245,255,0.7)]",
        }),
        location: shared::location(
            "relative z-10 flex items-center gap-1.5 text-[0.65rem] font-medium text-[#B8A8FF] sm:gap-3 sm:text-sm",
            "relative flex h-7 w-7 items-center justify-center overflow-hidden rounded-xl border-2 border-[#FF006E] bg-gradient-to-br from-[#FF006E]/30 to-[#B537F2]/30 sm:h-10 sm:w-10 sm:rounded-2xl shadow-[0_0_15px_0_rgba(255,0,110,0.6),inset_0_0_10px_0_rgba(181,55,242,0.4)]",
            "text-[0.75rem] font-semibold leading-[1.4] tracking-wide text-[#00F5FF] sm:text-sm drop-shadow-[0_0_8px_rgba(0,245,255,0.6)]",
        ),
        project_link: ProjectLinkStyles {
            link_class: "font-bold text-[#00F5FF] underline decoration-2 decoration-[#FF006E] underline-offset-4 transition-all hover:text-[#FF00FF] hover:decoration-[#00F5FF] drop-shadow-[0_0_8px_rgba(0,245,255,0.8)]".into(),
            text_class: "max-w-xl text-[0.875rem] font-medium leading-[1.65] text-[#E0D4FF] sm:text-base md:text-xl".into(),
        },
        page: shared::page(),
        animations: neon_pop(),
        interaction: InteractionConfig {
            card_tilt_max: 8.0,
            card_glare_rest: GlarePoint::CENTER,
            card_scale_min: 0.75,
            enable_card_tilt: true,
            enable_glare_effect: true,
            pointer_velocity_multiplier: 0.4,
        },
        mobile: MobileConfig {
            background: "linear-gradient(180deg, #0a0014 0%, #1a0033 35%, #2d004d 60%, #1a0033 85%, #0a0014 100%)".into(),
            disable_animations: false,
        },
        sections: shared::lifestyle_placeholder(),
        background: Arc::new(SynthwaveBackground::new()),
    }
}

/// Overshooting entrances; links slide in from the left
fn neon_pop() -> ThemeAnimations {
    ThemeAnimations {
        badge: AnimationVariant::new(
            MotionState::HIDDEN.with_scale(0.8).with_y(-20.0),
            MotionState::VISIBLE,
            Transition::new(700, 100, Easing::BACK_OUT),
        ),
        heading: AnimationVariant::new(
            MotionState::HIDDEN.with_y(30.0).with_scale(0.95),
            MotionState::VISIBLE,
            Transition::new(900, 200, Easing::BACK_OUT),
        ),
        body: AnimationVariant::fade_from(
            0.0,
            20.0,
            Transition::new(800, 400, Easing::CubicBezier(0.25, 0.46, 0.45, 0.94)),
        ),
        links: StaggerSpec {
            initial: MotionState::HIDDEN.with_x(-30.0).with_scale(0.9),
            animate: MotionState::VISIBLE,
            base_delay_ms: 500,
            step_ms: 100,
            duration_ms: 700,
            easing: Easing::BACK_OUT,
        },
    }
}
