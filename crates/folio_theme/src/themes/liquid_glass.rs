//! Liquid Glass: frosted translucent card over drifting color fields

use std::sync::Arc;

use folio_animation::GradientCycle;
use folio_core::Color;

use super::shared::{self, LinkBase};
use crate::background::LiquidGlassBackground;
use crate::registry::ThemeId;
use crate::theme::ThemeConfig;
use crate::tokens::*;

const RADIUS: &str = "rounded-[1.75rem] sm:rounded-[2rem] md:rounded-[2.5rem]";

pub(crate) fn theme() -> ThemeConfig {
    ThemeConfig {
        id: ThemeId::LiquidGlass,
        name: ThemeId::LiquidGlass.display_name().into(),
        colors: ThemeColors {
            background: Color::from_hex(0x0F172A),
            text: Color::from_hex(0xF1F5F9),
            card_background: Color::WHITE.with_alpha(0.1),
            card_border: Color::WHITE.with_alpha(0.2),
            accent_primary: Color::from_hex(0x67E8F9),
            accent_secondary: Color::from_hex(0xF472B6),
        },
        fonts: ThemeFonts::new(
            r#""Inter", -apple-system, sans-serif"#,
            r#""Inter", -apple-system, sans-serif"#,
        ),
        card: CardStyles {
            container_class: "relative z-10 w-full max-w-md space-y-4 rounded-[1.75rem] border border-white/20 bg-gradient-to-br from-white/[0.15] via-white/[0.08] to-white/[0.12] p-5 shadow-[0_4px_12px_0_rgba(15,23,42,0.28),0_0_0_1px_rgba(255,255,255,0.14)_inset] backdrop-blur-2xl before:pointer-events-none before:absolute before:inset-0 before:rounded-[1.75rem] before:bg-gradient-to-br before:from-white/[0.25] before:via-transparent before:to-transparent before:opacity-40 sm:max-w-2xl sm:space-y-8 sm:rounded-[2rem] sm:p-8 sm:before:rounded-[2rem] sm:before:opacity-50 sm:backdrop-blur-3xl md:space-y-10 md:rounded-[2.5rem] md:p-10 md:shadow-[0_8px_32px_0_rgba(15,23,42,0.37),0_0_0_1px_rgba(255,255,255,0.18)_inset] md:before:rounded-[2.5rem]".into(),
            border_class: "border border-white/20".into(),
            shadow_class: "shadow-[0_4px_12px_0_rgba(15,23,42,0.28),0_0_0_1px_rgba(255,255,255,0.14)_inset] md:shadow-[0_8px_32px_0_rgba(15,23,42,0.37),0_0_0_1px_rgba(255,255,255,0.18)_inset]".into(),
            background_class: "bg-gradient-to-br from-white/[0.15] via-white/[0.08] to-white/[0.12] backdrop-blur-2xl sm:backdrop-blur-3xl".into(),
            glass_effect: Some("backdrop-blur-2xl sm:backdrop-blur-3xl".into()),
            gradient: GradientCycle::new(
                [
                    "radial-gradient(circle at 20% 30%, rgba(94, 234, 212, 0.4) 0%, transparent 50%)",
                    "radial-gradient(circle at 80% 70%, rgba(244, 114, 182, 0.4) 0%, transparent 50%)",
                    "radial-gradient(circle at 40% 80%, rgba(147, 197, 253, 0.4) 0%, transparent 50%)",
                    "radial-gradient(circle at 20% 30%, rgba(94, 234, 212, 0.4) 0%, transparent 50%)",
                ],
                14_000,
            )
            .with_radius_class(RADIUS),
            overlays: vec![shared::glare_sheen(RADIUS)],
        },
        badge: BadgeStyles {
            container_class: "relative z-10 inline-flex items-center gap-1.5 rounded-full border border-white/10 bg-white/10 px-3 py-1.5 text-[0.6rem] font-medium uppercase tracking-[0.18em] text-slate-200 sm:gap-2 sm:px-5 sm:py-2 sm:text-xs sm:tracking-[0.35em]".into(),
            dot_class: "h-1.5 w-1.5 rounded-full bg-cyan-300 drop-shadow-glow sm:h-2 sm:w-2".into(),
        },
        heading: HeadingStyles {
            title_class: "text-[1.875rem] font-semibold leading-[1.05] sm:text-4xl md:text-5xl lg:text-6xl".into(),
            bio_class: "max-w-xl text-[0.875rem] leading-[1.55] text-slate-300 sm:text-base md:text-xl".into(),
        },
        links: shared::links(LinkBase {
            container: "group relative flex flex-col gap-0.5 overflow-hidden rounded-lg border border-white/10 bg-white/5 px-3 py-2 transition-all duration-500 hover:border-white/30 hover:bg-white/10 sm:rounded-xl sm:px-4 sm:py-3",
            label: "text-[0.875rem] font-semibold sm:text-base",
            caption: "text-[0.65rem] leading-[1.2] text-slate-300/70 sm:text-xs",
            icon_container: "flex h-6 w-6 items-center justify-center rounded-full border border-white/20 bg-white/10 sm:h-7 sm:w-7",
            hover_effect: "border-white/30 bg-white/10",
        }),
        location: shared::location(
            "relative z-10 flex items-center gap-1.5 text-[0.65rem] text-slate-400 sm:gap-3 sm:text-sm",
            "relative flex h-7 w-7 items-center justify-center overflow-hidden rounded-lg border border-white/10 bg-white/5 sm:h-10 sm:w-10 sm:rounded-2xl",
            "text-[0.75rem] leading-[1.2] sm:text-sm",
        ),
        project_link: ProjectLinkStyles {
            link_class: "text-cyan-300 transition-colors hover:text-cyan-100".into(),
            text_class: "max-w-xl text-[0.875rem] leading-[1.55] text-slate-300 sm:text-base md:text-xl".into(),
        },
        page: shared::page(),
        animations: shared::soft_rise(),
        interaction: InteractionConfig {
            card_tilt_max: 6.0,
            card_glare_rest: GlarePoint::new(52.0, 48.0),
            card_scale_min: 0.78,
            enable_card_tilt: true,
            enable_glare_effect: true,
            pointer_velocity_multiplier: 0.0012,
        },
        mobile: MobileConfig {
            background: "radial-gradient(140% 140% at 20% 20%, rgba(56, 189, 248, 0.28), transparent 65%), radial-gradient(170% 170% at 80% 60%, rgba(244, 114, 182, 0.24), transparent 70%), linear-gradient(135deg, rgba(15, 23, 42, 0.98), rgba(30, 64, 175, 0.4))".into(),
            disable_animations: false,
        },
        sections: shared::lifestyle_placeholder(),
        background: Arc::new(LiquidGlassBackground::new()),
    }
}
