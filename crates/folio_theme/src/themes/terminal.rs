//! Terminal: phosphor green on black, monospace everything

use std::sync::Arc;

use folio_animation::GradientCycle;
use folio_core::Color;

use super::shared::{self, LinkBase};
use crate::background::TerminalBackground;
use crate::registry::ThemeId;
use crate::theme::ThemeConfig;
use crate::tokens::*;

const MONO: &str = r#""Courier New", "Courier", "Monaco", monospace"#;

pub(crate) fn theme() -> ThemeConfig {
    ThemeConfig {
        id: ThemeId::Terminal,
        name: ThemeId::Terminal.display_name().into(),
        colors: ThemeColors {
            background: Color::BLACK,
            text: Color::from_hex(0x00FF41),
            card_background: Color::from_hex(0x0A0A0A),
            card_border: Color::from_hex(0x00FF41),
            accent_primary: Color::from_hex(0x00FF41),
            accent_secondary: Color::from_hex(0x00CC33),
        },
        fonts: ThemeFonts::new(MONO, MONO).with_mono(MONO),
        card: CardStyles {
            container_class: "relative z-10 w-full max-w-md space-y-4 rounded-none border-2 border-[#00FF41] bg-black/95 p-[1.125rem] shadow-[0_0_20px_0_rgba(0,255,65,0.3)] sm:max-w-2xl sm:space-y-8 sm:border-[3px] sm:p-[1.75rem] sm:shadow-[0_0_30px_0_rgba(0,255,65,0.4)] md:space-y-10 md:p-[2.25rem] backdrop-blur-sm font-mono".into(),
            border_class: "border-2 border-[#00FF41] sm:border-[3px]".into(),
            shadow_class: "shadow-[0_0_20px_0_rgba(0,255,65,0.3)] sm:shadow-[0_0_30px_0_rgba(0,255,65,0.4)]".into(),
            background_class: "bg-black/95".into(),
            glass_effect: Some("backdrop-blur-sm".into()),
            gradient: GradientCycle::new(
                [
                    "radial-gradient(circle at 20% 30%, rgba(0, 255, 65, 0.15) 0%, transparent 50%)",
                    "radial-gradient(circle at 80% 70%, rgba(0, 204, 51, 0.2) 0%, transparent 50%)",
                    "radial-gradient(circle at 50% 50%, rgba(0, 255, 65, 0.12) 0%, transparent 60%)",
                    "radial-gradient(circle at 20% 30%, rgba(0, 255, 65, 0.15) 0%, transparent 50%)",
                ],
                10_000,
            )
            .with_radius_class("rounded-none"),
            overlays: vec![shared::glare_sheen("rounded-none")],
        },
        badge: BadgeStyles {
            container_class: "relative z-10 inline-flex items-center gap-1.5 rounded-none border border-[#00FF41] bg-black px-3 py-1.5 text-[0.6rem] font-bold uppercase tracking-[0.25em] text-[#00FF41] sm:gap-2 sm:px-4 sm:py-2 sm:text-[0.65rem] sm:tracking-[0.3em] font-mono shadow-[0_0_10px_0_rgba(0,255,65,0.3)]".into(),
            dot_class: "h-1.5 w-1.5 bg-[#00FF41] animate-pulse sm:h-2 sm:w-2 shadow-[0_0_5px_0_rgba(0,255,65,0.8)]".into(),
        },
        heading: HeadingStyles {
            title_class: "text-[1.875rem] font-bold leading-[1.1] tracking-[-0.02em] text-[#00FF41] sm:text-4xl md:text-5xl lg:text-6xl font-mono text-shadow-[0_0_10px_rgba(0,255,65,0.5)]".into(),
            bio_class: "max-w-xl text-[0.875rem] font-normal leading-[1.7] text-[#00CC33] sm:text-base md:text-xl font-mono".into(),
        },
        links: shared::links(LinkBase {
            container: "group relative flex flex-col gap-0.5 overflow-hidden border-b border-[#00FF41]/30 bg-black px-3 py-3 transition-all duration-300 hover:border-[#00FF41] hover:bg-[#00FF41]/5 sm:px-4 sm:py-4 font-mono hover:shadow-[0_0_15px_0_rgba(0,255,65,0.2)]",
            label: "text-[0.875rem] font-semibold tracking-wide text-[#00FF41] sm:text-base font-mono",
            caption: "text-[0.65rem] font-normal leading-[1.4] text-[#00CC33]/80 sm:text-xs font-mono",
            icon_container: "flex h-6 w-6 items-center justify-center border border-[#00FF41]/50 bg-black sm:h-7 sm:w-7 shadow-[0_0_5px_0_rgba(0,255,65,0.3)]",
            hover_effect: "border-[#00FF41] bg-[#00FF41]/5",
        }),
        location: shared::location(
            "relative z-10 flex items-center gap-1.5 text-[0.65rem] font-normal text-[#00CC33] sm:gap-3 sm:text-sm font-mono",
            "relative flex h-7 w-7 items-center justify-center overflow-hidden border-2 border-[#00FF41] bg-black sm:h-10 sm:w-10 shadow-[0_0_10px_0_rgba(0,255,65,0.3)]",
            "text-[0.75rem] font-normal leading-[1.4] tracking-wide text-[#00FF41] sm:text-sm font-mono",
        ),
        project_link: ProjectLinkStyles {
            link_class: "font-bold text-[#00FF41] underline decoration-2 underline-offset-4 transition-colors hover:text-[#00CC33] font-mono hover:shadow-[0_0_5px_0_rgba(0,255,65,0.5)]".into(),
            text_class: "max-w-xl text-[0.875rem] font-normal leading-[1.7] text-[#00CC33] sm:text-base md:text-xl font-mono".into(),
        },
        page: shared::page(),
        animations: shared::quick_slide(),
        interaction: InteractionConfig {
            card_tilt_max: 3.0,
            card_glare_rest: GlarePoint::CENTER,
            card_scale_min: 0.78,
            enable_card_tilt: true,
            enable_glare_effect: true,
            pointer_velocity_multiplier: 0.3,
        },
        mobile: MobileConfig {
            background: "linear-gradient(135deg, #000000 0%, #001a00 100%)".into(),
            disable_animations: false,
        },
        sections: shared::lifestyle_placeholder(),
        background: Arc::new(TerminalBackground::new()),
    }
}
