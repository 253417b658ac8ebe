//! Neo Brutalism: thick black outlines, hard offset shadows, candy colors

use std::sync::Arc;

use folio_animation::{Gesture, GradientCycle, KeyframeProperty, LoopAnimation, MotionState, SpringConfig};
use folio_core::Color;

use super::shared::{self, LinkBase};
use crate::background::{BrutalismBackground, STRIPE_FIELD};
use crate::registry::ThemeId;
use crate::sections::{Section, SectionTable};
use crate::theme::ThemeConfig;
use crate::tokens::*;

const RADIUS: &str = "rounded-[1.5rem] sm:rounded-[2.5rem]";

pub(crate) fn theme() -> ThemeConfig {
    ThemeConfig {
        id: ThemeId::Brutalism,
        name: ThemeId::Brutalism.display_name().into(),
        colors: ThemeColors {
            background: Color::from_hex(0xFCEE4B),
            text: Color::from_hex(0x111111),
            card_background: Color::from_hex(0xFFF7E0),
            card_border: Color::from_hex(0x111111),
            accent_primary: Color::from_hex(0xFF6F91),
            accent_secondary: Color::from_hex(0x2EC4B6),
        },
        fonts: ThemeFonts::new(
            r#""Space Grotesk", "Arial Black", sans-serif"#,
            r#""Inter", "Helvetica Neue", sans-serif"#,
        ),
        card: card(),
        badge: BadgeStyles {
            container_class: "relative z-10 inline-flex items-center gap-1.5 rounded-full border-[2.5px] border-black bg-[#FFFBF3] px-3 py-1.5 text-[0.6rem] font-black uppercase tracking-[0.18em] text-[#111] shadow-[3px_3px_0_0_#111] sm:gap-3 sm:border-[3px] sm:px-6 sm:py-3 sm:text-xs sm:tracking-[0.35em] sm:shadow-[6px_6px_0_0_#111]".into(),
            dot_class: "h-1.5 w-1.5 rounded-full bg-[#2EC4B6] ring-2 ring-black sm:h-3 sm:w-3".into(),
        },
        heading: HeadingStyles {
            title_class: "text-[1.875rem] font-black leading-[1.05] sm:text-4xl md:text-5xl lg:text-6xl".into(),
            bio_class: "max-w-xl text-[0.875rem] leading-[1.55] text-[#222] sm:text-base md:text-xl".into(),
        },
        links: links(),
        location: LocationStyles {
            icon_class: "h-4 w-4 text-[#111] sm:h-6 sm:w-6".into(),
            icon_glow_class: "absolute inset-0 rounded-lg bg-[#FFDF6B]/40 sm:rounded-3xl".into(),
            ..shared::location(
                "relative z-10 flex items-center gap-1.5 text-[0.65rem] font-medium text-[#333] sm:gap-3 sm:text-sm",
                "relative flex h-7 w-7 items-center justify-center overflow-hidden rounded-lg border-[2.5px] border-black bg-white shadow-[3px_3px_0_0_#111] sm:h-12 sm:w-12 sm:rounded-3xl sm:border-4 sm:shadow-[8px_8px_0_0_#111]",
                "text-[0.75rem] font-black leading-[1.2] text-[#111] sm:text-base",
            )
        },
        project_link: ProjectLinkStyles {
            link_class: "font-black text-[#111] underline decoration-[3px] decoration-[#111]/80 transition-colors hover:text-[#FF6F91]".into(),
            text_class: "max-w-xl text-[0.875rem] leading-[1.55] text-[#222] sm:text-base md:text-xl".into(),
        },
        page: page(),
        animations: shared::soft_rise(),
        interaction: InteractionConfig {
            card_tilt_max: 6.0,
            card_glare_rest: GlarePoint::new(52.0, 48.0),
            card_scale_min: 0.78,
            enable_card_tilt: true,
            enable_glare_effect: true,
            pointer_velocity_multiplier: 0.0,
        },
        mobile: MobileConfig {
            background: "linear-gradient(135deg, #FCEE4B 0%, #FFB6C1 50%, #2EC4B6 100%)".into(),
            disable_animations: false,
        },
        sections: SectionTable::new(),
        background: Arc::new(BrutalismBackground),
    }
}

fn card() -> CardStyles {
    CardStyles {
        container_class: "relative z-10 w-full max-w-md space-y-4 rounded-[1.5rem] border-[3px] border-black bg-[#FFF7E0] p-[1.125rem] shadow-[8px_8px_0_0_#111] sm:max-w-2xl sm:space-y-8 sm:rounded-[2.5rem] sm:border-4 sm:p-[1.75rem] sm:shadow-[18px_18px_0_0_#111] md:space-y-10 md:p-[2.25rem]".into(),
        border_class: "border-[3px] border-black sm:border-4".into(),
        shadow_class: "shadow-[8px_8px_0_0_#111] sm:shadow-[18px_18px_0_0_#111]".into(),
        background_class: "bg-[#FFF7E0]".into(),
        glass_effect: None,
        gradient: GradientCycle::new(
            [
                "linear-gradient(135deg, rgba(255, 182, 193, 0.4) 0%, transparent 60%)",
                "linear-gradient(135deg, rgba(94, 234, 212, 0.35) 20%, transparent 70%)",
                "linear-gradient(135deg, rgba(92, 124, 250, 0.35) 10%, transparent 65%)",
                "linear-gradient(135deg, rgba(255, 182, 193, 0.4) 0%, transparent 60%)",
            ],
            12_000,
        )
        .with_radius_class(RADIUS),
        overlays: vec![
            CardOverlay::Sheen(SheenOverlay {
                template: "linear-gradient(135deg, rgba(255, 255, 255, 0.45) 0%, rgba(255, 255, 255, 0) 70%), repeating-linear-gradient(135deg, rgba(17, 17, 17, 0.06) 0px, rgba(17, 17, 17, 0.06) 20px, transparent 20px, transparent 40px)".into(),
                radius_class: RADIUS.into(),
                blend_mode: "multiply".into(),
                rest_opacity: 0.2,
                active_opacity: 0.42,
                mobile_opacity: 0.2,
                mobile_blend_mode: "normal".into(),
            }),
            CardOverlay::Pattern(PatternOverlay {
                class: format!("pointer-events-none absolute inset-0 {RADIUS} opacity-20"),
                style: InlineStyle::new()
                    .with("background-image", "radial-gradient(circle, #999 1.5px, transparent 1.5px)")
                    .with("background-size", "16px 16px"),
            }),
        ],
    }
}

fn links() -> LinkStyles {
    let chrome = shared::links(LinkBase {
        container: "group relative flex flex-col gap-0.5 overflow-hidden rounded-xl border-[3px] border-black px-3 py-2 text-[#111] sm:gap-2 sm:rounded-3xl sm:border-4 sm:px-5 sm:py-4",
        label: "text-[0.875rem] font-black sm:text-lg",
        caption: "text-[0.65rem] font-medium leading-[1.2] text-[#333] sm:text-sm",
        icon_container: "flex h-7 w-7 items-center justify-center rounded-lg border-[2.5px] border-black bg-white text-[#111] sm:h-10 sm:w-10 sm:rounded-2xl sm:border-[3px]",
        hover_effect: "6px 6px 0 0 #111",
    });

    let spring = Some(SpringConfig::new(240.0, 20.0, 0.8));
    let lift = |rotate: f32| Gesture {
        hover: Some(MotionState::VISIBLE.with_y(-8.0).with_rotate(rotate)),
        tap: Some(MotionState::VISIBLE.with_scale(0.96)),
        spring,
    };

    LinkStyles {
        kind_style: ByLinkKind {
            link: InlineStyle::new()
                .with("background-color", "#FFFBF3")
                .with("box-shadow", "6px 6px 0 0 #111"),
            email: InlineStyle::new()
                .with("background-color", "#FFB6C1")
                .with("box-shadow", "6px 6px 0 0 #111"),
        },
        icon_style: InlineStyle::new()
            .with("background-color", "#FFFFFF")
            .with("box-shadow", "3px 3px 0 0 #111"),
        copy_button_class: "flex h-7 w-7 items-center justify-center rounded-lg border-[2.5px] border-black text-black sm:h-10 sm:w-10 sm:rounded-2xl sm:border-[3px]".into(),
        copy_icon_class: "h-3 w-3 text-[#111] sm:h-4 sm:w-4".into(),
        check_icon_class: "h-3 w-3 text-[#22B573] sm:h-4 sm:w-4".into(),
        arrow_class: "text-sm font-black sm:text-lg".into(),
        arrow_loop: LoopAnimation::new(5_000)
            .track(KeyframeProperty::Y, [0.0, -4.0, 0.0])
            .track(KeyframeProperty::Rotate, [0.0, 4.0, -4.0, 0.0])
            .alternate(),
        arrow_stagger_ms: 350,
        hover_accent_class: "pointer-events-none absolute inset-x-5 bottom-4 h-2 rounded-full bg-[#111]/10 opacity-0 transition-opacity duration-500 group-hover:opacity-100".into(),
        motion: LinkMotion {
            link: ByLinkKind {
                link: lift(-1.2),
                email: lift(1.2),
            },
            icon: Gesture {
                hover: Some(MotionState::VISIBLE.with_y(-4.0).with_rotate(-3.0)),
                tap: Some(MotionState::VISIBLE.with_scale(0.88)),
                spring,
            },
        },
        ..chrome
    }
}

fn page() -> PageStyles {
    let base = shared::page();
    PageStyles {
        container_class: "relative flex min-h-[100dvh] w-full items-center justify-center overflow-hidden px-4 py-20 text-[#111] sm:px-6 sm:py-24 md:py-8".into(),
        desktop_background: Some(STRIPE_FIELD.into()),
        section_heading_class: "inline-flex rotate-1 items-center gap-2 rounded-xl border-[3px] border-black bg-[#FF6F91] px-4 py-2 text-xs font-black uppercase tracking-wider text-white shadow-[4px_4px_0_0_#111] sm:gap-3 sm:px-6 sm:py-3 sm:text-sm md:text-base".into(),
        section_card_class: "relative w-full max-w-5xl rounded-2xl border-[3px] border-black bg-[#FF8C42] p-6 shadow-[8px_8px_0_0_#111] sm:rounded-3xl sm:border-4 sm:p-8 md:p-10".into(),
        placeholder_class: "rounded-xl border-[3px] border-dashed border-black bg-[#FFFBF3] p-6 text-center text-sm font-black uppercase tracking-wider text-[#111]".into(),
        tooltip_class: "rounded-xl border-[3px] border-black bg-[#FCEE4B] px-3 py-1 text-[0.7rem] font-black uppercase tracking-[0.22em] text-[#111] shadow-[4px_4px_0_0_#111] md:px-4 md:py-1.5 md:text-xs".into(),
        selector_container_class: String::new(),
        selector_button_class: "group relative flex h-14 w-14 items-center justify-center rounded-xl border-[3px] border-black transition-all duration-300 md:h-16 md:w-16 md:rounded-2xl md:border-4".into(),
        selector_idle_class: "bg-white/80 shadow-[3px_3px_0_0_#111] hover:shadow-[4px_4px_0_0_#111] md:shadow-[4px_4px_0_0_#111] md:hover:shadow-[6px_6px_0_0_#111]".into(),
        selector_active_class: "bg-[#10B981] shadow-[5px_5px_0_0_#111] scale-110 md:shadow-[8px_8px_0_0_#111]".into(),
        selector_indicator_class: "absolute inset-0 rounded-xl border-[3px] border-black md:rounded-2xl md:border-4".into(),
        activity_graph_theme: "default".into(),
        form: FormStyles {
            container_class: "relative rounded-xl border-[3px] border-black bg-[#FFD93D] p-6 shadow-[6px_6px_0_0_#111] sm:rounded-2xl sm:p-8".into(),
            prompt_class: "mb-4 text-base font-semibold text-[#111] sm:text-lg md:text-xl".into(),
            label_class: "mb-2 block text-sm font-black uppercase tracking-wider text-[#111] sm:text-base".into(),
            input_class: "w-full rounded-lg border-[3px] border-black bg-[#FFFBF3] px-4 py-3 text-[#111] shadow-[3px_3px_0_0_#111] transition-all focus:outline-none focus:ring-2 focus:ring-[#FF8C42] focus:shadow-[5px_5px_0_0_#111] sm:px-5 sm:py-4".into(),
            textarea_class: "w-full resize-none rounded-lg border-[3px] border-black bg-[#FFFBF3] px-4 py-3 text-[#111] shadow-[3px_3px_0_0_#111] transition-all focus:outline-none focus:ring-2 focus:ring-[#FF8C42] focus:shadow-[5px_5px_0_0_#111] sm:px-5 sm:py-4".into(),
            button_class: "w-full rounded-lg border-[3px] border-black px-6 py-3 text-sm font-black uppercase tracking-wider text-white shadow-[4px_4px_0_0_#111] transition-all sm:px-8 sm:py-4 sm:text-base".into(),
            idle_class: "bg-[#FF6F91] hover:shadow-[6px_6px_0_0_#111] disabled:opacity-50".into(),
            success_class: "bg-[#2EC4B6] hover:shadow-[6px_6px_0_0_#111]".into(),
            error_class: "bg-red-500 hover:shadow-[6px_6px_0_0_#111]".into(),
        },
        now_playing: NowPlayingStyles {
            container_class: "relative overflow-hidden rounded-xl border-[3px] border-black bg-white p-2.5 shadow-[4px_4px_0_0_#111] sm:rounded-2xl sm:p-3".into(),
            artwork_class: "h-10 w-10 shrink-0 rounded border-[2px] border-black shadow-[2px_2px_0_0_#111] sm:h-12 sm:w-12".into(),
            title_class: "line-clamp-1 text-xs font-bold text-[#111] sm:text-sm".into(),
            artist_class: "mt-0.5 line-clamp-1 text-[0.65rem] text-[#666] sm:text-xs".into(),
            progress_track_class: "absolute bottom-0 left-0 right-0 h-1 bg-[#F5F5F5]".into(),
            progress_bar_class: "h-full bg-[#FF6F91]".into(),
            offline_class: "text-xs font-bold text-[#999] sm:text-sm".into(),
        },
        decorations: decorations(),
        ..base
    }
}

/// Scroll-linked shapes floating behind the about and lifestyle sections
fn decorations() -> Vec<Decoration> {
    vec![
        Decoration::new(Section::About, "pointer-events-none absolute left-[6%] top-[12%] h-24 w-24 rounded-full border-4 border-black bg-[#FF6F91] shadow-[8px_8px_0_0_#111]")
            .with_y(100.0, -100.0)
            .with_rotate(0.0, 360.0),
        Decoration::new(Section::About, "pointer-events-none absolute right-[8%] top-[20%] h-20 w-20 rotate-12 border-4 border-black bg-[#2EC4B6] shadow-[8px_8px_0_0_#111]")
            .with_y(200.0, -200.0)
            .with_rotate(0.0, -360.0),
        Decoration::new(Section::About, "pointer-events-none absolute bottom-[18%] left-[10%] h-16 w-16 border-4 border-black bg-[#FCEE4B] shadow-[6px_6px_0_0_#111]")
            .with_y(-50.0, 50.0)
            .with_rotate(0.0, 180.0),
        Decoration::new(Section::About, "pointer-events-none absolute bottom-[10%] right-[14%] h-28 w-28 rounded-[2rem] border-4 border-black bg-[#FFB6C1] shadow-[10px_10px_0_0_#111]")
            .with_y(150.0, -150.0),
        Decoration::new(Section::About, "pointer-events-none absolute left-1/2 top-[6%] h-10 w-10 rounded-full border-4 border-black bg-[#FF8C42]")
            .with_y(-100.0, 100.0),
        Decoration::new(Section::Lifestyle, "pointer-events-none absolute right-[10%] top-[14%] h-20 w-20 rounded-full border-4 border-black bg-[#2EC4B6] shadow-[8px_8px_0_0_#111]")
            .with_y(30.0, -30.0),
        Decoration::new(Section::Lifestyle, "pointer-events-none absolute bottom-[12%] left-[8%] h-16 w-16 border-4 border-black bg-[#FF6F91] shadow-[6px_6px_0_0_#111]")
            .with_y(-20.0, 20.0)
            .with_rotate(0.0, 180.0),
    ]
}
