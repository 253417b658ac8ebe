//! Token groups shared by several themes

use folio_animation::{
    AnimationVariant, Easing, Gesture, KeyframeProperty, LoopAnimation, MotionState, StaggerSpec,
    Transition,
};

use crate::sections::{Section, SectionTable};
use crate::tokens::*;

pub(super) const LIFESTYLE_PLACEHOLDER: &str = "Lifestyle section - theme not implemented";

/// Every section but lifestyle is fully rendered
pub(super) fn lifestyle_placeholder() -> SectionTable {
    SectionTable::new().placeholder(Section::Lifestyle, LIFESTYLE_PLACEHOLDER)
}

/// Soft rise: long expo settle, links cascade from below
pub(super) fn soft_rise() -> ThemeAnimations {
    ThemeAnimations {
        badge: AnimationVariant::fade_from(0.0, 16.0, Transition::new(900, 100, Easing::EASE)),
        heading: AnimationVariant::fade_from(0.0, 24.0, Transition::new(1_000, 250, Easing::EXPO_OUT)),
        body: AnimationVariant::fade_from(0.0, 20.0, Transition::new(1_000, 500, Easing::EaseOut)),
        links: StaggerSpec {
            initial: MotionState::HIDDEN.with_y(24.0),
            animate: MotionState::VISIBLE,
            base_delay_ms: 650,
            step_ms: 120,
            duration_ms: 850,
            easing: Easing::CubicBezier(0.25, 0.8, 0.25, 1.0),
        },
    }
}

/// Quick slide: badge enters from the left, short quint settle
pub(super) fn quick_slide() -> ThemeAnimations {
    ThemeAnimations {
        badge: AnimationVariant::fade_from(-20.0, 0.0, Transition::new(600, 100, Easing::QUINT_OUT)),
        heading: AnimationVariant::fade_from(0.0, 20.0, Transition::new(800, 200, Easing::QUINT_OUT)),
        body: AnimationVariant::fade_from(0.0, 20.0, Transition::new(800, 400, Easing::QUINT_OUT)),
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

pub(super) fn glare_sheen(radius_class: &str) -> CardOverlay {
    CardOverlay::Sheen(SheenOverlay {
        template: "radial-gradient(90% 90% at {x}% {y}%, rgba(255, 255, 255, 0.25), transparent 70%), radial-gradient(140% 140% at {y}% {x}%, rgba(0, 122, 255, 0.05), transparent 80%)".into(),
        radius_class: radius_class.into(),
        blend_mode: "screen".into(),
        rest_opacity: 0.15,
        active_opacity: 0.35,
        mobile_opacity: 0.15,
        mobile_blend_mode: "normal".into(),
    })
}

/// Base link classes every theme supplies itself
pub(super) struct LinkBase {
    pub container: &'static str,
    pub label: &'static str,
    pub caption: &'static str,
    pub icon_container: &'static str,
    pub hover_effect: &'static str,
}

/// Link chrome with the translucent copy button and wobbling arrow
pub(super) fn links(base: LinkBase) -> LinkStyles {
    LinkStyles {
        container_class: base.container.into(),
        label_class: base.label.into(),
        caption_class: base.caption.into(),
        icon_container_class: base.icon_container.into(),
        hover_effect: base.hover_effect.into(),
        kind_style: ByLinkKind::default(),
        icon_style: InlineStyle::new(),
        copy_button_class: "flex h-6 w-6 items-center justify-center rounded-full border border-white/20 bg-white/10 transition-colors hover:bg-white/20 sm:h-7 sm:w-7".into(),
        copy_icon_class: "h-3 w-3 text-cyan-200 sm:h-3.5 sm:w-3.5".into(),
        check_icon_class: "h-3 w-3 text-green-400 sm:h-3.5 sm:w-3.5".into(),
        arrow_container_class: base.icon_container.into(),
        arrow_class: "text-xs text-cyan-200 transition-transform duration-500 group-hover:translate-x-0.5".into(),
        arrow_loop: LoopAnimation::new(6_000).track(KeyframeProperty::Rotate, [0.0, 6.0, -4.0, 0.0]),
        arrow_stagger_ms: 400,
        hover_accent_class: "pointer-events-none absolute inset-x-4 bottom-0 h-px bg-gradient-to-r from-transparent via-white/70 to-transparent opacity-0 transition-opacity duration-500 group-hover:opacity-100".into(),
        motion: LinkMotion {
            link: ByLinkKind::both(Gesture {
                hover: Some(MotionState::VISIBLE.with_y(-2.0).with_scale(1.01)),
                tap: Some(MotionState::VISIBLE.with_scale(0.99)),
                spring: None,
            }),
            icon: Gesture {
                hover: Some(MotionState::VISIBLE.with_scale(1.1)),
                tap: Some(MotionState::VISIBLE.with_scale(0.95)),
                spring: None,
            },
        },
    }
}

/// Location row with the blue pin and soft gradient glow
pub(super) fn location(container: &str, icon_container: &str, text: &str) -> LocationStyles {
    LocationStyles {
        container_class: container.into(),
        icon_container_class: icon_container.into(),
        text_class: text.into(),
        icon_class: "h-4 w-4 text-blue-600 sm:h-5 sm:w-5".into(),
        icon_glow_class: "absolute inset-0 bg-gradient-to-br from-blue-500/10 via-transparent to-purple-500/10".into(),
        icon_loop: LoopAnimation::new(3_000).track(KeyframeProperty::Y, [0.0, -2.0, 0.0]),
        glow_loop: LoopAnimation::new(5_000).track(KeyframeProperty::Opacity, [0.7, 0.3, 0.7]),
    }
}

/// Frosted page chrome: light container, glass form and player
pub(super) fn page() -> PageStyles {
    PageStyles {
        container_class: "relative flex min-h-[100dvh] items-center justify-center overflow-hidden bg-[#F5F5FA] px-4 py-20 text-slate-900 sm:px-6 sm:py-24 md:py-12".into(),
        desktop_background: None,
        section_class: "relative flex min-h-[100dvh] w-full flex-col items-center justify-center overflow-hidden px-4 py-20 sm:px-6 sm:py-24".into(),
        section_heading_class: "text-2xl font-semibold text-fuchsia-400 sm:text-3xl md:text-4xl".into(),
        section_card_class: "relative w-full max-w-5xl rounded-[1.5rem] border border-white/20 bg-gradient-to-br from-fuchsia-400/20 via-purple-400/20 to-pink-400/20 p-6 backdrop-blur-[24px] shadow-[0_8px_32px_0_rgba(0,0,0,0.15),0_0_0_1px_rgba(255,255,255,0.1)_inset] sm:rounded-[2rem] sm:p-8 md:p-10".into(),
        placeholder_class: "rounded-xl border border-dashed border-white/30 bg-white/5 p-6 text-center text-sm text-slate-400".into(),
        tooltip_class: "rounded-xl border border-white/40 bg-white/20 px-3 py-1 text-[0.7rem] font-semibold uppercase tracking-[0.22em] text-slate-800 shadow-[0_6px_24px_0_rgba(0,0,0,0.3),0_0_0_0.5px_rgba(255,255,255,0.2)_inset] backdrop-blur-xl md:px-4 md:py-1.5 md:text-xs".into(),
        selector_container_class: "md:mix-blend-difference".into(),
        selector_button_class: "group relative flex h-14 w-14 items-center justify-center rounded-xl border transition-all duration-300 md:h-16 md:w-16 md:rounded-2xl".into(),
        selector_idle_class: "border-black/40 bg-white/60 shadow-[3px_3px_0_0_rgba(0,0,0,0.2)] backdrop-blur-sm hover:shadow-[4px_4px_0_0_rgba(0,0,0,0.3)] md:shadow-[4px_4px_0_0_rgba(0,0,0,0.2)] md:hover:shadow-[6px_6px_0_0_rgba(0,0,0,0.3)]".into(),
        selector_active_class: "border-emerald-400/60 bg-emerald-500/20 shadow-[0_6px_24px_0_rgba(16,185,129,0.4)] backdrop-blur-xl scale-110 md:shadow-[0_8px_32px_0_rgba(16,185,129,0.4)]".into(),
        selector_indicator_class: "absolute inset-0 rounded-xl border-2 border-emerald-400/70 md:rounded-2xl".into(),
        activity_graph_theme: "github".into(),
        form: FormStyles {
            container_class: "rounded-xl border border-white/30 bg-amber-400/20 p-6 backdrop-blur-xl shadow-[0_8px_32px_0_rgba(0,0,0,0.3)] sm:rounded-2xl sm:p-8".into(),
            prompt_class: "mb-4 text-base font-medium text-slate-700 sm:text-lg md:text-xl".into(),
            label_class: "mb-2 block text-sm font-semibold text-slate-800 sm:text-base".into(),
            input_class: "w-full rounded-lg border border-white/40 bg-white/20 px-4 py-3 text-slate-800 backdrop-blur-sm shadow-[0_4px_16px_0_rgba(0,0,0,0.2)] transition-all focus:outline-none focus:ring-2 focus:ring-amber-400/50 focus:bg-white/30 sm:px-5 sm:py-4".into(),
            textarea_class: "w-full resize-none rounded-lg border border-white/40 bg-white/20 px-4 py-3 text-slate-800 backdrop-blur-sm shadow-[0_4px_16px_0_rgba(0,0,0,0.2)] transition-all focus:outline-none focus:ring-2 focus:ring-amber-400/50 focus:bg-white/30 sm:px-5 sm:py-4".into(),
            button_class: "w-full rounded-lg border border-white/40 px-6 py-3 text-sm font-semibold text-white shadow-[0_6px_24px_0_rgba(0,0,0,0.3)] backdrop-blur-xl transition-all sm:px-8 sm:py-4 sm:text-base".into(),
            idle_class: "bg-gradient-to-r from-fuchsia-400 to-purple-500 hover:shadow-[0_8px_32px_0_rgba(0,0,0,0.4)] disabled:opacity-50".into(),
            success_class: "bg-gradient-to-r from-green-400 to-green-500 hover:shadow-[0_8px_32px_0_rgba(0,0,0,0.4)]".into(),
            error_class: "bg-gradient-to-r from-red-400 to-red-500 hover:shadow-[0_8px_32px_0_rgba(0,0,0,0.4)]".into(),
        },
        now_playing: NowPlayingStyles {
            container_class: "relative overflow-hidden rounded-xl border border-white/30 bg-white/10 p-2.5 backdrop-blur-xl shadow-[0_8px_32px_0_rgba(0,0,0,0.3)] sm:rounded-2xl sm:p-3".into(),
            artwork_class: "h-10 w-10 shrink-0 rounded-lg border border-white/40 shadow-[0_2px_8px_0_rgba(0,0,0,0.2)] sm:h-12 sm:w-12".into(),
            title_class: "line-clamp-1 text-xs font-semibold text-slate-900 sm:text-sm".into(),
            artist_class: "mt-0.5 line-clamp-1 text-[0.65rem] text-slate-600 sm:text-xs".into(),
            progress_track_class: "absolute bottom-0 left-0 right-0 h-1 bg-white/20".into(),
            progress_bar_class: "h-full bg-gradient-to-r from-fuchsia-400 to-purple-500".into(),
            offline_class: "text-xs font-semibold text-slate-400 sm:text-sm".into(),
        },
        decorations: Vec::new(),
    }
}
