//! Liquid glass background: drifting radial orbs and a spectral sheen,
//! optionally over a looping video

use folio_animation::{KeyframeProperty, LoopAnimation};

use super::{full_bleed, BackgroundContext, BackgroundLayer, BackgroundRenderer, LayerKind};

const MOBILE_FILL: &str = "radial-gradient(140% 140% at 20% 20%, rgba(56, 189, 248, 0.28), transparent 65%), radial-gradient(170% 170% at 80% 60%, rgba(244, 114, 182, 0.24), transparent 70%), linear-gradient(135deg, rgba(15, 23, 42, 0.98), rgba(30, 64, 175, 0.4))";

/// Resting gradient focus in percent
const FOCUS_X: f32 = 56.0;
const FOCUS_Y: f32 = 42.0;

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "webm", "ogg", "ogv", "mov", "m4v"];

/// Whether `src` is an http(s) URL pointing at a video file
pub fn is_video_source(src: &str) -> bool {
    let src = src.trim();
    let Some(rest) = src
        .strip_prefix("https://")
        .or_else(|| src.strip_prefix("http://"))
    else {
        return false;
    };
    let path = rest.split(['?', '#']).next().unwrap_or_default();
    let Some((host, path)) = path.split_once('/') else {
        return false;
    };
    if host.is_empty() {
        return false;
    }
    path.rsplit_once('.').is_some_and(|(_, ext)| {
        VIDEO_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
    })
}

/// Background for the liquid glass theme
///
/// Without a video source (or with one that is not a usable video URL) the
/// renderer produces the gradient-only stack.
#[derive(Clone, Debug, Default)]
pub struct LiquidGlassBackground {
    video: Option<String>,
}

impl LiquidGlassBackground {
    pub fn new() -> Self {
        Self::default()
    }

    /// Video-backed variant
    pub fn with_video(src: impl Into<String>) -> Self {
        Self {
            video: Some(src.into()),
        }
    }

    /// The video source that will actually be rendered
    pub fn video_source(&self) -> Option<&str> {
        let src = self.video.as_deref()?;
        if is_video_source(src) {
            Some(src.trim())
        } else {
            tracing::debug!(src, "ignoring unusable background video source");
            None
        }
    }

    fn gradient_field(x: f32, y: f32) -> String {
        let (ix, iy) = (100.0 - x, 100.0 - y);
        format!(
            "radial-gradient(165% 165% at {x}% {y}%, rgba(56, 189, 248, 0.32), transparent 62%), \
             radial-gradient(185% 185% at {ix}% {iy}%, rgba(244, 114, 182, 0.28), transparent 68%), \
             radial-gradient(220% 220% at {y}% {ix}%, rgba(129, 140, 248, 0.18), transparent 74%), \
             radial-gradient(260% 260% at 50% 60%, rgba(14, 165, 233, 0.18), transparent 86%)"
        )
    }

    fn spectral_sheen(x: f32, y: f32) -> String {
        let (ix, iy) = (100.0 - x, 100.0 - y);
        let angle = x * 3.6;
        format!(
            "radial-gradient(140% 160% at {iy}% {x}%, rgba(59, 130, 246, 0.14), transparent 62%), \
             radial-gradient(110% 150% at {y}% {ix}%, rgba(236, 72, 153, 0.12), transparent 58%), \
             conic-gradient(from {angle:.1}deg at 50% 50%, rgba(103, 232, 249, 0.16), rgba(244, 114, 182, 0.08), rgba(129, 140, 248, 0.14), rgba(103, 232, 249, 0.16))"
        )
    }

    fn blob(class: &str, x: [f32; 4], y: [f32; 4], scale: [f32; 4], duration_ms: u32) -> BackgroundLayer {
        BackgroundLayer::new(LayerKind::Orb, class).animated(
            LoopAnimation::new(duration_ms)
                .track(KeyframeProperty::X, x)
                .track(KeyframeProperty::Y, y)
                .track(KeyframeProperty::Scale, scale),
        )
    }

    fn video_layers(&self) -> Vec<BackgroundLayer> {
        let Some(src) = self.video_source() else {
            return Vec::new();
        };
        vec![
            BackgroundLayer::new(LayerKind::Video, full_bleed("h-full w-full object-cover"))
                .src(src)
                .style("object-fit", "cover"),
            BackgroundLayer::new(LayerKind::Fill, full_bleed("bg-slate-950/40 backdrop-blur-sm")),
        ]
    }

    fn mobile(&self) -> Vec<BackgroundLayer> {
        let mut layers = vec![
            BackgroundLayer::new(LayerKind::Fill, full_bleed("opacity-95")).style("background", MOBILE_FILL),
        ];
        layers.extend(self.video_layers());
        layers.extend([
            Self::blob(
                "absolute left-[-10%] top-[10%] h-48 w-48 rounded-full bg-cyan-400/30 blur-2xl",
                [0.0, 20.0, -15.0, 0.0],
                [0.0, 15.0, -10.0, 0.0],
                [1.0, 1.08, 0.96, 1.0],
                16_000,
            ),
            Self::blob(
                "absolute right-[-8%] top-[25%] h-40 w-40 rounded-full bg-fuchsia-400/25 blur-2xl",
                [0.0, -18.0, 12.0, 0.0],
                [0.0, 12.0, -8.0, 0.0],
                [1.0, 0.94, 1.06, 1.0],
                18_000,
            ),
            Self::blob(
                "absolute left-[10%] bottom-[15%] h-52 w-52 rounded-full bg-blue-400/20 blur-2xl",
                [0.0, -15.0, 18.0, 0.0],
                [0.0, -12.0, 10.0, 0.0],
                [1.0, 1.05, 0.98, 1.0],
                20_000,
            ),
            Self::blob(
                "absolute right-[8%] bottom-[20%] h-44 w-44 rounded-full bg-purple-400/25 blur-2xl",
                [0.0, 15.0, -12.0, 0.0],
                [0.0, -10.0, 15.0, 0.0],
                [1.0, 0.96, 1.04, 1.0],
                22_000,
            ),
            BackgroundLayer::new(LayerKind::Gradient, full_bleed("mix-blend-overlay"))
                .style(
                    "background",
                    "radial-gradient(circle at 50% 50%, rgba(103, 232, 249, 0.15), transparent 60%)",
                )
                .animated(
                    LoopAnimation::new(12_000).track(KeyframeProperty::Opacity, [0.6, 0.8, 0.6]),
                ),
        ]);
        layers
    }

    fn desktop(&self, ctx: &BackgroundContext) -> Vec<BackgroundLayer> {
        let mut layers = self.video_layers();
        layers.extend([
            Self::blob(
                "absolute -left-24 top-[-8rem] h-96 w-96 rounded-full bg-cyan-500/20 blur-3xl",
                [0.0, 30.0, -20.0, 0.0],
                [0.0, 20.0, -10.0, 0.0],
                [1.0, 1.05, 0.95, 1.0],
                18_000,
            )
            .parallax(ctx.parallax(-80.0)),
            Self::blob(
                "absolute bottom-[-12rem] right-[-6rem] h-[28rem] w-[28rem] rounded-full bg-fuchsia-500/20 blur-3xl",
                [0.0, -40.0, 10.0, 0.0],
                [0.0, -10.0, 25.0, 0.0],
                [1.0, 0.92, 1.04, 1.0],
                22_000,
            )
            .parallax(ctx.parallax(60.0)),
            BackgroundLayer::new(LayerKind::Gradient, full_bleed(""))
                .style("background", Self::gradient_field(FOCUS_X, FOCUS_Y))
                .animated(
                    LoopAnimation::new(14_000).track(KeyframeProperty::Opacity, [0.8, 0.92, 0.8]),
                ),
            BackgroundLayer::new(LayerKind::Gradient, full_bleed("mix-blend-screen"))
                .style("background", Self::spectral_sheen(FOCUS_X, FOCUS_Y))
                .style("opacity", "0.28")
                .animated(
                    LoopAnimation::new(16_000)
                        .track(KeyframeProperty::Rotate, [0.0, 1.8, 0.0])
                        .track(KeyframeProperty::Scale, [1.01, 1.04, 1.01]),
                ),
        ]);
        layers
    }
}

impl BackgroundRenderer for LiquidGlassBackground {
    fn name(&self) -> &'static str {
        if self.video_source().is_some() {
            "liquid_glass_video"
        } else {
            "liquid_glass"
        }
    }

    fn render(&self, ctx: &BackgroundContext) -> Vec<BackgroundLayer> {
        if ctx.is_mobile {
            self.mobile()
        } else {
            self.desktop(ctx)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn video_source_validation() {
        assert!(is_video_source("https://cdn.example.com/loop.mp4"));
        assert!(is_video_source("http://cdn.example.com/a/b/loop.WEBM?v=2#t"));
        assert!(!is_video_source("ftp://cdn.example.com/loop.mp4"));
        assert!(!is_video_source("https://cdn.example.com/loop.png"));
        assert!(!is_video_source("https:///loop.mp4"));
        assert!(!is_video_source("/videos/loop.mp4"));
        assert!(!is_video_source(""));
    }

    #[test]
    fn invalid_video_degrades_to_gradient_stack() {
        let plain = LiquidGlassBackground::new();
        let broken = LiquidGlassBackground::with_video("not a url");
        let ctx = BackgroundContext::desktop();
        assert_eq!(plain.render(&ctx), broken.render(&ctx));
        assert_eq!(broken.name(), "liquid_glass");
    }

    #[test]
    fn valid_video_adds_looping_layer() {
        let bg = LiquidGlassBackground::with_video("https://cdn.example.com/glass.mp4");
        let layers = bg.render(&BackgroundContext::desktop());
        assert_eq!(layers[0].kind, LayerKind::Video);
        assert_eq!(layers[0].src.as_deref(), Some("https://cdn.example.com/glass.mp4"));
        assert_eq!(bg.name(), "liquid_glass_video");
    }

    #[test]
    fn gradient_field_uses_focus_point() {
        let field = LiquidGlassBackground::gradient_field(56.0, 42.0);
        assert!(field.starts_with("radial-gradient(165% 165% at 56% 42%"));
        assert!(field.contains("at 44% 58%"));
    }
}
