//! Neo-brutalist background: diagonal stripe field and floating stickers

use folio_animation::{KeyframeProperty, LoopAnimation};

use super::{full_bleed, BackgroundContext, BackgroundLayer, BackgroundRenderer, LayerKind};

pub(crate) const STRIPE_FIELD: &str =
    "repeating-linear-gradient(135deg, #FCEE4B 0px, #FCEE4B 120px, #FFF5CC 120px, #FFF5CC 122px)";
const MOBILE_FILL: &str = "linear-gradient(135deg, #FCEE4B 0%, #FFB6C1 50%, #2EC4B6 100%)";

/// Floating sticker shape
struct Sticker {
    class: &'static str,
    background: &'static str,
    size: &'static str,
    clip_path: Option<&'static str>,
    x: &'static [f32],
    y: &'static [f32],
    rotate: &'static [f32],
    duration_ms: u32,
    /// Parallax travel over the scroll window in px
    travel: f32,
}

impl Sticker {
    fn layer(&self, ctx: &BackgroundContext, mirror: bool) -> BackgroundLayer {
        let mut animation = LoopAnimation::new(self.duration_ms)
            .track(KeyframeProperty::X, self.x)
            .track(KeyframeProperty::Y, self.y)
            .track(KeyframeProperty::Rotate, self.rotate);
        if mirror {
            animation = animation.alternate();
        }

        let mut layer = BackgroundLayer::new(LayerKind::Shape, self.class)
            .style("background", self.background)
            .style("width", self.size)
            .style("height", self.size)
            .animated(animation);
        if let Some(clip) = self.clip_path {
            layer = layer.style("clip-path", clip);
        }
        layer.parallax(ctx.parallax(self.travel))
    }
}

const DESKTOP_STICKERS: &[Sticker] = &[
    Sticker {
        class: "absolute -left-32 -top-40 rounded-[2.75rem] border-4 border-black shadow-[24px_24px_0_0_#111] overflow-hidden",
        background: "repeating-linear-gradient(45deg, #FF6F91 0px, #FF6F91 20px, #FFB6C1 20px, #FFB6C1 40px)",
        size: "20rem",
        clip_path: None,
        x: &[0.0, 32.0, -24.0],
        y: &[0.0, 24.0, -16.0],
        rotate: &[-6.0, -3.0, -8.0],
        duration_ms: 20_000,
        travel: -60.0,
    },
    Sticker {
        class: "absolute -bottom-44 right-[-6rem] rounded-[3rem] border-4 border-black shadow-[28px_28px_0_0_#111]",
        background: "linear-gradient(90deg, #111 2px, transparent 2px) 0 0 / 40px 40px, linear-gradient(0deg, #111 2px, transparent 2px) 0 0 / 40px 40px, #2EC4B6",
        size: "26rem",
        clip_path: None,
        x: &[0.0, -40.0, 16.0],
        y: &[0.0, -18.0, 28.0],
        rotate: &[3.0, 6.0, 1.0],
        duration_ms: 24_000,
        travel: 80.0,
    },
    Sticker {
        class: "absolute left-[2%] top-[8%] rounded-[2rem] border-4 border-black shadow-[16px_16px_0_0_#111] overflow-hidden",
        background: "repeating-conic-gradient(#FFDF6B 0% 25%, #FCEE4B 0% 50%) 50% / 40px 40px",
        size: "min(20vw, 12rem)",
        clip_path: None,
        x: &[-32.0, 20.0, -28.0, 16.0],
        y: &[-24.0, 16.0, -20.0, 12.0],
        rotate: &[-8.0, 8.0, -6.0],
        duration_ms: 28_000,
        travel: -120.0,
    },
    Sticker {
        class: "absolute right-[2%] top-[12%] rounded-full border-4 border-black shadow-[14px_14px_0_0_#111] overflow-hidden",
        background: "radial-gradient(circle, #111 15%, transparent 15%) 0 0 / 24px 24px, radial-gradient(circle, #111 15%, transparent 15%) 12px 12px / 24px 24px, #FF6F91",
        size: "min(18vw, 11rem)",
        clip_path: None,
        x: &[20.0, -16.0, 24.0, -12.0],
        y: &[-20.0, 12.0, -24.0, 16.0],
        rotate: &[4.0, -4.0, 2.0],
        duration_ms: 26_000,
        travel: 90.0,
    },
    Sticker {
        class: "absolute left-[3%] bottom-[8%] border-4 border-black shadow-[14px_16px_0_0_#111] overflow-hidden",
        background: "repeating-linear-gradient(90deg, #FF8C42 0px, #FF8C42 16px, #FFA366 16px, #FFA366 32px)",
        size: "min(18vw, 10rem)",
        clip_path: Some("polygon(50% 0%, 100% 90%, 0% 90%)"),
        x: &[-16.0, 24.0, -20.0, 20.0],
        y: &[20.0, -16.0, 24.0, -12.0],
        rotate: &[0.0, 12.0, -8.0],
        duration_ms: 24_000,
        travel: -150.0,
    },
    Sticker {
        class: "absolute top-[3%] left-1/2 -translate-x-1/2 border-4 border-black shadow-[12px_12px_0_0_#111] overflow-hidden",
        background: "repeating-linear-gradient(45deg, transparent, transparent 8px, #111 8px, #111 10px), repeating-linear-gradient(-45deg, transparent, transparent 8px, #111 8px, #111 10px), #FFFBF3",
        size: "min(18vw, 11rem)",
        clip_path: Some("polygon(30% 0%, 70% 0%, 100% 30%, 100% 70%, 70% 100%, 30% 100%, 0% 70%, 0% 30%)"),
        x: &[-20.0, 28.0, -24.0, 24.0],
        y: &[24.0, -20.0, 28.0, -16.0],
        rotate: &[0.0, 10.0, -8.0],
        duration_ms: 34_000,
        travel: 100.0,
    },
];

const MOBILE_STICKERS: &[Sticker] = &[
    Sticker {
        class: "absolute left-[-10%] top-[-5%] border-3 border-black shadow-[8px_8px_0_0_#111] overflow-hidden",
        background: "repeating-linear-gradient(45deg, #FF6F91 0px, #FF6F91 15px, #FFB6C1 15px, #FFB6C1 30px)",
        size: "140px",
        clip_path: None,
        x: &[0.0, 15.0, -10.0, 0.0],
        y: &[0.0, 10.0, -8.0, 0.0],
        rotate: &[-3.0, 2.0, -4.0, -3.0],
        duration_ms: 18_000,
        travel: 0.0,
    },
    Sticker {
        class: "absolute right-[-8%] top-[8%] rounded-full border-3 border-black shadow-[8px_8px_0_0_#111] overflow-hidden",
        background: "radial-gradient(circle, #111 15%, transparent 15%) 0 0 / 16px 16px, radial-gradient(circle, #111 15%, transparent 15%) 8px 8px / 16px 16px, #2EC4B6",
        size: "120px",
        clip_path: None,
        x: &[0.0, -12.0, 8.0, 0.0],
        y: &[0.0, 12.0, -6.0, 0.0],
        rotate: &[2.0, -2.0, 1.0, 2.0],
        duration_ms: 20_000,
        travel: 0.0,
    },
    Sticker {
        class: "absolute left-[5%] bottom-[15%] border-3 border-black shadow-[8px_8px_0_0_#111] overflow-hidden",
        background: "repeating-linear-gradient(90deg, #FF8C42 0px, #FF8C42 12px, #FFA366 12px, #FFA366 24px)",
        size: "110px",
        clip_path: Some("polygon(50% 0%, 100% 90%, 0% 90%)"),
        x: &[0.0, -10.0, 12.0, 0.0],
        y: &[0.0, 8.0, -10.0, 0.0],
        rotate: &[0.0, 8.0, -6.0, 0.0],
        duration_ms: 22_000,
        travel: 0.0,
    },
    Sticker {
        class: "absolute right-[8%] bottom-[8%] rounded-full border-3 border-black shadow-[8px_8px_0_0_#111] overflow-hidden",
        background: "radial-gradient(circle, #FFF7E0 30%, #111 30%, #111 34%, #FFB6C1 34%)",
        size: "100px",
        clip_path: None,
        x: &[0.0, 10.0, -8.0, 0.0],
        y: &[0.0, -8.0, 10.0, 0.0],
        rotate: &[1.0, -6.0, 4.0, 1.0],
        duration_ms: 24_000,
        travel: 0.0,
    },
];

/// Background for the neo-brutalism theme
#[derive(Clone, Copy, Debug, Default)]
pub struct BrutalismBackground;

impl BackgroundRenderer for BrutalismBackground {
    fn name(&self) -> &'static str {
        "brutalism"
    }

    fn render(&self, ctx: &BackgroundContext) -> Vec<BackgroundLayer> {
        if ctx.is_mobile {
            let mut layers = vec![
                BackgroundLayer::new(LayerKind::Fill, full_bleed("opacity-95"))
                    .style("background", MOBILE_FILL),
            ];
            layers.extend(MOBILE_STICKERS.iter().map(|s| s.layer(ctx, false)));
            return layers;
        }

        let mut layers = vec![
            BackgroundLayer::new(LayerKind::Fill, full_bleed("")).style("background", STRIPE_FIELD),
        ];
        layers.extend(DESKTOP_STICKERS.iter().map(|s| s.layer(ctx, true)));
        layers
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_uses_fewer_shapes() {
        let bg = BrutalismBackground;
        let desktop = bg.render(&BackgroundContext::desktop());
        let mobile = bg.render(&BackgroundContext::mobile());
        let shapes = |layers: &[BackgroundLayer]| {
            layers.iter().filter(|l| l.kind == LayerKind::Shape).count()
        };
        assert!(shapes(&mobile) < shapes(&desktop));
        assert_eq!(mobile[0].style.get("background"), Some(MOBILE_FILL));
    }

    #[test]
    fn desktop_stickers_mirror_and_follow_scroll() {
        let bg = BrutalismBackground;
        let layers = bg.render(&BackgroundContext::desktop().with_scroll(0.5));
        let first = &layers[1];
        assert_eq!(first.style.get("transform"), Some("translateY(-30.0px)"));
        let anim = first.animation.as_ref().unwrap();
        assert_eq!(anim.duration_ms, 20_000);
        assert_eq!(anim.direction, folio_animation::PlayDirection::Alternate);
    }
}
