//! Minimal background: hairline accents and a small dot grid

use folio_animation::{KeyframeProperty, LoopAnimation};

use super::{full_bleed, BackgroundContext, BackgroundLayer, BackgroundRenderer, LayerKind};

const MOBILE_FILL: &str = "linear-gradient(135deg, #0A0A0A 0%, #1A1A1A 100%)";

fn hairline(class: &str) -> BackgroundLayer {
    BackgroundLayer::new(LayerKind::Shape, class)
}

fn dot_grid(class: &str, cells: u32, pitch_px: u32, dot_px: f32, alpha: f32) -> BackgroundLayer {
    let side = cells * pitch_px;
    BackgroundLayer::new(LayerKind::Grid, class)
        .style(
            "background-image",
            format!("radial-gradient(circle, rgba(255, 255, 255, {alpha}) {dot_px}px, transparent {dot_px}px)"),
        )
        .style("background-size", format!("{pitch_px}px {pitch_px}px"))
        .style("width", format!("{side}px"))
        .style("height", format!("{side}px"))
}

/// Background for the minimalism theme
#[derive(Clone, Copy, Debug, Default)]
pub struct MinimalismBackground;

impl BackgroundRenderer for MinimalismBackground {
    fn name(&self) -> &'static str {
        "minimalism"
    }

    fn render(&self, ctx: &BackgroundContext) -> Vec<BackgroundLayer> {
        if ctx.is_mobile {
            return vec![
                BackgroundLayer::new(LayerKind::Fill, full_bleed("")).style("background", MOBILE_FILL),
                hairline("absolute left-0 top-0 h-px w-full bg-gradient-to-r from-transparent via-white/15 to-transparent")
                    .animated(LoopAnimation::new(8_000).track(KeyframeProperty::Opacity, [0.3, 0.6, 0.3])),
                hairline("absolute right-[5%] top-[8%] h-24 w-24 rounded-full border border-white/10").animated(
                    LoopAnimation::new(10_000)
                        .track(KeyframeProperty::Scale, [1.0, 1.05, 1.0])
                        .track(KeyframeProperty::Opacity, [0.4, 0.6, 0.4]),
                ),
                hairline("absolute bottom-[12%] left-[8%] h-20 w-20 rotate-45 border border-white/10").animated(
                    LoopAnimation::new(12_000)
                        .track(KeyframeProperty::Scale, [1.0, 1.08, 1.0])
                        .track(KeyframeProperty::Opacity, [0.3, 0.5, 0.3]),
                ),
                dot_grid("pointer-events-none absolute bottom-[8%] right-[6%]", 3, 12, 2.0, 0.15)
                    .animated(LoopAnimation::new(9_000).track(KeyframeProperty::Opacity, [0.3, 0.5, 0.3])),
            ];
        }

        vec![
            hairline("absolute left-0 top-0 h-px w-full bg-gradient-to-r from-transparent via-white/20 to-transparent"),
            hairline("absolute right-0 top-0 h-full w-px bg-gradient-to-b from-transparent via-white/20 to-transparent"),
            hairline("absolute right-[8%] top-[12%] h-40 w-40 rounded-full border-2 border-white/15")
                .parallax(ctx.parallax(-40.0)),
            hairline("absolute bottom-[18%] left-[10%] h-32 w-32 rotate-45 border-2 border-white/15")
                .parallax(ctx.parallax(40.0)),
            dot_grid("pointer-events-none absolute bottom-10 right-10", 4, 18, 3.0, 0.2),
            hairline("absolute bottom-0 left-0 h-px w-full bg-gradient-to-r from-transparent via-white/15 to-transparent"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn desktop_is_static_linework() {
        let layers = MinimalismBackground.render(&BackgroundContext::desktop());
        assert!(layers.iter().all(|l| l.animation.is_none()));
        assert_eq!(layers.iter().filter(|l| l.kind == LayerKind::Grid).count(), 1);
    }

    #[test]
    fn mobile_breathes() {
        let layers = MinimalismBackground.render(&BackgroundContext::mobile());
        assert_eq!(layers[0].kind, LayerKind::Fill);
        assert!(layers[1..].iter().all(|l| l.animation.is_some()));
    }

    #[test]
    fn dot_grid_size() {
        let grid = dot_grid("g", 4, 18, 3.0, 0.2);
        assert_eq!(grid.style.get("width"), Some("72px"));
        assert_eq!(grid.style.get("background-size"), Some("18px 18px"));
    }
}
