//! Synthwave background: perspective horizon grid, setting sun, neon orbs
//! and a twinkling starfield

use folio_animation::{Easing, KeyframeProperty, LoopAnimation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{full_bleed, BackgroundContext, BackgroundLayer, BackgroundRenderer, LayerKind};

const MOBILE_FILL: &str =
    "linear-gradient(180deg, #0a0014 0%, #1a0033 35%, #2d004d 60%, #1a0033 85%, #0a0014 100%)";

pub const DESKTOP_STARS: usize = 60;
pub const MOBILE_STARS: usize = 20;

/// Twinkling star
#[derive(Clone, Debug, PartialEq)]
pub struct Star {
    pub left: f32,
    pub top: f32,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

/// Neon glow orb
struct Orb {
    class: &'static str,
    x: [f32; 3],
    y: [f32; 3],
    scale: [f32; 3],
    duration_ms: u32,
    travel: f32,
}

impl Orb {
    fn layer(&self, ctx: &BackgroundContext) -> BackgroundLayer {
        BackgroundLayer::new(LayerKind::Orb, self.class)
            .animated(
                LoopAnimation::new(self.duration_ms)
                    .track(KeyframeProperty::X, self.x)
                    .track(KeyframeProperty::Y, self.y)
                    .track(KeyframeProperty::Scale, self.scale),
            )
            .parallax(ctx.parallax(self.travel))
    }
}

const DESKTOP_ORBS: &[Orb] = &[
    Orb {
        class: "absolute left-[-15%] top-[10%] h-96 w-96 rounded-full bg-[#FF006E] opacity-40 blur-[100px]",
        x: [0.0, 50.0, 0.0],
        y: [0.0, -30.0, 0.0],
        scale: [1.0, 1.2, 1.0],
        duration_ms: 20_000,
        travel: -120.0,
    },
    Orb {
        class: "absolute right-[-10%] top-[25%] h-80 w-80 rounded-full bg-[#00F5FF] opacity-35 blur-[100px]",
        x: [0.0, -40.0, 0.0],
        y: [0.0, 40.0, 0.0],
        scale: [1.0, 1.15, 1.0],
        duration_ms: 18_000,
        travel: -80.0,
    },
    Orb {
        class: "absolute left-[25%] bottom-[-10%] h-[32rem] w-[32rem] rounded-full bg-[#B537F2] opacity-40 blur-[100px]",
        x: [0.0, 30.0, 0.0],
        y: [0.0, -20.0, 0.0],
        scale: [1.0, 1.1, 1.0],
        duration_ms: 22_000,
        travel: 60.0,
    },
    Orb {
        class: "absolute right-[20%] bottom-[10%] h-72 w-72 rounded-full bg-[#FF6B00] opacity-30 blur-[90px]",
        x: [0.0, -30.0, 0.0],
        y: [0.0, 20.0, 0.0],
        scale: [1.0, 1.25, 1.0],
        duration_ms: 24_000,
        travel: 40.0,
    },
];

const MOBILE_ORBS: &[Orb] = &[
    Orb {
        class: "absolute left-[-20%] top-[15%] h-40 w-40 rounded-full bg-[#FF006E] opacity-30 blur-3xl",
        x: [0.0, 20.0, 0.0],
        y: [0.0, -15.0, 0.0],
        scale: [1.0, 1.1, 1.0],
        duration_ms: 12_000,
        travel: 0.0,
    },
    Orb {
        class: "absolute right-[-15%] top-[35%] h-36 w-36 rounded-full bg-[#00F5FF] opacity-25 blur-3xl",
        x: [0.0, -15.0, 0.0],
        y: [0.0, 20.0, 0.0],
        scale: [1.0, 1.15, 1.0],
        duration_ms: 14_000,
        travel: 0.0,
    },
    Orb {
        class: "absolute left-[20%] bottom-[20%] h-44 w-44 rounded-full bg-[#B537F2] opacity-30 blur-3xl",
        x: [0.0, 15.0, 0.0],
        y: [0.0, -10.0, 0.0],
        scale: [1.0, 1.05, 1.0],
        duration_ms: 16_000,
        travel: 0.0,
    },
];

/// Background for the synthwave theme
#[derive(Clone, Copy, Debug)]
pub struct SynthwaveBackground {
    seed: u64,
}

impl Default for SynthwaveBackground {
    fn default() -> Self {
        Self { seed: 0x0A00_14FF }
    }
}

impl SynthwaveBackground {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    pub fn stars(&self, is_mobile: bool) -> Vec<Star> {
        let count = if is_mobile { MOBILE_STARS } else { DESKTOP_STARS };
        let mut rng = StdRng::seed_from_u64(self.seed ^ count as u64);
        let max_duration = if is_mobile { 5_000 } else { 6_000 };
        let max_delay = if is_mobile { 2_000 } else { 3_000 };

        (0..count)
            .map(|_| Star {
                left: rng.gen_range(0.0..100.0),
                top: rng.gen_range(0.0..100.0),
                delay_ms: rng.gen_range(0..max_delay),
                duration_ms: rng.gen_range(2_000..max_duration),
            })
            .collect()
    }

    fn star_layer(star: &Star, is_mobile: bool) -> BackgroundLayer {
        let class = if is_mobile {
            "absolute h-0.5 w-0.5 rounded-full bg-cyan-300"
        } else {
            "absolute h-1 w-1 rounded-full bg-white"
        };
        BackgroundLayer::new(LayerKind::Starfield, class)
            .style("left", format!("{:.2}%", star.left))
            .style("top", format!("{:.2}%", star.top))
            .animated(
                LoopAnimation::new(star.duration_ms)
                    .track(KeyframeProperty::Opacity, [0.2, 1.0, 0.2])
                    .track(KeyframeProperty::Scale, [0.8, 1.2, 0.8])
                    .with_delay(star.delay_ms),
            )
    }

    fn horizon(ctx: &BackgroundContext) -> Vec<BackgroundLayer> {
        vec![
            BackgroundLayer::new(
                LayerKind::Horizon,
                "pointer-events-none absolute bottom-0 left-0 right-0 h-1/2 origin-bottom",
            )
            .style(
                "background-image",
                "linear-gradient(to bottom, rgba(255, 0, 255, 0.4) 1px, transparent 1px), linear-gradient(to right, rgba(0, 245, 255, 0.4) 1px, transparent 1px)",
            )
            .style("background-size", "60px 60px")
            .style("perspective", "400px")
            .style("transform", "rotateX(60deg) translateZ(-100px)")
            .animated(
                LoopAnimation::new(6_000)
                    .track(KeyframeProperty::Y, [0.0, 60.0])
                    .with_easing(Easing::Linear),
            ),
            BackgroundLayer::new(
                LayerKind::Horizon,
                "absolute bottom-0 left-0 right-0 h-1 bg-gradient-to-r from-transparent via-[#FF006E] to-transparent opacity-60 shadow-[0_0_20px_4px_rgba(255,0,110,0.6)]",
            ),
            BackgroundLayer::new(
                LayerKind::Shape,
                "absolute bottom-[15%] left-1/2 h-32 w-32 -translate-x-1/2 rounded-full bg-gradient-to-b from-[#FFD700] via-[#FF6B00] to-[#FF006E] opacity-90 shadow-[0_0_60px_20px_rgba(255,107,0,0.8)]",
            )
            .parallax(ctx.parallax(40.0)),
        ]
    }
}

impl BackgroundRenderer for SynthwaveBackground {
    fn name(&self) -> &'static str {
        "synthwave"
    }

    fn render(&self, ctx: &BackgroundContext) -> Vec<BackgroundLayer> {
        let stars = self.stars(ctx.is_mobile);

        if ctx.is_mobile {
            let mut layers = vec![
                BackgroundLayer::new(LayerKind::Fill, full_bleed("")).style("background", MOBILE_FILL),
            ];
            layers.extend(stars.iter().map(|s| Self::star_layer(s, true)));
            layers.extend(MOBILE_ORBS.iter().map(|o| o.layer(ctx)));
            layers.push(
                BackgroundLayer::new(LayerKind::Grid, full_bleed("opacity-20"))
                    .style(
                        "background-image",
                        "linear-gradient(rgba(255, 0, 255, 0.3) 1px, transparent 1px), linear-gradient(90deg, rgba(255, 0, 255, 0.3) 1px, transparent 1px)",
                    )
                    .style("background-size", "40px 40px"),
            );
            return layers;
        }

        let mut layers = vec![BackgroundLayer::new(
            LayerKind::Fill,
            full_bleed("bg-gradient-to-b from-[#0a0014] via-[#1a0033] via-[#2d004d] to-[#0a0014]"),
        )];
        layers.extend(stars.iter().map(|s| Self::star_layer(s, false)));
        layers.extend(DESKTOP_ORBS.iter().map(|o| o.layer(ctx)));
        layers.extend(Self::horizon(ctx));
        layers.push(BackgroundLayer::new(
            LayerKind::Scanlines,
            full_bleed("bg-[linear-gradient(0deg,transparent_50%,rgba(255,0,255,0.02)_50%)] bg-[length:100%_4px] opacity-60"),
        ));
        layers
    }
}
