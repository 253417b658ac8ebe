//! Terminal background: falling glyph columns over a phosphor grid

use folio_animation::{Easing, KeyframeProperty, LoopAnimation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{full_bleed, BackgroundContext, BackgroundLayer, BackgroundRenderer, LayerKind};

const MOBILE_FILL: &str = "linear-gradient(135deg, #000000 0%, #001a00 100%)";
const GLYPHS: &str = "01アイウエオカキクケコサシスセソタチツテトナニヌネノハヒフヘホマミムメモヤユヨラリルレロワヲン";
const SCANLINES: &str = "bg-[linear-gradient(0deg,transparent_50%,rgba(0,255,65,0.03)_50%)] bg-[length:100%_4px] opacity-50";

pub const DESKTOP_COLUMNS: usize = 15;
pub const MOBILE_COLUMNS: usize = 8;

/// Distance a glyph falls per iteration, in px
const FALL_PX: f32 = 1080.0;

/// One falling glyph column
#[derive(Clone, Debug, PartialEq)]
pub struct GlyphColumn {
    pub glyph: char,
    /// Horizontal position in percent
    pub x: f32,
    pub delay_ms: u32,
    pub duration_ms: u32,
}

/// Background for the terminal theme
///
/// Glyph selection and timing come from a seeded RNG so the same seed always
/// renders the same columns.
#[derive(Clone, Copy, Debug)]
pub struct TerminalBackground {
    seed: u64,
}

impl Default for TerminalBackground {
    fn default() -> Self {
        Self { seed: 0x00FF_4100 }
    }
}

impl TerminalBackground {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        Self { seed }
    }

    /// Columns for a viewport class
    pub fn columns(&self, is_mobile: bool) -> Vec<GlyphColumn> {
        let count = if is_mobile { MOBILE_COLUMNS } else { DESKTOP_COLUMNS };
        let glyphs: Vec<char> = GLYPHS.chars().collect();
        let mut rng = StdRng::seed_from_u64(self.seed ^ count as u64);

        (0..count)
            .map(|i| GlyphColumn {
                glyph: glyphs[rng.gen_range(0..glyphs.len())],
                x: i as f32 / count as f32 * 100.0,
                delay_ms: rng.gen_range(0..2_000),
                duration_ms: rng.gen_range(8_000..12_000),
            })
            .collect()
    }

    fn column_layer(column: &GlyphColumn, font_px: u32, peak_opacity: f32) -> BackgroundLayer {
        BackgroundLayer::new(LayerKind::GlyphColumn, "absolute top-0 font-mono text-[#00FF41]")
            .style("left", format!("{:.2}%", column.x))
            .style("font-size", format!("{font_px}px"))
            .text(column.glyph.to_string())
            .animated(
                LoopAnimation::new(column.duration_ms)
                    .track(KeyframeProperty::Y, [0.0, FALL_PX])
                    .track(KeyframeProperty::Opacity, [0.0, peak_opacity, peak_opacity, 0.0])
                    .with_easing(Easing::Linear)
                    .with_delay(column.delay_ms),
            )
    }

    fn grid(cell_px: u32, alpha: f32, opacity: f32) -> BackgroundLayer {
        BackgroundLayer::new(LayerKind::Grid, full_bleed(""))
            .style(
                "background-image",
                format!(
                    "linear-gradient(rgba(0, 255, 65, {alpha}) 1px, transparent 1px), linear-gradient(90deg, rgba(0, 255, 65, {alpha}) 1px, transparent 1px)"
                ),
            )
            .style("background-size", format!("{cell_px}px {cell_px}px"))
            .style("opacity", opacity.to_string())
    }

    fn bracket(class: &str, duration_ms: u32) -> BackgroundLayer {
        BackgroundLayer::new(LayerKind::Shape, class)
            .animated(LoopAnimation::new(duration_ms).track(KeyframeProperty::Opacity, [0.3, 0.5, 0.3]))
    }

    fn scan_beam(class: &str, duration_ms: u32) -> BackgroundLayer {
        BackgroundLayer::new(LayerKind::Scanlines, class).animated(
            LoopAnimation::new(duration_ms)
                .track(KeyframeProperty::Y, [0.0, FALL_PX])
                .with_easing(Easing::Linear),
        )
    }
}

impl BackgroundRenderer for TerminalBackground {
    fn name(&self) -> &'static str {
        "terminal"
    }

    fn render(&self, ctx: &BackgroundContext) -> Vec<BackgroundLayer> {
        let columns = self.columns(ctx.is_mobile);

        if ctx.is_mobile {
            let mut layers = vec![
                BackgroundLayer::new(LayerKind::Fill, full_bleed("")).style("background", MOBILE_FILL),
                Self::grid(30, 0.08, 0.3),
                BackgroundLayer::new(LayerKind::Scanlines, full_bleed(SCANLINES)),
            ];
            layers.extend(columns.iter().map(|c| Self::column_layer(c, 12, 0.25)));
            layers.extend([
                Self::bracket("absolute left-4 top-4 h-10 w-10 border-l border-t border-[#00FF41]", 4_000),
                Self::bracket("absolute right-4 top-4 h-10 w-10 border-r border-t border-[#00FF41]", 4_500),
                Self::bracket("absolute bottom-4 left-4 h-10 w-10 border-b border-l border-[#00FF41]", 5_000),
                Self::bracket("absolute bottom-4 right-4 h-10 w-10 border-b border-r border-[#00FF41]", 5_500),
                Self::scan_beam(
                    "absolute left-0 top-0 h-px w-full bg-gradient-to-r from-transparent via-[#00FF41]/40 to-transparent shadow-[0_0_8px_2px_rgba(0,255,65,0.3)]",
                    10_000,
                ),
            ]);
            return layers;
        }

        let mut layers = vec![
            Self::grid(50, 0.1, 0.2),
            BackgroundLayer::new(LayerKind::Scanlines, full_bleed(SCANLINES)),
        ];
        layers.extend(columns.iter().map(|c| Self::column_layer(c, 14, 0.3)));
        layers.extend([
            BackgroundLayer::new(LayerKind::Shape, "absolute left-8 top-8 h-16 w-16 border-l-2 border-t-2 border-[#00FF41] opacity-60"),
            BackgroundLayer::new(LayerKind::Shape, "absolute right-8 top-8 h-16 w-16 border-r-2 border-t-2 border-[#00FF41] opacity-60"),
            BackgroundLayer::new(LayerKind::Shape, "absolute bottom-8 left-8 h-16 w-16 border-b-2 border-l-2 border-[#00FF41] opacity-60"),
            BackgroundLayer::new(LayerKind::Shape, "absolute bottom-8 right-8 h-16 w-16 border-b-2 border-r-2 border-[#00FF41] opacity-60"),
            BackgroundLayer::new(LayerKind::Shape, "absolute left-1/4 top-1/3 h-32 w-32 rounded-full border border-[#00FF41]/30")
                .animated(
                    LoopAnimation::new(4_000)
                        .track(KeyframeProperty::Scale, [1.0, 1.2, 1.0])
                        .track(KeyframeProperty::Opacity, [0.3, 0.5, 0.3]),
                )
                .parallax(ctx.parallax(-50.0)),
            BackgroundLayer::new(LayerKind::Shape, "absolute bottom-16 left-16 font-mono text-xs text-[#00FF41] opacity-40")
                .text("> system_online\n> portfolio_loaded\n> _")
                .animated(LoopAnimation::new(2_000).track(KeyframeProperty::Opacity, [0.2, 0.4, 0.2])),
            Self::scan_beam(
                "absolute left-0 top-0 h-[2px] w-full bg-gradient-to-r from-transparent via-[#00FF41]/50 to-transparent shadow-[0_0_10px_2px_rgba(0,255,65,0.5)]",
                8_000,
            ),
        ]);
        layers
    }
}
