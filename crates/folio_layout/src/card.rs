//! Profile card interaction controller
//!
//! Pointer tilt, a glare highlight that follows the pointer, and a uniform
//! fit-to-viewport scale. Every value is a spring so changes settle smoothly;
//! all tuning comes from the theme's [`InteractionConfig`].
//!
//! On constrained viewports the card has no pointer handlers at all: tilt and
//! glare stay at rest and the scale floor loosens to [`MOBILE_SCALE_FLOOR`].

use folio_animation::{AnimationScheduler, Spring, SpringConfig, SpringId};
use folio_core::{Point, Rect, Size};
use folio_theme::{GlarePoint, InteractionConfig};
use serde::{Deserialize, Serialize};

/// Scale floor on constrained viewports
pub const MOBILE_SCALE_FLOOR: f32 = 0.92;

/// Available space never drops below this many px on either axis
pub const MIN_AVAILABLE: f32 = 320.0;

/// Perspective distance used for the tilt, in px
pub const PERSPECTIVE: f32 = 1600.0;

/// Largest pointer velocity per axis
const MAX_VELOCITY: f32 = 0.05;
/// Weight of the previous velocity when a new movement arrives
const VELOCITY_CARRY: f32 = 0.32;
/// Per-frame decay of the pointer velocity at 60 fps
const VELOCITY_DECAY: f32 = 0.9;
const VELOCITY_EPSILON: f32 = 0.0001;

/// Space kept free around the card
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardPadding {
    pub vertical: f32,
    pub horizontal: f32,
}

impl CardPadding {
    pub const DESKTOP: CardPadding = CardPadding {
        vertical: 96.0,
        horizontal: 48.0,
    };
    pub const MOBILE: CardPadding = CardPadding {
        vertical: 72.0,
        horizontal: 32.0,
    };

    pub fn for_viewport(is_mobile: bool) -> Self {
        if is_mobile {
            Self::MOBILE
        } else {
            Self::DESKTOP
        }
    }

    /// Space left for the card, floored at [`MIN_AVAILABLE`]
    pub fn available(&self, viewport: Size) -> Size {
        Size::new(
            (viewport.width - self.horizontal).max(MIN_AVAILABLE),
            (viewport.height - self.vertical).max(MIN_AVAILABLE),
        )
    }
}

/// Uniform scale fitting `natural` into the viewport, clamped to `[min_scale, 1]`
pub fn fit_scale(natural: Size, viewport: Size, padding: CardPadding, min_scale: f32) -> f32 {
    if natural.width <= 0.0 || natural.height <= 0.0 {
        return 1.0;
    }
    let available = padding.available(viewport);
    let ratio = (available.height / natural.height).min(available.width / natural.width);
    ratio.clamp(min_scale.min(1.0), 1.0)
}

/// `(rotate_x, rotate_y)` in degrees for a pointer over `bounds`
///
/// The pointer offset from the center is normalised to `[-1, 1]` per axis;
/// the card leans toward the pointer, so the Y rotation is inverted.
pub fn tilt_for_pointer(pointer: Point, bounds: Rect, tilt_max: f32) -> (f32, f32) {
    if bounds.is_degenerate() {
        return (0.0, 0.0);
    }
    let center = bounds.center();
    let rel_x = ((pointer.x - center.x) / (bounds.width() / 2.0)).clamp(-1.0, 1.0);
    let rel_y = ((pointer.y - center.y) / (bounds.height() / 2.0)).clamp(-1.0, 1.0);
    let max = tilt_max.abs();
    (
        (rel_y * max).clamp(-max, max),
        (-rel_x * max).clamp(-max, max),
    )
}

/// Pointer position inside `bounds` in percent, clamped to the card
pub fn glare_for_pointer(pointer: Point, bounds: Rect) -> GlarePoint {
    if bounds.is_degenerate() {
        return GlarePoint::CENTER;
    }
    GlarePoint::new(
        ((pointer.x - bounds.left()) / bounds.width() * 100.0).clamp(0.0, 100.0),
        ((pointer.y - bounds.top()) / bounds.height() * 100.0).clamp(0.0, 100.0),
    )
}

/// Snapshot of the card's animated values
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardTransform {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub glare: GlarePoint,
    pub scale: f32,
    /// Pointer speed in `0..=1`
    pub pointer_speed: f32,
}

impl CardTransform {
    pub fn at_rest(glare: GlarePoint) -> Self {
        Self {
            rotate_x: 0.0,
            rotate_y: 0.0,
            glare,
            scale: 1.0,
            pointer_speed: 0.0,
        }
    }

    pub fn to_css_transform(&self) -> String {
        format!(
            "perspective({PERSPECTIVE}px) rotateX({:.2}deg) rotateY({:.2}deg) scale({:.3})",
            self.rotate_x, self.rotate_y, self.scale
        )
    }
}

impl Default for CardTransform {
    fn default() -> Self {
        Self::at_rest(GlarePoint::CENTER)
    }
}

/// Drives the profile card from pointer, resize and frame events
pub struct CardController {
    config: InteractionConfig,
    is_mobile: bool,
    bounds: Option<Rect>,
    natural: Option<Size>,
    viewport: Size,
    springs: AnimationScheduler,
    rotate_x: SpringId,
    rotate_y: SpringId,
    glare_x: SpringId,
    glare_y: SpringId,
    scale: SpringId,
    speed: SpringId,
    velocity: Point,
}

impl CardController {
    pub fn new(config: InteractionConfig, is_mobile: bool, viewport: Size) -> Self {
        let rest = config.card_glare_rest;
        let mut springs = AnimationScheduler::new();
        let rotate_x = springs.add_spring(Spring::new(SpringConfig::tilt(), 0.0));
        let rotate_y = springs.add_spring(Spring::new(SpringConfig::tilt(), 0.0));
        let glare_x = springs.add_spring(Spring::new(SpringConfig::glare(), rest.x));
        let glare_y = springs.add_spring(Spring::new(SpringConfig::glare(), rest.y));
        let scale = springs.add_spring(Spring::new(SpringConfig::scale(), 1.0));
        let speed = springs.add_spring(Spring::new(SpringConfig::pointer_speed(), 0.0));

        Self {
            config,
            is_mobile,
            bounds: None,
            natural: None,
            viewport,
            springs,
            rotate_x,
            rotate_y,
            glare_x,
            glare_y,
            scale,
            speed,
            velocity: Point::default(),
        }
    }

    pub fn config(&self) -> &InteractionConfig {
        &self.config
    }

    pub fn is_mounted(&self) -> bool {
        self.bounds.is_some()
    }

    /// Attach the card's box and natural content size
    pub fn mount(&mut self, bounds: Rect, natural: Size) {
        self.bounds = Some(bounds);
        self.natural = Some(natural);
        tracing::debug!(width = natural.width, height = natural.height, "profile card mounted");
        self.update_scale();
    }

    pub fn unmount(&mut self) {
        self.bounds = None;
        self.natural = None;
    }

    /// Card box moved or its content changed size
    pub fn relayout(&mut self, bounds: Rect, natural: Size) {
        if !self.is_mounted() {
            return;
        }
        self.bounds = Some(bounds);
        self.natural = Some(natural);
        self.update_scale();
    }

    pub fn resize(&mut self, viewport: Size, is_mobile: bool) {
        self.viewport = viewport;
        if is_mobile != self.is_mobile {
            self.is_mobile = is_mobile;
            if is_mobile {
                self.settle_pointer();
            }
        }
        self.update_scale();
    }

    fn update_scale(&mut self) {
        let Some(natural) = self.natural else {
            return;
        };
        let floor = if self.is_mobile {
            MOBILE_SCALE_FLOOR
        } else {
            self.config.card_scale_min
        };
        let next = fit_scale(
            natural,
            self.viewport,
            CardPadding::for_viewport(self.is_mobile),
            floor,
        );
        tracing::trace!(scale = next, "card scale target");
        self.springs.set_target(self.scale, next);
    }

    pub fn pointer_move(&mut self, position: Point, movement: Point) {
        if self.is_mobile || !self.config.enable_card_tilt {
            return;
        }
        let Some(bounds) = self.bounds else {
            return;
        };

        let (rotate_x, rotate_y) = tilt_for_pointer(position, bounds, self.config.card_tilt_max);
        self.springs.set_target(self.rotate_x, rotate_x);
        self.springs.set_target(self.rotate_y, rotate_y);

        if self.config.enable_glare_effect {
            let glare = glare_for_pointer(position, bounds);
            self.springs.set_target(self.glare_x, glare.x);
            self.springs.set_target(self.glare_y, glare.y);
        }

        let multiplier = self.config.pointer_velocity_multiplier;
        if multiplier > 0.0 {
            self.velocity = Point::new(
                accumulate(self.velocity.x, movement.x * multiplier),
                accumulate(self.velocity.y, movement.y * multiplier),
            );
            self.springs.set_target(self.speed, self.speed_target());
        }
    }

    pub fn pointer_leave(&mut self) {
        if self.is_mobile {
            return;
        }
        self.settle_pointer();
    }

    fn settle_pointer(&mut self) {
        let rest = self.config.card_glare_rest;
        self.springs.set_target(self.rotate_x, 0.0);
        self.springs.set_target(self.rotate_y, 0.0);
        self.springs.set_target(self.glare_x, rest.x);
        self.springs.set_target(self.glare_y, rest.y);
        self.springs.set_target(self.speed, 0.0);
        self.velocity = Point::default();
    }

    fn speed_target(&self) -> f32 {
        (self.velocity.length() / MAX_VELOCITY).clamp(0.0, 1.0)
    }

    /// Advance springs by `dt` seconds and decay the pointer velocity
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 {
            return;
        }
        if self.velocity != Point::default() {
            let decay = VELOCITY_DECAY.powf(dt * 60.0);
            self.velocity = Point::new(
                snap_small(self.velocity.x * decay),
                snap_small(self.velocity.y * decay),
            );
            self.springs.set_target(self.speed, self.speed_target());
        }
        self.springs.tick(dt);
    }

    pub fn is_animating(&self) -> bool {
        self.velocity != Point::default() || self.springs.has_active_animations()
    }

    pub fn transform(&self) -> CardTransform {
        let rest = self.config.card_glare_rest;
        let value = |id: SpringId, fallback: f32| self.springs.value(id).unwrap_or(fallback);
        if self.is_mobile {
            return CardTransform {
                scale: value(self.scale, 1.0),
                ..CardTransform::at_rest(rest)
            };
        }
        CardTransform {
            rotate_x: value(self.rotate_x, 0.0),
            rotate_y: value(self.rotate_y, 0.0),
            glare: GlarePoint::new(value(self.glare_x, rest.x), value(self.glare_y, rest.y)),
            scale: value(self.scale, 1.0),
            pointer_speed: value(self.speed, 0.0).clamp(0.0, 1.0),
        }
    }
}

fn accumulate(previous: f32, delta: f32) -> f32 {
    (previous * VELOCITY_CARRY + delta).clamp(-MAX_VELOCITY, MAX_VELOCITY)
}

fn snap_small(value: f32) -> f32 {
    if value.abs() < VELOCITY_EPSILON {
        0.0
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: f32 = 1.0 / 60.0;

    fn settle(controller: &mut CardController) {
        for _ in 0..600 {
            controller.step(FRAME);
        }
    }

    fn card() -> Rect {
        Rect::new(100.0, 100.0, 400.0, 600.0)
    }

    #[test]
    fn tilt_leans_toward_pointer() {
        let (rx, ry) = tilt_for_pointer(Point::new(500.0, 100.0), card(), 6.0);
        assert_eq!((rx, ry), (-6.0, -6.0));
        let (rx, ry) = tilt_for_pointer(Point::new(300.0, 400.0), card(), 6.0);
        assert_eq!((rx, ry), (0.0, 0.0));
        let (_, ry) = tilt_for_pointer(Point::new(-5_000.0, 400.0), card(), 6.0);
        assert_eq!(ry, 6.0);
    }

    #[test]
    fn glare_is_percent_of_box() {
        assert_eq!(
            glare_for_pointer(Point::new(200.0, 400.0), card()),
            GlarePoint::new(25.0, 50.0)
        );
        assert_eq!(
            glare_for_pointer(Point::new(0.0, 9_000.0), card()),
            GlarePoint::new(0.0, 100.0)
        );
    }

    #[test]
    fn fit_scale_shrinks_tall_cards() {
        let scale = fit_scale(
            Size::new(600.0, 1_000.0),
            Size::new(1_440.0, 900.0),
            CardPadding::DESKTOP,
            0.78,
        );
        assert!((scale - 0.804).abs() < 1e-3);
        let small = fit_scale(Size::new(300.0, 300.0), Size::new(1_440.0, 900.0), CardPadding::DESKTOP, 0.78);
        assert_eq!(small, 1.0);
    }

    #[test]
    fn unmounted_card_ignores_pointer() {
        let mut controller = CardController::new(InteractionConfig::default(), false, Size::new(1_440.0, 900.0));
        controller.pointer_move(Point::new(10.0, 10.0), Point::new(5.0, 5.0));
        settle(&mut controller);
        assert_eq!(controller.transform(), CardTransform::default());
        assert!(!controller.is_animating());
    }

    #[test]
    fn leave_returns_to_rest() {
        let config = InteractionConfig {
            card_glare_rest: GlarePoint::new(52.0, 48.0),
            ..InteractionConfig::default()
        };
        let mut controller = CardController::new(config, false, Size::new(1_440.0, 900.0));
        controller.mount(card(), Size::new(400.0, 600.0));
        controller.pointer_move(Point::new(480.0, 120.0), Point::new(3.0, 0.0));
        settle(&mut controller);
        let tilted = controller.transform();
        assert!(tilted.rotate_y < -4.0);
        assert!(tilted.glare.x > 90.0);

        controller.pointer_leave();
        settle(&mut controller);
        let rest = controller.transform();
        assert!(rest.rotate_x.abs() < 0.01 && rest.rotate_y.abs() < 0.01);
        assert!((rest.glare.x - 52.0).abs() < 0.01);
        assert!((rest.glare.y - 48.0).abs() < 0.01);
    }

    #[test]
    fn glare_stays_put_when_disabled() {
        let config = InteractionConfig {
            enable_glare_effect: false,
            ..InteractionConfig::default()
        };
        let mut controller = CardController::new(config, false, Size::new(1_440.0, 900.0));
        controller.mount(card(), Size::new(400.0, 600.0));
        controller.pointer_move(Point::new(480.0, 120.0), Point::default());
        settle(&mut controller);
        assert_eq!(controller.transform().glare, GlarePoint::CENTER);
        assert!(controller.transform().rotate_y < -4.0);
    }

    #[test]
    fn mobile_has_no_tilt_and_looser_floor() {
        let config = InteractionConfig {
            card_scale_min: 0.5,
            ..InteractionConfig::default()
        };
        let mut controller = CardController::new(config, true, Size::new(390.0, 500.0));
        controller.mount(Rect::new(0.0, 0.0, 360.0, 2_000.0), Size::new(360.0, 2_000.0));
        controller.pointer_move(Point::new(0.0, 0.0), Point::new(20.0, 20.0));
        settle(&mut controller);
        let transform = controller.transform();
        assert_eq!((transform.rotate_x, transform.rotate_y), (0.0, 0.0));
        assert!((transform.scale - MOBILE_SCALE_FLOOR).abs() < 0.01);
    }

    #[test]
    fn pointer_speed_decays_after_movement() {
        let config = InteractionConfig {
            pointer_velocity_multiplier: 0.01,
            ..InteractionConfig::default()
        };
        let mut controller = CardController::new(config, false, Size::new(1_440.0, 900.0));
        controller.mount(card(), Size::new(400.0, 600.0));
        controller.pointer_move(Point::new(300.0, 400.0), Point::new(40.0, 0.0));
        assert!(controller.is_animating());
        for _ in 0..6 {
            controller.step(FRAME);
        }
        assert!(controller.transform().pointer_speed > 0.0);
        settle(&mut controller);
        assert!(controller.transform().pointer_speed < 0.01);
    }

    #[test]
    fn css_transform_includes_perspective() {
        let css = CardTransform::default().to_css_transform();
        assert_eq!(css, "perspective(1600px) rotateX(0.00deg) rotateY(0.00deg) scale(1.000)");
    }
}
