//! Input events
//!
//! Platform-agnostic input delivered to the application root. The host
//! (browser shell, test harness, CLI simulation) translates its native events
//! into these.

use crate::geometry::Point;

/// Virtual key code
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct KeyCode(pub u32);

impl KeyCode {
    pub const TAB: KeyCode = KeyCode(0x09);
    pub const ENTER: KeyCode = KeyCode(0x0D);
    pub const ESCAPE: KeyCode = KeyCode(0x1B);
    pub const SPACE: KeyCode = KeyCode(0x20);
    pub const PAGE_UP: KeyCode = KeyCode(0x21);
    pub const PAGE_DOWN: KeyCode = KeyCode(0x22);
    pub const UP: KeyCode = KeyCode(0x26);
    pub const DOWN: KeyCode = KeyCode(0x28);
}

/// Keyboard modifier flags
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

/// A single input event
#[derive(Clone, Debug, PartialEq)]
pub enum InputEvent {
    /// Pointer moved; `movement` is the delta since the previous move
    PointerMove { position: Point, movement: Point },
    /// Pointer left the tracked surface
    PointerLeave,
    PointerDown { position: Point },
    Key { key: KeyCode, modifiers: Modifiers },
    Touch { position: Point },
    /// Page scrolled to an absolute vertical offset
    Scroll { offset_y: f32 },
    /// Viewport resized
    Resize { width: f32, height: f32, max_touch_points: u32 },
}

impl InputEvent {
    /// Whether this event proves the visitor is still present.
    ///
    /// Mouse, keyboard, touch and scroll input reset inactivity detection;
    /// resizes do not.
    pub fn counts_as_activity(&self) -> bool {
        !matches!(self, InputEvent::Resize { .. } | InputEvent::PointerLeave)
    }

    pub fn name(&self) -> &'static str {
        match self {
            InputEvent::PointerMove { .. } => "pointer_move",
            InputEvent::PointerLeave => "pointer_leave",
            InputEvent::PointerDown { .. } => "pointer_down",
            InputEvent::Key { .. } => "key",
            InputEvent::Touch { .. } => "touch",
            InputEvent::Scroll { .. } => "scroll",
            InputEvent::Resize { .. } => "resize",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resize_is_not_activity() {
        let resize = InputEvent::Resize {
            width: 100.0,
            height: 100.0,
            max_touch_points: 0,
        };
        assert!(!resize.counts_as_activity());
        assert!(InputEvent::Scroll { offset_y: 4.0 }.counts_as_activity());
        assert!(InputEvent::Key {
            key: KeyCode::SPACE,
            modifiers: Modifiers::default()
        }
        .counts_as_activity());
    }
}
