//! Folio Core Runtime
//!
//! Foundational primitives shared by every Folio crate:
//!
//! - **Colors and geometry**: RGBA colors with CSS parsing, points, sizes, rects
//! - **Input events**: pointer, keyboard, touch, scroll and resize events
//! - **State machines**: flat statecharts for interaction states
//! - **Scoped timers**: a single-threaded virtual clock whose timers are
//!   cancelled when their guard is dropped
//! - **Scroll progress**: a derived, read-only `[0, 1]` signal
//!
//! # Example
//!
//! ```rust
//! use folio_core::timer::Scheduler;
//!
//! let scheduler = Scheduler::new();
//! let hide = scheduler.schedule_once(1_600);
//!
//! assert!(scheduler.advance(1_000).is_empty());
//! assert_eq!(scheduler.advance(600), vec![hide.id()]);
//! ```

pub mod color;
pub mod events;
pub mod fsm;
pub mod geometry;
pub mod scroll;
pub mod timer;
pub mod viewport;

pub use color::{Color, ColorParseError};
pub use events::{InputEvent, KeyCode, Modifiers};
pub use fsm::{StateMachine, StateMachineBuilder};
pub use geometry::{Point, Rect, Size};
pub use scroll::{page_depth_percent, ScrollProgress, ScrollSubscription, ScrollWindow};
pub use timer::{Scheduler, TimerGuard, TimerId};
pub use viewport::Viewport;
