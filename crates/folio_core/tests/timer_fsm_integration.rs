//! Integration tests for scoped timers + FSM + scroll progress
//!
//! These tests verify that:
//! - Timer expiry can drive state machine transitions
//! - Replacing a timer guard cancels the previous timer
//! - Scroll progress stays within its bounds for any offset

use folio_core::fsm::StateMachine;
use folio_core::scroll::{ScrollProgress, ScrollWindow};
use folio_core::timer::{Scheduler, TimerGuard};
use proptest::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Status {
    Idle,
    Sending,
    Sent,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Event {
    Submit,
    Delivered,
    Expire,
}

/// A status display that reverts after a timeout, driven by the scheduler
#[test]
fn test_timer_expiry_resets_machine() {
    let scheduler = Scheduler::new();
    let mut fsm = StateMachine::builder(Status::Idle)
        .on(Status::Idle, Event::Submit, Status::Sending)
        .on(Status::Sending, Event::Delivered, Status::Sent)
        .on(Status::Sent, Event::Expire, Status::Idle)
        .build();

    fsm.send(Event::Submit);
    fsm.send(Event::Delivered);
    let reset = scheduler.schedule_once(5_000);

    assert!(scheduler.advance(4_000).is_empty());
    assert_eq!(fsm.current_state(), Status::Sent);

    for id in scheduler.advance(1_000) {
        if id == reset.id() {
            fsm.send(Event::Expire);
        }
    }
    assert_eq!(fsm.current_state(), Status::Idle);
    assert_eq!(scheduler.pending(), 0);
}

/// Re-arming a tooltip replaces the previous hide timer
#[test]
fn test_replacing_guard_cancels_previous_timer() {
    let scheduler = Scheduler::new();
    let mut hide: Option<TimerGuard> = None;

    hide.replace(scheduler.schedule_once(1_600));
    scheduler.advance(1_000);
    hide.replace(scheduler.schedule_once(1_600));
    assert_eq!(scheduler.pending(), 1);

    // The first timer would have fired at 1600; only the replacement remains
    assert!(scheduler.advance(600).is_empty());
    let fired = scheduler.advance(1_000);
    assert_eq!(fired.len(), 1);
    assert_eq!(Some(fired[0]), hide.as_ref().map(TimerGuard::id));

    hide.take();
    assert_eq!(scheduler.pending(), 0);
}

/// Scroll subscribers observe the derived value, not raw offsets
#[test]
fn test_scroll_signal_feeds_subscribers() {
    let progress = ScrollProgress::new(ScrollWindow::new(0.0, 800.0));
    let observed = Rc::new(Cell::new(-1.0f32));
    let sink = observed.clone();
    let _sub = progress.subscribe(move |p| sink.set(p));

    progress.update(200.0);
    assert_eq!(observed.get(), 0.25);

    progress.update(-50.0);
    assert_eq!(observed.get(), 0.0);
}

proptest! {
    #[test]
    fn prop_progress_is_bounded(start in -1e4f32..1e4, len in 0f32..1e4, offset in -1e5f32..1e5) {
        let p = ScrollWindow::new(start, start + len).progress(offset);
        prop_assert!((0.0..=1.0).contains(&p));
    }
}
