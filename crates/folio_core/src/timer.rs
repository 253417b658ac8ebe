//! Scoped timers
//!
//! A single-threaded virtual clock. Every timer is owned by a [`TimerGuard`];
//! dropping the guard cancels the timer, so a component that goes away can
//! never have a callback fire after its teardown.
//!
//! Time only moves when the host calls [`Scheduler::advance`], which makes
//! timer-driven behavior (tooltips, form resets, inactivity detection)
//! reproducible in tests.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Identifier of a scheduled timer
    pub struct TimerId;
}

struct TimerEntry {
    due_ms: u64,
    period_ms: Option<u64>,
    seq: u64,
    label: &'static str,
}

#[derive(Default)]
struct SchedulerInner {
    now_ms: u64,
    next_seq: u64,
    timers: SlotMap<TimerId, TimerEntry>,
}

impl SchedulerInner {
    fn insert(&mut self, delay_ms: u64, period_ms: Option<u64>, label: &'static str) -> TimerId {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.timers.insert(TimerEntry {
            due_ms: self.now_ms + delay_ms,
            period_ms,
            seq,
            label,
        })
    }

    /// Earliest due timer at or before `deadline`, ordered by (due, seq)
    fn next_due(&self, deadline: u64) -> Option<TimerId> {
        self.timers
            .iter()
            .filter(|(_, t)| t.due_ms <= deadline)
            .min_by_key(|(_, t)| (t.due_ms, t.seq))
            .map(|(id, _)| id)
    }
}

/// Virtual clock owning every pending timer
#[derive(Clone, Default)]
pub struct Scheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl std::fmt::Debug for Scheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Scheduler")
            .field("now_ms", &inner.now_ms)
            .field("pending", &inner.timers.len())
            .finish_non_exhaustive()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time in milliseconds
    pub fn now_ms(&self) -> u64 {
        self.inner.borrow().now_ms
    }

    /// Number of timers still pending
    pub fn pending(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.inner.borrow().timers.contains_key(id)
    }

    /// Schedule a timer that fires once after `delay_ms`
    pub fn schedule_once(&self, delay_ms: u64) -> TimerGuard {
        self.schedule_labeled(delay_ms, None, "once")
    }

    /// Schedule a timer that fires every `period_ms` (at least 1ms)
    pub fn schedule_repeating(&self, period_ms: u64) -> TimerGuard {
        let period = period_ms.max(1);
        self.schedule_labeled(period, Some(period), "repeating")
    }

    /// Schedule with a label that shows up in trace output
    pub fn schedule_labeled(
        &self,
        delay_ms: u64,
        period_ms: Option<u64>,
        label: &'static str,
    ) -> TimerGuard {
        let id = self
            .inner
            .borrow_mut()
            .insert(delay_ms, period_ms.map(|p| p.max(1)), label);
        tracing::trace!(?id, delay_ms, label, "timer scheduled");
        TimerGuard {
            id,
            scheduler: Rc::downgrade(&self.inner),
        }
    }

    /// Advance the clock by `by_ms`, returning fired timers in firing order.
    ///
    /// Timers fire ordered by due time, then by scheduling order. Repeating
    /// timers re-arm and may fire several times within one advance.
    pub fn advance(&self, by_ms: u64) -> Vec<TimerId> {
        let mut inner = self.inner.borrow_mut();
        let deadline = inner.now_ms + by_ms;
        let mut fired = Vec::new();

        while let Some(id) = inner.next_due(deadline) {
            let Some(entry) = inner.timers.get(id) else {
                break;
            };
            let due = entry.due_ms;
            let period = entry.period_ms;
            let label = entry.label;
            inner.now_ms = due;

            match period {
                Some(period) => {
                    let seq = inner.next_seq;
                    inner.next_seq += 1;
                    if let Some(entry) = inner.timers.get_mut(id) {
                        entry.due_ms = due + period;
                        entry.seq = seq;
                    }
                }
                None => {
                    inner.timers.remove(id);
                }
            }

            tracing::trace!(?id, at_ms = due, label, "timer fired");
            fired.push(id);
        }

        inner.now_ms = deadline;
        fired
    }
}

/// Owner of a scheduled timer. Dropping it cancels the timer.
#[must_use = "dropping a TimerGuard cancels the timer"]
pub struct TimerGuard {
    id: TimerId,
    scheduler: Weak<RefCell<SchedulerInner>>,
}

impl TimerGuard {
    pub fn id(&self) -> TimerId {
        self.id
    }

    /// Whether the timer is still waiting to fire
    pub fn is_pending(&self) -> bool {
        self.scheduler
            .upgrade()
            .is_some_and(|inner| inner.borrow().timers.contains_key(self.id))
    }

    /// Cancel explicitly; equivalent to dropping the guard
    pub fn cancel(self) {}
}

impl Drop for TimerGuard {
    fn drop(&mut self) {
        if let Some(inner) = self.scheduler.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.timers.remove(self.id);
            }
        }
    }
}

impl std::fmt::Debug for TimerGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimerGuard").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn once_fires_exactly_at_deadline() {
        let scheduler = Scheduler::new();
        let timer = scheduler.schedule_once(5_000);

        assert!(scheduler.advance(4_999).is_empty());
        assert_eq!(scheduler.advance(1), vec![timer.id()]);
        assert!(!timer.is_pending());
        assert!(scheduler.advance(10_000).is_empty());
    }

    #[test]
    fn debug_reports_clock_and_pending() {
        let scheduler = Scheduler::new();
        let _timer = scheduler.schedule_once(100);
        scheduler.advance(40);
        assert_eq!(
            format!("{scheduler:?}"),
            "Scheduler { now_ms: 40, pending: 1, .. }"
        );
    }

    #[test]
    fn dropping_guard_cancels() {
        let scheduler = Scheduler::new();
        let timer = scheduler.schedule_once(100);
        assert_eq!(scheduler.pending(), 1);

        drop(timer);
        assert_eq!(scheduler.pending(), 0);
        assert!(scheduler.advance(200).is_empty());
    }

    #[test]
    fn repeating_fires_multiple_times_per_advance() {
        let scheduler = Scheduler::new();
        let tick = scheduler.schedule_repeating(10);
        let fired = scheduler.advance(35);
        assert_eq!(fired, vec![tick.id(), tick.id(), tick.id()]);
        assert_eq!(scheduler.now_ms(), 35);
    }

    #[test]
    fn fires_in_due_then_schedule_order() {
        let scheduler = Scheduler::new();
        let late = scheduler.schedule_once(20);
        let first = scheduler.schedule_once(10);
        let second = scheduler.schedule_once(10);

        assert_eq!(
            scheduler.advance(30),
            vec![first.id(), second.id(), late.id()]
        );
    }

    #[test]
    fn zero_period_is_clamped() {
        let scheduler = Scheduler::new();
        let tick = scheduler.schedule_repeating(0);
        assert_eq!(scheduler.advance(3).len(), 3);
        drop(tick);
    }

    #[test]
    fn guard_outliving_scheduler_is_harmless() {
        let scheduler = Scheduler::new();
        let timer = scheduler.schedule_once(10);
        drop(scheduler);
        assert!(!timer.is_pending());
    }
}
