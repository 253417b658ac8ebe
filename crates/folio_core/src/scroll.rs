//! Scroll progress
//!
//! A derived, read-only `[0, 1]` signal computed from the page scroll offset
//! over a fixed window. Consumers subscribe and are notified only when the
//! derived value changes; dropping the returned [`ScrollSubscription`]
//! unsubscribes.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    struct SubscriberId;
}

/// Scroll window mapping an absolute offset to `[0, 1]`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollWindow {
    pub start: f32,
    pub end: f32,
}

impl ScrollWindow {
    pub const fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    /// Clamped progress of `offset` through the window.
    ///
    /// An empty or inverted window yields 0 before `start` and 1 from
    /// `start` onwards.
    pub fn progress(&self, offset: f32) -> f32 {
        let span = self.end - self.start;
        if span <= f32::EPSILON {
            return if offset >= self.start { 1.0 } else { 0.0 };
        }
        ((offset - self.start) / span).clamp(0.0, 1.0)
    }
}

impl Default for ScrollWindow {
    fn default() -> Self {
        Self::new(0.0, 1.0)
    }
}

/// Linear map of a progress value into `[from, to]`
pub fn transform(progress: f32, from: f32, to: f32) -> f32 {
    from + (to - from) * progress.clamp(0.0, 1.0)
}

/// Percentage of the scrollable height reached at `offset`.
///
/// `None` when the page fits in the viewport.
pub fn page_depth_percent(offset: f32, content_height: f32, viewport_height: f32) -> Option<f32> {
    let scrollable = content_height - viewport_height;
    if scrollable <= 0.0 {
        return None;
    }
    Some((offset / scrollable * 100.0).clamp(0.0, 100.0))
}

type Subscriber = Rc<dyn Fn(f32)>;

struct ProgressInner {
    window: ScrollWindow,
    value: f32,
    subscribers: SlotMap<SubscriberId, Subscriber>,
}

/// Derived scroll progress signal
#[derive(Clone)]
pub struct ScrollProgress {
    inner: Rc<RefCell<ProgressInner>>,
}

impl ScrollProgress {
    pub fn new(window: ScrollWindow) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ProgressInner {
                window,
                value: 0.0,
                subscribers: SlotMap::with_key(),
            })),
        }
    }

    pub fn get(&self) -> f32 {
        self.inner.borrow().value
    }

    pub fn window(&self) -> ScrollWindow {
        self.inner.borrow().window
    }

    /// Replace the window (e.g. after a resize) and recompute from `offset`
    pub fn set_window(&self, window: ScrollWindow, offset: f32) {
        self.inner.borrow_mut().window = window;
        self.update(offset);
    }

    /// Feed a new scroll offset. Subscribers run only if the value changed.
    pub fn update(&self, offset: f32) {
        let subscribers: Vec<Subscriber> = {
            let mut inner = self.inner.borrow_mut();
            let next = inner.window.progress(offset);
            if (next - inner.value).abs() <= f32::EPSILON {
                return;
            }
            inner.value = next;
            inner.subscribers.values().cloned().collect()
        };

        let value = self.get();
        for subscriber in subscribers {
            subscriber(value);
        }
    }

    /// Subscribe to changes. The callback may read the signal but is invoked
    /// outside any internal borrow.
    pub fn subscribe<F: Fn(f32) + 'static>(&self, callback: F) -> ScrollSubscription {
        let id = self
            .inner
            .borrow_mut()
            .subscribers
            .insert(Rc::new(callback));
        ScrollSubscription {
            id,
            signal: Rc::downgrade(&self.inner),
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.borrow().subscribers.len()
    }
}

impl Default for ScrollProgress {
    fn default() -> Self {
        Self::new(ScrollWindow::default())
    }
}

/// Handle to a scroll subscription; unsubscribes on drop
#[must_use = "dropping a ScrollSubscription unsubscribes immediately"]
pub struct ScrollSubscription {
    id: SubscriberId,
    signal: Weak<RefCell<ProgressInner>>,
}

impl Drop for ScrollSubscription {
    fn drop(&mut self) {
        if let Some(inner) = self.signal.upgrade() {
            if let Ok(mut inner) = inner.try_borrow_mut() {
                inner.subscribers.remove(self.id);
            }
        }
    }
}
