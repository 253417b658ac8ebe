//! Analytics events and the page tracker
//!
//! Emission is fire-and-forget: sinks never report failure back to the
//! caller and the tracker never waits on them.

use std::cell::RefCell;
use std::rc::Rc;

use folio_core::{page_depth_percent, Scheduler, TimerGuard, TimerId};
use folio_theme::{ThemeChange, ThemeId};
use serde::Serialize;
use serde_json::json;
use smallvec::SmallVec;
use tokio::sync::mpsc::UnboundedSender;

use crate::config::AnalyticsConfig;

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum AnalyticsEvent {
    PageView { path: String, title: String },
    ThemeChange { from: ThemeId, to: ThemeId },
    ScrollDepth { percent: u8 },
    Engagement { msec: u64 },
    Inactive,
}

impl AnalyticsEvent {
    /// Event name on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::PageView { .. } => "page_view",
            Self::ThemeChange { .. } => "theme_change",
            Self::ScrollDepth { .. } => "scroll",
            Self::Engagement { .. } => "user_engagement",
            Self::Inactive => "user_inactive",
        }
    }

    /// Wire parameters
    pub fn params(&self) -> serde_json::Value {
        match self {
            Self::PageView { path, title } => json!({
                "page_path": path,
                "page_title": title,
            }),
            Self::ThemeChange { from, to } => json!({
                "from_theme": from.analytics_id(),
                "to_theme": to.analytics_id(),
                "theme_name": to.analytics_id(),
            }),
            Self::ScrollDepth { percent } => json!({
                "scroll_depth": percent,
                "scroll_percentage": percent,
            }),
            Self::Engagement { msec } => json!({
                "engagement_time_msec": msec,
            }),
            Self::Inactive => json!({}),
        }
    }
}

impl From<ThemeChange> for AnalyticsEvent {
    fn from(change: ThemeChange) -> Self {
        Self::ThemeChange {
            from: change.from,
            to: change.to,
        }
    }
}

/// Destination for analytics events
pub trait AnalyticsSink {
    fn emit(&self, event: &AnalyticsEvent);
}

/// Logs every event
#[derive(Clone, Debug, Default)]
pub struct TracingSink {
    measurement_id: Option<String>,
}

impl TracingSink {
    pub fn new(measurement_id: Option<String>) -> Self {
        Self { measurement_id }
    }
}

impl AnalyticsSink for TracingSink {
    fn emit(&self, event: &AnalyticsEvent) {
        tracing::info!(
            target: "folio::analytics",
            measurement_id = self.measurement_id.as_deref().unwrap_or("-"),
            event = event.name(),
            params = %event.params(),
            "analytics event"
        );
    }
}

/// Forwards events to an async consumer
#[derive(Clone, Debug)]
pub struct ChannelSink {
    tx: UnboundedSender<AnalyticsEvent>,
}

impl ChannelSink {
    pub fn new(tx: UnboundedSender<AnalyticsEvent>) -> Self {
        Self { tx }
    }
}

impl AnalyticsSink for ChannelSink {
    fn emit(&self, event: &AnalyticsEvent) {
        if self.tx.send(event.clone()).is_err() {
            tracing::trace!(event = event.name(), "analytics consumer gone, event dropped");
        }
    }
}

/// Keeps every event in memory
#[derive(Clone, Debug, Default)]
pub struct RecordingSink {
    events: Rc<RefCell<Vec<AnalyticsEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<AnalyticsEvent> {
        self.events.borrow().clone()
    }

    /// Drain recorded events
    pub fn take(&self) -> Vec<AnalyticsEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl AnalyticsSink for RecordingSink {
    fn emit(&self, event: &AnalyticsEvent) {
        self.events.borrow_mut().push(event.clone());
    }
}

/// Page-lifetime analytics: scroll milestones, engagement time and
/// inactivity
///
/// Engagement ticks only while the visitor is active. Inactivity is reported
/// once per idle stretch; the next activity input starts a new stretch.
pub struct AnalyticsTracker {
    sink: Box<dyn AnalyticsSink>,
    scheduler: Scheduler,
    enabled: bool,
    engagement_interval_ms: u64,
    inactivity_timeout_ms: u64,
    milestones: SmallVec<[u8; 4]>,
    reached: SmallVec<[u8; 4]>,
    engagement: Option<TimerGuard>,
    inactivity: Option<TimerGuard>,
    inactive: bool,
}

impl AnalyticsTracker {
    pub fn new(config: &AnalyticsConfig, scheduler: Scheduler, sink: Box<dyn AnalyticsSink>) -> Self {
        let mut milestones: SmallVec<[u8; 4]> = config.milestones.iter().copied().collect();
        milestones.sort_unstable();
        milestones.dedup();

        Self {
            sink,
            scheduler,
            enabled: config.enabled,
            engagement_interval_ms: config.engagement_interval_ms,
            inactivity_timeout_ms: config.inactivity_timeout_ms,
            milestones,
            reached: SmallVec::new(),
            engagement: None,
            inactivity: None,
            inactive: false,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn is_inactive(&self) -> bool {
        self.inactive
    }

    /// Milestones already reported
    pub fn reached(&self) -> &[u8] {
        &self.reached
    }

    /// Report the page view and arm the engagement and inactivity timers
    pub fn start(&mut self, path: &str, title: &str) {
        if !self.enabled {
            return;
        }
        self.emit(AnalyticsEvent::PageView {
            path: path.to_string(),
            title: title.to_string(),
        });
        self.inactive = false;
        self.arm_engagement();
        self.arm_inactivity();
    }

    /// Cancel every timer; nothing fires afterwards
    pub fn stop(&mut self) {
        self.engagement = None;
        self.inactivity = None;
    }

    pub fn theme_changed(&mut self, change: ThemeChange) {
        self.emit(change.into());
    }

    /// Any activity input: restart the inactivity countdown and resume
    /// engagement after an idle stretch
    pub fn record_activity(&mut self) {
        if !self.enabled || self.inactivity.is_none() && !self.inactive {
            return;
        }
        if self.inactive {
            self.inactive = false;
            tracing::debug!("visitor active again");
            self.arm_engagement();
        }
        self.arm_inactivity();
    }

    /// Report every milestone at or below the current depth, once each
    pub fn record_scroll(&mut self, offset: f32, content_height: f32, viewport_height: f32) {
        let Some(percent) = page_depth_percent(offset, content_height, viewport_height) else {
            return;
        };
        self.record_depth(percent);
    }

    pub fn record_depth(&mut self, percent: f32) {
        let due: SmallVec<[u8; 4]> = self
            .milestones
            .iter()
            .copied()
            .filter(|&m| f32::from(m) <= percent && !self.reached.contains(&m))
            .collect();
        for milestone in due {
            self.reached.push(milestone);
            self.emit(AnalyticsEvent::ScrollDepth { percent: milestone });
        }
    }

    /// Handle a fired timer; `false` when the timer is not the tracker's
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if self.engagement.as_ref().is_some_and(|guard| guard.id() == id) {
            self.emit(AnalyticsEvent::Engagement {
                msec: self.engagement_interval_ms,
            });
            return true;
        }
        if self.inactivity.as_ref().is_some_and(|guard| guard.id() == id) {
            self.inactivity = None;
            self.engagement = None;
            self.inactive = true;
            self.emit(AnalyticsEvent::Inactive);
            return true;
        }
        false
    }

    fn arm_engagement(&mut self) {
        self.engagement = Some(self.scheduler.schedule_labeled(
            self.engagement_interval_ms,
            Some(self.engagement_interval_ms),
            "analytics-engagement",
        ));
    }

    fn arm_inactivity(&mut self) {
        self.inactivity = Some(self.scheduler.schedule_labeled(
            self.inactivity_timeout_ms,
            None,
            "analytics-inactivity",
        ));
    }

    fn emit(&self, event: AnalyticsEvent) {
        if !self.enabled {
            return;
        }
        tracing::debug!(event = event.name(), "analytics");
        self.sink.emit(&event);
    }
}

impl std::fmt::Debug for AnalyticsTracker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AnalyticsTracker")
            .field("enabled", &self.enabled)
            .field("reached", &self.reached)
            .field("inactive", &self.inactive)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> (AnalyticsTracker, Scheduler, RecordingSink) {
        let scheduler = Scheduler::new();
        let sink = RecordingSink::new();
        let tracker = AnalyticsTracker::new(
            &AnalyticsConfig::default(),
            scheduler.clone(),
            Box::new(sink.clone()),
        );
        (tracker, scheduler, sink)
    }

    fn run(tracker: &mut AnalyticsTracker, scheduler: &Scheduler, ms: u64) {
        for id in scheduler.advance(ms) {
            tracker.on_timer(id);
        }
    }

    #[test]
    fn milestones_fire_once_each() {
        let (mut tracker, _scheduler, sink) = tracker();
        tracker.record_depth(26.0);
        tracker.record_depth(10.0);
        tracker.record_depth(27.0);
        assert_eq!(sink.take(), vec![AnalyticsEvent::ScrollDepth { percent: 25 }]);

        tracker.record_depth(100.0);
        assert_eq!(
            sink.take(),
            vec![
                AnalyticsEvent::ScrollDepth { percent: 50 },
                AnalyticsEvent::ScrollDepth { percent: 75 },
                AnalyticsEvent::ScrollDepth { percent: 100 },
            ]
        );
    }

    #[test]
    fn short_pages_never_report_depth() {
        let (mut tracker, _scheduler, sink) = tracker();
        tracker.record_scroll(0.0, 800.0, 900.0);
        assert!(sink.events().is_empty());
    }

    #[test]
    fn engagement_every_interval() {
        let (mut tracker, scheduler, sink) = tracker();
        tracker.start("/", "Portfolio");
        sink.take();

        run(&mut tracker, &scheduler, 9_999);
        assert!(sink.events().is_empty());
        run(&mut tracker, &scheduler, 1);
        tracker.record_activity();
        run(&mut tracker, &scheduler, 10_000);
        assert_eq!(
            sink.take(),
            vec![AnalyticsEvent::Engagement { msec: 10_000 }; 2]
        );
    }

    #[test]
    fn inactivity_fires_once_until_activity() {
        let (mut tracker, scheduler, sink) = tracker();
        tracker.start("/", "Portfolio");
        sink.take();

        run(&mut tracker, &scheduler, 29_000);
        tracker.record_activity();
        run(&mut tracker, &scheduler, 28_000);
        assert!(!sink.events().contains(&AnalyticsEvent::Inactive));
        assert!(!tracker.is_inactive());

        run(&mut tracker, &scheduler, 2_000);
        assert!(tracker.is_inactive());
        run(&mut tracker, &scheduler, 120_000);
        let inactive = sink
            .take()
            .into_iter()
            .filter(|e| *e == AnalyticsEvent::Inactive)
            .count();
        assert_eq!(inactive, 1);
        assert!(sink.events().is_empty());

        tracker.record_activity();
        assert!(!tracker.is_inactive());
        run(&mut tracker, &scheduler, 30_000);
        assert!(sink.events().contains(&AnalyticsEvent::Inactive));
    }

    #[test]
    fn stop_cancels_every_timer() {
        let (mut tracker, scheduler, _sink) = tracker();
        tracker.start("/", "Portfolio");
        assert_eq!(scheduler.pending(), 2);
        tracker.stop();
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn disabled_tracker_is_silent() {
        let scheduler = Scheduler::new();
        let sink = RecordingSink::new();
        let config = AnalyticsConfig {
            enabled: false,
            ..AnalyticsConfig::default()
        };
        let mut tracker = AnalyticsTracker::new(&config, scheduler.clone(), Box::new(sink.clone()));
        tracker.start("/", "Portfolio");
        tracker.record_depth(100.0);
        tracker.theme_changed(ThemeChange {
            from: ThemeId::Minimalism,
            to: ThemeId::Synthwave,
        });
        assert!(sink.events().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn wire_params_follow_event() {
        let change = AnalyticsEvent::from(ThemeChange {
            from: ThemeId::Minimalism,
            to: ThemeId::Synthwave,
        });
        assert_eq!(change.name(), "theme_change");
        assert_eq!(change.params()["from_theme"], "minimalism");
        assert_eq!(change.params()["to_theme"], "synthwave");
        assert_eq!(
            AnalyticsEvent::Engagement { msec: 10_000 }.params()["engagement_time_msec"],
            10_000
        );

        let glass = AnalyticsEvent::from(ThemeChange {
            from: ThemeId::LiquidGlass,
            to: ThemeId::Brutalism,
        });
        assert_eq!(glass.params()["from_theme"], "liquidGlass");
        assert_eq!(glass.params()["theme_name"], "brutalism");
    }

    #[test]
    fn engagement_keeps_sub_second_intervals() {
        let scheduler = Scheduler::new();
        let sink = RecordingSink::new();
        let config = AnalyticsConfig {
            engagement_interval_ms: 1_500,
            ..AnalyticsConfig::default()
        };
        let mut tracker = AnalyticsTracker::new(&config, scheduler.clone(), Box::new(sink.clone()));
        tracker.start("/", "Portfolio");
        sink.take();

        run(&mut tracker, &scheduler, 1_500);
        assert_eq!(sink.take(), vec![AnalyticsEvent::Engagement { msec: 1_500 }]);
        assert_eq!(
            AnalyticsEvent::Engagement { msec: 500 }.params()["engagement_time_msec"],
            500
        );
    }

    #[tokio::test]
    async fn channel_sink_forwards() {
        let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
        let sink = ChannelSink::new(tx);
        sink.emit(&AnalyticsEvent::Inactive);
        assert_eq!(rx.recv().await, Some(AnalyticsEvent::Inactive));

        drop(rx);
        sink.emit(&AnalyticsEvent::Inactive);
    }
}
