//! Application root
//!
//! [`PortfolioApp`] owns every piece of transient state: the active theme,
//! the viewport, the virtual clock and everything scheduled on it, the
//! profile card controller and the integrations. Hosts feed it
//! [`InputEvent`]s and elapsed time and read back a render tree.

use std::sync::Arc;

use folio_core::{
    InputEvent, Rect, Scheduler, ScrollProgress, ScrollWindow, Size, TimerGuard, TimerId, Viewport,
};
use folio_layout::element::div;
use folio_layout::{CardController, Content, Element, LayoutState, ThemeLayout, YearMonth};
use folio_theme::{Section, ThemeChange, ThemeConfig, ThemeId, ThemeSelection};
use tokio::sync::watch;

use crate::config::AppConfig;
use crate::integrations::{
    AnalyticsSink, AnalyticsTracker, ContactForm, MessageSender, NowPlayingState, PollResult,
};
use crate::picker::{ThemePicker, TransientTooltip};

/// Spring integration step
const FRAME_MS: u64 = 16;

pub struct PortfolioApp {
    config: AppConfig,
    content: Arc<Content>,
    selection: ThemeSelection,
    viewport: Viewport,
    scheduler: Scheduler,
    scroll: ScrollProgress,
    scroll_offset: f32,
    content_height: f32,
    tracker: AnalyticsTracker,
    card: CardController,
    card_layout: Option<(Rect, Size)>,
    form: ContactForm,
    picker: ThemePicker,
    section_tooltip: TransientTooltip<Section>,
    active_section: Section,
    copied_email: Option<TimerGuard>,
    expanded_timeline: Option<usize>,
    now_playing: NowPlayingState,
    now_playing_rx: Option<watch::Receiver<Option<PollResult>>>,
    today: YearMonth,
}

impl PortfolioApp {
    pub fn new(config: AppConfig, content: Arc<Content>, sink: Box<dyn AnalyticsSink>) -> Self {
        let scheduler = Scheduler::new();
        let selection = ThemeSelection::new(config.default_theme);
        let viewport = Viewport::default();
        let is_mobile = viewport.is_constrained(config.viewport.mobile_breakpoint);
        let card = CardController::new(
            selection.config().interaction,
            is_mobile,
            Size::new(viewport.width, viewport.height),
        );
        let to_name = content
            .contact_name
            .clone()
            .unwrap_or_else(|| content.name.clone());

        Self {
            tracker: AnalyticsTracker::new(&config.analytics, scheduler.clone(), sink),
            form: ContactForm::new(scheduler.clone(), config.contact.status_display_ms, to_name),
            picker: ThemePicker::new(scheduler.clone(), config.picker.tooltip_ms),
            section_tooltip: TransientTooltip::new(scheduler.clone(), config.picker.tooltip_ms),
            config,
            content,
            selection,
            viewport,
            scheduler,
            scroll: ScrollProgress::default(),
            scroll_offset: 0.0,
            content_height: 0.0,
            card,
            card_layout: None,
            active_section: Section::Home,
            copied_email: None,
            expanded_timeline: None,
            now_playing: NowPlayingState::new(),
            now_playing_rx: None,
            today: YearMonth::current(),
        }
    }

    /// Start from a specific viewport instead of the desktop default
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.apply_viewport(viewport);
        self
    }

    /// Pin the month that `Present` resolves to
    pub fn with_today(mut self, today: YearMonth) -> Self {
        self.today = today;
        self
    }

    /// Report the page view and start the analytics timers
    pub fn start(&mut self) {
        let title = format!("{} | Portfolio", self.content.name);
        self.tracker.start("/", &title);
        tracing::info!(theme = %self.selection.active(), mobile = self.is_mobile(), "portfolio started");
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn active_theme(&self) -> ThemeId {
        self.selection.active()
    }

    pub fn theme(&self) -> &'static ThemeConfig {
        self.selection.config()
    }

    pub fn remount_key(&self) -> String {
        self.selection.remount_key()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn is_mobile(&self) -> bool {
        self.viewport
            .is_constrained(self.config.viewport.mobile_breakpoint)
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn card(&self) -> &CardController {
        &self.card
    }

    pub fn tracker(&self) -> &AnalyticsTracker {
        &self.tracker
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn now_playing(&self) -> &NowPlayingState {
        &self.now_playing
    }

    /// Whether music is currently playing, for decorative consumers
    pub fn is_playing(&self) -> bool {
        self.now_playing.is_playing()
    }

    pub fn active_section(&self) -> Section {
        self.active_section
    }

    pub fn picker_tooltip(&self) -> Option<ThemeId> {
        self.picker.tooltip()
    }

    pub fn copied_email(&self) -> bool {
        self.copied_email.is_some()
    }

    /// Total page height; sets the scroll window and depth reporting
    pub fn set_content_height(&mut self, height: f32) {
        self.content_height = height;
        self.sync_scroll_window();
    }

    pub fn scroll_progress(&self) -> f32 {
        self.scroll.get()
    }

    /// Progress spans the scrollable height: top of page to bottom of page
    fn sync_scroll_window(&mut self) {
        let scrollable = (self.content_height - self.viewport.height).max(1.0);
        self.scroll
            .set_window(ScrollWindow::new(0.0, scrollable), self.scroll_offset);
    }

    /// Route one input event
    pub fn handle(&mut self, event: &InputEvent) {
        if event.counts_as_activity() {
            self.tracker.record_activity();
        }
        tracing::trace!(event = event.name(), "input");

        match *event {
            InputEvent::PointerMove { position, movement } => {
                self.card.pointer_move(position, movement);
            }
            InputEvent::PointerLeave => self.card.pointer_leave(),
            InputEvent::Scroll { offset_y } => {
                self.scroll_offset = offset_y;
                self.scroll.update(offset_y);
                self.tracker
                    .record_scroll(offset_y, self.content_height, self.viewport.height);
            }
            InputEvent::Resize {
                width,
                height,
                max_touch_points,
            } => {
                self.apply_viewport(Viewport::new(width, height).with_touch_points(max_touch_points));
            }
            InputEvent::PointerDown { .. } | InputEvent::Key { .. } | InputEvent::Touch { .. } => {}
        }
    }

    fn apply_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.sync_scroll_window();
        let is_mobile = self.is_mobile();
        self.card
            .resize(Size::new(viewport.width, viewport.height), is_mobile);
        if !is_mobile {
            self.section_tooltip.hide();
        }
    }

    /// Move the clock forward: fire due timers, step springs and advance
    /// local playback progress
    pub fn advance(&mut self, ms: u64) {
        for id in self.scheduler.advance(ms) {
            self.dispatch_timer(id);
        }

        let mut remaining = ms;
        while remaining > 0 && self.card.is_animating() {
            let step = remaining.min(FRAME_MS);
            self.card.step(step as f32 / 1_000.0);
            remaining -= step;
        }

        self.now_playing.tick(ms);
        self.sync_now_playing();
    }

    fn dispatch_timer(&mut self, id: TimerId) {
        if self.tracker.on_timer(id)
            || self.picker.on_timer(id)
            || self.section_tooltip.on_timer(id)
            || self.form.on_timer(id)
        {
            return;
        }
        if self.copied_email.as_ref().is_some_and(|guard| guard.id() == id) {
            self.copied_email = None;
        }
    }

    /// Attach the card's measured box; pointer input is ignored until then
    pub fn mount_card(&mut self, bounds: Rect, natural: Size) {
        self.card_layout = Some((bounds, natural));
        self.card.mount(bounds, natural);
    }

    pub fn unmount_card(&mut self) {
        self.card_layout = None;
        self.card.unmount();
    }

    /// Theme picker click
    pub fn click_theme(&mut self, id: ThemeId) {
        self.picker.click(id, self.is_mobile());
        self.select_theme(id);
    }

    /// Switch themes, remounting the themed subtree
    ///
    /// The card controller is rebuilt from the new theme's interaction
    /// config so no spring or handler carries over from the old theme.
    pub fn select_theme(&mut self, id: ThemeId) -> Option<ThemeChange> {
        let change = self.selection.select(id)?;
        self.tracker.theme_changed(change);

        let viewport = Size::new(self.viewport.width, self.viewport.height);
        self.card = CardController::new(self.theme().interaction, self.is_mobile(), viewport);
        if let Some((bounds, natural)) = self.card_layout {
            self.card.mount(bounds, natural);
        }
        self.expanded_timeline = None;
        Some(change)
    }

    /// Section selector click
    pub fn navigate(&mut self, section: Section) {
        self.active_section = section;
        if self.is_mobile() {
            self.section_tooltip.show(section);
        }
        tracing::debug!(section = section.id(), "navigate");
    }

    /// Copy the email address, returning it for the host clipboard
    pub fn copy_email(&mut self) -> Option<String> {
        let email = self.content.email_link()?.email.clone()?;
        self.copied_email = Some(self.scheduler.schedule_labeled(
            self.config.contact.copied_email_ms,
            None,
            "copied-email",
        ));
        Some(email)
    }

    /// Open a timeline card, or close it when already open
    pub fn toggle_timeline(&mut self, index: usize) {
        self.expanded_timeline = if self.expanded_timeline == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.form.set_email(email);
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.form.set_message(message);
    }

    pub async fn submit_contact(&mut self, sender: &dyn MessageSender) -> folio_layout::FormStatus {
        self.form.submit(sender).await
    }

    /// Follow a poller's results
    pub fn attach_now_playing(&mut self, rx: watch::Receiver<Option<PollResult>>) {
        self.now_playing_rx = Some(rx);
        self.sync_now_playing();
    }

    /// Fold a single poll result in directly
    pub fn apply_now_playing(&mut self, result: PollResult) {
        self.now_playing.apply(result);
    }

    fn sync_now_playing(&mut self) {
        let Some(rx) = self.now_playing_rx.as_mut() else {
            return;
        };
        match rx.has_changed() {
            Ok(true) => {
                let latest = rx.borrow_and_update().clone();
                if let Some(result) = latest {
                    self.now_playing.apply(result);
                }
            }
            Ok(false) => {}
            Err(_) => {
                tracing::debug!("now playing poller stopped");
                self.now_playing_rx = None;
            }
        }
    }

    pub fn layout_state(&self) -> LayoutState {
        let mut state = LayoutState::new(self.remount_key(), self.today).mobile(self.is_mobile());
        state.scroll_progress = Some(self.scroll.get());
        state.copied_email = self.copied_email();
        state.card = self.card.transform();
        state.form = self.form.view();
        state.now_playing = self.now_playing.view().clone();
        state.active_section = self.active_section;
        state.tooltip = self.section_tooltip.current();
        state.expanded_timeline = self.expanded_timeline;
        state
    }

    pub fn render(&self) -> Element {
        let theme = self.theme();
        div()
            .key("app")
            .child(self.picker.render(self.active_theme(), theme))
            .child(ThemeLayout::render(theme, &self.content, &self.layout_state()))
    }
}

impl std::fmt::Debug for PortfolioApp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PortfolioApp")
            .field("theme", &self.selection.active())
            .field("viewport", &self.viewport)
            .field("active_section", &self.active_section)
            .field("pending_timers", &self.scheduler.pending())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::RecordingSink;

    fn app() -> PortfolioApp {
        let content = Arc::new(Content::embedded().unwrap());
        PortfolioApp::new(AppConfig::default(), content, Box::new(RecordingSink::new()))
    }

    #[test]
    fn copied_email_resets() {
        let mut app = app();
        assert_eq!(app.copy_email().as_deref(), Some("alagappanforwork@gmail.com"));
        assert!(app.copied_email());
        app.advance(1_999);
        assert!(app.copied_email());
        app.advance(1);
        assert!(!app.copied_email());
    }

    #[test]
    fn timeline_toggles() {
        let mut app = app();
        app.toggle_timeline(1);
        assert_eq!(app.layout_state().expanded_timeline, Some(1));
        app.toggle_timeline(1);
        assert_eq!(app.layout_state().expanded_timeline, None);
    }

    #[test]
    fn resize_reclassifies_viewport() {
        let mut app = app();
        assert!(!app.is_mobile());
        app.handle(&InputEvent::Resize {
            width: 390.0,
            height: 844.0,
            max_touch_points: 5,
        });
        assert!(app.is_mobile());
        assert!(app.layout_state().is_mobile);
    }
}
