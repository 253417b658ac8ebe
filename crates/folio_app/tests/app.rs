use std::sync::Arc;
use std::time::Duration;

use folio_app::integrations::{
    AnalyticsEvent, ContactPayload, MessageSender, NowPlayingPoller, RecordingSink,
    ScriptedSource, Track,
};
use folio_app::{AppConfig, IntegrationError, PortfolioApp};
use folio_core::{InputEvent, KeyCode, Modifiers, Point, Rect, Size, Viewport};
use folio_layout::{Content, Element, FormStatus, NowPlayingView, YearMonth};
use folio_theme::{Section, ThemeId};

fn app_with(theme: ThemeId, viewport: Viewport) -> (PortfolioApp, RecordingSink) {
    let sink = RecordingSink::new();
    let config = AppConfig {
        default_theme: theme,
        ..AppConfig::default()
    };
    let content = Arc::new(Content::embedded().expect("bundled content"));
    let app = PortfolioApp::new(config, content, Box::new(sink.clone()))
        .with_viewport(viewport)
        .with_today(YearMonth::new(2025, 6).expect("valid month"));
    (app, sink)
}

fn mobile() -> Viewport {
    Viewport::new(390.0, 844.0).with_touch_points(5)
}

fn track(name: &str) -> Track {
    Track {
        name: name.into(),
        artist: "Kavinsky".into(),
        album: "OutRun".into(),
        album_image_url: String::new(),
        song_url: "#".into(),
        is_playing: true,
        progress_ms: 1_000,
        duration_ms: 200_000,
    }
}

/// The themed subtree with its remount key cleared
fn themed_subtree(app: &PortfolioApp) -> Element {
    let tree = app.render();
    let mut layout = tree
        .find_by_key(&app.remount_key())
        .cloned()
        .expect("layout subtree");
    layout.key = None;
    layout
}

#[test]
fn switching_theme_records_change_and_remounts() {
    let (mut app, sink) = app_with(ThemeId::Minimalism, Viewport::default());
    app.click_theme(ThemeId::Synthwave);

    assert_eq!(app.active_theme(), ThemeId::Synthwave);
    assert_eq!(
        sink.events(),
        vec![AnalyticsEvent::ThemeChange {
            from: ThemeId::Minimalism,
            to: ThemeId::Synthwave,
        }]
    );

    let tree = app.render();
    let layout = tree.find_by_key("synthwave-1").expect("remounted subtree");
    assert_eq!(layout.attr_value("data-theme"), Some("synthwave"));
    assert!(!layout
        .find_all(|e| e.attr_value("data-renderer") == Some("synthwave"))
        .is_empty());
    assert!(tree.find_by_key("minimalism-0").is_none());
}

#[test]
fn reselecting_active_theme_is_silent() {
    let (mut app, sink) = app_with(ThemeId::Terminal, Viewport::default());
    assert!(app.select_theme(ThemeId::Terminal).is_none());
    assert!(sink.events().is_empty());
    assert_eq!(app.remount_key(), "terminal-0");
}

#[test]
fn switching_back_restores_the_same_tree() {
    let (mut app, _) = app_with(ThemeId::Brutalism, Viewport::default());
    let before = themed_subtree(&app);
    app.select_theme(ThemeId::LiquidGlass);
    app.select_theme(ThemeId::Brutalism);
    assert_eq!(app.remount_key(), "brutalism-2");
    assert_eq!(themed_subtree(&app), before);
}

#[test]
fn scroll_milestone_fires_once() {
    let (mut app, sink) = app_with(ThemeId::Minimalism, Viewport::default());
    app.set_content_height(4_500.0);
    app.start();
    sink.take();

    let scrollable = 4_500.0 - 900.0;
    for depth in [0.26, 0.2, 0.26, 0.1, 0.27] {
        app.handle(&InputEvent::Scroll {
            offset_y: scrollable * depth,
        });
    }
    assert_eq!(sink.take(), vec![AnalyticsEvent::ScrollDepth { percent: 25 }]);
}

#[test]
fn scroll_progress_spans_the_scrollable_height() {
    let (mut app, _) = app_with(ThemeId::Synthwave, Viewport::default());
    app.set_content_height(6_000.0);

    app.handle(&InputEvent::Scroll { offset_y: 10.0 });
    assert!(app.scroll_progress() < 0.01);

    app.handle(&InputEvent::Scroll { offset_y: 2_550.0 });
    assert!((app.scroll_progress() - 0.5).abs() < 1e-4);
    assert_eq!(app.layout_state().scroll_progress, Some(app.scroll_progress()));

    app.handle(&InputEvent::Scroll { offset_y: 5_100.0 });
    assert_eq!(app.scroll_progress(), 1.0);
}

#[test]
fn resize_rescales_scroll_progress() {
    let (mut app, _) = app_with(ThemeId::Minimalism, Viewport::default());
    app.set_content_height(6_000.0);
    app.handle(&InputEvent::Scroll { offset_y: 2_550.0 });

    app.handle(&InputEvent::Resize {
        width: 1_440.0,
        height: 3_450.0,
        max_touch_points: 0,
    });
    assert_eq!(app.scroll_progress(), 1.0);
}

#[test]
fn inactivity_ignores_resizes() {
    let (mut app, sink) = app_with(ThemeId::Minimalism, Viewport::default());
    app.start();
    sink.take();

    app.advance(20_000);
    app.handle(&InputEvent::Resize {
        width: 1_280.0,
        height: 800.0,
        max_touch_points: 0,
    });
    app.advance(10_000);
    assert!(sink.events().contains(&AnalyticsEvent::Inactive));

    sink.take();
    app.handle(&InputEvent::Key {
        key: KeyCode::DOWN,
        modifiers: Modifiers::default(),
    });
    app.advance(29_000);
    assert!(!sink.events().contains(&AnalyticsEvent::Inactive));
}

#[test]
fn mobile_picker_tooltip_is_transient() {
    let (mut app, _) = app_with(ThemeId::Minimalism, mobile());
    app.click_theme(ThemeId::Terminal);
    app.advance(1_000);
    app.click_theme(ThemeId::Synthwave);
    app.advance(1_000);
    assert_eq!(app.picker_tooltip(), Some(ThemeId::Synthwave));
    app.advance(600);
    assert_eq!(app.picker_tooltip(), None);

    let (mut desktop, _) = app_with(ThemeId::Minimalism, Viewport::default());
    desktop.click_theme(ThemeId::Terminal);
    assert_eq!(desktop.picker_tooltip(), None);
}

#[test]
fn section_tooltip_on_mobile() {
    let (mut app, _) = app_with(ThemeId::Synthwave, mobile());
    app.navigate(Section::Journey);
    let tree = app.render();
    assert!(tree.find_by_key("selector-tooltip").is_some());
    assert_eq!(
        tree.find_by_key("select-journey")
            .and_then(|b| b.attr_value("aria-current")),
        Some("true")
    );
    app.advance(1_600);
    assert!(app.render().find_by_key("selector-tooltip").is_none());
}

#[test]
fn teardown_cancels_every_timer() {
    let (mut app, _) = app_with(ThemeId::Minimalism, mobile());
    let scheduler = app.scheduler().clone();
    app.start();
    app.copy_email();
    app.click_theme(ThemeId::Terminal);
    app.navigate(Section::About);
    assert_eq!(scheduler.pending(), 5);

    drop(app);
    assert_eq!(scheduler.pending(), 0);
}

#[test]
fn card_ignores_pointer_until_mounted() {
    let (mut app, _) = app_with(ThemeId::Synthwave, Viewport::default());
    let tilt = Point::new(0.0, 0.0);
    app.handle(&InputEvent::PointerMove {
        position: tilt,
        movement: Point::new(10.0, 10.0),
    });
    app.advance(500);
    assert_eq!(app.layout_state().card.rotate_y, 0.0);

    app.mount_card(Rect::new(0.0, 0.0, 400.0, 600.0), Size::new(400.0, 600.0));
    app.handle(&InputEvent::PointerMove {
        position: tilt,
        movement: Point::new(10.0, 10.0),
    });
    app.advance(2_000);
    let card = app.layout_state().card;
    assert!(card.rotate_y > 0.0);
    assert!(card.rotate_x < 0.0);
    assert!(card.rotate_y <= app.theme().interaction.card_tilt_max + 0.01);
}

#[test]
fn card_stays_flat_on_mobile() {
    let (mut app, _) = app_with(ThemeId::Synthwave, mobile());
    app.mount_card(Rect::new(0.0, 0.0, 300.0, 500.0), Size::new(300.0, 500.0));
    app.handle(&InputEvent::PointerMove {
        position: Point::new(0.0, 0.0),
        movement: Point::new(30.0, 30.0),
    });
    app.advance(1_000);
    let card = app.layout_state().card;
    assert_eq!((card.rotate_x, card.rotate_y), (0.0, 0.0));
}

#[test]
fn remounted_card_keeps_its_box() {
    let (mut app, _) = app_with(ThemeId::Synthwave, Viewport::default());
    app.mount_card(Rect::new(0.0, 0.0, 400.0, 600.0), Size::new(400.0, 600.0));
    app.select_theme(ThemeId::Terminal);
    assert!(app.card().is_mounted());
}

#[test]
fn now_playing_never_flashes_offline() {
    let (mut app, _) = app_with(ThemeId::Minimalism, Viewport::default());
    app.apply_now_playing(Ok(Some(track("Nightcall"))));
    app.apply_now_playing(Ok(None));
    assert!(matches!(
        app.layout_state().now_playing,
        NowPlayingView::Track(ref t) if t.name == "Nightcall"
    ));
    app.apply_now_playing(Ok(Some(track("Nightcall"))));
    assert!(app.is_playing());
}

struct FlakySender;

#[async_trait::async_trait]
impl MessageSender for FlakySender {
    async fn send(&self, _payload: &ContactPayload) -> Result<(), IntegrationError> {
        Err(IntegrationError::Transport("connection reset".into()))
    }
}

#[tokio::test]
async fn failed_contact_reverts_after_display_time() {
    let (mut app, _) = app_with(ThemeId::LiquidGlass, Viewport::default());
    app.set_email("visitor@example.com");
    app.set_message("Hi!");
    assert_eq!(app.submit_contact(&FlakySender).await, FormStatus::Failed);

    let tree = app.render();
    let submit = tree.find_by_key("form-submit").expect("submit button");
    assert_eq!(submit.text.as_deref(), Some("Failed to send, try again?"));
    assert!(submit.attrs.contains_key("disabled"));

    app.advance(5_000);
    assert_eq!(app.form().status(), FormStatus::Idle);
    assert_eq!(app.form().view().email, "visitor@example.com");
}

#[tokio::test(start_paused = true)]
async fn poller_feeds_the_app() {
    let source = Arc::new(ScriptedSource::new([
        Ok(Some(track("Nightcall"))),
        Ok(None),
        Err(IntegrationError::Status(503)),
        Ok(Some(track("Nightcall"))),
    ]));
    let poller = NowPlayingPoller::spawn(source, Duration::from_secs(5));
    let mut rx = poller.subscribe();
    let (mut app, _) = app_with(ThemeId::Minimalism, Viewport::default());
    app.attach_now_playing(poller.subscribe());

    for _ in 0..4 {
        rx.changed().await.expect("poller running");
        app.advance(0);
        assert!(matches!(app.now_playing().view(), NowPlayingView::Track(_)));
    }
    assert!(app.is_playing());
}

#[tokio::test(start_paused = true)]
async fn first_empty_poll_shows_offline() {
    let poller = NowPlayingPoller::spawn(Arc::new(ScriptedSource::new([Ok(None)])), Duration::from_secs(5));
    let mut rx = poller.subscribe();
    let (mut app, _) = app_with(ThemeId::Minimalism, Viewport::default());
    app.attach_now_playing(poller.subscribe());

    rx.changed().await.expect("poller running");
    app.advance(0);
    assert_eq!(app.now_playing().view(), &NowPlayingView::Offline);
}

#[tokio::test(start_paused = true)]
async fn dropping_poller_stops_polling() {
    let poller = NowPlayingPoller::spawn(Arc::new(ScriptedSource::new([])), Duration::from_secs(5));
    let mut rx = poller.subscribe();
    rx.changed().await.expect("first poll");
    assert!(poller.is_running());

    drop(poller);
    assert!(rx.changed().await.is_err());
}
