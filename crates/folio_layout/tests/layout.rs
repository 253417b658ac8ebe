use folio_core::{Point, Rect, Size};
use folio_layout::content::{Artwork, ArtworkKind};
use folio_layout::media::AspectRatio;
use folio_layout::{
    fit_scale, tilt_for_pointer, CardPadding, Content, Element, FormStatus, LayoutState,
    NowPlayingView, ThemeLayout, TrackView, YearMonth,
};
use folio_theme::{Section, SectionSupport, ThemeId, ThemeRegistry};
use proptest::prelude::*;

fn content() -> Content {
    Content::embedded().expect("bundled content parses")
}

fn state(key: &str) -> LayoutState {
    LayoutState::new(key, YearMonth::new(2025, 6).expect("valid month"))
}

fn placeholders(tree: &Element) -> Vec<&Element> {
    tree.find_all(|e| e.attrs.contains_key("data-placeholder"))
}

#[test]
fn every_theme_renders_every_section() {
    let content = content();
    for theme in ThemeRegistry::global().iter() {
        for is_mobile in [false, true] {
            let tree = ThemeLayout::render(theme, &content, &state("k").mobile(is_mobile));
            for section in Section::all() {
                let key = format!("section-{}", section.id());
                let shell = tree
                    .find_by_key(&key)
                    .unwrap_or_else(|| panic!("{} is missing {key}", theme.id));
                assert!(!shell.class.is_empty());

                let placeholder = placeholders(shell);
                match theme.sections.support(*section) {
                    SectionSupport::Full => assert!(placeholder.is_empty()),
                    SectionSupport::Placeholder { message } => {
                        assert_eq!(placeholder.len(), 1, "{} {key}", theme.id);
                        assert_eq!(placeholder[0].text.as_deref(), Some(message.as_str()));
                    }
                }
            }
        }
    }
}

#[test]
fn no_element_carries_an_unresolved_class() {
    let content = content();
    for theme in ThemeRegistry::global().iter() {
        let tree = ThemeLayout::render(theme, &content, &state("k"));
        tree.walk(&mut |element, _| {
            assert!(!element.class.contains("undefined"), "{}: {:?}", theme.id, element.key);
            assert!(!element.class.contains("  "), "{}: {:?}", theme.id, element.key);
        });
    }
}

#[test]
fn rendering_is_pure() {
    let content = content();
    let theme = ThemeRegistry::global().get(ThemeId::Synthwave);
    let state = state("synthwave-3");
    assert_eq!(
        ThemeLayout::render(theme, &content, &state),
        ThemeLayout::render(theme, &content, &state)
    );
}

#[test]
fn each_section_gets_the_theme_background() {
    let content = content();
    let theme = ThemeRegistry::global().get(ThemeId::Terminal);
    let tree = ThemeLayout::render(theme, &content, &state("k"));
    let backgrounds = tree.find_all(|e| e.attr_value("data-renderer") == Some("terminal"));
    assert_eq!(backgrounds.len(), Section::all().len());
    assert!(backgrounds.iter().all(|bg| !bg.children.is_empty()));
}

#[test]
fn invalid_video_urls_render_inline_error() {
    let mut content = content();
    content.artworks = vec![Artwork {
        name: "Broken".into(),
        kind: ArtworkKind::Youtube,
        url: "https://example.com/not-a-video".into(),
        aspect_ratio: AspectRatio::Widescreen,
        instagram_url: None,
    }];
    let theme = ThemeRegistry::global().get(ThemeId::LiquidGlass);
    let tree = ThemeLayout::render(theme, &content, &state("k"));
    let tile = tree.find_by_key("artwork-0").expect("tile rendered");
    assert_eq!(tile.text_content(), "Invalid YouTube URL");
    assert_eq!(tile.style_value("width"), Some("498px"));
}

#[test]
fn youtube_tiles_embed_the_video() {
    let content = content();
    let theme = ThemeRegistry::global().get(ThemeId::Minimalism);
    let tree = ThemeLayout::render(theme, &content, &state("k"));
    let frames = tree.find_all(|e| e.tag == folio_layout::Tag::Iframe);
    assert!(frames
        .iter()
        .any(|f| f.attr_value("src") == Some("https://www.youtube.com/embed/Q1w2E3r4T5y")));
}

#[test]
fn now_playing_views() {
    let content = content();
    let theme = ThemeRegistry::global().get(ThemeId::Brutalism);
    let mut state = state("k");

    let tree = ThemeLayout::render(theme, &content, &state);
    let widget = tree.find_by_key("now-playing").expect("widget");
    assert_eq!(widget.attr_value("data-state"), Some("loading"));

    state.now_playing = NowPlayingView::Offline;
    let tree = ThemeLayout::render(theme, &content, &state);
    let widget = tree.find_by_key("now-playing").expect("widget");
    assert_eq!(widget.text_content(), "Offline Not playing");

    state.now_playing = NowPlayingView::Track(TrackView {
        name: "Nightcall".into(),
        artist: "Kavinsky".into(),
        album: "OutRun".into(),
        album_image_url: "https://i.scdn.co/image/abc".into(),
        song_url: "https://open.spotify.com/track/1".into(),
        is_playing: false,
        progress_ms: 60_000,
        duration_ms: 240_000,
    });
    let tree = ThemeLayout::render(theme, &content, &state);
    let bar = tree.find_by_key("track-progress").expect("progress bar");
    assert_eq!(bar.style_value("width"), Some("25.0%"));
    let status = tree.find_by_key("track-status").expect("status icon");
    assert_eq!(status.attr_value("src"), Some("/playback/pause.png"));
}

#[test]
fn form_locks_while_not_idle() {
    let content = content();
    let theme = ThemeRegistry::global().get(ThemeId::LiquidGlass);
    let mut state = state("k");
    state.form.email = "me@example.com".into();

    for status in [FormStatus::Idle, FormStatus::Sending, FormStatus::Sent, FormStatus::Failed] {
        state.form.status = status;
        let tree = ThemeLayout::render(theme, &content, &state);
        let submit = tree.find_by_key("form-submit").expect("submit button");
        assert_eq!(submit.text.as_deref(), Some(status.button_label()));
        assert_eq!(submit.attrs.contains_key("disabled"), status != FormStatus::Idle);
        assert!(submit.class.ends_with(status.class(&theme.page.form)));
    }
}

#[test]
fn selector_tooltip_only_on_mobile() {
    let content = content();
    let theme = ThemeRegistry::global().get(ThemeId::Synthwave);
    let mut state = state("k");
    state.active_section = Section::Artworks;
    state.tooltip = Some(Section::Artworks);

    let desktop = ThemeLayout::render(theme, &content, &state);
    assert!(desktop.find_by_key("selector-tooltip").is_none());

    let mobile = ThemeLayout::render(theme, &content, &state.clone().mobile(true));
    let tooltip = mobile.find_by_key("selector-tooltip").expect("tooltip");
    assert_eq!(tooltip.text.as_deref(), Some("Art"));

    let button = mobile.find_by_key("select-artworks").expect("button");
    assert_eq!(button.attr_value("aria-label"), Some("Navigate to Art section"));
    assert_eq!(button.attr_value("aria-current"), Some("true"));
}

#[test]
fn glare_overlay_follows_toggle() {
    let content = content();
    let minimalism = ThemeRegistry::global().get(ThemeId::Minimalism);
    let tree = ThemeLayout::render(minimalism, &content, &state("k"));
    let card = tree.find_by_key("profile-card").expect("card");
    assert!(card.find_all(|e| e.style.contains_key("mix-blend-mode")).is_empty());

    let synthwave = ThemeRegistry::global().get(ThemeId::Synthwave);
    let tree = ThemeLayout::render(synthwave, &content, &state("k").mobile(true));
    let card = tree.find_by_key("profile-card").expect("card");
    let sheen = card.find_all(|e| e.style.contains_key("mix-blend-mode"));
    assert_eq!(sheen.len(), 1);
    assert_eq!(sheen[0].style_value("mix-blend-mode"), Some("normal"));
    assert_eq!(card.style_value("transform-style"), Some("flat"));
}

#[test]
fn disabled_animations_render_final_poses() {
    let content = content();
    let mut theme = ThemeRegistry::global().get(ThemeId::Synthwave).clone();
    theme.mobile.disable_animations = true;

    let tree = ThemeLayout::render(&theme, &content, &state("k").mobile(true));
    tree.walk(&mut |element, _| {
        if let Some(motion) = element.motion {
            assert_eq!(motion.sample(0), motion.animate, "{:?}", element.key);
        }
    });

    let desktop = ThemeLayout::render(&theme, &content, &state("k"));
    let badge = desktop.find_by_key("badge").and_then(|b| b.motion).expect("badge motion");
    assert_ne!(badge.sample(0), badge.animate);
}

#[test]
fn expanded_timeline_shows_roles() {
    let content = content();
    let theme = ThemeRegistry::global().get(ThemeId::Brutalism);
    let mut state = state("k");
    let collapsed = ThemeLayout::render(theme, &content, &state);
    assert!(collapsed.find_by_key("timeline-0-roles").is_none());
    assert_eq!(
        collapsed.find_by_key("timeline-0-duration").and_then(|e| e.text.as_deref()),
        Some("2 years")
    );

    state.expanded_timeline = Some(0);
    let expanded = ThemeLayout::render(theme, &content, &state);
    assert!(expanded.find_by_key("timeline-0-roles").is_some());
}

proptest! {
    #[test]
    fn fit_scale_stays_in_bounds(
        natural_w in 1.0f32..4_000.0,
        natural_h in 1.0f32..6_000.0,
        viewport_w in 320.0f32..3_000.0,
        viewport_h in 320.0f32..3_000.0,
        min_scale in 0.1f32..1.0,
        mobile in any::<bool>(),
    ) {
        let padding = CardPadding::for_viewport(mobile);
        let natural = Size::new(natural_w, natural_h);
        let viewport = Size::new(viewport_w, viewport_h);
        let scale = fit_scale(natural, viewport, padding, min_scale);

        prop_assert!(scale >= min_scale - 1e-6 && scale <= 1.0);

        let available = padding.available(viewport);
        let ratio = (available.height / natural_h).min(available.width / natural_w);
        if ratio >= min_scale {
            prop_assert!(scale * natural_h <= available.height * (1.0 + 1e-5));
            prop_assert!(scale * natural_w <= available.width * (1.0 + 1e-5));
        }
    }

    #[test]
    fn tilt_never_exceeds_max(
        x in -10_000.0f32..10_000.0,
        y in -10_000.0f32..10_000.0,
        w in 0.0f32..2_000.0,
        h in 0.0f32..2_000.0,
        max in 0.0f32..45.0,
    ) {
        let (rx, ry) = tilt_for_pointer(Point::new(x, y), Rect::new(0.0, 0.0, w, h), max);
        prop_assert!(rx.abs() <= max && ry.abs() <= max);
    }
}
