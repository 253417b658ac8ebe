use folio_theme::{
    BackgroundContext, LayerKind, Section, SectionSupport, ThemeId, ThemeRegistry, ThemeSelection,
};
use proptest::prelude::*;

#[test]
fn theme_catalog_contains_expected_themes() {
    let mut ids: Vec<&str> = ThemeId::all().iter().map(|t| t.id()).collect();
    ids.sort_unstable();
    assert_eq!(
        ids,
        vec!["brutalism", "liquid_glass", "minimalism", "synthwave", "terminal"]
    );
}

#[test]
fn every_theme_validates() {
    assert_eq!(ThemeRegistry::global().validate(), Ok(()));
}

#[test]
fn display_names_match_configs() {
    for id in ThemeId::all() {
        let theme = ThemeRegistry::global().get(*id);
        assert_eq!(theme.name, id.display_name(), "Theme {id} has a mismatched name");
    }
}

#[test]
fn only_brutalism_renders_every_section() {
    for theme in ThemeRegistry::global().iter() {
        let lifestyle = theme.sections.support(Section::Lifestyle);
        if theme.id == ThemeId::Brutalism {
            assert!(lifestyle.is_full());
        } else {
            assert_eq!(
                lifestyle,
                &SectionSupport::placeholder("Lifestyle section - theme not implemented"),
                "Theme {} should render a lifestyle placeholder",
                theme.id
            );
        }
        for section in [Section::Home, Section::About, Section::Journey, Section::Artworks, Section::Connect] {
            assert!(
                theme.sections.support(section).is_full(),
                "Theme {} should fully render {section:?}",
                theme.id
            );
        }
    }
}

#[test]
fn mobile_fallback_replaces_page_background() {
    for theme in ThemeRegistry::global().iter() {
        assert_eq!(
            theme.page_background(true),
            Some(theme.mobile.background.as_str())
        );
    }
    let brutalism = ThemeRegistry::global().get(ThemeId::Brutalism);
    assert!(brutalism
        .page_background(false)
        .is_some_and(|bg| bg.starts_with("repeating-linear-gradient")));
    let minimalism = ThemeRegistry::global().get(ThemeId::Minimalism);
    assert_eq!(minimalism.page_background(false), None);
}

#[test]
fn glare_toggle_follows_interaction_config() {
    let registry = ThemeRegistry::global();
    assert!(!registry.get(ThemeId::Minimalism).interaction.enable_glare_effect);
    assert!(registry.get(ThemeId::Terminal).interaction.enable_glare_effect);
    assert_eq!(registry.get(ThemeId::Synthwave).interaction.card_tilt_max, 8.0);
}

#[test]
fn every_background_renders_on_both_viewports() {
    for theme in ThemeRegistry::global().iter() {
        let desktop = theme.render_background(&BackgroundContext::desktop());
        let mobile = theme.render_background(&BackgroundContext::mobile());
        assert!(!desktop.is_empty(), "Theme {} has an empty desktop background", theme.id);
        assert!(!mobile.is_empty(), "Theme {} has an empty mobile background", theme.id);
    }
}

#[test]
fn liquid_glass_without_video_renders_gradients_only() {
    let theme = ThemeRegistry::global().get(ThemeId::LiquidGlass);
    let layers = theme.render_background(&BackgroundContext::desktop());
    assert!(layers.iter().all(|l| l.kind != LayerKind::Video));
    assert_eq!(theme.background.name(), "liquid_glass");
}

#[test]
fn brutalism_link_kinds_have_distinct_fills() {
    let links = &ThemeRegistry::global().get(ThemeId::Brutalism).links;
    assert_eq!(links.kind_style.email.get("background-color"), Some("#FFB6C1"));
    assert_eq!(links.kind_style.link.get("background-color"), Some("#FFFBF3"));
    assert_ne!(links.motion.link.email, links.motion.link.link);
}

proptest! {
    #[test]
    fn disabled_animations_collapse_to_final_pose(index in 0usize..4, elapsed in 0u64..5_000) {
        for theme in ThemeRegistry::global().iter() {
            let mut theme = theme.clone();
            theme.mobile.disable_animations = true;

            let animations = theme.animations_for(true);
            prop_assert_eq!(animations.heading.sample(elapsed), animations.heading.animate);
            prop_assert_eq!(animations.link(index).sample(elapsed), animations.link(index).animate);

            let desktop = theme.animations_for(false);
            prop_assert_eq!(desktop, theme.animations);
        }
    }

    #[test]
    fn remount_key_changes_on_every_switch(picks in prop::collection::vec(0usize..5, 1..20)) {
        let mut selection = ThemeSelection::default();
        let mut last_key = selection.remount_key();
        for pick in picks {
            let id = ThemeId::all()[pick];
            let changed = selection.select(id).is_some();
            let key = selection.remount_key();
            prop_assert_eq!(changed, key != last_key);
            prop_assert!(key.starts_with(id.id()));
            last_key = key;
        }
    }

    #[test]
    fn theme_ids_round_trip_through_parse(pick in 0usize..5) {
        let id = ThemeId::all()[pick];
        prop_assert_eq!(id.id().parse::<ThemeId>(), Ok(id));
        prop_assert_eq!(id.id().to_uppercase().parse::<ThemeId>(), Ok(id));
    }
}
