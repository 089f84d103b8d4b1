// SPDX-License-Identifier: MPL-2.0
use std::fs;
use swipe_card::app::Deck;
use swipe_card::config::{self, Config, SwipeConfig};
use swipe_card::domain::swipe::{ImageSource, SwipeDirection, SwipeEvent};
use swipe_card::i18n::fluent::I18n;
use swipe_card::ui::swipe_card::{Effect, Message, State};
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    // Create a temporary directory for the config file
    let dir = tempdir().expect("Failed to create temporary directory");
    let temp_config_file_path = dir.path().join("settings.toml");

    // 1. Initial config: en-US
    fs::write(&temp_config_file_path, "[general]\nlanguage = \"en-US\"\n")
        .expect("Failed to write initial config file");

    let loaded_initial_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load initial config from path");
    let i18n_en = I18n::new(None, &loaded_initial_config);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr(SwipeDirection::Right.badge_key()), "Liked");

    // 2. Change config to fr
    fs::write(&temp_config_file_path, "[general]\nlanguage = \"fr\"\n")
        .expect("Failed to write french config file");

    let loaded_french_config = config::load_from_path(&temp_config_file_path)
        .expect("Failed to load french config from path");
    let i18n_fr = I18n::new(None, &loaded_french_config);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr(SwipeDirection::Left.badge_key()), "Je n'aime pas");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_swipe_settings_load_from_override_dir() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(
        dir.path().join("settings.toml"),
        "[swipe]\nnotify_delay_ms = 300\nreset_delay_ms = 700\nslide_distance = 250.0\n",
    )
    .expect("Failed to write config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert!(warning.is_none());
    let timing = loaded.swipe.timing();
    assert_eq!(timing.notify.as_millis(), 300);
    assert_eq!(timing.reset.as_millis(), 700);
    assert_eq!(loaded.swipe.slide_distance().value(), 250.0);
    assert_eq!(loaded.swipe.swipe_threshold, SwipeConfig::default().swipe_threshold);
}

#[test]
fn test_corrupt_settings_fall_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("settings.toml"), "[swipe]\nnotify_delay_ms = \"soon\"\n")
        .expect("Failed to write corrupt config");

    let (loaded, warning) = config::load_with_override(Some(dir.path().to_path_buf()));
    assert_eq!(loaded, Config::default());

    let i18n = I18n::new(Some("en-US".to_string()), &loaded);
    let key = warning.expect("a warning key");
    assert!(!i18n.tr(&key).starts_with("MISSING"));
}

#[test]
fn test_card_effect_drives_deck() {
    let mut deck = Deck::new(vec![ImageSource::new("a.png"), ImageSource::new("b.png")]);
    let mut card = State::default();

    card.handle(Message::GestureCompleted(SwipeDirection::Left));
    let cycle = card
        .machine()
        .current_cycle()
        .expect("card should be in feedback");

    let (effect, _) = card.handle(Message::Scheduled(SwipeEvent::NotifyDue {
        cycle,
        direction: SwipeDirection::Left,
    }));
    if let Effect::Swiped(direction) = effect {
        deck.record(direction);
    }

    assert_eq!(deck.tally().disliked, 1);
    assert_eq!(deck.current(), Some(&ImageSource::new("b.png")));
}
