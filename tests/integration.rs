// SPDX-License-Identifier: MPL-2.0
use folio::config::{self, Config};
use folio::content::Content;
use folio::showcase::{Carousel, ScrollTracker, Section, StatCounter, Typewriter};
use folio::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn theme_preference_round_trips_through_config_file() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    // 1. Initial preference: dark
    let initial = Config {
        theme: Some(ThemeMode::Dark),
        reduced_motion: Some(false),
    };
    config::save_to_path(&initial, &config_path).expect("Failed to write initial config");

    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded.theme, Some(ThemeMode::Dark));

    // 2. Toggle to light, as the navbar button would, and persist again
    let toggled = Config {
        theme: Some(loaded.theme.unwrap().toggled()),
        reduced_motion: loaded.reduced_motion,
    };
    config::save_to_path(&toggled, &config_path).expect("Failed to write toggled config");

    let reloaded = config::load_from_path(&config_path).expect("Failed to reload config");
    assert_eq!(reloaded.theme, Some(ThemeMode::Light));

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn gallery_walkthrough_matches_the_expected_indices() {
    // Four slides: jump to the third, then advance across the wrap
    let mut carousel = Carousel::new(4);
    carousel.jump_to(2);
    assert_eq!(carousel.current_index(), 2);
    carousel.advance();
    assert_eq!(carousel.current_index(), 3);
    carousel.advance();
    assert_eq!(carousel.current_index(), 0);
}

#[test]
fn hovering_suppresses_auto_advance_without_resetting_it() {
    let mut carousel = Carousel::new(3);
    carousel.start();

    // Pointer enters: three ticks pass with no effect
    carousel.pause();
    for _ in 0..3 {
        carousel.tick();
    }
    assert_eq!(carousel.current_index(), 0);

    // Pointer leaves: the very next tick advances
    carousel.resume();
    carousel.tick();
    assert_eq!(carousel.current_index(), 1);
}

#[test]
fn default_content_builds_working_galleries() {
    let content = Content::default();

    let mut carousels: Vec<Carousel> = content
        .projects
        .iter()
        .map(|project| Carousel::new(project.slides.len()))
        .collect();
    carousels.push(Carousel::new(content.certificates.len()));

    for carousel in &mut carousels {
        carousel.start();
        assert!(carousel.is_running(), "default galleries have 2+ slides");

        // A full cycle returns to the first slide
        let count = carousel.slide_count();
        for _ in 0..count {
            carousel.tick();
        }
        assert_eq!(carousel.current_index(), 0);
    }
}

#[test]
fn typewriter_cycles_through_the_default_headlines() {
    let content = Content::default();
    let phrase_count = content.headline_phrases.len();
    let mut typewriter = Typewriter::new(content.headline_phrases);

    // Drive one full phrase cycle: type all chars, hold, delete, hold
    let first_len = typewriter.visible_text().len(); // starts empty
    assert_eq!(first_len, 0);

    let mut guard = 0;
    while typewriter.phrase_index() == 0 {
        typewriter.tick();
        guard += 1;
        assert!(guard < 1000, "typewriter failed to move to the next phrase");
    }
    assert_eq!(typewriter.phrase_index(), 1);
    assert!(phrase_count > 1);
}

#[test]
fn scrolling_the_page_reveals_and_activates_sections() {
    let bounds = vec![
        (Section::Home, 0.0),
        (Section::Skills, 700.0),
        (Section::Projects, 1400.0),
        (Section::Contact, 2100.0),
    ];
    let mut tracker = ScrollTracker::new(bounds, 650.0);

    // Hero counters start as soon as the page opens
    assert!(tracker.is_revealed(Section::Home));
    assert_eq!(tracker.active_section(), Section::Home);

    // Scroll to the skills section: it reveals exactly once
    let fresh = tracker.set_offset(700.0);
    assert!(fresh.contains(&Section::Skills));
    assert_eq!(tracker.active_section(), Section::Skills);
    assert!(tracker.set_offset(700.0).is_empty());

    // Stat counters driven by the reveal finish at their targets
    let mut counter = StatCounter::new(25, true);
    counter.start();
    while counter.is_animating() {
        counter.tick();
    }
    assert_eq!(counter.display(), "25+");
}
