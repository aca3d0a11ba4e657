use super::*;
use crate::foundation::core::FrameNumber;
use crate::timeline::machine::{Playback, TimelineConfig};

#[test]
fn entries_are_created_lazily_with_default_config() {
    let mut registry = TimelineRegistry::new();
    assert!(registry.get(GLOBAL_TIMELINE).is_none());

    let t = registry.get_or_create(GLOBAL_TIMELINE);
    assert_eq!(t.config(), TimelineConfig::default());
    assert_eq!(t.frame_number(), FrameNumber(1));
    assert!(registry.get(GLOBAL_TIMELINE).is_some());
}

#[test]
fn named_timelines_are_independent() {
    let mut registry = TimelineRegistry::new();
    registry
        .get_or_create("modal")
        .configure(TimelineConfig {
            total_frames: 40,
            ..TimelineConfig::default()
        })
        .unwrap();
    registry.get_or_create("modal").seek_to(100.0);

    assert_eq!(
        registry.get("modal").unwrap().frame_number(),
        FrameNumber(40)
    );
    assert_eq!(
        registry.get_or_create(GLOBAL_TIMELINE).frame_number(),
        FrameNumber(1)
    );
}

#[test]
fn remove_tears_down_an_entry() {
    let mut registry = TimelineRegistry::new();
    registry.get_or_create("modal");
    assert!(registry.remove("modal").is_some());
    assert!(registry.get("modal").is_none());
    assert!(registry.remove("modal").is_none());
}

#[test]
fn tick_all_advances_only_playing_timelines() {
    let mut registry = TimelineRegistry::new();
    for name in ["a", "b"] {
        registry
            .get_or_create(name)
            .configure(TimelineConfig {
                total_frames: 10,
                ..TimelineConfig::default()
            })
            .unwrap();
    }
    registry.get_or_create("a").play();

    registry.tick_all();
    registry.tick_all();

    assert_eq!(registry.get("a").unwrap().frame_number(), FrameNumber(3));
    assert_eq!(registry.get("a").unwrap().status(), Playback::Playing);
    assert_eq!(registry.get("b").unwrap().frame_number(), FrameNumber(1));
    assert_eq!(registry.get("b").unwrap().status(), Playback::Idle);
}
