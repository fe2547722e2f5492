//! Island state machine properties

use std::time::Duration;

use campus_types::ui::{IslandConfig, IslandState};
use campus_types::{AnimationStep, SizePreset};

fn island_at(size: SizePreset) -> IslandState {
    IslandState::new(IslandConfig {
        initial_size: size,
        initial_animation: Vec::new(),
    })
}

#[test]
fn previous_size_is_empty_after_init_for_every_size() {
    for preset in SizePreset::ALL {
        let island = island_at(preset);
        assert_eq!(island.previous_size(), SizePreset::Empty);

        // Re-initialization re-derives Empty even after direct assignments.
        let mut island = island_at(SizePreset::Default);
        island.set_size(SizePreset::Tall);
        island.initialize(preset);
        assert_eq!(island.size(), preset);
        assert_eq!(island.previous_size(), SizePreset::Empty);
    }
}

#[test]
fn consecutive_set_size_tracks_previous() {
    let mut island = island_at(SizePreset::Default);
    island.set_size(SizePreset::Compact);
    island.set_size(SizePreset::Ultra);
    assert_eq!(island.previous_size(), SizePreset::Compact);
    assert_eq!(island.size(), SizePreset::Ultra);
    assert!(!island.is_animating());
}

#[test]
fn two_zero_delay_steps_land_on_the_last() {
    let mut island = island_at(SizePreset::Default);
    island.schedule_animation([
        AnimationStep::immediate(SizePreset::Compact),
        AnimationStep::immediate(SizePreset::Large),
    ]);

    island.advance(Duration::ZERO);
    assert_eq!(island.size(), SizePreset::Large);
    assert!(!island.is_animating());
    assert_eq!(island.pending_steps(), 0);
}

#[test]
fn empty_schedule_leaves_state_untouched() {
    let mut island = island_at(SizePreset::Compact);
    island.set_size(SizePreset::Tall);
    let before = island.clone();

    island.schedule_animation(Vec::new());
    assert_eq!(island, before);
}

#[test]
fn delayed_single_step_scenario() {
    // Initial size DEFAULT, schedule [{COMPACT, 50ms}]; after >= 50ms the
    // state is {current: COMPACT, previous: DEFAULT, not animating}.
    let mut island = island_at(SizePreset::Default);
    island.schedule_animation([AnimationStep::new(SizePreset::Compact, 50)]);
    assert!(island.is_animating());

    island.advance(Duration::from_millis(50));
    assert_eq!(island.size(), SizePreset::Compact);
    assert_eq!(island.previous_size(), SizePreset::Default);
    assert!(!island.is_animating());
}

#[test]
fn drain_applies_steps_strictly_in_order() {
    let mut island = island_at(SizePreset::Default);
    island.schedule_animation([
        AnimationStep::new(SizePreset::Compact, 10),
        AnimationStep::new(SizePreset::Medium, 10),
        AnimationStep::new(SizePreset::Tall, 10),
    ]);

    island.advance(Duration::from_millis(10));
    assert_eq!(island.size(), SizePreset::Compact);
    island.advance(Duration::from_millis(10));
    assert_eq!(island.size(), SizePreset::Medium);
    island.advance(Duration::from_millis(10));
    assert_eq!(island.size(), SizePreset::Tall);
    assert!(!island.is_animating());

    // Each step shifted previous exactly like a direct assignment.
    assert_eq!(island.previous_size(), SizePreset::Medium);
}

#[test]
fn one_large_advance_drains_the_whole_queue() {
    let mut island = island_at(SizePreset::Default);
    island.schedule_animation([
        AnimationStep::new(SizePreset::Compact, 20),
        AnimationStep::new(SizePreset::Ultra, 30),
    ]);

    island.advance(Duration::from_millis(55));
    assert_eq!(island.size(), SizePreset::Ultra);
    assert_eq!(island.previous_size(), SizePreset::Compact);
    assert!(!island.is_animating());
}

#[test]
fn rescheduling_cancels_and_replaces() {
    let mut island = island_at(SizePreset::Default);
    island.schedule_animation([AnimationStep::new(SizePreset::Massive, 10)]);
    island.schedule_animation([AnimationStep::new(SizePreset::MinimalLeading, 10)]);

    island.advance(Duration::from_millis(10));
    assert_eq!(island.size(), SizePreset::MinimalLeading);
    assert!(!island.is_animating());

    // The replaced step never fires, no matter how long we wait.
    island.advance(Duration::from_secs(5));
    assert_eq!(island.size(), SizePreset::MinimalLeading);
}

#[test]
fn initial_animation_from_config_drains() {
    let mut island = IslandState::new(IslandConfig {
        initial_size: SizePreset::Default,
        initial_animation: vec![AnimationStep::new(SizePreset::Compact, 25)],
    });
    assert!(island.is_animating());

    island.advance(Duration::from_millis(25));
    assert_eq!(island.size(), SizePreset::Compact);
    assert!(!island.is_animating());
}
