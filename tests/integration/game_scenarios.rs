//! Integration tests for the input → FSM → pet pipeline.
//!
//! These drive [`PetGame`] directly, the way a cooperative host without an
//! interrupt layer would, and check effects, tones, and emitted events.

use pocketpet::app::events::{GameEvent, Trigger};
use pocketpet::app::service::PetGame;
use pocketpet::config::GameConfig;
use pocketpet::fsm::Activity;
use pocketpet::input::{ButtonId, InputEvent, MenuItem, Route};
use pocketpet::pet::Stats;

use crate::mock_hw::{MockTone, RecordingSink};

fn make_game() -> (PetGame, RecordingSink) {
    let mut sink = RecordingSink::new();
    let mut game = PetGame::new(GameConfig::default(), 0);
    game.start(&mut sink);
    (game, sink)
}

fn press(game: &mut PetGame, id: ButtonId, now: u32, sink: &mut RecordingSink) -> Route {
    game.handle_input(InputEvent::Pressed(id), now, sink)
}

fn release(game: &mut PetGame, id: ButtonId, now: u32, sink: &mut RecordingSink) -> Route {
    game.handle_input(InputEvent::Released(id), now, sink)
}

/// Exhaust the pet and tick through the default 5 s dwell.  Returns the
/// time of the fatal tick.
fn kill(game: &mut PetGame, sink: &mut RecordingSink) -> u32 {
    game.context_mut().pet.stats = Stats::new(0, 0, 0, 100);
    let mut t = 0;
    for _ in 0..6 {
        t += 1000;
        game.tick(t, sink);
    }
    assert_eq!(game.activity(), Activity::Dead);
    t
}

// ── Ageing ────────────────────────────────────────────────────

#[test]
fn tick_without_neglect_leaves_happiness() {
    let (mut game, mut sink) = make_game();
    game.context_mut().pet.stats = Stats::new(30, 30, 30, 0);
    game.tick(1000, &mut sink);
    assert_eq!(game.pet().stats.values(), (29, 30, 29, 2));
}

#[test]
fn started_event_comes_first() {
    let (_game, sink) = make_game();
    assert_eq!(sink.events.first(), Some(&GameEvent::Started(Activity::Idle)));
}

// ── Care actions ──────────────────────────────────────────────

#[test]
fn motion_trip_from_idle_plays_once() {
    let (mut game, mut sink) = make_game();
    let mut tone = MockTone::new();

    assert!(matches!(press(&mut game, ButtonId::Next, 0, &mut sink), Route::MenuMoved(MenuItem::Play)));
    let route = game.handle_input(InputEvent::MotionTripped, 100, &mut sink);
    assert_eq!(route, Route::MotionPlay);

    assert_eq!(game.activity(), Activity::Playing);
    // 50/80/80/0 → play(): happy +18, energy −10, hunger −8
    assert_eq!(game.pet().stats.values(), (42, 98, 70, 0));
    assert_eq!(game.last_play_accepted(), Some(true));
    assert_eq!(game.cursor(Activity::Playing).frame_index, 0);
    assert_eq!(game.menu().selected(), MenuItem::Play);

    // jingle is spaced 80 ms, the play cue follows it
    game.flush_tones(100, &mut tone);
    assert_eq!(tone.frequencies(), vec![500, 1200]);
    game.flush_tones(180, &mut tone);
    game.flush_tones(260, &mut tone);
    game.flush_tones(340, &mut tone);
    assert_eq!(tone.frequencies(), vec![500, 1200, 1500, 1800, 1000]);

    assert_eq!(sink.transitions(), vec![(Activity::Idle, Activity::Playing, Trigger::Motion)]);
}

#[test]
fn confirm_food_feeds_exactly_once() {
    let (mut game, mut sink) = make_game();
    assert_eq!(press(&mut game, ButtonId::Confirm, 0, &mut sink), Route::Start(Activity::Eating));
    assert_eq!(game.pet().stats.values(), (75, 80, 85, 0));

    // play the whole animation; no ticks in between
    let mut t = 0;
    while game.activity() == Activity::Eating {
        t += 30;
        game.animate(t, &mut sink);
        assert!(t < 5000, "eating should end");
    }
    assert_eq!(game.activity(), Activity::Idle);
    assert_eq!(game.pet().stats.values(), (75, 80, 85, 0));
    // 4 frames × 2 loops at 180 ms
    assert!(t >= 8 * 180);
    assert_eq!(
        sink.transitions(),
        vec![
            (Activity::Idle, Activity::Eating, Trigger::MenuConfirm),
            (Activity::Eating, Activity::Idle, Trigger::AnimationDone),
        ]
    );
}

#[test]
fn clean_applies_on_entry() {
    let (mut game, mut sink) = make_game();
    game.context_mut().pet.stats = Stats::new(50, 50, 50, 70);
    press(&mut game, ButtonId::Prev, 0, &mut sink);
    assert_eq!(game.menu().selected(), MenuItem::Clean);
    press(&mut game, ButtonId::Confirm, 10, &mut sink);
    assert_eq!(game.activity(), Activity::Cleaning);
    assert_eq!(game.pet().stats.values(), (50, 60, 50, 30));
}

#[test]
fn refused_play_still_animates() {
    let (mut game, mut sink) = make_game();
    game.context_mut().pet.stats = Stats::new(5, 50, 50, 0);
    press(&mut game, ButtonId::Next, 0, &mut sink);
    press(&mut game, ButtonId::Confirm, 0, &mut sink);
    assert_eq!(game.activity(), Activity::Playing);
    assert_eq!(game.last_play_accepted(), Some(false));
    assert_eq!(game.pet().stats.values(), (5, 50, 50, 0));
}

#[test]
fn busy_activity_ignores_buttons_and_motion() {
    let (mut game, mut sink) = make_game();
    press(&mut game, ButtonId::Confirm, 0, &mut sink);
    let before = game.pet().stats;

    for id in ButtonId::ALL {
        assert_eq!(press(&mut game, id, 10, &mut sink), Route::Ignored);
    }
    assert_eq!(game.handle_input(InputEvent::MotionTripped, 20, &mut sink), Route::Ignored);

    assert_eq!(game.activity(), Activity::Eating);
    assert_eq!(game.menu().selected(), MenuItem::Food);
    assert_eq!(game.pet().stats, before);
    assert_eq!(sink.count(|e| matches!(e, GameEvent::InputIgnored { .. })), 4);
}

// ── Death and revival ─────────────────────────────────────────

#[test]
fn death_after_continuous_dwell() {
    let (mut game, mut sink) = make_game();
    let t = kill(&mut game, &mut sink);
    assert_eq!(t, 6000);
    assert!(sink.events.contains(&GameEvent::Died { exhausted_ms: 5000 }));
    assert_eq!(sink.transitions(), vec![(Activity::Idle, Activity::Dead, Trigger::DeathWatch)]);
    assert!(game.frame().is_dead);
}

#[test]
fn one_tick_of_recovery_resets_watch() {
    let (mut game, mut sink) = make_game();
    game.context_mut().pet.stats = Stats::new(0, 0, 0, 100);
    for t in [1000, 2000, 3000, 4000] {
        game.tick(t, &mut sink);
    }
    assert_eq!(game.death_watch().zero_since(), Some(1000));

    // a snack leaves hunger at 1 after the next tick
    game.context_mut().pet.stats.hunger.add(2);
    game.tick(5000, &mut sink);
    assert_eq!(game.death_watch().zero_since(), None);

    // hunger is back to 0 one tick later; the run starts over
    for t in [6000, 7000, 8000, 9000, 10_000] {
        game.tick(t, &mut sink);
        assert_eq!(game.activity(), Activity::Idle);
    }
    game.tick(11_000, &mut sink);
    assert_eq!(game.activity(), Activity::Dead);
}

#[test]
fn death_interrupts_busy_activity() {
    let (mut game, mut sink) = make_game();
    press(&mut game, ButtonId::Confirm, 0, &mut sink);
    kill(&mut game, &mut sink);
    assert_eq!(sink.transitions().last(), Some(&(Activity::Eating, Activity::Dead, Trigger::DeathWatch)));
}

#[test]
fn dead_pet_does_not_age_or_respond() {
    let (mut game, mut sink) = make_game();
    let t = kill(&mut game, &mut sink);
    let ticks = game.tick_count();

    game.tick(t + 1000, &mut sink);
    assert_eq!(game.tick_count(), ticks);
    assert_eq!(game.handle_input(InputEvent::MotionTripped, t + 10, &mut sink), Route::Ignored);
    assert_eq!(press(&mut game, ButtonId::Confirm, t + 20, &mut sink), Route::Ignored);
    assert_eq!(game.activity(), Activity::Dead);
}

#[test]
fn revival_combo_restores_pet() {
    let (mut game, mut sink) = make_game();
    let t = kill(&mut game, &mut sink);

    assert_eq!(press(&mut game, ButtonId::Prev, t + 10, &mut sink), Route::ComboChanged);
    assert_eq!(press(&mut game, ButtonId::Next, t + 20, &mut sink), Route::Revive);

    assert_eq!(game.activity(), Activity::Idle);
    assert_eq!(game.pet().stats.values(), (80, 80, 80, 0));
    assert_eq!(game.pet().name(), "Mochi", "name survives revival");
    assert_eq!(game.death_watch().zero_since(), None);
    assert!(!game.combo().is_complete());
    for activity in Activity::ALL {
        assert_eq!(game.cursor(activity).frame_index, 0);
    }
    assert!(sink.events.contains(&GameEvent::Revived));
    assert_eq!(sink.transitions().last(), Some(&(Activity::Dead, Activity::Idle, Trigger::ReviveCombo)));
}

#[test]
fn combo_needs_overlapping_holds() {
    let (mut game, mut sink) = make_game();
    let t = kill(&mut game, &mut sink);

    press(&mut game, ButtonId::Prev, t + 10, &mut sink);
    release(&mut game, ButtonId::Prev, t + 20, &mut sink);
    press(&mut game, ButtonId::Next, t + 30, &mut sink);
    assert_eq!(game.activity(), Activity::Dead);

    // right still held; left comes back down
    assert_eq!(press(&mut game, ButtonId::Prev, t + 40, &mut sink), Route::Revive);
    assert_eq!(game.activity(), Activity::Idle);
}

#[test]
fn stale_hold_from_before_death_does_not_count() {
    let (mut game, mut sink) = make_game();
    // holding prev while alive moves the menu; it must not arm the combo
    press(&mut game, ButtonId::Prev, 0, &mut sink);
    let t = kill(&mut game, &mut sink);
    assert_eq!(press(&mut game, ButtonId::Next, t + 10, &mut sink), Route::ComboChanged);
    assert_eq!(game.activity(), Activity::Dead);
}

#[test]
fn revived_pet_can_die_again() {
    let (mut game, mut sink) = make_game();
    let t = kill(&mut game, &mut sink);
    press(&mut game, ButtonId::Prev, t, &mut sink);
    press(&mut game, ButtonId::Next, t, &mut sink);
    release(&mut game, ButtonId::Prev, t, &mut sink);
    release(&mut game, ButtonId::Next, t, &mut sink);
    kill(&mut game, &mut sink);
    assert_eq!(sink.count(|e| matches!(e, GameEvent::Died { .. })), 2);
}
