//! Integration tests for the full loop: drivers → mailbox → GameLoop →
//! renderer / buzzer / sink, on a manual clock.

use pocketpet::anim::SpriteSheet;
use pocketpet::app::frame::StatHint;
use pocketpet::app::ports::Clock;
use pocketpet::app::service::PetGame;
use pocketpet::config::GameConfig;
use pocketpet::drivers::button::ButtonDriver;
use pocketpet::error::{DisplayError, Error};
use pocketpet::fsm::Activity;
use pocketpet::input::{ButtonId, InputQueue};
use pocketpet::pet::Stats;
use pocketpet::scheduler::GameLoop;

use crate::mock_hw::{ClockDelay, ManualClock, MockPin, MockRenderer, MockTone, RecordingSink};

const STEP_MS: u32 = 25;

struct Rig {
    renderer: MockRenderer,
    tone: MockTone,
    sink: RecordingSink,
}

impl Rig {
    fn new() -> Self {
        Self {
            renderer: MockRenderer::new(),
            tone: MockTone::new(),
            sink: RecordingSink::new(),
        }
    }

    fn started_game(&mut self) -> PetGame {
        let mut game = PetGame::new(GameConfig::default(), 0);
        game.start(&mut self.sink);
        game
    }

    fn step<const N: usize>(&mut self, gl: &mut GameLoop<'_, N>, now: u32) {
        gl.step(now, &mut self.renderer, &mut self.tone, &mut self.sink).unwrap();
    }
}

#[test]
fn ticks_follow_wall_clock() {
    let mut rig = Rig::new();
    let game = rig.started_game();
    let mut gl: GameLoop<'_, 4> = GameLoop::new(game, 0);

    for t in (0..=10_000).step_by(STEP_MS as usize) {
        rig.step(&mut gl, t);
    }
    assert_eq!(gl.game().tick_count(), 10);
    // 50/80/80/0 after ten calm ticks
    assert_eq!(gl.game().pet().stats.values(), (40, 80, 70, 20));
    assert_eq!(rig.renderer.frames.len(), 401);
}

#[test]
fn run_stops_on_renderer_failure() {
    let clock = ManualClock::starting_at(0);
    let mut rig = Rig::new();
    let game = rig.started_game();
    let mut gl: GameLoop<'_, 4> = GameLoop::new(game, clock.now_ms());
    let mut renderer = MockRenderer::failing_after(40);

    let err = gl
        .run(&clock, &mut ClockDelay(&clock), &mut renderer, &mut rig.tone, &mut rig.sink)
        .unwrap_err();

    assert_eq!(err, Error::Display(DisplayError::BusWrite));
    assert_eq!(renderer.frames.len(), 40);
    assert_eq!(gl.passes(), 40);
    // 40 yields of 30 ms before the failing pass
    assert_eq!(clock.now_ms(), 1200);
    assert_eq!(gl.game().tick_count(), 1);
}

#[test]
fn idle_animation_shows_in_frames() {
    let mut rig = Rig::new();
    let game = rig.started_game();
    let mut gl: GameLoop<'_, 4> = GameLoop::new(game, 0);

    rig.step(&mut gl, 0);
    rig.step(&mut gl, 200);
    rig.step(&mut gl, 400);
    let sprites: Vec<_> = rig.renderer.frames.iter().map(|f| (f.sprite.sheet, f.sprite.frame)).collect();
    assert_eq!(
        sprites,
        vec![(SpriteSheet::Idle, 0), (SpriteSheet::Idle, 1), (SpriteSheet::Idle, 2)]
    );
    let last = rig.renderer.last().unwrap();
    assert_eq!(last.pet_name, "Mochi");
    assert_eq!(last.stat_hint, StatHint::Food(50));
    assert!(!last.is_dead);
}

#[test]
fn debounced_press_reaches_game_through_mailbox() {
    let queue: InputQueue<8> = InputQueue::new();
    let mut rig = Rig::new();
    let game = rig.started_game();
    let mut gl = GameLoop::new(game, 0).with_inputs(&queue);

    let next_pin = MockPin::pulled_up();
    let confirm_pin = MockPin::pulled_up();
    let mut next = ButtonDriver::new(ButtonId::Next, next_pin.clone());
    let mut confirm = ButtonDriver::new(ButtonId::Confirm, confirm_pin.clone());

    let mut t = 0;
    let mut pass = |rig: &mut Rig, gl: &mut GameLoop<'_, 8>, t: &mut u32| {
        next.poll(*t, &queue).unwrap();
        confirm.poll(*t, &queue).unwrap();
        rig.step(gl, *t);
        *t += 10;
    };

    // tap next: menu moves to "play"
    next_pin.set_high(false);
    for _ in 0..8 {
        pass(&mut rig, &mut gl, &mut t);
    }
    next_pin.set_high(true);
    for _ in 0..8 {
        pass(&mut rig, &mut gl, &mut t);
    }
    assert_eq!(rig.renderer.last().unwrap().selected, 1);
    assert_eq!(rig.renderer.last().unwrap().stat_hint, StatHint::Happy(80));

    // hold confirm: Playing starts once, however long it is held
    confirm_pin.set_high(false);
    for _ in 0..20 {
        pass(&mut rig, &mut gl, &mut t);
    }
    assert_eq!(gl.game().activity(), Activity::Playing);
    assert_eq!(gl.game().pet().stats.values(), (42, 98, 70, 0));
    assert_eq!(rig.tone.frequencies(), vec![500, 1000]);
    assert!(queue.is_empty());
    assert_eq!(queue.dropped(), 0);
}

#[test]
fn death_and_revival_through_drivers() {
    let queue: InputQueue<8> = InputQueue::new();
    let mut rig = Rig::new();
    let mut game = rig.started_game();
    game.context_mut().pet.stats = Stats::new(0, 0, 0, 100);
    let mut gl = GameLoop::new(game, 0).with_inputs(&queue);

    let mut t = 0;
    while gl.game().activity() != Activity::Dead {
        rig.step(&mut gl, t);
        t += STEP_MS;
        assert!(t <= 7000, "pet should die after the dwell");
    }
    // stamped on the 1 s tick, fatal on the 6 s tick
    assert_eq!(t - STEP_MS, 6000);

    // let the death sequence play into the ghost loop
    for _ in 0..80 {
        rig.step(&mut gl, t);
        t += STEP_MS;
    }
    let last = rig.renderer.last().unwrap();
    assert!(last.is_dead);
    assert_eq!(last.stat_hint, StatHint::Rip);
    assert_eq!(last.sprite.sheet, SpriteSheet::Ghost);

    let prev_pin = MockPin::pulled_up();
    let next_pin = MockPin::pulled_up();
    let mut prev = ButtonDriver::new(ButtonId::Prev, prev_pin.clone());
    let mut next = ButtonDriver::new(ButtonId::Next, next_pin.clone());

    prev_pin.set_high(false);
    next_pin.set_high(false);
    for _ in 0..4 {
        prev.poll(t, &queue).unwrap();
        next.poll(t, &queue).unwrap();
        rig.step(&mut gl, t);
        t += STEP_MS;
    }

    assert_eq!(gl.game().activity(), Activity::Idle);
    assert_eq!(gl.game().pet().stats.values(), (80, 80, 80, 0));
    let last = rig.renderer.last().unwrap();
    assert!(!last.is_dead);
    assert_eq!((last.sprite.sheet, last.sprite.frame), (SpriteSheet::Idle, 0));
}
