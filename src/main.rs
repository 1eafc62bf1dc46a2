//! PocketPet — host simulator entry point.
//!
//! Hexagonal layout with a cooperative loop and an interrupt-style input
//! layer, run on a desktop with text stand-ins for the peripherals.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  LogRenderer     LogToneEmitter   LogEventSink   StdClock      │
//! │  (Renderer)      (ToneEmitter)    (EventSink)    (Clock)       │
//! │  JsonConfigStore StdDelay         stdin thread                 │
//! │  (ConfigPort)    (DelayNs)        (ButtonHandler/MotionHandler)│
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              PetGame (pure logic)                      │    │
//! │  │  FSM · Pet · Animation · Input · DeathWatch            │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  GameLoop (tick · animate · tones · render · yield)            │
//! └────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keys (one per line, or several on one line):
//! `p` / `c` / `n` tap prev / confirm / next, `P` / `N` toggle holding
//! prev / next (the revival combo), `m` trips the motion sensor.

use std::io::BufRead;

use anyhow::{Context, Result};
use log::{info, warn};
use tracing_subscriber::EnvFilter;

use pocketpet::adapters::config_file::JsonConfigStore;
use pocketpet::adapters::log_renderer::LogRenderer;
use pocketpet::adapters::log_sink::LogEventSink;
use pocketpet::adapters::log_tone::LogToneEmitter;
use pocketpet::adapters::time::{StdClock, StdDelay};
use pocketpet::app::ports::Clock;
use pocketpet::app::service::PetGame;
use pocketpet::config::GameConfig;
use pocketpet::input::{ButtonHandler, ButtonId, InputQueue, MotionHandler};
use pocketpet::scheduler::GameLoop;

const INPUT_DEPTH: usize = 16;

/// Edges from the stdin thread, drained at the top of every loop pass.
static INPUTS: InputQueue<INPUT_DEPTH> = InputQueue::new();

// ── Simulated edge layer ──────────────────────────────────────

fn spawn_keyboard(queue: &'static InputQueue<INPUT_DEPTH>) -> Result<()> {
    std::thread::Builder::new()
        .name("keyboard".into())
        .spawn(move || {
            let mut prev_held = false;
            let mut next_held = false;
            for line in std::io::stdin().lock().lines() {
                let Ok(line) = line else { break };
                for key in line.chars() {
                    match key {
                        'p' => tap(queue, ButtonId::Prev),
                        'c' => tap(queue, ButtonId::Confirm),
                        'n' => tap(queue, ButtonId::Next),
                        'P' => toggle(queue, ButtonId::Prev, &mut prev_held),
                        'N' => toggle(queue, ButtonId::Next, &mut next_held),
                        'm' => {
                            queue.on_trip();
                            queue.on_untrip();
                        }
                        c if c.is_whitespace() => {}
                        other => warn!("keyboard: unknown key {:?}", other),
                    }
                }
                if queue.dropped() > 0 {
                    warn!("keyboard: {} edges dropped so far", queue.dropped());
                }
            }
            info!("keyboard: stdin closed");
        })
        .context("failed to spawn keyboard thread")?;
    Ok(())
}

fn tap(queue: &InputQueue<INPUT_DEPTH>, id: ButtonId) {
    queue.on_press(id);
    queue.on_release(id);
}

fn toggle(queue: &InputQueue<INPUT_DEPTH>, id: ButtonId, held: &mut bool) {
    *held = !*held;
    if *held {
        queue.on_press(id);
    } else {
        queue.on_release(id);
    }
}

// ── Main ──────────────────────────────────────────────────────

fn main() -> Result<()> {
    // ── 1. Logging ────────────────────────────────────────────
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("╔══════════════════════════════════════╗");
    info!("║  PocketPet v{}                    ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Config from file (or defaults) ─────────────────────
    let config = match JsonConfigStore::from_env() {
        Some(store) => store.load_or_default(),
        None => GameConfig::default(),
    };
    config.validate().context("configuration rejected")?;

    // ── 3. Construct adapters and game ────────────────────────
    let clock = StdClock::new();
    let mut delay = StdDelay;
    let mut renderer = LogRenderer::new();
    let mut tones = LogToneEmitter::new();
    let mut sink = LogEventSink::new();

    let mut game = PetGame::new(config, clock.now_ms());
    game.start(&mut sink);

    // ── 4. Edge layer ─────────────────────────────────────────
    spawn_keyboard(&INPUTS)?;
    info!("Keys: p/c/n tap, P/N hold toggle, m motion");

    // ── 5. Loop ───────────────────────────────────────────────
    let mut game_loop = GameLoop::new(game, clock.now_ms()).with_inputs(&INPUTS);
    let stopped = game_loop
        .run(&clock, &mut delay, &mut renderer, &mut tones, &mut sink)
        .context("game loop stopped")?;
    match stopped {}
}
