//! Game service — the hexagonal core.
//!
//! [`PetGame`] owns the lifecycle FSM and the shared [`GameContext`].  It
//! exposes a hardware-agnostic API; all I/O flows through port traits
//! injected at call sites, so the whole game is testable with mocks.
//!
//! ```text
//!  InputEvent ──▶ ┌────────────────────────┐ ──▶ EventSink
//!                 │        PetGame         │
//!    Renderer ◀── │  FSM · Pet · Anim ·    │ ──▶ ToneEmitter
//!                 │  Input · DeathWatch    │
//!                 └────────────────────────┘
//! ```

use log::{debug, info, warn};

use crate::config::GameConfig;
use crate::error::Result;
use crate::fsm::context::GameContext;
use crate::fsm::states::build_state_table;
use crate::fsm::watch::DeathWatch;
use crate::fsm::{Activity, Fsm, Transition};
use crate::input::{InputEvent, MenuCursor, RevivalCombo, Route};
use crate::pet::PetState;

use super::events::{GameEvent, Trigger};
use super::frame::{Frame, MenuView, StatHint};
use super::ports::{EventSink, Renderer, ToneEmitter};

// Motion trips cheer up a truly miserable pet a little before playing.
const MOTION_NUDGE_BELOW: u8 = 10;

// ───────────────────────────────────────────────────────────────
// PetGame
// ───────────────────────────────────────────────────────────────

pub struct PetGame {
    fsm: Fsm,
    ctx: GameContext,
    tick_count: u64,
}

impl PetGame {
    /// Construct the game from configuration at loop time `now_ms`.
    ///
    /// Does **not** start the FSM — call [`start`](Self::start) next.
    pub fn new(config: GameConfig, now_ms: u32) -> Self {
        let ctx = GameContext::new(config, now_ms);
        let fsm = Fsm::new(build_state_table(), Activity::Idle);
        Self {
            fsm,
            ctx,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    pub fn start(&mut self, sink: &mut impl EventSink) {
        self.fsm.start(&mut self.ctx);
        sink.emit(&GameEvent::Started(self.fsm.current_state()));
        info!(
            "PetGame started: {} in {:?}",
            self.ctx.pet.name(),
            self.fsm.current_state()
        );
    }

    // ── Per-pass orchestration ────────────────────────────────

    /// One stat tick: age the pet, then evaluate the death condition.
    /// A no-op while dead.  Returns `true` if the pet died on this tick.
    pub fn tick(&mut self, now_ms: u32, sink: &mut impl EventSink) -> bool {
        self.ctx.now_ms = now_ms;
        if self.fsm.current_state() == Activity::Dead {
            return false;
        }
        self.tick_count += 1;
        self.ctx.pet.tick();
        debug!("TICK | {:?} mood={}", self.ctx.pet.stats.values(), self.ctx.pet.mood());

        let exhausted = self.ctx.pet.stats.is_exhausted();
        let dwell_ms = self.ctx.config.death_dwell_ms;
        if !self.ctx.death.observe(exhausted, now_ms, dwell_ms) {
            return false;
        }

        let exhausted_ms = self.ctx.death.elapsed(now_ms).unwrap_or(0);
        warn!("Death watch promoted after {} ms exhausted", exhausted_ms);
        let t = self.fsm.force_transition(Activity::Dead, &mut self.ctx);
        sink.emit(&GameEvent::Died { exhausted_ms });
        self.emit_transition(t, Trigger::DeathWatch, sink);
        true
    }

    /// Advance the current activity's animation and take the one-shot
    /// return to Idle if it just finished.
    pub fn animate(&mut self, now_ms: u32, sink: &mut impl EventSink) {
        self.ctx.now_ms = now_ms;
        let current = self.fsm.current_state();
        if self.ctx.anim.advance(current, now_ms) {
            let t = self.fsm.update(&mut self.ctx);
            self.emit_transition(t, Trigger::AnimationDone, sink);
        }
    }

    /// Route one input edge.  Effects are applied before this returns.
    pub fn handle_input(&mut self, event: InputEvent, now_ms: u32, sink: &mut impl EventSink) -> Route {
        self.ctx.now_ms = now_ms;
        let activity = self.fsm.current_state();
        let route = self.ctx.input.route(event, activity);
        debug!("INPUT | {:?} in {:?} -> {:?}", event, activity, route);

        match route {
            Route::Ignored => {
                sink.emit(&GameEvent::InputIgnored { activity, event });
            }
            Route::MenuMoved(_) => {
                self.ctx.beep(self.ctx.config.tones.menu_hz);
            }
            Route::Start(next) => {
                let t = self.fsm.force_transition(next, &mut self.ctx);
                self.emit_transition(t, Trigger::MenuConfirm, sink);
            }
            Route::MotionPlay => {
                self.ctx.jingle();
                let happy = &mut self.ctx.pet.stats.happy;
                if happy.get() < MOTION_NUDGE_BELOW {
                    happy.add(1);
                }
                let t = self.fsm.force_transition(Activity::Playing, &mut self.ctx);
                self.emit_transition(t, Trigger::Motion, sink);
            }
            Route::ComboChanged => {}
            Route::Revive => {
                let t = self.fsm.force_transition(Activity::Idle, &mut self.ctx);
                sink.emit(&GameEvent::Revived);
                self.emit_transition(t, Trigger::ReviveCombo, sink);
            }
        }
        route
    }

    /// Hand every due buzzer cue to the tone port.
    pub fn flush_tones(&mut self, now_ms: u32, tones: &mut impl ToneEmitter) -> usize {
        self.ctx.tones.flush(now_ms, tones)
    }

    /// Draw the current state.  Display failures propagate unchanged.
    pub fn render(&self, renderer: &mut impl Renderer) -> Result<()> {
        renderer.render(&self.frame())?;
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────

    /// Build the screen contents for the current state.
    pub fn frame(&self) -> Frame<'_> {
        let activity = self.fsm.current_state();
        let is_dead = activity == Activity::Dead;
        let stat_hint = if is_dead {
            StatHint::Rip
        } else {
            StatHint::for_selection(&self.ctx.pet, self.ctx.input.menu.selected())
        };
        Frame {
            pet_name: self.ctx.pet.name(),
            mood: self.ctx.pet.mood(),
            sprite: self.ctx.anim.sprite(activity),
            stat_hint,
            menu: MenuView::from(self.ctx.input.menu),
            is_dead,
        }
    }

    pub fn activity(&self) -> Activity {
        self.fsm.current_state()
    }

    pub fn pet(&self) -> &PetState {
        &self.ctx.pet
    }

    pub fn menu(&self) -> MenuCursor {
        self.ctx.input.menu
    }

    pub fn combo(&self) -> RevivalCombo {
        self.ctx.input.combo
    }

    pub fn death_watch(&self) -> DeathWatch {
        self.ctx.death
    }

    pub fn cursor(&self, activity: Activity) -> crate::anim::Cursor {
        *self.ctx.anim.cursor(activity)
    }

    pub fn config(&self) -> &GameConfig {
        &self.ctx.config
    }

    /// Stat ticks applied since start (ticks while dead are not counted).
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Whether the most recent play attempt changed any stats.
    pub fn last_play_accepted(&self) -> Option<bool> {
        self.ctx.last_play_accepted
    }

    /// Cues queued but not yet flushed.
    pub fn pending_tones(&self) -> usize {
        self.ctx.tones.len()
    }

    /// Direct access to the context for tests and debug tooling.
    pub fn context_mut(&mut self) -> &mut GameContext {
        &mut self.ctx
    }

    // ── Internal ──────────────────────────────────────────────

    fn emit_transition(&self, t: Option<Transition>, trigger: Trigger, sink: &mut impl EventSink) {
        if let Some(Transition { from, to }) = t {
            sink.emit(&GameEvent::ActivityChanged { from, to, trigger });
        }
    }
}
