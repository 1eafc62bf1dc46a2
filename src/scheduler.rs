//! Cooperative game loop.
//!
//! One pass of [`GameLoop::step`] does every time check against a single
//! clock reading taken at loop top, then returns.  [`GameLoop::run`]
//! repeats it forever with a short yield between passes.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                       GameLoop::step(now)                    │
//! │                                                              │
//! │  ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌──────────┐   │
//! │  │ drain     │  │ stat tick │  │ animate   │  │ flush    │   │
//! │  │ InputQueue│─▶│ (if due)  │─▶│ current   │─▶│ tones    │   │
//! │  └───────────┘  └───────────┘  └───────────┘  └─────┬────┘   │
//! │                                                     ▼        │
//! │                                               Renderer       │
//! └──────────────────────────────────────────────────────────────┘
//!                         │
//!                         ▼
//!                 delay(loop_yield_ms)
//! ```

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use log::{info, trace};

use crate::app::ports::{Clock, EventSink, Renderer, ToneEmitter};
use crate::app::service::PetGame;
use crate::error::Result;
use crate::input::InputQueue;

// ═══════════════════════════════════════════════════════════════
//  Interval timer
// ═══════════════════════════════════════════════════════════════

/// Fixed-period timer on a wrapping millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    period_ms: u32,
    last_ms: u32,
}

impl Interval {
    pub const fn new(period_ms: u32, now_ms: u32) -> Self {
        Self {
            period_ms,
            last_ms: now_ms,
        }
    }

    /// `true` once at least one period has passed since the last firing.
    /// Re-arms from `now_ms`, so a late pass never fires twice.
    pub fn is_due(&mut self, now_ms: u32) -> bool {
        if now_ms.wrapping_sub(self.last_ms) < self.period_ms {
            return false;
        }
        self.last_ms = now_ms;
        true
    }

    pub fn period_ms(&self) -> u32 {
        self.period_ms
    }
}

// ═══════════════════════════════════════════════════════════════
//  Game loop
// ═══════════════════════════════════════════════════════════════

pub struct GameLoop<'q, const N: usize> {
    game: PetGame,
    tick: Interval,
    /// Edges pushed from interrupt context, drained at loop top.
    inputs: Option<&'q InputQueue<N>>,
    passes: u64,
}

impl<'q, const N: usize> GameLoop<'q, N> {
    pub fn new(game: PetGame, now_ms: u32) -> Self {
        let tick = Interval::new(game.config().tick_interval_ms, now_ms);
        Self {
            game,
            tick,
            inputs: None,
            passes: 0,
        }
    }

    /// Attach the mailbox the edge drivers push into.
    pub fn with_inputs(mut self, queue: &'q InputQueue<N>) -> Self {
        self.inputs = Some(queue);
        self
    }

    pub fn game(&self) -> &PetGame {
        &self.game
    }

    pub fn game_mut(&mut self) -> &mut PetGame {
        &mut self.game
    }

    /// Completed passes since construction.
    pub fn passes(&self) -> u64 {
        self.passes
    }

    /// One cooperative pass.  A renderer failure ends the pass with the
    /// error and nothing further is drawn.
    pub fn step(
        &mut self,
        now_ms: u32,
        renderer: &mut impl Renderer,
        tones: &mut impl ToneEmitter,
        sink: &mut impl EventSink,
    ) -> Result<()> {
        if let Some(queue) = self.inputs {
            let game = &mut self.game;
            queue.drain(|event| {
                game.handle_input(event, now_ms, sink);
            });
        }

        if self.tick.is_due(now_ms) {
            self.game.tick(now_ms, sink);
        }

        self.game.animate(now_ms, sink);
        self.game.flush_tones(now_ms, tones);
        self.game.render(renderer)?;

        self.passes += 1;
        trace!("LOOP | pass {} at {} ms", self.passes, now_ms);
        Ok(())
    }

    /// Run forever.  Returns only when a pass fails.
    pub fn run(
        &mut self,
        clock: &impl Clock,
        delay: &mut impl DelayNs,
        renderer: &mut impl Renderer,
        tones: &mut impl ToneEmitter,
        sink: &mut impl EventSink,
    ) -> Result<Infallible> {
        let yield_ms = self.game.config().loop_yield_ms;
        info!(
            "GameLoop running: tick every {} ms, yield {} ms",
            self.tick.period_ms(),
            yield_ms
        );
        loop {
            self.step(clock.now_ms(), renderer, tones, sink)?;
            delay.delay_ms(yield_ms);
        }
    }
}
