//! Shared mutable context threaded through every FSM handler.
//!
//! `GameContext` is the single owned aggregate that state handlers, the
//! input router, and the game loop all read from and write to: pet stats,
//! animation cursors, menu and combo state, the death watch, and queued
//! buzzer cues.  Nothing lives in globals.

use crate::anim::AnimationController;
use crate::config::GameConfig;
use crate::input::InputRouter;
use crate::pet::{PetState, Stats};
use crate::tone::{Tone, ToneQueue};

use super::watch::DeathWatch;

pub struct GameContext {
    // -- Timing --
    /// Monotonic loop time of the current pass (milliseconds, wrapping).
    pub now_ms: u32,

    // -- Domain state --
    pub pet: PetState,
    pub anim: AnimationController,
    pub input: InputRouter,
    pub death: DeathWatch,

    // -- Outputs --
    /// Buzzer cues waiting to be flushed to the tone port.
    pub tones: ToneQueue,
    /// Result of the most recent `play()` attempt, for diagnostics.
    pub last_play_accepted: Option<bool>,

    // -- Configuration --
    pub config: GameConfig,
}

impl GameContext {
    pub fn new(config: GameConfig, now_ms: u32) -> Self {
        let pet = PetState::new(config.pet_name.clone(), Stats::from(config.initial_stats));
        let anim = AnimationController::new(&config, now_ms);
        Self {
            now_ms,
            pet,
            anim,
            input: InputRouter::new(),
            death: DeathWatch::new(),
            tones: ToneQueue::new(),
            last_play_accepted: None,
            config,
        }
    }

    /// Queue a single cue of the configured length.
    pub fn beep(&mut self, frequency_hz: u16) {
        let tone_ms = self.config.tones.tone_ms;
        self.tones.push(
            self.now_ms,
            Tone {
                frequency_hz,
                duration_ms: tone_ms,
            },
            tone_ms,
        );
    }

    /// Queue the three ascending motion-trip tones.
    pub fn jingle(&mut self) {
        let tones = self.config.tones;
        for frequency_hz in tones.jingle_hz {
            self.tones.push(
                self.now_ms,
                Tone {
                    frequency_hz,
                    duration_ms: tones.tone_ms,
                },
                tones.jingle_spacing_ms,
            );
        }
    }
}
