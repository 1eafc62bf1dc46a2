//! Game configuration parameters
//!
//! All tunable timings, sequence lengths, stat seeds, and buzzer cues.
//! Values can be overridden through a [`ConfigPort`](crate::app::ports::ConfigPort)
//! (a JSON file on the host simulator).

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;

/// Longest pet name the display toolbar can hold.
pub const NAME_CAPACITY: usize = 16;

/// Core game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Name shown in the header row.  Preserved across revival.
    pub pet_name: heapless::String<NAME_CAPACITY>,

    // --- Timing ---
    /// Stat decay and death evaluation cadence (milliseconds)
    pub tick_interval_ms: u32,
    /// Sleep between game loop passes (milliseconds)
    pub loop_yield_ms: u32,
    /// How long all stats must stay exhausted before the pet dies (milliseconds)
    pub death_dwell_ms: u32,

    // --- Animation cadence ---
    pub idle_frame_ms: u32,
    pub play_frame_ms: u32,
    pub eat_frame_ms: u32,
    pub clean_frame_ms: u32,
    pub death_frame_ms: u32,

    // --- One-shot activity length (full sequence wraps) ---
    pub play_loops: u8,
    pub eat_loops: u8,
    pub clean_loops: u8,

    /// Frame count of every sprite sequence.
    pub frames: FrameCounts,

    // --- Stat seeds ---
    /// Stats at game start.
    pub initial_stats: StatSeed,
    /// Stats after the revival combo.
    pub revival_stats: StatSeed,

    /// Buzzer cues.
    pub tones: ToneConfig,
}

/// Number of frames in each sprite sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameCounts {
    pub idle: u8,
    pub play: u8,
    pub eat: u8,
    pub clean: u8,
    /// Finite death sequence, played once.
    pub death: u8,
    /// Ghost sequence looped forever after the death sequence.
    pub ghost: u8,
}

/// Raw stat values used to seed a [`PetState`](crate::pet::PetState).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatSeed {
    pub hunger: u8,
    pub happy: u8,
    pub energy: u8,
    pub dirty: u8,
}

/// Buzzer frequencies (Hz) and durations (ms).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToneConfig {
    pub menu_hz: u16,
    pub eat_hz: u16,
    pub play_hz: u16,
    pub clean_hz: u16,
    pub jingle_hz: [u16; 3],
    /// Start-to-start spacing of the motion jingle.
    pub jingle_spacing_ms: u16,
    /// Duration of every single cue.
    pub tone_ms: u16,
}

impl Default for GameConfig {
    fn default() -> Self {
        let mut pet_name = heapless::String::new();
        // "Mochi" always fits NAME_CAPACITY.
        let _ = pet_name.push_str("Mochi");

        Self {
            pet_name,

            // Timing
            tick_interval_ms: 1000, // 1 Hz
            loop_yield_ms: 30,
            death_dwell_ms: 5000, // five consecutive exhausted ticks

            // Animation cadence
            idle_frame_ms: 200,
            play_frame_ms: 160,
            eat_frame_ms: 180,
            clean_frame_ms: 180,
            death_frame_ms: 250,

            play_loops: 1,
            eat_loops: 2,
            clean_loops: 3,

            frames: FrameCounts {
                idle: 8,
                play: 6,
                eat: 4,
                clean: 4,
                death: 6,
                ghost: 4,
            },

            initial_stats: StatSeed {
                hunger: 50,
                happy: 80,
                energy: 80,
                dirty: 0,
            },
            revival_stats: StatSeed {
                hunger: 80,
                happy: 80,
                energy: 80,
                dirty: 0,
            },

            tones: ToneConfig {
                menu_hz: 500,
                eat_hz: 750,
                play_hz: 1000,
                clean_hz: 600,
                jingle_hz: [1200, 1500, 1800],
                jingle_spacing_ms: 80,
                tone_ms: 60,
            },
        }
    }
}

impl GameConfig {
    /// Range-check every field.  Invalid values are rejected, never clamped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.pet_name.trim().is_empty() {
            return Err(ConfigError::ValidationFailed("pet_name must not be empty"));
        }
        if self.tick_interval_ms == 0 {
            return Err(ConfigError::ValidationFailed("tick_interval_ms must be > 0"));
        }
        if self.death_dwell_ms == 0 {
            return Err(ConfigError::ValidationFailed("death_dwell_ms must be > 0"));
        }
        let cadences = [
            self.idle_frame_ms,
            self.play_frame_ms,
            self.eat_frame_ms,
            self.clean_frame_ms,
            self.death_frame_ms,
        ];
        if cadences.contains(&0) {
            return Err(ConfigError::ValidationFailed("animation intervals must be > 0"));
        }
        if self.play_loops == 0 || self.eat_loops == 0 || self.clean_loops == 0 {
            return Err(ConfigError::ValidationFailed("activity loop counts must be > 0"));
        }
        let f = &self.frames;
        if [f.idle, f.play, f.eat, f.clean, f.death, f.ghost].contains(&0) {
            return Err(ConfigError::ValidationFailed("sprite sequences need at least one frame"));
        }
        for seed in [&self.initial_stats, &self.revival_stats] {
            if [seed.hunger, seed.happy, seed.energy, seed.dirty]
                .iter()
                .any(|v| *v > 100)
            {
                return Err(ConfigError::ValidationFailed("stat seeds must be within 0..=100"));
            }
        }
        Ok(())
    }

    /// Replace the pet name, truncating to [`NAME_CAPACITY`] bytes on a
    /// character boundary.
    pub fn set_pet_name(&mut self, name: &str) {
        self.pet_name = truncated_name(name);
    }
}

pub(crate) fn truncated_name(name: &str) -> heapless::String<NAME_CAPACITY> {
    let mut out = heapless::String::new();
    for ch in name.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
