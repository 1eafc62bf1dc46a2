//! Buzzer stand-in that logs each cue.

use log::info;

use crate::app::ports::ToneEmitter;

/// Length used when the caller leaves the duration to the buzzer.
const DEFAULT_TONE_MS: u16 = 60;

#[derive(Debug, Default)]
pub struct LogToneEmitter {
    emitted: u32,
}

impl LogToneEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emitted(&self) -> u32 {
        self.emitted
    }
}

impl ToneEmitter for LogToneEmitter {
    fn beep(&mut self, frequency_hz: u16, duration_ms: Option<u16>) {
        self.emitted = self.emitted.saturating_add(1);
        info!(
            "TONE | {} Hz for {} ms",
            frequency_hz,
            duration_ms.unwrap_or(DEFAULT_TONE_MS)
        );
    }
}
