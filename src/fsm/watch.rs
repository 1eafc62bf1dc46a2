//! Death watch: promotes an exhausted pet to `Dead` once the exhausted
//! condition has held *continuously* for the configured dwell.
//!
//! ```text
//!  tick: exhausted? ──no──▶ zero_since = None
//!            │yes
//!            ▼
//!   zero_since = zero_since.or(now)
//!            │
//!   now - zero_since >= dwell ──yes──▶ Dead
//! ```

/// Nullable stamp of the first exhausted observation in the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeathWatch {
    zero_since: Option<u32>,
}

impl DeathWatch {
    pub const fn new() -> Self {
        Self { zero_since: None }
    }

    /// Feed one tick's observation.  Returns `true` when the dwell has been
    /// reached and the pet must die.
    pub fn observe(&mut self, exhausted: bool, now_ms: u32, dwell_ms: u32) -> bool {
        if !exhausted {
            self.zero_since = None;
            return false;
        }
        let since = *self.zero_since.get_or_insert(now_ms);
        now_ms.wrapping_sub(since) >= dwell_ms
    }

    pub fn zero_since(&self) -> Option<u32> {
        self.zero_since
    }

    /// How long the current exhausted run has lasted.
    pub fn elapsed(&self, now_ms: u32) -> Option<u32> {
        self.zero_since.map(|since| now_ms.wrapping_sub(since))
    }

    pub fn clear(&mut self) {
        self.zero_since = None;
    }
}
