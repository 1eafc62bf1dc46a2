//! Host time adapters.
//!
//! - [`StdClock`] implements the [`Clock`] port over `std::time::Instant`,
//!   truncated to a wrapping `u32` millisecond counter like a hardware tick.
//! - [`StdDelay`] implements `embedded_hal::delay::DelayNs` with
//!   `std::thread::sleep`, standing in for a hardware timer delay.

use std::time::{Duration, Instant};

use embedded_hal::delay::DelayNs;

use crate::app::ports::Clock;

/// Monotonic millisecond clock starting at zero on construction.
#[derive(Debug, Clone, Copy)]
pub struct StdClock {
    start: Instant,
}

impl Default for StdClock {
    fn default() -> Self {
        Self::new()
    }
}

impl StdClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Clock for StdClock {
    fn now_ms(&self) -> u32 {
        // truncation is the wrap
        self.start.elapsed().as_millis() as u32
    }
}

/// Blocking delay for the host loop.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdDelay;

impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(u64::from(ns)));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(u64::from(ms)));
    }
}
