//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured game events to the `log`
//! facade (serial console on the gadget, `tracing-subscriber` on the host).

use log::{debug, info, warn};

use crate::app::events::GameEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`GameEvent`] as a one-line record.
#[derive(Debug, Default)]
pub struct LogEventSink {
    ignored: u32,
}

impl LogEventSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inputs rejected since start-up.
    pub fn ignored(&self) -> u32 {
        self.ignored
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &GameEvent) {
        match event {
            GameEvent::Started(activity) => {
                info!("START | initial_activity={:?}", activity);
            }
            GameEvent::ActivityChanged { from, to, trigger } => {
                info!("STATE | {:?} -> {:?} ({:?})", from, to, trigger);
            }
            GameEvent::InputIgnored { activity, event } => {
                self.ignored = self.ignored.saturating_add(1);
                debug!("INPUT | {:?} ignored in {:?}", event, activity);
            }
            GameEvent::Died { exhausted_ms } => {
                warn!("DEATH | stats exhausted for {} ms", exhausted_ms);
            }
            GameEvent::Revived => {
                info!("REVIVE | revival combo accepted");
            }
        }
    }
}
