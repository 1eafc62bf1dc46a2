//! Outbound game events.
//!
//! [`PetGame`](super::service::PetGame) emits these through the
//! [`EventSink`](super::ports::EventSink) port on every transition and
//! every rejected input.  Adapters on the other side decide what to do
//! with them — log to serial, drive an LED, feed a test recorder.

use crate::fsm::Activity;
use crate::input::InputEvent;

/// What caused an activity change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// `confirm` pressed on a menu item.
    MenuConfirm,
    /// Motion sensor tripped while idle.
    Motion,
    /// A one-shot animation played its last loop.
    AnimationDone,
    /// All stats stayed exhausted for the configured dwell.
    DeathWatch,
    /// Both revival buttons held while dead.
    ReviveCombo,
}

/// Structured events emitted by the game core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The game has started (carries initial activity).
    Started(Activity),

    /// The lifecycle machine left `from` and entered `to`.
    ActivityChanged {
        from: Activity,
        to: Activity,
        trigger: Trigger,
    },

    /// An input edge arrived that means nothing in `activity`.
    InputIgnored { activity: Activity, event: InputEvent },

    /// The death watch promoted; `exhausted_ms` is how long the stats had
    /// been exhausted.
    Died { exhausted_ms: u32 },

    /// The revival combo brought the pet back.
    Revived,
}
