//! Port traits — the hexagonal boundary between the game core and the
//! gadget's peripherals.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ PetGame (domain)
//! ```
//!
//! Driven adapters (display, buzzer, clock, event sinks, config storage)
//! implement these traits.  [`PetGame`](super::service::PetGame) and the
//! [`GameLoop`](crate::scheduler::GameLoop) consume them via generics, so
//! the core never touches a bus or a pin directly.  Inbound edges (buttons,
//! motion) use the capability traits in [`crate::input`].

use crate::config::GameConfig;
use crate::error::DisplayError;

use super::frame::Frame;

// ───────────────────────────────────────────────────────────────
// Renderer port (driven adapter: domain → display)
// ───────────────────────────────────────────────────────────────

/// Draws one complete screen.
///
/// Must return within a bounded bus-transfer time.  Any error is fatal to
/// the game loop; the core never retries or keeps drawing stale state.
pub trait Renderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), DisplayError>;
}

// ───────────────────────────────────────────────────────────────
// Tone port (driven adapter: domain → passive buzzer)
// ───────────────────────────────────────────────────────────────

/// Fire-and-forget buzzer.  May block briefly or return immediately.
pub trait ToneEmitter {
    /// `duration_ms: None` lets the buzzer pick its default length.
    fn beep(&mut self, frequency_hz: u16, duration_ms: Option<u16>);
}

// ───────────────────────────────────────────────────────────────
// Clock port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock.  Wraps at `u32::MAX`; the core only ever
/// compares timestamps with `wrapping_sub`.
pub trait Clock {
    fn now_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / observers)
// ───────────────────────────────────────────────────────────────

/// The core emits structured [`GameEvent`](super::events::GameEvent)s
/// through this port.  Nothing in the core depends on anyone listening.
pub trait EventSink {
    fn emit(&mut self, event: &super::events::GameEvent);
}

/// Sink that discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl EventSink for NoopSink {
    fn emit(&mut self, _event: &super::events::GameEvent) {}
}

// ───────────────────────────────────────────────────────────────
// Configuration port
// ───────────────────────────────────────────────────────────────

/// Loads and persists game configuration.
///
/// Implementations MUST call [`GameConfig::validate`] and reject invalid
/// values with [`ConfigError::ValidationFailed`] rather than clamping.
pub trait ConfigPort {
    /// Load configuration.  Returns [`ConfigError::NotFound`] if nothing
    /// is stored.
    fn load(&self) -> Result<GameConfig, ConfigError>;

    /// Validate and persist configuration.
    fn save(&self, config: &GameConfig) -> Result<(), ConfigError>;
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`ConfigPort`] operations and [`GameConfig::validate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// No config found in storage.
    NotFound,
    /// Stored config could not be deserialized.
    Corrupted,
    /// A config field failed range validation.
    ValidationFailed(&'static str),
    /// Generic I/O error from the storage backend.
    IoError,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::NotFound => write!(f, "config not found"),
            Self::Corrupted => write!(f, "config corrupted"),
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
            Self::IoError => write!(f, "I/O error"),
        }
    }
}

impl core::error::Error for ConfigError {}

impl From<ConfigError> for crate::error::Error {
    fn from(e: ConfigError) -> Self {
        match e {
            ConfigError::NotFound => Self::Config("not found"),
            ConfigError::Corrupted => Self::Config("corrupted"),
            ConfigError::ValidationFailed(msg) => Self::Config(msg),
            ConfigError::IoError => Self::Config("I/O error"),
        }
    }
}
