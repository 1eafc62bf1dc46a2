//! Unified error types for the PocketPet core.
//!
//! Stat arithmetic saturates and activity transitions are total, so the
//! only runtime failures the core can observe come from its collaborators.
//! All variants are `Copy` so they can be passed up through the game loop
//! without allocation.

use core::fmt;

// ---------------------------------------------------------------------------
// Top-level error
// ---------------------------------------------------------------------------

/// Every fallible operation in the core funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The display collaborator failed.  Fatal: the loop stops rendering.
    Display(DisplayError),
    /// Configuration is invalid or could not be loaded.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Display(e) => write!(f, "display: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Display errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayError {
    /// A bus write to the panel failed.
    BusWrite,
    /// The panel did not acknowledge within the bounded transfer time.
    Timeout,
    /// A draw call addressed pixels outside the panel.
    OutOfBounds,
}

impl fmt::Display for DisplayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BusWrite => write!(f, "bus write failed"),
            Self::Timeout => write!(f, "transfer timed out"),
            Self::OutOfBounds => write!(f, "draw out of bounds"),
        }
    }
}

impl From<DisplayError> for Error {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Crate-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
