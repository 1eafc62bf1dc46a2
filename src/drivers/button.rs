//! Debounced push-button driver.
//!
//! ## Hardware
//!
//! Active-low momentary switch with pull-up.  `poll()` is called from the
//! loop (or a timer interrupt) at any rate; it samples the pin and runs the
//! debounce state machine below, handing every settled edge to a
//! [`ButtonHandler`].
//!
//! ```text
//!   Released ──raw low──▶ Settling{pressed, since} ──held 50 ms──▶ Pressed
//!      ▲                         │ raw bounces back                  │
//!      │                         ▼                                   │
//!      └──────held 50 ms── Settling{released, since} ◀──raw high─────┘
//! ```

use embedded_hal::digital::InputPin;
use log::trace;

use crate::input::{ButtonHandler, ButtonId};

/// A raw level must hold this long before it counts as an edge.
pub const DEBOUNCE_MS: u32 = 50;

/// A settled edge, also returned from [`ButtonDriver::poll`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonEdge {
    Pressed,
    Released,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DebounceState {
    Stable { pressed: bool },
    Settling { pressed: bool, since_ms: u32 },
}

pub struct ButtonDriver<P> {
    id: ButtonId,
    pin: P,
    state: DebounceState,
}

impl<P: InputPin> ButtonDriver<P> {
    pub fn new(id: ButtonId, pin: P) -> Self {
        Self {
            id,
            pin,
            state: DebounceState::Stable { pressed: false },
        }
    }

    pub fn id(&self) -> ButtonId {
        self.id
    }

    /// Debounced level.
    pub fn is_pressed(&self) -> bool {
        match self.state {
            DebounceState::Stable { pressed } => pressed,
            DebounceState::Settling { pressed, .. } => !pressed,
        }
    }

    /// Sample the pin once.  A settled edge is delivered to `handler`
    /// before it is returned.
    pub fn poll<H>(&mut self, now_ms: u32, handler: &H) -> Result<Option<ButtonEdge>, P::Error>
    where
        H: ButtonHandler + ?Sized,
    {
        let raw_pressed = self.pin.is_low()?;

        match self.state {
            DebounceState::Stable { pressed } => {
                if raw_pressed != pressed {
                    self.state = DebounceState::Settling {
                        pressed: raw_pressed,
                        since_ms: now_ms,
                    };
                }
                Ok(None)
            }

            DebounceState::Settling { pressed, since_ms } => {
                if raw_pressed != pressed {
                    // bounced back before settling
                    self.state = DebounceState::Stable { pressed: raw_pressed };
                    return Ok(None);
                }
                if now_ms.wrapping_sub(since_ms) < DEBOUNCE_MS {
                    return Ok(None);
                }

                self.state = DebounceState::Stable { pressed };
                trace!("BUTTON | {:?} pressed={}", self.id, pressed);
                let edge = if pressed {
                    handler.on_press(self.id);
                    ButtonEdge::Pressed
                } else {
                    handler.on_release(self.id);
                    ButtonEdge::Released
                };
                Ok(Some(edge))
            }
        }
    }

    pub fn release(self) -> P {
        self.pin
    }
}
