//! PIR motion sensor driver.
//!
//! The sensor module holds its output high for as long as it sees motion,
//! with its own retrigger timer, so no debounce is applied here: every
//! level change is an edge.

use embedded_hal::digital::InputPin;
use log::debug;

use crate::input::MotionHandler;

pub struct MotionDriver<P> {
    pin: P,
    tripped: bool,
}

impl<P: InputPin> MotionDriver<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, tripped: false }
    }

    pub fn is_tripped(&self) -> bool {
        self.tripped
    }

    /// Sample the sensor.  Returns `Some(level)` when the level changed.
    pub fn poll<H>(&mut self, handler: &H) -> Result<Option<bool>, P::Error>
    where
        H: MotionHandler + ?Sized,
    {
        let high = self.pin.is_high()?;
        if high == self.tripped {
            return Ok(None);
        }
        self.tripped = high;
        debug!("MOTION | {}", if high { "tripped" } else { "clear" });
        if high {
            handler.on_trip();
        } else {
            handler.on_untrip();
        }
        Ok(Some(high))
    }
}
