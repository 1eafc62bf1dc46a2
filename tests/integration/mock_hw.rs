//! Mock peripherals for integration tests.
//!
//! Records every renderer, buzzer, and event-sink call so tests can assert
//! on the full output history without real hardware.

use std::cell::Cell;

use pocketpet::anim::SpriteRef;
use pocketpet::app::events::{GameEvent, Trigger};
use pocketpet::app::frame::{Frame, StatHint};
use pocketpet::app::ports::{Clock, EventSink, Renderer, ToneEmitter};
use pocketpet::error::DisplayError;
use pocketpet::fsm::Activity;
use pocketpet::pet::Mood;

// ── Renderer ──────────────────────────────────────────────────

/// Owned copy of a rendered [`Frame`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedFrame {
    pub pet_name: String,
    pub mood: Mood,
    pub sprite: SpriteRef,
    pub stat_hint: StatHint,
    pub selected: usize,
    pub is_dead: bool,
}

#[derive(Default)]
pub struct MockRenderer {
    pub frames: Vec<RenderedFrame>,
    /// Fail every call once this many frames have been drawn.
    pub fail_after: Option<usize>,
}

#[allow(dead_code)]
impl MockRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_after(n: usize) -> Self {
        Self {
            frames: Vec::new(),
            fail_after: Some(n),
        }
    }

    pub fn last(&self) -> Option<&RenderedFrame> {
        self.frames.last()
    }
}

impl Renderer for MockRenderer {
    fn render(&mut self, frame: &Frame<'_>) -> Result<(), DisplayError> {
        if self.fail_after.is_some_and(|n| self.frames.len() >= n) {
            return Err(DisplayError::BusWrite);
        }
        self.frames.push(RenderedFrame {
            pet_name: frame.pet_name.to_owned(),
            mood: frame.mood,
            sprite: frame.sprite,
            stat_hint: frame.stat_hint,
            selected: frame.menu.selected,
            is_dead: frame.is_dead,
        });
        Ok(())
    }
}

// ── Buzzer ────────────────────────────────────────────────────

#[derive(Default)]
pub struct MockTone {
    /// `(frequency_hz, duration_ms)` in emission order.
    pub beeps: Vec<(u16, Option<u16>)>,
}

#[allow(dead_code)]
impl MockTone {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn frequencies(&self) -> Vec<u16> {
        self.beeps.iter().map(|(hz, _)| *hz).collect()
    }
}

impl ToneEmitter for MockTone {
    fn beep(&mut self, frequency_hz: u16, duration_ms: Option<u16>) {
        self.beeps.push((frequency_hz, duration_ms));
    }
}

// ── Event sink ────────────────────────────────────────────────

#[derive(Default)]
pub struct RecordingSink {
    pub events: Vec<GameEvent>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every `(from, to, trigger)` edge in order.
    pub fn transitions(&self) -> Vec<(Activity, Activity, Trigger)> {
        self.events
            .iter()
            .filter_map(|e| match e {
                GameEvent::ActivityChanged { from, to, trigger } => Some((*from, *to, *trigger)),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&GameEvent) -> bool) -> usize {
        self.events.iter().filter(|e| pred(*e)).count()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &GameEvent) {
        self.events.push(event.clone());
    }
}

// ── Clock ─────────────────────────────────────────────────────

/// Test-controlled millisecond clock.
#[derive(Default)]
pub struct ManualClock {
    now: Cell<u32>,
}

#[allow(dead_code)]
impl ManualClock {
    pub fn starting_at(ms: u32) -> Self {
        Self { now: Cell::new(ms) }
    }

    pub fn advance(&self, ms: u32) -> u32 {
        self.now.set(self.now.get().wrapping_add(ms));
        self.now.get()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u32 {
        self.now.get()
    }
}

// ── Input pin ─────────────────────────────────────────────────

/// `embedded-hal` input pin whose level the test sets through a shared cell.
#[derive(Clone, Default)]
pub struct MockPin(pub std::rc::Rc<Cell<bool>>);

#[allow(dead_code)]
impl MockPin {
    /// A pulled-up button pin, reading high while released.
    pub fn pulled_up() -> Self {
        let pin = Self::default();
        pin.0.set(true);
        pin
    }

    pub fn set_high(&self, high: bool) {
        self.0.set(high);
    }
}

impl embedded_hal::digital::ErrorType for MockPin {
    type Error = core::convert::Infallible;
}

impl embedded_hal::digital::InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, Self::Error> {
        Ok(self.0.get())
    }

    fn is_low(&mut self) -> Result<bool, Self::Error> {
        Ok(!self.0.get())
    }
}

// ── Delay ─────────────────────────────────────────────────────

/// `DelayNs` that advances a [`ManualClock`] instead of sleeping.
pub struct ClockDelay<'a>(pub &'a ManualClock);

impl embedded_hal::delay::DelayNs for ClockDelay<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.0.advance(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.advance(ms);
    }
}
