//! Pet model: the creature's hidden stat vector and the pure rules that
//! age it and respond to care.
//!
//! Every stat is a [`Meter`] that saturates at both ends of `0..=100`, so no
//! sequence of ticks or actions can push a value out of range.
//!
//! | Operation | Effect                                                        |
//! |-----------|---------------------------------------------------------------|
//! | `tick`    | hunger −1, energy −1, dirty +2, happy −2 while neglected      |
//! | `feed`    | hunger +25, energy +5                                         |
//! | `play`    | happy +18, energy −10, hunger −8 (only if energy, hunger > 10) |
//! | `clean`   | dirty −40, happy +10                                          |

use core::fmt;

use crate::config::{StatSeed, NAME_CAPACITY};

// ---------------------------------------------------------------------------
// Meter
// ---------------------------------------------------------------------------

/// A stat value in `0..=100` with saturating arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Meter(u8);

impl Meter {
    pub const MIN: Meter = Meter(0);
    pub const MAX: Meter = Meter(100);

    /// Build a meter, clamping anything above 100.
    pub const fn new(value: u8) -> Self {
        if value > Self::MAX.0 { Self::MAX } else { Self(value) }
    }

    pub const fn get(self) -> u8 {
        self.0
    }

    pub fn add(&mut self, amount: u8) {
        *self = Self::new(self.0.saturating_add(amount));
    }

    pub fn sub(&mut self, amount: u8) {
        self.0 = self.0.saturating_sub(amount);
    }

    pub const fn is_empty(self) -> bool {
        self.0 == Self::MIN.0
    }

    pub const fn is_full(self) -> bool {
        self.0 == Self::MAX.0
    }
}

// ---------------------------------------------------------------------------
// Stats
// ---------------------------------------------------------------------------

/// The four hidden stats.  `hunger` is a fullness gauge: 0 means starving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub hunger: Meter,
    pub happy: Meter,
    pub energy: Meter,
    pub dirty: Meter,
}

impl Stats {
    pub const fn new(hunger: u8, happy: u8, energy: u8, dirty: u8) -> Self {
        Self {
            hunger: Meter::new(hunger),
            happy: Meter::new(happy),
            energy: Meter::new(energy),
            dirty: Meter::new(dirty),
        }
    }

    /// Raw values as `(hunger, happy, energy, dirty)`.
    pub const fn values(&self) -> (u8, u8, u8, u8) {
        (self.hunger.get(), self.happy.get(), self.energy.get(), self.dirty.get())
    }

    /// Every stat at its worst value: starving, miserable, drained, filthy.
    pub const fn is_exhausted(&self) -> bool {
        self.hunger.is_empty() && self.happy.is_empty() && self.energy.is_empty() && self.dirty.is_full()
    }
}

impl From<StatSeed> for Stats {
    fn from(seed: StatSeed) -> Self {
        Self::new(seed.hunger, seed.happy, seed.energy, seed.dirty)
    }
}

// ---------------------------------------------------------------------------
// Mood
// ---------------------------------------------------------------------------

/// Mood shown in the header.  Derived from stats on every render, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Sad,
    Ok,
    Happy,
}

impl Mood {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Sad => "Sad",
            Self::Ok => "OK",
            Self::Happy => "Happy",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// PetState
// ---------------------------------------------------------------------------

// Thresholds below which neglect starts costing happiness.
const NEGLECT_HUNGER: u8 = 30;
const NEGLECT_ENERGY: u8 = 30;
const NEGLECT_DIRTY: u8 = 60;

// Play needs a little of both left in the tank.
const PLAY_MIN_ENERGY: u8 = 10;
const PLAY_MIN_HUNGER: u8 = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PetState {
    name: heapless::String<NAME_CAPACITY>,
    pub stats: Stats,
}

impl PetState {
    pub fn new(name: heapless::String<NAME_CAPACITY>, stats: Stats) -> Self {
        Self { name, stats }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Replace the whole state, keeping only the name.
    pub fn reborn(&self, stats: Stats) -> Self {
        Self::new(self.name.clone(), stats)
    }

    /// One second of ageing.  Neglect is judged on the stats the pet had
    /// going into the tick.
    pub fn tick(&mut self) {
        let s = &mut self.stats;
        let neglected = s.hunger.get() < NEGLECT_HUNGER
            || s.energy.get() < NEGLECT_ENERGY
            || s.dirty.get() > NEGLECT_DIRTY;
        s.hunger.sub(1);
        s.energy.sub(1);
        s.dirty.add(2);
        if neglected {
            s.happy.sub(2);
        }
    }

    pub fn feed(&mut self) {
        self.stats.hunger.add(25);
        self.stats.energy.add(5);
    }

    /// Returns `false` (and changes nothing) when the pet is too tired or
    /// too hungry to play.
    pub fn play(&mut self) -> bool {
        let s = &mut self.stats;
        if s.energy.get() <= PLAY_MIN_ENERGY || s.hunger.get() <= PLAY_MIN_HUNGER {
            return false;
        }
        s.happy.add(18);
        s.energy.sub(10);
        s.hunger.sub(8);
        true
    }

    pub fn clean(&mut self) {
        self.stats.dirty.sub(40);
        self.stats.happy.add(10);
    }

    pub fn mood(&self) -> Mood {
        let (hunger, happy, energy, dirty) = self.stats.values();
        if hunger < 20 || energy < 20 || dirty > 80 {
            Mood::Sad
        } else if happy > 70 && dirty < 50 {
            Mood::Happy
        } else {
            Mood::Ok
        }
    }
}
