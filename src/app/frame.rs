//! The screen contents handed to the [`Renderer`](super::ports::Renderer).
//!
//! ```text
//! ┌────────────────────────────┐
//! │ Mochi              Happy   │  header: name, mood
//! │         ┌──────┐           │
//! │         │sprite│           │  pet:    active sprite frame
//! │         └──────┘           │
//! │ Food:75                    │  hint:   stat for selected item
//! │  [food]  [play]  [clean]   │  toolbar with underline on selection
//! └────────────────────────────┘
//! ```

use crate::anim::SpriteRef;
use crate::input::{MenuCursor, MenuItem};
use crate::pet::{Mood, PetState};

/// One-line stat readout below the pet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatHint {
    /// Fullness, shown while "food" is selected.
    Food(u8),
    /// Happiness, shown while "play" is selected.
    Happy(u8),
    /// Dirtiness, shown while "clean" is selected.
    Dirty(u8),
    /// Shown instead of any stat while dead.
    Rip,
}

impl StatHint {
    pub fn for_selection(pet: &PetState, item: MenuItem) -> Self {
        let s = &pet.stats;
        match item {
            MenuItem::Food => Self::Food(s.hunger.get()),
            MenuItem::Play => Self::Happy(s.happy.get()),
            MenuItem::Clean => Self::Dirty(s.dirty.get()),
        }
    }
}

impl core::fmt::Display for StatHint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Food(v) => write!(f, "Food:{v}"),
            Self::Happy(v) => write!(f, "Happy:{v}"),
            Self::Dirty(v) => write!(f, "Dirty:{v}"),
            Self::Rip => write!(f, "RIP"),
        }
    }
}

/// Toolbar state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub items: [MenuItem; 3],
    pub selected: usize,
}

impl From<MenuCursor> for MenuView {
    fn from(cursor: MenuCursor) -> Self {
        Self {
            items: MenuItem::ALL,
            selected: cursor.index(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<'a> {
    pub pet_name: &'a str,
    pub mood: Mood,
    pub sprite: SpriteRef,
    pub stat_hint: StatHint,
    pub menu: MenuView,
    /// When set the toolbar shows the revival prompt instead of the menu.
    pub is_dead: bool,
}
