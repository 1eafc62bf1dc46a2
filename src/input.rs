//! Input routing: buttons and motion trips in, menu moves and activity
//! starts out.
//!
//! ## Capability interfaces
//!
//! Edge detection lives outside the core.  The collaborator layer holds an
//! abstract [`ButtonHandler`] / [`MotionHandler`] reference and calls it on
//! every debounced edge.  The core's implementation is [`InputQueue`], an
//! interrupt-safe mailbox drained by the game loop at the top of each pass:
//!
//! ```text
//! ┌──────────────┐ on_press ┌──────────────┐  drain  ┌──────────────┐
//! │ ButtonDriver │─────────▶│  InputQueue  │────────▶│ InputRouter  │
//! │ MotionDriver │ on_trip  │ (crit. sect.)│         │ (loop ctx)   │
//! └──────────────┘          └──────────────┘         └──────────────┘
//! ```
//!
//! ## Routing table
//!
//! | Activity                  | prev / next            | confirm         | motion trip  |
//! |---------------------------|------------------------|-----------------|--------------|
//! | Idle                      | move menu ∓1, beep     | start selection | jingle, play |
//! | Playing/Eating/Cleaning   | ignored                | ignored         | ignored      |
//! | Dead                      | hold left / right      | ignored         | ignored      |

use core::cell::RefCell;

use embassy_sync::blocking_mutex::Mutex;
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use heapless::Deque;
use log::debug;

use crate::fsm::Activity;

// ───────────────────────────────────────────────────────────────
// Events
// ───────────────────────────────────────────────────────────────

/// The three logical buttons, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    Prev,
    Confirm,
    Next,
}

impl ButtonId {
    pub const ALL: [ButtonId; 3] = [ButtonId::Prev, ButtonId::Confirm, ButtonId::Next];
}

/// A discrete edge delivered by the collaborator layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Pressed(ButtonId),
    Released(ButtonId),
    MotionTripped,
    MotionUntripped,
}

// ───────────────────────────────────────────────────────────────
// Menu
// ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Food,
    Play,
    Clean,
}

impl MenuItem {
    /// Toolbar order.
    pub const ALL: [MenuItem; 3] = [MenuItem::Food, MenuItem::Play, MenuItem::Clean];

    /// The activity a confirm press starts.
    pub const fn activity(self) -> Activity {
        match self {
            Self::Food => Activity::Eating,
            Self::Play => Activity::Playing,
            Self::Clean => Activity::Cleaning,
        }
    }
}

/// Selected toolbar slot.  Always a valid index into [`MenuItem::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MenuCursor {
    selected: u8,
}

impl MenuCursor {
    const LEN: i16 = MenuItem::ALL.len() as i16;

    pub fn selected(&self) -> MenuItem {
        MenuItem::ALL[self.index()]
    }

    pub fn index(&self) -> usize {
        self.selected as usize
    }

    pub fn select(&mut self, item: MenuItem) {
        self.selected = match item {
            MenuItem::Food => 0,
            MenuItem::Play => 1,
            MenuItem::Clean => 2,
        };
    }

    /// Move by `delta` slots, wrapping in both directions.
    pub fn step(&mut self, delta: i8) {
        self.selected = (i16::from(self.selected) + i16::from(delta)).rem_euclid(Self::LEN) as u8;
    }
}

/// Edge state for the two-button revival hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RevivalCombo {
    pub left_held: bool,
    pub right_held: bool,
}

impl RevivalCombo {
    pub fn is_complete(&self) -> bool {
        self.left_held && self.right_held
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ───────────────────────────────────────────────────────────────
// Router
// ───────────────────────────────────────────────────────────────

/// What the service should do with an accepted edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The edge has no meaning in the current activity.
    Ignored,
    /// Menu cursor moved; acknowledge with a short beep.
    MenuMoved(MenuItem),
    /// Confirm pressed on a menu item.
    Start(Activity),
    /// Motion trip accepted while idle.
    MotionPlay,
    /// A revival-combo flag changed without completing the combo.
    ComboChanged,
    /// Both combo buttons are held.
    Revive,
}

#[derive(Debug, Clone, Default)]
pub struct InputRouter {
    pub menu: MenuCursor,
    pub combo: RevivalCombo,
}

impl InputRouter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Classify one edge against the current activity, updating menu and
    /// combo state.  Never touches the pet.
    pub fn route(&mut self, event: InputEvent, activity: Activity) -> Route {
        // Releases clear combo flags whatever the activity.
        if let InputEvent::Released(id) = event {
            let changed = match id {
                ButtonId::Prev => core::mem::replace(&mut self.combo.left_held, false),
                ButtonId::Next => core::mem::replace(&mut self.combo.right_held, false),
                ButtonId::Confirm => false,
            };
            return if changed && activity == Activity::Dead {
                Route::ComboChanged
            } else {
                Route::Ignored
            };
        }

        match activity {
            Activity::Idle => match event {
                InputEvent::Pressed(ButtonId::Prev) => {
                    self.menu.step(-1);
                    Route::MenuMoved(self.menu.selected())
                }
                InputEvent::Pressed(ButtonId::Next) => {
                    self.menu.step(1);
                    Route::MenuMoved(self.menu.selected())
                }
                InputEvent::Pressed(ButtonId::Confirm) => Route::Start(self.menu.selected().activity()),
                InputEvent::MotionTripped => Route::MotionPlay,
                InputEvent::MotionUntripped | InputEvent::Released(_) => Route::Ignored,
            },

            Activity::Dead => {
                match event {
                    InputEvent::Pressed(ButtonId::Prev) => self.combo.left_held = true,
                    InputEvent::Pressed(ButtonId::Next) => self.combo.right_held = true,
                    _ => return Route::Ignored,
                }
                if self.combo.is_complete() {
                    debug!("INPUT | revival combo complete");
                    Route::Revive
                } else {
                    Route::ComboChanged
                }
            }

            Activity::Playing | Activity::Eating | Activity::Cleaning => Route::Ignored,
        }
    }
}

// ───────────────────────────────────────────────────────────────
// Capability interfaces
// ───────────────────────────────────────────────────────────────

/// Implemented by the core; stored by the button collaborator.
pub trait ButtonHandler {
    fn on_press(&self, id: ButtonId);
    fn on_release(&self, id: ButtonId);
}

/// Implemented by the core; stored by the motion-sensor collaborator.
pub trait MotionHandler {
    fn on_trip(&self);
    fn on_untrip(&self);
}

// ───────────────────────────────────────────────────────────────
// Interrupt-safe mailbox
// ───────────────────────────────────────────────────────────────

struct Mailbox<const N: usize> {
    events: Deque<InputEvent, N>,
    dropped: u32,
}

/// Bounded FIFO of input edges, safe to push from interrupt context.
///
/// Every access runs inside a critical section, so a callback that preempts
/// the loop can never observe or produce a half-applied update.  When full,
/// the newest edge is dropped and counted.
pub struct InputQueue<const N: usize> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<Mailbox<N>>>,
}

impl<const N: usize> InputQueue<N> {
    pub const fn new() -> Self {
        Self {
            inner: Mutex::new(RefCell::new(Mailbox {
                events: Deque::new(),
                dropped: 0,
            })),
        }
    }

    /// Enqueue an edge.  Returns `false` if the queue was full.
    pub fn push(&self, event: InputEvent) -> bool {
        self.inner.lock(|cell| {
            let mut mailbox = cell.borrow_mut();
            if mailbox.events.push_back(event).is_err() {
                mailbox.dropped = mailbox.dropped.saturating_add(1);
                return false;
            }
            true
        })
    }

    pub fn pop(&self) -> Option<InputEvent> {
        self.inner.lock(|cell| cell.borrow_mut().events.pop_front())
    }

    /// Hand every pending edge to `handler` in arrival order.  Edges pushed
    /// while draining are picked up in the same call.
    pub fn drain(&self, mut handler: impl FnMut(InputEvent)) {
        while let Some(event) = self.pop() {
            handler(event);
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock(|cell| cell.borrow().events.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Edges lost to a full queue since start-up.
    pub fn dropped(&self) -> u32 {
        self.inner.lock(|cell| cell.borrow().dropped)
    }
}

impl<const N: usize> Default for InputQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ButtonHandler for InputQueue<N> {
    fn on_press(&self, id: ButtonId) {
        self.push(InputEvent::Pressed(id));
    }

    fn on_release(&self, id: ButtonId) {
        self.push(InputEvent::Released(id));
    }
}

impl<const N: usize> MotionHandler for InputQueue<N> {
    fn on_trip(&self) {
        self.push(InputEvent::MotionTripped);
    }

    fn on_untrip(&self) {
        self.push(InputEvent::MotionUntripped);
    }
}
