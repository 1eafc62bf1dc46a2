//! Function-pointer finite state machine for the pet's life cycle.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  StateTable                                              │
//! │  ┌──────────┬───────────┬──────────┬───────────────────┐ │
//! │  │ Activity │ on_enter  │ on_exit  │ on_update         │ │
//! │  ├──────────┼───────────┼──────────┼───────────────────┤ │
//! │  │ Idle     │ fn(ctx)   │ —        │ fn(ctx)->Option<> │ │
//! │  │ Playing  │ fn(ctx)   │ —        │ fn(ctx)->Option<> │ │
//! │  │ Eating   │ fn(ctx)   │ —        │ fn(ctx)->Option<> │ │
//! │  │ Cleaning │ fn(ctx)   │ —        │ fn(ctx)->Option<> │ │
//! │  │ Dead     │ fn(ctx)   │ fn(ctx)  │ fn(ctx)->Option<> │ │
//! │  └──────────┴───────────┴──────────┴───────────────────┘ │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! `on_update` runs once per loop pass for the **current** activity and
//! only ever returns the one-shot `→ Idle` edge once an animation finishes.
//! Every other edge (menu confirm, motion, death, revival) is driven from
//! outside through [`Fsm::force_transition`], exactly once per trigger.
//! Entry effects (feed, play, clean) live in `on_enter`, so they fire
//! synchronously with the transition and never per frame.

pub mod context;
pub mod states;
pub mod watch;

use context::GameContext;
use log::info;

// ---------------------------------------------------------------------------
// Activity identity
// ---------------------------------------------------------------------------

/// The single top-level life/animation state of the pet.
/// Must stay in sync with the table built in [`states::build_state_table`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Activity {
    Idle = 0,
    Playing = 1,
    Eating = 2,
    Cleaning = 3,
    Dead = 4,
}

impl Activity {
    /// Total number of activities — used to size per-activity arrays.
    pub const COUNT: usize = 5;

    pub const ALL: [Activity; Self::COUNT] = [
        Activity::Idle,
        Activity::Playing,
        Activity::Eating,
        Activity::Cleaning,
        Activity::Dead,
    ];

    /// Convert an index back to `Activity`.  Panics on out-of-range in
    /// debug builds; returns `Idle` in release.
    pub fn from_index(idx: usize) -> Self {
        match idx {
            0 => Self::Idle,
            1 => Self::Playing,
            2 => Self::Eating,
            3 => Self::Cleaning,
            4 => Self::Dead,
            _ => {
                debug_assert!(false, "invalid activity index: {idx}");
                Self::Idle
            }
        }
    }

    /// One of the three timed care activities.
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Playing | Self::Eating | Self::Cleaning)
    }
}

// ---------------------------------------------------------------------------
// Function-pointer type aliases
// ---------------------------------------------------------------------------

/// Signature for `on_enter` and `on_exit` actions.
/// These run exactly once on each transition.
pub type StateActionFn = fn(&mut GameContext);

/// Signature for the per-pass update handler.
/// Returns `Some(next)` to trigger a transition, or `None` to stay.
pub type StateUpdateFn = fn(&mut GameContext) -> Option<Activity>;

// ---------------------------------------------------------------------------
// State descriptor (one row in the table)
// ---------------------------------------------------------------------------

/// Static descriptor for a single activity.
pub struct StateDescriptor {
    pub id: Activity,
    pub name: &'static str,
    pub on_enter: Option<StateActionFn>,
    pub on_exit: Option<StateActionFn>,
    pub on_update: StateUpdateFn,
}

/// A completed edge, reported back to the caller for event emission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: Activity,
    pub to: Activity,
}

// ---------------------------------------------------------------------------
// FSM engine
// ---------------------------------------------------------------------------

pub struct Fsm {
    /// Fixed-size table indexed by `Activity as usize`.
    table: [StateDescriptor; Activity::COUNT],
    /// Index of the currently active state.
    current: usize,
    /// Loop time at which the current state was entered.
    entered_at_ms: u32,
}

impl Fsm {
    pub fn new(table: [StateDescriptor; Activity::COUNT], initial: Activity) -> Self {
        debug_assert!(
            table.iter().enumerate().all(|(i, d)| d.id as usize == i),
            "state table out of order"
        );
        Self {
            table,
            current: initial as usize,
            entered_at_ms: 0,
        }
    }

    /// Run the initial `on_enter` for the starting state.
    /// Call once after construction, before the first `update()`.
    pub fn start(&mut self, ctx: &mut GameContext) {
        info!("FSM starting in state: {}", self.table[self.current].name);
        self.entered_at_ms = ctx.now_ms;
        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }
    }

    /// Call `on_update` for the current state and follow the edge it
    /// returns, if any.
    pub fn update(&mut self, ctx: &mut GameContext) -> Option<Transition> {
        let next = (self.table[self.current].on_update)(ctx)?;
        self.force_transition(next, ctx)
    }

    /// Transition immediately.  A request for the current state is a no-op
    /// and returns `None`.
    pub fn force_transition(&mut self, next: Activity, ctx: &mut GameContext) -> Option<Transition> {
        if next as usize == self.current {
            return None;
        }
        Some(self.transition(next, ctx))
    }

    pub fn current_state(&self) -> Activity {
        Activity::from_index(self.current)
    }

    /// Milliseconds spent in the current state as of `now_ms`.
    pub fn ms_in_current_state(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.entered_at_ms)
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn transition(&mut self, next_id: Activity, ctx: &mut GameContext) -> Transition {
        let from = self.current_state();
        let next_idx = next_id as usize;

        info!(
            "FSM transition: {} -> {}",
            self.table[self.current].name, self.table[next_idx].name
        );

        if let Some(exit) = self.table[self.current].on_exit {
            exit(ctx);
        }

        self.current = next_idx;
        self.entered_at_ms = ctx.now_ms;

        if let Some(enter) = self.table[self.current].on_enter {
            enter(ctx);
        }

        Transition { from, to: next_id }
    }
}
