//! Concrete state handler functions and table builder.
//!
//! ```text
//!            ┌──[confirm: play | motion]──▶ PLAYING ──[1 loop]──┐
//!            │                                                  │
//!  IDLE ─────┼──[confirm: food]──────────▶ EATING ──[2 loops]───┼──▶ IDLE
//!    ▲       │                                                  │
//!    │       └──[confirm: clean]─────────▶ CLEANING ─[3 loops]──┘
//!    │
//!    └──[revival combo]── DEAD ◀──[exhausted for dwell]── any living state
//! ```

use log::{info, warn};

use super::context::GameContext;
use super::{Activity, StateDescriptor};
use crate::pet::Stats;

// ═══════════════════════════════════════════════════════════════════════════
//  Table builder
// ═══════════════════════════════════════════════════════════════════════════

/// Build the state table.  Called once at startup.
pub fn build_state_table() -> [StateDescriptor; Activity::COUNT] {
    [
        // Index 0 — Idle
        StateDescriptor {
            id: Activity::Idle,
            name: "Idle",
            on_enter: Some(idle_enter),
            on_exit: None,
            on_update: idle_update,
        },
        // Index 1 — Playing
        StateDescriptor {
            id: Activity::Playing,
            name: "Playing",
            on_enter: Some(playing_enter),
            on_exit: None,
            on_update: playing_update,
        },
        // Index 2 — Eating
        StateDescriptor {
            id: Activity::Eating,
            name: "Eating",
            on_enter: Some(eating_enter),
            on_exit: None,
            on_update: eating_update,
        },
        // Index 3 — Cleaning
        StateDescriptor {
            id: Activity::Cleaning,
            name: "Cleaning",
            on_enter: Some(cleaning_enter),
            on_exit: None,
            on_update: cleaning_update,
        },
        // Index 4 — Dead
        StateDescriptor {
            id: Activity::Dead,
            name: "Dead",
            on_enter: Some(dead_enter),
            on_exit: Some(dead_exit),
            on_update: dead_update,
        },
    ]
}

// ═══════════════════════════════════════════════════════════════════════════
//  IDLE
// ═══════════════════════════════════════════════════════════════════════════

fn idle_enter(ctx: &mut GameContext) {
    ctx.anim.start(Activity::Idle, ctx.now_ms);
}

fn idle_update(_ctx: &mut GameContext) -> Option<Activity> {
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  PLAYING
// ═══════════════════════════════════════════════════════════════════════════

fn playing_enter(ctx: &mut GameContext) {
    let accepted = ctx.pet.play();
    ctx.last_play_accepted = Some(accepted);
    if !accepted {
        info!("PLAYING: {} is too tired or hungry, stats unchanged", ctx.pet.name());
    }
    ctx.beep(ctx.config.tones.play_hz);
    ctx.anim.start(Activity::Playing, ctx.now_ms);
}

fn playing_update(ctx: &mut GameContext) -> Option<Activity> {
    finished_to_idle(ctx, Activity::Playing)
}

// ═══════════════════════════════════════════════════════════════════════════
//  EATING
// ═══════════════════════════════════════════════════════════════════════════

fn eating_enter(ctx: &mut GameContext) {
    ctx.pet.feed();
    ctx.beep(ctx.config.tones.eat_hz);
    ctx.anim.start(Activity::Eating, ctx.now_ms);
}

fn eating_update(ctx: &mut GameContext) -> Option<Activity> {
    finished_to_idle(ctx, Activity::Eating)
}

// ═══════════════════════════════════════════════════════════════════════════
//  CLEANING
// ═══════════════════════════════════════════════════════════════════════════

fn cleaning_enter(ctx: &mut GameContext) {
    ctx.pet.clean();
    ctx.beep(ctx.config.tones.clean_hz);
    ctx.anim.start(Activity::Cleaning, ctx.now_ms);
}

fn cleaning_update(ctx: &mut GameContext) -> Option<Activity> {
    finished_to_idle(ctx, Activity::Cleaning)
}

// ═══════════════════════════════════════════════════════════════════════════
//  DEAD — stable resting state, left only through the revival combo
// ═══════════════════════════════════════════════════════════════════════════

fn dead_enter(ctx: &mut GameContext) {
    warn!("DEAD: {} has passed away", ctx.pet.name());
    ctx.input.combo.clear();
    ctx.anim.start(Activity::Dead, ctx.now_ms);
}

fn dead_exit(ctx: &mut GameContext) {
    ctx.pet = ctx.pet.reborn(Stats::from(ctx.config.revival_stats));
    ctx.death.clear();
    ctx.input.combo.clear();
    ctx.anim.reset_all(ctx.now_ms);
    info!("DEAD: {} revived with {:?}", ctx.pet.name(), ctx.pet.stats.values());
}

fn dead_update(_ctx: &mut GameContext) -> Option<Activity> {
    None
}

// ═══════════════════════════════════════════════════════════════════════════
//  Shared
// ═══════════════════════════════════════════════════════════════════════════

fn finished_to_idle(ctx: &GameContext, activity: Activity) -> Option<Activity> {
    ctx.anim.is_finished(activity).then_some(Activity::Idle)
}
