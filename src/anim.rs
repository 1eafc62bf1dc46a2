//! Animation controller: one frame sequencer per activity.
//!
//! Each activity owns a [`Cursor`] that advances on its own cadence.  The
//! game loop calls [`AnimationController::advance`] once per pass for the
//! *current* activity only, so every other cursor stays frozen.
//!
//! | Activity | Cadence | Length                                   |
//! |----------|---------|------------------------------------------|
//! | Idle     | 200 ms  | wraps forever                            |
//! | Playing  | 160 ms  | ends after 1 full wrap                   |
//! | Eating   | 180 ms  | ends after 2 full wraps                  |
//! | Cleaning | 180 ms  | ends after 3 full wraps                  |
//! | Dead     | 250 ms  | death sequence once, then ghost forever  |

use log::{debug, trace};

use crate::config::GameConfig;
use crate::fsm::Activity;

// ---------------------------------------------------------------------------
// Sprites
// ---------------------------------------------------------------------------

/// Which pixel-art table the renderer should draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpriteSheet {
    Idle,
    Play,
    Eat,
    Clean,
    Death,
    Ghost,
}

/// A single frame of a sprite sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SpriteRef {
    pub sheet: SpriteSheet,
    pub frame: u8,
}

// ---------------------------------------------------------------------------
// Sequence description
// ---------------------------------------------------------------------------

/// How a sequence behaves when its index reaches the frame count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPolicy {
    /// Wrap to frame 0 indefinitely.
    Forever,
    /// Wrap, and finish once this many full wraps have completed.
    Times(u8),
    /// Never wrap; the index keeps counting and the sprite lookup decides
    /// what to draw.
    Unbounded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequenceSpec {
    pub interval_ms: u32,
    pub frames: u8,
    pub policy: LoopPolicy,
}

/// Per-activity animation progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub frame_index: u32,
    pub loop_count: u32,
    pub last_advance_ms: u32,
    finished: bool,
}

impl Cursor {
    fn restart(&mut self, now_ms: u32) {
        *self = Self {
            last_advance_ms: now_ms,
            ..Self::default()
        };
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

pub struct AnimationController {
    /// Indexed by `Activity as usize`.
    specs: [SequenceSpec; Activity::COUNT],
    cursors: [Cursor; Activity::COUNT],
    death_frames: u8,
    ghost_frames: u8,
}

impl AnimationController {
    pub fn new(config: &GameConfig, now_ms: u32) -> Self {
        let f = &config.frames;
        let specs = [
            // Index 0 — Idle
            SequenceSpec {
                interval_ms: config.idle_frame_ms,
                frames: f.idle,
                policy: LoopPolicy::Forever,
            },
            // Index 1 — Playing
            SequenceSpec {
                interval_ms: config.play_frame_ms,
                frames: f.play,
                policy: LoopPolicy::Times(config.play_loops),
            },
            // Index 2 — Eating
            SequenceSpec {
                interval_ms: config.eat_frame_ms,
                frames: f.eat,
                policy: LoopPolicy::Times(config.eat_loops),
            },
            // Index 3 — Cleaning
            SequenceSpec {
                interval_ms: config.clean_frame_ms,
                frames: f.clean,
                policy: LoopPolicy::Times(config.clean_loops),
            },
            // Index 4 — Dead
            SequenceSpec {
                interval_ms: config.death_frame_ms,
                frames: f.death,
                policy: LoopPolicy::Unbounded,
            },
        ];

        let mut ctl = Self {
            specs,
            cursors: [Cursor::default(); Activity::COUNT],
            death_frames: f.death,
            ghost_frames: f.ghost,
        };
        ctl.reset_all(now_ms);
        ctl
    }

    /// Rewind the cursor for `activity` to frame 0, loop 0, `now_ms`.
    pub fn start(&mut self, activity: Activity, now_ms: u32) {
        debug!("ANIM | start {:?}", activity);
        self.cursors[activity as usize].restart(now_ms);
    }

    pub fn reset_all(&mut self, now_ms: u32) {
        for cursor in &mut self.cursors {
            cursor.restart(now_ms);
        }
    }

    /// Step the cursor for `activity` if its interval has elapsed.
    /// Returns `true` when a frame advanced.
    pub fn advance(&mut self, activity: Activity, now_ms: u32) -> bool {
        let spec = self.specs[activity as usize];
        let cursor = &mut self.cursors[activity as usize];

        if cursor.finished || now_ms.wrapping_sub(cursor.last_advance_ms) < spec.interval_ms {
            return false;
        }
        cursor.last_advance_ms = now_ms;

        match spec.policy {
            LoopPolicy::Unbounded => {
                cursor.frame_index = cursor.frame_index.saturating_add(1);
            }
            LoopPolicy::Forever | LoopPolicy::Times(_) => {
                cursor.frame_index = (cursor.frame_index + 1) % u32::from(spec.frames.max(1));
                if cursor.frame_index == 0 {
                    cursor.loop_count = cursor.loop_count.saturating_add(1);
                    if let LoopPolicy::Times(n) = spec.policy {
                        cursor.finished = cursor.loop_count >= u32::from(n);
                    }
                }
            }
        }

        trace!(
            "ANIM | {:?} frame={} loop={}",
            activity, cursor.frame_index, cursor.loop_count
        );
        true
    }

    pub fn cursor(&self, activity: Activity) -> &Cursor {
        &self.cursors[activity as usize]
    }

    /// Whether a one-shot activity has played its required number of loops.
    pub fn is_finished(&self, activity: Activity) -> bool {
        self.cursors[activity as usize].finished
    }

    /// The frame to draw for `activity` right now.
    pub fn sprite(&self, activity: Activity) -> SpriteRef {
        let index = self.cursors[activity as usize].frame_index;
        let (sheet, frame) = match activity {
            Activity::Idle => (SpriteSheet::Idle, index),
            Activity::Playing => (SpriteSheet::Play, index),
            Activity::Eating => (SpriteSheet::Eat, index),
            Activity::Cleaning => (SpriteSheet::Clean, index),
            Activity::Dead => {
                let death = u32::from(self.death_frames);
                if index < death {
                    (SpriteSheet::Death, index)
                } else {
                    (SpriteSheet::Ghost, (index - death) % u32::from(self.ghost_frames.max(1)))
                }
            }
        };
        SpriteRef {
            sheet,
            frame: frame as u8,
        }
    }
}
