//! Non-blocking buzzer cue sequencing.
//!
//! State handlers and the input router never call the buzzer directly.
//! They queue [`Tone`]s with a start time; the game loop flushes due tones
//! to the [`ToneEmitter`](crate::app::ports::ToneEmitter) on every pass, so
//! a multi-note jingle never stalls the loop.

use heapless::Deque;
use log::warn;

use crate::app::ports::ToneEmitter;

/// Pending cues beyond this are dropped.
const TONE_QUEUE_CAP: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tone {
    pub frequency_hz: u16,
    pub duration_ms: u16,
}

#[derive(Debug, Clone, Copy)]
struct Scheduled {
    due_ms: u32,
    tone: Tone,
}

/// FIFO of tones, each starting no earlier than the previous one's slot.
#[derive(Debug)]
pub struct ToneQueue {
    pending: Deque<Scheduled, TONE_QUEUE_CAP>,
    /// Earliest time the next queued tone may start.
    next_free_ms: Option<u32>,
}

impl ToneQueue {
    pub const fn new() -> Self {
        Self {
            pending: Deque::new(),
            next_free_ms: None,
        }
    }

    /// Queue `tone` after everything already queued, then hold the
    /// buzzer for `slot_ms` before the following tone may start.
    pub fn push(&mut self, now_ms: u32, tone: Tone, slot_ms: u16) {
        let due_ms = match self.next_free_ms {
            Some(free) if !self.pending.is_empty() && is_after(free, now_ms) => free,
            _ => now_ms,
        };
        if self.pending.push_back(Scheduled { due_ms, tone }).is_err() {
            warn!("TONE | queue full, dropping {} Hz", tone.frequency_hz);
            return;
        }
        self.next_free_ms = Some(due_ms.wrapping_add(u32::from(slot_ms)));
    }

    /// Emit every tone whose start time has arrived.  Returns how many
    /// were emitted.
    pub fn flush(&mut self, now_ms: u32, emitter: &mut impl ToneEmitter) -> usize {
        let mut emitted = 0;
        while let Some(next) = self.pending.front() {
            if is_after(next.due_ms, now_ms) {
                break;
            }
            let tone = next.tone;
            self.pending.pop_front();
            emitter.beep(tone.frequency_hz, Some(tone.duration_ms));
            emitted += 1;
        }
        emitted
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.next_free_ms = None;
    }
}

impl Default for ToneQueue {
    fn default() -> Self {
        Self::new()
    }
}

/// `a` is strictly later than `b` on a wrapping millisecond clock.
fn is_after(a: u32, b: u32) -> bool {
    let diff = a.wrapping_sub(b);
    diff != 0 && diff < u32::MAX / 2
}
