#![forbid(unsafe_code)]

//! Deferred settle painting.
//!
//! Painting a snap (no transition) and then an animated move in the same
//! frame lets the renderer coalesce both into a single jump. A settle is
//! therefore queued and painted on the second frame after it was requested:
//! the first frame commits the snap, the second re-enables the transition
//! and paints the resting offset.
//!
//! # Invariants
//!
//! 1. Settles are painted in request order, each with the offset captured
//!    when it was requested.
//! 2. A settle is never painted on the frame it was requested in.

use std::collections::VecDeque;

/// Frames a settle waits before painting.
pub const SETTLE_DELAY_FRAMES: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingSettle {
    offset: f64,
    frames_left: u8,
}

/// Queue of settles waiting for animation frames.
#[derive(Debug, Default)]
pub struct FrameScheduler {
    pending: VecDeque<PendingSettle>,
}

impl FrameScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a settle at `offset`.
    pub fn schedule(&mut self, offset: f64) {
        self.pending.push_back(PendingSettle {
            offset,
            frames_left: SETTLE_DELAY_FRAMES,
        });
    }

    /// Advance one frame and return the offsets due now, oldest first.
    pub fn advance(&mut self) -> Vec<f64> {
        let mut due = Vec::new();
        for settle in &mut self.pending {
            settle.frames_left = settle.frames_left.saturating_sub(1);
        }
        while let Some(front) = self.pending.front() {
            if front.frames_left > 0 {
                break;
            }
            if let Some(settle) = self.pending.pop_front() {
                due.push(settle.offset);
            }
        }
        due
    }

    /// Whether any settle is still waiting.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Drop every pending settle.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
