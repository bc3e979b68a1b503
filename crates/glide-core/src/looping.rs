#![forbid(unsafe_code)]

//! Logical stepping and loop seam crossings.
//!
//! [`LoopController`] answers one question: given the current logical slide,
//! where does a request to move `count` slides forward or backward land, and
//! does getting there cross the loop seam?
//!
//! # State Machine
//!
//! ```text
//!            step within [0, N - perPage]
//!   Steady ─────────────────────────────────▶ Steady
//!     │
//!     │ step past either end (looping only)
//!     ▼
//!   Crossing { mirror } ── snap to mirror, animate to target ──▶ Steady
//! ```
//!
//! A crossing works because the clones on either end of the track show the
//! same items as the real slides on the other end. The frame first jumps
//! (without animation) to the `mirror` position, which looks identical to
//! where it is now, then animates normally to the target.
//!
//! # Invariants
//!
//! 1. Without looping, every target is clamped into `[0, max(0, N - perPage)]`.
//! 2. With looping, `mirror` and the current index differ by exactly `N`.
//! 3. The target is left unnormalized; [`LoopController::normalize`] reduces
//!    any index into `[0, N)` for reporting.
//! 4. With looping, every target stays within `(-perPage, N)`, where the
//!    clones cover it.

/// Navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Next,
    Prev,
}

/// Whether an index sits inside the steady range or past the seam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopPhase {
    /// Inside `[0, N - perPage]`.
    Steady,
    /// Past an end; only reachable while looping.
    Crossing,
}

/// Result of a navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Logical index to settle on.
    pub target: isize,
    /// Logical index to snap to before animating, when the step crosses the seam.
    pub mirror: Option<isize>,
}

impl Step {
    /// Whether this step crosses the loop seam.
    #[must_use]
    pub const fn is_crossing(&self) -> bool {
        self.mirror.is_some()
    }
}

/// Logical index arithmetic for one carousel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopController {
    item_count: usize,
    per_page: usize,
    enabled: bool,
}

impl LoopController {
    #[must_use]
    pub const fn new(item_count: usize, per_page: usize, enabled: bool) -> Self {
        Self {
            item_count,
            per_page,
            enabled,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Largest index a non-looping carousel can rest on.
    #[inline]
    #[must_use]
    pub const fn max_index(&self) -> isize {
        self.item_count as isize - self.per_page as isize
    }

    /// Whether there are more items than fit on one page.
    #[inline]
    #[must_use]
    pub const fn can_navigate(&self) -> bool {
        self.item_count > self.per_page
    }

    /// Phase of a logical index.
    #[must_use]
    pub const fn phase(&self, index: isize) -> LoopPhase {
        if index >= 0 && index <= self.max_index() {
            LoopPhase::Steady
        } else {
            LoopPhase::Crossing
        }
    }

    /// Whether moving `count` slides from `current` would cross the seam.
    ///
    /// Always `false` when looping is disabled.
    #[must_use]
    pub fn crosses(&self, current: isize, direction: Direction, count: usize) -> bool {
        if !self.enabled {
            return false;
        }
        let delta = self.reach(count);
        match direction {
            Direction::Next => current.saturating_add(delta) > self.max_index(),
            Direction::Prev => current.saturating_sub(delta) < 0,
        }
    }

    /// Compute where moving `count` slides from `current` lands.
    ///
    /// While looping, whole laps are dropped first, so a crossing target
    /// always stays within the clone padding.
    #[must_use]
    pub fn step(&self, current: isize, direction: Direction, count: usize) -> Step {
        let n = self.item_count as isize;
        let delta = self.reach(count);

        if !self.enabled {
            let target = match direction {
                Direction::Next => current.saturating_add(delta).min(self.max_index()),
                Direction::Prev => current.saturating_sub(delta),
            };
            return Step {
                target: target.max(0),
                mirror: None,
            };
        }

        if delta == 0 {
            return Step {
                target: current,
                mirror: None,
            };
        }

        if self.crosses(current, direction, count) {
            let mirror = match direction {
                Direction::Next => current - n,
                Direction::Prev => current + n,
            };
            let target = match direction {
                Direction::Next => mirror + delta,
                Direction::Prev => mirror - delta,
            };
            return Step {
                target,
                mirror: Some(mirror),
            };
        }

        let target = match direction {
            Direction::Next => current + delta,
            Direction::Prev => current - delta,
        };
        Step {
            target,
            mirror: None,
        }
    }

    /// Slides actually travelled for a request of `count`.
    ///
    /// Saturates at `isize::MAX`. While looping, reduced modulo `N`.
    fn reach(&self, count: usize) -> isize {
        let count = isize::try_from(count).unwrap_or(isize::MAX);
        match self.item_count {
            n if self.enabled && n > 0 => count % isize::try_from(n).unwrap_or(isize::MAX),
            _ => count,
        }
    }

    /// Target of a direct jump to `index`.
    ///
    /// Looping wraps with euclidean modulo; otherwise the index is clamped.
    #[must_use]
    pub fn jump(&self, index: isize) -> isize {
        if self.enabled {
            self.normalize(index)
        } else {
            self.clamp(index)
        }
    }

    /// Clamp into the steady range `[0, max(0, N - perPage)]`.
    #[must_use]
    pub fn clamp(&self, index: isize) -> isize {
        index.min(self.max_index()).max(0)
    }

    /// Reduce an index into `[0, N)`. Returns 0 for an empty carousel.
    #[must_use]
    pub fn normalize(&self, index: isize) -> isize {
        match self.item_count {
            0 => 0,
            n => index.rem_euclid(n as isize),
        }
    }
}
