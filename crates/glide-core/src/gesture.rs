#![forbid(unsafe_code)]

//! Gesture tracking: turns raw mouse/touch samples into slide intents.
//!
//! [`GestureTracker`] is a stateful processor fed one [`PointerEvent`] (or a
//! click) at a time. It never moves the carousel itself; it reports a
//! [`GestureOutcome`] the carousel acts on, plus an [`InputResponse`] the host
//! applies to the platform event.
//!
//! # State Machine
//!
//! ```text
//!   Idle ──down──▶ Active(axis?) ──first touch move──▶ Active(Horizontal)
//!    ▲                  │                         └──▶ Active(Vertical)
//!    │                  │ (mouse locks Horizontal on down)
//!    └──finish()── Settling ◀──up / leave──┘
//! ```
//!
//! - **Axis lock**: a touch gesture decides on its first move whether it is a
//!   horizontal drag or a vertical scroll. Vertical gestures are left to the
//!   page.
//! - **Tracking**: each horizontal move reports the pixel delta from the
//!   start point so the carousel can follow the pointer.
//! - **Release**: up/leave reports the signed movement and its distance. The
//!   carousel asks [`GestureTracker::decide`] whether that commits a slide
//!   change, acts on it, then calls [`GestureTracker::finish`].
//!
//! # Invariants
//!
//! 1. Gestures starting on form controls are ignored entirely.
//! 2. The axis is decided at most once per gesture.
//! 3. After `finish()` the session is neutral except `prevent_click`, which
//!    survives up/end so the click that follows a link drag can be cancelled.
//! 4. A mouse leaving the container mid-drag releases exactly like mouse up,
//!    but never leaves `prevent_click` set.

use crate::input::{InputResponse, PointerEvent, PointerPhase, PointerSource, TargetTag};
use crate::looping::Direction;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Thresholds for gesture interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GestureConfig {
    /// Minimum release distance in pixels before a gesture commits (default: 20).
    pub threshold: u32,
    /// Allow one gesture to move several slides (default: true).
    pub multiple_drag: bool,
    /// Right-to-left layout flips the movement sign (default: false).
    pub rtl: bool,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            threshold: 20,
            multiple_drag: true,
            rtl: false,
        }
    }
}

// ---------------------------------------------------------------------------
// Session state
// ---------------------------------------------------------------------------

/// Axis decision for the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisLock {
    /// No move seen yet.
    #[default]
    Undetermined,
    /// Slide gesture.
    Horizontal,
    /// Scroll gesture; not ours.
    Vertical,
}

/// Samples recorded for the current gesture.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragSession {
    pub start_x: f64,
    pub start_y: f64,
    /// Last horizontal position, once the pointer has moved.
    pub end_x: Option<f64>,
    pub axis: AxisLock,
    /// A link was dragged; cancel the click that follows.
    pub prevent_click: bool,
}

impl DragSession {
    /// Horizontal pixels moved since the gesture started.
    #[must_use]
    pub fn delta(&self) -> f64 {
        self.end_x.map_or(0.0, |end| end - self.start_x)
    }
}

// ---------------------------------------------------------------------------
// Outputs
// ---------------------------------------------------------------------------

/// Summary of a released gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Release {
    /// Device that produced the gesture.
    pub source: PointerSource,
    /// Whether the pointer moved at all. Unmoved releases never commit.
    pub moved: bool,
    /// Signed movement; positive means toward the previous slide.
    pub movement: f64,
    /// `|movement|`.
    pub distance: f64,
}

impl Release {
    /// Direction the movement points in, or `None` when it is zero.
    #[must_use]
    pub fn direction(&self) -> Option<Direction> {
        if self.movement > 0.0 {
            Some(Direction::Prev)
        } else if self.movement < 0.0 {
            Some(Direction::Next)
        } else {
            None
        }
    }
}

/// A committed slide change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Commit {
    pub direction: Direction,
    pub count: usize,
}

/// What the tracker made of an input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureOutcome {
    /// Not part of a slide gesture.
    Ignored,
    /// A gesture started.
    Started,
    /// Follow the pointer: frame should sit `delta` pixels off its resting offset.
    Tracking { source: PointerSource, delta: f64 },
    /// Touch gesture locked vertical; the page scrolls.
    Scrolling,
    /// Gesture ended; settle and possibly commit.
    Released(Release),
    /// A click passed through.
    ClickPassed,
    /// A click after a link drag was cancelled.
    ClickSuppressed,
}

/// Outcome plus the platform response for one processed input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureStep {
    pub outcome: GestureOutcome,
    pub response: InputResponse,
}

impl GestureStep {
    const fn new(outcome: GestureOutcome, response: InputResponse) -> Self {
        Self { outcome, response }
    }

    const fn ignored() -> Self {
        Self::new(GestureOutcome::Ignored, InputResponse::NONE)
    }
}

// ---------------------------------------------------------------------------
// GestureTracker
// ---------------------------------------------------------------------------

/// Stateful mouse/touch gesture tracker.
///
/// Call [`process`](GestureTracker::process) for every pointer sample and
/// [`click`](GestureTracker::click) for clicks. After handling a
/// [`GestureOutcome::Released`], call [`finish`](GestureTracker::finish).
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    config: GestureConfig,
    pointer_active: bool,
    session: DragSession,
}

impl GestureTracker {
    /// Create a tracker with the given configuration.
    #[must_use]
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            pointer_active: false,
            session: DragSession::default(),
        }
    }

    /// Process one pointer sample.
    pub fn process(&mut self, event: &PointerEvent) -> GestureStep {
        match (event.source, event.phase) {
            (source, PointerPhase::Down) => self.on_down(source, event),
            (PointerSource::Mouse, PointerPhase::Move) => self.on_mouse_move(event),
            (PointerSource::Touch, PointerPhase::Move) => self.on_touch_move(event),
            (source, PointerPhase::Up) => self.on_up(source),
            (PointerSource::Mouse, PointerPhase::Leave) => self.on_mouse_leave(event),
            (PointerSource::Touch, PointerPhase::Leave) => self.on_up(PointerSource::Touch),
        }
    }

    /// Process a click on the container.
    pub fn click(&mut self) -> GestureStep {
        let suppressed = self.session.prevent_click;
        self.session.prevent_click = false;
        if suppressed {
            GestureStep::new(
                GestureOutcome::ClickSuppressed,
                InputResponse::PREVENT_DEFAULT,
            )
        } else {
            GestureStep::new(GestureOutcome::ClickPassed, InputResponse::NONE)
        }
    }

    /// Decide whether a release commits a slide change.
    ///
    /// A release commits when it travelled further than the threshold and
    /// there are more items than fit on a page. Positive movement goes to
    /// the previous slide. With `multiple_drag`, the count is the number of
    /// slide widths covered, rounded up.
    #[must_use]
    pub fn decide(
        &self,
        release: &Release,
        item_count: usize,
        per_page: usize,
        slide_width: f64,
    ) -> Option<Commit> {
        if !release.moved
            || release.distance <= f64::from(self.config.threshold)
            || item_count <= per_page
        {
            return None;
        }
        let direction = release.direction()?;
        Some(Commit {
            direction,
            count: self.slide_count(release.distance, slide_width),
        })
    }

    /// Number of slides a drag of `distance` pixels covers.
    #[must_use]
    pub fn slide_count(&self, distance: f64, slide_width: f64) -> usize {
        if !self.config.multiple_drag || slide_width <= 0.0 {
            return 1;
        }
        ((distance / slide_width).ceil() as usize).max(1)
    }

    /// Reset the session after a release, keeping `prevent_click`.
    pub fn finish(&mut self) {
        self.session = DragSession {
            prevent_click: self.session.prevent_click,
            ..DragSession::default()
        };
    }

    /// Drop all gesture state, including `prevent_click`.
    pub fn reset(&mut self) {
        self.pointer_active = false;
        self.session = DragSession::default();
    }

    /// Horizontal pixels moved by the in-flight gesture, or 0.
    #[inline]
    #[must_use]
    pub fn in_flight_delta(&self) -> f64 {
        self.session.delta()
    }

    /// Whether a pointer is held down on the container.
    #[inline]
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.pointer_active
    }

    /// Whether a horizontal drag has moved the frame.
    #[inline]
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.pointer_active
            && self.session.axis == AxisLock::Horizontal
            && self.session.end_x.is_some()
    }

    /// Current session.
    #[inline]
    #[must_use]
    pub const fn session(&self) -> &DragSession {
        &self.session
    }

    /// Get a reference to the current configuration.
    #[inline]
    #[must_use]
    pub const fn config(&self) -> &GestureConfig {
        &self.config
    }
}

// ---------------------------------------------------------------------------
// Internal event handlers
// ---------------------------------------------------------------------------

impl GestureTracker {
    fn on_down(&mut self, source: PointerSource, event: &PointerEvent) -> GestureStep {
        if event.target.is_form_control() {
            return GestureStep::ignored();
        }
        self.pointer_active = true;
        self.session.start_x = event.x;
        self.session.end_x = None;
        match source {
            PointerSource::Mouse => {
                self.session.axis = AxisLock::Horizontal;
                GestureStep::new(
                    GestureOutcome::Started,
                    InputResponse::PREVENT_DEFAULT | InputResponse::STOP_PROPAGATION,
                )
            }
            PointerSource::Touch => {
                self.session.start_y = event.y;
                self.session.axis = AxisLock::Undetermined;
                GestureStep::new(GestureOutcome::Started, InputResponse::STOP_PROPAGATION)
            }
        }
    }

    fn on_mouse_move(&mut self, event: &PointerEvent) -> GestureStep {
        if !self.pointer_active {
            return GestureStep::new(GestureOutcome::Ignored, InputResponse::PREVENT_DEFAULT);
        }
        if event.target == TargetTag::Anchor {
            self.session.prevent_click = true;
        }
        self.session.end_x = Some(event.x);
        GestureStep::new(
            GestureOutcome::Tracking {
                source: PointerSource::Mouse,
                delta: self.session.delta(),
            },
            InputResponse::PREVENT_DEFAULT,
        )
    }

    fn on_touch_move(&mut self, event: &PointerEvent) -> GestureStep {
        if !self.pointer_active {
            return GestureStep::new(GestureOutcome::Ignored, InputResponse::STOP_PROPAGATION);
        }
        if self.session.axis == AxisLock::Undetermined {
            let dy = (self.session.start_y - event.y).abs();
            let dx = (self.session.start_x - event.x).abs();
            self.session.axis = if dy < dx {
                AxisLock::Horizontal
            } else {
                AxisLock::Vertical
            };
            #[cfg(feature = "tracing")]
            tracing::debug!(message = "gesture.axis_lock", axis = ?self.session.axis, dx, dy);
        }
        match self.session.axis {
            AxisLock::Horizontal => {
                self.session.end_x = Some(event.x);
                GestureStep::new(
                    GestureOutcome::Tracking {
                        source: PointerSource::Touch,
                        delta: self.session.delta(),
                    },
                    InputResponse::PREVENT_DEFAULT | InputResponse::STOP_PROPAGATION,
                )
            }
            _ => GestureStep::new(GestureOutcome::Scrolling, InputResponse::STOP_PROPAGATION),
        }
    }

    fn on_up(&mut self, source: PointerSource) -> GestureStep {
        self.pointer_active = false;
        GestureStep::new(
            GestureOutcome::Released(self.release(source)),
            InputResponse::STOP_PROPAGATION,
        )
    }

    fn on_mouse_leave(&mut self, event: &PointerEvent) -> GestureStep {
        if !self.pointer_active {
            return GestureStep::ignored();
        }
        self.pointer_active = false;
        self.session.end_x = Some(event.x);
        self.session.prevent_click = false;
        GestureStep::new(
            GestureOutcome::Released(self.release(PointerSource::Mouse)),
            InputResponse::NONE,
        )
    }

    fn release(&self, source: PointerSource) -> Release {
        let sign = if self.config.rtl { -1.0 } else { 1.0 };
        let movement = sign * self.session.delta();
        let release = Release {
            source,
            moved: self.session.end_x.is_some(),
            movement,
            distance: movement.abs(),
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "gesture.release",
            source = ?source,
            moved = release.moved,
            movement = release.movement
        );
        release
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
