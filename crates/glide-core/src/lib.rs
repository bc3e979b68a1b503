#![forbid(unsafe_code)]

//! Core: slide geometry, loop bookkeeping, and gesture interpretation.
//!
//! # Role in Glide
//! `glide-core` is the renderer-independent half of the carousel. Everything
//! here is plain arithmetic over indices, widths, and pointer samples; nothing
//! touches a display surface.
//!
//! # Primary responsibilities
//! - **CarouselConfig**: options record with defaults and optional file loading.
//! - **ViewportResolver**: breakpoint table to items-per-page.
//! - **TrackLayout**: clone-padded track geometry and pixel offsets.
//! - **LoopController**: next/prev stepping and loop seam crossings.
//! - **GestureTracker**: mouse/touch samples to drag offsets and commits.
//!
//! # How it fits in the system
//! The `glide` crate owns a `Carousel` that wires these pieces to a
//! `Surface` implementation. Hosts only depend on `glide-core` directly when
//! they want the math without the orchestration.

pub mod config;
pub mod error;
pub mod gesture;
pub mod input;
pub mod logging;
pub mod looping;
pub mod track;
pub mod viewport;

pub use config::{Breakpoints, CarouselConfig, PerPage, Transition};
#[cfg(feature = "config")]
pub use config::ConfigLoadError;
pub use error::{ConfigError, Error, RangeError, Result};
pub use gesture::{
    AxisLock, Commit, DragSession, GestureConfig, GestureOutcome, GestureStep, GestureTracker,
    Release,
};
pub use input::{InputEvent, InputResponse, PointerEvent, PointerPhase, PointerSource, TargetTag};
pub use looping::{Direction, LoopController, LoopPhase, Step};
pub use track::{FloatSide, SlotPlan, TextDirection, TrackLayout};
pub use viewport::ViewportResolver;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, error, info, trace, warn};
