#![forbid(unsafe_code)]

//! Glide: an embeddable carousel state machine.
//!
//! A [`Carousel`] drives a host [`Surface`]: it lays out a track of item
//! wrappers (padded with clones when looping), moves the frame between
//! slides, follows mouse and touch drags, and reports slide changes through
//! [`CarouselHooks`]. The host forwards platform events with
//! [`Carousel::handle_input`] and animation frames with
//! [`Carousel::on_animation_frame`].
//!
//! ```ignore
//! let surface = my_dom.query(".glide")?;
//! let mut carousel = Carousel::new(
//!     surface,
//!     CarouselConfig::default().per_page(Breakpoints::new().with(768, 3)),
//!     CarouselHooks::new().on_change(|c| println!("now on {}", c.current.current_slide)),
//! )?;
//! carousel.next(1);
//! ```

pub mod carousel;
pub mod frame_scheduler;
pub mod listeners;
pub mod surface;

pub use carousel::{Carousel, CarouselHooks, CarouselSnapshot, SlideChange, SlideInfo};
pub use frame_scheduler::{FrameScheduler, SETTLE_DELAY_FRAMES};
pub use listeners::ListenerSet;
pub use surface::{
    Cursor, ListenerHandle, ListenerKind, Mount, SlotStyle, Surface, TrackFrame, TrackSlot,
};

pub use glide_core;
pub use glide_core::{
    Breakpoints, CarouselConfig, ConfigError, Error, InputEvent, InputResponse, PerPage,
    PointerEvent, PointerPhase, PointerSource, RangeError, Result, TargetTag, TextDirection,
    Transition,
};
#[cfg(feature = "config")]
pub use glide_core::ConfigLoadError;

/// Everyday imports for hosts.
pub mod prelude {
    pub use crate::{
        Breakpoints, Carousel, CarouselConfig, CarouselHooks, InputEvent, InputResponse, Mount,
        PerPage, PointerEvent, PointerPhase, PointerSource, Surface,
    };
}
