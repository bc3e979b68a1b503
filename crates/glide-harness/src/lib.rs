#![forbid(unsafe_code)]

//! Test harness for Glide carousels.
//!
//! - [`RecordingSurface`]: a [`glide::Surface`] that logs every call.
//! - [`MountTable`]: selector lookup over recording surfaces.
//! - [`ChangeLog`]: hooks that collect `on_init` / `on_change` payloads.
//! - [`gesture_storm`]: scripted drags and deterministic input storms.
//! - [`feed`] / [`settle`]: drive a carousel with input and animation frames.

pub mod gesture_storm;
pub mod recording;

use std::cell::RefCell;
use std::rc::Rc;

use glide::carousel::{Carousel, CarouselHooks, SlideChange, SlideInfo};
use glide::surface::Surface;
use glide_core::config::CarouselConfig;
use glide_core::input::{InputEvent, InputResponse};

pub use gesture_storm::{
    GesturePattern, GestureStorm, generate_storm, mouse_drag, mouse_drag_over, touch_swipe,
};
pub use recording::{MountTable, RecordingSurface, RenderedSlot, Slide, SurfaceOp};

/// Upper bound on frames [`settle`] will run before giving up.
pub const MAX_SETTLE_FRAMES: usize = 64;

/// Shared record of hook invocations.
#[derive(Debug, Clone, Default)]
pub struct ChangeLog {
    inits: Rc<RefCell<Vec<SlideInfo>>>,
    changes: Rc<RefCell<Vec<SlideChange>>>,
}

impl ChangeLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hooks that append to this log.
    #[must_use]
    pub fn hooks(&self) -> CarouselHooks {
        let inits = Rc::clone(&self.inits);
        let changes = Rc::clone(&self.changes);
        CarouselHooks::new()
            .on_init(move |info| inits.borrow_mut().push(*info))
            .on_change(move |change| changes.borrow_mut().push(*change))
    }

    #[must_use]
    pub fn inits(&self) -> Vec<SlideInfo> {
        self.inits.borrow().clone()
    }

    #[must_use]
    pub fn changes(&self) -> Vec<SlideChange> {
        self.changes.borrow().clone()
    }

    /// `current_slide` of every change, in order.
    #[must_use]
    pub fn slides(&self) -> Vec<usize> {
        self.changes
            .borrow()
            .iter()
            .map(|c| c.current.current_slide)
            .collect()
    }

    pub fn clear(&self) {
        self.inits.borrow_mut().clear();
        self.changes.borrow_mut().clear();
    }
}

/// Build a carousel over `count` recording slides.
pub fn carousel(
    count: u32,
    config: CarouselConfig,
) -> glide_core::Result<(Carousel<RecordingSurface>, ChangeLog)> {
    let log = ChangeLog::new();
    let carousel = Carousel::new(RecordingSurface::with_slides(count), config, log.hooks())?;
    Ok((carousel, log))
}

/// Deliver events in order and collect the responses.
pub fn feed<S, I>(carousel: &mut Carousel<S>, events: I) -> Vec<InputResponse>
where
    S: Surface,
    I: IntoIterator<Item = InputEvent>,
{
    events
        .into_iter()
        .map(|event| carousel.handle_input(event))
        .collect()
}

/// Run animation frames until nothing is pending. Returns frames run.
pub fn settle<S: Surface>(carousel: &mut Carousel<S>) -> usize {
    let mut frames = 0;
    while carousel.has_pending_frames() && frames < MAX_SETTLE_FRAMES {
        carousel.on_animation_frame();
        frames += 1;
    }
    tracing::trace!(message = "harness.settle", frames);
    frames
}
