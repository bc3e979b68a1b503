#![forbid(unsafe_code)]

//! The display surface a carousel drives.
//!
//! A [`Surface`] is the host's side of the contract: it owns the real
//! container and its elements, applies styles, and wires platform listeners.
//! The carousel never touches those directly. It tells the surface what the
//! track should contain and where the frame should sit, and the host
//! forwards platform events back as [`glide_core::InputEvent`]s.
//!
//! # Contract
//!
//! - `build_track` replaces the container's children with one wrapper per
//!   [`TrackSlot`]. Slots marked `cloned` must get a copy of the item, never
//!   the item itself.
//! - `set_offset` moves the frame horizontally using whatever transition was
//!   last set.
//! - The [`ListenerHandle`] returned by `listen` is exactly what the carousel
//!   later passes to `unlisten`.

use glide_core::config::Transition;
use glide_core::track::{FloatSide, TextDirection};

/// Pointer cursor shown over the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cursor {
    /// Draggable, not dragging.
    Grab,
    /// Mouse drag in progress.
    Grabbing,
    /// Platform default.
    Auto,
}

/// Platform listeners a carousel needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    Resize,
    TouchStart,
    TouchEnd,
    TouchMove,
    MouseDown,
    MouseUp,
    MouseLeave,
    MouseMove,
    Click,
}

impl ListenerKind {
    /// Container listeners attached when dragging is enabled.
    pub const POINTER: [Self; 8] = [
        Self::TouchStart,
        Self::TouchEnd,
        Self::TouchMove,
        Self::MouseDown,
        Self::MouseUp,
        Self::MouseLeave,
        Self::MouseMove,
        Self::Click,
    ];
}

/// Opaque token identifying one registered listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerHandle(pub u64);

/// Wrapper style for one slot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotStyle {
    pub float: FloatSide,
    /// Width as a percentage of the frame.
    pub width_percent: f64,
}

/// One slot of the track to build.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackSlot<'a, T> {
    /// Item shown in this slot.
    pub item: &'a T,
    /// Logical index of the item.
    pub source: usize,
    /// Whether the surface must clone the item for this slot.
    pub cloned: bool,
    pub style: SlotStyle,
}

/// Full description of the track to build.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackFrame<'a, T> {
    /// Frame width in pixels.
    pub width_px: f64,
    /// Slots in physical order.
    pub slots: Vec<TrackSlot<'a, T>>,
}

/// Host display surface.
pub trait Surface {
    /// Opaque item handle. Equality is identity.
    type Item: Clone + PartialEq;

    /// Children currently in the container, in order.
    fn children(&self) -> Vec<Self::Item>;

    /// Container width in pixels.
    fn container_width(&self) -> f64;

    /// Window width in pixels, used for breakpoints.
    fn viewport_width(&self) -> u32;

    /// Hide overflow and apply the text direction.
    fn prepare_container(&mut self, direction: TextDirection);

    /// Replace the container's children with the given track.
    fn build_track(&mut self, frame: &TrackFrame<'_, Self::Item>);

    /// Set the frame's transition.
    fn set_transition(&mut self, transition: &Transition);

    /// Move the frame to a horizontal pixel offset.
    fn set_offset(&mut self, offset_px: f64);

    /// Set the container cursor.
    fn set_cursor(&mut self, cursor: Cursor);

    /// Ask the host to call `Carousel::on_animation_frame` on the next frame.
    fn request_frame(&mut self);

    /// Register a platform listener.
    fn listen(&mut self, kind: ListenerKind) -> ListenerHandle;

    /// Unregister a listener previously returned by [`Surface::listen`].
    fn unlisten(&mut self, handle: ListenerHandle);

    /// Put the original items back into the container and drop carousel styling.
    fn restore(&mut self, items: Vec<Self::Item>);
}

/// Resolves selectors to surfaces.
pub trait Mount {
    type Surface: Surface;

    /// Find the container matching `selector`.
    fn resolve(&mut self, selector: &str) -> Option<Self::Surface>;
}
