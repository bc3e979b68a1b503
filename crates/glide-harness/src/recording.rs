#![forbid(unsafe_code)]

//! In-memory surface that records every call a carousel makes.
//!
//! [`RecordingSurface`] keeps both a flat op log (for ordering assertions)
//! and the resulting state: the built track, the last offset, transition,
//! cursor, and the live listener set.

use std::collections::{BTreeMap, HashMap};

use glide::surface::{Cursor, ListenerHandle, ListenerKind, Mount, Surface, TrackFrame};
use glide_core::config::Transition;
use glide_core::track::{FloatSide, TextDirection};

/// Opaque item handle. Two slides are the same item iff their ids match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slide(pub u32);

/// One wrapper in the built track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderedSlot {
    pub slide: Slide,
    pub cloned: bool,
    pub float: FloatSide,
    pub width_percent: f64,
}

/// A recorded surface call.
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceOp {
    PrepareContainer(TextDirection),
    BuildTrack { slots: usize, width_px: f64 },
    SetTransition(Transition),
    SetOffset(f64),
    SetCursor(Cursor),
    RequestFrame,
    Listen(ListenerKind),
    Unlisten(ListenerKind),
    Restore(Vec<Slide>),
}

/// Surface backed by plain vectors.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    children: Vec<Slide>,
    container_width: f64,
    viewport_width: u32,
    ops: Vec<SurfaceOp>,
    track: Vec<RenderedSlot>,
    frame_width: f64,
    offset: f64,
    transition: Option<Transition>,
    cursor: Option<Cursor>,
    direction: Option<TextDirection>,
    live: BTreeMap<ListenerHandle, ListenerKind>,
    next_handle: u64,
}

impl RecordingSurface {
    /// Container holding slides `0..count`, 300px wide in a 1024px window.
    #[must_use]
    pub fn with_slides(count: u32) -> Self {
        Self::from_children((0..count).map(Slide).collect())
    }

    #[must_use]
    pub fn from_children(children: Vec<Slide>) -> Self {
        Self {
            children,
            container_width: 300.0,
            viewport_width: 1024,
            ops: Vec::new(),
            track: Vec::new(),
            frame_width: 0.0,
            offset: 0.0,
            transition: None,
            cursor: None,
            direction: None,
            live: BTreeMap::new(),
            next_handle: 0,
        }
    }

    #[must_use]
    pub fn widths(mut self, container_width: f64, viewport_width: u32) -> Self {
        self.container_width = container_width;
        self.viewport_width = viewport_width;
        self
    }

    /// Simulate the platform resizing the container and window.
    pub fn set_widths(&mut self, container_width: f64, viewport_width: u32) {
        self.container_width = container_width;
        self.viewport_width = viewport_width;
    }

    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Drain the op log.
    pub fn take_ops(&mut self) -> Vec<SurfaceOp> {
        std::mem::take(&mut self.ops)
    }

    #[must_use]
    pub fn track(&self) -> &[RenderedSlot] {
        &self.track
    }

    /// Slides in track order, clones included.
    #[must_use]
    pub fn track_slides(&self) -> Vec<Slide> {
        self.track.iter().map(|s| s.slide).collect()
    }

    #[must_use]
    pub fn clone_count(&self) -> usize {
        self.track.iter().filter(|s| s.cloned).count()
    }

    #[must_use]
    pub fn frame_width(&self) -> f64 {
        self.frame_width
    }

    #[must_use]
    pub fn offset(&self) -> f64 {
        self.offset
    }

    #[must_use]
    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    #[must_use]
    pub fn cursor(&self) -> Option<Cursor> {
        self.cursor
    }

    #[must_use]
    pub fn direction(&self) -> Option<TextDirection> {
        self.direction
    }

    /// Slides visible in the container at the current offset.
    #[must_use]
    pub fn visible(&self, per_page: usize) -> Vec<Slide> {
        if per_page == 0 || self.container_width <= 0.0 {
            return Vec::new();
        }
        let slide_width = self.container_width / per_page as f64;
        let first = (self.offset.abs() / slide_width).round() as usize;
        self.track
            .iter()
            .skip(first)
            .take(per_page)
            .map(|s| s.slide)
            .collect()
    }

    /// Listener kinds currently registered, in handle order.
    #[must_use]
    pub fn live_listeners(&self) -> Vec<ListenerKind> {
        self.live.values().copied().collect()
    }

    #[must_use]
    pub fn children_now(&self) -> &[Slide] {
        &self.children
    }

    /// Offsets painted since the log was last drained.
    #[must_use]
    pub fn painted_offsets(&self) -> Vec<f64> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                SurfaceOp::SetOffset(x) => Some(*x),
                _ => None,
            })
            .collect()
    }
}

impl Surface for RecordingSurface {
    type Item = Slide;

    fn children(&self) -> Vec<Slide> {
        self.children.clone()
    }

    fn container_width(&self) -> f64 {
        self.container_width
    }

    fn viewport_width(&self) -> u32 {
        self.viewport_width
    }

    fn prepare_container(&mut self, direction: TextDirection) {
        self.direction = Some(direction);
        self.ops.push(SurfaceOp::PrepareContainer(direction));
    }

    fn build_track(&mut self, frame: &TrackFrame<'_, Slide>) {
        self.track = frame
            .slots
            .iter()
            .map(|slot| RenderedSlot {
                slide: *slot.item,
                cloned: slot.cloned,
                float: slot.style.float,
                width_percent: slot.style.width_percent,
            })
            .collect();
        self.frame_width = frame.width_px;
        self.children = self.track.iter().map(|s| s.slide).collect();
        self.ops.push(SurfaceOp::BuildTrack {
            slots: frame.slots.len(),
            width_px: frame.width_px,
        });
    }

    fn set_transition(&mut self, transition: &Transition) {
        self.transition = Some(transition.clone());
        self.ops.push(SurfaceOp::SetTransition(transition.clone()));
    }

    fn set_offset(&mut self, offset_px: f64) {
        self.offset = offset_px;
        self.ops.push(SurfaceOp::SetOffset(offset_px));
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = Some(cursor);
        self.ops.push(SurfaceOp::SetCursor(cursor));
    }

    fn request_frame(&mut self) {
        self.ops.push(SurfaceOp::RequestFrame);
    }

    fn listen(&mut self, kind: ListenerKind) -> ListenerHandle {
        self.next_handle += 1;
        let handle = ListenerHandle(self.next_handle);
        self.live.insert(handle, kind);
        self.ops.push(SurfaceOp::Listen(kind));
        handle
    }

    fn unlisten(&mut self, handle: ListenerHandle) {
        if let Some(kind) = self.live.remove(&handle) {
            self.ops.push(SurfaceOp::Unlisten(kind));
        }
    }

    fn restore(&mut self, items: Vec<Slide>) {
        self.track.clear();
        self.frame_width = 0.0;
        self.children = items.clone();
        self.ops.push(SurfaceOp::Restore(items));
    }
}

/// Selector table handing out recording surfaces.
#[derive(Debug, Default)]
pub struct MountTable {
    surfaces: HashMap<String, RecordingSurface>,
}

impl MountTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with(mut self, selector: impl Into<String>, surface: RecordingSurface) -> Self {
        self.surfaces.insert(selector.into(), surface);
        self
    }
}

impl Mount for MountTable {
    type Surface = RecordingSurface;

    fn resolve(&mut self, selector: &str) -> Option<RecordingSurface> {
        self.surfaces.remove(selector)
    }
}
