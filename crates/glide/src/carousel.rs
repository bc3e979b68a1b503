#![forbid(unsafe_code)]

//! The carousel state machine.
//!
//! [`Carousel`] owns the item list, the current logical slide, the resolved
//! items-per-page, and the in-flight drag. Every public operation runs to
//! completion synchronously and leaves the surface painted at the right
//! offset; the only deferred work is the settle after a loop crossing, which
//! the host drives through [`Carousel::on_animation_frame`].
//!
//! # Invariants
//!
//! 1. Without looping, the current slide stays in `[0, max(0, N - perPage)]`.
//! 2. With looping, the stored index may sit past either end between
//!    crossings; [`Carousel::current_slide`] always reports it reduced into
//!    `[0, N)`, and hooks receive the reduced value.
//! 3. `on_change` fires only when the reported slide actually changed.
//! 4. Failed insert/remove calls leave items and index untouched.
//!
//! # Failure Modes
//!
//! - Navigation with `N <= perPage` is a silent no-op.
//! - Hooks and callbacks run inline; a panic inside one unwinds through the
//!   triggering call.

use std::fmt;

use glide_core::config::CarouselConfig;
use glide_core::error::{ConfigError, RangeError, Result};
use glide_core::gesture::{GestureConfig, GestureOutcome, GestureTracker, Release};
use glide_core::input::{InputEvent, InputResponse, PointerSource};
use glide_core::looping::{Direction, LoopController};
use glide_core::track::TrackLayout;
use glide_core::viewport::ViewportResolver;

use crate::frame_scheduler::FrameScheduler;
use crate::listeners::ListenerSet;
use crate::surface::{Cursor, Mount, SlotStyle, Surface, TrackFrame, TrackSlot};

// ---------------------------------------------------------------------------
// Lifecycle hooks
// ---------------------------------------------------------------------------

/// Position report passed to hooks and callbacks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideInfo {
    /// Current slide, reduced into `[0, N)`.
    pub current_slide: usize,
    /// Stored index, possibly past the loop seam.
    pub raw_slide: isize,
    pub per_page: usize,
    pub item_count: usize,
}

/// Payload of `on_change`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    /// Slide shown before the change, reduced into `[0, N)`.
    pub previous: usize,
    pub current: SlideInfo,
}

type InitHook = Box<dyn FnMut(&SlideInfo)>;
type ChangeHook = Box<dyn FnMut(&SlideChange)>;

/// `on_init` / `on_change` callbacks. Both default to no-ops.
#[derive(Default)]
pub struct CarouselHooks {
    on_init: Option<InitHook>,
    on_change: Option<ChangeHook>,
}

impl CarouselHooks {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Called once, after the first track build.
    #[must_use]
    pub fn on_init(mut self, hook: impl FnMut(&SlideInfo) + 'static) -> Self {
        self.on_init = Some(Box::new(hook));
        self
    }

    /// Called after every committed slide change.
    #[must_use]
    pub fn on_change(mut self, hook: impl FnMut(&SlideChange) + 'static) -> Self {
        self.on_change = Some(Box::new(hook));
        self
    }

    fn init(&mut self, info: &SlideInfo) {
        if let Some(hook) = self.on_init.as_mut() {
            hook(info);
        }
    }

    fn change(&mut self, change: &SlideChange) {
        if let Some(hook) = self.on_change.as_mut() {
            hook(change);
        }
    }
}

impl fmt::Debug for CarouselHooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CarouselHooks")
            .field("on_init", &self.on_init.is_some())
            .field("on_change", &self.on_change.is_some())
            .finish()
    }
}

/// Items and position at one instant, for comparisons in tests and hosts.
#[derive(Debug, Clone, PartialEq)]
pub struct CarouselSnapshot<T> {
    pub items: Vec<T>,
    pub raw_slide: isize,
    pub per_page: usize,
}

// ---------------------------------------------------------------------------
// Carousel
// ---------------------------------------------------------------------------

/// A carousel bound to one surface.
pub struct Carousel<S: Surface> {
    config: CarouselConfig,
    hooks: CarouselHooks,
    surface: S,
    items: Vec<S::Item>,
    per_page: usize,
    current: isize,
    container_width: f64,
    gesture: GestureTracker,
    listeners: ListenerSet,
    frames: FrameScheduler,
}

impl<S: Surface> fmt::Debug for Carousel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Carousel")
            .field("items", &self.items.len())
            .field("per_page", &self.per_page)
            .field("current", &self.current)
            .field("container_width", &self.container_width)
            .field("dragging", &self.gesture.is_dragging())
            .finish_non_exhaustive()
    }
}

impl<S: Surface> Carousel<S> {
    /// Resolve `config.selector` through `mount` and build a carousel on it.
    pub fn mount<M>(mount: &mut M, config: CarouselConfig, hooks: CarouselHooks) -> Result<Self>
    where
        M: Mount<Surface = S>,
    {
        let surface = mount
            .resolve(&config.selector)
            .ok_or_else(|| ConfigError::SelectorNotFound(config.selector.clone()))?;
        Self::new(surface, config, hooks)
    }

    /// Build a carousel over the surface's current children.
    ///
    /// Attaches listeners, prepares the container, builds the track, paints
    /// the start slide, and fires `on_init`.
    pub fn new(mut surface: S, config: CarouselConfig, hooks: CarouselHooks) -> Result<Self> {
        config.validate()?;
        let items = surface.children();
        if items.is_empty() {
            return Err(ConfigError::EmptyContainer.into());
        }

        let per_page = ViewportResolver::resolve(&config.per_page, surface.viewport_width());
        let container_width = surface.container_width();
        let current =
            LoopController::new(items.len(), per_page, config.looping).jump(config.start_index);
        let gesture = GestureTracker::new(GestureConfig {
            threshold: config.threshold,
            multiple_drag: config.multiple_drag,
            rtl: config.rtl,
        });

        let mut listeners = ListenerSet::new();
        listeners.attach(&mut surface, config.draggable);

        let mut carousel = Self {
            config,
            hooks,
            surface,
            items,
            per_page,
            current,
            container_width,
            gesture,
            listeners,
            frames: FrameScheduler::new(),
        };

        let direction = carousel.layout().text_direction();
        carousel.surface.prepare_container(direction);
        carousel.build_frame();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "carousel.init",
            items = carousel.items.len(),
            per_page = carousel.per_page,
            current = carousel.current,
            looping = carousel.config.looping
        );

        let info = carousel.info();
        carousel.hooks.init(&info);
        Ok(carousel)
    }

    // --- Accessors ---

    #[must_use]
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    #[must_use]
    pub fn items(&self) -> &[S::Item] {
        &self.items
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn per_page(&self) -> usize {
        self.per_page
    }

    /// Current slide reduced into `[0, N)`.
    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.loop_controller().normalize(self.current).max(0) as usize
    }

    /// Stored slide index. While looping this may sit past either end.
    #[must_use]
    pub fn raw_slide(&self) -> isize {
        self.current
    }

    #[must_use]
    pub fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Geometry of the current track.
    #[must_use]
    pub fn layout(&self) -> TrackLayout {
        TrackLayout::new(
            self.items.len(),
            self.per_page,
            self.config.looping,
            self.config.rtl,
            self.container_width,
        )
    }

    /// Whether a horizontal drag is moving the frame.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_dragging()
    }

    /// Whether a settle is waiting for animation frames.
    #[must_use]
    pub fn has_pending_frames(&self) -> bool {
        self.frames.has_pending()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    #[must_use]
    pub fn info(&self) -> SlideInfo {
        SlideInfo {
            current_slide: self.current_slide(),
            raw_slide: self.current,
            per_page: self.per_page,
            item_count: self.items.len(),
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> CarouselSnapshot<S::Item> {
        CarouselSnapshot {
            items: self.items.clone(),
            raw_slide: self.current,
            per_page: self.per_page,
        }
    }

    // --- Navigation ---

    /// Move forward `count` slides. Returns whether the slide changed.
    pub fn next(&mut self, count: usize) -> bool {
        self.change_slide(Direction::Next, count)
    }

    /// [`next`](Self::next), then `callback` if the slide changed.
    pub fn next_with(&mut self, count: usize, callback: impl FnOnce(&SlideInfo)) -> bool {
        let changed = self.next(count);
        if changed {
            callback(&self.info());
        }
        changed
    }

    /// Move back `count` slides. Returns whether the slide changed.
    pub fn prev(&mut self, count: usize) -> bool {
        self.change_slide(Direction::Prev, count)
    }

    /// [`prev`](Self::prev), then `callback` if the slide changed.
    pub fn prev_with(&mut self, count: usize, callback: impl FnOnce(&SlideInfo)) -> bool {
        let changed = self.prev(count);
        if changed {
            callback(&self.info());
        }
        changed
    }

    /// Jump straight to `index`, without loop seam animation.
    ///
    /// Looping wraps `index` modulo N; otherwise it is clamped to the last
    /// full page.
    pub fn go_to(&mut self, index: isize) -> bool {
        let lc = self.loop_controller();
        if !lc.can_navigate() {
            return false;
        }
        let before = self.current;
        let target = lc.jump(index);
        if target == before || (lc.is_enabled() && lc.normalize(before) == target) {
            return false;
        }
        self.current = target;
        self.slide_to_current(false);
        self.emit_change(before);
        true
    }

    /// [`go_to`](Self::go_to), then `callback` if the slide changed.
    pub fn go_to_with(&mut self, index: isize, callback: impl FnOnce(&SlideInfo)) -> bool {
        let changed = self.go_to(index);
        if changed {
            callback(&self.info());
        }
        changed
    }

    // --- Mutation ---

    /// Insert `item` at `index` (`0..=N + 1`; `N + 1` appends).
    ///
    /// Inserting at or before the current slide shifts the index so the
    /// visible items stay put.
    pub fn insert(&mut self, item: S::Item, index: usize) -> Result<()> {
        let len = self.items.len();
        if index > len + 1 {
            return Err(RangeError::InsertOutOfBounds { index, len }.into());
        }
        if let Some(existing) = self.items.iter().position(|i| *i == item) {
            return Err(RangeError::DuplicateItem { index: existing }.into());
        }

        self.normalize_loop_index();
        if len > 0 && index as isize <= self.current {
            self.current += 1;
        }
        self.items.insert(index.min(len), item);
        self.current = self.rest_index(self.current);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "carousel.insert",
            index,
            items = self.items.len(),
            current = self.current
        );

        self.build_frame();
        Ok(())
    }

    /// [`insert`](Self::insert), then `callback` on success.
    pub fn insert_with(
        &mut self,
        item: S::Item,
        index: usize,
        callback: impl FnOnce(&SlideInfo),
    ) -> Result<()> {
        self.insert(item, index)?;
        callback(&self.info());
        Ok(())
    }

    /// Insert at the front.
    pub fn prepend(&mut self, item: S::Item) -> Result<()> {
        self.insert(item, 0)
    }

    /// [`prepend`](Self::prepend), then `callback` on success.
    pub fn prepend_with(&mut self, item: S::Item, callback: impl FnOnce(&SlideInfo)) -> Result<()> {
        self.insert_with(item, 0, callback)
    }

    /// Insert at the back.
    pub fn append(&mut self, item: S::Item) -> Result<()> {
        let index = self.items.len() + 1;
        self.insert(item, index)
    }

    /// [`append`](Self::append), then `callback` on success.
    pub fn append_with(&mut self, item: S::Item, callback: impl FnOnce(&SlideInfo)) -> Result<()> {
        let index = self.items.len() + 1;
        self.insert_with(item, index, callback)
    }

    /// Remove and return the item at `index`.
    ///
    /// Removing before the current slide, or the last visible slide of the
    /// page, shifts the index back by one (never below the first slide).
    pub fn remove(&mut self, index: usize) -> Result<S::Item> {
        let len = self.items.len();
        if index >= len {
            return Err(RangeError::RemoveOutOfBounds { index, len }.into());
        }

        self.normalize_loop_index();
        let at = index as isize;
        let before_current = at < self.current;
        let trailing_edge = self.current + self.per_page as isize - 1 == at;
        if before_current || trailing_edge {
            self.current -= 1;
        }
        let removed = self.items.remove(index);
        self.current = self.rest_index(self.current);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "carousel.remove",
            index,
            items = self.items.len(),
            current = self.current
        );

        self.build_frame();
        Ok(removed)
    }

    /// [`remove`](Self::remove), then `callback` on success.
    pub fn remove_with(
        &mut self,
        index: usize,
        callback: impl FnOnce(&SlideInfo),
    ) -> Result<S::Item> {
        let removed = self.remove(index)?;
        callback(&self.info());
        Ok(removed)
    }

    /// Re-read widths from the surface and rebuild.
    ///
    /// A wider viewport can raise items-per-page past the end of the list;
    /// the index is pulled back so the last page stays full.
    pub fn resize(&mut self) {
        self.normalize_loop_index();
        self.per_page =
            ViewportResolver::resolve(&self.config.per_page, self.surface.viewport_width());

        let n = self.items.len() as isize;
        let per_page = self.per_page as isize;
        if self.current + per_page > n {
            self.current = if n <= per_page { 0 } else { n - per_page };
        }
        self.container_width = self.surface.container_width();

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "carousel.resize",
            per_page = self.per_page,
            container_width = self.container_width,
            current = self.current
        );

        self.build_frame();
    }

    /// [`resize`](Self::resize), then `callback`.
    pub fn resize_with(&mut self, callback: impl FnOnce(&SlideInfo)) {
        self.resize();
        callback(&self.info());
    }

    /// Detach listeners and hand the surface back.
    ///
    /// With `restore_markup`, the original items go back into the container
    /// in order, without wrappers or clones.
    pub fn destroy(mut self, restore_markup: bool) -> S {
        self.listeners.detach_all(&mut self.surface);
        self.frames.clear();
        self.gesture.reset();
        self.surface.set_cursor(Cursor::Auto);
        if restore_markup {
            let items = std::mem::take(&mut self.items);
            self.surface.restore(items);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(message = "carousel.destroy", restore_markup);

        self.surface
    }

    /// [`destroy`](Self::destroy), then `callback`.
    pub fn destroy_with(self, restore_markup: bool, callback: impl FnOnce()) -> S {
        let surface = self.destroy(restore_markup);
        callback();
        surface
    }

    // --- Host-driven input ---

    /// Feed one platform event. The returned flags say which defaults the
    /// host should cancel.
    pub fn handle_input(&mut self, event: InputEvent) -> InputResponse {
        match event {
            InputEvent::Resize => {
                self.resize();
                InputResponse::NONE
            }
            _ if !self.config.draggable => InputResponse::NONE,
            InputEvent::Click => self.gesture.click().response,
            InputEvent::Pointer(pointer) => {
                let step = self.gesture.process(&pointer);
                self.apply_gesture(step.outcome);
                step.response
            }
        }
    }

    /// Advance deferred painting by one frame. Returns whether more frames
    /// are needed.
    pub fn on_animation_frame(&mut self) -> bool {
        let due = self.frames.advance();
        if !due.is_empty() {
            let transition = self.config.transition();
            for offset in due {
                self.surface.set_transition(&transition);
                self.surface.set_offset(offset);
            }
        }
        let pending = self.frames.has_pending();
        if pending {
            self.surface.request_frame();
        }
        pending
    }
}

// ---------------------------------------------------------------------------
// Internals
// ---------------------------------------------------------------------------

impl<S: Surface> Carousel<S> {
    fn loop_controller(&self) -> LoopController {
        LoopController::new(self.items.len(), self.per_page, self.config.looping)
    }

    /// Reduce a looping index into `[0, N)`. Only called right before a
    /// rebuild, which repaints without animation.
    fn normalize_loop_index(&mut self) {
        if self.config.looping {
            self.current = self.loop_controller().normalize(self.current);
        }
    }

    fn rest_index(&self, index: isize) -> isize {
        let lc = self.loop_controller();
        if lc.is_enabled() {
            lc.normalize(index)
        } else {
            lc.clamp(index)
        }
    }

    fn build_frame(&mut self) {
        let layout = self.layout();
        let style = SlotStyle {
            float: layout.float_side(),
            width_percent: layout.item_width_percent(),
        };
        let slots = layout
            .plan()
            .into_iter()
            .map(|slot| TrackSlot {
                item: &self.items[slot.source],
                source: slot.source,
                cloned: slot.cloned,
                style,
            })
            .collect();
        let frame = TrackFrame {
            width_px: layout.frame_width(),
            slots,
        };
        self.surface.build_track(&frame);

        self.surface.set_transition(&self.config.transition());
        if self.config.draggable {
            self.surface.set_cursor(Cursor::Grab);
        }
        self.slide_to_current(false);
    }

    fn slide_to_current(&mut self, deferred: bool) {
        let offset = self.layout().offset_for(self.current);
        if deferred {
            self.frames.schedule(offset);
            self.surface.request_frame();
        } else {
            self.surface.set_offset(offset);
        }
    }

    fn change_slide(&mut self, direction: Direction, count: usize) -> bool {
        let lc = self.loop_controller();
        if !lc.can_navigate() || count == 0 {
            return false;
        }

        let before = self.current;
        let step = lc.step(before, direction, count);
        if let Some(mirror) = step.mirror {
            let drag = if self.config.draggable {
                self.gesture.in_flight_delta()
            } else {
                0.0
            };
            let offset = self.layout().drag_offset(mirror, drag);
            self.surface
                .set_transition(&self.config.instant_transition());
            self.surface.set_offset(offset);

            #[cfg(feature = "tracing")]
            tracing::debug!(
                message = "carousel.loop_crossing",
                from = before,
                mirror,
                target = step.target
            );
        }

        self.current = step.target;
        if self.current == before {
            return false;
        }
        self.slide_to_current(self.config.looping);
        self.emit_change(before);
        true
    }

    fn emit_change(&mut self, before: isize) {
        let change = SlideChange {
            previous: self.loop_controller().normalize(before).max(0) as usize,
            current: self.info(),
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            message = "carousel.change",
            from = change.previous,
            to = change.current.current_slide,
            raw = change.current.raw_slide
        );

        self.hooks.change(&change);
    }

    fn apply_gesture(&mut self, outcome: GestureOutcome) {
        match outcome {
            GestureOutcome::Tracking { source, delta } => {
                if source == PointerSource::Mouse {
                    self.surface.set_cursor(Cursor::Grabbing);
                }
                let offset = self.layout().drag_offset(self.current, delta);
                self.surface
                    .set_transition(&self.config.instant_transition());
                self.surface.set_offset(offset);
            }
            GestureOutcome::Released(release) => {
                if release.source == PointerSource::Mouse {
                    self.surface.set_cursor(Cursor::Grab);
                }
                self.surface.set_transition(&self.config.transition());
                if release.moved {
                    self.update_after_drag(&release);
                }
                self.gesture.finish();
            }
            GestureOutcome::Ignored
            | GestureOutcome::Started
            | GestureOutcome::Scrolling
            | GestureOutcome::ClickPassed
            | GestureOutcome::ClickSuppressed => {}
        }
    }

    fn update_after_drag(&mut self, release: &Release) {
        let slide_width = self.layout().slide_width();
        let count = self.gesture.slide_count(release.distance, slide_width);
        let crossing = release.direction().is_some_and(|direction| {
            self.loop_controller()
                .crosses(self.current, direction, count)
        });

        if let Some(commit) =
            self.gesture
                .decide(release, self.items.len(), self.per_page, slide_width)
        {
            self.change_slide(commit.direction, commit.count);
        }
        self.slide_to_current(crossing);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
