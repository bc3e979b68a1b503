#![forbid(unsafe_code)]

//! Physical track geometry.
//!
//! The rendered track is a single horizontal frame holding every slot side
//! by side. Without looping the slots are exactly the items. With looping the
//! track is padded on both ends:
//!
//! ```text
//!   [ last perPage items (clones) | all N items | first perPage items (clones) ]
//! ```
//!
//! The frame is moved by a signed pixel offset. A logical index (position in
//! the un-cloned item list) maps to a physical index (position in the padded
//! track) by adding `per_page` when looping.
//!
//! # Invariants
//!
//! 1. `track_item_count() == N + 2 * per_page` when looping, `N` otherwise.
//! 2. `offset_for(i + 1) - offset_for(i) == direction() * slide_width()`.
//! 3. Clone placement order does not depend on `rtl`; only the float side and
//!    the offset sign do.

/// Side slots float to inside the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FloatSide {
    Left,
    Right,
}

/// Text direction applied to the container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextDirection {
    Ltr,
    Rtl,
}

/// One slot of the physical track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotPlan {
    /// Logical index of the item shown in this slot.
    pub source: usize,
    /// Whether the slot holds a clone rather than the item itself.
    pub cloned: bool,
}

/// Track geometry for a given item count, page size, and container width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackLayout {
    item_count: usize,
    per_page: usize,
    looping: bool,
    rtl: bool,
    container_width: f64,
}

impl TrackLayout {
    /// Create a layout. `per_page` of zero is treated as one.
    #[must_use]
    pub fn new(
        item_count: usize,
        per_page: usize,
        looping: bool,
        rtl: bool,
        container_width: f64,
    ) -> Self {
        Self {
            item_count,
            per_page: per_page.max(1),
            looping,
            rtl,
            container_width,
        }
    }

    #[inline]
    #[must_use]
    pub const fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    #[must_use]
    pub const fn per_page(&self) -> usize {
        self.per_page
    }

    #[inline]
    #[must_use]
    pub const fn is_looping(&self) -> bool {
        self.looping
    }

    #[inline]
    #[must_use]
    pub const fn container_width(&self) -> f64 {
        self.container_width
    }

    /// Offset sign: `-1` for left-to-right, `+1` for right-to-left.
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> f64 {
        if self.rtl { 1.0 } else { -1.0 }
    }

    #[must_use]
    pub const fn text_direction(&self) -> TextDirection {
        if self.rtl {
            TextDirection::Rtl
        } else {
            TextDirection::Ltr
        }
    }

    #[must_use]
    pub const fn float_side(&self) -> FloatSide {
        if self.rtl {
            FloatSide::Right
        } else {
            FloatSide::Left
        }
    }

    /// Number of slots in the physical track, clones included.
    #[must_use]
    pub const fn track_item_count(&self) -> usize {
        if self.looping {
            self.item_count + 2 * self.per_page
        } else {
            self.item_count
        }
    }

    /// Width of one slot as a percentage of the frame width.
    ///
    /// An empty track reports 100 so a later insert starts full width.
    #[must_use]
    pub fn item_width_percent(&self) -> f64 {
        match self.track_item_count() {
            0 => 100.0,
            n => 100.0 / n as f64,
        }
    }

    /// Pixel width of one slot.
    #[must_use]
    pub fn slide_width(&self) -> f64 {
        self.container_width / self.per_page as f64
    }

    /// Pixel width of the whole frame.
    #[must_use]
    pub fn frame_width(&self) -> f64 {
        self.slide_width() * self.track_item_count() as f64
    }

    /// Physical slot index for a logical index.
    #[inline]
    #[must_use]
    pub const fn physical_index(&self, logical: isize) -> isize {
        if self.looping {
            logical + self.per_page as isize
        } else {
            logical
        }
    }

    /// Resting frame offset in pixels for a logical index.
    #[must_use]
    pub fn offset_for(&self, logical: isize) -> f64 {
        self.direction() * self.physical_index(logical) as f64 * self.slide_width()
    }

    /// Frame offset while dragged `delta` pixels away from a logical index.
    ///
    /// Moving the pointer right always moves the frame right, in either
    /// direction mode.
    #[must_use]
    pub fn drag_offset(&self, logical: isize, delta: f64) -> f64 {
        self.offset_for(logical) + delta
    }

    /// Slot order of the physical track.
    #[must_use]
    pub fn plan(&self) -> Vec<SlotPlan> {
        let n = self.item_count;
        let mut slots = Vec::with_capacity(self.track_item_count());

        if self.looping {
            let lead = n.saturating_sub(self.per_page);
            slots.extend((lead..n).map(|source| SlotPlan {
                source,
                cloned: true,
            }));
        }

        slots.extend((0..n).map(|source| SlotPlan {
            source,
            cloned: false,
        }));

        if self.looping {
            let tail = self.per_page.min(n);
            slots.extend((0..tail).map(|source| SlotPlan {
                source,
                cloned: true,
            }));
        }

        slots
    }
}
