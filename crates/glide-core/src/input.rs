#![forbid(unsafe_code)]

//! Canonical input types.
//!
//! Hosts translate whatever their windowing layer delivers (DOM events, winit
//! events, test scripts) into [`InputEvent`] values and forward them to the
//! carousel. Mouse and touch share one [`PointerEvent`] shape; the
//! [`PointerSource`] tells the gesture tracker which rules apply.
//!
//! # Design Notes
//!
//! - Coordinates are page coordinates in pixels, as `f64`.
//! - Only the horizontal axis drives slides; `y` matters for touch axis lock.
//! - [`InputResponse`] tells the host which default behaviors to cancel.

use bitflags::bitflags;

/// Canonical input event.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// A mouse or touch sample.
    Pointer(PointerEvent),
    /// A click on the container (after a possible drag).
    Click,
    /// The window was resized; the carousel re-reads widths from its surface.
    Resize,
}

/// Which device produced a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerSource {
    /// Mouse: always horizontal, can mark anchors as dragged.
    Mouse,
    /// Touch: axis is decided on the first move.
    Touch,
}

/// Phase of a pointer sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerPhase {
    /// Mouse down / touch start.
    Down,
    /// Mouse move / touch move.
    Move,
    /// Mouse up / touch end.
    Up,
    /// Mouse left the container / touch cancelled.
    Leave,
}

/// Element kind under the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TargetTag {
    /// Multi-line text field.
    TextArea,
    /// Option inside a select.
    Option,
    /// Single-line input.
    Input,
    /// Select box.
    Select,
    /// Hyperlink.
    Anchor,
    /// Anything else.
    #[default]
    Other,
}

impl TargetTag {
    /// Map an element node name (`"INPUT"`, `"a"`, ...) to a tag.
    #[must_use]
    pub fn from_node_name(name: &str) -> Self {
        match name.to_ascii_uppercase().as_str() {
            "TEXTAREA" => Self::TextArea,
            "OPTION" => Self::Option,
            "INPUT" => Self::Input,
            "SELECT" => Self::Select,
            "A" => Self::Anchor,
            _ => Self::Other,
        }
    }

    /// Form controls never start a drag.
    #[must_use]
    pub const fn is_form_control(self) -> bool {
        matches!(
            self,
            Self::TextArea | Self::Option | Self::Input | Self::Select
        )
    }
}

/// A mouse or touch sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    /// Producing device.
    pub source: PointerSource,
    /// Sample phase.
    pub phase: PointerPhase,
    /// Horizontal page coordinate.
    pub x: f64,
    /// Vertical page coordinate.
    pub y: f64,
    /// Element under the pointer.
    pub target: TargetTag,
}

impl PointerEvent {
    /// Create a sample over a plain element.
    #[must_use]
    pub const fn new(source: PointerSource, phase: PointerPhase, x: f64, y: f64) -> Self {
        Self {
            source,
            phase,
            x,
            y,
            target: TargetTag::Other,
        }
    }

    /// Mouse sample at `x` (mouse gestures ignore `y`).
    #[must_use]
    pub const fn mouse(phase: PointerPhase, x: f64) -> Self {
        Self::new(PointerSource::Mouse, phase, x, 0.0)
    }

    /// Touch sample at `(x, y)`.
    #[must_use]
    pub const fn touch(phase: PointerPhase, x: f64, y: f64) -> Self {
        Self::new(PointerSource::Touch, phase, x, y)
    }

    /// Set the element under the pointer.
    #[must_use]
    pub const fn with_target(mut self, target: TargetTag) -> Self {
        self.target = target;
        self
    }
}

impl From<PointerEvent> for InputEvent {
    fn from(event: PointerEvent) -> Self {
        Self::Pointer(event)
    }
}

bitflags! {
    /// Default behaviors the host should cancel for the delivered event.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct InputResponse: u8 {
        /// Cancel the platform default (text selection, scrolling, link follow).
        const PREVENT_DEFAULT = 0b0000_0001;
        /// Stop the event from reaching ancestors.
        const STOP_PROPAGATION = 0b0000_0010;
    }
}

impl InputResponse {
    /// Nothing to cancel.
    pub const NONE: Self = Self::empty();

    /// Whether the host should cancel the default action.
    #[must_use]
    pub const fn prevents_default(self) -> bool {
        self.contains(Self::PREVENT_DEFAULT)
    }

    /// Whether the host should stop propagation.
    #[must_use]
    pub const fn stops_propagation(self) -> bool {
        self.contains(Self::STOP_PROPAGATION)
    }
}
