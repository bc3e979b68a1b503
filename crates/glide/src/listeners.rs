#![forbid(unsafe_code)]

//! Listener bookkeeping.
//!
//! Every handle a surface hands out on attach is remembered here and handed
//! back verbatim on detach, so the surface always unregisters exactly what
//! it registered.

use crate::surface::{ListenerHandle, ListenerKind, Surface};

/// Listeners attached by one carousel.
#[derive(Debug, Default)]
pub struct ListenerSet {
    attached: Vec<(ListenerKind, ListenerHandle)>,
}

impl ListenerSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach the listeners for a carousel.
    ///
    /// Resize is always attached; pointer, touch and click only when
    /// `draggable`.
    pub fn attach<S: Surface>(&mut self, surface: &mut S, draggable: bool) {
        self.attach_one(surface, ListenerKind::Resize);
        if draggable {
            for kind in ListenerKind::POINTER {
                self.attach_one(surface, kind);
            }
        }
    }

    fn attach_one<S: Surface>(&mut self, surface: &mut S, kind: ListenerKind) {
        let handle = surface.listen(kind);
        self.attached.push((kind, handle));
    }

    /// Detach everything, in attach order.
    pub fn detach_all<S: Surface>(&mut self, surface: &mut S) {
        for (_, handle) in self.attached.drain(..) {
            surface.unlisten(handle);
        }
    }
}
