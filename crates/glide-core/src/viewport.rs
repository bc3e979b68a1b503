#![forbid(unsafe_code)]

//! Items-per-page resolution.

use crate::config::PerPage;

/// Maps a viewport width to an items-per-page count.
#[derive(Debug, Clone, Copy, Default)]
pub struct ViewportResolver;

impl ViewportResolver {
    /// Resolve `per_page` for a viewport `width` in pixels.
    ///
    /// A fixed count is returned unchanged. A breakpoint table yields the
    /// value of the largest breakpoint not above `width`, or 1 when every
    /// breakpoint is wider than the viewport.
    #[must_use]
    pub fn resolve(per_page: &PerPage, width: u32) -> usize {
        match per_page {
            PerPage::Fixed(n) => *n,
            PerPage::Responsive(table) => table
                .iter()
                .take_while(|&(min_width, _)| min_width <= width)
                .last()
                .map_or(1, |(_, n)| n),
        }
    }
}
