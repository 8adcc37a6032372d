//! Windowed rendering over an item list.
//!
//! The terminal analogue of a virtualized list: only the rows inside the
//! window are rendered, and reaching the end of the window is the signal
//! that drives [`ItemFeed::load_more`](crate::feed::ItemFeed::load_more).

use std::ops::Range;

/// A scrollable window of `height` rows over a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    height: usize,
}

impl Viewport {
    /// Create a window of the given height (at least one row).
    pub fn new(height: usize) -> Self {
        Self {
            offset: 0,
            height: height.max(1),
        }
    }

    pub const fn offset(&self) -> usize {
        self.offset
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    /// The index range of rows currently visible in a list of `len` items.
    ///
    /// Clamped at both ends, so a window pointing past the end of a
    /// shrunken list yields an empty range rather than panicking.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = self.offset.min(len);
        let end = (start + self.height).min(len);
        start..end
    }

    /// Move the window down one row; clamps when the last row is visible.
    ///
    /// Returns whether the window actually moved.
    pub fn scroll_down(&mut self, len: usize) -> bool {
        if self.offset + self.height < len {
            self.offset += 1;
            true
        } else {
            false
        }
    }

    /// Move the window up one row; clamps at the top.
    pub fn scroll_up(&mut self) -> bool {
        if self.offset > 0 {
            self.offset -= 1;
            true
        } else {
            false
        }
    }

    /// Whether the window currently shows the last row of a list of `len`.
    pub const fn at_end(&self, len: usize) -> bool {
        self.offset + self.height >= len
    }

    /// Jump back to the top, for when the underlying list is replaced.
    pub fn reset(&mut self) {
        self.offset = 0;
    }
}
