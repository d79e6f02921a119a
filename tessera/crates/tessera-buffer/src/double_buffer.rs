//! Double-buffering for flicker-free terminal rendering.
//!
//! The front buffer mirrors what the terminal currently shows; the back
//! buffer receives the next frame. Swapping reports the cells that differ
//! and exchanges the two roles without copying any cells.

use std::mem;

use tessera_core::Size;

use crate::diff::{self, Patch};
use crate::CellBuffer;

/// Double-buffered cell storage.
///
/// # Examples
///
/// ```
/// use tessera_buffer::DoubleBuffer;
/// use tessera_core::Style;
///
/// let mut buffers = DoubleBuffer::new(80, 24);
/// buffers.paint_target().write_run(10, 5, "Hello, World!", Style::new());
///
/// // The space already matches the blank front buffer.
/// let patches = buffers.swap();
/// assert_eq!(patches.len(), 12);
///
/// // The same frame again changes nothing.
/// buffers.paint_target().write_run(10, 5, "Hello, World!", Style::new());
/// assert!(buffers.swap().is_empty());
/// ```
#[derive(Debug)]
pub struct DoubleBuffer {
    /// What the terminal currently shows.
    front: CellBuffer,
    /// The frame being painted.
    back: CellBuffer,
    /// Set after construction, resize or invalidation.
    needs_full_redraw: bool,
}

impl DoubleBuffer {
    /// Creates a double buffer of blank cells. The first frame needs a
    /// full redraw.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            front: CellBuffer::new(width, height),
            back: CellBuffer::new(width, height),
            needs_full_redraw: true,
        }
    }

    /// Returns the buffer width.
    #[inline]
    pub fn width(&self) -> u16 {
        self.back.width()
    }

    /// Returns the buffer height.
    #[inline]
    pub fn height(&self) -> u16 {
        self.back.height()
    }

    /// Returns the buffer dimensions.
    #[inline]
    pub fn size(&self) -> Size {
        self.back.size()
    }

    /// Number of cells in one buffer.
    #[inline]
    pub fn total_cells(&self) -> usize {
        self.back.len()
    }

    /// The buffer mirroring the terminal.
    #[inline]
    pub fn front(&self) -> &CellBuffer {
        &self.front
    }

    /// The buffer the next frame is painted into.
    #[inline]
    pub fn paint_target(&mut self) -> &mut CellBuffer {
        &mut self.back
    }

    /// Returns `true` when the next frame cannot be sent as a delta.
    #[inline]
    pub fn needs_full_redraw(&self) -> bool {
        self.needs_full_redraw
    }

    /// Compares the painted frame against the front buffer, then makes it
    /// the new front. The old front is cleared and becomes the next paint
    /// target.
    ///
    /// Returns the changed cells in row-major order.
    pub fn swap(&mut self) -> Vec<Patch> {
        let patches = diff::diff(&self.front, &self.back);
        mem::swap(&mut self.front, &mut self.back);
        self.back.clear();
        self.needs_full_redraw = false;
        patches
    }

    /// Reallocates both buffers at the new size and forces a full redraw.
    /// This happens even when the size is unchanged.
    pub fn resize(&mut self, width: u16, height: u16) {
        tracing::trace!(width, height, "resizing double buffer");
        self.front = CellBuffer::new(width, height);
        self.back = CellBuffer::new(width, height);
        self.needs_full_redraw = true;
    }

    /// Forgets what the terminal shows: the front buffer is blanked and
    /// the next frame is drawn in full.
    pub fn invalidate(&mut self) {
        self.front.clear();
        self.needs_full_redraw = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tessera_core::{Color, Style};

    #[test]
    fn test_double_buffer_new() {
        let buffers = DoubleBuffer::new(80, 24);
        assert_eq!(buffers.size(), Size::new(80, 24));
        assert_eq!(buffers.total_cells(), 80 * 24);
        assert!(buffers.needs_full_redraw());
    }

    #[test]
    fn test_double_buffer_swap_promotes_back() {
        let mut buffers = DoubleBuffer::new(10, 2);
        buffers.paint_target().write(3, 1, "A", Style::new().fg(Color::RED));

        let patches = buffers.swap();
        assert_eq!(patches, vec![Patch::new(3, 1, buffers.front().get(3, 1).unwrap().clone())]);
        assert_eq!(buffers.front().get(3, 1).unwrap().symbol, "A");
        assert!(!buffers.needs_full_redraw());
    }

    #[test]
    fn test_double_buffer_swap_clears_paint_target() {
        let mut buffers = DoubleBuffer::new(4, 1);
        buffers.paint_target().write_run(0, 0, "abcd", Style::new());
        buffers.swap();
        assert_eq!(*buffers.paint_target(), CellBuffer::new(4, 1));
    }

    #[test]
    fn test_double_buffer_removed_content_is_patched() {
        let mut buffers = DoubleBuffer::new(4, 1);
        buffers.paint_target().write_run(0, 0, "ab", Style::new());
        buffers.swap();

        buffers.paint_target().write(0, 0, "a", Style::new());
        let patches = buffers.swap();
        assert_eq!(patches.len(), 1);
        assert_eq!(patches[0].x, 1);
        assert_eq!(patches[0].cell, crate::Cell::default());
    }

    #[test]
    fn test_double_buffer_resize() {
        let mut buffers = DoubleBuffer::new(80, 24);
        buffers.paint_target().write(0, 0, "x", Style::new());
        buffers.swap();

        buffers.resize(100, 30);
        assert_eq!(buffers.size(), Size::new(100, 30));
        assert!(buffers.needs_full_redraw());
        assert_eq!(*buffers.front(), CellBuffer::new(100, 30));
    }

    #[test]
    fn test_double_buffer_resize_same_size_still_forces() {
        let mut buffers = DoubleBuffer::new(5, 5);
        buffers.swap();
        buffers.resize(5, 5);
        assert!(buffers.needs_full_redraw());
    }

    #[test]
    fn test_double_buffer_invalidate() {
        let mut buffers = DoubleBuffer::new(3, 1);
        buffers.paint_target().write(0, 0, "x", Style::new());
        buffers.swap();
        buffers.invalidate();
        assert!(buffers.needs_full_redraw());
        assert_eq!(*buffers.front(), CellBuffer::new(3, 1));
    }
}
