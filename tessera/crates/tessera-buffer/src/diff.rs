//! Cell-level comparison of two buffers.
//!
//! Instead of redrawing the whole screen, a frame only has to update the
//! cells that differ from what the terminal already shows. [`diff`] finds
//! them in row-major order.

use crate::{Cell, CellBuffer};

/// A single changed cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patch {
    /// Column of the change.
    pub x: u16,
    /// Row of the change.
    pub y: u16,
    /// The new cell value.
    pub cell: Cell,
}

impl Patch {
    /// Creates a new patch.
    #[inline]
    pub const fn new(x: u16, y: u16, cell: Cell) -> Self {
        Self { x, y, cell }
    }
}

/// Lists every cell of `next` that differs from `current`, in row-major
/// order.
///
/// Buffers of different sizes cannot be compared cell by cell; every cell
/// of `next` is reported instead.
///
/// ```
/// use tessera_buffer::{diff::diff, CellBuffer};
/// use tessera_core::Style;
///
/// let current = CellBuffer::new(4, 2);
/// let mut next = current.clone();
/// next.write(1, 1, "x", Style::new());
///
/// let patches = diff(&current, &next);
/// assert_eq!(patches.len(), 1);
/// assert_eq!((patches[0].x, patches[0].y), (1, 1));
/// ```
pub fn diff(current: &CellBuffer, next: &CellBuffer) -> Vec<Patch> {
    if current.size() != next.size() {
        return full(next);
    }

    let width = next.width() as usize;
    current
        .cells()
        .iter()
        .zip(next.cells())
        .enumerate()
        .filter(|(_, (old, new))| old != new)
        .map(|(i, (_, new))| patch_at(i, width, new))
        .collect()
}

/// Lists every cell of `buffer`.
pub fn full(buffer: &CellBuffer) -> Vec<Patch> {
    let width = buffer.width() as usize;
    buffer
        .cells()
        .iter()
        .enumerate()
        .map(|(i, cell)| patch_at(i, width, cell))
        .collect()
}

/// Counts the cells that differ without collecting them.
pub fn count_changes(current: &CellBuffer, next: &CellBuffer) -> usize {
    if current.size() != next.size() {
        return next.len();
    }
    current
        .cells()
        .iter()
        .zip(next.cells())
        .filter(|(old, new)| old != new)
        .count()
}

#[inline]
fn patch_at(index: usize, width: usize, cell: &Cell) -> Patch {
    Patch::new((index % width) as u16, (index / width) as u16, cell.clone())
}
