//! Render counters.

use std::fmt;

/// Frame counters kept by a renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Counters {
    pub total_renders: u64,
    pub delta_renders: u64,
    pub full_renders: u64,
    pub last_patch_count: usize,
}

impl Counters {
    pub fn record(&mut self, full: bool, patch_count: usize) {
        self.total_renders += 1;
        if full {
            self.full_renders += 1;
        } else {
            self.delta_renders += 1;
        }
        self.last_patch_count = patch_count;
    }
}

/// A snapshot of a renderer's statistics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RenderStats {
    /// Frames rendered.
    pub total_renders: u64,
    /// Frames emitted as a list of changed cells.
    pub delta_renders: u64,
    /// Frames emitted as a full repaint.
    pub full_renders: u64,
    /// Cells that differed in the last frame.
    pub last_patch_count: usize,
    /// Cells in the grid.
    pub total_cells: usize,
    /// `last_patch_count` as a percentage of `total_cells`.
    pub update_percentage: f64,
}

impl RenderStats {
    pub(crate) fn new(counters: Counters, total_cells: usize) -> Self {
        let update_percentage = if total_cells == 0 {
            0.0
        } else {
            counters.last_patch_count as f64 * 100.0 / total_cells as f64
        };
        Self {
            total_renders: counters.total_renders,
            delta_renders: counters.delta_renders,
            full_renders: counters.full_renders,
            last_patch_count: counters.last_patch_count,
            total_cells,
            update_percentage,
        }
    }
}

impl fmt::Display for RenderStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} renders ({} delta, {} full), last frame {}/{} cells ({:.1}%)",
            self.total_renders,
            self.delta_renders,
            self.full_renders,
            self.last_patch_count,
            self.total_cells,
            self.update_percentage
        )
    }
}
