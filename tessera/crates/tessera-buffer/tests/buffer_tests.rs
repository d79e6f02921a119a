//! Integration tests for the tessera-buffer crate.
//!
//! Covers the wide-glyph placeholder invariant under arbitrary overwrites
//! and the swap behavior of the double buffer across several frames.

use tessera_buffer::{Cell, CellBuffer, DoubleBuffer, Patch};
use tessera_core::{Color, Style};

/// Every placeholder must sit right after a wide glyph, and every wide
/// glyph not in the last column must be followed by a placeholder.
fn assert_wide_invariant(buffer: &CellBuffer) {
    for y in 0..buffer.height() {
        let row = buffer.row(y).expect("row in bounds");
        for (x, cell) in row.iter().enumerate() {
            if cell.is_placeholder() {
                assert!(x > 0, "placeholder at column 0 of row {y}");
                assert!(row[x - 1].is_wide(), "orphan placeholder at ({x}, {y})");
            }
            if cell.is_wide() && x + 1 < row.len() {
                assert!(row[x + 1].is_placeholder(), "wide glyph at ({x}, {y}) lost its placeholder");
            }
        }
    }
}

// ============================================================================
// WIDE GLYPH TESTS
// ============================================================================

mod wide_glyphs {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_invariant_survives_mixed_writes() {
        let mut buffer = CellBuffer::new(7, 2);
        let writes: &[(u16, &str)] = &[
            (0, "世"),
            (1, "界"),
            (3, "a"),
            (2, "漢"),
            (4, "字"),
            (5, "b"),
            (6, "日"),
            (5, "本"),
            (0, "c"),
        ];
        for (x, glyph) in writes {
            buffer.write(*x, 0, glyph, Style::new());
            assert_wide_invariant(&buffer);
        }
    }

    #[test]
    fn test_invariant_after_runs_and_fills() {
        let mut buffer = CellBuffer::new(9, 3);
        buffer.write_run(0, 0, "日本語テキスト", Style::new());
        buffer.write_run(1, 0, "ab", Style::new());
        buffer.fill(0, 1, 9, 2, "世", Style::new().bg(Color::BLUE));
        buffer.write_run(3, 2, "xyz", Style::new());
        assert_wide_invariant(&buffer);
    }

    #[test]
    fn test_wide_glyph_in_last_column_stands_alone() {
        let mut buffer = CellBuffer::new(5, 1);
        let end = buffer.write_run(0, 0, "ab世界", Style::new());
        assert_eq!(end, 6);
        assert_eq!(buffer.row_text(0), "ab世界");
        assert!(buffer.get(4, 0).is_some_and(Cell::is_wide));
        assert_wide_invariant(&buffer);
    }
}

// ============================================================================
// DOUBLE BUFFER TESTS
// ============================================================================

mod double_buffering {
    use super::*;
    use pretty_assertions::assert_eq;

    fn paint(buffers: &mut DoubleBuffer, text: &str) {
        buffers.paint_target().write_run(0, 0, text, Style::new().fg(Color::GREEN));
    }

    #[test]
    fn test_identical_frames_produce_no_patches() {
        let mut buffers = DoubleBuffer::new(20, 2);
        paint(&mut buffers, "steady");
        assert_eq!(buffers.swap().len(), 6);

        for _ in 0..3 {
            paint(&mut buffers, "steady");
            assert!(buffers.swap().is_empty());
        }
    }

    #[test]
    fn test_patches_cover_only_changed_cells() {
        let mut buffers = DoubleBuffer::new(20, 2);
        paint(&mut buffers, "count: 9");
        buffers.swap();

        paint(&mut buffers, "count: 10");
        let patches = buffers.swap();
        let positions: Vec<_> = patches.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(positions, vec![(7, 0), (8, 0)]);
        assert_eq!(patches[0].cell.symbol, "1");
    }

    #[test]
    fn test_applying_patches_reproduces_front() {
        let mut buffers = DoubleBuffer::new(12, 3);
        paint(&mut buffers, "first frame");
        buffers.swap();
        let mut mirror = buffers.front().cells().to_vec();

        buffers.paint_target().write_run(2, 1, "second 世", Style::new().bold());
        let patches: Vec<Patch> = buffers.swap();
        for patch in patches {
            mirror[patch.y as usize * 12 + patch.x as usize] = patch.cell;
        }
        assert_eq!(mirror.as_slice(), buffers.front().cells());
    }
}
