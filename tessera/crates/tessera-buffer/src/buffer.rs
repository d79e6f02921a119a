//! Fixed-size grid of terminal cells.
//!
//! The [`CellBuffer`] is the paint target of a frame: layout output is drawn
//! into it with [`write`](CellBuffer::write), [`write_run`](CellBuffer::write_run)
//! and [`fill`](CellBuffer::fill), and it can be turned back into an ANSI
//! string with [`serialize`](CellBuffer::serialize).

use tessera_core::{Rect, Size, Style};
use tessera_text::{grapheme_width, StyledGrapheme, StyledGraphemes};

use crate::Cell;

/// A 2D buffer of terminal cells.
///
/// Cells are stored in row-major order. (0, 0) is the top-left corner.
///
/// # Wide glyphs
///
/// Every wide glyph not in the last column is followed by a placeholder
/// cell. Overwriting either half of a wide glyph blanks the other half, so
/// the grid never holds an orphaned placeholder.
///
/// # Examples
///
/// ```
/// use tessera_buffer::CellBuffer;
/// use tessera_core::{Color, Style};
///
/// let mut buffer = CellBuffer::new(10, 2);
/// buffer.write_run(0, 0, "Hi 世界", Style::new().fg(Color::GREEN));
/// assert_eq!(buffer.row_text(0), "Hi 世界   ");
/// assert!(buffer.get(4, 0).is_some_and(|cell| cell.is_placeholder()));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CellBuffer {
    /// Cell storage in row-major order.
    cells: Vec<Cell>,
    width: u16,
    height: u16,
}

/// Options controlling [`CellBuffer::serialize_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Keep trailing rows that serialize to nothing.
    pub preserve_trailing_blank_rows: bool,
    /// Drop trailing blank, unstyled cells from every row.
    pub trim_rows: bool,
    /// Separator placed between rows.
    pub line_separator: &'static str,
}

impl Default for SerializeOptions {
    fn default() -> Self {
        Self {
            preserve_trailing_blank_rows: false,
            trim_rows: true,
            line_separator: "\n",
        }
    }
}

impl SerializeOptions {
    /// Every row at full width, separated by `\r\n`. Printed from the home
    /// position, this covers the whole screen.
    pub const fn full_frame() -> Self {
        Self {
            preserve_trailing_blank_rows: true,
            trim_rows: false,
            line_separator: "\r\n",
        }
    }
}

impl CellBuffer {
    /// Creates a buffer of blank cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            cells: vec![Cell::default(); size],
            width,
            height,
        }
    }

    /// Returns the buffer width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Returns the buffer height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Returns the buffer dimensions.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the total number of cells.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the buffer has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Returns a rectangle covering the entire buffer.
    #[inline]
    pub fn bounds(&self) -> Rect {
        Rect::from_size(self.size())
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Gets the cell at (x, y), or `None` when out of bounds.
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Returns all cells in row-major order.
    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Returns the cells of row `y`.
    pub fn row(&self, y: u16) -> Option<&[Cell]> {
        if y >= self.height {
            return None;
        }
        let start = y as usize * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Writes one grapheme at (x, y) and returns the columns it occupies.
    ///
    /// Writes outside the grid and zero-width graphemes are dropped and
    /// return 0. A wide glyph places a placeholder at `x + 1`, unless `x` is
    /// the last column, in which case it stands alone. A tab is stored as a
    /// space.
    pub fn write(&mut self, x: u16, y: u16, glyph: &str, style: Style) -> u16 {
        let glyph = if glyph == "\t" { " " } else { glyph };
        let width = grapheme_width(glyph).min(2) as u16;
        if width == 0 || self.index(x, y).is_none() {
            return 0;
        }

        self.release(x, y);
        let cell = Cell::new(glyph, style);
        let wide = cell.is_wide();
        self.put(x, y, cell);

        if wide && x + 1 < self.width {
            self.release(x + 1, y);
            self.put(x + 1, y, Cell::placeholder(style));
        }
        width
    }

    /// Writes a run of text starting at (x, y), resolving embedded SGR
    /// sequences against `style`. Returns the column after the last
    /// grapheme written.
    ///
    /// The run stops at the right edge. Line breaks and control sequences
    /// take no columns.
    pub fn write_run(&mut self, x: u16, y: u16, text: &str, style: Style) -> u16 {
        self.write_graphemes(x, y, StyledGraphemes::new(text, style))
    }

    /// Writes pre-resolved graphemes starting at (x, y). Returns the column
    /// after the last grapheme written.
    pub fn write_styled(&mut self, x: u16, y: u16, graphemes: &[StyledGrapheme<'_>]) -> u16 {
        self.write_graphemes(x, y, graphemes.iter().copied())
    }

    fn write_graphemes<'a>(
        &mut self,
        x: u16,
        y: u16,
        graphemes: impl Iterator<Item = StyledGrapheme<'a>>,
    ) -> u16 {
        let mut cursor = x;
        for grapheme in graphemes {
            if grapheme.width == 0 {
                continue;
            }
            if cursor >= self.width {
                break;
            }
            cursor = cursor.saturating_add(self.write(cursor, y, grapheme.symbol, grapheme.style));
        }
        cursor
    }

    /// Fills a rectangle with `glyph` in `style`, clipped to the grid.
    ///
    /// A wide glyph is repeated every two columns.
    pub fn fill(&mut self, x: u16, y: u16, width: u16, height: u16, glyph: &str, style: Style) {
        let Some(area) = Rect::new(x, y, width, height).intersection(self.bounds()) else {
            return;
        };
        for row in area.y..area.bottom() {
            let mut col = area.x;
            while col < area.right() {
                let step = self.write(col, row, glyph, style);
                if step == 0 {
                    return;
                }
                col = col.saturating_add(step);
            }
        }
    }

    /// Resets every cell to a default blank.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::default());
    }

    /// Returns the symbols of row `y` without styling, skipping placeholders.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y)
            .map(|cells| cells.iter().map(|cell| cell.symbol.as_str()).collect())
            .unwrap_or_default()
    }

    /// Serializes the buffer into an ANSI string.
    ///
    /// Rows are joined by `\n` with trailing blank cells trimmed. Trailing
    /// rows that end up empty are dropped unless
    /// `preserve_trailing_blank_rows` is set.
    ///
    /// ```
    /// use tessera_buffer::CellBuffer;
    /// use tessera_core::{Color, Style};
    ///
    /// let mut buffer = CellBuffer::new(6, 3);
    /// buffer.write_run(0, 0, "ab", Style::new().fg(Color::RED));
    /// assert_eq!(buffer.serialize(false), "\x1b[31mab\x1b[0m");
    /// assert_eq!(buffer.serialize(true), "\x1b[31mab\x1b[0m\n\n");
    /// ```
    pub fn serialize(&self, preserve_trailing_blank_rows: bool) -> String {
        self.serialize_with(SerializeOptions {
            preserve_trailing_blank_rows,
            ..SerializeOptions::default()
        })
    }

    /// Serializes the buffer with explicit options.
    pub fn serialize_with(&self, options: SerializeOptions) -> String {
        let mut out = Vec::with_capacity(self.len());
        self.serialize_into(options, &mut out);
        String::from_utf8_lossy(&out).into_owned()
    }

    /// Serializes the buffer, appending the bytes to `out`.
    ///
    /// Style changes are emitted only where the style differs from the
    /// previous cell. A row that ends in a non-default style is closed with
    /// a reset, so every row starts from the default style.
    pub fn serialize_into(&self, options: SerializeOptions, out: &mut Vec<u8>) {
        let mut rows: Vec<Vec<u8>> = (0..self.height)
            .map(|y| self.serialize_row(y, options.trim_rows))
            .collect();

        if !options.preserve_trailing_blank_rows {
            while rows.last().is_some_and(Vec::is_empty) {
                rows.pop();
            }
        }

        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                out.extend_from_slice(options.line_separator.as_bytes());
            }
            out.extend_from_slice(row);
        }
    }

    fn serialize_row(&self, y: u16, trim: bool) -> Vec<u8> {
        let Some(cells) = self.row(y) else {
            return Vec::new();
        };
        let end = if trim {
            cells
                .iter()
                .rposition(|cell| !cell.is_blank() && !cell.is_placeholder())
                .map_or(0, |i| i + 1)
        } else {
            cells.len()
        };

        let mut out = Vec::new();
        let mut current = Style::DEFAULT;
        for (x, cell) in (0..self.width).zip(&cells[..end]) {
            if cell.is_placeholder() {
                continue;
            }
            let style = cell.style();
            current.transition_to(&style, &mut out);
            current = style;
            out.extend_from_slice(cell.terminal_symbol(x, self.width).as_bytes());
        }
        if !current.is_default() {
            out.extend_from_slice(Style::RESET.as_bytes());
        }
        out
    }

    #[inline]
    fn put(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Blanks the partner of a wide glyph that is about to be overwritten
    /// at (x, y). The blank keeps the partner's style.
    fn release(&mut self, x: u16, y: u16) {
        let Some(i) = self.index(x, y) else {
            return;
        };
        let partner = if self.cells[i].is_placeholder() && x > 0 {
            i - 1
        } else if self.cells[i].is_wide() && x + 1 < self.width {
            i + 1
        } else {
            return;
        };
        let style = self.cells[partner].style();
        self.cells[partner] = Cell::blank(style);
    }
}
