//! Terminal cell representation.
//!
//! A [`Cell`] is one character position of the grid: a grapheme, its
//! colors and attributes, and its display width.

use compact_str::CompactString;
use tessera_core::{Color, Style, TextAttributes};
use tessera_text::grapheme_width;

/// A single cell in a [`CellBuffer`](crate::CellBuffer).
///
/// # Wide glyphs
///
/// A glyph two columns wide lives in its left cell (`width == 2`); the cell
/// to its right is a *placeholder* (`width == 0`, empty symbol) that is
/// never emitted on its own.
///
/// ```
/// use tessera_buffer::Cell;
/// use tessera_core::{Color, Style};
///
/// let cell = Cell::new("漢", Style::new().fg(Color::RED));
/// assert!(cell.is_wide());
/// assert_eq!(cell.style().fg, Color::RED);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    /// The grapheme displayed in this cell. Empty for placeholders.
    pub symbol: CompactString,
    /// Foreground (text) color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Text rendering attributes.
    pub attributes: TextAttributes,
    /// Display width: `1` normal, `2` wide glyph, `0` placeholder.
    pub width: u8,
}

impl Default for Cell {
    fn default() -> Self {
        Self::blank(Style::DEFAULT)
    }
}

impl Cell {
    /// Creates a cell holding `symbol` drawn in `style`.
    ///
    /// The width is measured from the symbol and kept within `1..=2`.
    pub fn new(symbol: &str, style: Style) -> Self {
        Self {
            symbol: CompactString::new(symbol),
            fg: style.fg,
            bg: style.bg,
            attributes: style.attributes,
            width: grapheme_width(symbol).clamp(1, 2) as u8,
        }
    }

    /// Creates a space cell in `style`.
    #[inline]
    pub fn blank(style: Style) -> Self {
        Self {
            symbol: CompactString::const_new(" "),
            fg: style.fg,
            bg: style.bg,
            attributes: style.attributes,
            width: 1,
        }
    }

    /// Creates the placeholder that follows a wide glyph drawn in `style`.
    #[inline]
    pub fn placeholder(style: Style) -> Self {
        Self {
            symbol: CompactString::const_new(""),
            fg: style.fg,
            bg: style.bg,
            attributes: style.attributes,
            width: 0,
        }
    }

    /// Returns the style of this cell.
    #[inline]
    pub fn style(&self) -> Style {
        Style {
            fg: self.fg,
            bg: self.bg,
            attributes: self.attributes,
        }
    }

    /// Returns `true` for the cell covered by a wide glyph to its left.
    #[inline]
    pub fn is_placeholder(&self) -> bool {
        self.width == 0
    }

    /// Returns `true` for a glyph spanning two columns.
    #[inline]
    pub fn is_wide(&self) -> bool {
        self.width == 2
    }

    /// Returns `true` for a space that leaves no visible trace: no
    /// background and no attribute that draws on whitespace.
    pub fn is_blank(&self) -> bool {
        self.symbol == " "
            && self.bg.is_default()
            && !self.attributes.intersects(
                TextAttributes::INVERSE | TextAttributes::UNDERLINE | TextAttributes::STRIKETHROUGH,
            )
    }

    /// The text written to a terminal for this cell at column `x` of a grid
    /// `grid_width` columns wide. A wide glyph in the last column would wrap
    /// onto the next row, so it goes out as a blank.
    #[inline]
    pub fn terminal_symbol(&self, x: u16, grid_width: u16) -> &str {
        if self.is_wide() && x.saturating_add(1) >= grid_width {
            " "
        } else {
            &self.symbol
        }
    }

    /// Resets the cell to a default blank.
    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_default_is_blank() {
        let cell = Cell::default();
        assert_eq!(cell.symbol, " ");
        assert_eq!(cell.width, 1);
        assert!(cell.is_blank());
        assert!(cell.style().is_default());
    }

    #[test]
    fn test_terminal_symbol_blanks_wide_glyph_at_edge() {
        let cell = Cell::new("界", Style::new());
        assert_eq!(cell.terminal_symbol(2, 4), "界");
        assert_eq!(cell.terminal_symbol(3, 4), " ");
        assert_eq!(Cell::new("a", Style::new()).terminal_symbol(3, 4), "a");
    }

    #[test]
    fn test_cell_width_from_symbol() {
        assert_eq!(Cell::new("a", Style::new()).width, 1);
        assert_eq!(Cell::new("界", Style::new()).width, 2);
        assert_eq!(Cell::new("e\u{301}", Style::new()).width, 1);
    }

    #[test]
    fn test_placeholder() {
        let cell = Cell::placeholder(Style::new().bg(Color::BLUE));
        assert!(cell.is_placeholder());
        assert!(!cell.is_blank());
        assert_eq!(cell.bg, Color::BLUE);
    }

    #[test]
    fn test_is_blank_respects_visible_styles() {
        assert!(Cell::blank(Style::new().fg(Color::RED).bold()).is_blank());
        assert!(!Cell::blank(Style::new().bg(Color::RED)).is_blank());
        assert!(!Cell::blank(Style::new().underline()).is_blank());
        assert!(!Cell::new("x", Style::new()).is_blank());
    }

    #[test]
    fn test_cell_equality_includes_style() {
        let a = Cell::new("x", Style::new());
        let b = Cell::new("x", Style::new().italic());
        assert_ne!(a, b);
        let mut c = b.clone();
        c.reset();
        assert_eq!(c, Cell::default());
    }
}
