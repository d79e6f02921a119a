//! Resolving tokenized text into styled graphemes.
//!
//! SGR tokens update a running [`Style`] that starts from a caller-supplied
//! base; every grapheme after them carries the running style until a reset
//! brings it back to the base. Malformed SGR parameters are dropped and the
//! running style stays as it was.

use crate::ansi::{Token, Tokenizer};
use crate::grapheme::grapheme_width;
use tessera_core::Style;

/// A grapheme together with the style it is drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StyledGrapheme<'a> {
    /// The grapheme cluster.
    pub symbol: &'a str,
    /// Resolved style.
    pub style: Style,
    /// Display width in columns (0, 1 or 2).
    pub width: u8,
}

impl StyledGrapheme<'_> {
    /// Returns `true` for `\n` and `\r\n`.
    pub fn is_line_break(&self) -> bool {
        matches!(self.symbol, "\n" | "\r\n")
    }

    /// Returns `true` for whitespace graphemes that allow a word break.
    pub fn is_whitespace(&self) -> bool {
        self.symbol.chars().all(char::is_whitespace)
    }
}

/// One visual line of styled graphemes.
pub type StyledLine<'a> = Vec<StyledGrapheme<'a>>;

/// Iterator resolving a string into [`StyledGrapheme`]s.
///
/// Line breaks are yielded (width 0) so callers can split on them; other
/// zero-width graphemes such as lone control characters are skipped.
pub struct StyledGraphemes<'a> {
    tokens: Tokenizer<'a>,
    base: Style,
    current: Style,
}

impl<'a> StyledGraphemes<'a> {
    /// Starts resolving `text` with `base` as the initial and reset style.
    pub fn new(text: &'a str, base: Style) -> Self {
        Self {
            tokens: Tokenizer::new(text),
            base,
            current: base,
        }
    }
}

impl<'a> Iterator for StyledGraphemes<'a> {
    type Item = StyledGrapheme<'a>;

    fn next(&mut self) -> Option<StyledGrapheme<'a>> {
        loop {
            match self.tokens.next()? {
                Token::Sgr(params) => {
                    if !self.current.apply_sgr(params, &self.base) {
                        tracing::trace!(params, "ignoring malformed SGR sequence");
                    }
                }
                Token::Control(_) => {}
                Token::Grapheme(symbol) => {
                    // A terminal would jump to the next tab stop.
                    let symbol = if symbol == "\t" { " " } else { symbol };
                    let grapheme = StyledGrapheme {
                        symbol,
                        style: self.current,
                        width: grapheme_width(symbol) as u8,
                    };
                    if grapheme.width > 0 || grapheme.is_line_break() {
                        return Some(grapheme);
                    }
                }
            }
        }
    }
}

/// Splits `text` into styled lines. Styles carry across line breaks.
///
/// ```
/// use tessera_core::{Color, Style};
/// use tessera_text::styled::styled_lines;
///
/// let lines = styled_lines("\x1b[31mab\ncd", Style::new());
/// assert_eq!(lines.len(), 2);
/// assert_eq!(lines[1][0].symbol, "c");
/// assert_eq!(lines[1][0].style.fg, Color::RED);
/// ```
pub fn styled_lines(text: &str, base: Style) -> Vec<StyledLine<'_>> {
    let mut lines = vec![Vec::new()];
    for grapheme in StyledGraphemes::new(text, base) {
        if grapheme.is_line_break() {
            lines.push(Vec::new());
        } else if let Some(line) = lines.last_mut() {
            line.push(grapheme);
        }
    }
    lines
}

/// Total display width of a styled line.
pub fn line_width(line: &[StyledGrapheme<'_>]) -> usize {
    line.iter().map(|g| g.width as usize).sum()
}

/// Concatenates the symbols of a styled line, dropping styles.
pub fn line_text(line: &[StyledGrapheme<'_>]) -> String {
    line.iter().map(|g| g.symbol).collect()
}
