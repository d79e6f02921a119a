//! Text styling and SGR encoding.
//!
//! - [`TextAttributes`]: bitflags for the decorations a cell can carry
//! - [`Style`]: colors plus attributes, with minimal transition encoding and
//!   incremental application of incoming SGR parameter strings
//!
//! # Examples
//!
//! ```
//! use tessera_core::color::Color;
//! use tessera_core::style::Style;
//!
//! let plain = Style::new();
//! let alert = Style::new().fg(Color::RED).bold();
//!
//! let mut out = Vec::new();
//! plain.transition_to(&alert, &mut out);
//! assert_eq!(out, b"\x1b[31;1m");
//! ```

use crate::color::{Color, SgrCodes};
use bitflags::bitflags;
use smallvec::SmallVec;
use std::fmt;
use std::io::Write;

bitflags! {
    /// Text decoration attributes as a compact bitfield.
    ///
    /// ```
    /// use tessera_core::style::TextAttributes;
    ///
    /// let attrs = TextAttributes::BOLD | TextAttributes::UNDERLINE;
    /// assert!(attrs.contains(TextAttributes::BOLD));
    /// assert!(!attrs.contains(TextAttributes::ITALIC));
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TextAttributes: u8 {
        /// Bold/bright text.
        const BOLD          = 0b0000_0001;
        /// Dim/faint text.
        const DIM           = 0b0000_0010;
        /// Italic text.
        const ITALIC        = 0b0000_0100;
        /// Underlined text.
        const UNDERLINE     = 0b0000_1000;
        /// Inverse video (swap fg and bg colors).
        const INVERSE       = 0b0001_0000;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0010_0000;
    }
}

const ATTRIBUTE_CODES: [(TextAttributes, u8, &str); 6] = [
    (TextAttributes::BOLD, 1, "bold"),
    (TextAttributes::DIM, 2, "dim"),
    (TextAttributes::ITALIC, 3, "italic"),
    (TextAttributes::UNDERLINE, 4, "underline"),
    (TextAttributes::INVERSE, 7, "inverse"),
    (TextAttributes::STRIKETHROUGH, 9, "strikethrough"),
];

impl TextAttributes {
    /// Appends the SGR codes that switch these attributes on.
    ///
    /// Bold is 1, dim 2, italic 3, underline 4, inverse 7 and
    /// strikethrough 9.
    pub fn push_codes(self, codes: &mut SgrCodes) {
        for (flag, code, _) in ATTRIBUTE_CODES {
            if self.contains(flag) {
                codes.push(code);
            }
        }
    }
}

impl fmt::Display for TextAttributes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: SmallVec<[&str; 6]> = ATTRIBUTE_CODES
            .iter()
            .filter(|(flag, _, _)| self.contains(*flag))
            .map(|(_, _, name)| *name)
            .collect();

        if parts.is_empty() {
            write!(f, "none")
        } else {
            write!(f, "{}", parts.join(", "))
        }
    }
}

/// Complete style information for one terminal cell.
///
/// `Color::Default` in either slot means "whatever the terminal uses".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    /// Foreground (text) color.
    pub fg: Color,
    /// Background color.
    pub bg: Color,
    /// Text decoration attributes.
    pub attributes: TextAttributes,
}

impl Style {
    /// Default terminal style (no colors, no attributes).
    pub const DEFAULT: Self = Self::new();

    /// SGR reset sequence.
    pub const RESET: &'static str = "\x1b[0m";

    /// Creates a new empty style.
    #[inline]
    pub const fn new() -> Self {
        Self {
            fg: Color::Default,
            bg: Color::Default,
            attributes: TextAttributes::empty(),
        }
    }

    /// Returns `true` if this style has no colors and no attributes set.
    #[inline]
    pub fn is_default(&self) -> bool {
        *self == Self::DEFAULT
    }

    /// Sets the foreground color.
    #[inline]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = color;
        self
    }

    /// Sets the background color.
    #[inline]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = color;
        self
    }

    /// Adds the specified attributes to the style.
    #[inline]
    pub const fn add_attributes(mut self, attrs: TextAttributes) -> Self {
        self.attributes = self.attributes.union(attrs);
        self
    }

    /// Adds the bold attribute.
    #[inline]
    pub const fn bold(self) -> Self {
        self.add_attributes(TextAttributes::BOLD)
    }

    /// Adds the dim attribute.
    #[inline]
    pub const fn dim(self) -> Self {
        self.add_attributes(TextAttributes::DIM)
    }

    /// Adds the italic attribute.
    #[inline]
    pub const fn italic(self) -> Self {
        self.add_attributes(TextAttributes::ITALIC)
    }

    /// Adds the underline attribute.
    #[inline]
    pub const fn underline(self) -> Self {
        self.add_attributes(TextAttributes::UNDERLINE)
    }

    /// Adds the inverse attribute.
    #[inline]
    pub const fn inverse(self) -> Self {
        self.add_attributes(TextAttributes::INVERSE)
    }

    /// Adds the strikethrough attribute.
    #[inline]
    pub const fn strikethrough(self) -> Self {
        self.add_attributes(TextAttributes::STRIKETHROUGH)
    }

    /// Layers `other` on top of this style.
    ///
    /// Non-default colors from `other` win; attributes accumulate.
    ///
    /// ```
    /// use tessera_core::color::Color;
    /// use tessera_core::style::Style;
    ///
    /// let base = Style::new().fg(Color::WHITE).bg(Color::BLACK);
    /// let merged = base.merge(&Style::new().fg(Color::RED).bold());
    ///
    /// assert_eq!(merged.fg, Color::RED);
    /// assert_eq!(merged.bg, Color::BLACK);
    /// ```
    #[inline]
    pub fn merge(&self, other: &Self) -> Self {
        Self {
            fg: if other.fg.is_default() { self.fg } else { other.fg },
            bg: if other.bg.is_default() { self.bg } else { other.bg },
            attributes: self.attributes | other.attributes,
        }
    }

    /// Appends the codes that establish this style from a reset state.
    fn push_codes(&self, codes: &mut SgrCodes) {
        if !self.fg.is_default() {
            self.fg.push_fg_codes(codes);
        }
        if !self.bg.is_default() {
            self.bg.push_bg_codes(codes);
        }
        self.attributes.push_codes(codes);
    }

    /// Writes the full SGR sequence for this style, starting from a reset.
    pub fn write_sgr(&self, buf: &mut Vec<u8>) {
        let mut codes = SgrCodes::new();
        codes.push(0);
        self.push_codes(&mut codes);
        write_codes(&codes, buf);
    }

    /// Writes the shortest SGR sequence moving the terminal from this style
    /// to `target`. Nothing is written when the styles are equal.
    ///
    /// Removing an attribute goes through a reset, since the individual
    /// "off" codes are not symmetric (22 clears both bold and dim).
    pub fn transition_to(&self, target: &Style, buf: &mut Vec<u8>) {
        if self == target {
            return;
        }

        let mut codes = SgrCodes::new();
        let removed = self.attributes - target.attributes;
        if !removed.is_empty() || target.is_default() {
            codes.push(0);
            target.push_codes(&mut codes);
        } else {
            if self.fg != target.fg {
                target.fg.push_fg_codes(&mut codes);
            }
            if self.bg != target.bg {
                target.bg.push_bg_codes(&mut codes);
            }
            (target.attributes - self.attributes).push_codes(&mut codes);
        }
        write_codes(&codes, buf);
    }

    /// Applies an SGR parameter string (the part between `ESC[` and `m`)
    /// to this style.
    ///
    /// A reset (`0` or an empty string) and the "default color" codes
    /// (39/49) fall back to `base`, so styled runs nested inside a
    /// container keep the container's look. Codes for unsupported
    /// attributes are skipped. A malformed string is rejected as a whole:
    /// the style is left untouched and `false` is returned.
    pub fn apply_sgr(&mut self, params: &str, base: &Style) -> bool {
        let mut values: SmallVec<[u16; 16]> = SmallVec::new();
        for part in params.split([';', ':']) {
            if part.is_empty() {
                values.push(0);
                continue;
            }
            match part.parse::<u16>() {
                Ok(value) => values.push(value),
                Err(_) => {
                    tracing::debug!(params, "ignoring malformed SGR parameters");
                    return false;
                }
            }
        }

        let mut next = *self;
        let mut i = 0;
        while i < values.len() {
            let code = values[i];
            match code {
                0 => next = *base,
                1 => next.attributes |= TextAttributes::BOLD,
                2 => next.attributes |= TextAttributes::DIM,
                3 => next.attributes |= TextAttributes::ITALIC,
                4 => next.attributes |= TextAttributes::UNDERLINE,
                7 => next.attributes |= TextAttributes::INVERSE,
                9 => next.attributes |= TextAttributes::STRIKETHROUGH,
                22 => next.attributes -= TextAttributes::BOLD | TextAttributes::DIM,
                23 => next.attributes -= TextAttributes::ITALIC,
                24 => next.attributes -= TextAttributes::UNDERLINE,
                27 => next.attributes -= TextAttributes::INVERSE,
                29 => next.attributes -= TextAttributes::STRIKETHROUGH,
                30..=37 => next.fg = Color::Ansi((code - 30) as u8),
                39 => next.fg = base.fg,
                40..=47 => next.bg = Color::Ansi((code - 40) as u8),
                49 => next.bg = base.bg,
                90..=97 => next.fg = Color::Ansi((code - 90) as u8 + 8),
                100..=107 => next.bg = Color::Ansi((code - 100) as u8 + 8),
                38 | 48 => {
                    let Some((color, consumed)) = extended_color(&values[i + 1..]) else {
                        tracing::debug!(params, "ignoring malformed extended color");
                        return false;
                    };
                    if code == 38 {
                        next.fg = color;
                    } else {
                        next.bg = color;
                    }
                    i += consumed;
                }
                _ => {}
            }
            i += 1;
        }
        *self = next;
        true
    }
}

/// Decodes the tail of a `38`/`48` selector, returning the color and the
/// number of parameters it consumed.
fn extended_color(rest: &[u16]) -> Option<(Color, usize)> {
    let component = |index: usize| rest.get(index).and_then(|v| u8::try_from(*v).ok());
    match rest.first()? {
        5 => Some((Color::Indexed(component(1)?), 2)),
        2 => Some((Color::Rgb(component(1)?, component(2)?, component(3)?), 4)),
        _ => None,
    }
}

fn write_codes(codes: &[u8], buf: &mut Vec<u8>) {
    if codes.is_empty() {
        return;
    }
    buf.extend_from_slice(b"\x1b[");
    for (i, code) in codes.iter().enumerate() {
        if i > 0 {
            buf.push(b';');
        }
        let _ = write!(buf, "{}", code);
    }
    buf.push(b'm');
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_default() {
            return write!(f, "Style(none)");
        }
        write!(
            f,
            "Style(fg: {}, bg: {}, attrs: {})",
            self.fg, self.bg, self.attributes
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn transition(from: Style, to: Style) -> String {
        let mut buf = Vec::new();
        from.transition_to(&to, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    mod text_attributes_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_push_codes_order() {
            let mut codes = SgrCodes::new();
            (TextAttributes::STRIKETHROUGH | TextAttributes::BOLD | TextAttributes::INVERSE)
                .push_codes(&mut codes);
            assert_eq!(codes.to_vec(), vec![1, 7, 9]);
        }

        #[test]
        fn test_display() {
            let attrs = TextAttributes::BOLD | TextAttributes::ITALIC;
            assert_eq!(attrs.to_string(), "bold, italic");
            assert_eq!(TextAttributes::empty().to_string(), "none");
        }
    }

    mod transition_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_equal_styles_emit_nothing() {
            let style = Style::new().fg(Color::RED);
            assert_eq!(transition(style, style), "");
        }

        #[test]
        fn test_add_color_and_attribute() {
            let to = Style::new().fg(Color::GREEN).bg(Color::Rgb(1, 2, 3)).underline();
            assert_eq!(transition(Style::new(), to), "\x1b[32;48;2;1;2;3;4m");
        }

        #[test]
        fn test_color_back_to_default() {
            let from = Style::new().fg(Color::RED).bold();
            let to = Style::new().bold();
            assert_eq!(transition(from, to), "\x1b[39m");
        }

        #[test]
        fn test_removing_attribute_resets() {
            let from = Style::new().fg(Color::Indexed(200)).bold().italic();
            let to = Style::new().fg(Color::Indexed(200)).italic();
            assert_eq!(transition(from, to), "\x1b[0;38;5;200;3m");
        }

        #[test]
        fn test_to_default_is_plain_reset() {
            let from = Style::new().bg(Color::BLUE);
            assert_eq!(transition(from, Style::new()), "\x1b[0m");
        }

        #[test]
        fn test_write_sgr() {
            let mut buf = Vec::new();
            Style::new().fg(Color::Ansi(9)).dim().write_sgr(&mut buf);
            assert_eq!(buf, b"\x1b[0;91;2m");
        }
    }

    mod apply_sgr_tests {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_attributes_and_basic_colors() {
            let mut style = Style::new();
            assert!(style.apply_sgr("1;31;44", &Style::new()));
            assert_eq!(style, Style::new().fg(Color::RED).bg(Color::BLUE).bold());
        }

        #[test]
        fn test_bright_colors() {
            let mut style = Style::new();
            style.apply_sgr("93;101", &Style::new());
            assert_eq!(style.fg, Color::Ansi(11));
            assert_eq!(style.bg, Color::Ansi(9));
        }

        #[test]
        fn test_extended_colors() {
            let mut style = Style::new();
            assert!(style.apply_sgr("38;5;208;48;2;10;20;30;4", &Style::new()));
            assert_eq!(style.fg, Color::Indexed(208));
            assert_eq!(style.bg, Color::Rgb(10, 20, 30));
            assert!(style.attributes.contains(TextAttributes::UNDERLINE));
        }

        #[test]
        fn test_reset_returns_to_base() {
            let base = Style::new().fg(Color::CYAN);
            let mut style = base;
            style.apply_sgr("1;35", &base);
            assert_eq!(style.fg, Color::MAGENTA);
            style.apply_sgr("0", &base);
            assert_eq!(style, base);
            style.apply_sgr("", &base);
            assert_eq!(style, base);
        }

        #[test]
        fn test_attribute_off_codes() {
            let mut style = Style::new().bold().dim().italic().inverse();
            style.apply_sgr("22;27", &Style::new());
            assert_eq!(style.attributes, TextAttributes::ITALIC);
        }

        #[test]
        fn test_default_color_codes_use_base() {
            let base = Style::new().fg(Color::WHITE).bg(Color::BLACK);
            let mut style = Style::new().fg(Color::RED).bg(Color::GREEN);
            style.apply_sgr("39;49", &base);
            assert_eq!(style, base);
        }

        #[test]
        fn test_malformed_is_rejected() {
            let mut style = Style::new();
            assert!(!style.apply_sgr("1;x", &Style::new()));
            assert!(!style.apply_sgr("4;38;2;1", &Style::new()));
            assert!(!style.apply_sgr("38;5;999", &Style::new()));
            assert_eq!(style, Style::new());
        }

        #[test]
        fn test_unsupported_codes_are_skipped() {
            let mut style = Style::new();
            assert!(style.apply_sgr("5;8;1", &Style::new()));
            assert_eq!(style, Style::new().bold());
        }
    }

    #[test]
    fn test_style_display() {
        assert_eq!(Style::new().to_string(), "Style(none)");
        assert_eq!(
            Style::new().fg(Color::RED).bold().to_string(),
            "Style(fg: red, bg: default, attrs: bold)"
        );
    }
}
