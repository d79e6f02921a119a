//! Terminal color selectors.
//!
//! A [`Color`] names one of the four selector families a terminal
//! understands: the terminal default, the 16 basic ANSI colors, the
//! 256-color palette, and 24-bit RGB. Each encodes to SGR codes directly,
//! so no color-space conversion happens at render time.
//!
//! ```
//! use tessera_core::color::Color;
//!
//! assert_eq!("red".parse::<Color>(), Ok(Color::RED));
//! assert_eq!("#ff8000".parse::<Color>(), Ok(Color::Rgb(255, 128, 0)));
//! assert_eq!("ansi256(208)".parse::<Color>(), Ok(Color::Indexed(208)));
//! ```

use crate::error::ColorParseError;
use smallvec::SmallVec;
use std::fmt;
use std::str::FromStr;

/// Buffer of SGR parameter codes, small enough to stay on the stack for
/// any single style.
pub type SgrCodes = SmallVec<[u8; 16]>;

/// A terminal color selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Color {
    /// The terminal's own default color (SGR 39 / 49).
    #[default]
    Default,
    /// One of the 16 basic colors. `0..=7` are normal, `8..=15` bright.
    Ansi(u8),
    /// An entry of the 256-color palette.
    Indexed(u8),
    /// A 24-bit truecolor value.
    Rgb(u8, u8, u8),
}

const BASIC_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

impl Color {
    /// Basic black.
    pub const BLACK: Self = Self::Ansi(0);
    /// Basic red.
    pub const RED: Self = Self::Ansi(1);
    /// Basic green.
    pub const GREEN: Self = Self::Ansi(2);
    /// Basic yellow.
    pub const YELLOW: Self = Self::Ansi(3);
    /// Basic blue.
    pub const BLUE: Self = Self::Ansi(4);
    /// Basic magenta.
    pub const MAGENTA: Self = Self::Ansi(5);
    /// Basic cyan.
    pub const CYAN: Self = Self::Ansi(6);
    /// Basic white.
    pub const WHITE: Self = Self::Ansi(7);
    /// Bright black, usually rendered as gray.
    pub const GRAY: Self = Self::Ansi(8);

    /// Returns `true` for the terminal default color.
    #[inline]
    pub const fn is_default(self) -> bool {
        matches!(self, Self::Default)
    }

    /// Appends the SGR codes selecting this color as foreground.
    pub fn push_fg_codes(self, codes: &mut SgrCodes) {
        self.push_codes(codes, 30, 90, 38, 39);
    }

    /// Appends the SGR codes selecting this color as background.
    pub fn push_bg_codes(self, codes: &mut SgrCodes) {
        self.push_codes(codes, 40, 100, 48, 49);
    }

    fn push_codes(self, codes: &mut SgrCodes, normal: u8, bright: u8, extended: u8, reset: u8) {
        match self {
            Self::Default => codes.push(reset),
            Self::Ansi(n) if n < 8 => codes.push(normal + n),
            Self::Ansi(n) => codes.push(bright + (n & 7)),
            Self::Indexed(n) => codes.extend_from_slice(&[extended, 5, n]),
            Self::Rgb(r, g, b) => codes.extend_from_slice(&[extended, 2, r, g, b]),
        }
    }

    /// Parses a color description.
    ///
    /// Accepted forms: `default`, basic names (`red`, `gray`,
    /// `bright-red`, `redBright`), `#rgb`, `#rrggbb`, `rgb(r, g, b)` and
    /// `ansi256(n)`.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorParseError::EmptyInput);
        }
        let lower = trimmed.to_ascii_lowercase();

        if let Some(hex) = lower.strip_prefix('#') {
            return parse_hex(hex);
        }
        if let Some(args) = call_args(&lower, "rgb") {
            let parts: Vec<&str> = args.split(',').map(str::trim).collect();
            if parts.len() != 3 {
                return Err(ColorParseError::InvalidComponent(args.to_string()));
            }
            return Ok(Self::Rgb(
                parse_component(parts[0])?,
                parse_component(parts[1])?,
                parse_component(parts[2])?,
            ));
        }
        if let Some(args) = call_args(&lower, "ansi256") {
            return Ok(Self::Indexed(parse_component(args.trim())?));
        }

        let name: String = lower.chars().filter(|c| *c != '-' && *c != '_').collect();
        match name.as_str() {
            "default" | "none" | "reset" => return Ok(Self::Default),
            "gray" | "grey" => return Ok(Self::GRAY),
            _ => {}
        }
        let (base, bright) = if let Some(rest) = name.strip_prefix("bright") {
            (rest, true)
        } else if let Some(rest) = name.strip_suffix("bright") {
            (rest, true)
        } else {
            (name.as_str(), false)
        };
        BASIC_NAMES
            .iter()
            .position(|candidate| *candidate == base)
            .map(|index| Self::Ansi(index as u8 + if bright { 8 } else { 0 }))
            .ok_or_else(|| ColorParseError::UnknownColor(trimmed.to_string()))
    }
}

fn call_args<'a>(input: &'a str, name: &str) -> Option<&'a str> {
    input
        .strip_prefix(name)?
        .trim_start()
        .strip_prefix('(')?
        .strip_suffix(')')
}

fn parse_component(text: &str) -> Result<u8, ColorParseError> {
    text.parse::<u8>()
        .map_err(|_| ColorParseError::InvalidComponent(text.to_string()))
}

fn parse_hex(hex: &str) -> Result<Color, ColorParseError> {
    let digit = |c: char| c.to_digit(16).map(|d| d as u8).ok_or(ColorParseError::InvalidHexChar);
    let digits = hex.chars().map(digit).collect::<Result<Vec<u8>, _>>()?;
    match digits.as_slice() {
        [r, g, b] => Ok(Color::Rgb(r * 17, g * 17, b * 17)),
        [r1, r2, g1, g2, b1, b2] => Ok(Color::Rgb(r1 * 16 + r2, g1 * 16 + g2, b1 * 16 + b2)),
        _ => Err(ColorParseError::InvalidLength(hex.len())),
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Default => write!(f, "default"),
            Self::Ansi(n) if n < 8 => write!(f, "{}", BASIC_NAMES[n as usize]),
            Self::Ansi(n) => write!(f, "bright-{}", BASIC_NAMES[(n & 7) as usize]),
            Self::Indexed(n) => write!(f, "ansi256({n})"),
            Self::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}
