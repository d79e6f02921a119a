//! Layout style types.
//!
//! Every keyword enum parses from and prints as the kebab-case name used in
//! style sheets (`"space-between"`, `"column-reverse"`, ...).

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Error returned when a style keyword or dimension cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleParseError {
    /// The keyword is not valid for the property.
    #[error("unknown {property} value: {value:?}")]
    UnknownValue {
        /// Property being parsed.
        property: &'static str,
        /// Rejected input.
        value: String,
    },
    /// The dimension is neither `auto`, a cell count, nor a percentage.
    #[error("invalid dimension: {0:?}")]
    InvalidDimension(String),
}

macro_rules! keywords {
    ($ty:ident, $property:literal, { $($variant:ident => $name:literal),+ $(,)? }) => {
        impl $ty {
            /// Returns the style-sheet keyword for this value.
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl FromStr for $ty {
            type Err = StyleParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim() {
                    $($name => Ok(Self::$variant),)+
                    other => Err(StyleParseError::UnknownValue {
                        property: $property,
                        value: other.to_owned(),
                    }),
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

/// Display mode for layout nodes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Display {
    /// Normal flex display.
    #[default]
    Flex,
    /// Node is hidden: zero-sized and its children are not laid out.
    None,
}

keywords!(Display, "display", { Flex => "flex", None => "none" });

/// Direction of a container's main axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FlexDirection {
    /// Left to right.
    #[default]
    Row,
    /// Top to bottom.
    Column,
    /// Row with the children in reverse order.
    RowReverse,
    /// Column with the children in reverse order.
    ColumnReverse,
}

keywords!(FlexDirection, "flex-direction", {
    Row => "row",
    Column => "column",
    RowReverse => "row-reverse",
    ColumnReverse => "column-reverse",
});

impl FlexDirection {
    /// Returns `true` if the main axis is horizontal.
    #[inline]
    pub const fn is_row(self) -> bool {
        matches!(self, Self::Row | Self::RowReverse)
    }

    /// Returns `true` if children are laid out last to first.
    #[inline]
    pub const fn is_reverse(self) -> bool {
        matches!(self, Self::RowReverse | Self::ColumnReverse)
    }
}

/// Distribution of leftover space along the main axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum JustifyContent {
    /// Packed toward the start.
    #[default]
    FlexStart,
    /// Packed toward the end.
    FlexEnd,
    /// Centered.
    Center,
    /// First at the start, last at the end, equal space between.
    SpaceBetween,
    /// Equal space around each item; half-size space at the edges.
    SpaceAround,
    /// Equal space between items and at both edges.
    SpaceEvenly,
}

keywords!(JustifyContent, "justify-content", {
    FlexStart => "flex-start",
    FlexEnd => "flex-end",
    Center => "center",
    SpaceBetween => "space-between",
    SpaceAround => "space-around",
    SpaceEvenly => "space-evenly",
});

/// Placement of items along the cross axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AlignItems {
    /// At the cross start.
    #[default]
    FlexStart,
    /// Centered.
    Center,
    /// At the cross end.
    FlexEnd,
    /// Fill the container's width. Only column containers stretch.
    Stretch,
}

keywords!(AlignItems, "align-items", {
    FlexStart => "flex-start",
    Center => "center",
    FlexEnd => "flex-end",
    Stretch => "stretch",
});

/// Per-item override of the container's [`AlignItems`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum AlignSelf {
    /// Use the container's value.
    #[default]
    Auto,
    /// At the cross start.
    FlexStart,
    /// Centered.
    Center,
    /// At the cross end.
    FlexEnd,
    /// Fill the container's width.
    Stretch,
}

keywords!(AlignSelf, "align-self", {
    Auto => "auto",
    FlexStart => "flex-start",
    Center => "center",
    FlexEnd => "flex-end",
    Stretch => "stretch",
});

impl AlignSelf {
    /// Resolves against the container's alignment.
    pub const fn resolve(self, parent: AlignItems) -> AlignItems {
        match self {
            Self::Auto => parent,
            Self::FlexStart => AlignItems::FlexStart,
            Self::Center => AlignItems::Center,
            Self::FlexEnd => AlignItems::FlexEnd,
            Self::Stretch => AlignItems::Stretch,
        }
    }
}

/// Line style of a box border. A border takes one cell on every side.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BorderStyle {
    /// `┌─┐`
    #[default]
    Single,
    /// `╔═╗`
    Double,
    /// `╭─╮`
    Round,
    /// `┏━┓`
    Bold,
    /// `+-+`
    Classic,
}

keywords!(BorderStyle, "border-style", {
    Single => "single",
    Double => "double",
    Round => "round",
    Bold => "bold",
    Classic => "classic",
});

/// Glyphs used to draw a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    /// Top-left corner.
    pub top_left: &'static str,
    /// Top-right corner.
    pub top_right: &'static str,
    /// Bottom-left corner.
    pub bottom_left: &'static str,
    /// Bottom-right corner.
    pub bottom_right: &'static str,
    /// Top and bottom edges.
    pub horizontal: &'static str,
    /// Left and right edges.
    pub vertical: &'static str,
}

impl BorderStyle {
    /// Returns the glyph set for this style.
    pub const fn glyphs(self) -> BorderGlyphs {
        let [top_left, top_right, bottom_left, bottom_right, horizontal, vertical] = match self {
            Self::Single => ["┌", "┐", "└", "┘", "─", "│"],
            Self::Double => ["╔", "╗", "╚", "╝", "═", "║"],
            Self::Round => ["╭", "╮", "╰", "╯", "─", "│"],
            Self::Bold => ["┏", "┓", "┗", "┛", "━", "┃"],
            Self::Classic => ["+", "+", "+", "+", "-", "|"],
        };
        BorderGlyphs {
            top_left,
            top_right,
            bottom_left,
            bottom_right,
            horizontal,
            vertical,
        }
    }
}

/// An explicit size along one axis.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum Dimension {
    /// Derived from content.
    #[default]
    Auto,
    /// Fixed number of cells.
    Cells(u16),
    /// Percentage (0 to 100) of the available space on the same axis.
    Percent(f32),
}

impl Dimension {
    /// Returns `true` for [`Dimension::Auto`].
    #[inline]
    pub const fn is_auto(self) -> bool {
        matches!(self, Self::Auto)
    }

    /// Resolves against the available space. Percentages are floored.
    ///
    /// ```
    /// use tessera_layout::Dimension;
    ///
    /// assert_eq!(Dimension::Percent(50.0).resolve(15), Some(7));
    /// assert_eq!(Dimension::Cells(4).resolve(15), Some(4));
    /// assert_eq!(Dimension::Auto.resolve(15), None);
    /// ```
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn resolve(self, available: u16) -> Option<u16> {
        match self {
            Self::Auto => None,
            Self::Cells(cells) => Some(cells),
            Self::Percent(pct) => Some((f32::from(available) * pct / 100.0).floor() as u16),
        }
    }
}

impl From<u16> for Dimension {
    fn from(value: u16) -> Self {
        Self::Cells(value)
    }
}

impl FromStr for Dimension {
    type Err = StyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "auto" {
            return Ok(Self::Auto);
        }
        if let Some(pct) = s.strip_suffix('%') {
            return pct
                .trim()
                .parse::<f32>()
                .ok()
                .filter(|pct| pct.is_finite())
                .map(Self::Percent)
                .ok_or_else(|| StyleParseError::InvalidDimension(s.to_owned()));
        }
        s.parse::<u16>()
            .map(Self::Cells)
            .map_err(|_| StyleParseError::InvalidDimension(s.to_owned()))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => f.write_str("auto"),
            Self::Cells(cells) => write!(f, "{cells}"),
            Self::Percent(pct) => write!(f, "{pct}%"),
        }
    }
}

/// Values for the four sides of a box, used for padding and margin.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Edges<T> {
    /// Top edge value.
    pub top: T,
    /// Right edge value.
    pub right: T,
    /// Bottom edge value.
    pub bottom: T,
    /// Left edge value.
    pub left: T,
}

impl<T: Copy> Edges<T> {
    /// Creates edges with the same value on all sides.
    pub const fn all(value: T) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Creates edges with separate vertical and horizontal values.
    pub const fn axes(vertical: T, horizontal: T) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Creates edges with a value for each side.
    pub const fn new(top: T, right: T, bottom: T, left: T) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Edges<u16> {
    /// No space on any side.
    pub const ZERO: Self = Self::all(0);

    /// Left plus right.
    #[inline]
    pub const fn horizontal(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Top plus bottom.
    #[inline]
    pub const fn vertical(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_keywords_round_trip_names() {
        assert_eq!("space-between".parse(), Ok(JustifyContent::SpaceBetween));
        assert_eq!("column-reverse".parse(), Ok(FlexDirection::ColumnReverse));
        assert_eq!(AlignItems::Stretch.to_string(), "stretch");
        assert_eq!(" none ".parse(), Ok(Display::None));
    }

    #[test]
    fn test_unknown_keyword() {
        let err = "diagonal".parse::<FlexDirection>().unwrap_err();
        assert_eq!(
            err,
            StyleParseError::UnknownValue {
                property: "flex-direction",
                value: "diagonal".to_owned(),
            }
        );
        assert_eq!(err.to_string(), "unknown flex-direction value: \"diagonal\"");
    }

    #[test]
    fn test_direction_axes() {
        assert!(FlexDirection::RowReverse.is_row());
        assert!(FlexDirection::RowReverse.is_reverse());
        assert!(!FlexDirection::Column.is_row());
        assert!(!FlexDirection::Column.is_reverse());
    }

    #[test]
    fn test_align_self_resolution() {
        assert_eq!(AlignSelf::Auto.resolve(AlignItems::Center), AlignItems::Center);
        assert_eq!(AlignSelf::FlexEnd.resolve(AlignItems::Center), AlignItems::FlexEnd);
    }

    #[test]
    fn test_dimension_parse() {
        assert_eq!("auto".parse(), Ok(Dimension::Auto));
        assert_eq!("12".parse(), Ok(Dimension::Cells(12)));
        assert_eq!("50%".parse(), Ok(Dimension::Percent(50.0)));
        assert!("-3".parse::<Dimension>().is_err());
        assert!("wide".parse::<Dimension>().is_err());
    }

    #[test]
    fn test_dimension_percent_floors() {
        assert_eq!(Dimension::Percent(33.0).resolve(10), Some(3));
        assert_eq!(Dimension::Percent(100.0).resolve(7), Some(7));
        assert_eq!(Dimension::Percent(-20.0).resolve(7), Some(0));
    }

    #[test]
    fn test_edges() {
        let edges = Edges::new(1, 2, 3, 4);
        assert_eq!(edges.horizontal(), 6);
        assert_eq!(edges.vertical(), 4);
        assert_eq!(Edges::axes(1, 2), Edges::new(1, 2, 1, 2));
    }

    #[test]
    fn test_border_glyphs() {
        assert_eq!(BorderStyle::Round.glyphs().top_left, "╭");
        assert_eq!(BorderStyle::Classic.glyphs().vertical, "|");
        assert_eq!("double".parse(), Ok(BorderStyle::Double));
    }
}
