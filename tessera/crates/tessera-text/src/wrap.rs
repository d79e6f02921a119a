//! Fitting styled lines into a fixed width.
//!
//! A text node's content is resolved into [`StyledLine`]s and then fitted to
//! its layout width with a [`WrapMode`]: word or character wrapping produce
//! more lines, truncation keeps one line per source line and marks the cut
//! with an ellipsis, clipping simply drops whatever overflows.

use crate::styled::{line_width, styled_lines, StyledGrapheme, StyledLine};
use std::fmt;
use std::str::FromStr;
use tessera_core::Style;

/// The glyph marking truncated text.
pub const ELLIPSIS: &str = "…";

/// Which end of a line loses content when it is truncated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Truncation {
    /// Keep the start: `"Hello W…"`.
    #[default]
    End,
    /// Keep the end: `"…o World"`.
    Start,
    /// Keep both ends: `"Hel…orld"`.
    Middle,
}

/// How text that is wider than its box is fitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WrapMode {
    /// Break at whitespace, splitting words only when a single word is
    /// wider than the box.
    #[default]
    Wrap,
    /// Break at any grapheme boundary.
    WrapChar,
    /// Cut each line and insert an ellipsis.
    Truncate(Truncation),
    /// Leave lines alone; overflow is clipped when painting.
    Clip,
}

impl FromStr for WrapMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wrap" => Ok(Self::Wrap),
            "wrap-char" | "hard" => Ok(Self::WrapChar),
            "truncate" | "truncate-end" => Ok(Self::Truncate(Truncation::End)),
            "truncate-start" => Ok(Self::Truncate(Truncation::Start)),
            "truncate-middle" => Ok(Self::Truncate(Truncation::Middle)),
            "clip" | "none" => Ok(Self::Clip),
            other => Err(format!("unknown wrap mode: {other}")),
        }
    }
}

impl fmt::Display for WrapMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Wrap => "wrap",
            Self::WrapChar => "wrap-char",
            Self::Truncate(Truncation::End) => "truncate-end",
            Self::Truncate(Truncation::Start) => "truncate-start",
            Self::Truncate(Truncation::Middle) => "truncate-middle",
            Self::Clip => "clip",
        };
        f.write_str(name)
    }
}

/// Fits every line of `lines` into `width` columns.
pub fn fit_lines<'a>(lines: Vec<StyledLine<'a>>, width: usize, mode: WrapMode) -> Vec<StyledLine<'a>> {
    match mode {
        WrapMode::Clip => lines,
        WrapMode::Truncate(at) => lines
            .into_iter()
            .map(|line| truncate_line(line, width, at))
            .collect(),
        WrapMode::Wrap => lines
            .iter()
            .flat_map(|line| wrap_words(line, width))
            .collect(),
        WrapMode::WrapChar => lines
            .iter()
            .flat_map(|line| wrap_chars(line, width))
            .collect(),
    }
}

/// Number of lines `text` occupies once fitted into `width` columns.
pub fn fitted_line_count(text: &str, width: usize, mode: WrapMode) -> usize {
    fit_lines(styled_lines(text, Style::new()), width, mode).len()
}

/// Breaks a line at grapheme boundaries.
///
/// A grapheme wider than `width` gets a line of its own.
pub fn wrap_chars<'a>(line: &[StyledGrapheme<'a>], width: usize) -> Vec<StyledLine<'a>> {
    let mut lines = Vec::new();
    let mut current: StyledLine<'a> = Vec::new();
    let mut current_width = 0;

    for grapheme in line {
        let w = grapheme.width as usize;
        if current_width + w > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }
        current.push(*grapheme);
        current_width += w;
    }

    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Breaks a line at whitespace.
///
/// Whitespace at a break is dropped. Words wider than `width` are split
/// with [`wrap_chars`].
pub fn wrap_words<'a>(line: &[StyledGrapheme<'a>], width: usize) -> Vec<StyledLine<'a>> {
    let mut lines = Vec::new();
    let mut current: StyledLine<'a> = Vec::new();
    let mut current_width = 0;

    for segment in segments(line) {
        let segment_width = line_width(segment);
        let is_space = segment[0].is_whitespace();

        if current_width + segment_width <= width {
            current.extend_from_slice(segment);
            current_width += segment_width;
            continue;
        }

        if is_space {
            // The break happens here; the whitespace itself disappears.
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
                current_width = 0;
            }
            continue;
        }

        if !current.is_empty() {
            trim_trailing_whitespace(&mut current);
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if segment_width <= width {
            current.extend_from_slice(segment);
            current_width = segment_width;
        } else {
            let mut pieces = wrap_chars(segment, width);
            if let Some(last) = pieces.pop() {
                lines.extend(pieces);
                current_width = line_width(&last);
                current = last;
            }
        }
    }

    if !current.is_empty() || lines.is_empty() {
        trim_trailing_whitespace(&mut current);
        lines.push(current);
    }
    lines
}

/// Splits a line into alternating runs of whitespace and non-whitespace.
fn segments<'l, 'a>(line: &'l [StyledGrapheme<'a>]) -> impl Iterator<Item = &'l [StyledGrapheme<'a>]> {
    let mut start = 0;
    std::iter::from_fn(move || {
        if start >= line.len() {
            return None;
        }
        let kind = line[start].is_whitespace();
        let len = line[start..]
            .iter()
            .take_while(|g| g.is_whitespace() == kind)
            .count();
        let segment = &line[start..start + len];
        start += len;
        Some(segment)
    })
}

fn trim_trailing_whitespace(line: &mut StyledLine<'_>) {
    while line.last().is_some_and(StyledGrapheme::is_whitespace) {
        line.pop();
    }
}

/// Cuts `line` down to `width` columns, marking the cut with [`ELLIPSIS`].
///
/// Lines that already fit are returned unchanged. The ellipsis borrows the
/// style of the grapheme it replaces.
pub fn truncate_line(line: StyledLine<'_>, width: usize, at: Truncation) -> StyledLine<'_> {
    if line_width(&line) <= width {
        return line;
    }
    if width == 0 {
        return Vec::new();
    }

    let available = width - 1;
    let ellipsis = |style: Style| StyledGrapheme {
        symbol: ELLIPSIS,
        style,
        width: 1,
    };

    match at {
        Truncation::End => {
            let mut kept = take_front(&line, available);
            let style = line[kept.len()].style;
            kept.push(ellipsis(style));
            kept
        }
        Truncation::Start => {
            let tail = take_back(&line, available);
            let style = line[line.len() - tail.len() - 1].style;
            let mut kept = vec![ellipsis(style)];
            kept.extend(tail);
            kept
        }
        Truncation::Middle => {
            let head_width = available / 2;
            let mut kept = take_front(&line, head_width);
            let tail = take_back(&line, available - head_width);
            let style = line[kept.len()].style;
            kept.push(ellipsis(style));
            kept.extend(tail);
            kept
        }
    }
}

fn take_front<'a>(line: &[StyledGrapheme<'a>], width: usize) -> StyledLine<'a> {
    let mut used = 0;
    line.iter()
        .take_while(|g| {
            used += g.width as usize;
            used <= width
        })
        .copied()
        .collect()
}

fn take_back<'a>(line: &[StyledGrapheme<'a>], width: usize) -> StyledLine<'a> {
    let mut used = 0;
    let mut tail: StyledLine<'a> = line
        .iter()
        .rev()
        .take_while(|g| {
            used += g.width as usize;
            used <= width
        })
        .copied()
        .collect();
    tail.reverse();
    tail
}

/// Wraps plain text, returning one string per output line.
/// Escape sequences are dropped from the result.
///
/// ```
/// use tessera_text::wrap::{wrap_text, WrapMode};
///
/// assert_eq!(wrap_text("Hello World", 6, WrapMode::Wrap), vec!["Hello", "World"]);
/// assert_eq!(wrap_text("abcdef", 4, WrapMode::WrapChar), vec!["abcd", "ef"]);
/// ```
pub fn wrap_text(text: &str, width: usize, mode: WrapMode) -> Vec<String> {
    fit_lines(styled_lines(text, Style::new()), width, mode)
        .iter()
        .map(|line| crate::styled::line_text(line))
        .collect()
}

/// Truncates plain text to `width` columns.
///
/// ```
/// use tessera_text::wrap::{truncate, Truncation};
///
/// assert_eq!(truncate("abcdefghij", 5, Truncation::End), "abcd…");
/// assert_eq!(truncate("Hello World!", 10, Truncation::Middle), "Hell…orld!");
/// assert_eq!(truncate("short", 10, Truncation::Start), "short");
/// ```
pub fn truncate(text: &str, width: usize, at: Truncation) -> String {
    wrap_text(text, width, WrapMode::Truncate(at)).join("\n")
}
