//! Escape sequence tokenizing.
//!
//! [`Tokenizer`] splits a string into a stream of [`Token`]s: display
//! graphemes, SGR style changes, and other control sequences. Width
//! measurement and cell writing both consume this stream, so escape
//! handling lives in exactly one place.
//!
//! Recognized sequences:
//! - CSI: `ESC [` ... final byte (0x40-0x7E); SGR when the final byte is `m`
//! - OSC: `ESC ]` ... BEL (0x07) or ST (`ESC \`)
//! - DCS/PM/APC: `ESC P` / `ESC ^` / `ESC _` ... ST
//! - Two-character sequences: `ESC` + single char

use std::borrow::Cow;
use unicode_segmentation::{Graphemes, UnicodeSegmentation};

const ESC: u8 = 0x1B;

/// One unit of tokenized text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A single extended grapheme cluster.
    Grapheme(&'a str),
    /// SGR parameters: the bytes between `ESC[` and the final `m`.
    Sgr(&'a str),
    /// Any other escape sequence. Occupies no cells.
    Control(&'a str),
}

/// Iterator over the [`Token`]s of a string.
///
/// ```
/// use tessera_text::ansi::{Token, Tokenizer};
///
/// let tokens: Vec<_> = Tokenizer::new("a\x1b[1mb").collect();
/// assert_eq!(
///     tokens,
///     vec![Token::Grapheme("a"), Token::Sgr("1"), Token::Grapheme("b")]
/// );
/// ```
pub struct Tokenizer<'a> {
    rest: &'a str,
    graphemes: Option<Graphemes<'a>>,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            rest: text,
            graphemes: None,
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Token<'a>> {
        loop {
            if let Some(grapheme) = self.graphemes.as_mut().and_then(Iterator::next) {
                return Some(Token::Grapheme(grapheme));
            }
            self.graphemes = None;

            if self.rest.is_empty() {
                return None;
            }

            // ESC is a single ASCII byte, so splitting at its position never
            // lands inside a UTF-8 sequence.
            if self.rest.as_bytes()[0] == ESC {
                let end = sequence_end(self.rest);
                let (sequence, rest) = self.rest.split_at(end);
                self.rest = rest;
                return Some(classify(sequence));
            }

            let end = self
                .rest
                .as_bytes()
                .iter()
                .position(|b| *b == ESC)
                .unwrap_or(self.rest.len());
            let (text, rest) = self.rest.split_at(end);
            self.rest = rest;
            self.graphemes = Some(text.graphemes(true));
        }
    }
}

fn classify(sequence: &str) -> Token<'_> {
    match sequence
        .strip_prefix("\x1b[")
        .and_then(|body| body.strip_suffix('m'))
    {
        Some(params) if params.bytes().all(|b| b.is_ascii_digit() || b == b';' || b == b':') => {
            Token::Sgr(params)
        }
        _ => Token::Control(sequence),
    }
}

/// Returns the byte length of the escape sequence at the start of `text`.
fn sequence_end(text: &str) -> usize {
    let bytes = text.as_bytes();
    match bytes.get(1) {
        None | Some(&ESC) => 1,
        Some(b'[') => skip_csi(bytes, 2),
        Some(b']' | b'P' | b'^' | b'_') => skip_string_terminated(bytes, 2),
        Some(_) => 1 + text[1..].chars().next().map_or(1, char::len_utf8),
    }
}

/// CSI format: parameter bytes (0x30-0x3F), intermediate bytes (0x20-0x2F),
/// final byte (0x40-0x7E).
fn skip_csi(bytes: &[u8], start: usize) -> usize {
    for (i, b) in bytes.iter().enumerate().skip(start) {
        if (0x40..=0x7E).contains(b) {
            return i + 1;
        }
        if !(0x20..=0x7E).contains(b) {
            // Invalid byte aborts the sequence; it is then read as text.
            return i;
        }
    }
    bytes.len()
}

/// Terminated by BEL (0x07) or ST (`ESC \`).
fn skip_string_terminated(bytes: &[u8], start: usize) -> usize {
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            0x07 => return i + 1,
            ESC if bytes.get(i + 1) == Some(&b'\\') => return i + 2,
            _ => i += 1,
        }
    }
    bytes.len()
}

/// Removes all escape sequences from `text`.
///
/// Returns `Cow::Borrowed` when no escape sequences are present.
///
/// ```
/// use tessera_text::ansi::strip_ansi;
///
/// assert_eq!(strip_ansi("\x1b[31mred\x1b[0m"), "red");
/// ```
pub fn strip_ansi(text: &str) -> Cow<'_, str> {
    if !text.as_bytes().contains(&ESC) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    for token in Tokenizer::new(text) {
        if let Token::Grapheme(grapheme) = token {
            out.push_str(grapheme);
        }
    }
    Cow::Owned(out)
}
