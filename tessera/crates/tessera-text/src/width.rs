//! Display width measurement.
//!
//! [`display_width`] counts terminal columns, ignoring escape sequences.
//! [`WidthCache`] memoizes results keyed by the exact input string, escapes
//! included, and evicts the oldest entry once full. Layout calls
//! [`cached_width`] for every text line on every frame, so repeated strings
//! are measured once.

use crate::ansi::{Token, Tokenizer};
use crate::grapheme::grapheme_width;
use ahash::AHashMap;
use std::cell::RefCell;
use std::collections::VecDeque;

/// Entries kept by the thread-local cache behind [`cached_width`].
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;

/// Measure the display width of a string in terminal columns.
///
/// Escape sequences are zero width. Line breaks contribute nothing, so a
/// multi-line string measures the sum of its lines.
///
/// ```
/// use tessera_text::width::display_width;
///
/// assert_eq!(display_width("Hello"), 5);
/// assert_eq!(display_width("日本語"), 6);
/// assert_eq!(display_width("\x1b[1mbold\x1b[0m"), 4);
/// ```
pub fn display_width(text: &str) -> usize {
    if text.is_ascii() && !text.as_bytes().contains(&0x1B) {
        return text
            .bytes()
            .filter(|b| *b == b'\t' || (0x20..0x7F).contains(b))
            .count();
    }

    Tokenizer::new(text)
        .map(|token| match token {
            Token::Grapheme(grapheme) => grapheme_width(grapheme),
            Token::Sgr(_) | Token::Control(_) => 0,
        })
        .sum()
}

/// Width of the widest line in `text`.
///
/// ```
/// use tessera_text::width::max_line_width;
///
/// assert_eq!(max_line_width("Hello\nWorld!"), 6);
/// assert_eq!(max_line_width(""), 0);
/// ```
pub fn max_line_width(text: &str) -> usize {
    text.split('\n').map(cached_width).max().unwrap_or(0)
}

/// Number of lines in `text`. An empty string is one (empty) line.
pub fn line_count(text: &str) -> usize {
    text.split('\n').count()
}

/// A bounded memo of string widths with oldest-first eviction.
#[derive(Debug)]
pub struct WidthCache {
    widths: AHashMap<String, usize>,
    order: VecDeque<String>,
    capacity: usize,
}

impl WidthCache {
    /// Creates an empty cache holding at most `capacity` entries.
    /// A capacity of zero disables caching.
    pub fn new(capacity: usize) -> Self {
        Self {
            widths: AHashMap::with_capacity(capacity.min(DEFAULT_CACHE_CAPACITY)),
            order: VecDeque::with_capacity(capacity.min(DEFAULT_CACHE_CAPACITY)),
            capacity,
        }
    }

    /// Returns the width of `text`, measuring and remembering it on a miss.
    pub fn width(&mut self, text: &str) -> usize {
        if let Some(width) = self.widths.get(text) {
            return *width;
        }
        let width = display_width(text);
        if self.capacity == 0 {
            return width;
        }
        if self.order.len() >= self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.widths.remove(&oldest);
            }
        }
        self.widths.insert(text.to_owned(), width);
        self.order.push_back(text.to_owned());
        width
    }

    /// Returns `true` if `text` is currently cached.
    pub fn contains(&self, text: &str) -> bool {
        self.widths.contains_key(text)
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns `true` if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drops every entry.
    pub fn clear(&mut self) {
        self.widths.clear();
        self.order.clear();
    }
}

impl Default for WidthCache {
    fn default() -> Self {
        Self::new(DEFAULT_CACHE_CAPACITY)
    }
}

thread_local! {
    static CACHE: RefCell<WidthCache> = RefCell::new(WidthCache::default());
}

/// [`display_width`] through this thread's shared [`WidthCache`].
pub fn cached_width(text: &str) -> usize {
    CACHE.with(|cache| cache.borrow_mut().width(text))
}

/// Empties this thread's shared width cache.
pub fn clear_cache() {
    CACHE.with(|cache| cache.borrow_mut().clear());
}
