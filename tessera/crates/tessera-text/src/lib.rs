//! Text measurement and shaping for Tessera.
//!
//! - **Tokenizing**: [`ansi::Tokenizer`] splits strings into graphemes, SGR
//!   style changes and other escape sequences
//! - **Width**: [`width::display_width`] and the memoizing [`width::WidthCache`]
//! - **Styling**: [`styled::StyledGraphemes`] resolves SGR runs against a base style
//! - **Fitting**: word/char wrapping and start/middle/end truncation
//!
//! # Example
//!
//! ```
//! use tessera_text::{display_width, truncate, wrap_text, Truncation, WrapMode};
//!
//! assert_eq!(display_width("Hello 世界"), 10);
//! assert_eq!(truncate("Hello World", 8, Truncation::End), "Hello W…");
//! assert_eq!(wrap_text("Hello World", 6, WrapMode::Wrap), vec!["Hello", "World"]);
//! ```

#![warn(missing_docs)]

pub mod ansi;
pub mod grapheme;
pub mod styled;
pub mod width;
pub mod wrap;

pub use ansi::{strip_ansi, Token, Tokenizer};
pub use grapheme::grapheme_width;
pub use styled::{line_text, line_width, styled_lines, StyledGrapheme, StyledGraphemes, StyledLine};
pub use width::{
    cached_width, clear_cache, display_width, line_count, max_line_width, WidthCache,
    DEFAULT_CACHE_CAPACITY,
};
pub use wrap::{
    fit_lines, fitted_line_count, truncate, truncate_line, wrap_text, Truncation, WrapMode, ELLIPSIS,
};
