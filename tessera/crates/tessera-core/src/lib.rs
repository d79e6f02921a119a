//! Core types for Tessera.
//!
//! This crate provides the building blocks shared by every stage of the
//! rendering pipeline:
//!
//! - [`color`]: terminal color selectors (default, 16-color, 256-color, RGB)
//! - [`style`]: text attributes plus SGR encoding and parsing
//! - [`geometry`]: cell-grid sizes and rectangles
//! - [`error`]: color parsing errors
//!
//! # Examples
//!
//! ```
//! use tessera_core::{Color, Style, TextAttributes};
//!
//! let heading = Style::new().fg(Color::CYAN).bold();
//! assert!(heading.attributes.contains(TextAttributes::BOLD));
//!
//! let mut bytes = Vec::new();
//! Style::new().transition_to(&heading, &mut bytes);
//! assert_eq!(bytes, b"\x1b[36;1m");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::match_same_arms)]

pub mod color;
pub mod error;
pub mod geometry;
pub mod style;

// Re-export commonly used types at the crate root for convenience
pub use color::Color;
pub use error::ColorParseError;
pub use geometry::{Rect, Size};
pub use style::{Style, TextAttributes};
