//! Errors raised by the core types.

use thiserror::Error;

/// Error type for color parsing operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    /// Input string was empty.
    #[error("empty input")]
    EmptyInput,

    /// Hex string had an invalid length.
    #[error("invalid hex length: {0} (expected 3 or 6)")]
    InvalidLength(usize),

    /// Invalid hexadecimal character.
    #[error("invalid hex character")]
    InvalidHexChar,

    /// A numeric component was missing or outside `0..=255`.
    #[error("invalid color component: {0}")]
    InvalidComponent(String),

    /// Unknown color name.
    #[error("unknown color name: {0}")]
    UnknownColor(String),
}
