//! Error types for rendering and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading a [`RendererConfig`](crate::RendererConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config file '{path}': {source}")]
    Read {
        /// Path that was read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse renderer config: {0}")]
    Parse(#[from] toml::de::Error),

    /// `full_repaint_threshold` lies outside `(0, 1]`.
    #[error("full_repaint_threshold must lie in (0, 1], got {0}")]
    InvalidThreshold(f32),
}

/// Errors raised while rendering a frame.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Writing to or flushing the output sink failed.
    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    /// The renderer configuration is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type for rendering operations.
pub type RenderResult<T> = std::result::Result<T, RenderError>;
