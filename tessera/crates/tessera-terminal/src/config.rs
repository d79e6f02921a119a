//! Renderer configuration.
//!
//! Every field has a default, so a TOML file only names what it changes:
//!
//! ```toml
//! use_delta = true
//! show_cursor = false
//! debug_logging = true
//! full_repaint_threshold = 0.4
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Fraction of changed cells above which a frame is repainted in full.
pub const DEFAULT_FULL_REPAINT_THRESHOLD: f32 = 0.5;

/// Options controlling how frames are emitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RendererConfig {
    /// Emit only changed cells when few enough of them changed.
    pub use_delta: bool,
    /// Leave the cursor visible while rendering.
    pub show_cursor: bool,
    /// Log per-frame statistics at `info` level.
    pub debug_logging: bool,
    /// A frame whose changed cells exceed this fraction of the grid is
    /// repainted in full instead of patched.
    pub full_repaint_threshold: f32,
}

impl Default for RendererConfig {
    fn default() -> Self {
        Self {
            use_delta: true,
            show_cursor: false,
            debug_logging: false,
            full_repaint_threshold: DEFAULT_FULL_REPAINT_THRESHOLD,
        }
    }
}

impl RendererConfig {
    /// Parses and validates a configuration from TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the configuration file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded renderer config");
        Ok(config)
    }

    /// Checks that the repaint threshold lies in `(0, 1]`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.full_repaint_threshold;
        if threshold > 0.0 && threshold <= 1.0 {
            Ok(())
        } else {
            Err(ConfigError::InvalidThreshold(threshold))
        }
    }

    /// Returns `true` if `changed` cells out of `total` call for a full repaint.
    pub fn exceeds_threshold(&self, changed: usize, total: usize) -> bool {
        changed as f64 > f64::from(self.full_repaint_threshold) * total as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = RendererConfig::default();
        assert!(config.use_delta);
        assert!(!config.show_cursor);
        assert!(!config.debug_logging);
        assert_eq!(config.full_repaint_threshold, 0.5);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = RendererConfig::from_toml_str("show_cursor = true").unwrap();
        assert_eq!(
            config,
            RendererConfig {
                show_cursor: true,
                ..RendererConfig::default()
            }
        );
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        for bad in ["full_repaint_threshold = 0.0", "full_repaint_threshold = 1.5"] {
            let err = RendererConfig::from_toml_str(bad).unwrap_err();
            assert!(matches!(err, ConfigError::InvalidThreshold(_)), "{bad}: {err}");
        }
        assert!(RendererConfig::from_toml_str("full_repaint_threshold = 1.0").is_ok());
    }

    #[test]
    fn test_malformed_toml() {
        let err = RendererConfig::from_toml_str("use_delta = \"yes\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_threshold_is_strictly_greater() {
        let config = RendererConfig::default();
        assert!(!config.exceeds_threshold(50, 100));
        assert!(config.exceeds_threshold(51, 100));
        assert!(!config.exceeds_threshold(0, 0));
    }
}
