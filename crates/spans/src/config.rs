// Chunk: docs/chunks/span_pool_config - Pool sizing loaded from disk
//!
//! Configuration for the span pool.
//!
//! The only knob is the pool capacity. The default (16384) holds roughly two
//! full screens of spans with slack; editors showing very long lines or many
//! panes may want more.
//!
//! ## File Location
//!
//! The config file is stored at:
//! - macOS: `~/Library/Application Support/lite-edit/spans.json`
//! - Linux: `~/.config/lite-edit/spans.json`
//!
//! ```json
//! { "capacity": 16384 }
//! ```
//!
//! Missing fields fall back to their defaults.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pool::DEFAULT_CAPACITY;

/// Application name used for the config directory.
const APP_NAME: &str = "lite-edit";

/// Config file name.
const CONFIG_FILENAME: &str = "spans.json";

/// Errors that can occur while loading the pool configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("failed to read span pool config {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The config file is not valid JSON for [`SpanPoolConfig`].
    #[error("invalid span pool config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A pool must be able to hold at least one span.
    #[error("span pool capacity must be at least 1")]
    ZeroCapacity,
}

/// Span pool settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpanPoolConfig {
    /// Maximum number of retired spans kept for reuse.
    pub capacity: usize,
}

impl Default for SpanPoolConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
        }
    }
}

impl SpanPoolConfig {
    /// Returns the path to the config file.
    ///
    /// Returns `None` if the platform config directory cannot be determined.
    pub fn default_path() -> Option<PathBuf> {
        let config_dir = dirs::config_dir()?;
        Some(config_dir.join(APP_NAME).join(CONFIG_FILENAME))
    }

    /// Parses and validates a config from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: SpanPoolConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates the config file at `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Loads the config at `path`, falling back to the default.
    ///
    /// A missing file is the normal case and falls back silently; any other
    /// failure is logged before falling back.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io { ref source, .. }) if source.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(?path, "no span pool config, using defaults");
                Self::default()
            }
            Err(err) => {
                tracing::warn!(?path, error = %err, "ignoring span pool config");
                Self::default()
            }
        }
    }

    /// Writes this config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(path, json).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_capacity() {
        assert_eq!(SpanPoolConfig::default().capacity, 16384);
    }

    #[test]
    fn test_parse_capacity() {
        let config = SpanPoolConfig::from_json_str(r#"{ "capacity": 512 }"#).unwrap();
        assert_eq!(config.capacity, 512);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = SpanPoolConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SpanPoolConfig::default());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        let err = SpanPoolConfig::from_json_str(r#"{ "capacity": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::ZeroCapacity));
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = SpanPoolConfig::from_json_str("{ capacity: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_default_path_ends_with_file_name() {
        if let Some(path) = SpanPoolConfig::default_path() {
            assert!(path.ends_with("lite-edit/spans.json"));
        }
    }
}
