//! Playground configuration

use crate::error::{PlaygroundError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming a JSON config file
pub const CONFIG_ENV: &str = "PLAYGROUND_CONFIG";

/// Playground configuration
///
/// Missing fields in a config file fall back to their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    /// Shortest non-empty value the validated input accepts
    pub min_input_length: usize,
    /// Start with the modal open
    pub initial_modal_visible: bool,
    /// Pretty-print the exported render tree
    pub pretty: bool,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            min_input_length: 3,
            initial_modal_visible: false,
            pretty: true,
        }
    }
}

impl PlaygroundConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the minimum input length
    pub fn min_input_length(mut self, len: usize) -> Self {
        self.min_input_length = len;
        self
    }

    /// Start with the modal open or closed
    pub fn initial_modal_visible(mut self, visible: bool) -> Self {
        self.initial_modal_visible = visible;
        self
    }

    /// Enable or disable pretty output
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Load a configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| PlaygroundError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| PlaygroundError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load the file named by [`CONFIG_ENV`], or the defaults when unset
    pub fn from_env() -> Result<Self> {
        match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                tracing::debug!(path = ?path, "loading playground config");
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = PlaygroundConfig::default();
        assert_eq!(config.min_input_length, 3);
        assert!(!config.initial_modal_visible);
        assert!(config.pretty);
    }

    #[test]
    fn test_builder() {
        let config = PlaygroundConfig::new()
            .min_input_length(5)
            .initial_modal_visible(true)
            .pretty(false);
        assert_eq!(config.min_input_length, 5);
        assert!(config.initial_modal_visible);
        assert!(!config.pretty);
    }

    #[test]
    fn test_from_file_partial() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"min_input_length": 8}}"#).unwrap();

        let config = PlaygroundConfig::from_file(file.path()).unwrap();
        assert_eq!(config.min_input_length, 8);
        assert!(config.pretty);
    }

    #[test]
    fn test_from_file_missing() {
        let err = PlaygroundConfig::from_file("/nonexistent/playground.json").unwrap_err();
        assert!(matches!(err, PlaygroundError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/playground.json"));
    }

    #[test]
    fn test_from_file_invalid() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "min_input_length = 8").unwrap();

        let err = PlaygroundConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, PlaygroundError::Parse { .. }));
    }
}
