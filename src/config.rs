//! Configuration file support
//!
//! The configuration is an optional TOML file. Every field has a default, so a
//! missing file or an empty file yields a usable configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default location of the task file
pub const DEFAULT_DATA_FILE: &str = "taskdeck.toml";

/// Default `tracing` filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "warn";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the task file
    pub data_file: PathBuf,
    /// `tracing` filter directive, e.g. "info" or "taskdeck=debug"
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from `path`, falling back to defaults if it does not exist
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = Config::load("/nonexistent/taskdeck-config.toml").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.data_file, PathBuf::from("taskdeck.toml"));
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data_file = \"/tmp/tasks.toml\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/tasks.toml"));
        assert_eq!(config.log_filter, "warn");
    }

    #[test]
    fn test_invalid_file_is_an_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "data_file = [").unwrap();
        assert!(Config::load(file.path()).is_err());
    }
}
