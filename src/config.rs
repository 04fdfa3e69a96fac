//! Runtime configuration.
//!
//! Read from a JSON file passed with `--config`. Every field has a default,
//! so an empty object `{}` is a valid configuration.

use std::path::Path;
use serde::{Serialize, Deserialize};
use thiserror::Error;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Catalog puzzle loaded when none is named on the command line.
    pub default_puzzle: String,
    pub checker: CheckerConfig,
}

/// Settings for the solution checker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CheckerConfig {
    /// Flag every n-th wrong answer. 0 disables the flag.
    pub nth_error_trigger: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_puzzle: "neutral-or-x".to_string(),
            checker: CheckerConfig::default(),
        }
    }
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self { nth_error_trigger: 3 }
    }
}

impl Config {
    /// Load a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|e| ConfigError::ParseError(e.to_string()))
    }
}

/// Errors that can occur while reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    IoError(String),

    #[error("parse error: {0}")]
    ParseError(String),
}
