//! Configuration loading and validation.
//!
//! The configuration is a JSON document:
//!
//! ```json
//! {
//!   "output_loc": "report.txt",
//!   "fields_to_ignore": { "ignore_list": ["OBJECTID"], "ignore_cases": true }
//! }
//! ```
//!
//! Every key is required.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::IgnorePolicy;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Where the comparison report is written
    pub output_loc: PathBuf,
    /// Parent fields excluded from the comparison
    pub fields_to_ignore: FieldsToIgnore,
}

/// The `fields_to_ignore` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldsToIgnore {
    /// Field names to skip
    pub ignore_list: Vec<String>,
    /// Match names without regard to case
    pub ignore_cases: bool,
}

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, lacks a
    /// required key, or fails validation.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config =
            serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse configuration from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is invalid or fails validation.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json).map_err(|source| ConfigError::Parse {
            path: PathBuf::from("<inline>"),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `output_loc` is blank.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_loc.as_os_str().to_string_lossy().trim().is_empty() {
            return Err(ConfigError::Invalid {
                option: "output_loc".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// The ignore policy described by `fields_to_ignore`.
    #[must_use]
    pub fn ignore_policy(&self) -> IgnorePolicy {
        IgnorePolicy::new(
            self.fields_to_ignore.ignore_list.clone(),
            self.fields_to_ignore.ignore_cases,
        )
    }
}
