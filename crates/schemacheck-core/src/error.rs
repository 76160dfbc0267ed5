//! Custom error types for `schemacheck` operations.
//!
//! Every failure propagates to the process boundary unchanged; there is no
//! retry or partial-success path. The variants exist so the CLI can print an
//! accurate diagnostic and a hint.

use std::path::PathBuf;

use schemacheck_core_common::CatalogError;
use thiserror::Error;

/// Main error type for `schemacheck` operations.
#[derive(Debug, Error)]
pub enum SchemaCheckError {
    /// Configuration file could not be read or is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// A dataset could not be resolved or introspected
    #[error(transparent)]
    Describe(#[from] DescribeError),

    /// The report could not be written
    #[error(transparent)]
    Io(#[from] IoError),
}

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("Failed to read config file '{path}': {source}")]
    Read {
        /// The config file path
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON or lacks required keys
    #[error("Failed to parse config file '{path}': {source}")]
    Parse {
        /// The config file path
        path: PathBuf,
        /// The underlying error
        #[source]
        source: serde_json::Error,
    },

    /// An option has an unusable value
    #[error("Invalid {option} option: {message}")]
    Invalid {
        /// The option name
        option: String,
        /// Why it's invalid
        message: String,
    },
}

/// Errors resolving or introspecting a dataset reference.
#[derive(Debug, Error)]
pub enum DescribeError {
    /// No driver claims the reference's extension
    #[error("No driver found for dataset '{path}'. Supported drivers: {available}")]
    NoDriver {
        /// The dataset reference
        path: PathBuf,
        /// Comma-separated list of supported drivers
        available: String,
    },

    /// A driver claims the reference but cannot introspect it yet
    #[error("Driver '{driver}' cannot describe dataset '{path}' ({status})")]
    DriverNotSupported {
        /// The driver name
        driver: String,
        /// The dataset reference
        path: PathBuf,
        /// The driver's support status
        status: String,
    },

    /// The format reader failed
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Report output errors.
#[derive(Debug, Error)]
pub enum IoError {
    /// The report file could not be created
    #[error("Failed to create report file '{path}': {source}")]
    CreateReport {
        /// The report path
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },

    /// Writing to the report failed
    #[error("Failed to write report file '{path}': {source}")]
    WriteReport {
        /// The report path
        path: PathBuf,
        /// The underlying error
        #[source]
        source: std::io::Error,
    },
}

/// Type alias for Results using `SchemaCheckError`.
pub type Result<T> = std::result::Result<T, SchemaCheckError>;

impl SchemaCheckError {
    /// Get a user-friendly error message.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Config(e) => format!("Configuration error: {e}"),
            Self::Describe(e) => format!("Dataset error: {e}"),
            Self::Io(e) => format!("Output error: {e}"),
        }
    }

    /// Get recovery suggestions if available.
    #[must_use]
    pub fn recovery_suggestion(&self) -> Option<String> {
        match self {
            Self::Config(ConfigError::Read { .. }) => {
                Some("Check that the --config path is correct and readable.".to_string())
            },
            Self::Config(ConfigError::Parse { .. }) => Some(
                "The config needs \"output_loc\" and \"fields_to_ignore\" with \
                 \"ignore_list\" and \"ignore_cases\"."
                    .to_string(),
            ),
            Self::Config(ConfigError::Invalid { .. }) => None,
            Self::Describe(e) => e.recovery_suggestion(),
            Self::Io(_) => {
                Some("Ensure the output_loc directory exists and is writable.".to_string())
            },
        }
    }
}

impl DescribeError {
    fn recovery_suggestion(&self) -> Option<String> {
        match self {
            Self::NoDriver { .. } => {
                Some("Use a dataset with a supported file extension.".to_string())
            },
            Self::DriverNotSupported { .. } => {
                Some("Export the dataset to a supported format first.".to_string())
            },
            Self::Catalog(CatalogError::Io { .. }) => {
                Some("Check that the dataset path is correct and the file exists.".to_string())
            },
            Self::Catalog(CatalogError::MissingComponent { .. }) => {
                Some("Keep the shapefile's sidecar files next to the .shp.".to_string())
            },
            Self::Catalog(CatalogError::Unsupported { .. }) => {
                Some("Re-export the dataset in a supported variant (e.g. dBASE III).".to_string())
            },
            Self::Catalog(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_error_is_transparent() {
        let err: SchemaCheckError = DescribeError::NoDriver {
            path: PathBuf::from("roads.xyz"),
            available: "CSV, GeoJSON".to_string(),
        }
        .into();
        assert_eq!(
            err.to_string(),
            "No driver found for dataset 'roads.xyz'. Supported drivers: CSV, GeoJSON"
        );
        assert!(err.user_message().starts_with("Dataset error:"));
        assert!(err.recovery_suggestion().is_some());
    }

    #[test]
    fn catalog_error_converts() {
        let err: SchemaCheckError =
            DescribeError::from(CatalogError::parse("a.geojson", "bad")).into();
        assert_eq!(err.to_string(), "Failed to parse 'a.geojson': bad");
        assert!(err.recovery_suggestion().is_none());
    }

    #[test]
    fn unsupported_dataset_has_a_hint() {
        let err: SchemaCheckError = DescribeError::from(CatalogError::Unsupported {
            path: PathBuf::from("v7.dbf"),
            reason: "dBASE level 7 table (version byte 0x04)".to_string(),
        })
        .into();
        assert!(err.to_string().contains("is not supported"));
        assert!(err.recovery_suggestion().unwrap().contains("dBASE III"));
    }

    #[test]
    fn io_error_message() {
        let err: SchemaCheckError = IoError::CreateReport {
            path: PathBuf::from("/nope/report.txt"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        }
        .into();
        assert!(err.to_string().contains("/nope/report.txt"));
        assert!(err.user_message().starts_with("Output error:"));
    }
}
