//! Errors raised by catalog readers while introspecting a dataset.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when a reader describes a dataset or lists its fields.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// An underlying I/O failure occurred.
    #[error("Failed to read '{path}': {source}")]
    Io {
        /// The dataset component being read
        path: PathBuf,
        /// The originating error
        #[source]
        source: std::io::Error,
    },

    /// The dataset content could not be parsed.
    #[error("Failed to parse '{path}': {message}")]
    Parse {
        /// The dataset component being parsed
        path: PathBuf,
        /// Description of the parse failure
        message: String,
    },

    /// A file the dataset needs alongside the referenced one is missing.
    #[error("Dataset '{path}' is missing its {component} component")]
    MissingComponent {
        /// The referenced dataset
        path: PathBuf,
        /// The missing component (e.g., "`.dbf` attribute table")
        component: String,
    },

    /// The reader cannot handle this dataset.
    #[error("Dataset '{path}' is not supported: {reason}")]
    Unsupported {
        /// The referenced dataset
        path: PathBuf,
        /// Why the reader cannot handle it
        reason: String,
    },
}

/// Type alias for Results using [`CatalogError`].
pub type CatalogResult<T> = std::result::Result<T, CatalogError>;

impl CatalogError {
    /// Wrap an I/O error with the path that was being read.
    #[must_use]
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Build a parse error for the given path.
    #[must_use]
    pub fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Parse {
            path: path.into(),
            message: message.into(),
        }
    }
}
