//! Common types and traits shared across `schemacheck` crates.
//!
//! This crate provides the core abstractions that are shared between
//! `schemacheck-core` and the catalog reader crates, preventing circular dependencies.

pub mod drivers;
pub mod error;
pub mod io;
pub mod types;
pub mod utils;

// Re-export commonly used types
pub use drivers::{Driver, SupportStatus};
pub use error::{CatalogError, CatalogResult};
pub use io::CatalogReader;
pub use types::{DatasetDescriptor, DatasetKind, FieldDescriptor};
pub use utils::{ArrowDataTypeExt, field_types};
