//! `schemacheck-core` compares the field schema of a parent dataset with that
//! of a child dataset and writes a plain-text report of what differs.
//!
//! This crate includes:
//! - **Driver Registry**: resolves dataset references to a format reader by extension.
//! - **Dataset Describer**: classifies datasets as feature classes or tables and reads their field catalogs.
//! - **Field Comparator**: checks each parent field for presence, type and length in the child.
//! - **Configuration**: the JSON file naming the report location and ignored fields.
//!
//! [`operations::compare_datasets`] runs the whole pipeline.

pub mod compare;
pub mod config;
pub mod describe;
pub mod drivers;
pub mod error;
pub mod operations;
pub mod report;
pub mod types;

pub use config::Config;
pub use error::{Result, SchemaCheckError};
pub use operations::compare_datasets;
