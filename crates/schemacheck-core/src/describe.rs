//! Dataset description and field catalog extraction.

use std::path::Path;

use log::{debug, info};
use schemacheck_core_common::CatalogReader;

use crate::drivers::{Driver, find_driver_for_path, get_supported_driver_names, reader_for};
use crate::error::DescribeError;
use crate::types::{DatasetDescriptor, DatasetSchema};

fn resolve(path: &Path) -> Result<(&'static Driver, Box<dyn CatalogReader>), DescribeError> {
    let driver = find_driver_for_path(path).ok_or_else(|| DescribeError::NoDriver {
        path: path.to_path_buf(),
        available: get_supported_driver_names().join(", "),
    })?;

    let reader = reader_for(driver).ok_or_else(|| DescribeError::DriverNotSupported {
        driver: driver.short_name.to_string(),
        path: path.to_path_buf(),
        status: driver.status.as_str().to_string(),
    })?;

    debug!("Resolved {} to driver {}", path.display(), driver.short_name);
    Ok((driver, reader))
}

/// Classify a dataset as a feature class or table and get its base name.
///
/// # Errors
///
/// Returns an error if no supported driver claims the reference or the
/// reader cannot introspect it.
pub fn describe(dataset: impl AsRef<Path>) -> Result<DatasetDescriptor, DescribeError> {
    let path = dataset.as_ref();
    let (driver, reader) = resolve(path)?;
    let descriptor = reader.describe(path)?;
    info!(
        "Described {} as {} '{}' ({})",
        path.display(),
        descriptor.kind,
        descriptor.name,
        driver.long_name
    );
    Ok(descriptor)
}

/// Read a described dataset's fields into a [`DatasetSchema`].
///
/// # Errors
///
/// Returns an error if no supported driver claims the reference or the
/// reader cannot list its fields.
pub fn extract_fields(
    dataset: impl AsRef<Path>,
    descriptor: &DatasetDescriptor,
) -> Result<DatasetSchema, DescribeError> {
    let path = dataset.as_ref();
    let (_, reader) = resolve(path)?;
    let fields = reader.list_fields(path)?;
    info!("Read {} field(s) from '{}'", fields.len(), descriptor.name);

    Ok(DatasetSchema {
        name: descriptor.name.clone(),
        kind: descriptor.kind,
        fields,
    })
}
