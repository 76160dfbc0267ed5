//! Driver registry for the dataset formats `schemacheck` can introspect.
//!
//! Dataset references are resolved to a driver by file extension. Supported
//! drivers hand out a [`CatalogReader`]; planned drivers are listed so users get
//! a clear error instead of a generic "unknown format".
//!
//! # Examples
//!
//! ```
//! use schemacheck_core::drivers::{find_driver, find_driver_for_path};
//!
//! let geojson = find_driver("geojson").expect("GeoJSON driver should exist");
//! assert!(geojson.status.is_supported());
//!
//! let shp = find_driver_for_path("data/parcels.SHP").expect("shapefile driver");
//! assert_eq!(shp.short_name, "ESRI Shapefile");
//! ```

use std::path::Path;

use catalog_csv::CsvCatalogReader;
use catalog_geojson::GeoJsonCatalogReader;
use catalog_shapefile::ShapefileCatalogReader;
use schemacheck_core_common::CatalogReader;
pub use schemacheck_core_common::{Driver, SupportStatus};

const DRIVERS: &[Driver] = &[
    Driver::new(
        "CSV",
        "Comma Separated Value (.csv)",
        &["csv", "tsv"],
        SupportStatus::Supported,
    ),
    Driver::new(
        "GeoJSON",
        "GeoJSON",
        &["geojson", "json"],
        SupportStatus::Supported,
    ),
    Driver::new(
        "GeoJSONSeq",
        "GeoJSON Sequence",
        &["geojsonl", "geojsons"],
        SupportStatus::Supported,
    ),
    Driver::new(
        "ESRI Shapefile",
        "ESRI Shapefile",
        &["shp"],
        SupportStatus::Supported,
    ),
    Driver::new("dBASE", "dBASE table (.dbf)", &["dbf"], SupportStatus::Supported),
    Driver::new("GPKG", "GeoPackage", &["gpkg"], SupportStatus::Planned),
    Driver::new(
        "OpenFileGDB",
        "ESRI File Geodatabase",
        &["gdb"],
        SupportStatus::Planned,
    ),
];

/// Returns all registered drivers.
#[must_use]
pub fn get_drivers() -> &'static [Driver] {
    DRIVERS
}

/// Finds a driver by its short name (case-insensitive).
#[must_use]
pub fn find_driver(name: &str) -> Option<&'static Driver> {
    DRIVERS
        .iter()
        .find(|d| d.short_name.eq_ignore_ascii_case(name))
}

/// Finds the driver claiming a dataset reference's extension.
///
/// A trailing separator is tolerated so directory datasets (`city.gdb/`) resolve.
#[must_use]
pub fn find_driver_for_path(path: impl AsRef<Path>) -> Option<&'static Driver> {
    let extension = path.as_ref().extension()?.to_str()?;
    DRIVERS.iter().find(|d| d.handles_extension(extension))
}

/// Short names of supported drivers.
#[must_use]
pub fn get_supported_driver_names() -> Vec<&'static str> {
    DRIVERS
        .iter()
        .filter(|d| d.status.is_supported())
        .map(|d| d.short_name)
        .collect()
}

/// The catalog reader for a supported driver, or `None` if the driver has no reader yet.
#[must_use]
pub fn reader_for(driver: &Driver) -> Option<Box<dyn CatalogReader>> {
    if !driver.status.is_supported() {
        return None;
    }
    match driver.short_name {
        "CSV" => Some(Box::new(CsvCatalogReader::default())),
        "GeoJSON" | "GeoJSONSeq" => Some(Box::new(GeoJsonCatalogReader::default())),
        "ESRI Shapefile" | "dBASE" => Some(Box::new(ShapefileCatalogReader::new())),
        _ => None,
    }
}
