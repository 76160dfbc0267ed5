//! Field catalog reader for `GeoJSON` and newline-delimited `GeoJSON`.

pub mod infer;
pub mod parser;

use std::path::Path;

use log::debug;
use schemacheck_core_common::io::base_name;
use schemacheck_core_common::{
    ArrowDataTypeExt, CatalogError, CatalogReader, CatalogResult, DatasetDescriptor, DatasetKind,
    FieldDescriptor, field_types,
};

use crate::infer::infer_property_types;
use crate::parser::{FeatureRecord, parse_geojson_bytes};

/// Options controlling how `GeoJSON` files are read.
#[derive(Debug, Clone)]
pub struct GeoJsonCatalogOptions {
    /// Maximum number of features to sample for schema inference.
    pub schema_infer_max_features: Option<usize>,
    /// Name of the field reported for feature geometries.
    pub geometry_column_name: String,
}

impl Default for GeoJsonCatalogOptions {
    fn default() -> Self {
        Self {
            schema_infer_max_features: Some(1024),
            geometry_column_name: "geometry".to_string(),
        }
    }
}

impl GeoJsonCatalogOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_schema_infer_max_features(mut self, limit: Option<usize>) -> Self {
        self.schema_infer_max_features = limit;
        self
    }

    #[must_use]
    pub fn with_geometry_column_name(mut self, name: impl Into<String>) -> Self {
        self.geometry_column_name = name.into();
        self
    }
}

/// [`CatalogReader`] for `GeoJSON` files.
///
/// A file is a feature class when it is a bare geometry or when any sampled
/// feature has a non-null geometry. Feature classes report a trailing geometry
/// field after their properties.
#[derive(Debug, Clone, Default)]
pub struct GeoJsonCatalogReader {
    options: GeoJsonCatalogOptions,
}

impl GeoJsonCatalogReader {
    #[must_use]
    pub fn new(options: GeoJsonCatalogOptions) -> Self {
        Self { options }
    }

    fn records(&self, path: &Path) -> CatalogResult<Vec<FeatureRecord>> {
        let bytes = std::fs::read(path).map_err(|err| CatalogError::io(path, err))?;
        parse_geojson_bytes(&bytes, self.options.schema_infer_max_features, path)
    }
}

fn has_geometry(records: &[FeatureRecord]) -> bool {
    records.iter().any(|record| record.has_geometry)
}

impl CatalogReader for GeoJsonCatalogReader {
    fn describe(&self, path: &Path) -> CatalogResult<DatasetDescriptor> {
        let records = self.records(path)?;
        debug!(
            "GeoJSON {} sampled {} feature(s)",
            path.display(),
            records.len()
        );

        Ok(DatasetDescriptor {
            name: base_name(path),
            kind: DatasetKind::from_has_geometry(has_geometry(&records)),
        })
    }

    fn list_fields(&self, path: &Path) -> CatalogResult<Vec<FieldDescriptor>> {
        let records = self.records(path)?;

        let mut fields: Vec<FieldDescriptor> = infer_property_types(&records)
            .into_iter()
            .map(|(name, data_type)| FieldDescriptor::new(name, data_type.field_type()))
            .collect();

        if has_geometry(&records) {
            fields.push(FieldDescriptor::new(
                self.options.geometry_column_name.clone(),
                field_types::GEOMETRY,
            ));
        }

        Ok(fields)
    }
}
