//! Field catalog reader for ESRI Shapefiles and standalone dBASE tables.
//!
//! A `.shp` reference is a feature class unless its header declares the null
//! shape type; its fields come from the sibling `.dbf`. A `.dbf` reference is
//! a table. Field widths and decimal counts come straight from the dBASE
//! header, so length, precision and scale are reported as declared.

pub mod dbase;
pub mod shp;

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use log::debug;
use schemacheck_core_common::io::base_name;
use schemacheck_core_common::{
    CatalogError, CatalogReader, CatalogResult, DatasetDescriptor, DatasetKind, FieldDescriptor,
    field_types,
};

use crate::dbase::read_fields;
use crate::shp::read_shape_type;

/// Name of the geometry field reported for shapefile feature classes.
pub const SHAPE_FIELD: &str = "Shape";

/// [`CatalogReader`] for `.shp` and `.dbf` references.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapefileCatalogReader;

impl ShapefileCatalogReader {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn kind(path: &Path) -> CatalogResult<DatasetKind> {
        if !is_main_file(path) {
            return Ok(DatasetKind::Table);
        }
        let shape_type = read_shape_type(open(path)?, path)?;
        debug!("Shapefile {} shape type {}", path.display(), shape_type.as_str());
        Ok(DatasetKind::from_has_geometry(!shape_type.is_null()))
    }
}

fn is_main_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("shp"))
}

fn open(path: &Path) -> CatalogResult<BufReader<File>> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|err| CatalogError::io(path, err))
}

/// Locate the `.dbf` that belongs to a `.shp`, trying both extension cases.
fn attribute_table(path: &Path) -> CatalogResult<PathBuf> {
    ["dbf", "DBF"]
        .iter()
        .map(|ext| path.with_extension(ext))
        .find(|candidate| candidate.is_file())
        .ok_or_else(|| CatalogError::MissingComponent {
            path: path.to_path_buf(),
            component: "`.dbf` attribute table".to_string(),
        })
}

impl CatalogReader for ShapefileCatalogReader {
    fn describe(&self, path: &Path) -> CatalogResult<DatasetDescriptor> {
        Ok(DatasetDescriptor {
            name: base_name(path),
            kind: Self::kind(path)?,
        })
    }

    fn list_fields(&self, path: &Path) -> CatalogResult<Vec<FieldDescriptor>> {
        let kind = Self::kind(path)?;
        let table = if is_main_file(path) {
            attribute_table(path)?
        } else {
            path.to_path_buf()
        };

        let mut fields = Vec::new();
        if kind == DatasetKind::Featureclass {
            fields.push(FieldDescriptor::new(SHAPE_FIELD, field_types::GEOMETRY));
        }
        fields.extend(
            read_fields(open(&table)?, &table)?
                .iter()
                .map(dbase::DbaseField::to_descriptor),
        );

        debug!("dBASE {} has {} field(s)", table.display(), fields.len());
        Ok(fields)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dbase::tests::dbase_header;
    use crate::shp::tests::shp_header;
    use tempfile::TempDir;

    #[test]
    fn polygon_shapefile_lists_shape_then_attributes() {
        let dir = TempDir::new().unwrap();
        let shp = dir.path().join("parcels.shp");
        std::fs::write(&shp, shp_header(5)).unwrap();
        std::fs::write(
            dir.path().join("parcels.dbf"),
            dbase_header(&[("PARCEL_ID", b'N', 9, 0), ("OWNER", b'C', 50, 0)]),
        )
        .unwrap();

        let reader = ShapefileCatalogReader::new();
        let descriptor = reader.describe(&shp).unwrap();
        assert_eq!(descriptor.name, "parcels");
        assert_eq!(descriptor.kind, DatasetKind::Featureclass);

        let fields = reader.list_fields(&shp).unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Shape", "PARCEL_ID", "OWNER"]);
        assert_eq!(fields[0].field_type, "Geometry");
        assert_eq!(fields[0].length, None);
        assert_eq!(fields[2].length, Some(50));
    }

    #[test]
    fn null_shape_type_is_a_table() {
        let dir = TempDir::new().unwrap();
        let shp = dir.path().join("empty.shp");
        std::fs::write(&shp, shp_header(0)).unwrap();
        std::fs::write(dir.path().join("empty.dbf"), dbase_header(&[("ID", b'N', 9, 0)])).unwrap();

        let reader = ShapefileCatalogReader::new();
        assert_eq!(reader.describe(&shp).unwrap().kind, DatasetKind::Table);
        assert_eq!(reader.list_fields(&shp).unwrap().len(), 1);
    }

    #[test]
    fn uppercase_dbf_sidecar_is_found() {
        let dir = TempDir::new().unwrap();
        let shp = dir.path().join("roads.shp");
        std::fs::write(&shp, shp_header(3)).unwrap();
        std::fs::write(
            dir.path().join("roads.DBF"),
            dbase_header(&[("ROAD_NAME", b'C', 40, 0)]),
        )
        .unwrap();

        let fields = ShapefileCatalogReader::new().list_fields(&shp).unwrap();
        let names: Vec<&str> = fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["Shape", "ROAD_NAME"]);
        assert_eq!(fields[1].length, Some(40));
    }

    #[test]
    fn level_7_attribute_table_is_unsupported() {
        let dir = TempDir::new().unwrap();
        let dbf = dir.path().join("owners.dbf");
        let mut bytes = dbase_header(&[("OWNER", b'C', 50, 0)]);
        bytes[0] = 0x04;
        std::fs::write(&dbf, bytes).unwrap();

        let err = ShapefileCatalogReader::new().list_fields(&dbf).unwrap_err();
        assert!(matches!(err, CatalogError::Unsupported { .. }));
    }

    #[test]
    fn missing_dbf_is_reported() {
        let dir = TempDir::new().unwrap();
        let shp = dir.path().join("lonely.shp");
        std::fs::write(&shp, shp_header(1)).unwrap();

        let err = ShapefileCatalogReader::new().list_fields(&shp).unwrap_err();
        assert!(matches!(err, CatalogError::MissingComponent { .. }));
    }
}
