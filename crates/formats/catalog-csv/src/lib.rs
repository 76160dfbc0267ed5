//! Field catalog reader for delimited text files.
//!
//! CSV carries no declared schema, so field types are inferred from a sample of
//! rows. A file is a feature class when its header names a WKT column or a
//! coordinate pair (see [`geometry::detect_geometry`]).

pub mod geometry;
pub mod infer;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use log::debug;
use schemacheck_core_common::io::base_name;
use schemacheck_core_common::{
    ArrowDataTypeExt, CatalogError, CatalogReader, CatalogResult, DatasetDescriptor, DatasetKind,
    FieldDescriptor, field_types,
};

use crate::geometry::{GeometrySource, detect_geometry};
use crate::infer::{CsvSample, infer_column_type, read_sample};

/// Options controlling how CSV files are read.
#[derive(Debug, Clone)]
pub struct CsvCatalogOptions {
    /// Field delimiter; files with a `.tsv` extension always use a tab
    pub delimiter: u8,
    /// Whether the first row holds column names
    pub has_header: bool,
    /// Maximum number of rows to read for type inference
    pub schema_infer_max_rec: Option<usize>,
}

impl Default for CsvCatalogOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            has_header: true,
            schema_infer_max_rec: Some(1000),
        }
    }
}

impl CsvCatalogOptions {
    /// Create default options
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the field delimiter
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Set whether the file has a header row
    #[must_use]
    pub fn with_has_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set maximum records for schema inference
    #[must_use]
    pub fn with_schema_infer_max_rec(mut self, max_rec: Option<usize>) -> Self {
        self.schema_infer_max_rec = max_rec;
        self
    }

    fn delimiter_for(&self, path: &Path) -> u8 {
        let is_tsv = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("tsv"));
        if is_tsv { b'\t' } else { self.delimiter }
    }
}

/// [`CatalogReader`] for CSV and TSV files.
#[derive(Debug, Clone, Default)]
pub struct CsvCatalogReader {
    options: CsvCatalogOptions,
}

impl CsvCatalogReader {
    #[must_use]
    pub fn new(options: CsvCatalogOptions) -> Self {
        Self { options }
    }

    fn sample(&self, path: &Path) -> CatalogResult<CsvSample> {
        let file = File::open(path).map_err(|err| CatalogError::io(path, err))?;
        let delimiter = self.options.delimiter_for(path);
        read_sample(BufReader::new(file), &self.options, delimiter, path)
    }
}

impl CatalogReader for CsvCatalogReader {
    fn describe(&self, path: &Path) -> CatalogResult<DatasetDescriptor> {
        let sample = self.sample(path)?;
        let geometry = detect_geometry(&sample.headers);
        debug!("CSV {} geometry source: {geometry:?}", path.display());

        Ok(DatasetDescriptor {
            name: base_name(path),
            kind: DatasetKind::from_has_geometry(geometry.is_some()),
        })
    }

    fn list_fields(&self, path: &Path) -> CatalogResult<Vec<FieldDescriptor>> {
        let sample = self.sample(path)?;
        let wkt_column = match detect_geometry(&sample.headers) {
            Some(GeometrySource::Wkt { column }) => Some(column),
            _ => None,
        };

        let fields = sample
            .headers
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                let field_type = if wkt_column == Some(idx) {
                    field_types::GEOMETRY
                } else {
                    infer_column_type(&sample.records, idx).field_type()
                };
                FieldDescriptor::new(name.clone(), field_type)
            })
            .collect::<Vec<_>>();

        debug!(
            "CSV {} has {} field(s) from {} sampled row(s)",
            path.display(),
            fields.len(),
            sample.records.len()
        );
        Ok(fields)
    }
}
