//! The data-access seam between the comparison core and the format readers.

use std::path::Path;

use crate::error::CatalogResult;
use crate::types::{DatasetDescriptor, FieldDescriptor};

/// Trait for introspecting a dataset of one format.
///
/// Implementations never write to the dataset. Both operations read the
/// dataset independently, so a reader holds no per-dataset state.
pub trait CatalogReader {
    /// Classifies the dataset as a feature class or a table and returns its base name.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be opened or its header cannot be parsed.
    fn describe(&self, path: &Path) -> CatalogResult<DatasetDescriptor>;

    /// Lists the dataset's fields in the order the format stores them.
    ///
    /// # Errors
    ///
    /// Returns an error if the dataset cannot be opened or its field catalog cannot be parsed.
    fn list_fields(&self, path: &Path) -> CatalogResult<Vec<FieldDescriptor>>;
}

/// Returns the base name of a dataset reference: its file stem.
///
/// Trailing separators are ignored so directory datasets such as `roads.gdb/`
/// still yield a name.
#[must_use]
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}
