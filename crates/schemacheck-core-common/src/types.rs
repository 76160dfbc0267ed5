//! Data types describing a dataset and its fields.

use std::fmt;

/// Whether a dataset carries geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatasetKind {
    /// Records carry geometry in addition to attributes.
    Featureclass,
    /// Attribute-only dataset.
    Table,
}

impl DatasetKind {
    /// Classifies a dataset from whether it has geometry.
    #[must_use]
    pub fn from_has_geometry(has_geometry: bool) -> Self {
        if has_geometry {
            Self::Featureclass
        } else {
            Self::Table
        }
    }

    /// Returns the string representation of this kind.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Featureclass => "Featureclass",
            Self::Table => "Table",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name and kind of a dataset, as reported by its reader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetDescriptor {
    /// Base name of the dataset
    pub name: String,
    /// Feature class or table
    pub kind: DatasetKind,
}

/// Metadata of a single field.
///
/// Attributes that do not apply to a field's type are `None`, which is
/// distinct from any real value such as `Some(0)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name
    pub name: String,
    /// Field type tag (e.g., "Integer", "String", "Double")
    pub field_type: String,
    /// Storage length
    pub length: Option<i64>,
    /// Numeric precision
    pub precision: Option<i64>,
    /// Numeric scale
    pub scale: Option<i64>,
    /// Attribute domain name
    pub domain: Option<String>,
}

impl FieldDescriptor {
    /// Creates a field with the given name and type and no other attributes.
    #[must_use]
    pub fn new(name: impl Into<String>, field_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            field_type: field_type.into(),
            length: None,
            precision: None,
            scale: None,
            domain: None,
        }
    }

    /// Sets the storage length.
    #[must_use]
    pub fn with_length(mut self, length: i64) -> Self {
        self.length = Some(length);
        self
    }

    /// Sets the numeric precision and scale.
    #[must_use]
    pub fn with_precision(mut self, precision: i64, scale: i64) -> Self {
        self.precision = Some(precision);
        self.scale = Some(scale);
        self
    }

    /// Sets the attribute domain.
    #[must_use]
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}
