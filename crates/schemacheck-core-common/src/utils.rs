//! Field type tags and the mapping from inferred Arrow types onto them.
//!
//! Readers for self-describing formats (CSV, GeoJSON) infer an Arrow
//! [`DataType`] per column; [`ArrowDataTypeExt`] turns that into the same
//! ArcGIS-style tags the dBASE reader reports, so schemas from different
//! formats compare on equal terms.

use arrow_schema::DataType;

/// Field type tags reported in [`FieldDescriptor::field_type`](crate::FieldDescriptor).
pub mod field_types {
    /// 16-bit integer
    pub const SMALL_INTEGER: &str = "SmallInteger";
    /// 32-bit integer
    pub const INTEGER: &str = "Integer";
    /// 64-bit integer
    pub const BIG_INTEGER: &str = "BigInteger";
    /// Single precision float
    pub const SINGLE: &str = "Single";
    /// Double precision float
    pub const DOUBLE: &str = "Double";
    /// Text
    pub const STRING: &str = "String";
    /// Date or timestamp
    pub const DATE: &str = "Date";
    /// Binary payload
    pub const BLOB: &str = "Blob";
    /// Geometry column
    pub const GEOMETRY: &str = "Geometry";
    /// Object identifier
    pub const OID: &str = "OID";
    /// Native boolean
    pub const BOOLEAN: &str = "Boolean";
}

/// Extension trait mapping Arrow [`DataType`]s onto field type tags.
///
/// # Examples
///
/// ```
/// use arrow_schema::DataType;
/// use schemacheck_core_common::ArrowDataTypeExt;
///
/// assert_eq!(DataType::Int32.field_type(), "Integer");
/// assert_eq!(DataType::Utf8.field_type(), "String");
/// ```
pub trait ArrowDataTypeExt {
    /// The field type tag for this data type.
    fn field_type(&self) -> &'static str;
}

impl ArrowDataTypeExt for DataType {
    fn field_type(&self) -> &'static str {
        match self {
            DataType::Boolean => field_types::BOOLEAN,
            DataType::Int8 | DataType::Int16 | DataType::UInt8 => field_types::SMALL_INTEGER,
            DataType::Int32 | DataType::UInt16 => field_types::INTEGER,
            DataType::Int64 | DataType::UInt32 | DataType::UInt64 => field_types::BIG_INTEGER,
            DataType::Float16 | DataType::Float32 => field_types::SINGLE,
            DataType::Float64 | DataType::Decimal128(_, _) | DataType::Decimal256(_, _) => {
                field_types::DOUBLE
            },
            DataType::Date32 | DataType::Date64 | DataType::Timestamp(_, _) => field_types::DATE,
            DataType::Binary | DataType::LargeBinary | DataType::FixedSizeBinary(_) => {
                field_types::BLOB
            },
            _ => field_types::STRING,
        }
    }
}
