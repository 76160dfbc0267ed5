//! dBASE (`.dbf`) table header parsing.
//!
//! Only the header is read: a 32-byte table descriptor followed by one 32-byte
//! descriptor per field, terminated by `0x0D`. Records are never touched.

use std::io::Read;
use std::path::Path;

use schemacheck_core_common::{CatalogError, CatalogResult, FieldDescriptor, field_types};

const TABLE_HEADER_LEN: usize = 32;
const FIELD_DESCRIPTOR_LEN: usize = 32;
const HEADER_TERMINATOR: u8 = 0x0D;
const FIELD_NAME_LEN: usize = 11;
/// Low three bits of the version byte; level 7 tables use 48-byte descriptors.
const VERSION_MASK: u8 = 0x07;
const LEVEL_7: u8 = 0x04;

/// A field descriptor as stored in the dBASE header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbaseField {
    pub name: String,
    pub kind: u8,
    pub length: u8,
    pub decimal_count: u8,
}

impl DbaseField {
    /// Parse one 32-byte field descriptor.
    fn parse(raw: &[u8; FIELD_DESCRIPTOR_LEN]) -> Self {
        let name_bytes = &raw[..FIELD_NAME_LEN];
        let name_end = name_bytes
            .iter()
            .position(|b| *b == 0)
            .unwrap_or(FIELD_NAME_LEN);
        let name = String::from_utf8_lossy(&name_bytes[..name_end])
            .trim()
            .to_string();

        Self {
            name,
            kind: raw[11],
            length: raw[16],
            decimal_count: raw[17],
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self.kind, b'N' | b'F')
    }

    /// The field type tag ArcGIS reports for this descriptor.
    #[must_use]
    pub fn field_type(&self) -> &'static str {
        match self.kind {
            b'C' | b'L' => field_types::STRING,
            b'N' | b'F' if self.decimal_count == 0 => match self.length {
                0..=4 => field_types::SMALL_INTEGER,
                5..=9 => field_types::INTEGER,
                _ => field_types::DOUBLE,
            },
            b'N' | b'F' => {
                if self.length <= 6 {
                    field_types::SINGLE
                } else {
                    field_types::DOUBLE
                }
            },
            b'D' | b'T' | b'@' => field_types::DATE,
            b'I' => field_types::INTEGER,
            b'+' => field_types::OID,
            b'B' | b'O' => field_types::DOUBLE,
            b'M' | b'G' => field_types::BLOB,
            _ => field_types::STRING,
        }
    }

    /// Convert into a [`FieldDescriptor`]; precision and scale apply to numeric fields only.
    #[must_use]
    pub fn to_descriptor(&self) -> FieldDescriptor {
        let field = FieldDescriptor::new(self.name.clone(), self.field_type())
            .with_length(i64::from(self.length));
        if self.is_numeric() {
            field.with_precision(i64::from(self.length), i64::from(self.decimal_count))
        } else {
            field
        }
    }
}

/// Read the field descriptors of a dBASE table.
///
/// # Errors
///
/// Returns an error if the header is truncated or declares an impossible
/// length, or if the table is dBASE level 7, whose descriptor layout differs.
pub fn read_fields<R: Read>(mut input: R, path: &Path) -> CatalogResult<Vec<DbaseField>> {
    let mut table_header = [0_u8; TABLE_HEADER_LEN];
    input
        .read_exact(&mut table_header)
        .map_err(|err| CatalogError::parse(path, format!("truncated dBASE header: {err}")))?;

    let version = table_header[0];
    if version & VERSION_MASK == LEVEL_7 {
        return Err(CatalogError::Unsupported {
            path: path.to_path_buf(),
            reason: format!("dBASE level 7 table (version byte {version:#04x})"),
        });
    }

    let header_len = usize::from(u16::from_le_bytes([table_header[8], table_header[9]]));
    if header_len < TABLE_HEADER_LEN + 1 {
        return Err(CatalogError::parse(
            path,
            format!("dBASE header length {header_len} is too short"),
        ));
    }
    let max_fields = (header_len - TABLE_HEADER_LEN - 1) / FIELD_DESCRIPTOR_LEN;

    let mut fields = Vec::with_capacity(max_fields);
    loop {
        let mut first = [0_u8; 1];
        input.read_exact(&mut first).map_err(|err| {
            CatalogError::parse(path, format!("dBASE header is not terminated: {err}"))
        })?;
        if first[0] == HEADER_TERMINATOR {
            break;
        }
        if fields.len() == max_fields {
            return Err(CatalogError::parse(
                path,
                format!("dBASE header declares {header_len} bytes but has more fields"),
            ));
        }

        let mut raw = [0_u8; FIELD_DESCRIPTOR_LEN];
        raw[0] = first[0];
        input.read_exact(&mut raw[1..]).map_err(|err| {
            CatalogError::parse(
                path,
                format!("truncated descriptor for field {}: {err}", fields.len() + 1),
            )
        })?;
        fields.push(DbaseField::parse(&raw));
    }

    Ok(fields)
}
