//! Shapefile main-file (`.shp`) header parsing.

use std::io::Read;
use std::path::Path;

use schemacheck_core_common::{CatalogError, CatalogResult};

const MAIN_HEADER_LEN: usize = 100;
const FILE_CODE: i32 = 9994;

/// The shape type declared in a `.shp` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeType(pub i32);

impl ShapeType {
    /// Returns `true` for the null shape type, which carries no geometry.
    #[must_use]
    pub fn is_null(self) -> bool {
        self.0 == 0
    }

    /// Human readable name of the shape type.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self.0 {
            0 => "Null",
            1 => "Point",
            3 => "Polyline",
            5 => "Polygon",
            8 => "MultiPoint",
            11 => "PointZ",
            13 => "PolylineZ",
            15 => "PolygonZ",
            18 => "MultiPointZ",
            21 => "PointM",
            23 => "PolylineM",
            25 => "PolygonM",
            28 => "MultiPointM",
            31 => "MultiPatch",
            _ => "Unknown",
        }
    }
}

/// Read the shape type from a `.shp` main-file header.
///
/// # Errors
///
/// Returns an error if the header is truncated or the file code is not 9994.
pub fn read_shape_type<R: Read>(mut input: R, path: &Path) -> CatalogResult<ShapeType> {
    let mut header = [0_u8; MAIN_HEADER_LEN];
    input
        .read_exact(&mut header)
        .map_err(|err| CatalogError::parse(path, format!("truncated shapefile header: {err}")))?;

    // The file code is big-endian, the shape type little-endian.
    let file_code = i32::from_be_bytes([header[0], header[1], header[2], header[3]]);
    if file_code != FILE_CODE {
        return Err(CatalogError::parse(
            path,
            format!("unexpected shapefile file code {file_code}"),
        ));
    }

    let shape_type = i32::from_le_bytes([header[32], header[33], header[34], header[35]]);
    Ok(ShapeType(shape_type))
}
