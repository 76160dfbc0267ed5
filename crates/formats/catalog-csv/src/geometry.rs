//! Geometry column detection for CSV headers.

const WKT_COLUMNS: &[&str] = &["wkt", "geometry", "geom", "the_geom", "shape"];

const COORDINATE_PAIRS: &[(&str, &str)] = &[
    ("x", "y"),
    ("lon", "lat"),
    ("lng", "lat"),
    ("longitude", "latitude"),
];

/// Where a CSV file keeps its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeometrySource {
    /// A column of Well-Known Text
    Wkt {
        /// Index of the WKT column
        column: usize,
    },
    /// A pair of numeric coordinate columns
    Coordinates,
}

/// Find the geometry source named by a CSV header, if any.
///
/// Column names are matched case-insensitively. A WKT column takes precedence
/// over coordinate pairs.
#[must_use]
pub fn detect_geometry(headers: &[String]) -> Option<GeometrySource> {
    let position = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));

    if let Some(column) = WKT_COLUMNS.iter().find_map(|name| position(name)) {
        return Some(GeometrySource::Wkt { column });
    }

    COORDINATE_PAIRS
        .iter()
        .any(|(x, y)| position(x).is_some() && position(y).is_some())
        .then_some(GeometrySource::Coordinates)
}
