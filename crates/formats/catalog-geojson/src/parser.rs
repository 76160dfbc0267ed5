//! `GeoJSON` parsing into property records.

use std::path::Path;

use geojson::{Feature, FeatureCollection, GeoJson, JsonObject};
use schemacheck_core_common::{CatalogError, CatalogResult};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// A parsed feature's properties and whether it carries a geometry.
#[derive(Debug, Clone)]
pub struct FeatureRecord {
    pub properties: JsonObject,
    pub has_geometry: bool,
}

/// Parse raw bytes into feature records.
///
/// The bytes are first read as a single `GeoJSON` document (feature
/// collection, feature or bare geometry); if that fails they are read as a
/// newline-delimited `GeoJSON` sequence. A leading UTF-8 byte order mark is
/// skipped.
///
/// # Errors
///
/// Returns a parse error combining both failures when neither reading works.
pub fn parse_geojson_bytes(
    bytes: &[u8],
    limit: Option<usize>,
    path: &Path,
) -> CatalogResult<Vec<FeatureRecord>> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    match GeoJson::from_reader(bytes) {
        Ok(geojson) => Ok(geojson_to_records(geojson, limit)),
        Err(primary_err) => parse_geojson_sequence(bytes, limit, path).map_err(|sequence_err| {
            CatalogError::parse(
                path,
                format!(
                    "not a GeoJSON document ({primary_err}); \
                     also failed to parse as GeoJSON sequence: {sequence_err}"
                ),
            )
        }),
    }
}

fn geojson_to_records(geojson: GeoJson, limit: Option<usize>) -> Vec<FeatureRecord> {
    let mut records = match geojson {
        GeoJson::FeatureCollection(collection) => feature_collection_to_records(collection),
        GeoJson::Feature(feature) => vec![feature_to_record(feature)],
        GeoJson::Geometry(_) => vec![FeatureRecord {
            properties: JsonObject::new(),
            has_geometry: true,
        }],
    };

    if let Some(max) = limit
        && records.len() > max
    {
        records.truncate(max);
    }
    records
}

fn feature_collection_to_records(collection: FeatureCollection) -> Vec<FeatureRecord> {
    collection
        .features
        .into_iter()
        .map(feature_to_record)
        .collect()
}

fn feature_to_record(feature: Feature) -> FeatureRecord {
    FeatureRecord {
        has_geometry: feature.geometry.is_some(),
        properties: feature.properties.unwrap_or_default(),
    }
}

fn parse_geojson_sequence(
    bytes: &[u8],
    limit: Option<usize>,
    path: &Path,
) -> Result<Vec<FeatureRecord>, String> {
    let mut records = Vec::new();
    for (line_idx, raw_line) in bytes.split(|b| *b == b'\n').enumerate() {
        let line_number = line_idx + 1;
        let line = std::str::from_utf8(raw_line)
            .map_err(|err| format!("line {line_number} is not valid UTF-8: {err}"))?
            .trim()
            // RFC 8142 record separators
            .trim_start_matches('\u{1e}');

        if line.is_empty() {
            continue;
        }

        let geojson = line
            .parse::<GeoJson>()
            .map_err(|err| format!("line {line_number}: {err}"))?;

        records.append(&mut geojson_to_records(geojson, None));

        if let Some(max) = limit
            && records.len() >= max
        {
            records.truncate(max);
            break;
        }
    }

    if records.is_empty() {
        Err(format!("No GeoJSON features found in {}", path.display()))
    } else {
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str, limit: Option<usize>) -> CatalogResult<Vec<FeatureRecord>> {
        parse_geojson_bytes(text.as_bytes(), limit, Path::new("test.geojson"))
    }

    #[test]
    fn parse_feature_collection() {
        let records = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{"a":1}},
                {"type":"Feature","geometry":null,"properties":{"b":"x"}}
            ]}"#,
            None,
        )
        .unwrap();

        assert_eq!(records.len(), 2);
        assert!(records[0].has_geometry);
        assert!(!records[1].has_geometry);
        assert!(records[1].properties.contains_key("b"));
    }

    #[test]
    fn parse_feature_collection_with_limit() {
        let records = parse(
            r#"{"type":"FeatureCollection","features":[
                {"type":"Feature","geometry":null,"properties":{}},
                {"type":"Feature","geometry":null,"properties":{}},
                {"type":"Feature","geometry":null,"properties":{}}
            ]}"#,
            Some(2),
        )
        .unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn parse_single_geometry() {
        let records = parse(r#"{"type":"Point","coordinates":[1,2]}"#, None).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].has_geometry);
        assert!(records[0].properties.is_empty());
    }

    #[test]
    fn parse_single_feature_without_properties() {
        let records = parse(
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,2]},"properties":null}"#,
            None,
        )
        .unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].properties.is_empty());
    }

    #[test]
    fn parse_sequence_with_empty_lines() {
        let text = concat!(
            r#"{"type":"Feature","geometry":null,"properties":{"id":1}}"#,
            "\n\n",
            r#"{"type":"Feature","geometry":null,"properties":{"id":2}}"#,
            "\n"
        );
        let records = parse(text, None).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn parse_document_with_byte_order_mark() {
        let text = "\u{feff}{\"type\":\"FeatureCollection\",\"features\":[\
                    {\"type\":\"Feature\",\"geometry\":null,\"properties\":{\"id\":1}}]}";
        let records = parse(text, None).unwrap();
        assert_eq!(records.len(), 1);
        assert!(records[0].properties.contains_key("id"));
    }

    #[test]
    fn parse_sequence_with_byte_order_mark() {
        let text = "\u{feff}{\"type\":\"Feature\",\"geometry\":null,\"properties\":{}}\n\
                    {\"type\":\"Feature\",\"geometry\":null,\"properties\":{}}\n";
        assert_eq!(parse(text, None).unwrap().len(), 2);
    }

    #[test]
    fn parse_invalid_json_combines_errors() {
        let err = parse("{ not json", None).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("not a GeoJSON document"));
        assert!(message.contains("GeoJSON sequence"));
    }

    #[test]
    fn parse_empty_sequence_fails() {
        let err = parse("\n\n", None).unwrap_err();
        assert!(err.to_string().contains("No GeoJSON features found"));
    }
}
