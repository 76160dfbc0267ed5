use std::fs;
use std::path::PathBuf;

use catalog_geojson::{GeoJsonCatalogOptions, GeoJsonCatalogReader};
use schemacheck_core_common::{CatalogReader, DatasetKind};
use tempfile::TempDir;

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("write fixture");
    path
}

const CITIES: &str = r#"{
  "type": "FeatureCollection",
  "features": [
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [-74.0060, 40.7128] },
      "properties": { "name": "New York", "population": 8336817, "area": 783.8 }
    },
    {
      "type": "Feature",
      "geometry": { "type": "Point", "coordinates": [-118.2437, 34.0522] },
      "properties": { "name": "Los Angeles", "population": 3979576, "area": 1302 }
    }
  ]
}"#;

#[test]
fn feature_collection_with_geometry_is_a_featureclass() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "cities.geojson", CITIES);

    let descriptor = GeoJsonCatalogReader::default().describe(&path).unwrap();
    assert_eq!(descriptor.name, "cities");
    assert_eq!(descriptor.kind, DatasetKind::Featureclass);
}

#[test]
fn properties_keep_document_order_and_geometry_trails() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "cities.geojson", CITIES);

    let fields = GeoJsonCatalogReader::default().list_fields(&path).unwrap();
    let summary: Vec<(&str, &str)> = fields
        .iter()
        .map(|f| (f.name.as_str(), f.field_type.as_str()))
        .collect();

    assert_eq!(
        summary,
        vec![
            ("name", "String"),
            ("population", "Integer"),
            ("area", "Double"),
            ("geometry", "Geometry"),
        ]
    );
    assert!(fields.iter().all(|f| f.length.is_none() && f.precision.is_none()));
}

#[test]
fn null_geometries_make_a_table() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "owners.geojson",
        r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","geometry":null,"properties":{"OWNER":"Ann","PARCEL":7}}
        ]}"#,
    );

    let reader = GeoJsonCatalogReader::new(
        GeoJsonCatalogOptions::default().with_geometry_column_name("SHAPE"),
    );
    assert_eq!(reader.describe(&path).unwrap().kind, DatasetKind::Table);

    let names: Vec<String> = reader
        .list_fields(&path)
        .unwrap()
        .into_iter()
        .map(|f| f.name)
        .collect();
    assert_eq!(names, vec!["OWNER", "PARCEL"]);
}

#[test]
fn geojson_sequence_is_supported() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(
        &dir,
        "stream.geojsonl",
        concat!(
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[0,0]},"properties":{"id":1}}"#,
            "\n",
            r#"{"type":"Feature","geometry":{"type":"Point","coordinates":[1,1]},"properties":{"id":2,"label":"b"}}"#,
            "\n"
        ),
    );

    let fields = GeoJsonCatalogReader::default().list_fields(&path).unwrap();
    assert_eq!(fields.len(), 3);
    assert_eq!(fields[1].name, "label");
}

#[test]
fn invalid_file_is_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "broken.geojson", "{ this is not json");

    let err = GeoJsonCatalogReader::default().describe(&path).unwrap_err();
    assert!(err.to_string().starts_with("Failed to parse"));
}
