//! Header reading and column type inference for CSV files.

use std::io::Read;
use std::path::Path;

use arrow_schema::DataType;
use schemacheck_core_common::{CatalogError, CatalogResult};

use crate::CsvCatalogOptions;

/// Column names and the rows sampled for type inference.
#[derive(Debug, Clone)]
pub struct CsvSample {
    pub headers: Vec<String>,
    pub records: Vec<csv::StringRecord>,
}

/// Read the header row and up to `schema_infer_max_rec` data rows.
///
/// Cells that are not valid UTF-8 (e.g. Latin-1 exports) are decoded with
/// replacement characters rather than skipped.
///
/// Without a header, columns are named `column_0`, `column_1`, ... from the
/// width of the first row.
///
/// # Errors
///
/// Returns an error if the header or a sampled row cannot be read, or the file
/// is empty.
pub fn read_sample<R: Read>(
    input: R,
    options: &CsvCatalogOptions,
    delimiter: u8,
    path: &Path,
) -> CatalogResult<CsvSample> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(options.has_header)
        .flexible(true)
        .from_reader(input);

    let row_error = |row: usize, err: csv::Error| {
        CatalogError::parse(path, format!("Failed to read row {row}: {err}"))
    };
    let declared_headers: Option<Vec<String>> = if options.has_header {
        let headers = reader
            .byte_headers()
            .map_err(|e| CatalogError::parse(path, format!("Failed to read headers: {e}")))?;
        if headers.is_empty() {
            return Err(CatalogError::parse(
                path,
                "Cannot infer schema from empty file",
            ));
        }
        Some(
            headers
                .iter()
                .map(|h| String::from_utf8_lossy(h).trim().to_string())
                .collect(),
        )
    } else {
        None
    };

    let mut rows = reader.byte_records();
    let mut first_data_record: Option<csv::StringRecord> = None;

    let headers = match declared_headers {
        Some(headers) => headers,
        None => {
            let Some(result) = rows.next() else {
                return Err(CatalogError::parse(
                    path,
                    "Cannot infer schema from empty file",
                ));
            };
            let record = result.map_err(|err| row_error(1, err))?;
            let column_names = (0..record.len()).map(|i| format!("column_{i}")).collect();
            first_data_record = Some(csv::StringRecord::from_byte_record_lossy(record));
            column_names
        },
    };

    let max_records = options.schema_infer_max_rec.unwrap_or(1000);
    let mut records: Vec<csv::StringRecord> = Vec::new();

    if let Some(record) = first_data_record.filter(|_| max_records > 0) {
        records.push(record);
    }

    // Non-UTF-8 cells are decoded lossily.
    for result in rows {
        if records.len() >= max_records {
            break;
        }
        let record = result.map_err(|err| row_error(records.len() + 1, err))?;
        records.push(csv::StringRecord::from_byte_record_lossy(record));
    }

    Ok(CsvSample { headers, records })
}

/// Infer the data type of a column from the sampled rows.
///
/// Empty cells are ignored. A column with no values, or with any value that is
/// neither boolean nor numeric, is text. Integers that all fit in 32 bits are
/// `Int32`, otherwise `Int64`; any decimal value makes the column `Float64`.
#[must_use]
pub fn infer_column_type(records: &[csv::StringRecord], col_idx: usize) -> DataType {
    let mut has_float = false;
    let mut has_int = false;
    let mut has_wide_int = false;
    let mut has_bool = false;
    let mut total_values = 0;

    for record in records {
        let Some(value) = record.get(col_idx) else {
            continue;
        };
        let value = value.trim();
        if value.is_empty() {
            continue;
        }

        total_values += 1;

        if value.eq_ignore_ascii_case("true") || value.eq_ignore_ascii_case("false") {
            has_bool = true;
        } else if let Ok(int) = value.parse::<i64>() {
            has_int = true;
            if i32::try_from(int).is_err() {
                has_wide_int = true;
            }
        } else if value.parse::<f64>().is_ok() {
            has_float = true;
        } else {
            return DataType::Utf8;
        }
    }

    if total_values == 0 {
        return DataType::Utf8;
    }

    match (has_bool, has_int || has_float) {
        (true, false) => DataType::Boolean,
        (true, true) => DataType::Utf8,
        _ if has_float => DataType::Float64,
        _ if has_wide_int => DataType::Int64,
        _ => DataType::Int32,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(rows: &[&[&str]]) -> Vec<csv::StringRecord> {
        rows.iter().map(|row| csv::StringRecord::from(row.to_vec())).collect()
    }

    #[test]
    fn test_read_sample_with_header() {
        let data = b"name,age,city\nAlice,30,NYC\nBob,25,LA";
        let sample = read_sample(
            &data[..],
            &CsvCatalogOptions::default(),
            b',',
            Path::new("people.csv"),
        )
        .unwrap();

        assert_eq!(sample.headers, vec!["name", "age", "city"]);
        assert_eq!(sample.records.len(), 2);
    }

    #[test]
    fn test_read_sample_without_header() {
        let data = b"1,2\n3,4\n";
        let options = CsvCatalogOptions::default().with_has_header(false);
        let sample = read_sample(&data[..], &options, b',', Path::new("raw.csv")).unwrap();

        assert_eq!(sample.headers, vec!["column_0", "column_1"]);
        assert_eq!(sample.records.len(), 2);
    }

    #[test]
    fn test_read_sample_respects_limit() {
        let data = b"id\n1\n2\n3\n4\n";
        let options = CsvCatalogOptions::default().with_schema_infer_max_rec(Some(2));
        let sample = read_sample(&data[..], &options, b',', Path::new("ids.csv")).unwrap();
        assert_eq!(sample.records.len(), 2);
    }

    #[test]
    fn test_read_sample_empty_file() {
        let result = read_sample(
            &b""[..],
            &CsvCatalogOptions::default(),
            b',',
            Path::new("empty.csv"),
        );
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty file"));
    }

    #[test]
    fn test_read_sample_keeps_non_utf8_rows() {
        let data = b"ID,NAME\n1,Caf\xE9\n2,Cr\xE8me\n";
        let sample = read_sample(
            &data[..],
            &CsvCatalogOptions::default(),
            b',',
            Path::new("latin1.csv"),
        )
        .unwrap();

        assert_eq!(sample.records.len(), 2);
        assert_eq!(infer_column_type(&sample.records, 0), DataType::Int32);
        assert_eq!(infer_column_type(&sample.records, 1), DataType::Utf8);
        assert!(sample.records[0][1].starts_with("Caf"));
    }

    #[test]
    fn test_read_sample_non_utf8_header() {
        let data = b"ID,R\xC9GION\n1,x\n";
        let sample = read_sample(
            &data[..],
            &CsvCatalogOptions::default(),
            b',',
            Path::new("latin1.csv"),
        )
        .unwrap();
        assert_eq!(sample.headers.len(), 2);
        assert!(sample.headers[1].starts_with('R'));
    }

    #[test]
    fn test_infer_integer_widths() {
        let rows = records(&[&["1", "3000000000"], &["42", "7"]]);
        assert_eq!(infer_column_type(&rows, 0), DataType::Int32);
        assert_eq!(infer_column_type(&rows, 1), DataType::Int64);
    }

    #[test]
    fn test_infer_float_wins_over_int() {
        let rows = records(&[&["1"], &["2.5"]]);
        assert_eq!(infer_column_type(&rows, 0), DataType::Float64);
    }

    #[test]
    fn test_infer_boolean_and_text() {
        let rows = records(&[&["true", "1", "abc"], &["FALSE", "x", ""]]);
        assert_eq!(infer_column_type(&rows, 0), DataType::Boolean);
        assert_eq!(infer_column_type(&rows, 1), DataType::Utf8);
        assert_eq!(infer_column_type(&rows, 2), DataType::Utf8);
    }

    #[test]
    fn test_infer_all_empty_is_text() {
        let rows = records(&[&[""], &["  "]]);
        assert_eq!(infer_column_type(&rows, 0), DataType::Utf8);
        assert_eq!(infer_column_type(&[], 0), DataType::Utf8);
    }
}
