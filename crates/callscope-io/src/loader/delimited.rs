//! Delimited-text reader.

use std::path::Path;

use callscope_core::errors::LoadError;
use callscope_core::types::{CellValue, RawTable};

fn map_csv_error(path: &Path, e: csv::Error) -> LoadError {
    let path = path.display().to_string();
    if e.is_io_error() {
        LoadError::Io { path, message: e.to_string() }
    } else {
        LoadError::Malformed { path, message: e.to_string() }
    }
}

/// Read a delimited file. The first record is the header; ragged rows are
/// padded or truncated to the header width. Invalid UTF-8 is replaced, not fatal.
pub(crate) fn read_delimited(path: &Path, delimiter: u8) -> Result<RawTable, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .flexible(true)
        .has_headers(true)
        .from_path(path)
        .map_err(|e| map_csv_error(path, e))?;

    let columns: Vec<String> = reader
        .byte_headers()
        .map_err(|e| map_csv_error(path, e))?
        .iter()
        .map(|h| String::from_utf8_lossy(h).trim().to_string())
        .collect();
    let mut table = RawTable::new(columns);

    for record in reader.byte_records() {
        let record = record.map_err(|e| map_csv_error(path, e))?;
        table.push_row(
            record
                .iter()
                .map(|field| CellValue::infer(&String::from_utf8_lossy(field)))
                .collect(),
        );
    }
    Ok(table)
}
