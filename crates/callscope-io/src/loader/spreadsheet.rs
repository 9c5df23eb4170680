//! Spreadsheet reader (xlsx, xlsm, xls, ods) via calamine.

use std::path::Path;

use calamine::{open_workbook_auto, Data, DataType, Reader};

use callscope_core::errors::LoadError;
use callscope_core::types::{CellValue, RawTable};

fn to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::infer(s),
        Data::Float(v) => CellValue::Number(*v),
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => data
            .as_datetime()
            .map(CellValue::DateTime)
            .unwrap_or_else(|| CellValue::Text(data.to_string())),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}

/// Read one sheet. The first row of the used range is the header.
pub(crate) fn read_sheet(path: &Path, sheet: &str) -> Result<RawTable, LoadError> {
    let display = path.display().to_string();
    let mut workbook = open_workbook_auto(path).map_err(|e| LoadError::Io {
        path: display.clone(),
        message: e.to_string(),
    })?;

    if !workbook.sheet_names().iter().any(|s| s == sheet) {
        return Err(LoadError::SheetNotFound {
            path: display,
            sheet: sheet.to_string(),
        });
    }
    let range = workbook
        .worksheet_range(sheet)
        .map_err(|e| LoadError::Malformed {
            path: display.clone(),
            message: e.to_string(),
        })?;

    let mut rows = range.rows();
    let Some(header) = rows.next() else {
        return Ok(RawTable::default());
    };
    let columns = header.iter().map(|h| h.to_string().trim().to_string()).collect();
    let mut table = RawTable::new(columns);
    for row in rows {
        table.push_row(row.iter().map(to_cell).collect());
    }
    Ok(table)
}
