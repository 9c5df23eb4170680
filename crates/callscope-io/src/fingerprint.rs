//! Dataset identity via xxh3.

use xxhash_rust::xxh3::Xxh3;

use callscope_core::types::{CellValue, RawTable};

const FIELD_SEP: u8 = 0x1f;
const ROW_SEP: u8 = 0x1e;

fn tag(cell: &CellValue) -> u8 {
    match cell {
        CellValue::Empty => 0,
        CellValue::Text(_) => 1,
        CellValue::Number(_) => 2,
        CellValue::Bool(_) => 3,
        CellValue::DateTime(_) => 4,
    }
}

/// xxh3 64-bit hash over the header and every cell (type tag + rendering).
/// Equal tables always share a fingerprint.
pub fn fingerprint(table: &RawTable) -> u64 {
    let mut hasher = Xxh3::new();
    for column in table.columns() {
        hasher.update(column.as_bytes());
        hasher.update(&[FIELD_SEP]);
    }
    hasher.update(&[ROW_SEP]);
    for row in table.rows() {
        for cell in row {
            hasher.update(&[tag(cell)]);
            match cell {
                CellValue::Number(v) => hasher.update(&v.to_bits().to_le_bytes()),
                other => hasher.update(other.to_string().as_bytes()),
            }
            hasher.update(&[FIELD_SEP]);
        }
        hasher.update(&[ROW_SEP]);
    }
    hasher.digest()
}
