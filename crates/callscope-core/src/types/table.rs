//! Raw tabular data as supplied by the user's file. No fixed schema.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

static EMPTY_CELL: CellValue = CellValue::Empty;

/// A single cell of a raw upload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CellValue {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    DateTime(NaiveDateTime),
}

impl CellValue {
    /// Infer a cell from delimited text: blank → `Empty`, numeric → `Number`,
    /// anything else stays text.
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Self::Empty;
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Self::Number(v),
            _ => Self::Text(raw.to_string()),
        }
    }

    /// True for `Empty` and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Text rendering of a non-blank cell.
    pub fn as_text(&self) -> Option<String> {
        if self.is_blank() {
            None
        } else {
            Some(self.to_string())
        }
    }

    /// Numeric coercion. Non-numeric and non-finite values yield `None`.
    pub fn as_number(&self) -> Option<f64> {
        let v = match self {
            Self::Number(v) => *v,
            Self::Text(s) => s.trim().parse::<f64>().ok()?,
            _ => return None,
        };
        v.is_finite().then_some(v)
    }

    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => Ok(()),
            Self::Text(s) => f.write_str(s),
            Self::Number(v) => write!(f, "{v}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
        }
    }
}

/// Ordered column names plus rows of cells. Every row has exactly
/// `columns.len()` cells.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawTable {
    columns: Vec<String>,
    rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Build a table from string cells, inferring each cell's type.
    pub fn from_strings<S: AsRef<str>>(columns: &[S], rows: &[Vec<S>]) -> Self {
        let mut table = Self::new(columns.iter().map(|c| c.as_ref().to_string()).collect());
        for row in rows {
            table.push_row(row.iter().map(|c| CellValue::infer(c.as_ref())).collect());
        }
        table
    }

    /// Append a row, padding short rows with `Empty` and truncating long ones.
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.columns.len(), CellValue::Empty);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Exact-name column lookup.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cell at (row, column). Out-of-range positions read as `Empty`.
    pub fn cell(&self, row: usize, column: usize) -> &CellValue {
        self.rows
            .get(row)
            .and_then(|r| r.get(column))
            .unwrap_or(&EMPTY_CELL)
    }

    /// All cells of one column, top to bottom.
    pub fn column_cells(&self, column: usize) -> impl Iterator<Item = &CellValue> + '_ {
        (0..self.rows.len()).map(move |r| self.cell(r, column))
    }

    /// Keep only the rows at the given indices, in the given order.
    pub fn select_rows(&self, indices: &[usize]) -> Self {
        let rows = indices
            .iter()
            .filter_map(|&i| self.rows.get(i).cloned())
            .collect();
        Self {
            columns: self.columns.clone(),
            rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_cells() {
        assert_eq!(CellValue::infer("  "), CellValue::Empty);
        assert_eq!(CellValue::infer("12.5"), CellValue::Number(12.5));
        assert_eq!(CellValue::infer("ANSWERED"), CellValue::Text("ANSWERED".into()));
        assert_eq!(CellValue::infer("NaN"), CellValue::Text("NaN".into()));
    }

    #[test]
    fn numeric_coercion_is_lenient() {
        assert_eq!(CellValue::Text(" 42 ".into()).as_number(), Some(42.0));
        assert_eq!(CellValue::Text("n/a".into()).as_number(), None);
        assert_eq!(CellValue::Bool(true).as_number(), None);
        assert_eq!(CellValue::Number(f64::INFINITY).as_number(), None);
    }

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(CellValue::Number(3.0).to_string(), "3");
        assert_eq!(CellValue::Number(2.5).to_string(), "2.5");
    }

    #[test]
    fn rows_are_padded_to_width() {
        let mut t = RawTable::new(vec!["a".into(), "b".into()]);
        t.push_row(vec![CellValue::Number(1.0)]);
        assert_eq!(t.cell(0, 1), &CellValue::Empty);
        assert_eq!(t.cell(5, 5), &CellValue::Empty);
    }
}
