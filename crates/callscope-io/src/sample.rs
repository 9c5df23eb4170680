//! Sample-dataset extraction: keep rows whose first column starts with an
//! ISO date and draw a reproducible subset.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{info, instrument};

use callscope_analysis::report::Tabular;
use callscope_core::constants::{DEFAULT_SAMPLE_ROWS, DEFAULT_SAMPLE_SEED};
use callscope_core::errors::ExportError;
use callscope_core::types::RawTable;

use crate::export::write_report_to;

static ISO_DATE_PREFIX: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}").ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleOptions {
    pub rows: usize,
    pub seed: u64,
}

impl Default for SampleOptions {
    fn default() -> Self {
        Self {
            rows: DEFAULT_SAMPLE_ROWS,
            seed: DEFAULT_SAMPLE_SEED,
        }
    }
}

/// Deterministic xorshift64 generator.
struct SampleRng {
    state: u64,
}

impl SampleRng {
    fn new(seed: u64) -> Self {
        Self {
            state: if seed == 0 { 1 } else { seed },
        }
    }

    fn next_u64(&mut self) -> u64 {
        self.state ^= self.state << 13;
        self.state ^= self.state >> 7;
        self.state ^= self.state << 17;
        self.state
    }

    /// Uniform-ish index in `0..bound`. `bound` must be non-zero.
    fn below(&mut self, bound: usize) -> usize {
        (self.next_u64() % bound as u64) as usize
    }
}

/// Rows whose first cell renders as `YYYY-MM-DD…`, then up to `options.rows`
/// of them chosen by a seeded partial shuffle. Selected rows keep source order.
#[instrument(skip_all, fields(row_count = table.row_count(), rows = options.rows, seed = options.seed))]
pub fn extract_sample(table: &RawTable, options: &SampleOptions) -> RawTable {
    let Some(re) = ISO_DATE_PREFIX.as_ref() else {
        return table.select_rows(&[]);
    };
    let mut candidates: Vec<usize> = (0..table.row_count())
        .filter(|&r| re.is_match(&table.cell(r, 0).to_string()))
        .collect();

    if candidates.len() > options.rows {
        let mut rng = SampleRng::new(options.seed);
        for i in 0..options.rows {
            let j = i + rng.below(candidates.len() - i);
            candidates.swap(i, j);
        }
        candidates.truncate(options.rows);
        candidates.sort_unstable();
    }

    info!(kept = candidates.len(), "extracted sample");
    table.select_rows(&candidates)
}

/// A raw table viewed as an exportable report.
pub struct RawTableReport<'a>(pub &'a RawTable);

impl Tabular for RawTableReport<'_> {
    fn name(&self) -> &'static str {
        "sample_data"
    }

    fn headers(&self) -> Vec<String> {
        self.0.columns().to_vec()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.0
            .rows()
            .iter()
            .map(|row| row.iter().map(|c| c.to_string()).collect())
            .collect()
    }
}

/// Write a sample table as CSV.
pub fn write_sample(table: &RawTable, path: &Path) -> Result<(), ExportError> {
    write_report_to(&RawTableReport(table), path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dated(n: usize) -> RawTable {
        let rows: Vec<Vec<String>> = (0..n)
            .map(|i| vec![format!("2024-01-{:02} 10:00", i % 28 + 1), format!("{i}")])
            .collect();
        RawTable::from_strings(&["when".to_string(), "id".to_string()], &rows)
    }

    #[test]
    fn drops_rows_without_iso_date() {
        let table = RawTable::from_strings(
            &["when", "id"],
            &[
                vec!["2024-01-01", "1"],
                vec!["Total", "2"],
                vec!["01/02/2024", "3"],
                vec!["2024-01-03 08:00", "4"],
            ],
        );
        let sample = extract_sample(&table, &SampleOptions::default());
        assert_eq!(sample.row_count(), 2);
        assert_eq!(sample.cell(1, 1).to_string(), "4");
    }

    #[test]
    fn sampling_is_reproducible_and_bounded() {
        let table = dated(500);
        let options = SampleOptions { rows: 50, seed: 7 };
        let a = extract_sample(&table, &options);
        let b = extract_sample(&table, &options);
        assert_eq!(a.row_count(), 50);
        assert_eq!(a, b);

        let other = extract_sample(&table, &SampleOptions { rows: 50, seed: 8 });
        assert_ne!(a, other);
    }

    #[test]
    fn small_tables_are_kept_whole() {
        let table = dated(10);
        assert_eq!(extract_sample(&table, &SampleOptions::default()), table);
    }
}
