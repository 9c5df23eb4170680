//! Upload loader: turns a `.csv`/`.txt` file or one spreadsheet sheet into a
//! [`RawTable`]. Load errors are fatal; no partial table is returned.

mod delimited;
pub mod format;
mod spreadsheet;

pub use format::SourceFormat;

use std::path::Path;
use std::time::Instant;

use tracing::{info, instrument, Span};

use callscope_core::config::IngestConfig;
use callscope_core::errors::LoadError;
use callscope_core::tracing::metrics;
use callscope_core::types::RawTable;

/// Reader settings resolved from configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub sheet_name: String,
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self::from(&IngestConfig::default())
    }
}

impl From<&IngestConfig> for LoadOptions {
    fn from(config: &IngestConfig) -> Self {
        Self {
            sheet_name: config.effective_sheet_name().to_string(),
            delimiter: config.effective_delimiter(),
        }
    }
}

/// Load `path` into a raw table.
///
/// Fails on an unsupported extension, an unreadable file, a missing sheet,
/// or a file without data rows.
#[instrument(skip_all, fields(path = %path.display(), row_count, column_count, duration_ms))]
pub fn load_table(path: &Path, options: &LoadOptions) -> Result<RawTable, LoadError> {
    let start = Instant::now();
    let format = SourceFormat::from_path(path)?;
    let table = match format {
        SourceFormat::Delimited => delimited::read_delimited(path, options.delimiter)?,
        SourceFormat::Spreadsheet => spreadsheet::read_sheet(path, &options.sheet_name)?,
    };

    if table.is_empty() {
        return Err(LoadError::EmptyDataset {
            path: path.display().to_string(),
        });
    }

    let span = Span::current();
    span.record(metrics::ROW_COUNT, table.row_count());
    span.record(metrics::COLUMN_COUNT, table.column_count());
    span.record(metrics::DURATION_MS, start.elapsed().as_millis() as u64);
    info!(%format, rows = table.row_count(), columns = table.column_count(), "loaded table");
    Ok(table)
}
