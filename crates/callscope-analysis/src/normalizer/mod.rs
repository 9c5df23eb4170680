//! Schema normalizer: maps user column names onto the canonical call schema.
//!
//! Two entry points:
//! - [`normalize`] applies an explicit, user-confirmed [`ColumnMapping`]. No
//!   fuzzy matching and no default mapping: an incomplete mapping is refused.
//! - [`NormalizedTable::from_known_headers`] is the sample-data path, which
//!   locates canonical columns with a prioritized header lookup.

pub mod datetime;
pub mod lookup;
pub mod mapping;
pub mod types;

pub use mapping::{ColumnMapping, ResolvedMapping};
pub use types::NormalizedTable;

use callscope_core::errors::MappingError;
use callscope_core::tracing::metrics;
use callscope_core::types::{RawTable, TalkTimeUnit};
use tracing::{debug, field, instrument, Span};

/// Apply `mapping` to `table`.
///
/// Fails with [`MappingError::Incomplete`] listing every unmapped field, or
/// [`MappingError::UnknownColumn`] when a mapped column is not in the table.
/// Row-level defects never fail: unparseable timestamps and talk times become
/// null and the row is kept.
#[instrument(
    skip_all,
    fields(row_count = table.row_count(), unparsed_timestamps = field::Empty)
)]
pub fn normalize(
    table: &RawTable,
    mapping: &ColumnMapping,
) -> Result<NormalizedTable, MappingError> {
    let resolved = mapping.resolve(table)?;
    let rows = table.row_count();

    let call_datetime = (0..rows)
        .map(|r| {
            let date = table.cell(r, resolved.date);
            match resolved.time {
                Some(t) => datetime::parse_split(date, table.cell(r, t)),
                None => datetime::parse_cell(date),
            }
        })
        .collect();

    let normalized = NormalizedTable {
        source_columns: table.column_count(),
        call_datetime,
        agent: Some(text_column(table, resolved.agent)),
        status: Some(text_column(table, resolved.outcome)),
        duration_seconds: Some(seconds_column(table, resolved.talk_time, resolved.talk_time_unit)),
    };

    let unparsed = normalized.unparsed_timestamps();
    Span::current().record(metrics::UNPARSED_TIMESTAMPS, unparsed);
    debug!(rows, unparsed, "normalized mapped table");
    Ok(normalized)
}

/// Non-blank cell text, `None` otherwise.
pub(crate) fn text_column(table: &RawTable, column: usize) -> Vec<Option<String>> {
    table.column_cells(column).map(|c| c.as_text()).collect()
}

/// Numeric cells converted to seconds. Non-numeric cells become `None`.
pub(crate) fn seconds_column(
    table: &RawTable,
    column: usize,
    unit: TalkTimeUnit,
) -> Vec<Option<f64>> {
    let factor = unit.seconds_factor();
    table
        .column_cells(column)
        .map(|c| c.as_number().map(|v| v * factor))
        .collect()
}
