//! Normalized table: canonical columns, one entry per source row.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use callscope_core::types::{RawTable, TalkTimeUnit};

use super::{datetime, lookup, seconds_column, text_column};

/// Canonical columns extracted from a raw table.
///
/// `call_datetime` is always present (null where unparseable). The other
/// columns are `None` when the source had no such column, which lets the
/// enricher apply its fallbacks; the mapped path always fills all of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedTable {
    /// Column count of the source table.
    pub source_columns: usize,
    pub call_datetime: Vec<Option<NaiveDateTime>>,
    pub agent: Option<Vec<Option<String>>>,
    pub status: Option<Vec<Option<String>>>,
    pub duration_seconds: Option<Vec<Option<f64>>>,
}

impl NormalizedTable {
    pub fn row_count(&self) -> usize {
        self.call_datetime.len()
    }

    /// True when every present column has one entry per row.
    pub fn is_aligned(&self) -> bool {
        let rows = self.row_count();
        self.agent.as_ref().map_or(true, |c| c.len() == rows)
            && self.status.as_ref().map_or(true, |c| c.len() == rows)
            && self.duration_seconds.as_ref().map_or(true, |c| c.len() == rows)
    }

    /// True when every optional canonical column is present.
    pub fn has_all_columns(&self) -> bool {
        self.agent.is_some() && self.status.is_some() && self.duration_seconds.is_some()
    }

    /// Rows whose timestamp could not be parsed.
    pub fn unparsed_timestamps(&self) -> usize {
        self.call_datetime.iter().filter(|d| d.is_none()).count()
    }

    /// Sample-data path: locate canonical columns by known header names.
    ///
    /// Timestamp: `call_date` + `Time` when both exist, else a combined
    /// `call_dateTime`/`Date` column, else null for every row. Talk time is
    /// read from `length_in_sec` (seconds) or a minutes column.
    #[instrument(skip_all, fields(row_count = table.row_count()))]
    pub fn from_known_headers(table: &RawTable) -> Self {
        let rows = table.row_count();

        let split = lookup::find_column(table, lookup::SPLIT_DATE_HEADERS)
            .zip(lookup::find_column(table, lookup::SPLIT_TIME_HEADERS));
        let call_datetime = if let Some((d, t)) = split {
            (0..rows)
                .map(|r| datetime::parse_split(table.cell(r, d), table.cell(r, t)))
                .collect()
        } else if let Some(c) = lookup::find_column(table, lookup::DATETIME_HEADERS) {
            table.column_cells(c).map(datetime::parse_cell).collect()
        } else {
            vec![None; rows]
        };

        let duration_seconds = lookup::find_column(table, lookup::DURATION_SECONDS_HEADERS)
            .map(|c| seconds_column(table, c, TalkTimeUnit::Seconds))
            .or_else(|| {
                lookup::find_column(table, lookup::DURATION_MINUTES_HEADERS)
                    .map(|c| seconds_column(table, c, TalkTimeUnit::Minutes))
            });

        let normalized = Self {
            source_columns: table.column_count(),
            call_datetime,
            agent: lookup::find_column(table, lookup::AGENT_HEADERS).map(|c| text_column(table, c)),
            status: lookup::find_column(table, lookup::STATUS_HEADERS)
                .map(|c| text_column(table, c)),
            duration_seconds,
        };
        debug!(
            has_agent = normalized.agent.is_some(),
            has_status = normalized.status.is_some(),
            has_duration = normalized.duration_seconds.is_some(),
            "normalized sample table"
        );
        normalized
    }
}
