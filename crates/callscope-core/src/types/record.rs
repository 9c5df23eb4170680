//! The Canonical Call Record: one normalized, enriched call.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::{CallOutcome, DayOfWeek};

/// One call after normalization and enrichment.
///
/// `duration_minutes` is not stored; it is always derived from
/// `duration_seconds` through [`CallRecord::duration_minutes`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Zero-based index of the source row.
    pub row: usize,
    pub call_datetime: Option<NaiveDateTime>,
    pub date: Option<NaiveDate>,
    /// Hour of day, 0-23.
    pub hour: Option<u8>,
    pub day_of_week: Option<DayOfWeek>,
    pub agent_name: String,
    /// Uppercased, trimmed status text. `None` when the source cell was null.
    pub raw_status: Option<String>,
    pub call_outcome: CallOutcome,
    /// Non-negative talk time in seconds.
    pub duration_seconds: f64,
}

impl CallRecord {
    pub fn duration_minutes(&self) -> f64 {
        self.duration_seconds / 60.0
    }

    pub fn is_answered(&self) -> bool {
        self.call_outcome.is_answered()
    }
}
