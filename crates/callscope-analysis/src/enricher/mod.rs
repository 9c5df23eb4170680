//! Record enricher: derives calendar fields, the call outcome, and agent
//! fallbacks for every normalized row.

pub mod classify;

pub use classify::{classify, clean_status};

use chrono::Timelike;
use tracing::{info, instrument, Span};

use callscope_core::config::AnalysisConfig;
use callscope_core::constants::{DEFAULT_PLACEHOLDER_AGENT_POOL, UNKNOWN_AGENT};
use callscope_core::errors::EnrichError;
use callscope_core::tracing::metrics;
use callscope_core::types::{CallRecord, DayOfWeek};

use crate::normalizer::NormalizedTable;

/// Agent fallbacks applied during enrichment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichOptions {
    /// Rows cycle through `Agent_1..=Agent_{pool}` when there is no agent column.
    pub placeholder_pool: usize,
    /// Label for null or blank agent cells.
    pub unknown_agent: String,
}

impl Default for EnrichOptions {
    fn default() -> Self {
        Self {
            placeholder_pool: DEFAULT_PLACEHOLDER_AGENT_POOL,
            unknown_agent: UNKNOWN_AGENT.to_string(),
        }
    }
}

impl From<&AnalysisConfig> for EnrichOptions {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            placeholder_pool: config.effective_placeholder_agent_pool().max(1),
            unknown_agent: config.effective_unknown_agent_label().to_string(),
        }
    }
}

/// Enrich with default options.
pub fn enrich(table: &NormalizedTable) -> Result<Vec<CallRecord>, EnrichError> {
    enrich_with(table, &EnrichOptions::default())
}

/// Turn every normalized row into a [`CallRecord`].
///
/// Never fails on bad values. Fails only when the table has no rows, no
/// columns at all, or columns of differing lengths.
#[instrument(skip_all, fields(row_count = table.row_count(), record_count = tracing::field::Empty))]
pub fn enrich_with(
    table: &NormalizedTable,
    options: &EnrichOptions,
) -> Result<Vec<CallRecord>, EnrichError> {
    if table.source_columns == 0 || !table.is_aligned() {
        return Err(EnrichError::NoRecordStructure);
    }
    if table.row_count() == 0 {
        return Err(EnrichError::EmptyDataset);
    }
    let pool = options.placeholder_pool.max(1);

    let records: Vec<CallRecord> = table
        .call_datetime
        .iter()
        .enumerate()
        .map(|(row, &call_datetime)| {
            let duration = table
                .duration_seconds
                .as_ref()
                .and_then(|d| d[row])
                .filter(|v| v.is_finite() && *v >= 0.0)
                .unwrap_or(0.0);

            let raw_status = match (&table.status, &table.duration_seconds) {
                (Some(status), _) => status[row].as_deref().and_then(clean_status),
                (None, Some(_)) => Some(if duration > 0.0 { "ANSWERED" } else { "DROPPED" }.to_string()),
                (None, None) => Some("ANSWERED".to_string()),
            };

            let agent_name = match &table.agent {
                Some(agents) => agents[row]
                    .as_deref()
                    .map(str::trim)
                    .filter(|a| !a.is_empty())
                    .map(str::to_string)
                    .unwrap_or_else(|| options.unknown_agent.clone()),
                None => format!("Agent_{}", row % pool + 1),
            };

            CallRecord {
                row,
                call_datetime,
                date: call_datetime.map(|dt| dt.date()),
                hour: call_datetime.map(|dt| dt.hour() as u8),
                day_of_week: call_datetime.map(|dt| DayOfWeek::from_date(dt.date())),
                agent_name,
                call_outcome: classify(raw_status.as_deref()),
                raw_status,
                duration_seconds: duration,
            }
        })
        .collect();

    Span::current().record(metrics::RECORD_COUNT, records.len());
    info!("enriched call records");
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use callscope_core::types::CallOutcome;
    use chrono::NaiveDate;

    fn table(rows: usize) -> NormalizedTable {
        NormalizedTable {
            source_columns: 1,
            call_datetime: vec![None; rows],
            agent: None,
            status: None,
            duration_seconds: None,
        }
    }

    #[test]
    fn derives_calendar_fields() {
        let mut t = table(1);
        // 2024-01-07 is a Sunday.
        t.call_datetime[0] = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap().and_hms_opt(23, 59, 0);
        let r = &enrich(&t).unwrap()[0];
        assert_eq!(r.hour, Some(23));
        assert_eq!(r.day_of_week, Some(DayOfWeek::Sunday));
        assert_eq!(r.date, NaiveDate::from_ymd_opt(2024, 1, 7));
    }

    #[test]
    fn status_derived_from_duration_when_absent() {
        let mut t = table(3);
        t.duration_seconds = Some(vec![Some(30.0), Some(0.0), None]);
        let out = enrich(&t).unwrap();
        assert_eq!(out[0].raw_status.as_deref(), Some("ANSWERED"));
        assert_eq!(out[1].call_outcome, CallOutcome::Dropped);
        assert_eq!(out[2].call_outcome, CallOutcome::Dropped);
    }

    #[test]
    fn no_status_no_duration_means_answered() {
        let out = enrich(&table(2)).unwrap();
        assert!(out.iter().all(|r| r.call_outcome == CallOutcome::Answered));
        assert!(out.iter().all(|r| r.duration_seconds == 0.0));
    }

    #[test]
    fn null_status_is_unknown() {
        let mut t = table(2);
        t.status = Some(vec![None, Some(" busy ".into())]);
        let out = enrich(&t).unwrap();
        assert_eq!(out[0].call_outcome, CallOutcome::Unknown);
        assert_eq!(out[0].raw_status, None);
        assert_eq!(out[1].raw_status.as_deref(), Some("BUSY"));
    }

    #[test]
    fn negative_and_invalid_durations_become_zero() {
        let mut t = table(3);
        t.duration_seconds = Some(vec![Some(-5.0), Some(f64::NAN), Some(120.0)]);
        let out = enrich(&t).unwrap();
        assert_eq!(out[0].duration_seconds, 0.0);
        assert_eq!(out[1].duration_seconds, 0.0);
        assert_eq!(out[2].duration_minutes(), 2.0);
    }

    #[test]
    fn agent_fallbacks() {
        let mut t = table(12);
        let out = enrich(&t).unwrap();
        assert_eq!(out[0].agent_name, "Agent_1");
        assert_eq!(out[9].agent_name, "Agent_10");
        assert_eq!(out[11].agent_name, "Agent_2");

        t.agent = Some(vec![Some("  ".into()); 12]);
        let out = enrich(&t).unwrap();
        assert_eq!(out[0].agent_name, "Unknown Agent");
    }

    #[test]
    fn fatal_conditions() {
        assert!(matches!(enrich(&table(0)), Err(EnrichError::EmptyDataset)));
        let mut t = table(3);
        t.source_columns = 0;
        assert!(matches!(enrich(&t), Err(EnrichError::NoRecordStructure)));
    }

    #[test]
    fn misaligned_columns_are_rejected() {
        let mut t = table(3);
        t.agent = Some(vec![Some("A".into())]);
        assert!(matches!(enrich(&t), Err(EnrichError::NoRecordStructure)));

        let mut t = table(2);
        t.status = Some(vec![None; 3]);
        assert!(matches!(enrich(&t), Err(EnrichError::NoRecordStructure)));

        let mut t = table(2);
        t.duration_seconds = Some(vec![Some(1.0)]);
        assert!(matches!(enrich(&t), Err(EnrichError::NoRecordStructure)));
    }
}
