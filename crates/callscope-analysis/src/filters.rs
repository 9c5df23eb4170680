//! Record filters applied before any recomputation, plus per-agent drill-downs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use callscope_core::types::collections::BTreeMap;
use callscope_core::types::{CallOutcome, CallRecord};

use crate::stats;

/// Date window (inclusive) and agent substring query.
///
/// When either date bound is set, records without a date are excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CallFilter {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// Case-insensitive substring of the agent name.
    pub agent_query: Option<String>,
}

impl CallFilter {
    pub fn is_empty(&self) -> bool {
        self.date_from.is_none()
            && self.date_to.is_none()
            && self.agent_query.as_deref().map_or(true, |q| q.trim().is_empty())
    }

    pub fn matches(&self, record: &CallRecord) -> bool {
        if self.date_from.is_some() || self.date_to.is_some() {
            let Some(date) = record.date else {
                return false;
            };
            if self.date_from.is_some_and(|from| date < from) {
                return false;
            }
            if self.date_to.is_some_and(|to| date > to) {
                return false;
            }
        }
        match self.agent_query.as_deref().map(str::trim) {
            Some(q) if !q.is_empty() => record
                .agent_name
                .to_lowercase()
                .contains(&q.to_lowercase()),
            _ => true,
        }
    }

    /// Records passing the filter, in input order.
    pub fn apply(&self, records: &[CallRecord]) -> Vec<CallRecord> {
        if self.is_empty() {
            return records.to_vec();
        }
        let kept: Vec<CallRecord> = records.iter().filter(|r| self.matches(r)).cloned().collect();
        debug!(before = records.len(), after = kept.len(), "applied call filter");
        kept
    }
}

/// One row of an agent's call history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub date: Option<NaiveDate>,
    pub call_outcome: CallOutcome,
    pub duration_minutes: f64,
}

/// Every call of `agent` (exact name), in record order.
pub fn agent_call_history(records: &[CallRecord], agent: &str) -> Vec<HistoryEntry> {
    records
        .iter()
        .filter(|r| r.agent_name == agent)
        .map(|r| HistoryEntry {
            date: r.date,
            call_outcome: r.call_outcome,
            duration_minutes: r.duration_minutes(),
        })
        .collect()
}

/// Mean answered minutes per date for one agent, oldest first.
pub fn agent_aht_trend(records: &[CallRecord], agent: &str) -> Vec<(NaiveDate, f64)> {
    let mut by_date: BTreeMap<NaiveDate, Vec<f64>> = BTreeMap::new();
    for r in records
        .iter()
        .filter(|r| r.agent_name == agent && r.is_answered())
    {
        if let Some(d) = r.date {
            by_date.entry(d).or_default().push(r.duration_minutes());
        }
    }
    by_date
        .into_iter()
        .map(|(d, m)| (d, stats::mean(&m)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(agent: &str, date: Option<(i32, u32, u32)>, outcome: CallOutcome, minutes: f64) -> CallRecord {
        CallRecord {
            row: 0,
            call_datetime: None,
            date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
            hour: None,
            day_of_week: None,
            agent_name: agent.to_string(),
            raw_status: None,
            call_outcome: outcome,
            duration_seconds: minutes * 60.0,
        }
    }

    #[test]
    fn date_window_is_inclusive_and_drops_undated() {
        let records = vec![
            rec("A", Some((2024, 1, 1)), CallOutcome::Answered, 1.0),
            rec("A", Some((2024, 1, 5)), CallOutcome::Answered, 1.0),
            rec("A", Some((2024, 1, 9)), CallOutcome::Answered, 1.0),
            rec("A", None, CallOutcome::Answered, 1.0),
        ];
        let filter = CallFilter {
            date_from: NaiveDate::from_ymd_opt(2024, 1, 1),
            date_to: NaiveDate::from_ymd_opt(2024, 1, 5),
            agent_query: None,
        };
        assert_eq!(filter.apply(&records).len(), 2);
        assert_eq!(CallFilter::default().apply(&records).len(), 4);
    }

    #[test]
    fn agent_query_is_case_insensitive_substring() {
        let records = vec![
            rec("Maria Lopez", None, CallOutcome::Answered, 1.0),
            rec("Mario Rossi", None, CallOutcome::Answered, 1.0),
            rec("Li Wei", None, CallOutcome::Answered, 1.0),
        ];
        let filter = CallFilter {
            agent_query: Some("MARI".into()),
            ..Default::default()
        };
        assert_eq!(filter.apply(&records).len(), 2);
    }

    #[test]
    fn history_and_trend() {
        let records = vec![
            rec("A", Some((2024, 1, 2)), CallOutcome::Answered, 4.0),
            rec("A", Some((2024, 1, 1)), CallOutcome::Answered, 2.0),
            rec("A", Some((2024, 1, 1)), CallOutcome::Dropped, 0.0),
            rec("A", Some((2024, 1, 2)), CallOutcome::Answered, 6.0),
            rec("B", Some((2024, 1, 1)), CallOutcome::Answered, 9.0),
        ];
        assert_eq!(agent_call_history(&records, "A").len(), 4);
        let trend = agent_aht_trend(&records, "A");
        assert_eq!(trend.len(), 2);
        assert_eq!(trend[0].1, 2.0);
        assert_eq!(trend[1].1, 5.0);
    }
}
