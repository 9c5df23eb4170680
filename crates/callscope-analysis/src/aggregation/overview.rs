//! Overview statistics for the whole record set.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use callscope_core::constants::{DROP_RATE_GOOD_BELOW, DROP_RATE_HIGH_ABOVE};
use callscope_core::types::{CallOutcome, CallRecord, DayOfWeek};

use super::mode_first_seen;
use crate::stats;

/// Count and share of one outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutcomeShare {
    pub outcome: CallOutcome,
    pub count: usize,
    /// Percent of all calls.
    pub percent: f64,
}

/// Talk-time statistics over answered calls, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TalkTimeSummary {
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub total: f64,
}

/// Traffic-light reading of the drop rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DropRateHealth {
    Good,
    Moderate,
    High,
}

impl DropRateHealth {
    pub fn from_rate(drop_rate: f64) -> Self {
        if drop_rate < DROP_RATE_GOOD_BELOW {
            Self::Good
        } else if drop_rate > DROP_RATE_HIGH_ABOVE {
            Self::High
        } else {
            Self::Moderate
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Good => "good",
            Self::Moderate => "moderate",
            Self::High => "high",
        }
    }
}

impl fmt::Display for DropRateHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverviewStats {
    pub total_calls: usize,
    pub unique_agents: usize,
    /// Outcomes that occur at least once, by count descending.
    pub outcomes: Vec<OutcomeShare>,
    pub answered_calls: usize,
    pub dropped_calls: usize,
    pub answer_rate: f64,
    pub drop_rate: f64,
    /// `None` when there are no answered calls.
    pub talk_time: Option<TalkTimeSummary>,
    pub busiest_hour: Option<u8>,
    pub busiest_day: Option<DayOfWeek>,
    pub date_range: Option<(NaiveDate, NaiveDate)>,
}

impl OverviewStats {
    pub fn count(&self, outcome: CallOutcome) -> usize {
        self.outcomes
            .iter()
            .find(|s| s.outcome == outcome)
            .map_or(0, |s| s.count)
    }

    pub fn drop_rate_health(&self) -> DropRateHealth {
        DropRateHealth::from_rate(self.drop_rate)
    }

    /// Multi-line plain-text summary.
    pub fn summary(&self) -> String {
        let dash = || "-".to_string();
        let (from, to) = self
            .date_range
            .map_or((dash(), dash()), |(a, b)| (a.to_string(), b.to_string()));
        let mut lines = vec![
            format!("Total Calls: {}", self.total_calls),
            format!(
                "Answered: {} ({:.1}%) | Dropped: {} ({:.1}%)",
                self.answered_calls, self.answer_rate, self.dropped_calls, self.drop_rate
            ),
            format!("Unique Agents: {}", self.unique_agents),
            format!("Date Range: {from} to {to}"),
        ];
        match self.talk_time {
            Some(t) => {
                lines.push(format!(
                    "Avg Talk Time: {:.2} min | Median: {:.2} min | Min: {:.2} min | Max: {:.2} min",
                    t.mean, t.median, t.min, t.max
                ));
                lines.push(format!(
                    "Total Talk Time: {:.2} min ({:.2} hrs)",
                    t.total,
                    t.total / 60.0
                ));
            }
            None => lines.push("Avg Talk Time: - (no answered calls)".to_string()),
        }
        lines.push(format!(
            "Busiest Hour: {} | Busiest Day: {}",
            self.busiest_hour.map_or_else(dash, |h| h.to_string()),
            self.busiest_day.map_or_else(dash, |d| d.to_string()),
        ));
        lines.push(format!("Drop Rate Health: {}", self.drop_rate_health()));
        lines.join("\n")
    }
}

#[instrument(skip_all, fields(record_count = records.len()))]
pub fn overview_stats(records: &[CallRecord]) -> OverviewStats {
    let total_calls = records.len();

    let mut counts = [0usize; 6];
    for r in records {
        counts[r.call_outcome.index()] += 1;
    }
    let mut outcomes: Vec<OutcomeShare> = CallOutcome::ALL
        .iter()
        .filter(|o| counts[o.index()] > 0)
        .map(|&outcome| OutcomeShare {
            outcome,
            count: counts[outcome.index()],
            percent: stats::rate(counts[outcome.index()], total_calls),
        })
        .collect();
    // Stable: ties keep canonical order.
    outcomes.sort_by(|a, b| b.count.cmp(&a.count));

    let answered: Vec<f64> = records
        .iter()
        .filter(|r| r.is_answered())
        .map(CallRecord::duration_minutes)
        .collect();
    let talk_time = (!answered.is_empty()).then(|| TalkTimeSummary {
        mean: stats::mean(&answered),
        median: stats::median(&answered),
        min: answered.iter().copied().fold(f64::INFINITY, f64::min),
        max: answered.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        total: answered.iter().sum(),
    });

    let mut agents: Vec<&str> = records.iter().map(|r| r.agent_name.as_str()).collect();
    agents.sort_unstable();
    agents.dedup();

    let dates = records.iter().filter_map(|r| r.date);
    let date_range = dates.clone().min().zip(dates.max());

    let answered_calls = counts[CallOutcome::Answered.index()];
    let dropped_calls = counts[CallOutcome::Dropped.index()];
    let overview = OverviewStats {
        total_calls,
        unique_agents: agents.len(),
        outcomes,
        answered_calls,
        dropped_calls,
        answer_rate: stats::rate(answered_calls, total_calls),
        drop_rate: stats::rate(dropped_calls, total_calls),
        talk_time,
        busiest_hour: mode_first_seen(records.iter().filter_map(|r| r.hour)),
        busiest_day: mode_first_seen(records.iter().filter_map(|r| r.day_of_week)),
        date_range,
    };
    debug!(
        total_calls,
        answered_calls,
        dropped_calls,
        unique_agents = overview.unique_agents,
        "computed overview"
    );
    overview
}
