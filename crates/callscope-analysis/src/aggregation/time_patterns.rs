//! Hourly and daily call-volume / talk-time tables.

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use callscope_core::types::collections::BTreeMap;
use callscope_core::types::{CallRecord, DayOfWeek};

use crate::stats;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlyStat {
    pub hour: u8,
    pub total_calls: usize,
    /// Mean answered minutes, 0.0 when the hour has no answered calls.
    pub avg_talk_time_min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStat {
    pub day: DayOfWeek,
    pub total_calls: usize,
    pub avg_talk_time_min: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimePatterns {
    /// Observed hours only, ascending.
    pub hourly: Vec<HourlyStat>,
    /// Observed weekdays only, Monday first.
    pub daily: Vec<DailyStat>,
    /// Calls with no timestamp, which fall in no bucket.
    pub unbucketed_calls: usize,
}

/// Headline numbers for the time-pattern view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PeakSummary {
    pub busiest_hour: u8,
    pub peak_hourly_volume: usize,
    pub busiest_day: Option<DayOfWeek>,
    /// Lowest hourly mean talk time.
    pub shortest_hourly_avg_min: f64,
    /// Hour with the highest mean talk time.
    pub longest_avg_hour: u8,
    pub longest_hourly_avg_min: f64,
}

impl TimePatterns {
    /// Peaks over the tables. First row wins ties. `None` when no call has a
    /// timestamp.
    pub fn peaks(&self) -> Option<PeakSummary> {
        let busiest = first_max_by(&self.hourly, |h| h.total_calls as f64)?;
        let longest = first_max_by(&self.hourly, |h| h.avg_talk_time_min)?;
        let shortest = self
            .hourly
            .iter()
            .map(|h| h.avg_talk_time_min)
            .fold(f64::INFINITY, f64::min);
        Some(PeakSummary {
            busiest_hour: busiest.hour,
            peak_hourly_volume: busiest.total_calls,
            busiest_day: first_max_by(&self.daily, |d| d.total_calls as f64).map(|d| d.day),
            shortest_hourly_avg_min: shortest,
            longest_avg_hour: longest.hour,
            longest_hourly_avg_min: longest.avg_talk_time_min,
        })
    }

    /// Total calls across hourly buckets plus unbucketed calls.
    pub fn accounted_calls(&self) -> usize {
        self.hourly.iter().map(|h| h.total_calls).sum::<usize>() + self.unbucketed_calls
    }
}

fn first_max_by<T>(rows: &[T], key: impl Fn(&T) -> f64) -> Option<&T> {
    rows.iter().fold(None, |best: Option<&T>, row| match best {
        Some(b) if key(b) >= key(row) => Some(b),
        _ => Some(row),
    })
}

/// Calls and answered minutes gathered for one bucket.
#[derive(Default)]
struct Bucket {
    calls: usize,
    answered_minutes: Vec<f64>,
}

impl Bucket {
    fn add(&mut self, record: &CallRecord) {
        self.calls += 1;
        if record.is_answered() {
            self.answered_minutes.push(record.duration_minutes());
        }
    }

    fn avg(&self) -> f64 {
        stats::mean(&self.answered_minutes)
    }
}

#[instrument(skip_all, fields(record_count = records.len()))]
pub fn time_patterns(records: &[CallRecord]) -> TimePatterns {
    let mut hours: BTreeMap<u8, Bucket> = BTreeMap::new();
    let mut days: BTreeMap<DayOfWeek, Bucket> = BTreeMap::new();
    let mut unbucketed_calls = 0;

    for r in records {
        match (r.hour, r.day_of_week) {
            (Some(h), Some(d)) => {
                hours.entry(h).or_default().add(r);
                days.entry(d).or_default().add(r);
            }
            _ => unbucketed_calls += 1,
        }
    }

    // DayOfWeek orders Monday..Sunday, so map order is display order.
    let patterns = TimePatterns {
        hourly: hours
            .into_iter()
            .map(|(hour, b)| HourlyStat {
                hour,
                total_calls: b.calls,
                avg_talk_time_min: b.avg(),
            })
            .collect(),
        daily: days
            .into_iter()
            .map(|(day, b)| DailyStat {
                day,
                total_calls: b.calls,
                avg_talk_time_min: b.avg(),
            })
            .collect(),
        unbucketed_calls,
    };
    debug!(
        hours = patterns.hourly.len(),
        days = patterns.daily.len(),
        unbucketed_calls,
        "computed time patterns"
    );
    patterns
}
