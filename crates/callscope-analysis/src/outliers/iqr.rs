//! IQR with Tukey fences.
//!
//! Resistant to extreme outliers that inflate stddev. No minimum sample size:
//! with a single answered call both quartiles equal that value and nothing is
//! flagged.

use tracing::{debug, instrument, Span};

use callscope_core::constants::IQR_MULTIPLIER;
use callscope_core::tracing::metrics;
use callscope_core::types::CallRecord;

use super::types::{Anomaly, AnomalyOutcome, AnomalySet};
use crate::stats::{percentile, sorted};

/// Flag answered calls whose duration lies strictly outside
/// `[Q1 − 1.5·IQR, Q3 + 1.5·IQR]`, returning the `n` highest-scoring ones.
#[instrument(skip_all, fields(record_count = records.len(), anomaly_count = tracing::field::Empty))]
pub fn detect_anomalies(records: &[CallRecord], n: usize) -> AnomalyOutcome {
    let answered: Vec<&CallRecord> = records.iter().filter(|r| r.is_answered()).collect();
    if answered.is_empty() {
        return AnomalyOutcome::NoAnsweredCalls;
    }

    let minutes: Vec<f64> = answered.iter().map(|r| r.duration_minutes()).collect();
    let ordered = sorted(&minutes);
    let q1 = percentile(&ordered, 25.0);
    let q3 = percentile(&ordered, 75.0);
    let iqr = q3 - q1;
    let lower_fence = q1 - IQR_MULTIPLIER * iqr;
    let upper_fence = q3 + IQR_MULTIPLIER * iqr;
    let midpoint = (q1 + q3) / 2.0;

    let mut anomalies: Vec<Anomaly> = answered
        .iter()
        .zip(&minutes)
        .filter(|(_, m)| **m < lower_fence || **m > upper_fence)
        .map(|(r, &m)| Anomaly {
            record: (*r).clone(),
            anomaly_score: (m - midpoint).abs(),
        })
        .collect();

    let total_flagged = anomalies.len();
    Span::current().record(metrics::ANOMALY_COUNT, total_flagged);
    if anomalies.is_empty() {
        debug!(q1, q3, "no calls outside the fences");
        return AnomalyOutcome::NoAnomalies;
    }

    // Stable: equal scores keep record order.
    anomalies.sort_by(|a, b| b.anomaly_score.total_cmp(&a.anomaly_score));
    anomalies.truncate(n);

    debug!(q1, q3, lower_fence, upper_fence, total_flagged, "flagged anomalies");
    AnomalyOutcome::Found(AnomalySet {
        q1,
        q3,
        iqr,
        lower_fence,
        upper_fence,
        total_flagged,
        anomalies,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use callscope_core::types::CallOutcome;

    fn answered(minutes: &[f64]) -> Vec<CallRecord> {
        minutes
            .iter()
            .enumerate()
            .map(|(row, m)| CallRecord {
                row,
                call_datetime: None,
                date: None,
                hour: None,
                day_of_week: None,
                agent_name: format!("Agent {row}"),
                raw_status: Some("ANSWERED".into()),
                call_outcome: CallOutcome::Answered,
                duration_seconds: m * 60.0,
            })
            .collect()
    }

    #[test]
    fn flags_the_long_call() {
        let records = answered(&[1.0, 2.0, 2.0, 3.0, 3.0, 3.0, 4.0, 4.0, 5.0, 50.0]);
        let AnomalyOutcome::Found(set) = detect_anomalies(&records, 10) else {
            panic!("expected anomalies");
        };
        assert!((set.q1 - 2.25).abs() < 1e-12);
        assert!((set.q3 - 4.0).abs() < 1e-12);
        assert!((set.upper_fence - 6.625).abs() < 1e-12);
        assert_eq!(set.total_flagged, 1);
        assert_eq!(set.anomalies[0].record.row, 9);
        assert!((set.anomalies[0].anomaly_score - 46.875).abs() < 1e-12);
        assert_eq!(set.longest().unwrap().record.row, 9);
    }

    #[test]
    fn tight_cluster_has_no_anomalies() {
        let records = answered(&[3.0, 3.0, 4.0, 4.0]);
        assert_eq!(detect_anomalies(&records, 10), AnomalyOutcome::NoAnomalies);
    }

    #[test]
    fn single_call_is_never_flagged() {
        assert_eq!(detect_anomalies(&answered(&[7.0]), 10), AnomalyOutcome::NoAnomalies);
    }

    #[test]
    fn only_answered_calls_count() {
        let mut records = answered(&[1.0]);
        records[0].call_outcome = CallOutcome::Dropped;
        assert_eq!(detect_anomalies(&records, 10), AnomalyOutcome::NoAnsweredCalls);
        assert_eq!(detect_anomalies(&[], 10), AnomalyOutcome::NoAnsweredCalls);
    }

    #[test]
    fn truncates_to_n_highest_scores() {
        let records = answered(&[5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 5.0, 0.0, 40.0, 20.0]);
        let AnomalyOutcome::Found(set) = detect_anomalies(&records, 2) else {
            panic!("expected anomalies");
        };
        assert_eq!(set.total_flagged, 3);
        let rows: Vec<usize> = set.anomalies.iter().map(|a| a.record.row).collect();
        assert_eq!(rows, vec![9, 10]);
    }
}
