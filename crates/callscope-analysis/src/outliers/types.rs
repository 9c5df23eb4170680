//! Outlier detection result types.

use serde::{Deserialize, Serialize};

use callscope_core::types::CallRecord;

/// An answered call outside the Tukey fences.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Anomaly {
    pub record: CallRecord,
    /// `|duration_minutes − (Q1 + Q3) / 2|`.
    pub anomaly_score: f64,
}

/// Flagged calls together with the fences that flagged them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnomalySet {
    pub q1: f64,
    pub q3: f64,
    pub iqr: f64,
    pub lower_fence: f64,
    pub upper_fence: f64,
    /// Calls outside the fences before truncation.
    pub total_flagged: usize,
    /// Highest score first, at most `n`.
    pub anomalies: Vec<Anomaly>,
}

impl AnomalySet {
    /// Longest flagged call among the returned anomalies.
    pub fn longest(&self) -> Option<&Anomaly> {
        self.anomalies
            .iter()
            .max_by(|a, b| a.record.duration_seconds.total_cmp(&b.record.duration_seconds))
    }

    /// Shortest flagged call among the returned anomalies.
    pub fn shortest(&self) -> Option<&Anomaly> {
        self.anomalies
            .iter()
            .min_by(|a, b| a.record.duration_seconds.total_cmp(&b.record.duration_seconds))
    }

    /// One-paragraph description naming the extremes.
    pub fn narrative(&self) -> String {
        let describe = |a: &Anomaly| {
            let when = a
                .record
                .date
                .map_or_else(|| "an unknown date".to_string(), |d| d.to_string());
            format!(
                "{:.2} min by {} on {}",
                a.record.duration_minutes(),
                a.record.agent_name,
                when
            )
        };
        match (self.longest(), self.shortest()) {
            (Some(l), Some(s)) => format!(
                "{} calls were flagged as anomalies. The longest call was {}. The shortest was {}.",
                self.total_flagged,
                describe(l),
                describe(s)
            ),
            _ => format!("{} calls were flagged as anomalies.", self.total_flagged),
        }
    }
}

/// Result of outlier detection. Empty conditions are explicit variants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnomalyOutcome {
    NoAnsweredCalls,
    NoAnomalies,
    Found(AnomalySet),
}

impl AnomalyOutcome {
    pub fn anomalies(&self) -> &[Anomaly] {
        match self {
            Self::Found(set) => &set.anomalies,
            _ => &[],
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
