//! Outlier detection over answered-call durations.
//!
//! IQR with Tukey fences at a fixed 1.5 multiplier.

pub mod iqr;
pub mod types;

pub use iqr::detect_anomalies;
pub use types::{Anomaly, AnomalyOutcome, AnomalySet};
