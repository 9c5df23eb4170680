//! # callscope-analysis
//!
//! The analytics pipeline: column mapping and normalization, record enrichment,
//! aggregation (overview, agents, time patterns), IQR outlier detection,
//! operational insights, record filters, the scenario simulator, and the
//! `Tabular` CSV reports every result exports through.
//!
//! Data flows strictly downstream:
//! normalizer → enricher → {aggregation, outliers, insights} → report.

pub mod aggregation;
pub mod enricher;
pub mod filters;
pub mod insights;
pub mod normalizer;
pub mod outliers;
pub mod report;
pub mod simulation;
pub mod stats;

pub use aggregation::{agent_performance, overview_stats, time_patterns};
pub use enricher::enrich;
pub use normalizer::{normalize, ColumnMapping, NormalizedTable};
pub use outliers::detect_anomalies;
pub use simulation::simulate;
