//! Standard span and event field names.
//!
//! Every pipeline stage records its work under these names so log output can
//! be filtered and compared across runs.

/// Rows in the input table.
pub const ROW_COUNT: &str = "row_count";

/// Columns in the input table.
pub const COLUMN_COUNT: &str = "column_count";

/// Canonical call records produced or consumed.
pub const RECORD_COUNT: &str = "record_count";

/// Timestamps that failed to parse during normalization.
pub const UNPARSED_TIMESTAMPS: &str = "unparsed_timestamps";

/// Distinct agents seen by an aggregation.
pub const AGENT_COUNT: &str = "agent_count";

/// Anomalies flagged by the outlier detector.
pub const ANOMALY_COUNT: &str = "anomaly_count";

/// Stage duration in milliseconds.
pub const DURATION_MS: &str = "duration_ms";

/// xxh3 fingerprint of the loaded dataset.
pub const DATASET_FINGERPRINT: &str = "dataset_fingerprint";

/// Session generation counter.
pub const SESSION_GENERATION: &str = "session_generation";

/// Query cache hit or miss.
pub const CACHE_HIT: &str = "cache_hit";
