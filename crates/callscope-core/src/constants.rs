//! Shared constants for the Callscope analytics engine.

/// Callscope version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sheet read from spreadsheet uploads unless configured otherwise.
pub const DEFAULT_SHEET_NAME: &str = "Sheet1";

/// Field delimiter for delimited-text uploads.
pub const DEFAULT_DELIMITER: u8 = b',';

/// Sentinel for records whose agent cell is null or blank.
pub const UNKNOWN_AGENT: &str = "Unknown Agent";

/// Size of the placeholder pool used when a file has no agent column.
/// Rows cycle through `Agent_1` .. `Agent_{pool}`.
pub const DEFAULT_PLACEHOLDER_AGENT_POOL: usize = 10;

/// Default number of anomalies returned by the outlier detector.
pub const DEFAULT_ANOMALY_LIMIT: usize = 10;

/// Tukey fence multiplier. Fixed, not configurable.
pub const IQR_MULTIPLIER: f64 = 1.5;

/// Minutes in one agent shift, used by the scenario simulator.
pub const SHIFT_MINUTES: f64 = 480.0;

/// Floor for projected customer satisfaction.
pub const MIN_PROJECTED_SATISFACTION: f64 = 60.0;

/// Utilization below this level adds an idle-time satisfaction penalty.
pub const LOW_UTILIZATION_THRESHOLD: f64 = 80.0;

/// Default mean answered minutes above which an (agent, weekday) pair counts as high AHT.
pub const DEFAULT_HIGH_AHT_THRESHOLD_MIN: f64 = 3.0;

/// Default margin (minutes) over the team mean before a weekday/hour slot is flagged.
pub const DEFAULT_SLOT_AHT_MARGIN_MIN: f64 = 0.5;

/// Default margin (percentage points) over the team drop rate before an agent is flagged.
pub const DEFAULT_DROP_RATE_MARGIN_PCT: f64 = 5.0;

/// Default number of high-AHT root causes reported.
pub const DEFAULT_TOP_ROOT_CAUSES: usize = 3;

/// Default number of agents in the daily volume view.
pub const DEFAULT_TOP_AGENTS: usize = 10;

/// Default scenario hold time per call (minutes).
pub const DEFAULT_HOLD_TIME_MIN: f64 = 0.0;

/// Default scenario after-call work per call (minutes).
pub const DEFAULT_ACW_TIME_MIN: f64 = 1.0;

/// Default scenario agent utilization (percent).
pub const DEFAULT_UTILIZATION_PCT: f64 = 85.0;

/// Default scenario peak-load multiplier.
pub const DEFAULT_PEAK_LOAD: f64 = 1.0;

/// Default directory for CSV exports.
pub const DEFAULT_EXPORT_DIR: &str = "callscope-exports";

/// Drop rate below which the call center is considered healthy (percent).
pub const DROP_RATE_GOOD_BELOW: f64 = 5.0;

/// Drop rate above which the call center is considered in alert (percent).
pub const DROP_RATE_HIGH_ABOVE: f64 = 15.0;

/// Rows kept by sample extraction.
pub const DEFAULT_SAMPLE_ROWS: usize = 100;

/// Seed for sample extraction.
pub const DEFAULT_SAMPLE_SEED: u64 = 42;

/// Maximum cached query results per session.
pub const DEFAULT_QUERY_CACHE_CAPACITY: u64 = 256;

/// Insights matrix: AHT above the team average by more than this is critical (minutes).
pub const MATRIX_AHT_MARGIN_MIN: f64 = 0.5;

/// Insights matrix: drop rate above the team average by more than this is critical (points).
pub const MATRIX_DROP_RATE_MARGIN_PCT: f64 = 5.0;

/// Insights matrix: call volume above this multiple of the team average is high.
pub const HIGH_VOLUME_FACTOR: f64 = 1.2;
