//! CallscopeErrorCode trait for stable, machine-readable error codes.

/// Every error enum implements this to provide a structured error code string
/// for the CLI and any other outer surface.
pub trait CallscopeErrorCode {
    /// Returns the error code string (e.g., "LOAD_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const LOAD_ERROR: &str = "LOAD_ERROR";
pub const UNSUPPORTED_FORMAT: &str = "UNSUPPORTED_FORMAT";
pub const EMPTY_DATASET: &str = "EMPTY_DATASET";
pub const SHEET_NOT_FOUND: &str = "SHEET_NOT_FOUND";
pub const INCOMPLETE_MAPPING: &str = "INCOMPLETE_MAPPING";
pub const UNKNOWN_COLUMN: &str = "UNKNOWN_COLUMN";
pub const ENRICH_ERROR: &str = "ENRICH_ERROR";
pub const SCENARIO_ERROR: &str = "SCENARIO_ERROR";
pub const EXPORT_ERROR: &str = "EXPORT_ERROR";
pub const SESSION_ERROR: &str = "SESSION_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
