//! Scenario simulator errors.

use super::error_code::{self, CallscopeErrorCode};

/// Rejected scenario inputs.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ScenarioError {
    #[error("Handle time (AHT + hold + ACW) must be positive, got {total} min")]
    DegenerateHandleTime { total: f64 },

    #[error("Invalid scenario parameter {name}: {message}")]
    InvalidParameter { name: &'static str, message: String },
}

impl CallscopeErrorCode for ScenarioError {
    fn error_code(&self) -> &'static str {
        error_code::SCENARIO_ERROR
    }
}
