//! Session lifecycle errors.

use super::error_code::{self, CallscopeErrorCode};

/// Errors raised when a session operation is invalid for its current state.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("No dataset loaded")]
    NoDataset,

    #[error("Dataset loaded but column mapping not confirmed")]
    MappingPending,

    #[error("No uploaded dataset awaiting a mapping")]
    NothingToMap,
}

impl CallscopeErrorCode for SessionError {
    fn error_code(&self) -> &'static str {
        error_code::SESSION_ERROR
    }
}
