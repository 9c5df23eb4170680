//! Export errors.

use super::error_code::{self, CallscopeErrorCode};

/// Errors that can occur while rendering or writing a CSV export.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("CSV encoding failed for {table}: {message}")]
    Encode { table: String, message: String },

    #[error("Cannot write {path}: {message}")]
    Write { path: String, message: String },
}

impl CallscopeErrorCode for ExportError {
    fn error_code(&self) -> &'static str {
        error_code::EXPORT_ERROR
    }
}
