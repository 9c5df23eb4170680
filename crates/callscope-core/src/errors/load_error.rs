//! Load errors. Fatal: no partial result is ever produced.

use super::error_code::{self, CallscopeErrorCode};

/// Errors that can occur while reading an uploaded file into a raw table.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Cannot read {path}: {message}")]
    Io { path: String, message: String },

    #[error("Unsupported file format: .{extension}")]
    UnsupportedFormat { extension: String },

    #[error("Dataset {path} contains no rows")]
    EmptyDataset { path: String },

    #[error("Sheet '{sheet}' not found in {path}")]
    SheetNotFound { path: String, sheet: String },

    #[error("Malformed input in {path}: {message}")]
    Malformed { path: String, message: String },
}

impl CallscopeErrorCode for LoadError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedFormat { .. } => error_code::UNSUPPORTED_FORMAT,
            Self::EmptyDataset { .. } => error_code::EMPTY_DATASET,
            Self::SheetNotFound { .. } => error_code::SHEET_NOT_FOUND,
            Self::Io { .. } | Self::Malformed { .. } => error_code::LOAD_ERROR,
        }
    }
}
