//! Column mapping errors.

use crate::types::RequiredField;

use super::error_code::{self, CallscopeErrorCode};

/// Raised when one or more required fields have no source column.
/// Lists every missing field, never just the first one.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Incomplete column mapping, missing: {}", format_fields(.missing))]
pub struct IncompleteMappingError {
    pub missing: Vec<RequiredField>,
}

impl IncompleteMappingError {
    pub fn new(missing: Vec<RequiredField>) -> Self {
        Self { missing }
    }

    /// Human-readable names of the missing fields, in mapping order.
    pub fn missing_names(&self) -> Vec<&'static str> {
        self.missing.iter().map(|f| f.name()).collect()
    }
}

fn format_fields(fields: &[RequiredField]) -> String {
    fields
        .iter()
        .map(|f| f.name())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Errors that can occur while applying a user-confirmed column mapping.
#[derive(Debug, thiserror::Error)]
pub enum MappingError {
    #[error(transparent)]
    Incomplete(#[from] IncompleteMappingError),

    #[error("Column '{column}' mapped to {field} does not exist in the dataset")]
    UnknownColumn { field: RequiredField, column: String },
}

impl CallscopeErrorCode for MappingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Incomplete(_) => error_code::INCOMPLETE_MAPPING,
            Self::UnknownColumn { .. } => error_code::UNKNOWN_COLUMN,
        }
    }
}

impl CallscopeErrorCode for IncompleteMappingError {
    fn error_code(&self) -> &'static str {
        error_code::INCOMPLETE_MAPPING
    }
}
