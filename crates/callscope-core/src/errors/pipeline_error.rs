//! Top-level pipeline error.

use super::error_code::CallscopeErrorCode;
use super::{
    ConfigError, EnrichError, ExportError, LoadError, MappingError, ScenarioError,
    SessionError,
};

/// Errors that can occur anywhere between loading a file and exporting results.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Load error: {0}")]
    Load(#[from] LoadError),

    #[error("Mapping error: {0}")]
    Mapping(#[from] MappingError),

    #[error("Enrichment error: {0}")]
    Enrich(#[from] EnrichError),

    #[error("Scenario error: {0}")]
    Scenario(#[from] ScenarioError),

    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl CallscopeErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Load(e) => e.error_code(),
            Self::Mapping(e) => e.error_code(),
            Self::Enrich(e) => e.error_code(),
            Self::Scenario(e) => e.error_code(),
            Self::Export(e) => e.error_code(),
            Self::Session(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
        }
    }
}

impl From<super::IncompleteMappingError> for PipelineError {
    fn from(e: super::IncompleteMappingError) -> Self {
        Self::Mapping(MappingError::Incomplete(e))
    }
}
