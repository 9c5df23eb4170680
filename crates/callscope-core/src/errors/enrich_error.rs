//! Enrichment errors. Row-level defects never surface here.

use super::error_code::{self, CallscopeErrorCode};

/// Fatal conditions of the record enricher.
#[derive(Debug, thiserror::Error)]
pub enum EnrichError {
    #[error("Cannot enrich an empty dataset")]
    EmptyDataset,

    #[error("Dataset has no parseable record structure")]
    NoRecordStructure,
}

impl CallscopeErrorCode for EnrichError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyDataset => error_code::EMPTY_DATASET,
            Self::NoRecordStructure => error_code::ENRICH_ERROR,
        }
    }
}
