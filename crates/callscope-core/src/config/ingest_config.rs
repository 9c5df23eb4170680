//! Ingestion configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_DELIMITER, DEFAULT_SHEET_NAME};

/// Configuration for file loading.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IngestConfig {
    /// Spreadsheet sheet to read. Default: "Sheet1".
    pub sheet_name: Option<String>,
    /// Field delimiter for delimited text. Must be a single ASCII character. Default: ','.
    pub delimiter: Option<char>,
}

impl IngestConfig {
    pub fn effective_sheet_name(&self) -> &str {
        self.sheet_name.as_deref().unwrap_or(DEFAULT_SHEET_NAME)
    }

    /// Returns the delimiter as a byte. Non-ASCII values are rejected by
    /// validation; here they fall back to the default.
    pub fn effective_delimiter(&self) -> u8 {
        match self.delimiter {
            Some(c) if c.is_ascii() => c as u8,
            _ => DEFAULT_DELIMITER,
        }
    }
}
