//! Source format detection from the file extension.

use std::fmt;
use std::path::Path;

use callscope_core::errors::LoadError;

/// Upload formats the loader understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceFormat {
    /// `.csv` / `.txt`, read with the configured delimiter.
    Delimited,
    /// `.xlsx`, `.xlsm`, `.xls`, `.ods`.
    Spreadsheet,
}

impl SourceFormat {
    /// Detect from an extension string, case-insensitively.
    pub fn from_extension(ext: Option<&str>) -> Option<Self> {
        match ext?.to_ascii_lowercase().as_str() {
            "csv" | "txt" => Some(Self::Delimited),
            "xlsx" | "xlsm" | "xls" | "ods" => Some(Self::Spreadsheet),
            _ => None,
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, LoadError> {
        let ext = path.extension().and_then(|e| e.to_str());
        Self::from_extension(ext).ok_or_else(|| LoadError::UnsupportedFormat {
            extension: ext.unwrap_or_default().to_string(),
        })
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Delimited => &["csv", "txt"],
            Self::Spreadsheet => &["xlsx", "xlsm", "xls", "ods"],
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Delimited => "delimited",
            Self::Spreadsheet => "spreadsheet",
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
