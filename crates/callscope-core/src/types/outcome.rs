//! Canonical call outcome vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical outcome of a call. Fixed and exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CallOutcome {
    Answered,
    Dropped,
    Busy,
    #[serde(rename = "No Answer")]
    NoAnswer,
    Other,
    Unknown,
}

impl CallOutcome {
    /// All six outcomes in canonical order.
    pub const ALL: &'static [CallOutcome] = &[
        Self::Answered,
        Self::Dropped,
        Self::Busy,
        Self::NoAnswer,
        Self::Other,
        Self::Unknown,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::Answered => "Answered",
            Self::Dropped => "Dropped",
            Self::Busy => "Busy",
            Self::NoAnswer => "No Answer",
            Self::Other => "Other",
            Self::Unknown => "Unknown",
        }
    }

    /// Position in `ALL`, usable as an array index.
    pub fn index(&self) -> usize {
        match self {
            Self::Answered => 0,
            Self::Dropped => 1,
            Self::Busy => 2,
            Self::NoAnswer => 3,
            Self::Other => 4,
            Self::Unknown => 5,
        }
    }

    pub fn is_answered(&self) -> bool {
        matches!(self, Self::Answered)
    }
}

impl fmt::Display for CallOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
