//! Logical fields a user must map onto source columns.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A required logical field of the column mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RequiredField {
    /// Combined date-time column, or the date half of a split pair.
    Date,
    /// Time half of a split date/time pair.
    Time,
    Agent,
    Outcome,
    TalkTime,
}

impl RequiredField {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Date => "Date",
            Self::Time => "Time",
            Self::Agent => "Agent",
            Self::Outcome => "Outcome",
            Self::TalkTime => "Talk Time",
        }
    }
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unit of the mapped talk-time column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TalkTimeUnit {
    #[default]
    Minutes,
    Seconds,
}

impl TalkTimeUnit {
    /// Multiplier converting a value in this unit to seconds.
    pub fn seconds_factor(&self) -> f64 {
        match self {
            Self::Minutes => 60.0,
            Self::Seconds => 1.0,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Minutes => "minutes",
            Self::Seconds => "seconds",
        }
    }

    /// Parse a unit name as accepted on the command line and in config.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "mins" | "minute" | "minutes" => Some(Self::Minutes),
            "s" | "sec" | "secs" | "second" | "seconds" => Some(Self::Seconds),
            _ => None,
        }
    }
}

impl fmt::Display for TalkTimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
