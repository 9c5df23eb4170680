//! User-confirmed column mapping.

use serde::{Deserialize, Serialize};

use callscope_core::errors::{IncompleteMappingError, MappingError};
use callscope_core::types::{RawTable, RequiredField, TalkTimeUnit};

/// Source columns chosen by the user for each required field.
///
/// Unset or blank entries count as missing. When `split_datetime` is true the
/// timestamp is built from `date` + `time`; otherwise `date` holds a combined
/// date-time column and `time` is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub split_datetime: bool,
    pub date: Option<String>,
    pub time: Option<String>,
    pub agent: Option<String>,
    pub outcome: Option<String>,
    pub talk_time: Option<String>,
    #[serde(default)]
    pub talk_time_unit: TalkTimeUnit,
}

/// A mapping checked against a concrete table: every field is a column index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMapping {
    pub date: usize,
    pub time: Option<usize>,
    pub agent: usize,
    pub outcome: usize,
    pub talk_time: usize,
    pub talk_time_unit: TalkTimeUnit,
}

impl ColumnMapping {
    /// Mapping whose timestamp lives in one combined column.
    pub fn combined(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            ..Self::default()
        }
    }

    /// Mapping whose timestamp is split across a date and a time column.
    pub fn split(date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            split_datetime: true,
            date: Some(date.into()),
            time: Some(time.into()),
            ..Self::default()
        }
    }

    pub fn with_agent(mut self, column: impl Into<String>) -> Self {
        self.agent = Some(column.into());
        self
    }

    pub fn with_outcome(mut self, column: impl Into<String>) -> Self {
        self.outcome = Some(column.into());
        self
    }

    pub fn with_talk_time(mut self, column: impl Into<String>, unit: TalkTimeUnit) -> Self {
        self.talk_time = Some(column.into());
        self.talk_time_unit = unit;
        self
    }

    /// Every required field without a usable column, in mapping order.
    pub fn missing_fields(&self) -> Vec<RequiredField> {
        let mut missing = Vec::new();
        let mut check = |field, value: &Option<String>| {
            if value.as_deref().map_or(true, |c| c.trim().is_empty()) {
                missing.push(field);
            }
        };
        check(RequiredField::Date, &self.date);
        if self.split_datetime {
            check(RequiredField::Time, &self.time);
        }
        check(RequiredField::Agent, &self.agent);
        check(RequiredField::Outcome, &self.outcome);
        check(RequiredField::TalkTime, &self.talk_time);
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// Check completeness, then look each column up by exact name.
    pub fn resolve(&self, table: &RawTable) -> Result<ResolvedMapping, MappingError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(IncompleteMappingError::new(missing).into());
        }

        let index = |field: RequiredField, column: &Option<String>| {
            let name = column.as_deref().unwrap_or_default();
            table
                .column_index(name)
                .ok_or_else(|| MappingError::UnknownColumn {
                    field,
                    column: name.to_string(),
                })
        };

        Ok(ResolvedMapping {
            date: index(RequiredField::Date, &self.date)?,
            time: if self.split_datetime {
                Some(index(RequiredField::Time, &self.time)?)
            } else {
                None
            },
            agent: index(RequiredField::Agent, &self.agent)?,
            outcome: index(RequiredField::Outcome, &self.outcome)?,
            talk_time: index(RequiredField::TalkTime, &self.talk_time)?,
            talk_time_unit: self.talk_time_unit,
        })
    }
}
