//! Session lifecycle states.

use std::fmt;
use std::sync::Arc;

use callscope_analysis::ColumnMapping;
use callscope_core::types::{CallRecord, RawTable};

/// How the current dataset entered the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetSource {
    /// User upload, analyzed through a confirmed column mapping.
    Upload,
    /// Bundled sample data, analyzed through known-header lookup.
    Sample,
}

impl DatasetSource {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Upload => "upload",
            Self::Sample => "sample",
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A dataset ready for analysis.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub source: DatasetSource,
    /// xxh3 fingerprint of the raw table the records came from.
    pub fingerprint: u64,
    /// Mapping confirmed for an upload. `None` for sample data.
    pub mapping: Option<ColumnMapping>,
    pub records: Arc<Vec<CallRecord>>,
}

/// `Empty` → `AwaitingMapping` → `Ready`; `load_sample` and `reset` jump
/// from any state.
#[derive(Debug, Clone, Default)]
pub enum SessionState {
    #[default]
    Empty,
    AwaitingMapping {
        table: Arc<RawTable>,
        fingerprint: u64,
    },
    Ready(Arc<Dataset>),
}

impl SessionState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::AwaitingMapping { .. } => "awaiting_mapping",
            Self::Ready(_) => "ready",
        }
    }

    pub fn fingerprint(&self) -> Option<u64> {
        match self {
            Self::Empty => None,
            Self::AwaitingMapping { fingerprint, .. } => Some(*fingerprint),
            Self::Ready(dataset) => Some(dataset.fingerprint),
        }
    }
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
