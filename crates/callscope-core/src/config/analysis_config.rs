//! Analysis configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_ANOMALY_LIMIT, DEFAULT_PLACEHOLDER_AGENT_POOL, UNKNOWN_AGENT};

/// Configuration for the enrichment and analysis stages.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum anomalies returned by the outlier detector. Default: 10.
    pub anomaly_limit: Option<usize>,
    /// Placeholder agent pool size when a file has no agent column. Default: 10.
    pub placeholder_agent_pool: Option<usize>,
    /// Label for records with a null or blank agent. Default: "Unknown Agent".
    pub unknown_agent_label: Option<String>,
}

impl AnalysisConfig {
    pub fn effective_anomaly_limit(&self) -> usize {
        self.anomaly_limit.unwrap_or(DEFAULT_ANOMALY_LIMIT)
    }

    pub fn effective_placeholder_agent_pool(&self) -> usize {
        self.placeholder_agent_pool
            .unwrap_or(DEFAULT_PLACEHOLDER_AGENT_POOL)
    }

    pub fn effective_unknown_agent_label(&self) -> &str {
        self.unknown_agent_label.as_deref().unwrap_or(UNKNOWN_AGENT)
    }
}
