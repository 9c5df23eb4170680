//! Operational insights configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DROP_RATE_MARGIN_PCT, DEFAULT_HIGH_AHT_THRESHOLD_MIN, DEFAULT_SLOT_AHT_MARGIN_MIN,
    DEFAULT_TOP_AGENTS, DEFAULT_TOP_ROOT_CAUSES,
};

/// Thresholds for root-cause analysis and executive alerts.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InsightsConfig {
    /// Mean answered minutes above which an (agent, weekday) pair is high AHT. Default: 3.0.
    pub high_aht_threshold_min: Option<f64>,
    /// Minutes over the team mean before a weekday/hour slot is flagged. Default: 0.5.
    pub slot_aht_margin_min: Option<f64>,
    /// Percentage points over the team drop rate before an agent is flagged. Default: 5.0.
    pub drop_rate_margin_pct: Option<f64>,
    /// Number of root-cause pairs reported. Default: 3.
    pub top_root_causes: Option<usize>,
    /// Agents included in the daily volume view. Default: 10.
    pub top_agents: Option<usize>,
}

impl InsightsConfig {
    pub fn effective_high_aht_threshold_min(&self) -> f64 {
        self.high_aht_threshold_min
            .unwrap_or(DEFAULT_HIGH_AHT_THRESHOLD_MIN)
    }

    pub fn effective_slot_aht_margin_min(&self) -> f64 {
        self.slot_aht_margin_min.unwrap_or(DEFAULT_SLOT_AHT_MARGIN_MIN)
    }

    pub fn effective_drop_rate_margin_pct(&self) -> f64 {
        self.drop_rate_margin_pct
            .unwrap_or(DEFAULT_DROP_RATE_MARGIN_PCT)
    }

    pub fn effective_top_root_causes(&self) -> usize {
        self.top_root_causes.unwrap_or(DEFAULT_TOP_ROOT_CAUSES)
    }

    pub fn effective_top_agents(&self) -> usize {
        self.top_agents.unwrap_or(DEFAULT_TOP_AGENTS)
    }
}
