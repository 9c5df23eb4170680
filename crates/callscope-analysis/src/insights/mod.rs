//! Operational insights: agent activity heatmap, daily agent volume, AHT
//! root-cause matrix, agent scorecard matrix and executive alerts.

pub mod alerts;
pub mod daily_volume;
pub mod heatmap;
pub mod matrix;
pub mod root_cause;

pub use alerts::{executive_alerts, Alert};
pub use daily_volume::{daily_agent_volume, DailyAgentVolume};
pub use heatmap::{agent_hour_heatmap, AgentHourHeatmap};
pub use matrix::{insights_matrix, AgentScorecard, InsightsMatrix, MetricTier};
pub use root_cause::{aht_matrix, AhtMatrix, RootCause};

use serde::{Deserialize, Serialize};
use tracing::instrument;

use callscope_core::config::InsightsConfig;
use callscope_core::types::CallRecord;

/// Thresholds for the insight computations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InsightOptions {
    pub high_aht_threshold_min: f64,
    pub slot_aht_margin_min: f64,
    pub drop_rate_margin_pct: f64,
    pub top_root_causes: usize,
    pub top_agents: usize,
}

impl Default for InsightOptions {
    fn default() -> Self {
        Self::from(&InsightsConfig::default())
    }
}

impl From<&InsightsConfig> for InsightOptions {
    fn from(config: &InsightsConfig) -> Self {
        Self {
            high_aht_threshold_min: config.effective_high_aht_threshold_min(),
            slot_aht_margin_min: config.effective_slot_aht_margin_min(),
            drop_rate_margin_pct: config.effective_drop_rate_margin_pct(),
            top_root_causes: config.effective_top_root_causes(),
            top_agents: config.effective_top_agents(),
        }
    }
}

/// Every insight over one record set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insights {
    pub heatmap: AgentHourHeatmap,
    pub daily_volume: Vec<DailyAgentVolume>,
    pub aht_matrix: AhtMatrix,
    pub root_causes: Vec<RootCause>,
    pub matrix: InsightsMatrix,
    pub alerts: Vec<Alert>,
}

#[instrument(skip_all, fields(record_count = records.len()))]
pub fn operational_insights(records: &[CallRecord], options: &InsightOptions) -> Insights {
    let matrix = aht_matrix(records);
    let root_causes = matrix.top_causes(options.high_aht_threshold_min, options.top_root_causes);
    Insights {
        heatmap: agent_hour_heatmap(records),
        daily_volume: daily_agent_volume(records, options.top_agents),
        aht_matrix: matrix,
        root_causes,
        matrix: insights_matrix(records),
        alerts: executive_alerts(records, options),
    }
}
