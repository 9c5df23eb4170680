//! Scenario simulator input and output types.

use serde::{Deserialize, Serialize};

use callscope_core::config::ScenarioConfig;

use crate::aggregation::OverviewStats;

/// Operational levers of a what-if scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioParams {
    /// Percent of calls dropped.
    pub drop_rate_pct: f64,
    pub agent_count: u32,
    /// Average talk time per call, minutes.
    pub avg_handle_time_min: f64,
    pub hold_time_min: f64,
    pub after_call_work_min: f64,
    /// Percent of the shift spent on calls.
    pub utilization_pct: f64,
    /// Volume multiplier for peak periods.
    pub peak_load_factor: f64,
}

impl ScenarioParams {
    /// Seed a scenario from current statistics: drop rate, agent headcount and
    /// mean answered talk time, with the configured hold/ACW/utilization/peak
    /// defaults.
    pub fn baseline(stats: &OverviewStats, config: &ScenarioConfig) -> Self {
        Self {
            drop_rate_pct: stats.drop_rate,
            agent_count: u32::try_from(stats.unique_agents).unwrap_or(u32::MAX),
            avg_handle_time_min: stats.talk_time.map_or(0.0, |t| t.mean),
            hold_time_min: config.effective_hold_time_min(),
            after_call_work_min: config.effective_after_call_work_min(),
            utilization_pct: config.effective_utilization_pct(),
            peak_load_factor: config.effective_peak_load_factor(),
        }
    }

    /// Handle time per call: talk + hold + after-call work.
    pub fn handle_time_min(&self) -> f64 {
        self.avg_handle_time_min + self.hold_time_min + self.after_call_work_min
    }
}

/// Projected KPIs for one scenario.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioProjection {
    pub effective_minutes_per_agent: f64,
    pub calls_per_agent: f64,
    pub total_calls: u64,
    pub projected_dropped: u64,
    pub satisfaction_penalty: f64,
    /// Percent, floored at 60.
    pub projected_satisfaction: f64,
}
