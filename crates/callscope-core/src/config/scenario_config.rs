//! Scenario simulator defaults.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ACW_TIME_MIN, DEFAULT_HOLD_TIME_MIN, DEFAULT_PEAK_LOAD, DEFAULT_UTILIZATION_PCT,
};

/// Defaults used to seed a baseline scenario.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScenarioConfig {
    /// Hold time per call in minutes. Default: 0.0.
    pub hold_time_min: Option<f64>,
    /// After-call work per call in minutes. Default: 1.0.
    pub after_call_work_min: Option<f64>,
    /// Agent utilization percent. Default: 85.0.
    pub utilization_pct: Option<f64>,
    /// Peak load multiplier. Default: 1.0.
    pub peak_load_factor: Option<f64>,
}

impl ScenarioConfig {
    pub fn effective_hold_time_min(&self) -> f64 {
        self.hold_time_min.unwrap_or(DEFAULT_HOLD_TIME_MIN)
    }

    pub fn effective_after_call_work_min(&self) -> f64 {
        self.after_call_work_min.unwrap_or(DEFAULT_ACW_TIME_MIN)
    }

    pub fn effective_utilization_pct(&self) -> f64 {
        self.utilization_pct.unwrap_or(DEFAULT_UTILIZATION_PCT)
    }

    pub fn effective_peak_load_factor(&self) -> f64 {
        self.peak_load_factor.unwrap_or(DEFAULT_PEAK_LOAD)
    }
}
