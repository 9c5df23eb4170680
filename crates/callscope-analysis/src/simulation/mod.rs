//! Scenario simulator: a stateless formula from operational levers to
//! projected calls handled, drops, and customer satisfaction.

pub mod types;

pub use types::{ScenarioParams, ScenarioProjection};

use tracing::debug;

use callscope_core::constants::{
    LOW_UTILIZATION_THRESHOLD, MIN_PROJECTED_SATISFACTION, SHIFT_MINUTES,
};
use callscope_core::errors::ScenarioError;

fn check(name: &'static str, value: f64) -> Result<(), ScenarioError> {
    if !value.is_finite() {
        return Err(ScenarioError::InvalidParameter {
            name,
            message: format!("must be finite, got {value}"),
        });
    }
    if value < 0.0 {
        return Err(ScenarioError::InvalidParameter {
            name,
            message: format!("must not be negative, got {value}"),
        });
    }
    Ok(())
}

/// Project KPIs for `params`.
///
/// ```text
/// effective_minutes_per_agent = 480 × utilization / 100
/// calls_per_agent             = effective_minutes / (AHT + hold + ACW)
/// total_calls                 = ⌊agents × calls_per_agent × peak_load⌋
/// projected_dropped           = ⌊total_calls × drop_rate / 100⌋
/// satisfaction_penalty        = 1.5·drop + 2·hold + ACW + (2 if utilization < 80)
/// projected_satisfaction      = max(60, 100 − penalty)
/// ```
pub fn simulate(params: &ScenarioParams) -> Result<ScenarioProjection, ScenarioError> {
    check("drop_rate_pct", params.drop_rate_pct)?;
    check("avg_handle_time_min", params.avg_handle_time_min)?;
    check("hold_time_min", params.hold_time_min)?;
    check("after_call_work_min", params.after_call_work_min)?;
    check("utilization_pct", params.utilization_pct)?;
    check("peak_load_factor", params.peak_load_factor)?;

    let handle_time = params.handle_time_min();
    if handle_time <= 0.0 {
        return Err(ScenarioError::DegenerateHandleTime { total: handle_time });
    }

    let effective_minutes_per_agent = SHIFT_MINUTES * (params.utilization_pct / 100.0);
    let calls_per_agent = effective_minutes_per_agent / handle_time;
    let total_calls =
        (f64::from(params.agent_count) * calls_per_agent * params.peak_load_factor).floor() as u64;
    let projected_dropped = (total_calls as f64 * params.drop_rate_pct / 100.0).floor() as u64;

    let mut satisfaction_penalty = params.drop_rate_pct * 1.5
        + params.hold_time_min * 2.0
        + params.after_call_work_min;
    if params.utilization_pct < LOW_UTILIZATION_THRESHOLD {
        satisfaction_penalty += 2.0;
    }
    let projected_satisfaction = (100.0 - satisfaction_penalty).max(MIN_PROJECTED_SATISFACTION);

    debug!(total_calls, projected_dropped, projected_satisfaction, "simulated scenario");
    Ok(ScenarioProjection {
        effective_minutes_per_agent,
        calls_per_agent,
        total_calls,
        projected_dropped,
        satisfaction_penalty,
        projected_satisfaction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> ScenarioParams {
        ScenarioParams {
            drop_rate_pct: 10.0,
            agent_count: 10,
            avg_handle_time_min: 5.0,
            hold_time_min: 0.0,
            after_call_work_min: 1.0,
            utilization_pct: 85.0,
            peak_load_factor: 1.0,
        }
    }

    #[test]
    fn reference_scenario() {
        let p = simulate(&params()).unwrap();
        assert!((p.effective_minutes_per_agent - 408.0).abs() < 1e-9);
        assert!((p.calls_per_agent - 68.0).abs() < 1e-9);
        assert_eq!(p.total_calls, 680);
        assert_eq!(p.projected_dropped, 68);
        assert_eq!(p.satisfaction_penalty, 16.0);
        assert_eq!(p.projected_satisfaction, 84.0);
    }

    #[test]
    fn low_utilization_penalty_and_floor() {
        let mut p = params();
        p.utilization_pct = 70.0;
        assert_eq!(simulate(&p).unwrap().satisfaction_penalty, 18.0);

        p.drop_rate_pct = 30.0;
        p.hold_time_min = 10.0;
        assert_eq!(simulate(&p).unwrap().projected_satisfaction, 60.0);
    }

    #[test]
    fn rejects_degenerate_and_invalid_inputs() {
        let mut p = params();
        p.avg_handle_time_min = 0.0;
        p.after_call_work_min = 0.0;
        assert_eq!(
            simulate(&p),
            Err(ScenarioError::DegenerateHandleTime { total: 0.0 })
        );

        let mut p = params();
        p.hold_time_min = -1.0;
        assert!(matches!(
            simulate(&p),
            Err(ScenarioError::InvalidParameter { name: "hold_time_min", .. })
        ));

        let mut p = params();
        p.peak_load_factor = f64::NAN;
        assert!(simulate(&p).is_err());
    }
}
