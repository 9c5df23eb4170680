use callscope_analysis::simulate;
use callscope_analysis::simulation::ScenarioParams;
use callscope_core::config::CallscopeConfig;
use callscope_core::errors::PipelineError;

use crate::args::SimulateArgs;
use crate::output;

pub fn run(args: &SimulateArgs, config: &CallscopeConfig) -> Result<(), PipelineError> {
    let defaults = &config.scenario;
    let params = ScenarioParams {
        drop_rate_pct: args.drop_rate,
        agent_count: args.agents,
        avg_handle_time_min: args.aht,
        hold_time_min: args.hold.unwrap_or(defaults.effective_hold_time_min()),
        after_call_work_min: args.acw.unwrap_or(defaults.effective_after_call_work_min()),
        utilization_pct: args.utilization.unwrap_or(defaults.effective_utilization_pct()),
        peak_load_factor: args.peak_load.unwrap_or(defaults.effective_peak_load_factor()),
    };
    let projection = simulate(&params)?;
    output::print_projection(&projection);
    Ok(())
}
