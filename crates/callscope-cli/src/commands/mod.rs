//! Subcommand dispatch.

mod analyze;
mod make_sample;
mod sample;
mod simulate;

use callscope_analysis::filters::CallFilter;
use callscope_core::config::CallscopeConfig;
use callscope_core::errors::PipelineError;

use crate::args::{Cli, Command, FilterArgs};

pub fn run(cli: Cli) -> Result<(), PipelineError> {
    let config = CallscopeConfig::load(&cli.config_root, Some(&cli.overrides()))?;
    match &cli.command {
        Command::Analyze(args) => analyze::run(args, &config),
        Command::Sample(args) => sample::run(args, &config),
        Command::Simulate(args) => simulate::run(args, &config),
        Command::MakeSample(args) => make_sample::run(args, &config),
    }
}

impl From<&FilterArgs> for CallFilter {
    fn from(args: &FilterArgs) -> Self {
        Self {
            date_from: args.from,
            date_to: args.to,
            agent_query: args.agent_filter.clone(),
        }
    }
}
