use callscope_analysis::filters::CallFilter;
use callscope_core::config::CallscopeConfig;
use callscope_core::errors::PipelineError;
use callscope_io::{load_table, LoadOptions};
use callscope_session::AnalysisSession;

use crate::args::SampleArgs;
use crate::output;

pub fn run(args: &SampleArgs, config: &CallscopeConfig) -> Result<(), PipelineError> {
    let table = load_table(&args.file, &LoadOptions::from(&config.ingest))?;
    let mut session = AnalysisSession::new(config);
    session.load_sample(table)?;
    output::present(&session, &CallFilter::from(&args.filter), config)
}
