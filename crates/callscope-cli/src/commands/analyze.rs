use callscope_analysis::filters::CallFilter;
use callscope_analysis::ColumnMapping;
use callscope_core::config::CallscopeConfig;
use callscope_core::errors::PipelineError;
use callscope_io::{load_table, LoadOptions};
use callscope_session::AnalysisSession;

use crate::args::AnalyzeArgs;
use crate::output;

fn mapping(args: &AnalyzeArgs) -> ColumnMapping {
    let base = match &args.time {
        Some(time) => ColumnMapping::split(&args.date, time),
        None => ColumnMapping::combined(&args.date),
    };
    base.with_agent(&args.agent)
        .with_outcome(&args.outcome)
        .with_talk_time(&args.talk_time, args.talk_time_unit.into())
}

pub fn run(args: &AnalyzeArgs, config: &CallscopeConfig) -> Result<(), PipelineError> {
    let table = load_table(&args.file, &LoadOptions::from(&config.ingest))?;
    let mut session = AnalysisSession::new(config);
    session.load_source(table);
    session.confirm_mapping(mapping(args))?;
    output::present(&session, &CallFilter::from(&args.filter), config)
}
