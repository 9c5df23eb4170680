use callscope_core::config::CallscopeConfig;
use callscope_core::errors::PipelineError;
use callscope_io::sample::{extract_sample, write_sample, SampleOptions};
use callscope_io::{load_table, LoadOptions};

use crate::args::MakeSampleArgs;

pub fn run(args: &MakeSampleArgs, config: &CallscopeConfig) -> Result<(), PipelineError> {
    let table = load_table(&args.file, &LoadOptions::from(&config.ingest))?;
    let defaults = SampleOptions::default();
    let options = SampleOptions {
        rows: args.rows.unwrap_or(defaults.rows),
        seed: args.seed.unwrap_or(defaults.seed),
    };
    let sample = extract_sample(&table, &options);
    write_sample(&sample, &args.out)?;
    println!(
        "Sample data saved to {} with {} rows.",
        args.out.display(),
        sample.row_count()
    );
    Ok(())
}
