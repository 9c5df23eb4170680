//! `callscope` binary.

mod args;
mod commands;
mod output;

use std::process::ExitCode;

use clap::Parser;

use callscope_core::errors::CallscopeErrorCode;
use callscope_core::tracing::init_tracing;

use crate::args::Cli;

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    match commands::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e.coded_string());
            ExitCode::FAILURE
        }
    }
}
