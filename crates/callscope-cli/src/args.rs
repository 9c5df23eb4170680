//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

use callscope_core::config::CliOverrides;
use callscope_core::types::TalkTimeUnit;

#[derive(Parser, Debug)]
#[command(name = "callscope", author, version, about = "Call-center log analytics", long_about = None)]
pub struct Cli {
    /// Directory searched for `callscope.toml`.
    #[arg(long, global = true, default_value = ".")]
    pub config_root: PathBuf,

    /// Spreadsheet sheet to read.
    #[arg(long, global = true)]
    pub sheet: Option<String>,

    /// Field delimiter for `.csv`/`.txt` files.
    #[arg(long, global = true)]
    pub delimiter: Option<char>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn overrides(&self) -> CliOverrides {
        let mut overrides = CliOverrides {
            sheet_name: self.sheet.clone(),
            delimiter: self.delimiter,
            ..CliOverrides::default()
        };
        match &self.command {
            Command::Analyze(a) => {
                overrides.top_agents = a.top;
                overrides.anomaly_limit = a.anomalies;
                overrides.output_dir = a.out.clone();
            }
            Command::Sample(s) => overrides.output_dir = s.out.clone(),
            Command::Simulate(_) | Command::MakeSample(_) => {}
        }
        overrides
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the full pipeline on an upload with an explicit column mapping.
    Analyze(AnalyzeArgs),
    /// Analyze a sample-data file using known column names.
    Sample(SampleArgs),
    /// Project KPIs for a what-if scenario.
    Simulate(SimulateArgs),
    /// Extract a reproducible sample dataset from a larger export.
    MakeSample(MakeSampleArgs),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum UnitArg {
    Minutes,
    Seconds,
}

impl From<UnitArg> for TalkTimeUnit {
    fn from(unit: UnitArg) -> Self {
        match unit {
            UnitArg::Minutes => TalkTimeUnit::Minutes,
            UnitArg::Seconds => TalkTimeUnit::Seconds,
        }
    }
}

#[derive(Args, Debug, Default, Clone)]
pub struct FilterArgs {
    /// First date to include (YYYY-MM-DD).
    #[arg(long)]
    pub from: Option<NaiveDate>,

    /// Last date to include (YYYY-MM-DD).
    #[arg(long)]
    pub to: Option<NaiveDate>,

    /// Case-insensitive substring of the agent name.
    #[arg(long = "agent-filter")]
    pub agent_filter: Option<String>,
}

#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    pub file: PathBuf,

    /// Combined date-time column, or the date column when `--time` is given.
    #[arg(long)]
    pub date: String,

    /// Time column, paired with `--date`.
    #[arg(long)]
    pub time: Option<String>,

    #[arg(long)]
    pub agent: String,

    #[arg(long)]
    pub outcome: String,

    #[arg(long = "talk-time")]
    pub talk_time: String,

    #[arg(long = "talk-time-unit", value_enum, default_value_t = UnitArg::Minutes)]
    pub talk_time_unit: UnitArg,

    #[command(flatten)]
    pub filter: FilterArgs,

    /// Agents shown in the daily volume view.
    #[arg(long)]
    pub top: Option<usize>,

    /// Anomalies listed.
    #[arg(long)]
    pub anomalies: Option<usize>,

    /// Export directory.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SampleArgs {
    pub file: PathBuf,

    #[command(flatten)]
    pub filter: FilterArgs,

    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    /// Drop rate, percent.
    #[arg(long = "drop-rate")]
    pub drop_rate: f64,

    #[arg(long)]
    pub agents: u32,

    /// Average talk time per call, minutes.
    #[arg(long)]
    pub aht: f64,

    /// Hold time per call, minutes.
    #[arg(long)]
    pub hold: Option<f64>,

    /// After-call work per call, minutes.
    #[arg(long)]
    pub acw: Option<f64>,

    /// Utilization, percent.
    #[arg(long)]
    pub utilization: Option<f64>,

    #[arg(long = "peak-load")]
    pub peak_load: Option<f64>,
}

#[derive(Args, Debug)]
pub struct MakeSampleArgs {
    pub file: PathBuf,

    /// Destination CSV.
    #[arg(long)]
    pub out: PathBuf,

    #[arg(long)]
    pub rows: Option<usize>,

    #[arg(long)]
    pub seed: Option<u64>,
}
