//! Configuration system for Callscope.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod analysis_config;
pub mod callscope_config;
pub mod export_config;
pub mod ingest_config;
pub mod insights_config;
pub mod scenario_config;

pub use analysis_config::AnalysisConfig;
pub use callscope_config::{CallscopeConfig, CliOverrides};
pub use export_config::ExportConfig;
pub use ingest_config::IngestConfig;
pub use insights_config::InsightsConfig;
pub use scenario_config::ScenarioConfig;
