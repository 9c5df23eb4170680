//! Top-level Callscope configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ExportConfig, IngestConfig, InsightsConfig, ScenarioConfig};
use crate::errors::ConfigError;

/// Project config file name, looked up in the working root.
pub const PROJECT_CONFIG_FILE: &str = "callscope.toml";

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`CALLSCOPE_*`)
/// 3. Project config (`callscope.toml` in the working root)
/// 4. User config (`~/.callscope/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CallscopeConfig {
    pub ingest: IngestConfig,
    pub analysis: AnalysisConfig,
    pub insights: InsightsConfig,
    pub scenario: ScenarioConfig,
    pub export: ExportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub sheet_name: Option<String>,
    pub delimiter: Option<char>,
    pub anomaly_limit: Option<usize>,
    pub top_agents: Option<usize>,
    pub output_dir: Option<PathBuf>,
}

impl CallscopeConfig {
    /// Load configuration with layered resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Lowest priority: user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &CallscopeConfig) -> Result<(), ConfigError> {
        if let Some(ref sheet) = config.ingest.sheet_name {
            if sheet.trim().is_empty() {
                return Err(invalid("ingest.sheet_name", "must not be empty"));
            }
        }
        if let Some(d) = config.ingest.delimiter {
            if !d.is_ascii() || d == '"' || d == '\n' || d == '\r' {
                return Err(invalid(
                    "ingest.delimiter",
                    "must be a single ASCII character other than a quote or newline",
                ));
            }
        }
        if config.analysis.placeholder_agent_pool == Some(0) {
            return Err(invalid("analysis.placeholder_agent_pool", "must be greater than 0"));
        }
        if config.analysis.anomaly_limit == Some(0) {
            return Err(invalid("analysis.anomaly_limit", "must be greater than 0"));
        }
        check_non_negative(
            "insights.high_aht_threshold_min",
            config.insights.high_aht_threshold_min,
        )?;
        check_non_negative("insights.slot_aht_margin_min", config.insights.slot_aht_margin_min)?;
        check_non_negative("insights.drop_rate_margin_pct", config.insights.drop_rate_margin_pct)?;
        check_non_negative("scenario.hold_time_min", config.scenario.hold_time_min)?;
        check_non_negative("scenario.after_call_work_min", config.scenario.after_call_work_min)?;
        check_non_negative("scenario.peak_load_factor", config.scenario.peak_load_factor)?;
        if let Some(u) = config.scenario.utilization_pct {
            if !(0.0..=100.0).contains(&u) {
                return Err(invalid("scenario.utilization_pct", "must be between 0 and 100"));
            }
        }
        Ok(())
    }

    /// Returns the user config path: `~/.callscope/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        dirs_path().map(|d| d.join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut CallscopeConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CallscopeConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut CallscopeConfig, other: &CallscopeConfig) {
        // Ingest
        if other.ingest.sheet_name.is_some() {
            base.ingest.sheet_name = other.ingest.sheet_name.clone();
        }
        if other.ingest.delimiter.is_some() {
            base.ingest.delimiter = other.ingest.delimiter;
        }

        // Analysis
        if other.analysis.anomaly_limit.is_some() {
            base.analysis.anomaly_limit = other.analysis.anomaly_limit;
        }
        if other.analysis.placeholder_agent_pool.is_some() {
            base.analysis.placeholder_agent_pool = other.analysis.placeholder_agent_pool;
        }
        if other.analysis.unknown_agent_label.is_some() {
            base.analysis.unknown_agent_label = other.analysis.unknown_agent_label.clone();
        }

        // Insights
        if other.insights.high_aht_threshold_min.is_some() {
            base.insights.high_aht_threshold_min = other.insights.high_aht_threshold_min;
        }
        if other.insights.slot_aht_margin_min.is_some() {
            base.insights.slot_aht_margin_min = other.insights.slot_aht_margin_min;
        }
        if other.insights.drop_rate_margin_pct.is_some() {
            base.insights.drop_rate_margin_pct = other.insights.drop_rate_margin_pct;
        }
        if other.insights.top_root_causes.is_some() {
            base.insights.top_root_causes = other.insights.top_root_causes;
        }
        if other.insights.top_agents.is_some() {
            base.insights.top_agents = other.insights.top_agents;
        }

        // Scenario
        if other.scenario.hold_time_min.is_some() {
            base.scenario.hold_time_min = other.scenario.hold_time_min;
        }
        if other.scenario.after_call_work_min.is_some() {
            base.scenario.after_call_work_min = other.scenario.after_call_work_min;
        }
        if other.scenario.utilization_pct.is_some() {
            base.scenario.utilization_pct = other.scenario.utilization_pct;
        }
        if other.scenario.peak_load_factor.is_some() {
            base.scenario.peak_load_factor = other.scenario.peak_load_factor;
        }

        // Export
        if other.export.output_dir.is_some() {
            base.export.output_dir = other.export.output_dir.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `CALLSCOPE_INGEST_SHEET_NAME`, `CALLSCOPE_ANALYSIS_ANOMALY_LIMIT`, etc.
    fn apply_env_overrides(config: &mut CallscopeConfig) {
        if let Ok(val) = std::env::var("CALLSCOPE_INGEST_SHEET_NAME") {
            config.ingest.sheet_name = Some(val);
        }
        if let Ok(val) = std::env::var("CALLSCOPE_INGEST_DELIMITER") {
            let mut chars = val.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                config.ingest.delimiter = Some(c);
            }
        }
        if let Ok(val) = std::env::var("CALLSCOPE_ANALYSIS_ANOMALY_LIMIT") {
            if let Ok(v) = val.parse::<usize>() {
                config.analysis.anomaly_limit = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CALLSCOPE_INSIGHTS_HIGH_AHT_THRESHOLD_MIN") {
            if let Ok(v) = val.parse::<f64>() {
                config.insights.high_aht_threshold_min = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CALLSCOPE_SCENARIO_UTILIZATION_PCT") {
            if let Ok(v) = val.parse::<f64>() {
                config.scenario.utilization_pct = Some(v);
            }
        }
        if let Ok(val) = std::env::var("CALLSCOPE_EXPORT_OUTPUT_DIR") {
            config.export.output_dir = Some(PathBuf::from(val));
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CallscopeConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.sheet_name {
            config.ingest.sheet_name = Some(v.clone());
        }
        if let Some(v) = cli.delimiter {
            config.ingest.delimiter = Some(v);
        }
        if let Some(v) = cli.anomaly_limit {
            config.analysis.anomaly_limit = Some(v);
        }
        if let Some(v) = cli.top_agents {
            config.insights.top_agents = Some(v);
        }
        if let Some(ref v) = cli.output_dir {
            config.export.output_dir = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn check_non_negative(field: &str, value: Option<f64>) -> Result<(), ConfigError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => {
            Err(invalid(field, "must be a finite, non-negative number"))
        }
        _ => Ok(()),
    }
}

/// Returns the user-level config directory: `~/.callscope/`.
fn dirs_path() -> Option<PathBuf> {
    home_dir().map(|h| h.join(".callscope"))
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
