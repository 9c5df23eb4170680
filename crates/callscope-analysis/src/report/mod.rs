//! Tabular reports: every analysis result that exports as a CSV table.
//!
//! A report is a borrowed view over a result (`RecordsReport(&records)`), so the
//! same data can be rendered without cloning it.

pub mod tables;

pub use tables::{
    AgentPerformanceReport, AhtMatrixReport, AlertsReport, AnomaliesReport, DailyReport,
    DailyVolumeReport, HeatmapReport, HistoryReport, HourlyReport, InsightsMatrixReport,
    OverviewReport, RecordsReport, RootCauseReport, ScenarioReport,
};

use callscope_core::errors::ExportError;

/// A result that renders as a header row plus data rows.
pub trait Tabular {
    /// Stable report name, also the export file stem.
    fn name(&self) -> &'static str;
    fn headers(&self) -> Vec<String>;
    fn rows(&self) -> Vec<Vec<String>>;
}

/// Render a report as UTF-8, comma-delimited CSV with a header row.
pub fn to_csv_string(report: &dyn Tabular) -> Result<String, ExportError> {
    let encode_err = |e: &dyn std::fmt::Display| ExportError::Encode {
        table: report.name().to_string(),
        message: e.to_string(),
    };

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());
    writer.write_record(report.headers()).map_err(|e| encode_err(&e))?;
    for row in report.rows() {
        writer.write_record(&row).map_err(|e| encode_err(&e))?;
    }
    let bytes = writer.into_inner().map_err(|e| encode_err(&e))?;
    String::from_utf8(bytes).map_err(|e| encode_err(&e))
}

/// Shortest representation that parses back to the same value. Exports keep
/// full precision; rounding belongs to console output.
pub(crate) fn fmt_f64(value: f64) -> String {
    value.to_string()
}

pub(crate) fn fmt_opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}
