//! CSV export of any [`Tabular`] report.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, instrument};

use callscope_analysis::report::{to_csv_string, Tabular};
use callscope_core::errors::ExportError;

fn write_err(path: &Path, e: std::io::Error) -> ExportError {
    ExportError::Write {
        path: path.display().to_string(),
        message: e.to_string(),
    }
}

/// Write `report` to `<dir>/<report name>.csv`, creating `dir` if needed.
pub fn write_report(report: &dyn Tabular, dir: &Path) -> Result<PathBuf, ExportError> {
    fs::create_dir_all(dir).map_err(|e| write_err(dir, e))?;
    let path = dir.join(format!("{}.csv", report.name()));
    write_report_to(report, &path)?;
    Ok(path)
}

/// Write `report` to an explicit file path.
#[instrument(skip_all, fields(report = report.name(), path = %path.display()))]
pub fn write_report_to(report: &dyn Tabular, path: &Path) -> Result<(), ExportError> {
    let body = to_csv_string(report)?;
    fs::write(path, body.as_bytes()).map_err(|e| write_err(path, e))?;
    debug!(bytes = body.len(), "wrote export");
    Ok(())
}
