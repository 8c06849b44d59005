//! Export Module
//!
//! Writes report summaries to disk.
//!
//! - `:export json` → the selected period's summary
//! - `:export csv`  → every period, one row each
//! - Files saved to the configured export dir (default: <data dir>/exports)

mod csv_export;
mod json_export;

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use thiserror::Error;
use tracing::{info, warn};

use crate::core::{Action, NotifyLevel};
use crate::data::ReportPeriod;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create export directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Summary of a finished export
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportOutcome {
    pub path: PathBuf,
    pub rows: usize,
}

/// Default export directory under the platform data dir
pub fn default_export_dir() -> PathBuf {
    crate::config::data_dir()
        .map(|dir| dir.join("exports"))
        .unwrap_or_else(|| PathBuf::from(".greengarden").join("exports"))
}

/// Generate a timestamped filename
fn generate_filename(prefix: &str, extension: &str, now: &DateTime<Local>) -> String {
    let timestamp = now.format("%Y-%m-%d-%H%M%S");
    format!("{}-{}.{}", prefix, timestamp, extension)
}

/// Write the report summaries in `format` into `dir`.
pub fn export_reports(
    format: ExportFormat,
    period: ReportPeriod,
    dir: &Path,
    now: DateTime<Local>,
) -> Result<ExportOutcome, ExportError> {
    fs::create_dir_all(dir).map_err(|source| ExportError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    match format {
        ExportFormat::Json => {
            let filename = generate_filename(
                &format!("report-{}", period.key()),
                format.extension(),
                &now,
            );
            let path = dir.join(filename);
            let rows = json_export::write_summary(&path, period, &now)?;
            Ok(ExportOutcome { path, rows })
        }
        ExportFormat::Csv => {
            let filename = generate_filename("reports", format.extension(), &now);
            let path = dir.join(filename);
            let rows = csv_export::write_summaries(&path, &ReportPeriod::ALL)?;
            Ok(ExportOutcome { path, rows })
        }
    }
}

/// Run an export and describe the result for the status line
pub fn export_action(format: ExportFormat, period: ReportPeriod, dir: &Path) -> Action {
    match export_reports(format, period, dir, Local::now()) {
        Ok(outcome) => {
            info!(path = %outcome.path.display(), rows = outcome.rows, "report exported");
            Action::Notify(
                format!("Exported {} rows to {}", outcome.rows, outcome.path.display()),
                NotifyLevel::Info,
            )
        }
        Err(err) => {
            warn!(error = %err, "report export failed");
            Action::Notify(format!("Export failed: {}", err), NotifyLevel::Error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap()
    }

    #[test]
    fn test_generate_filename() {
        assert_eq!(
            generate_filename("reports", "csv", &fixed_now()),
            "reports-2024-03-09-140507.csv"
        );
    }

    #[test]
    fn test_export_json_selected_period() {
        let dir = tempfile::tempdir().unwrap();
        let outcome =
            export_reports(ExportFormat::Json, ReportPeriod::Monthly, dir.path(), fixed_now())
                .unwrap();
        assert_eq!(outcome.rows, 1);
        assert!(outcome
            .path
            .ends_with("report-monthly-2024-03-09-140507.json"));

        let raw = fs::read_to_string(&outcome.path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value["period"], "monthly");
        assert_eq!(value["total_sales"], 5_000_000);
        assert_eq!(value["overall_performance"], 10);
    }

    #[test]
    fn test_export_csv_all_periods() {
        let dir = tempfile::tempdir().unwrap();
        let outcome =
            export_reports(ExportFormat::Csv, ReportPeriod::Weekly, dir.path(), fixed_now())
                .unwrap();
        assert_eq!(outcome.rows, 3);

        let mut reader = csv::Reader::from_path(&outcome.path).unwrap();
        let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][0], "weekly");
        assert_eq!(&rows[2][1], "60000000");
        assert_eq!(&rows[2][4], "8");
    }

    #[test]
    fn test_export_into_file_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, b"x").unwrap();
        let action = export_action(ExportFormat::Csv, ReportPeriod::Weekly, &blocker.join("sub"));
        assert!(matches!(action, Action::Notify(_, NotifyLevel::Error)));
    }
}
