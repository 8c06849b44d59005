//! JSON Export
//!
//! Writes the selected period's summary to a JSON file.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Local};
use serde::Serialize;

use super::ExportError;
use crate::data::ReportPeriod;

#[derive(Serialize)]
struct ExportableSummary {
    period: ReportPeriod,
    exported_at: String,
    total_sales: u64,
    wastage_reduction: u32,
    stockout_reduction: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    overall_performance: Option<u32>,
}

impl ExportableSummary {
    fn new(period: ReportPeriod, now: &DateTime<Local>) -> Self {
        let summary = period.summary();
        Self {
            period,
            exported_at: now.to_rfc3339(),
            total_sales: summary.total_sales,
            wastage_reduction: summary.wastage_reduction,
            stockout_reduction: summary.stockout_reduction,
            overall_performance: summary.comparison(),
        }
    }
}

/// Write one period summary to JSON file
pub fn write_summary(
    path: &Path,
    period: ReportPeriod,
    now: &DateTime<Local>,
) -> Result<usize, ExportError> {
    let exportable = ExportableSummary::new(period, now);
    let json = serde_json::to_string_pretty(&exportable)?;

    let io_err = |source: std::io::Error| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };
    let mut file = File::create(path).map_err(io_err)?;
    file.write_all(json.as_bytes()).map_err(io_err)?;

    Ok(1)
}
