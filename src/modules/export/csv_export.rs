//! CSV Export
//!
//! Writes one row per report period.

use std::path::Path;

use super::ExportError;
use crate::data::ReportPeriod;

/// Write period summaries to CSV file
pub fn write_summaries(path: &Path, periods: &[ReportPeriod]) -> Result<usize, ExportError> {
    let mut wtr = csv::Writer::from_path(path)?;

    // Write header
    wtr.write_record([
        "period",
        "total_sales",
        "wastage_reduction",
        "stockout_reduction",
        "overall_performance",
    ])?;

    // Write data rows
    for period in periods {
        let summary = period.summary();
        wtr.write_record([
            period.key().to_string(),
            summary.total_sales.to_string(),
            summary.wastage_reduction.to_string(),
            summary.stockout_reduction.to_string(),
            summary
                .comparison()
                .map(|c| c.to_string())
                .unwrap_or_default(),
        ])?;
    }

    wtr.flush().map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(periods.len())
}
