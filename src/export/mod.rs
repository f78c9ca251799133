//! Period report export (CSV / JSON).

mod fs_utils;
mod writers;

pub use writers::{write_csv, write_json};

use crate::core::period::{BreakdownRow, PeriodKpi};
use crate::errors::AppResult;
use crate::ui::messages::success;
use chrono::NaiveDate;
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Everything a range report produces, in one serializable bundle.
#[derive(Debug, Serialize)]
pub struct PeriodReport {
    pub machines: Vec<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub kpi: PeriodKpi,
    pub breakdown: Vec<BreakdownRow>,
}

pub fn export_report(
    report: &PeriodReport,
    format: &ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => write_csv(report, path)?,
        ExportFormat::Json => write_json(report, path)?,
    }

    success(format!("Export completed: {}", path.display()));
    Ok(())
}
