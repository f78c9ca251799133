use super::PeriodReport;
use crate::errors::AppResult;
use csv::Writer;
use std::fs;
use std::path::Path;

/// CSV: the breakdown table plus a trailing totals row.
pub fn write_csv(report: &PeriodReport, path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["status", "hours", "day_pct", "power_on_pct"])?;

    for row in &report.breakdown {
        wtr.write_record(&[
            row.status.label().to_string(),
            format!("{:.2}", row.hours),
            format!("{:.2}", row.day_pct),
            row.power_on_pct
                .map(|p| format!("{:.2}", p))
                .unwrap_or_default(),
        ])?;
    }

    wtr.write_record(&[
        "total_real_work".to_string(),
        format!("{:.2}", report.kpi.total_real_work_hours),
        String::new(),
        String::new(),
    ])?;

    wtr.flush()?;
    Ok(())
}

/// JSON: the full report bundle, pretty-printed.
pub fn write_json(report: &PeriodReport, path: &Path) -> AppResult<()> {
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| crate::errors::AppError::Export(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
