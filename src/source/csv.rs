//! CSV parsing for the per-day machine status logs.
//!
//! Log columns, as written by the controllers: `日時` (timestamp),
//! `ステータス` (status label), `経過秒数` (elapsed seconds).

use crate::errors::{AppError, AppResult};
use crate::models::{StatusEvent, StatusKind};
use chrono::NaiveDateTime;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(rename = "日時")]
    timestamp: String,
    #[serde(rename = "ステータス")]
    status: String,
    /// Parsed leniently: missing or malformed values count as 0 seconds.
    #[serde(rename = "経過秒数", default)]
    elapsed: Option<String>,
}

/// Timestamp formats observed in the dataset (dashed and slashed, with and
/// without seconds).
const TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M",
];

fn parse_timestamp(s: &str) -> AppResult<NaiveDateTime> {
    let trimmed = s.trim();
    for fmt in TIMESTAMP_FORMATS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(trimmed, fmt) {
            return Ok(ts);
        }
    }
    Err(AppError::InvalidDate(s.to_string()))
}

fn parse_elapsed(raw: Option<&str>) -> f64 {
    raw.and_then(|s| s.trim().parse::<f64>().ok())
        .unwrap_or(0.0)
        .max(0.0)
}

/// Read one log file into an ordered event sequence.
pub fn read_status_log(path: &Path) -> AppResult<Vec<StatusEvent>> {
    let mut reader = csv::Reader::from_path(path)?;

    let mut events = Vec::new();
    for record in reader.deserialize() {
        let raw: RawRecord = record?;

        events.push(StatusEvent::new(
            parse_timestamp(&raw.timestamp)?,
            StatusKind::from_label(&raw.status),
            parse_elapsed(raw.elapsed.as_deref()),
        ));
    }

    Ok(events)
}
