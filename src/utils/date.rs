use crate::errors::{AppError, AppResult};
use chrono::{Duration, NaiveDate};

/// Reports default to yesterday: the last fully logged day.
pub fn yesterday() -> NaiveDate {
    chrono::Local::now().date_naive() - Duration::days(1)
}

pub fn parse_date(s: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| AppError::InvalidDate(s.to_string()))
}

/// Inclusive list of days between start and end. Callers validate order.
pub fn date_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut out = Vec::new();
    let mut d = start;
    while d <= end {
        out.push(d);
        d += Duration::days(1);
    }
    out
}

/// `YYYYMMDD`, the naming scheme of the per-day log files.
pub fn compact(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}
