//! Daily KPI calculation for a single (machine, date) scope.

use crate::core::aggregator::StatusSummary;
use crate::models::StatusEvent;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

pub const DEFAULT_START_HOUR: u32 = 5;
pub const DEFAULT_BASE_WORK_HOURS: f64 = 16.5;

/// Per-report configuration for the daily calculation.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub machine_id: String,
    pub report_date: NaiveDate,
    pub sales_amount: i64,
    /// Hour of day the 24h log window starts at.
    pub start_hour: u32,
    /// Expected daily operating hours the idle figures are measured against.
    pub base_work_hours: f64,
}

impl ReportConfig {
    pub fn new(machine_id: impl Into<String>, report_date: NaiveDate, sales_amount: i64) -> Self {
        Self {
            machine_id: machine_id.into(),
            report_date,
            sales_amount,
            start_hour: DEFAULT_START_HOUR,
            base_work_hours: DEFAULT_BASE_WORK_HOURS,
        }
    }
}

/// Single-day KPI set.
///
/// `idle_seconds` and `idle_rate_pct` are intentionally unclamped: when real
/// work exceeds the configured base hours they go negative.
#[derive(Debug, Clone, Serialize)]
pub struct DailyKpi {
    pub real_work_seconds: f64,
    pub idle_seconds: f64,
    pub idle_rate_pct: f64,
    pub unit_price: f64,
    pub power_on_time: Option<NaiveDateTime>,
    pub power_off_time: Option<NaiveDateTime>,
    pub no_operation: bool,
}

impl DailyKpi {
    pub fn real_work_hours(&self) -> f64 {
        self.real_work_seconds / 3600.0
    }

    pub fn idle_hours(&self) -> f64 {
        self.idle_seconds / 3600.0
    }
}

/// Compute the daily KPI set from an ordered event sequence and its summary.
///
/// Total for every input: zero activity sets `no_operation` and yields
/// defined values everywhere (guarded divisions return 0, never NaN).
pub fn compute_daily(
    events: &[StatusEvent],
    summary: &StatusSummary,
    config: &ReportConfig,
    sales_amount: i64,
) -> DailyKpi {
    let real_work_seconds = summary.real_work_seconds();
    let base_seconds = config.base_work_hours * 3600.0;

    let idle_seconds = base_seconds - real_work_seconds;
    let idle_rate_pct = if config.base_work_hours > 0.0 {
        idle_seconds / base_seconds * 100.0
    } else {
        0.0
    };

    let unit_price = if real_work_seconds > 0.0 {
        sales_amount as f64 / (real_work_seconds / 3600.0)
    } else {
        0.0
    };

    DailyKpi {
        real_work_seconds,
        idle_seconds,
        idle_rate_pct,
        unit_price,
        power_on_time: power_on_time(events),
        power_off_time: power_off_time(events),
        no_operation: real_work_seconds <= 0.0,
    }
}

/// First event whose predecessor is `PowerOff` and which itself is not.
/// `None` when the sequence never leaves the powered-off state (or never
/// contains it at all).
fn power_on_time(events: &[StatusEvent]) -> Option<NaiveDateTime> {
    events
        .windows(2)
        .find(|w| w[0].status.is_power_off() && !w[1].status.is_power_off())
        .map(|w| w[1].timestamp)
}

/// Last event that is `PowerOff` with a non-`PowerOff` predecessor.
fn power_off_time(events: &[StatusEvent]) -> Option<NaiveDateTime> {
    events
        .windows(2)
        .filter(|w| !w[0].status.is_power_off() && w[1].status.is_power_off())
        .next_back()
        .map(|w| w[1].timestamp)
}
