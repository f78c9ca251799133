//! Period aggregation across several (machine, date) scopes.

use crate::core::aggregator::{self, StatusSummary};
use crate::errors::{AppError, AppResult};
use crate::models::{Scope, StatusEvent, StatusKind};
use serde::Serialize;

/// One scope's collaborator-resolved inputs.
///
/// Absorption already happened at the loader boundary: a scope with no
/// source file carries an empty event sequence, a failed sales lookup
/// carries 0.
#[derive(Debug, Clone)]
pub struct ScopeData {
    pub scope: Scope,
    pub events: Vec<StatusEvent>,
    pub sales: i64,
}

/// Range-level KPI set over the merged scopes.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodKpi {
    pub status_summary: StatusSummary,
    pub total_sales: i64,
    pub total_real_work_hours: f64,
    pub unit_price: f64,
}

/// One row of the per-status breakdown table.
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownRow {
    pub status: StatusKind,
    pub hours: f64,
    /// Share of a 24h-equivalent day.
    pub day_pct: f64,
    /// Share of powered-on time; `None` for the `PowerOff` row, whose
    /// duration is excluded from the denominator by construction.
    pub power_on_pct: Option<f64>,
}

/// Merge all scope inputs and derive the range KPIs.
///
/// Fails `NoSelection` on an empty scope set; everything else is total.
pub fn compute_period(inputs: &[ScopeData]) -> AppResult<PeriodKpi> {
    if inputs.is_empty() {
        return Err(AppError::NoSelection);
    }

    let merged: Vec<StatusEvent> = inputs
        .iter()
        .flat_map(|sd| sd.events.iter().cloned())
        .collect();

    let status_summary = aggregator::aggregate(&merged);
    let total_sales: i64 = inputs.iter().map(|sd| sd.sales).sum();
    let total_real_work_hours = status_summary.real_work_seconds() / 3600.0;

    let unit_price = if total_real_work_hours > 0.0 {
        total_sales as f64 / total_real_work_hours
    } else {
        0.0
    };

    Ok(PeriodKpi {
        status_summary,
        total_sales,
        total_real_work_hours,
        unit_price,
    })
}

/// Per-status breakdown rows in display order.
///
/// Both percent columns are division-guarded; a zero denominator yields 0.
pub fn breakdown(summary: &StatusSummary) -> Vec<BreakdownRow> {
    let power_on_hours = summary.real_work_seconds() / 3600.0;

    StatusKind::ALL
        .iter()
        .map(|&status| {
            let hours = summary.hours(status);
            let power_on_pct = if status.is_power_off() {
                None
            } else if power_on_hours > 0.0 {
                Some(hours / power_on_hours * 100.0)
            } else {
                Some(0.0)
            };

            BreakdownRow {
                status,
                hours,
                day_pct: hours / 24.0 * 100.0,
                power_on_pct,
            }
        })
        .collect()
}
