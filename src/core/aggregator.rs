//! Status aggregation: reduces an ordered event sequence to per-status
//! duration totals, plus the cumulative start offsets timeline consumers need.

use crate::models::{StatusEvent, StatusKind};
use serde::Serialize;
use std::collections::BTreeMap;

/// Total seconds per status over an event collection.
///
/// Every enumerated kind is always present, defaulting to 0, so consumers
/// never have to treat "absent" and "zero" differently.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSummary {
    totals: BTreeMap<StatusKind, f64>,
}

impl StatusSummary {
    pub fn new() -> Self {
        let totals = StatusKind::ALL.iter().map(|k| (*k, 0.0)).collect();
        Self { totals }
    }

    pub fn get(&self, kind: StatusKind) -> f64 {
        self.totals.get(&kind).copied().unwrap_or(0.0)
    }

    pub fn hours(&self, kind: StatusKind) -> f64 {
        self.get(kind) / 3600.0
    }

    /// Grand total in seconds across all kinds.
    pub fn total(&self) -> f64 {
        self.totals.values().sum()
    }

    /// Total minus `PowerOff`, in seconds.
    pub fn real_work_seconds(&self) -> f64 {
        self.total() - self.get(StatusKind::PowerOff)
    }

    fn add(&mut self, kind: StatusKind, seconds: f64) {
        *self.totals.entry(kind).or_insert(0.0) += seconds;
    }
}

impl Default for StatusSummary {
    fn default() -> Self {
        Self::new()
    }
}

/// Group events by status, summing durations. Empty input yields an
/// all-zero summary. Pure; the input is read, never mutated.
pub fn aggregate(events: &[StatusEvent]) -> StatusSummary {
    let mut summary = StatusSummary::new();
    for ev in events {
        summary.add(ev.status, ev.duration_seconds);
    }
    summary
}

/// Tag each event with its start offset in seconds: the cumulative sum of
/// all preceding durations within the same scope.
pub fn with_offsets(events: &[StatusEvent]) -> Vec<(&StatusEvent, f64)> {
    let mut start = 0.0;
    events
        .iter()
        .map(|ev| {
            let tagged = (ev, start);
            start += ev.duration_seconds;
            tagged
        })
        .collect()
}
