use super::status_kind::StatusKind;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One status-change record from a machine log.
///
/// Events form a chronologically ordered sequence per scope; each event's
/// implicit start offset is the cumulative duration of all prior events.
#[derive(Debug, Clone, Serialize)]
pub struct StatusEvent {
    pub timestamp: NaiveDateTime,
    pub status: StatusKind,
    /// Seconds spent in this status. Never negative; the loader clamps
    /// missing or malformed values to 0.
    pub duration_seconds: f64,
}

impl StatusEvent {
    pub fn new(timestamp: NaiveDateTime, status: StatusKind, duration_seconds: f64) -> Self {
        Self {
            timestamp,
            status,
            duration_seconds: duration_seconds.max(0.0),
        }
    }

    pub fn duration_hours(&self) -> f64 {
        self.duration_seconds / 3600.0
    }
}
