use crate::errors::{AppError, AppResult};
use crate::utils::date;
use chrono::NaiveDate;
use std::fmt;

/// A `(machine, date)` pair identifying one status log and one sales record.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Scope {
    pub machine_id: String,
    pub date: NaiveDate,
}

impl Scope {
    pub fn new(machine_id: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            machine_id: machine_id.into(),
            date,
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.machine_id, self.date)
    }
}

/// Expand a machine selection and an inclusive date range into scopes.
///
/// Validation happens here, before anything is loaded: an empty selection
/// fails `NoSelection`, an inverted range fails `InvalidRange`.
pub fn expand_scopes(
    machines: &[String],
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<Scope>> {
    if machines.is_empty() {
        return Err(AppError::NoSelection);
    }
    if start > end {
        return Err(AppError::InvalidRange { start, end });
    }

    let mut scopes = Vec::new();
    for machine in machines {
        for day in date::date_range(start, end) {
            scopes.push(Scope::new(machine.clone(), day));
        }
    }
    Ok(scopes)
}
