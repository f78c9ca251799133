//! Status-log source loader.
//!
//! Resolves a `(machine, date)` scope to its ordered event sequence from
//! `<dataset_dir>/<machine>/<YYYYMMDD>.csv`. Loaded scopes are held in a
//! TTL-bounded cache, so repeated reports within the TTL window reuse the
//! parsed events; after that they are re-read from disk.

mod csv;

use crate::errors::{AppError, AppResult};
use crate::models::{Scope, StatusEvent};
use crate::utils::date;
use moka::sync::Cache;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

pub struct SourceLoader {
    dataset_dir: PathBuf,
    cache: Cache<Scope, Arc<Vec<StatusEvent>>>,
}

impl SourceLoader {
    pub fn new(dataset_dir: &Path, ttl_secs: u64) -> Self {
        Self {
            dataset_dir: dataset_dir.to_path_buf(),
            cache: Cache::builder()
                .time_to_live(Duration::from_secs(ttl_secs.max(1)))
                .build(),
        }
    }

    /// Path of the log file backing a scope.
    pub fn scope_path(&self, scope: &Scope) -> PathBuf {
        self.dataset_dir
            .join(&scope.machine_id)
            .join(format!("{}.csv", date::compact(scope.date)))
    }

    /// Load a scope's event sequence, failing when no log file exists.
    /// Used by the daily report, which surfaces the missing file to the user.
    pub fn load(&self, scope: &Scope) -> AppResult<Arc<Vec<StatusEvent>>> {
        if let Some(events) = self.cache.get(scope) {
            debug!(scope = %scope, "source cache hit");
            return Ok(events);
        }

        let path = self.scope_path(scope);
        if !path.exists() {
            return Err(AppError::SourceNotFound {
                machine: scope.machine_id.clone(),
                date: scope.date,
                path: path.to_string_lossy().to_string(),
            });
        }

        let events = Arc::new(csv::read_status_log(&path)?);
        self.cache.insert(scope.clone(), Arc::clone(&events));
        Ok(events)
    }

    /// Load a scope's event sequence, absorbing any failure to an empty
    /// sequence. Used by period aggregation, where a missing or unreadable
    /// day must not fail the whole range.
    pub fn load_or_empty(&self, scope: &Scope) -> Arc<Vec<StatusEvent>> {
        match self.load(scope) {
            Ok(events) => events,
            Err(AppError::SourceNotFound { path, .. }) => {
                debug!(scope = %scope, path = %path, "no status log; contributing empty sequence");
                Arc::new(Vec::new())
            }
            Err(e) => {
                warn!(scope = %scope, error = %e, "source load failed; contributing empty sequence");
                Arc::new(Vec::new())
            }
        }
    }
}
