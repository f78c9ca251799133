//! Sales amount lookup.
//!
//! Every failure path here is absorbed: the aggregation core only ever sees
//! an integer amount. A scope with no matching row, a machine with no table,
//! or an unopenable database all resolve to 0, with the failure logged.

use super::pool::DbPool;
use crate::models::Scope;
use rusqlite::OptionalExtension;
use std::path::Path;
use tracing::warn;

pub struct SalesLookup {
    pool: Option<DbPool>,
}

impl SalesLookup {
    /// Open the sales database. An unopenable file is a lookup failure, not
    /// an error: every subsequent lookup resolves to 0.
    pub fn open(path: &Path) -> Self {
        let pool = match DbPool::open(path) {
            Ok(p) => Some(p),
            Err(e) => {
                warn!(
                    path = %path.display(),
                    error = %e,
                    "sales database unavailable; all lookups resolve to 0"
                );
                None
            }
        };
        Self { pool }
    }

    /// Resolve one scope to its sales amount, 0 when absent or failed.
    pub fn sale_for(&self, scope: &Scope) -> i64 {
        let Some(pool) = &self.pool else {
            return 0;
        };

        match query_sale(pool, scope) {
            Ok(Some(amount)) => amount,
            Ok(None) => 0,
            Err(e) => {
                warn!(
                    machine = %scope.machine_id,
                    date = %scope.date,
                    error = %e,
                    "sales lookup failed; counting 0"
                );
                0
            }
        }
    }
}

fn query_sale(pool: &DbPool, scope: &Scope) -> rusqlite::Result<Option<i64>> {
    // One table per machine; the machine id doubles as the table name.
    let sql = format!(
        "SELECT sale FROM \"{}\" WHERE date = ?1 LIMIT 1",
        scope.machine_id.replace('"', "\"\"")
    );
    let date_str = scope.date.format("%Y-%m-%d").to_string();

    pool.conn
        .query_row(&sql, [date_str], |row| row.get(0))
        .optional()
}
