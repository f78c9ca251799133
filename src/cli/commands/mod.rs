pub mod analysis;
pub mod config;
pub mod daily;
pub mod export;
pub mod init;

use crate::config::Config;
use crate::core::period::ScopeData;
use crate::db::SalesLookup;
use crate::errors::AppResult;
use crate::models::scope::expand_scopes;
use crate::source::SourceLoader;
use crate::utils::date;
use chrono::{Duration, NaiveDate};
use std::path::Path;

/// `"all"` expands to the configured machine roster.
pub(crate) fn resolve_selection(cfg: &Config, machines: &[String]) -> Vec<String> {
    if machines.len() == 1 && machines[0].eq_ignore_ascii_case("all") {
        cfg.machines.clone()
    } else {
        machines.to_vec()
    }
}

/// Default window: the 7 days ending yesterday.
pub(crate) fn resolve_range(
    from: &Option<String>,
    to: &Option<String>,
) -> AppResult<(NaiveDate, NaiveDate)> {
    let end = match to {
        Some(s) => date::parse_date(s)?,
        None => date::yesterday(),
    };
    let start = match from {
        Some(s) => date::parse_date(s)?,
        None => end - Duration::days(6),
    };
    Ok((start, end))
}

/// Expand the selection into scopes and resolve each one through the
/// loaders. Selection/range validation happens in `expand_scopes`, before
/// anything is read; per-scope failures are absorbed by the collaborators.
pub(crate) fn load_period_inputs(
    cfg: &Config,
    machines: &[String],
    start: NaiveDate,
    end: NaiveDate,
) -> AppResult<Vec<ScopeData>> {
    let scopes = expand_scopes(machines, start, end)?;

    let loader = SourceLoader::new(Path::new(&cfg.dataset_dir), cfg.cache_ttl_secs);
    let sales = SalesLookup::open(Path::new(&cfg.sales_db));

    Ok(scopes
        .into_iter()
        .map(|scope| {
            let events = loader.load_or_empty(&scope);
            let sale = sales.sale_for(&scope);
            ScopeData {
                events: (*events).clone(),
                sales: sale,
                scope,
            }
        })
        .collect())
}
