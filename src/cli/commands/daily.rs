use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{aggregator, daily};
use crate::db::SalesLookup;
use crate::errors::AppResult;
use crate::models::Scope;
use crate::render;
use crate::source::SourceLoader;
use crate::ui::messages;
use crate::utils::date;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Daily {
        machine,
        date: date_arg,
        details,
    } = cmd
    {
        let report_date = match date_arg {
            Some(s) => date::parse_date(s)?,
            None => date::yesterday(),
        };

        let scope = Scope::new(machine.clone(), report_date);

        // The daily report requires its log file; a missing one is a
        // user-facing error, unlike the absorbing period path.
        let loader = SourceLoader::new(Path::new(&cfg.dataset_dir), cfg.cache_ttl_secs);
        let events = loader.load(&scope)?;
        messages::success(format!("Status log loaded for {}.", scope));

        let summary = aggregator::aggregate(&events);
        let sale = SalesLookup::open(Path::new(&cfg.sales_db)).sale_for(&scope);

        let mut report_config = daily::ReportConfig::new(machine.clone(), report_date, sale);
        report_config.start_hour = cfg.start_hour;
        report_config.base_work_hours = cfg.base_work_hours;

        let kpi = daily::compute_daily(&events, &summary, &report_config, sale);

        render::daily::render(&events, &summary, &kpi, &report_config, *details);
    }
    Ok(())
}
