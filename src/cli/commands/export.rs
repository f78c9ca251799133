use super::{load_period_inputs, resolve_range, resolve_selection};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period;
use crate::errors::AppResult;
use crate::export::{PeriodReport, export_report};
use crate::ui::messages;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        machines,
        from,
        to,
        format,
        file,
        force,
    } = cmd
    {
        let selection = resolve_selection(cfg, machines);
        let (start, end) = resolve_range(from, to)?;

        let inputs = load_period_inputs(cfg, &selection, start, end)?;
        let kpi = period::compute_period(&inputs)?;

        if kpi.status_summary.total() <= 0.0 {
            messages::warning("No data for the selected machines and period.");
            return Ok(());
        }

        let report = PeriodReport {
            machines: selection,
            start_date: start,
            end_date: end,
            breakdown: period::breakdown(&kpi.status_summary),
            kpi,
        };

        export_report(&report, format, Path::new(file), *force)?;
    }
    Ok(())
}
