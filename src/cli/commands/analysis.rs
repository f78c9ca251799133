use super::{load_period_inputs, resolve_range, resolve_selection};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::period;
use crate::errors::AppResult;
use crate::render;
use crate::ui::messages;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Analysis { machines, from, to } = cmd {
        let selection = resolve_selection(cfg, machines);
        let (start, end) = resolve_range(from, to)?;

        let inputs = load_period_inputs(cfg, &selection, start, end)?;
        let kpi = period::compute_period(&inputs)?;

        if kpi.status_summary.total() <= 0.0 {
            messages::warning("No data for the selected machines and period.");
            return Ok(());
        }

        render::period::render(&selection, start, end, &kpi);
    }
    Ok(())
}
