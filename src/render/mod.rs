//! Plain-text report renderers.
//!
//! Consumes the core's KPI structures; owns every presentation concern
//! (colors, column layout, placeholders) so the core stays numeric.

pub mod daily;
pub mod period;
pub mod timeline;

use crate::core::aggregator::StatusSummary;
use crate::utils::formatting::{hours1, pct2};
use crate::utils::table::{Column, Table};

/// Shared per-status table: hours, share of a 24h day, share of powered-on
/// time ("-" for the PowerOff row).
pub fn breakdown_table(summary: &StatusSummary) -> Table {
    let mut table = Table::new(vec![
        Column::left("ステータス"),
        Column::right("時間(h)"),
        Column::right("全体%"),
        Column::right("電源投入%"),
    ]);

    for row in crate::core::period::breakdown(summary) {
        table.add_row(vec![
            row.status.label().to_string(),
            hours1(row.hours),
            pct2(row.day_pct),
            row.power_on_pct.map(pct2).unwrap_or_else(|| "-".to_string()),
        ]);
    }

    table
}
