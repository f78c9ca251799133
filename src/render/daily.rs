//! Daily report rendering.

use super::{breakdown_table, timeline};
use crate::core::aggregator::{self, StatusSummary};
use crate::core::daily::{DailyKpi, ReportConfig};
use crate::models::StatusEvent;
use crate::ui::messages;
use crate::utils::colors::{BLUE, BOLD, RED, RESET, colorize_optional};
use crate::utils::formatting::{hours1, hours2, pct2, yen};
use crate::utils::table::{Column, Table};
use chrono::NaiveDateTime;

pub fn render(
    events: &[StatusEvent],
    summary: &StatusSummary,
    kpi: &DailyKpi,
    config: &ReportConfig,
    details: bool,
) {
    println!(
        "\n{BOLD}=== {}  {} ==={RESET}",
        config.machine_id,
        config.report_date.format("%Y/%m/%d")
    );

    // Zero-activity day: placeholder instead of a degenerate report.
    if kpi.no_operation {
        messages::warning("Machine did not operate.");
        return;
    }

    println!(
        "Power on:  {}    Power off: {}",
        clock(kpi.power_on_time),
        clock(kpi.power_off_time)
    );

    messages::section("24h timeline");
    println!("{}", timeline::render(events, config.start_hour));

    messages::section("Status breakdown");
    print!("{}", breakdown_table(summary).render());

    messages::section("KPI");
    messages::metric("Sales:       ", yen(config.sales_amount), RED);
    messages::metric("Unit price:  ", format!("{}/h", yen(kpi.unit_price as i64)), RED);
    messages::metric(
        format!("Idle time ({}h base): ", config.base_work_hours),
        format!("{} h", hours2(kpi.idle_hours())),
        RED,
    );
    messages::metric("Idle rate:   ", format!("{} %", pct2(kpi.idle_rate_pct)), RED);

    if details {
        messages::section("Events");
        print!("{}", event_table(events).render());
    }
}

fn clock(ts: Option<NaiveDateTime>) -> String {
    let value = ts
        .map(|t| t.format("%H:%M:%S").to_string())
        .unwrap_or_else(|| "-".to_string());
    colorize_optional(&value, BLUE)
}

/// Raw event listing with start offsets, the tabular twin of the timeline.
fn event_table(events: &[StatusEvent]) -> Table {
    let mut table = Table::new(vec![
        Column::left("日時"),
        Column::left("ステータス"),
        Column::right("時間(h)"),
        Column::right("開始(h)"),
    ]);

    for (ev, start) in aggregator::with_offsets(events) {
        table.add_row(vec![
            ev.timestamp.format("%Y-%m-%d %H:%M:%S").to_string(),
            ev.status.label().to_string(),
            hours2(ev.duration_hours()),
            hours1(start / 3600.0),
        ]);
    }

    table
}
