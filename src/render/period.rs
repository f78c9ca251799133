//! Period report rendering.

use super::breakdown_table;
use crate::core::period::PeriodKpi;
use crate::ui::messages;
use crate::utils::colors::RED;
use crate::utils::formatting::{hours2, yen};
use chrono::NaiveDate;

pub fn render(machines: &[String], start: NaiveDate, end: NaiveDate, kpi: &PeriodKpi) {
    messages::section("Analysis conditions");
    println!("  Machines: {}", machines.join(", "));
    println!("  Period:   {} ～ {}", start, end);

    messages::section("Results");
    messages::metric("Total sales:     ", yen(kpi.total_sales), RED);
    messages::metric(
        "Real work hours: ",
        format!("{} h", hours2(kpi.total_real_work_hours)),
        RED,
    );
    messages::metric(
        "Unit price:      ",
        format!("{}/h", yen(kpi.unit_price.round() as i64)),
        RED,
    );

    messages::section("Status breakdown");
    print!("{}", breakdown_table(&kpi.status_summary).render());
}
