pub mod aggregator;
pub mod daily;
pub mod period;

pub use aggregator::StatusSummary;
pub use daily::{DailyKpi, ReportConfig};
pub use period::{BreakdownRow, PeriodKpi, ScopeData};
