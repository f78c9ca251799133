//! 24-hour ANSI timeline bar built from cumulative event offsets.

use crate::core::aggregator;
use crate::models::StatusEvent;
use crate::utils::colors::{RESET, status_color};

/// Half-hour cells across the 24h log window.
const CELLS: usize = 48;
const CELL_SECONDS: f64 = 24.0 * 3600.0 / CELLS as f64;

/// Render the bar plus its hour scale. `start_hour` is the clock hour the
/// log window begins at; cell positions are offsets, not wall-clock times.
pub fn render(events: &[StatusEvent], start_hour: u32) -> String {
    let offsets = aggregator::with_offsets(events);

    let mut bar = String::new();
    for cell in 0..CELLS {
        let midpoint = cell as f64 * CELL_SECONDS + CELL_SECONDS / 2.0;

        let covering = offsets
            .iter()
            .find(|(ev, start)| midpoint >= *start && midpoint < start + ev.duration_seconds);

        match covering {
            Some((ev, _)) => {
                bar.push_str(status_color(ev.status));
                bar.push('█');
                bar.push_str(RESET);
            }
            None => bar.push('░'),
        }
    }

    // Hour labels every 3h (6 cells), wrapped at midnight.
    let mut scale = String::new();
    for tick in 0..(CELLS / 6) {
        let hour = (start_hour + 3 * tick as u32) % 24;
        scale.push_str(&format!("{:<6}", format!("{:02}:00", hour)));
    }

    format!("{}\n{}", bar, scale)
}
