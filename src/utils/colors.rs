//! ANSI color helper utilities for terminal output.

use crate::models::StatusKind;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Status → color, matching the legend the operators already know from the
/// plant dashboards.
pub fn status_color(kind: StatusKind) -> &'static str {
    match kind {
        StatusKind::PowerOff => GREY,
        StatusKind::Alarm => RED,
        StatusKind::Setup => YELLOW,
        StatusKind::AutoStop => GREEN,
        StatusKind::AutoStart => BLUE,
        StatusKind::Other => MAGENTA,
    }
}

/// Paints a value, falling back to grey for empty placeholders ("-").
pub fn colorize_optional(value: &str, color: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        format!("{color}{value}{RESET}")
    }
}
