//! User-facing status messages for the CLI.

use crate::utils::colors::{BLUE, BOLD, CYAN, GREEN, RED, RESET, YELLOW};
use std::fmt;

pub fn info<T: fmt::Display>(msg: T) {
    println!("{BLUE}{BOLD}ℹ️ {RESET} {msg}");
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{GREEN}{BOLD}✅{RESET} {msg}");
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{YELLOW}{BOLD}⚠️ {RESET} {msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{RED}{BOLD}❌{RESET} {msg}");
}

/// Section header for report blocks.
pub fn section<T: fmt::Display>(title: T) {
    println!("\n{CYAN}{BOLD}── {title} ──{RESET}");
}

/// A labelled KPI line: plain label, accented value.
pub fn metric<L: fmt::Display, V: fmt::Display>(label: L, value: V, accent: &str) {
    println!("  {label}{accent}{value}{RESET}");
}
