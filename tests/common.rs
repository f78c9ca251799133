#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use machlog::models::{StatusEvent, StatusKind};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn machlog() -> Command {
    cargo_bin_cmd!("machlog")
}

/// Create a unique, empty test root inside the system temp dir.
pub fn test_root(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("machlog_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(path.join("dataset")).expect("create dataset dir");
    path
}

/// Write a machlog.conf pointing at the root's dataset dir and return its
/// path as a string for --config.
pub fn write_config(root: &Path, machines: &[&str]) -> String {
    let dataset = root.join("dataset");
    let conf = format!(
        "dataset_dir: {}\nsales_db: {}\nmachines: [{}]\nstart_hour: 5\nbase_work_hours: 16.5\ncache_ttl_secs: 60\n",
        dataset.display(),
        dataset.join("sales.db").display(),
        machines.join(", "),
    );

    let path = root.join("machlog.conf");
    fs::write(&path, conf).expect("write config");
    path.to_string_lossy().to_string()
}

/// Write one day's status log for a machine.
/// Rows are (timestamp, status label, elapsed seconds as raw text).
pub fn write_status_log(root: &Path, machine: &str, date: &str, rows: &[(&str, &str, &str)]) {
    let dir = root.join("dataset").join(machine);
    fs::create_dir_all(&dir).expect("create machine dir");

    let mut csv = String::from("日時,ステータス,経過秒数\n");
    for (ts, status, elapsed) in rows {
        csv.push_str(&format!("{},{},{}\n", ts, status, elapsed));
    }

    let compact = date.replace('-', "");
    fs::write(dir.join(format!("{}.csv", compact)), csv).expect("write status log");
}

/// Create the sales database with one table per machine.
pub fn create_sales_db(root: &Path, entries: &[(&str, &str, i64)]) {
    let db_path = root.join("dataset").join("sales.db");
    let conn = rusqlite::Connection::open(&db_path).expect("open sales db");

    for (machine, date, sale) in entries {
        conn.execute(
            &format!(
                "CREATE TABLE IF NOT EXISTS \"{}\" (date TEXT PRIMARY KEY, sale INTEGER)",
                machine
            ),
            [],
        )
        .expect("create machine table");

        conn.execute(
            &format!("INSERT INTO \"{}\" (date, sale) VALUES (?1, ?2)", machine),
            rusqlite::params![date, sale],
        )
        .expect("insert sale");
    }
}

/// A standard single-day log: 2h powered off, 4h of activity, then off.
pub fn standard_daily_rows() -> Vec<(&'static str, &'static str, &'static str)> {
    vec![
        ("2025-11-05 05:00:00", "電源断", "7200"),
        ("2025-11-05 07:00:00", "自動起動", "3600"),
        ("2025-11-05 08:00:00", "自動停止", "1800"),
        ("2025-11-05 08:30:00", "段取り", "1800"),
        ("2025-11-05 09:00:00", "自動起動", "7200"),
        ("2025-11-05 11:00:00", "電源断", "1800"),
    ]
}

// ---------------------------------------------------------------------------
// Library-level helpers
// ---------------------------------------------------------------------------

pub fn ts(date: &str, time: &str) -> NaiveDateTime {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .expect("date")
        .and_time(time.parse().expect("time"))
}

pub fn ev(timestamp: NaiveDateTime, status: StatusKind, seconds: f64) -> StatusEvent {
    StatusEvent::new(timestamp, status, seconds)
}

/// Build a chronological sequence starting at `start`, one event per
/// (kind, seconds) pair, timestamps advancing by each duration.
pub fn sequence(start: NaiveDateTime, steps: &[(StatusKind, f64)]) -> Vec<StatusEvent> {
    let mut t = start;
    steps
        .iter()
        .map(|&(kind, seconds)| {
            let event = ev(t, kind, seconds);
            t += chrono::Duration::seconds(seconds as i64);
            event
        })
        .collect()
}
