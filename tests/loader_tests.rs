mod common;

use chrono::NaiveDate;
use common::{create_sales_db, test_root, write_status_log};
use machlog::core::aggregator::aggregate;
use machlog::core::period::{ScopeData, compute_period};
use machlog::db::SalesLookup;
use machlog::errors::AppError;
use machlog::models::scope::{Scope, expand_scopes};
use machlog::models::StatusKind;
use machlog::source::SourceLoader;

fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

#[test]
fn loader_parses_mixed_timestamp_formats_and_lenient_durations() {
    let root = test_root("loader_mixed_formats");
    write_status_log(
        &root,
        "M1-1",
        "2025-11-05",
        &[
            ("2025-11-05 05:00:00", "電源断", "7200"),
            ("2025/11/05 07:00:00", "自動起動", "3600.5"),
            ("2025-11-05 08:00", "手動運転", ""),
            ("2025/11/05 08:00", "アラーム", "-50"),
        ],
    );

    let loader = SourceLoader::new(&root.join("dataset"), 60);
    let events = loader
        .load(&Scope::new("M1-1", date("2025-11-05")))
        .expect("load");

    assert_eq!(events.len(), 4);
    assert_eq!(events[1].duration_seconds, 3600.5);
    // Unknown label → Other; blank and negative durations clamp to 0.
    assert_eq!(events[2].status, StatusKind::Other);
    assert_eq!(events[2].duration_seconds, 0.0);
    assert_eq!(events[3].duration_seconds, 0.0);
}

#[test]
fn loader_missing_file_is_source_not_found_but_absorbs_for_periods() {
    let root = test_root("loader_missing");
    let loader = SourceLoader::new(&root.join("dataset"), 60);
    let scope = Scope::new("M9-9", date("2025-11-05"));

    let err = loader.load(&scope).unwrap_err();
    assert!(matches!(err, AppError::SourceNotFound { .. }));

    let events = loader.load_or_empty(&scope);
    assert!(events.is_empty());
}

#[test]
fn loader_serves_cached_scope_on_repeat_load() {
    let root = test_root("loader_cache");
    write_status_log(
        &root,
        "M1-1",
        "2025-11-05",
        &[("2025-11-05 05:00:00", "自動起動", "3600")],
    );

    let loader = SourceLoader::new(&root.join("dataset"), 3600);
    let scope = Scope::new("M1-1", date("2025-11-05"));

    let first = loader.load(&scope).expect("first load");

    // Remove the file: a cached scope must still resolve within the TTL.
    std::fs::remove_dir_all(root.join("dataset").join("M1-1")).unwrap();
    let second = loader.load(&scope).expect("cached load");

    assert_eq!(first.len(), second.len());
}

#[test]
fn sales_lookup_absorbs_every_failure_to_zero() {
    let root = test_root("sales_absorb");
    create_sales_db(&root, &[("M1-1", "2025-11-05", 12000)]);

    let sales = SalesLookup::open(&root.join("dataset").join("sales.db"));

    // Present row.
    assert_eq!(sales.sale_for(&Scope::new("M1-1", date("2025-11-05"))), 12000);
    // Present table, absent date.
    assert_eq!(sales.sale_for(&Scope::new("M1-1", date("2025-11-06"))), 0);
    // Absent table.
    assert_eq!(sales.sale_for(&Scope::new("M9-9", date("2025-11-05"))), 0);

    // Absent database entirely.
    let missing = SalesLookup::open(&root.join("nope").join("sales.db"));
    assert_eq!(missing.sale_for(&Scope::new("M1-1", date("2025-11-05"))), 0);
}

/// 2 machines × 3 dates with 1 of 6 source files absent: the aggregate
/// equals the sum over the 5 present files, and the missing sales row
/// counts as 0. Nothing errors.
#[test]
fn period_absorbs_missing_scopes() {
    let root = test_root("period_absorption");

    let machines = vec!["M1-1".to_string(), "M1-2".to_string()];
    let days = ["2025-11-03", "2025-11-04", "2025-11-05"];

    // M1-1 has all 3 days; M1-2 is missing 2025-11-04. Each present file
    // holds 1h powered off and 1h running.
    let rows = |day: &str| {
        vec![
            (format!("{day} 05:00:00"), "電源断", "3600"),
            (format!("{day} 06:00:00"), "自動起動", "3600"),
        ]
    };
    for day in days {
        let owned = rows(day);
        let borrowed: Vec<(&str, &str, &str)> =
            owned.iter().map(|(ts, s, e)| (ts.as_str(), *s, *e)).collect();
        write_status_log(&root, "M1-1", day, &borrowed);
    }
    for day in ["2025-11-03", "2025-11-05"] {
        let owned = rows(day);
        let borrowed: Vec<(&str, &str, &str)> =
            owned.iter().map(|(ts, s, e)| (ts.as_str(), *s, *e)).collect();
        write_status_log(&root, "M1-2", day, &borrowed);
    }

    // Sales for 5 of 6 scopes; the missing one contributes 0.
    create_sales_db(
        &root,
        &[
            ("M1-1", "2025-11-03", 1000),
            ("M1-1", "2025-11-04", 1000),
            ("M1-1", "2025-11-05", 1000),
            ("M1-2", "2025-11-03", 1000),
            ("M1-2", "2025-11-05", 1000),
        ],
    );

    let loader = SourceLoader::new(&root.join("dataset"), 60);
    let sales = SalesLookup::open(&root.join("dataset").join("sales.db"));

    let scopes = expand_scopes(&machines, date("2025-11-03"), date("2025-11-05")).unwrap();
    assert_eq!(scopes.len(), 6);

    let inputs: Vec<ScopeData> = scopes
        .into_iter()
        .map(|scope| {
            let events = loader.load_or_empty(&scope);
            let sale = sales.sale_for(&scope);
            ScopeData {
                events: (*events).clone(),
                sales: sale,
                scope,
            }
        })
        .collect();

    let kpi = compute_period(&inputs).unwrap();

    // 5 present files × (1h off + 1h running).
    assert_eq!(kpi.status_summary.get(StatusKind::AutoStart), 5.0 * 3600.0);
    assert_eq!(kpi.status_summary.get(StatusKind::PowerOff), 5.0 * 3600.0);
    assert!((kpi.total_real_work_hours - 5.0).abs() < 1e-9);
    assert_eq!(kpi.total_sales, 5000);
    assert!((kpi.unit_price - 1000.0).abs() < 1e-9);

    // Independent check: summing the five files directly gives the same
    // grand summary.
    let direct: Vec<_> = inputs.iter().flat_map(|sd| sd.events.clone()).collect();
    let direct_summary = aggregate(&direct);
    assert_eq!(direct_summary.total(), kpi.status_summary.total());
}
