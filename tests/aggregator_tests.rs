mod common;

use common::{ev, sequence, ts};
use machlog::core::aggregator::{StatusSummary, aggregate, with_offsets};
use machlog::models::StatusKind;

#[test]
fn conservation_over_all_kinds() {
    let events = sequence(
        ts("2025-11-05", "05:00:00"),
        &[
            (StatusKind::PowerOff, 7200.0),
            (StatusKind::AutoStart, 3600.0),
            (StatusKind::Alarm, 120.5),
            (StatusKind::Setup, 1800.0),
            (StatusKind::AutoStop, 900.0),
            (StatusKind::Other, 42.0),
        ],
    );

    let summary = aggregate(&events);

    let expected: f64 = events.iter().map(|e| e.duration_seconds).sum();
    assert!((summary.total() - expected).abs() < 1e-9);
}

#[test]
fn empty_input_yields_all_zero_summary() {
    let summary = aggregate(&[]);

    assert_eq!(summary.total(), 0.0);
    for kind in StatusKind::ALL {
        assert_eq!(summary.get(kind), 0.0);
    }
}

#[test]
fn absent_kinds_default_to_zero() {
    let events = vec![ev(ts("2025-11-05", "05:00:00"), StatusKind::AutoStart, 3600.0)];

    let summary = aggregate(&events);

    assert_eq!(summary.get(StatusKind::AutoStart), 3600.0);
    assert_eq!(summary.get(StatusKind::PowerOff), 0.0);
    assert_eq!(summary.get(StatusKind::Alarm), 0.0);
}

#[test]
fn repeated_kinds_accumulate() {
    let events = sequence(
        ts("2025-11-05", "05:00:00"),
        &[
            (StatusKind::AutoStart, 1000.0),
            (StatusKind::PowerOff, 500.0),
            (StatusKind::AutoStart, 234.5),
        ],
    );

    let summary = aggregate(&events);

    assert!((summary.get(StatusKind::AutoStart) - 1234.5).abs() < 1e-9);
    assert_eq!(summary.get(StatusKind::PowerOff), 500.0);
}

#[test]
fn unknown_labels_land_in_other_and_are_conserved() {
    assert_eq!(StatusKind::from_label("手動運転"), StatusKind::Other);
    assert_eq!(StatusKind::from_label(""), StatusKind::Other);
    assert_eq!(StatusKind::from_label("電源断"), StatusKind::PowerOff);

    let events = vec![
        ev(ts("2025-11-05", "05:00:00"), StatusKind::from_label("謎の状態"), 600.0),
        ev(ts("2025-11-05", "05:10:00"), StatusKind::AutoStart, 600.0),
    ];

    let summary = aggregate(&events);
    assert_eq!(summary.get(StatusKind::Other), 600.0);
    assert_eq!(summary.total(), 1200.0);
}

#[test]
fn offsets_are_cumulative_prior_durations() {
    let events = sequence(
        ts("2025-11-05", "05:00:00"),
        &[
            (StatusKind::PowerOff, 7200.0),
            (StatusKind::AutoStart, 3600.0),
            (StatusKind::AutoStop, 1800.0),
        ],
    );

    let tagged = with_offsets(&events);

    assert_eq!(tagged.len(), 3);
    assert_eq!(tagged[0].1, 0.0);
    assert_eq!(tagged[1].1, 7200.0);
    assert_eq!(tagged[2].1, 10800.0);
}

#[test]
fn real_work_excludes_power_off() {
    let events = sequence(
        ts("2025-11-05", "05:00:00"),
        &[
            (StatusKind::PowerOff, 7200.0),
            (StatusKind::AutoStart, 3600.0),
            (StatusKind::Setup, 1800.0),
        ],
    );

    let summary = aggregate(&events);
    assert_eq!(summary.real_work_seconds(), 5400.0);
}

#[test]
fn summary_default_is_empty() {
    let summary = StatusSummary::default();
    assert_eq!(summary.total(), 0.0);
}
