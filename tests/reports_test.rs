// ABOUTME: Integration tests for report generation over tracked history
// ABOUTME: Drives period filtering and all report types off one shared dataset
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::Utc;
use fittrack::progress::ProgressHistory;
use fittrack::reports::{
    entries_within, FitnessReport, HydrationReport, ReportPeriod, SummaryReport,
};
use fittrack::workouts::{WorkoutLog, WorkoutType};

/// Workouts spread over the last quarter: two this week, one last month,
/// one well outside the month window
fn seeded_workout_log() -> WorkoutLog {
    let mut log = WorkoutLog::new();
    log.add(common::workout_days_ago(
        "Morning run",
        WorkoutType::Cardio,
        30,
        320,
        1,
    ))
    .unwrap();
    log.add(common::workout_days_ago(
        "Gym session",
        WorkoutType::Strength,
        50,
        280,
        5,
    ))
    .unwrap();
    log.add(common::workout_days_ago(
        "Long ride",
        WorkoutType::Cardio,
        90,
        800,
        20,
    ))
    .unwrap();
    log.add(common::workout_days_ago(
        "Old yoga class",
        WorkoutType::Flexibility,
        60,
        150,
        45,
    ))
    .unwrap();
    log
}

#[test]
fn test_fitness_report_narrows_with_the_period() {
    common::init_test_logging();
    let log = seeded_workout_log();
    let now = Utc::now();

    let week = FitnessReport::from_entries(entries_within(
        log.entries(),
        ReportPeriod::Week,
        now,
    ))
    .unwrap();
    assert_eq!(week.total_workouts, 2);
    assert_eq!(week.total_calories_burned, 600);

    let month = FitnessReport::from_entries(entries_within(
        log.entries(),
        ReportPeriod::Month,
        now,
    ))
    .unwrap();
    assert_eq!(month.total_workouts, 3);
    assert_eq!(month.total_duration_min, 170);
    // 170 minutes round to 3 hours.
    assert_eq!(month.total_hours, 3);

    let quarter = FitnessReport::from_entries(entries_within(
        log.entries(),
        ReportPeriod::Quarter,
        now,
    ))
    .unwrap();
    assert_eq!(quarter.total_workouts, 4);
}

#[test]
fn test_breakdown_keeps_first_seen_type_order() {
    common::init_test_logging();
    let log = seeded_workout_log();

    let report = FitnessReport::from_entries(log.entries()).unwrap();
    let kinds: Vec<WorkoutType> = report.by_type.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(
        kinds,
        [
            WorkoutType::Cardio,
            WorkoutType::Strength,
            WorkoutType::Flexibility
        ]
    );

    let (_, cardio) = report.by_type[0];
    assert_eq!(cardio.count, 2);
    assert_eq!(cardio.duration_min, 120);
}

#[test]
fn test_empty_window_produces_no_report() {
    common::init_test_logging();
    let mut log = WorkoutLog::new();
    log.add(common::workout_days_ago(
        "Ancient swim",
        WorkoutType::Cardio,
        40,
        350,
        120,
    ))
    .unwrap();

    let now = Utc::now();
    let filtered = entries_within(log.entries(), ReportPeriod::Week, now);
    assert!(filtered.is_empty());
    assert!(FitnessReport::from_entries(filtered).is_none());

    // 120 days is outside even the quarter window.
    assert!(entries_within(log.entries(), ReportPeriod::Quarter, now).is_empty());
}

#[test]
fn test_hydration_report_over_backdated_snapshots() {
    common::init_test_logging();
    let history = vec![
        common::hydration_days_ago(3, 1),
        common::hydration_days_ago(5, 3),
        common::hydration_days_ago(8, 12),
    ];
    let now = Utc::now();

    let week =
        HydrationReport::from_entries(entries_within(&history, ReportPeriod::Week, now)).unwrap();
    assert_eq!(week.total_entries, 2);
    assert_eq!(week.total_water_ml, 2000);
    assert_eq!(week.avg_water_ml, 1000);

    let month =
        HydrationReport::from_entries(entries_within(&history, ReportPeriod::Month, now)).unwrap();
    assert_eq!(month.total_water_ml, 4000);
}

#[test]
fn test_summary_uses_latest_progress_entry() {
    common::init_test_logging();
    let mut history = ProgressHistory::default();
    history.record(common::progress_days_ago(82.5, 30)).unwrap();
    history.record(common::progress_days_ago(80.0, 1)).unwrap();

    let log = seeded_workout_log();
    let fitness = FitnessReport::from_entries(log.entries());

    let summary = SummaryReport::build(fitness.as_ref(), history.latest());
    assert!(!summary.is_empty());

    let progress = summary.progress.unwrap();
    assert!((progress.weight_kg - 80.0).abs() < f64::EPSILON);
    assert_eq!(summary.fitness.unwrap().total_workouts, 4);
}

#[test]
fn test_summary_with_no_data_is_empty() {
    let summary = SummaryReport::build(None, None);
    assert!(summary.is_empty());
    assert_eq!(serde_json::to_string(&summary).unwrap(), "{}");
}
