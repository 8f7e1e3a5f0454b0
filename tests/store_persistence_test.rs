// ABOUTME: Integration tests for persisting tracker aggregates through the JSON file store
// ABOUTME: Validates typed round trips across reopen and error codes for bad data
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use fittrack::errors::ErrorCode;
use fittrack::nutrition::{DailyNutritionLog, Estimator};
use fittrack::progress::ProgressHistory;
use fittrack::store::{keys, JsonFileStore, Store, StoreExt};
use fittrack::workouts::{WorkoutEntry, WorkoutLog, WorkoutType};
use std::fs;

#[test]
fn test_aggregates_survive_reopen() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let estimator = Estimator::new();
    let log = common::sample_day_log(&estimator);
    let mut workouts = WorkoutLog::new();
    workouts
        .add(WorkoutEntry::new("Swim", WorkoutType::Cardio, 40, 300))
        .unwrap();
    let mut progress = ProgressHistory::default();
    progress.record(common::progress_days_ago(81.0, 2)).unwrap();

    {
        let mut store = JsonFileStore::open(&path).unwrap();
        store.put_json(keys::NUTRITION_LOG, &log).unwrap();
        store.put_json(keys::WORKOUT_LOG, &workouts).unwrap();
        store.put_json(keys::PROGRESS_HISTORY, &progress).unwrap();
    }

    let store = JsonFileStore::open(&path).unwrap();
    let reloaded_log: DailyNutritionLog = store.get_json(keys::NUTRITION_LOG).unwrap().unwrap();
    let reloaded_workouts: WorkoutLog = store.get_json(keys::WORKOUT_LOG).unwrap().unwrap();
    let reloaded_progress: ProgressHistory = store.get_json(keys::PROGRESS_HISTORY).unwrap().unwrap();

    assert_eq!(reloaded_log.daily_totals(), log.daily_totals());
    assert_eq!(reloaded_log.entry_count(), 3);
    assert_eq!(reloaded_workouts.entries(), workouts.entries());
    assert_eq!(reloaded_progress.len(), 1);
    assert_eq!(
        store.keys().unwrap(),
        vec![keys::NUTRITION_LOG, keys::PROGRESS_HISTORY, keys::WORKOUT_LOG]
    );
}

#[test]
fn test_corrupt_file_reports_a_storage_error() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");
    fs::write(&path, "{ not json").unwrap();

    let err = JsonFileStore::open(&path).unwrap_err();
    assert_eq!(err.code, ErrorCode::StorageError);
    assert!(err.message.contains("store.json"));
}

#[test]
fn test_typed_read_of_wrong_shape_is_a_serialization_error() {
    common::init_test_logging();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.json");

    let mut store = JsonFileStore::open(&path).unwrap();
    store.put_raw(keys::WORKOUT_LOG, "[1, 2, 3]").unwrap();

    let err = store
        .get_json::<WorkoutLog>(keys::WORKOUT_LOG)
        .unwrap_err();
    assert_eq!(err.code, ErrorCode::SerializationError);

    // The raw value is still readable.
    assert!(store.get_raw(keys::WORKOUT_LOG).unwrap().is_some());
}
