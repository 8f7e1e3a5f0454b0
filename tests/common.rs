// ABOUTME: Shared test utilities and builders for integration tests
// ABOUTME: Provides quiet logging setup and backdated sample entries
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::{Duration, Utc};
use fittrack::hydration::HydrationEntry;
use fittrack::nutrition::{DailyNutritionLog, Estimator, MealType};
use fittrack::progress::ProgressEntry;
use fittrack::workouts::{WorkoutEntry, WorkoutType};
use std::sync::Once;
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::WARN)
            .with_test_writer()
            .init();
    });
}

/// A workout entry logged the given number of days in the past
pub fn workout_days_ago(
    name: &str,
    workout_type: WorkoutType,
    duration_min: u32,
    calories_burned: u32,
    days: i64,
) -> WorkoutEntry {
    let mut entry = WorkoutEntry::new(name, workout_type, duration_min, calories_burned);
    entry.logged_at = Utc::now() - Duration::days(days);
    entry
}

/// A hydration snapshot of the given glass count, backdated
pub fn hydration_days_ago(glasses: u32, days: i64) -> HydrationEntry {
    HydrationEntry {
        id: Uuid::new_v4(),
        glasses,
        amount_ml: glasses * 250,
        logged_at: Utc::now() - Duration::days(days),
    }
}

/// A progress entry at the given weight, backdated
pub fn progress_days_ago(weight_kg: f64, days: i64) -> ProgressEntry {
    let mut entry = ProgressEntry::new(weight_kg);
    entry.recorded_at = Utc::now() - Duration::days(days);
    entry
}

/// A day log with one breakfast, one lunch, and one snack entry
pub fn sample_day_log(estimator: &Estimator) -> DailyNutritionLog {
    let mut log = DailyNutritionLog::for_today();
    log.log_food(estimator, MealType::Breakfast, "oats", 50.0)
        .unwrap();
    log.log_food(estimator, MealType::Lunch, "rice", 200.0)
        .unwrap();
    log.log_food(estimator, MealType::Snack, "banana", 100.0)
        .unwrap();
    log
}
