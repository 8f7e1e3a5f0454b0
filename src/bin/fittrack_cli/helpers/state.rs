// ABOUTME: Tracker state loading and saving for fittrack-cli
// ABOUTME: Reads aggregates from the store, falling back to fresh defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

use fittrack::config::WaterConfig;
use fittrack::errors::AppResult;
use fittrack::hydration::{HydrationEntry, WaterTracker};
use fittrack::nutrition::DailyNutritionLog;
use fittrack::profile::UserProfile;
use fittrack::progress::ProgressHistory;
use fittrack::store::{keys, Store, StoreExt};
use fittrack::workouts::WorkoutLog;

/// Stored food log, or a fresh one for today
pub fn load_nutrition_log(store: &dyn Store) -> AppResult<DailyNutritionLog> {
    Ok(store
        .get_json(keys::NUTRITION_LOG)?
        .unwrap_or_else(DailyNutritionLog::for_today))
}

pub fn save_nutrition_log(store: &mut dyn Store, log: &DailyNutritionLog) -> AppResult<()> {
    store.put_json(keys::NUTRITION_LOG, log)
}

/// Stored water tracker, or a fresh one from the configured goal
pub fn load_water(store: &dyn Store, config: &WaterConfig) -> AppResult<WaterTracker> {
    Ok(store
        .get_json(keys::WATER_TRACKER)?
        .unwrap_or_else(|| WaterTracker::new(config)))
}

pub fn save_water(store: &mut dyn Store, water: &WaterTracker) -> AppResult<()> {
    store.put_json(keys::WATER_TRACKER, water)
}

/// Stored hydration snapshots, oldest first
pub fn load_hydration_history(store: &dyn Store) -> AppResult<Vec<HydrationEntry>> {
    Ok(store.get_json(keys::HYDRATION_HISTORY)?.unwrap_or_default())
}

/// Append a snapshot of the tracker to the hydration history
pub fn push_hydration_snapshot(store: &mut dyn Store, water: &WaterTracker) -> AppResult<()> {
    let mut history = load_hydration_history(store)?;
    history.push(water.snapshot());
    store.put_json(keys::HYDRATION_HISTORY, &history)
}

/// Stored workout log, or an empty one
pub fn load_workouts(store: &dyn Store) -> AppResult<WorkoutLog> {
    Ok(store.get_json(keys::WORKOUT_LOG)?.unwrap_or_default())
}

pub fn save_workouts(store: &mut dyn Store, log: &WorkoutLog) -> AppResult<()> {
    store.put_json(keys::WORKOUT_LOG, log)
}

/// Stored progress history, or an empty one
pub fn load_progress(store: &dyn Store) -> AppResult<ProgressHistory> {
    Ok(store.get_json(keys::PROGRESS_HISTORY)?.unwrap_or_default())
}

pub fn save_progress(store: &mut dyn Store, history: &ProgressHistory) -> AppResult<()> {
    store.put_json(keys::PROGRESS_HISTORY, history)
}

/// Stored profile, if one has been set
pub fn load_profile(store: &dyn Store) -> AppResult<Option<UserProfile>> {
    store.get_json(keys::USER_PROFILE)
}

pub fn save_profile(store: &mut dyn Store, profile: &UserProfile) -> AppResult<()> {
    store.put_json(keys::USER_PROFILE, profile)
}
