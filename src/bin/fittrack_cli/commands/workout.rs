// ABOUTME: Workout log commands for fittrack-cli
// ABOUTME: Handles add, list, and remove operations against the workout log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

use fittrack::errors::AppResult;
use fittrack::store::Store;
use fittrack::workouts::{Intensity, WorkoutEntry, WorkoutType};
use tracing::info;
use uuid::Uuid;

type Result<T> = AppResult<T>;

use crate::helpers::{display, state};

/// Log a completed workout
pub fn add(
    store: &mut dyn Store,
    name: &str,
    workout_type: &str,
    minutes: u32,
    calories: u32,
    intensity: &str,
    notes: Option<String>,
) -> Result<()> {
    let mut entry = WorkoutEntry::new(name, WorkoutType::from_str_lossy(workout_type), minutes, calories)
        .with_intensity(Intensity::from_str_lossy(intensity));
    if let Some(notes) = notes {
        entry = entry.with_notes(notes);
    }

    let mut log = state::load_workouts(store)?;
    let added = log.add(entry)?.clone();
    state::save_workouts(store, &log)?;

    info!(
        workout = %added.name,
        workout_type = %added.workout_type,
        duration_min = added.duration_min,
        "logged workout"
    );
    display::display_workout(&added);

    Ok(())
}

/// List logged workouts with totals
pub fn list(store: &dyn Store, json: bool) -> Result<()> {
    let log = state::load_workouts(store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&log)?);
    } else {
        display::display_workout_log(&log);
    }

    Ok(())
}

/// Remove a workout by id
pub fn remove(store: &mut dyn Store, id: Uuid) -> Result<()> {
    let mut log = state::load_workouts(store)?;
    let removed = log.remove(id)?;
    state::save_workouts(store, &log)?;

    info!(workout = %removed.name, "removed workout");
    println!("Removed workout '{}'", removed.name);

    Ok(())
}
