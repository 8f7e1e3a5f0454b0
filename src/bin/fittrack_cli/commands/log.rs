// ABOUTME: Food log commands for fittrack-cli
// ABOUTME: Handles add, show, and remove operations against the daily nutrition log
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

use fittrack::config::TrackerConfig;
use fittrack::errors::AppResult;
use fittrack::nutrition::{Estimator, MealType};
use fittrack::store::Store;
use tracing::info;
use uuid::Uuid;

type Result<T> = AppResult<T>;

use crate::helpers::{display, state};

/// Estimate a food and append it to a meal
pub fn add(
    store: &mut dyn Store,
    config: &TrackerConfig,
    meal: &str,
    food: &str,
    quantity: f64,
    json: bool,
) -> Result<()> {
    let estimator = Estimator::with_config(config.estimator);
    let meal = MealType::from_str_lossy(meal);

    let mut log = state::load_nutrition_log(store)?;
    let entry = log.log_food(&estimator, meal, food, quantity)?.clone();
    state::save_nutrition_log(store, &log)?;

    info!(
        food = %entry.name,
        meal = %meal,
        calories = entry.estimate.calories,
        "logged food entry"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&entry)?);
    } else {
        display::display_logged_food(meal, &entry);
        display::display_meal_totals(meal, &log.meal_totals(meal));
    }

    Ok(())
}

/// Show the stored food log with meal and day totals
pub fn show(store: &dyn Store, config: &TrackerConfig, json: bool) -> Result<()> {
    let log = state::load_nutrition_log(store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&log)?);
    } else {
        display::display_nutrition_log(&log, &config.targets);
    }

    Ok(())
}

/// Remove an entry from a meal by id
pub fn remove(store: &mut dyn Store, meal: &str, id: Uuid) -> Result<()> {
    let meal = MealType::from_str_lossy(meal);

    let mut log = state::load_nutrition_log(store)?;
    let removed = log.remove_entry(meal, id)?;
    state::save_nutrition_log(store, &log)?;

    info!(food = %removed.name, meal = %meal, "removed food entry");
    println!(
        "Removed {} ({} kcal) from {}",
        removed.name, removed.estimate.calories, meal
    );

    Ok(())
}
