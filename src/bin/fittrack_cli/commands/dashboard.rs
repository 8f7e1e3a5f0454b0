// ABOUTME: Dashboard command for fittrack-cli
// ABOUTME: Assembles today's snapshot from the nutrition, workout, and water trackers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

use fittrack::config::TrackerConfig;
use fittrack::errors::AppResult;
use fittrack::store::Store;
use fittrack::wellness::DashboardSnapshot;

type Result<T> = AppResult<T>;

use crate::helpers::{display, state};

/// Show today's combined dashboard
pub fn run(store: &dyn Store, config: &TrackerConfig, json: bool) -> Result<()> {
    let nutrition = state::load_nutrition_log(store)?;
    let workouts = state::load_workouts(store)?;
    let water = state::load_water(store, &config.water)?;

    // A profile calorie target overrides the configured default.
    let mut targets = config.targets;
    if let Some(profile) = state::load_profile(store)? {
        if let Some(target) = profile.daily_calorie_target {
            targets.calories = target;
        }
    }

    let snapshot = DashboardSnapshot::build(&nutrition, &workouts, &water, &targets, &config.health);

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        display::display_dashboard(&snapshot);
    }

    Ok(())
}
