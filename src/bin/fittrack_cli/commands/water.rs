// ABOUTME: Water intake commands for fittrack-cli
// ABOUTME: Handles add, set, reset, and show operations against the water tracker
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

use fittrack::config::TrackerConfig;
use fittrack::errors::AppResult;
use fittrack::store::Store;
use tracing::{info, warn};

type Result<T> = AppResult<T>;

use crate::helpers::{display, state};

/// Drink one glass
pub fn add(store: &mut dyn Store, config: &TrackerConfig) -> Result<()> {
    let mut water = state::load_water(store, &config.water)?;

    if water.add_glass() {
        state::save_water(store, &water)?;
        state::push_hydration_snapshot(store, &water)?;
        info!(glasses = water.glasses, goal = water.goal, "added glass");
    } else {
        warn!(goal = water.goal, "daily water goal already reached");
        println!("Daily goal of {} glasses already reached", water.goal);
    }

    display::display_water(&water);
    Ok(())
}

/// Set the glass count directly, clamped to the goal
pub fn set(store: &mut dyn Store, config: &TrackerConfig, glasses: u32) -> Result<()> {
    let mut water = state::load_water(store, &config.water)?;
    water.set_glasses(glasses);
    state::save_water(store, &water)?;
    state::push_hydration_snapshot(store, &water)?;

    info!(glasses = water.glasses, "set water count");
    display::display_water(&water);
    Ok(())
}

/// Reset the count to zero
pub fn reset(store: &mut dyn Store, config: &TrackerConfig) -> Result<()> {
    let mut water = state::load_water(store, &config.water)?;
    water.reset();
    state::save_water(store, &water)?;
    state::push_hydration_snapshot(store, &water)?;

    info!("reset water count");
    display::display_water(&water);
    Ok(())
}

/// Show the current intake
pub fn show(store: &dyn Store, config: &TrackerConfig, json: bool) -> Result<()> {
    let water = state::load_water(store, &config.water)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&water)?);
    } else {
        display::display_water(&water);
    }

    Ok(())
}
