// ABOUTME: Food estimation command for fittrack-cli
// ABOUTME: Resolves a food against the reference table and prints the scaled macros
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

use fittrack::config::TrackerConfig;
use fittrack::errors::AppResult;
use fittrack::nutrition::Estimator;

type Result<T> = AppResult<T>;

use crate::helpers::display;

/// Estimate calories and macros for a food without logging it
pub fn run(config: &TrackerConfig, food: &str, quantity: f64, json: bool) -> Result<()> {
    let estimator = Estimator::with_config(config.estimator);
    let resolved = estimator.resolve(food);
    let estimate = estimator.estimate(food, quantity);

    if json {
        println!("{}", serde_json::to_string_pretty(&estimate)?);
    } else {
        display::display_estimate(food, quantity, &resolved, &estimate);
    }

    Ok(())
}
