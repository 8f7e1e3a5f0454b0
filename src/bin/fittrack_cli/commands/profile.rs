// ABOUTME: User profile commands for fittrack-cli
// ABOUTME: Handles partial profile updates and display with BMI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

use fittrack::errors::AppResult;
use fittrack::profile::UserProfile;
use fittrack::store::Store;
use tracing::info;

type Result<T> = AppResult<T>;

use crate::helpers::{display, state};

/// Fields to change on the stored profile; `None` leaves a field as is
#[derive(Debug, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<u32>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub fitness_goals: Option<String>,
    pub daily_calorie_target: Option<i64>,
}

/// Apply a partial update to the stored profile
pub fn set(store: &mut dyn Store, update: ProfileUpdate) -> Result<()> {
    let mut profile = state::load_profile(store)?.unwrap_or_default();

    if let Some(name) = update.name {
        profile.name = name;
    }
    if let Some(email) = update.email {
        profile.email = email;
    }
    if let Some(age) = update.age {
        profile.age = Some(age);
    }
    if let Some(gender) = update.gender {
        profile.gender = Some(gender);
    }
    if let Some(height) = update.height_cm {
        profile.height_cm = Some(height);
    }
    if let Some(weight) = update.weight_kg {
        profile.weight_kg = Some(weight);
    }
    if let Some(goals) = update.fitness_goals {
        profile.fitness_goals = Some(goals);
    }
    if let Some(target) = update.daily_calorie_target {
        profile.daily_calorie_target = Some(target);
    }

    state::save_profile(store, &profile)?;
    info!(name = %profile.name, "updated profile");
    display::display_profile(&profile);

    Ok(())
}

/// Show the stored profile with BMI when body data is present
pub fn show(store: &dyn Store, json: bool) -> Result<()> {
    let Some(profile) = state::load_profile(store)? else {
        println!("No profile set. Use 'profile set --name ... --email ...' to create one.");
        return Ok(());
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        display::display_profile(&profile);
    }

    Ok(())
}
