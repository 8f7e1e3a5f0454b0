// ABOUTME: Tracker configuration - daily targets, hydration, health score, and estimator settings
// ABOUTME: Plain serde structs with defaults, environment loading, and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! Tracker Configuration
//!
//! Groups the tunable constants of the tracking engine. Every struct has
//! sensible defaults matching the classic behavior; [`TrackerConfig::from_env`]
//! overrides them from `FITTRACK_*` environment variables and
//! [`TrackerConfig::validate`] rejects nonsensical values.

use crate::errors::{AppError, AppResult};
use crate::nutrition::estimator::EstimatorConfig;
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::Display;
use std::str::FromStr;

/// Daily macro consumption targets
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyTargets {
    /// Daily calorie target (2000 kcal)
    pub calories: i64,
    /// Daily protein target in grams (150 g)
    pub protein_g: f64,
    /// Daily fat target in grams (65 g)
    pub fat_g: f64,
}

impl Default for DailyTargets {
    fn default() -> Self {
        Self {
            calories: 2000,
            protein_g: 150.0,
            fat_g: 65.0,
        }
    }
}

/// Hydration tracking configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterConfig {
    /// Daily goal in glasses (8)
    pub goal_glasses: u32,
    /// Milliliters per glass (250 ml)
    pub glass_ml: u32,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            goal_glasses: 8,
            glass_ml: 250,
        }
    }
}

/// Health score configuration
///
/// Score = min(base + workouts x `per_workout`, max)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthScoreConfig {
    /// Baseline score with no workouts (82)
    pub base: u32,
    /// Points added per completed workout (2)
    pub per_workout: u32,
    /// Score ceiling (100)
    pub max: u32,
}

impl Default for HealthScoreConfig {
    fn default() -> Self {
        Self {
            base: 82,
            per_workout: 2,
            max: 100,
        }
    }
}

/// Top-level tracker configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Daily macro targets
    pub targets: DailyTargets,
    /// Hydration settings
    pub water: WaterConfig,
    /// Health score settings
    pub health: HealthScoreConfig,
    /// Nutrition estimator settings
    pub estimator: EstimatorConfig,
}

impl TrackerConfig {
    /// Load configuration from `FITTRACK_*` environment variables.
    ///
    /// Unset variables keep their defaults; set but unparseable values
    /// are an error rather than being silently ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if any set variable fails to parse or the
    /// resulting configuration fails validation
    pub fn from_env() -> AppResult<Self> {
        let mut config = Self::default();

        if let Some(calories) = parse_env_var("FITTRACK_CALORIE_TARGET")? {
            config.targets.calories = calories;
        }
        if let Some(protein) = parse_env_var("FITTRACK_PROTEIN_TARGET_G")? {
            config.targets.protein_g = protein;
        }
        if let Some(fat) = parse_env_var("FITTRACK_FAT_TARGET_G")? {
            config.targets.fat_g = fat;
        }
        if let Some(goal) = parse_env_var("FITTRACK_WATER_GOAL")? {
            config.water.goal_glasses = goal;
        }
        if let Some(glass_ml) = parse_env_var("FITTRACK_GLASS_ML")? {
            config.water.glass_ml = glass_ml;
        }
        if let Some(strategy) = parse_env_var("FITTRACK_MATCH_STRATEGY")? {
            config.estimator.match_strategy = strategy;
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error on non-positive targets or goals, a health score
    /// base above its maximum, or invalid estimator coefficients
    pub fn validate(&self) -> AppResult<()> {
        if self.targets.calories <= 0 {
            return Err(AppError::config("calorie target must be positive")
                .with_field("targets.calories"));
        }
        if !self.targets.protein_g.is_finite() || self.targets.protein_g <= 0.0 {
            return Err(AppError::config("protein target must be positive")
                .with_field("targets.protein_g"));
        }
        if !self.targets.fat_g.is_finite() || self.targets.fat_g <= 0.0 {
            return Err(AppError::config("fat target must be positive").with_field("targets.fat_g"));
        }
        if self.water.goal_glasses == 0 {
            return Err(AppError::config("water goal must be at least one glass")
                .with_field("water.goal_glasses"));
        }
        if self.water.glass_ml == 0 {
            return Err(
                AppError::config("glass size must be positive").with_field("water.glass_ml")
            );
        }
        if self.health.base > self.health.max {
            return Err(
                AppError::config("health score base cannot exceed its maximum")
                    .with_field("health.base"),
            );
        }
        self.estimator.validate()?;
        Ok(())
    }
}

/// Read and parse an environment variable, `None` when unset
fn parse_env_var<T>(key: &str) -> AppResult<Option<T>>
where
    T: FromStr,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.trim().parse::<T>().map(Some).map_err(|err| {
            AppError::config(format!("invalid value for {key}: {err}")).with_field(key)
        }),
        Err(_) => Ok(None),
    }
}
