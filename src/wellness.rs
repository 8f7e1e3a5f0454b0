// ABOUTME: Health score derivation and the combined dashboard snapshot
// ABOUTME: Pulls today's numbers from the nutrition, workout, and water trackers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! Wellness score and dashboard aggregation.

use crate::config::{DailyTargets, HealthScoreConfig};
use crate::hydration::WaterTracker;
use crate::nutrition::DailyNutritionLog;
use crate::workouts::WorkoutLog;
use serde::{Deserialize, Serialize};

/// Health score from completed workout count.
///
/// Starts at the configured base and climbs per workout, capped at the
/// configured maximum
#[must_use]
pub fn health_score(workouts_completed: u32, config: &HealthScoreConfig) -> u32 {
    config
        .base
        .saturating_add(workouts_completed.saturating_mul(config.per_workout))
        .min(config.max)
}

/// One-screen summary of today's activity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Calories eaten today
    pub calories_consumed: i64,
    /// Calories burned across logged workouts
    pub calories_burned: u32,
    /// Glasses of water drunk
    pub water_glasses: u32,
    /// Daily water goal in glasses
    pub water_goal: u32,
    /// Derived health score
    pub health_score: u32,
    /// Daily calorie target
    pub calorie_target: i64,
}

impl DashboardSnapshot {
    /// Assemble the snapshot from the individual trackers
    #[must_use]
    pub fn build(
        nutrition: &DailyNutritionLog,
        workouts: &WorkoutLog,
        water: &WaterTracker,
        targets: &DailyTargets,
        health: &HealthScoreConfig,
    ) -> Self {
        Self {
            calories_consumed: nutrition.daily_totals().calories,
            calories_burned: workouts.total_calories_burned(),
            water_glasses: water.glasses,
            water_goal: water.goal,
            health_score: health_score(workouts.completed_count(), health),
            calorie_target: targets.calories,
        }
    }

    /// Water intake rendered as `"3/8"`
    #[must_use]
    pub fn water_display(&self) -> String {
        format!("{}/{}", self.water_glasses, self.water_goal)
    }

    /// How far through the calorie target today's intake is, clamped
    /// to `0.0..=1.0`
    #[must_use]
    pub fn calorie_progress(&self) -> f64 {
        if self.calorie_target <= 0 {
            return 0.0;
        }
        (self.calories_consumed as f64 / self.calorie_target as f64).clamp(0.0, 1.0)
    }
}
