// ABOUTME: Aggregated fitness, nutrition, and hydration reports over tracked history
// ABOUTME: Builders return None for empty input so callers can render a no-data message
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! Report generation over tracked history.

use crate::hydration::HydrationEntry;
use crate::nutrition::FoodEntry;
use crate::progress::ProgressEntry;
use crate::workouts::{WorkoutEntry, WorkoutType};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Reporting window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportPeriod {
    /// Last 7 days
    #[default]
    Week,
    /// Last 30 days
    Month,
    /// Last 3 months
    Quarter,
}

impl ReportPeriod {
    /// Parse from a string, defaulting unknown values to `Week`
    #[must_use]
    pub fn from_str_lossy(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "month" => Self::Month,
            "quarter" => Self::Quarter,
            _ => Self::Week,
        }
    }

    /// Human-readable window label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "Last 7 Days",
            Self::Month => "Last 30 Days",
            Self::Quarter => "Last 3 Months",
        }
    }

    /// Window length in days
    #[must_use]
    pub const fn days(self) -> i64 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
            Self::Quarter => 90,
        }
    }

    /// Earliest timestamp still inside the window ending at `now`
    #[must_use]
    pub fn cutoff(self, now: DateTime<Utc>) -> DateTime<Utc> {
        now - Duration::days(self.days())
    }
}

/// Anything carrying a log timestamp, so it can be filtered by period
pub trait Timestamped {
    /// When the record was logged
    fn logged_at(&self) -> DateTime<Utc>;
}

impl Timestamped for WorkoutEntry {
    fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}

impl Timestamped for FoodEntry {
    fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}

impl Timestamped for HydrationEntry {
    fn logged_at(&self) -> DateTime<Utc> {
        self.logged_at
    }
}

impl Timestamped for ProgressEntry {
    fn logged_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}

/// Entries whose timestamp falls inside the period ending at `now`,
/// in input order
pub fn entries_within<'a, T: Timestamped>(
    entries: impl IntoIterator<Item = &'a T>,
    period: ReportPeriod,
    now: DateTime<Utc>,
) -> Vec<&'a T> {
    let cutoff = period.cutoff(now);
    entries
        .into_iter()
        .filter(|entry| entry.logged_at() >= cutoff)
        .collect()
}

/// Per-workout-type aggregate inside a fitness report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeBreakdown {
    /// Workouts of this type
    pub count: u32,
    /// Calories burned by this type
    pub calories_burned: u32,
    /// Minutes spent on this type
    pub duration_min: u32,
}

/// Aggregated workout statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessReport {
    /// Number of workouts
    pub total_workouts: u32,
    /// Calories burned across all workouts
    pub total_calories_burned: u32,
    /// Minutes spent across all workouts
    pub total_duration_min: u32,
    /// Mean workout length in minutes, rounded
    pub avg_duration_min: u32,
    /// Total time in hours, rounded
    pub total_hours: u32,
    /// Per-type breakdown in first-seen order
    pub by_type: Vec<(WorkoutType, TypeBreakdown)>,
}

impl FitnessReport {
    /// Aggregate workout entries; `None` when there are none
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a WorkoutEntry>) -> Option<Self> {
        let mut total_workouts = 0u32;
        let mut total_calories_burned = 0u32;
        let mut total_duration_min = 0u32;
        let mut by_type: Vec<(WorkoutType, TypeBreakdown)> = Vec::new();

        for entry in entries {
            total_workouts += 1;
            total_calories_burned += entry.calories_burned;
            total_duration_min += entry.duration_min;

            let position = by_type
                .iter()
                .position(|(kind, _)| *kind == entry.workout_type)
                .unwrap_or_else(|| {
                    by_type.push((entry.workout_type, TypeBreakdown::default()));
                    by_type.len() - 1
                });
            // Safe: position points at an existing or freshly pushed pair.
            let stats = &mut by_type[position].1;
            stats.count += 1;
            stats.calories_burned += entry.calories_burned;
            stats.duration_min += entry.duration_min;
        }

        if total_workouts == 0 {
            return None;
        }

        let avg_duration_min =
            (f64::from(total_duration_min) / f64::from(total_workouts)).round() as u32;
        let total_hours = (f64::from(total_duration_min) / 60.0).round() as u32;

        Some(Self {
            total_workouts,
            total_calories_burned,
            total_duration_min,
            avg_duration_min,
            total_hours,
            by_type,
        })
    }
}

/// Aggregated food log statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NutritionReport {
    /// Number of food entries
    pub total_entries: u32,
    /// Calories across all entries
    pub total_calories: i64,
    /// Mean calories per entry, rounded
    pub avg_calories: i64,
}

impl NutritionReport {
    /// Aggregate food entries; `None` when there are none
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a FoodEntry>) -> Option<Self> {
        let mut total_entries = 0u32;
        let mut total_calories = 0i64;

        for entry in entries {
            total_entries += 1;
            total_calories += entry.estimate.calories;
        }

        if total_entries == 0 {
            return None;
        }

        let avg_calories = (total_calories as f64 / f64::from(total_entries)).round() as i64;
        Some(Self {
            total_entries,
            total_calories,
            avg_calories,
        })
    }
}

/// Aggregated water intake statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationReport {
    /// Number of hydration entries
    pub total_entries: u32,
    /// Milliliters drunk across all entries
    pub total_water_ml: u32,
    /// Mean milliliters per entry, rounded
    pub avg_water_ml: u32,
}

impl HydrationReport {
    /// Aggregate hydration entries; `None` when there are none
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a HydrationEntry>) -> Option<Self> {
        let mut total_entries = 0u32;
        let mut total_water_ml = 0u32;

        for entry in entries {
            total_entries += 1;
            total_water_ml += entry.amount_ml;
        }

        if total_entries == 0 {
            return None;
        }

        let avg_water_ml = (f64::from(total_water_ml) / f64::from(total_entries)).round() as u32;
        Some(Self {
            total_entries,
            total_water_ml,
            avg_water_ml,
        })
    }
}

/// Fitness slice of the combined summary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FitnessSummary {
    /// Number of workouts
    pub total_workouts: u32,
    /// Calories burned across all workouts
    pub total_calories_burned: u32,
    /// Mean workout length in minutes, rounded
    pub avg_duration_min: u32,
}

/// Body progress slice of the combined summary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProgressSummary {
    /// Current weight in kilograms
    pub weight_kg: f64,
    /// Current body fat percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// Current muscle mass in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_mass_kg: Option<f64>,
}

/// Combined health summary; sections are present only when their
/// source data is
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryReport {
    /// Workout overview
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness: Option<FitnessSummary>,
    /// Latest body progress
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress: Option<ProgressSummary>,
}

impl SummaryReport {
    /// Assemble the summary from whichever parts have data
    #[must_use]
    pub fn build(fitness: Option<&FitnessReport>, latest_progress: Option<&ProgressEntry>) -> Self {
        Self {
            fitness: fitness.map(|report| FitnessSummary {
                total_workouts: report.total_workouts,
                total_calories_burned: report.total_calories_burned,
                avg_duration_min: report.avg_duration_min,
            }),
            progress: latest_progress.map(|entry| ProgressSummary {
                weight_kg: entry.weight_kg,
                body_fat_percent: entry.body_fat_percent,
                muscle_mass_kg: entry.muscle_mass_kg,
            }),
        }
    }

    /// Whether no section has data
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fitness.is_none() && self.progress.is_none()
    }
}
