// ABOUTME: Workout logging - typed entries with exercises, intensity, and burned calories
// ABOUTME: WorkoutLog aggregate with validated add, removal by id, and totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! Workout logging.
//!
//! [`WorkoutLog`] owns the recorded [`WorkoutEntry`] values for a user.
//! Entries carry an optional exercise breakdown (sets, reps, weight) and
//! feed the fitness report and the dashboard's burned-calorie total.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Category of a workout
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Cardiovascular training
    Cardio,
    /// Strength and resistance training
    Strength,
    /// Stretching and mobility work
    Flexibility,
    /// Active recovery
    Rest,
    /// Anything uncategorized
    Other,
}

impl WorkoutType {
    /// Parse workout type from string, defaulting to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "cardio" => Self::Cardio,
            "strength" => Self::Strength,
            "flexibility" => Self::Flexibility,
            "rest" => Self::Rest,
            _ => Self::Other,
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cardio => write!(f, "Cardio"),
            Self::Strength => write!(f, "Strength"),
            Self::Flexibility => write!(f, "Flexibility"),
            Self::Rest => write!(f, "Rest"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// Workout intensity
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Intensity {
    /// Low intensity
    Low,
    /// Moderate intensity
    #[default]
    Moderate,
    /// High intensity
    High,
}

impl Intensity {
    /// Parse intensity from string, defaulting to `Moderate`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            _ => Self::Moderate,
        }
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Moderate => write!(f, "moderate"),
            Self::High => write!(f, "high"),
        }
    }
}

/// A single exercise within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    /// Exercise name
    pub name: String,
    /// Number of sets
    pub sets: u32,
    /// Repetitions per set
    pub reps: u32,
    /// Weight in kilograms, zero for bodyweight work
    pub weight_kg: f64,
}

impl Exercise {
    /// Create a bodyweight exercise (zero weight)
    #[must_use]
    pub fn new(name: impl Into<String>, sets: u32, reps: u32) -> Self {
        Self {
            name: name.into(),
            sets,
            reps,
            weight_kg: 0.0,
        }
    }

    /// Set the weight in kilograms
    #[must_use]
    pub fn with_weight(mut self, weight_kg: f64) -> Self {
        self.weight_kg = weight_kg;
        self
    }
}

/// A recorded workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutEntry {
    /// Unique identifier for this entry
    pub id: Uuid,
    /// Workout name
    pub name: String,
    /// Workout category
    pub workout_type: WorkoutType,
    /// Duration in minutes
    pub duration_min: u32,
    /// Intensity level
    pub intensity: Intensity,
    /// Calories burned
    pub calories_burned: u32,
    /// Exercise breakdown, empty when not tracked
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub exercises: Vec<Exercise>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    /// Timestamp when the workout was logged
    pub logged_at: DateTime<Utc>,
}

impl WorkoutEntry {
    /// Create an entry with a fresh id, moderate intensity, and the
    /// current timestamp
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        workout_type: WorkoutType,
        duration_min: u32,
        calories_burned: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            workout_type,
            duration_min,
            intensity: Intensity::default(),
            calories_burned,
            exercises: Vec::new(),
            notes: None,
            logged_at: Utc::now(),
        }
    }

    /// Set the intensity
    #[must_use]
    pub fn with_intensity(mut self, intensity: Intensity) -> Self {
        self.intensity = intensity;
        self
    }

    /// Attach an exercise breakdown
    #[must_use]
    pub fn with_exercises(mut self, exercises: Vec<Exercise>) -> Self {
        self.exercises = exercises;
        self
    }

    /// Attach notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Collection of recorded workouts
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutLog {
    entries: Vec<WorkoutEntry>,
}

impl WorkoutLog {
    /// Create an empty log
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and append a workout entry.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty after trimming or the
    /// duration is zero
    pub fn add(&mut self, entry: WorkoutEntry) -> AppResult<&WorkoutEntry> {
        if entry.name.trim().is_empty() {
            return Err(AppError::missing_field("workout_name"));
        }
        if entry.duration_min == 0 {
            return Err(
                AppError::invalid_input("workout duration must be at least one minute")
                    .with_field("duration_min"),
            );
        }

        debug!(
            workout = %entry.name,
            workout_type = %entry.workout_type,
            duration_min = entry.duration_min,
            calories_burned = entry.calories_burned,
            "logged workout"
        );

        self.entries.push(entry);
        // Safe: just pushed, the vec cannot be empty.
        Ok(&self.entries[self.entries.len() - 1])
    }

    /// Remove an entry by id
    ///
    /// # Errors
    ///
    /// Returns an error if no entry has the given id
    pub fn remove(&mut self, id: Uuid) -> AppResult<WorkoutEntry> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| AppError::not_found("workout entry").with_entry_id(id))?;
        Ok(self.entries.remove(position))
    }

    /// Recorded entries, in insertion order
    #[must_use]
    pub fn entries(&self) -> &[WorkoutEntry] {
        &self.entries
    }

    /// Number of recorded workouts
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no workouts have been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of completed workouts, as used by the health score
    #[must_use]
    pub fn completed_count(&self) -> u32 {
        self.entries.len() as u32
    }

    /// Sum of calories burned across all workouts
    #[must_use]
    pub fn total_calories_burned(&self) -> u32 {
        self.entries.iter().map(|entry| entry.calories_burned).sum()
    }

    /// Sum of workout durations in minutes
    #[must_use]
    pub fn total_duration_min(&self) -> u32 {
        self.entries.iter().map(|entry| entry.duration_min).sum()
    }
}
