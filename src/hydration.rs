// ABOUTME: Daily water intake tracking against a configurable glass goal
// ABOUTME: WaterTracker aggregate plus timestamped snapshots for reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! Hydration tracking.
//!
//! [`WaterTracker`] counts glasses toward a daily goal. Adding stops at
//! the goal, setting clamps to it, and the milliliter total is derived
//! from the configured glass size.

use crate::config::WaterConfig;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Daily water intake tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterTracker {
    /// Glasses drunk today
    pub glasses: u32,
    /// Daily goal in glasses
    pub goal: u32,
    /// Milliliters per glass
    pub glass_ml: u32,
}

impl Default for WaterTracker {
    fn default() -> Self {
        Self::new(&WaterConfig::default())
    }
}

impl WaterTracker {
    /// Create an empty tracker from hydration configuration
    #[must_use]
    pub fn new(config: &WaterConfig) -> Self {
        Self {
            glasses: 0,
            goal: config.goal_glasses,
            glass_ml: config.glass_ml,
        }
    }

    /// Add one glass; counting stops at the goal.
    ///
    /// Returns whether a glass was actually added.
    pub fn add_glass(&mut self) -> bool {
        if self.glasses < self.goal {
            self.glasses += 1;
            true
        } else {
            false
        }
    }

    /// Set the glass count directly, clamped to the goal
    pub fn set_glasses(&mut self, glasses: u32) {
        self.glasses = glasses.min(self.goal);
    }

    /// Reset the count to zero
    pub fn reset(&mut self) {
        self.glasses = 0;
    }

    /// Total water drunk in milliliters
    #[must_use]
    pub fn total_ml(&self) -> u32 {
        self.glasses * self.glass_ml
    }

    /// Fraction of the goal reached, clamped to 0..=1
    #[must_use]
    pub fn progress(&self) -> f64 {
        if self.goal == 0 {
            return 0.0;
        }
        (f64::from(self.glasses) / f64::from(self.goal)).min(1.0)
    }

    /// Whether the daily goal has been reached
    #[must_use]
    pub fn is_goal_met(&self) -> bool {
        self.glasses >= self.goal
    }

    /// Capture the current state as a timestamped entry
    #[must_use]
    pub fn snapshot(&self) -> HydrationEntry {
        HydrationEntry {
            id: Uuid::new_v4(),
            glasses: self.glasses,
            amount_ml: self.total_ml(),
            logged_at: Utc::now(),
        }
    }
}

/// A recorded hydration state, used for history and reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HydrationEntry {
    /// Unique identifier for this entry
    pub id: Uuid,
    /// Glasses drunk at snapshot time
    pub glasses: u32,
    /// Water amount in milliliters
    pub amount_ml: u32,
    /// Timestamp of the snapshot
    pub logged_at: DateTime<Utc>,
}
