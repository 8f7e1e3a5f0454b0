// ABOUTME: Nutrition estimation from free-form food names and gram quantities
// ABOUTME: Exact-then-partial table matching with a heuristic fallback for unknown foods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! Nutrition Estimator
//!
//! Turns a free-form food name and a quantity in grams into a
//! calorie/protein/fat estimate. Resolution runs in three stages against
//! the ordered reference table:
//!
//! 1. **Exact match** on the normalized name (lowercased, trimmed).
//! 2. **Partial match**: the first table entry, in definition order,
//!    whose key contains the input or is contained by it. First hit
//!    wins; later entries are never considered, so "pineapple juice"
//!    resolves to "apple" (an earlier entry and a substring of the
//!    input), not "pineapple". An empty input partial-matches the first
//!    entry outright. Disable with [`MatchStrategy::ExactOnly`].
//! 3. **Heuristic fallback** for anything unmatched: 2 kcal, 0.1 g
//!    protein, and 0.05 g fat per gram.
//!
//! Matched profiles are scaled by `quantity / 100`. Calories round to
//! the nearest integer, protein and fat to one decimal, halves away
//! from zero.
//!
//! Estimation is a total function: it never fails, never panics, and
//! does not validate the quantity. Zero yields a zero estimate and a
//! negative quantity yields a proportionally negative one; rejecting
//! such input is the calling layer's concern (see
//! [`crate::nutrition::daily_log`]).

use crate::errors::AppError;
use crate::nutrition::reference::{FoodReference, MacroProfile, REFERENCE_FOODS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// How food names are matched against the reference table
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Exact match first, then ordered first-hit substring matching
    /// in both directions (legacy behavior)
    #[default]
    Substring,
    /// Exact match only; anything else estimates via the fallback
    ExactOnly,
}

impl fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Substring => write!(f, "substring"),
            Self::ExactOnly => write!(f, "exact"),
        }
    }
}

impl FromStr for MatchStrategy {
    type Err = AppError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "exact" | "exact_only" => Ok(Self::ExactOnly),
            other => Err(AppError::config(format!(
                "unknown match strategy '{other}' (expected 'substring' or 'exact')"
            ))),
        }
    }
}

/// Per-gram coefficients for foods absent from the reference table
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FallbackEstimateConfig {
    /// Kilocalories assumed per gram (2.0)
    pub calories_per_gram: f64,
    /// Protein grams assumed per gram (0.1)
    pub protein_per_gram: f64,
    /// Fat grams assumed per gram (0.05)
    pub fat_per_gram: f64,
}

impl Default for FallbackEstimateConfig {
    fn default() -> Self {
        Self {
            calories_per_gram: 2.0,
            protein_per_gram: 0.1,
            fat_per_gram: 0.05,
        }
    }
}

impl FallbackEstimateConfig {
    /// Validate the fallback coefficients
    ///
    /// # Errors
    ///
    /// Returns an error if any coefficient is negative or non-finite
    pub fn validate(&self) -> Result<(), AppError> {
        let coefficients = [
            ("calories_per_gram", self.calories_per_gram),
            ("protein_per_gram", self.protein_per_gram),
            ("fat_per_gram", self.fat_per_gram),
        ];
        for (name, value) in coefficients {
            if !value.is_finite() || value < 0.0 {
                return Err(AppError::config(format!(
                    "fallback coefficient {name} must be finite and non-negative, got {value}"
                ))
                .with_field(name));
            }
        }
        Ok(())
    }
}

/// Estimator configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Name matching strategy
    pub match_strategy: MatchStrategy,
    /// Coefficients for the unknown-food fallback
    pub fallback: FallbackEstimateConfig,
}

impl EstimatorConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the fallback coefficients are invalid
    pub fn validate(&self) -> Result<(), AppError> {
        self.fallback.validate()
    }
}

/// Result of scaling a food to a requested quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutritionEstimate {
    /// Estimated kilocalories, rounded to the nearest integer
    pub calories: i64,
    /// Estimated protein in grams, rounded to one decimal
    pub protein_g: f64,
    /// Estimated fat in grams, rounded to one decimal
    pub fat_g: f64,
}

/// Outcome of resolving a food name against the reference table
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FoodMatch {
    /// The normalized name equals a table key
    Exact(&'static FoodReference),
    /// First table entry containing the input, or contained by it
    Partial(&'static FoodReference),
    /// No table entry matched; estimation uses the fallback
    Unmatched,
}

impl FoodMatch {
    /// The matched table entry, if any
    #[must_use]
    pub fn entry(&self) -> Option<&'static FoodReference> {
        match self {
            Self::Exact(entry) | Self::Partial(entry) => Some(entry),
            Self::Unmatched => None,
        }
    }

    /// Whether the name resolved to a table entry at all
    #[must_use]
    pub fn is_table_hit(&self) -> bool {
        !matches!(self, Self::Unmatched)
    }
}

/// Nutrition estimator over an ordered reference table
#[derive(Debug, Clone)]
pub struct Estimator {
    config: EstimatorConfig,
    table: &'static [FoodReference],
}

impl Default for Estimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Estimator {
    /// Create an estimator with the default configuration and the
    /// built-in reference table
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: EstimatorConfig::default(),
            table: REFERENCE_FOODS,
        }
    }

    /// Create an estimator with a custom configuration
    #[must_use]
    pub fn with_config(config: EstimatorConfig) -> Self {
        Self {
            config,
            table: REFERENCE_FOODS,
        }
    }

    /// Replace the reference table with a custom ordered table
    #[must_use]
    pub fn with_table(mut self, table: &'static [FoodReference]) -> Self {
        self.table = table;
        self
    }

    /// The active configuration
    #[must_use]
    pub fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// The active reference table
    #[must_use]
    pub fn table(&self) -> &'static [FoodReference] {
        self.table
    }

    /// Resolve a food name against the table without computing values.
    ///
    /// Exposes which entry (if any) an estimate would be based on;
    /// [`estimate`](Self::estimate) itself carries no such signal.
    #[must_use]
    pub fn resolve(&self, food_name: &str) -> FoodMatch {
        let normalized = normalize(food_name);

        if let Some(entry) = self.table.iter().find(|food| food.name == normalized) {
            return FoodMatch::Exact(entry);
        }

        if self.config.match_strategy == MatchStrategy::Substring {
            // First hit in definition order wins, including the empty
            // string, which every key contains.
            if let Some(entry) = self
                .table
                .iter()
                .find(|food| normalized.contains(food.name) || food.name.contains(&normalized))
            {
                return FoodMatch::Partial(entry);
            }
        }

        FoodMatch::Unmatched
    }

    /// Estimate nutrition for a quantity of a named food.
    ///
    /// Total function: unknown foods estimate via the per-gram fallback
    /// and the quantity is not validated. Zero or negative quantities
    /// produce zero or negative estimates.
    ///
    /// # Arguments
    /// * `food_name` - Free-form food name; lowercased and trimmed before matching
    /// * `quantity_grams` - Amount in grams the estimate is scaled to
    #[must_use]
    pub fn estimate(&self, food_name: &str, quantity_grams: f64) -> NutritionEstimate {
        let resolved = self.resolve(food_name);

        let estimate = resolved.entry().map_or_else(
            || self.fallback_estimate(quantity_grams),
            |entry| scale_profile(entry.per_100g, quantity_grams),
        );

        debug!(
            food = %food_name.trim(),
            quantity_grams,
            table_hit = resolved.is_table_hit(),
            calories = estimate.calories,
            "estimated nutrition"
        );

        estimate
    }

    /// Estimate only the calories for a quantity of a named food.
    ///
    /// Degenerate calories-only view of [`estimate`](Self::estimate).
    #[must_use]
    pub fn estimate_calories(&self, food_name: &str, quantity_grams: f64) -> i64 {
        self.estimate(food_name, quantity_grams).calories
    }

    fn fallback_estimate(&self, quantity_grams: f64) -> NutritionEstimate {
        let fallback = self.config.fallback;
        NutritionEstimate {
            calories: round_calories(quantity_grams * fallback.calories_per_gram),
            protein_g: round1(quantity_grams * fallback.protein_per_gram),
            fat_g: round1(quantity_grams * fallback.fat_per_gram),
        }
    }
}

/// Normalize a food name for table matching: trim and lowercase only
fn normalize(food_name: &str) -> String {
    food_name.trim().to_lowercase()
}

/// Scale a per-100g profile to the requested quantity
fn scale_profile(per_100g: MacroProfile, quantity_grams: f64) -> NutritionEstimate {
    let factor = quantity_grams / 100.0;
    NutritionEstimate {
        calories: round_calories(per_100g.calories * factor),
        protein_g: round1(per_100g.protein_g * factor),
        fat_g: round1(per_100g.fat_g * factor),
    }
}

/// Round to the nearest integer, halves away from zero
fn round_calories(value: f64) -> i64 {
    value.round() as i64
}

/// Round to one decimal place, halves away from zero
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
