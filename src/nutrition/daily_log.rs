// ABOUTME: Caller-owned daily meal log aggregating estimated food entries per meal
// ABOUTME: Validates input, runs the estimator, and computes meal and day totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! Daily meal logging.
//!
//! [`DailyNutritionLog`] is a plain value owned by the caller; nothing
//! here touches global state or storage. The log validates food name and
//! quantity before estimating (the estimator itself accepts anything),
//! appends entries to one of four meals, and derives meal totals, day
//! totals, and progress against daily targets.

use crate::config::DailyTargets;
use crate::errors::{AppError, AppResult};
use crate::nutrition::estimator::{round1, Estimator, NutritionEstimate};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;
use uuid::Uuid;

/// Type of meal
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealType {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealType {
    /// All meal types in day order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Parse meal type from string, defaulting to `Snack`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "breakfast" => Self::Breakfast,
            "lunch" => Self::Lunch,
            "dinner" => Self::Dinner,
            _ => Self::Snack,
        }
    }
}

impl fmt::Display for MealType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Breakfast => write!(f, "Breakfast"),
            Self::Lunch => write!(f, "Lunch"),
            Self::Dinner => write!(f, "Dinner"),
            Self::Snack => write!(f, "Snacks"),
        }
    }
}

/// A single logged food with its estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodEntry {
    /// Unique identifier for this entry
    pub id: Uuid,
    /// Food name as entered by the user (not normalized)
    pub name: String,
    /// Quantity in grams
    pub quantity_g: f64,
    /// Estimated nutrition for the quantity
    pub estimate: NutritionEstimate,
    /// Timestamp when the entry was logged
    pub logged_at: DateTime<Utc>,
}

impl FoodEntry {
    /// Create an entry with a fresh id and the current timestamp
    #[must_use]
    pub fn new(name: impl Into<String>, quantity_g: f64, estimate: NutritionEstimate) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            quantity_g,
            estimate,
            logged_at: Utc::now(),
        }
    }
}

/// Summed nutrition over a set of entries
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroTotals {
    /// Total kilocalories
    pub calories: i64,
    /// Total protein in grams, rounded to one decimal
    pub protein_g: f64,
    /// Total fat in grams, rounded to one decimal
    pub fat_g: f64,
}

/// Consumption as a fraction of each daily target, clamped to 0..=1
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MacroProgress {
    /// Calories consumed over calorie target
    pub calories: f64,
    /// Protein consumed over protein target
    pub protein: f64,
    /// Fat consumed over fat target
    pub fat: f64,
}

/// One day of logged meals
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyNutritionLog {
    /// The day this log covers
    pub date: Option<NaiveDate>,
    breakfast: Vec<FoodEntry>,
    lunch: Vec<FoodEntry>,
    dinner: Vec<FoodEntry>,
    snacks: Vec<FoodEntry>,
}

impl DailyNutritionLog {
    /// Create an empty log for the given day
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date: Some(date),
            ..Self::default()
        }
    }

    /// Create an empty log for today (UTC)
    #[must_use]
    pub fn for_today() -> Self {
        Self::new(Utc::now().date_naive())
    }

    /// Validate, estimate, and append a food entry to a meal.
    ///
    /// The name must be non-empty after trimming and the quantity must
    /// be a finite, positive number of grams. The estimator itself does
    /// not enforce either rule.
    ///
    /// # Errors
    ///
    /// Returns an error if the name is empty or the quantity is not a
    /// finite positive number
    pub fn log_food(
        &mut self,
        estimator: &Estimator,
        meal: MealType,
        name: &str,
        quantity_g: f64,
    ) -> AppResult<&FoodEntry> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(AppError::missing_field("food_name"));
        }
        if !quantity_g.is_finite() || quantity_g <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "quantity must be a positive number of grams, got {quantity_g}"
            ))
            .with_field("quantity_g"));
        }

        let estimate = estimator.estimate(trimmed, quantity_g);
        let entry = FoodEntry::new(trimmed, quantity_g, estimate);

        debug!(
            meal = %meal,
            food = %entry.name,
            quantity_g,
            calories = estimate.calories,
            "logged food entry"
        );

        let entries = self.entries_mut(meal);
        entries.push(entry);
        // Safe: just pushed, the vec cannot be empty.
        Ok(&entries[entries.len() - 1])
    }

    /// Append a pre-built entry to a meal
    pub fn add_entry(&mut self, meal: MealType, entry: FoodEntry) {
        self.entries_mut(meal).push(entry);
    }

    /// Remove an entry from a meal by id
    ///
    /// # Errors
    ///
    /// Returns an error if no entry in the meal has the given id
    pub fn remove_entry(&mut self, meal: MealType, id: Uuid) -> AppResult<FoodEntry> {
        let entries = self.entries_mut(meal);
        let position = entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| AppError::not_found("food entry").with_entry_id(id))?;
        Ok(entries.remove(position))
    }

    /// Entries logged for a meal, in insertion order
    #[must_use]
    pub fn entries(&self, meal: MealType) -> &[FoodEntry] {
        match meal {
            MealType::Breakfast => &self.breakfast,
            MealType::Lunch => &self.lunch,
            MealType::Dinner => &self.dinner,
            MealType::Snack => &self.snacks,
        }
    }

    /// Iterate over all entries across meals, in day order
    pub fn iter_all(&self) -> impl Iterator<Item = &FoodEntry> {
        MealType::ALL
            .into_iter()
            .flat_map(move |meal| self.entries(meal).iter())
    }

    /// Total number of entries across all meals
    #[must_use]
    pub fn entry_count(&self) -> usize {
        MealType::ALL
            .into_iter()
            .map(|meal| self.entries(meal).len())
            .sum()
    }

    /// Whether no food has been logged yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entry_count() == 0
    }

    /// Summed nutrition for one meal
    #[must_use]
    pub fn meal_totals(&self, meal: MealType) -> MacroTotals {
        sum_entries(self.entries(meal).iter())
    }

    /// Summed nutrition for the whole day
    #[must_use]
    pub fn daily_totals(&self) -> MacroTotals {
        sum_entries(self.iter_all())
    }

    /// Day totals as a fraction of each target, clamped at 100 %
    #[must_use]
    pub fn progress_against(&self, targets: &DailyTargets) -> MacroProgress {
        let totals = self.daily_totals();
        MacroProgress {
            calories: fraction_of(totals.calories as f64, targets.calories as f64),
            protein: fraction_of(totals.protein_g, targets.protein_g),
            fat: fraction_of(totals.fat_g, targets.fat_g),
        }
    }

    fn entries_mut(&mut self, meal: MealType) -> &mut Vec<FoodEntry> {
        match meal {
            MealType::Breakfast => &mut self.breakfast,
            MealType::Lunch => &mut self.lunch,
            MealType::Dinner => &mut self.dinner,
            MealType::Snack => &mut self.snacks,
        }
    }
}

/// Sum entry estimates; protein and fat re-rounded to one decimal
fn sum_entries<'a>(entries: impl Iterator<Item = &'a FoodEntry>) -> MacroTotals {
    let mut calories = 0_i64;
    let mut protein_g = 0.0_f64;
    let mut fat_g = 0.0_f64;

    for entry in entries {
        calories += entry.estimate.calories;
        protein_g += entry.estimate.protein_g;
        fat_g += entry.estimate.fat_g;
    }

    MacroTotals {
        calories,
        protein_g: round1(protein_g),
        fat_g: round1(fat_g),
    }
}

/// Fraction of target consumed, clamped to 0..=1; zero when the target is zero
fn fraction_of(total: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return 0.0;
    }
    (total / target).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimator() -> Estimator {
        Estimator::new()
    }

    #[test]
    fn test_log_food_appends_with_estimate() {
        let mut log = DailyNutritionLog::for_today();
        let entry = log
            .log_food(&estimator(), MealType::Breakfast, "banana", 120.0)
            .unwrap();

        assert_eq!(entry.name, "banana");
        assert_eq!(entry.estimate.calories, 107);
        assert_eq!(log.entries(MealType::Breakfast).len(), 1);
        assert_eq!(log.entry_count(), 1);
    }

    #[test]
    fn test_log_food_trims_name_before_storing() {
        let mut log = DailyNutritionLog::for_today();
        let entry = log
            .log_food(&estimator(), MealType::Lunch, "  Rice  ", 200.0)
            .unwrap();

        assert_eq!(entry.name, "Rice");
        assert_eq!(entry.estimate.calories, 260);
    }

    #[test]
    fn test_log_food_rejects_empty_name() {
        let mut log = DailyNutritionLog::for_today();
        let err = log
            .log_food(&estimator(), MealType::Dinner, "   ", 100.0)
            .unwrap_err();

        assert_eq!(err.context.field.as_deref(), Some("food_name"));
        assert!(log.is_empty());
    }

    #[test]
    fn test_log_food_rejects_non_positive_quantity() {
        let mut log = DailyNutritionLog::for_today();

        assert!(log
            .log_food(&estimator(), MealType::Dinner, "rice", 0.0)
            .is_err());
        assert!(log
            .log_food(&estimator(), MealType::Dinner, "rice", -50.0)
            .is_err());
        assert!(log
            .log_food(&estimator(), MealType::Dinner, "rice", f64::NAN)
            .is_err());
        assert!(log.is_empty());
    }

    #[test]
    fn test_remove_entry_by_id() {
        let mut log = DailyNutritionLog::for_today();
        let id = log
            .log_food(&estimator(), MealType::Snack, "almonds", 30.0)
            .unwrap()
            .id;

        let removed = log.remove_entry(MealType::Snack, id).unwrap();
        assert_eq!(removed.id, id);
        assert!(log.is_empty());

        let err = log.remove_entry(MealType::Snack, id).unwrap_err();
        assert!(err.is_client_error());
    }

    #[test]
    fn test_meal_and_daily_totals() {
        let mut log = DailyNutritionLog::for_today();
        let est = estimator();

        // 100 g apple: 52 kcal / 0.3 g / 0.2 g
        log.log_food(&est, MealType::Breakfast, "apple", 100.0)
            .unwrap();
        // 100 g egg: 155 kcal / 13.0 g / 11.0 g
        log.log_food(&est, MealType::Breakfast, "egg", 100.0)
            .unwrap();
        // 150 g chicken: 248 kcal / 46.5 g / 5.4 g
        log.log_food(&est, MealType::Dinner, "chicken", 150.0)
            .unwrap();

        let breakfast = log.meal_totals(MealType::Breakfast);
        assert_eq!(breakfast.calories, 207);
        assert!((breakfast.protein_g - 13.3).abs() < f64::EPSILON);
        assert!((breakfast.fat_g - 11.2).abs() < f64::EPSILON);

        let day = log.daily_totals();
        assert_eq!(day.calories, 455);
        assert!((day.protein_g - 59.8).abs() < f64::EPSILON);
        assert!((day.fat_g - 16.6).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_clamps_at_full_target() {
        let mut log = DailyNutritionLog::for_today();
        let est = estimator();
        let targets = DailyTargets {
            calories: 100,
            protein_g: 10.0,
            fat_g: 5.0,
        };

        // 500 g rice: 650 kcal, 13.5 g protein, 1.5 g fat
        log.log_food(&est, MealType::Lunch, "rice", 500.0).unwrap();

        let progress = log.progress_against(&targets);
        assert!((progress.calories - 1.0).abs() < f64::EPSILON);
        assert!((progress.protein - 1.0).abs() < f64::EPSILON);
        assert!((progress.fat - 0.3).abs() < f64::EPSILON);
    }

    #[test]
    fn test_progress_with_zero_target_is_zero() {
        let mut log = DailyNutritionLog::for_today();
        log.log_food(&estimator(), MealType::Lunch, "rice", 100.0)
            .unwrap();

        let targets = DailyTargets {
            calories: 0,
            protein_g: 0.0,
            fat_g: 0.0,
        };
        let progress = log.progress_against(&targets);

        assert!(progress.calories.abs() < f64::EPSILON);
        assert!(progress.protein.abs() < f64::EPSILON);
    }

    #[test]
    fn test_meal_type_lossy_parsing() {
        assert_eq!(MealType::from_str_lossy("Breakfast"), MealType::Breakfast);
        assert_eq!(MealType::from_str_lossy("LUNCH"), MealType::Lunch);
        assert_eq!(MealType::from_str_lossy("supper"), MealType::Snack);
    }

    #[test]
    fn test_iter_all_walks_meals_in_day_order() {
        let mut log = DailyNutritionLog::for_today();
        let est = estimator();

        log.log_food(&est, MealType::Dinner, "fish", 100.0).unwrap();
        log.log_food(&est, MealType::Breakfast, "oats", 50.0)
            .unwrap();

        let names: Vec<&str> = log.iter_all().map(|entry| entry.name.as_str()).collect();
        assert_eq!(names, ["oats", "fish"]);
    }

    #[test]
    fn test_serde_round_trip() {
        let mut log = DailyNutritionLog::for_today();
        log.log_food(&estimator(), MealType::Snack, "walnuts", 25.0)
            .unwrap();

        let json = serde_json::to_string(&log).unwrap();
        let restored: DailyNutritionLog = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.entry_count(), 1);
        assert_eq!(restored.daily_totals(), log.daily_totals());
    }
}
