// ABOUTME: Nutrition domain - reference food data, estimation, and daily meal logging
// ABOUTME: Exposes the estimator, the built-in food table, and the daily log aggregate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! Nutrition estimation and meal logging.
//!
//! The [`estimator`] module turns a free-form food name and a quantity in
//! grams into a calorie/protein/fat estimate against the built-in
//! [`reference`] table. The [`daily_log`] module is the caller-owned
//! aggregate that validates input, runs the estimator, and accumulates
//! entries per meal.

pub mod daily_log;
pub mod estimator;
pub mod reference;

pub use daily_log::{DailyNutritionLog, FoodEntry, MacroProgress, MacroTotals, MealType};
pub use estimator::{
    Estimator, EstimatorConfig, FallbackEstimateConfig, FoodMatch, MatchStrategy,
    NutritionEstimate,
};
pub use reference::{FoodReference, MacroProfile, REFERENCE_FOODS};
