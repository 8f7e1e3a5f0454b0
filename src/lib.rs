// ABOUTME: Main library entry point for the Fittrack nutrition and fitness tracker
// ABOUTME: Provides food calorie estimation, daily logs, and progress reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

#![deny(unsafe_code)]

//! # Fittrack
//!
//! A nutrition and fitness tracking library with a built-in food
//! calorie estimator. All trackers are plain owned values that the
//! caller wires together, so the same core drives a CLI, tests, and
//! embedding into larger services.
//!
//! ## Features
//!
//! - **Food estimation**: Per-100g macro lookup over a curated
//!   reference table with substring matching and a heuristic fallback
//! - **Daily logs**: Meal-organized food entries with macro totals and
//!   progress against daily targets
//! - **Activity tracking**: Workouts, water intake, and body progress
//!   history
//! - **Reports**: Aggregated fitness, nutrition, and hydration
//!   summaries over a reporting period
//! - **Pluggable storage**: In-memory and JSON file backends behind a
//!   single trait
//!
//! ## Example Usage
//!
//! ```rust
//! use fittrack::nutrition::Estimator;
//!
//! let estimator = Estimator::new();
//! let estimate = estimator.estimate("chicken", 150.0);
//! println!("{} kcal", estimate.calories);
//! ```

/// Tracker configuration, daily targets, and environment overrides
pub mod config;

/// Unified error handling system with standard error codes
pub mod errors;

/// Daily water intake tracking
pub mod hydration;

/// Production logging and structured output
pub mod logging;

/// Food reference data, macro estimation, and the daily nutrition log
pub mod nutrition;

/// User profile and body mass index calculation
pub mod profile;

/// Body progress history
pub mod progress;

/// Aggregated reports over tracked history
pub mod reports;

/// Storage abstraction layer with pluggable backends
pub mod store;

/// Health score derivation and the dashboard snapshot
pub mod wellness;

/// Workout logging and aggregates
pub mod workouts;
