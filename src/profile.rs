// ABOUTME: User profile data and body mass index calculation
// ABOUTME: BMI categories follow the standard WHO thresholds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! User profile and body metrics.

use crate::errors::{AppError, AppResult};
use crate::nutrition::estimator::round1;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Account and body data for a single user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Age in years
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    /// Self-reported gender
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    /// Height in centimeters
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_cm: Option<f64>,
    /// Weight in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight_kg: Option<f64>,
    /// Free-form fitness goals
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fitness_goals: Option<String>,
    /// Daily calorie target override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub daily_calorie_target: Option<i64>,
}

impl UserProfile {
    /// Create a profile with only name and email set
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    /// BMI from the stored height and weight.
    ///
    /// # Errors
    ///
    /// Returns an error if height or weight is missing or not a
    /// positive finite number
    pub fn bmi(&self) -> AppResult<Bmi> {
        let weight = self
            .weight_kg
            .ok_or_else(|| AppError::missing_field("weight_kg"))?;
        let height = self
            .height_cm
            .ok_or_else(|| AppError::missing_field("height_cm"))?;
        bmi(weight, height)
    }
}

/// Body mass index value and its category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bmi {
    /// BMI value rounded to one decimal place
    pub value: f64,
    /// Weight category for the value
    pub category: BmiCategory,
}

impl fmt::Display for Bmi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.value, self.category)
    }
}

/// BMI weight category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to 25
    NormalWeight,
    /// BMI from 25 up to 30
    Overweight,
    /// BMI of 30 and above
    Obese,
}

impl BmiCategory {
    fn from_value(bmi: f64) -> Self {
        if bmi < 18.5 {
            Self::Underweight
        } else if bmi < 25.0 {
            Self::NormalWeight
        } else if bmi < 30.0 {
            Self::Overweight
        } else {
            Self::Obese
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        };
        write!(f, "{label}")
    }
}

/// Compute BMI from weight in kilograms and height in centimeters.
///
/// The category is decided on the exact value; the reported value is
/// rounded to one decimal place.
///
/// # Errors
///
/// Returns an error unless both inputs are positive finite numbers
pub fn bmi(weight_kg: f64, height_cm: f64) -> AppResult<Bmi> {
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "weight must be a positive number of kilograms, got {weight_kg}"
        ))
        .with_field("weight_kg"));
    }
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "height must be a positive number of centimeters, got {height_cm}"
        ))
        .with_field("height_cm"));
    }

    let height_m = height_cm / 100.0;
    let exact = weight_kg / (height_m * height_m);
    Ok(Bmi {
        value: round1(exact),
        category: BmiCategory::from_value(exact),
    })
}
