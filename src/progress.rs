// ABOUTME: Body progress records - weight, body fat, muscle mass, and measurements
// ABOUTME: ProgressHistory keeps entries newest-first and exposes the latest snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! Body progress tracking.

use crate::errors::{AppError, AppResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

/// Body circumference measurements in centimeters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyMeasurements {
    /// Chest circumference
    pub chest_cm: f64,
    /// Waist circumference
    pub waist_cm: f64,
    /// Hips circumference
    pub hips_cm: f64,
    /// Upper arm circumference
    pub arms_cm: f64,
    /// Thigh circumference
    pub thighs_cm: f64,
}

/// One recorded body progress snapshot
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressEntry {
    /// Unique identifier for this entry
    pub id: Uuid,
    /// Timestamp when the snapshot was recorded
    pub recorded_at: DateTime<Utc>,
    /// Body weight in kilograms
    pub weight_kg: f64,
    /// Body fat percentage
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat_percent: Option<f64>,
    /// Muscle mass in kilograms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub muscle_mass_kg: Option<f64>,
    /// Circumference measurements
    #[serde(skip_serializing_if = "Option::is_none")]
    pub measurements: Option<BodyMeasurements>,
    /// Free-form notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ProgressEntry {
    /// Create an entry with a fresh id and the current timestamp
    #[must_use]
    pub fn new(weight_kg: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            recorded_at: Utc::now(),
            weight_kg,
            body_fat_percent: None,
            muscle_mass_kg: None,
            measurements: None,
            notes: None,
        }
    }

    /// Set the body fat percentage
    #[must_use]
    pub fn with_body_fat(mut self, percent: f64) -> Self {
        self.body_fat_percent = Some(percent);
        self
    }

    /// Set the muscle mass
    #[must_use]
    pub fn with_muscle_mass(mut self, kg: f64) -> Self {
        self.muscle_mass_kg = Some(kg);
        self
    }

    /// Attach circumference measurements
    #[must_use]
    pub fn with_measurements(mut self, measurements: BodyMeasurements) -> Self {
        self.measurements = Some(measurements);
        self
    }

    /// Attach notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Recorded progress snapshots, newest first
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProgressHistory {
    entries: Vec<ProgressEntry>,
}

impl ProgressHistory {
    /// Create an empty history
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate and record a snapshot at the front of the history.
    ///
    /// # Errors
    ///
    /// Returns an error if the weight is not a finite positive number,
    /// or if body fat is outside 0..=100
    pub fn record(&mut self, entry: ProgressEntry) -> AppResult<&ProgressEntry> {
        if !entry.weight_kg.is_finite() || entry.weight_kg <= 0.0 {
            return Err(AppError::invalid_input(format!(
                "weight must be a positive number of kilograms, got {}",
                entry.weight_kg
            ))
            .with_field("weight_kg"));
        }
        if let Some(body_fat) = entry.body_fat_percent {
            if !body_fat.is_finite() || !(0.0..=100.0).contains(&body_fat) {
                return Err(AppError::out_of_range(format!(
                    "body fat must be a percentage between 0 and 100, got {body_fat}"
                ))
                .with_field("body_fat_percent"));
            }
        }

        debug!(
            weight_kg = entry.weight_kg,
            has_measurements = entry.measurements.is_some(),
            "recorded progress entry"
        );
        self.entries.insert(0, entry);
        // Safe: just inserted at the front.
        Ok(&self.entries[0])
    }

    /// The most recent snapshot, if any
    #[must_use]
    pub fn latest(&self) -> Option<&ProgressEntry> {
        self.entries.first()
    }

    /// All snapshots, newest first
    #[must_use]
    pub fn entries(&self) -> &[ProgressEntry] {
        &self.entries
    }

    /// Number of recorded snapshots
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no snapshots have been recorded
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove a snapshot by id
    ///
    /// # Errors
    ///
    /// Returns an error if no snapshot has the given id
    pub fn remove(&mut self, id: Uuid) -> AppResult<ProgressEntry> {
        let position = self
            .entries
            .iter()
            .position(|entry| entry.id == id)
            .ok_or_else(|| AppError::not_found("progress entry").with_entry_id(id))?;
        Ok(self.entries.remove(position))
    }

    /// Weight change from the oldest to the newest snapshot, in
    /// kilograms; `None` with fewer than two snapshots
    #[must_use]
    pub fn weight_change(&self) -> Option<f64> {
        if self.entries.len() < 2 {
            return None;
        }
        let newest = self.entries.first()?.weight_kg;
        let oldest = self.entries.last()?.weight_kg;
        Some(newest - oldest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_newest_first() {
        let mut history = ProgressHistory::new();

        history.record(ProgressEntry::new(82.0)).unwrap();
        history.record(ProgressEntry::new(81.2)).unwrap();
        history.record(ProgressEntry::new(80.5)).unwrap();

        assert_eq!(history.len(), 3);
        assert!((history.latest().unwrap().weight_kg - 80.5).abs() < f64::EPSILON);
        assert!((history.entries()[2].weight_kg - 82.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_record_rejects_invalid_weight() {
        let mut history = ProgressHistory::new();

        assert!(history.record(ProgressEntry::new(0.0)).is_err());
        assert!(history.record(ProgressEntry::new(-5.0)).is_err());
        assert!(history.record(ProgressEntry::new(f64::NAN)).is_err());
        assert!(history.is_empty());
    }

    #[test]
    fn test_record_rejects_out_of_range_body_fat() {
        let mut history = ProgressHistory::new();
        let entry = ProgressEntry::new(75.0).with_body_fat(130.0);

        let err = history.record(entry).unwrap_err();
        assert_eq!(err.context.field.as_deref(), Some("body_fat_percent"));
    }

    #[test]
    fn test_weight_change() {
        let mut history = ProgressHistory::new();
        assert!(history.weight_change().is_none());

        history.record(ProgressEntry::new(84.0)).unwrap();
        assert!(history.weight_change().is_none());

        history.record(ProgressEntry::new(81.5)).unwrap();
        let change = history.weight_change().unwrap();
        assert!((change - -2.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_remove_by_id() {
        let mut history = ProgressHistory::new();
        let id = history.record(ProgressEntry::new(79.0)).unwrap().id;

        assert!(history.remove(id).is_ok());
        assert!(history.is_empty());
        assert!(history.remove(id).is_err());
    }

    #[test]
    fn test_full_entry_round_trip() {
        let entry = ProgressEntry::new(77.7)
            .with_body_fat(18.2)
            .with_muscle_mass(34.5)
            .with_measurements(BodyMeasurements {
                chest_cm: 101.0,
                waist_cm: 84.0,
                hips_cm: 98.0,
                arms_cm: 36.5,
                thighs_cm: 58.0,
            })
            .with_notes("after cutting phase");

        let json = serde_json::to_string(&entry).unwrap();
        let restored: ProgressEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, entry);
    }
}
