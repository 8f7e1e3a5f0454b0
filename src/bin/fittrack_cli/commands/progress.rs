// ABOUTME: Body progress commands for fittrack-cli
// ABOUTME: Handles record and list operations against the progress history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

use fittrack::errors::AppResult;
use fittrack::progress::{ProgressEntry, ProgressHistory};
use fittrack::store::Store;
use tracing::info;

type Result<T> = AppResult<T>;

use crate::helpers::{display, state};

/// Record a body progress snapshot
pub fn record(
    store: &mut dyn Store,
    weight: f64,
    body_fat: Option<f64>,
    muscle: Option<f64>,
    notes: Option<String>,
) -> Result<()> {
    let mut entry = ProgressEntry::new(weight);
    if let Some(percent) = body_fat {
        entry = entry.with_body_fat(percent);
    }
    if let Some(kg) = muscle {
        entry = entry.with_muscle_mass(kg);
    }
    if let Some(notes) = notes {
        entry = entry.with_notes(notes);
    }

    let mut history = state::load_progress(store)?;
    let recorded = history.record(entry)?.clone();
    state::save_progress(store, &history)?;

    info!(weight_kg = recorded.weight_kg, "recorded progress");
    display::display_progress_entry(&recorded);

    if let Some(change) = history.weight_change() {
        println!("Weight change since first record: {change:+.1} kg");
    }

    Ok(())
}

/// List recorded snapshots, newest first
pub fn list(store: &dyn Store, json: bool) -> Result<()> {
    let history: ProgressHistory = state::load_progress(store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&history)?);
    } else {
        display::display_progress_history(&history);
    }

    Ok(())
}
