// ABOUTME: Report generation command for fittrack-cli
// ABOUTME: Filters tracked history by period and prints the aggregated report
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

use chrono::Utc;
use fittrack::errors::AppResult;
use fittrack::reports::{
    entries_within, FitnessReport, HydrationReport, NutritionReport, ReportPeriod, SummaryReport,
};
use fittrack::store::Store;
use tracing::debug;

type Result<T> = AppResult<T>;

use crate::helpers::{display, state};
use crate::ReportKind;

/// Generate and print the requested report
pub fn run(store: &dyn Store, kind: ReportKind, period: &str, json: bool) -> Result<()> {
    let period = ReportPeriod::from_str_lossy(period);
    let now = Utc::now();
    debug!(period = period.label(), "generating report");

    match kind {
        ReportKind::Fitness => {
            let log = state::load_workouts(store)?;
            let entries = entries_within(log.entries(), period, now);
            match FitnessReport::from_entries(entries) {
                Some(report) if json => println!("{}", serde_json::to_string_pretty(&report)?),
                Some(report) => display::display_fitness_report(&report, period),
                None => println!("No fitness data available for the selected period."),
            }
        }
        ReportKind::Nutrition => {
            let log = state::load_nutrition_log(store)?;
            let entries = entries_within(log.iter_all(), period, now);
            match NutritionReport::from_entries(entries) {
                Some(report) if json => println!("{}", serde_json::to_string_pretty(&report)?),
                Some(report) => display::display_nutrition_report(&report, period),
                None => println!("No nutrition data available for the selected period."),
            }
        }
        ReportKind::Hydration => {
            let history = state::load_hydration_history(store)?;
            let entries = entries_within(&history, period, now);
            match HydrationReport::from_entries(entries) {
                Some(report) if json => println!("{}", serde_json::to_string_pretty(&report)?),
                Some(report) => display::display_hydration_report(&report, period),
                None => println!("No hydration data available for the selected period."),
            }
        }
        ReportKind::Summary => {
            let workouts = state::load_workouts(store)?;
            let progress = state::load_progress(store)?;

            let entries = entries_within(workouts.entries(), period, now);
            let fitness = FitnessReport::from_entries(entries);
            let latest = progress.latest();

            let summary = SummaryReport::build(fitness.as_ref(), latest);
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else if summary.is_empty() {
                println!("No data available for the selected period.");
            } else {
                display::display_summary_report(&summary, period);
            }
        }
    }

    Ok(())
}
