// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project
// ABOUTME: Output formatting helpers for fittrack-cli
// ABOUTME: Provides consistent display functions for estimates, logs, and reports

use fittrack::config::DailyTargets;
use fittrack::hydration::WaterTracker;
use fittrack::nutrition::{DailyNutritionLog, FoodEntry, FoodMatch, MacroTotals, MealType};
use fittrack::profile::UserProfile;
use fittrack::progress::{ProgressEntry, ProgressHistory};
use fittrack::reports::{
    FitnessReport, HydrationReport, NutritionReport, ReportPeriod, SummaryReport,
};
use fittrack::wellness::DashboardSnapshot;
use fittrack::workouts::{WorkoutEntry, WorkoutLog};

use fittrack::nutrition::NutritionEstimate;

/// Display an estimate with how the food resolved
pub fn display_estimate(
    food: &str,
    quantity: f64,
    resolved: &FoodMatch,
    estimate: &NutritionEstimate,
) {
    println!("\nEstimate for {quantity} g of \"{food}\"");
    println!("{}", "=".repeat(50));

    match resolved {
        FoodMatch::Exact(entry) => println!("   Matched: {} (exact)", entry.name),
        FoodMatch::Partial(entry) => println!("   Matched: {} (partial)", entry.name),
        FoodMatch::Unmatched => println!("   No table match, heuristic estimate"),
    }

    println!("   Calories: {} kcal", estimate.calories);
    println!("   Protein: {:.1} g", estimate.protein_g);
    println!("   Fat: {:.1} g", estimate.fat_g);
}

/// Display a freshly logged food entry
pub fn display_logged_food(meal: MealType, entry: &FoodEntry) {
    println!(
        "Added to {}: {} ({} g) - {} kcal",
        meal, entry.name, entry.quantity_g, entry.estimate.calories
    );
}

/// Display one meal's totals
pub fn display_meal_totals(meal: MealType, totals: &MacroTotals) {
    println!(
        "{} total: {} kcal, {:.1} g protein, {:.1} g fat",
        meal, totals.calories, totals.protein_g, totals.fat_g
    );
}

/// Display the whole food log with day totals and target progress
pub fn display_nutrition_log(log: &DailyNutritionLog, targets: &DailyTargets) {
    match log.date {
        Some(date) => println!("\nFood Log - {date}"),
        None => println!("\nFood Log"),
    }
    println!("{}", "=".repeat(50));

    if log.is_empty() {
        println!("   No food logged yet.");
        return;
    }

    for meal in MealType::ALL {
        let entries = log.entries(meal);
        if entries.is_empty() {
            continue;
        }

        println!("\n{meal}:");
        for entry in entries {
            println!(
                "   {} ({} g): {} kcal, {:.1} g protein, {:.1} g fat  [{}]",
                entry.name,
                entry.quantity_g,
                entry.estimate.calories,
                entry.estimate.protein_g,
                entry.estimate.fat_g,
                entry.id
            );
        }
        let totals = log.meal_totals(meal);
        println!(
            "   Subtotal: {} kcal, {:.1} g protein, {:.1} g fat",
            totals.calories, totals.protein_g, totals.fat_g
        );
    }

    let totals = log.daily_totals();
    let progress = log.progress_against(targets);
    println!("\nDay totals:");
    println!(
        "   Calories: {} / {} kcal ({:.0}%)",
        totals.calories,
        targets.calories,
        progress.calories * 100.0
    );
    println!(
        "   Protein: {:.1} / {} g ({:.0}%)",
        totals.protein_g,
        targets.protein_g,
        progress.protein * 100.0
    );
    println!(
        "   Fat: {:.1} / {} g ({:.0}%)",
        totals.fat_g,
        targets.fat_g,
        progress.fat * 100.0
    );
}

/// Display the water tracker state
pub fn display_water(water: &WaterTracker) {
    println!(
        "Glasses: {}/{} ({} ml)",
        water.glasses,
        water.goal,
        water.total_ml()
    );
    println!("Progress: {:.0}%", water.progress() * 100.0);
    if water.is_goal_met() {
        println!("Daily goal reached!");
    }
}

/// Display a freshly logged workout
pub fn display_workout(entry: &WorkoutEntry) {
    println!("\nLogged workout '{}'", entry.name);
    println!("{}", "=".repeat(50));
    println!("   Type: {}", entry.workout_type);
    println!("   Duration: {} min", entry.duration_min);
    println!("   Intensity: {}", entry.intensity);
    println!("   Calories: {} kcal", entry.calories_burned);
    if let Some(notes) = &entry.notes {
        println!("   Notes: {notes}");
    }
    println!("   Id: {}", entry.id);
}

/// Display all logged workouts with totals
pub fn display_workout_log(log: &WorkoutLog) {
    println!("\nWorkout Log");
    println!("{}", "=".repeat(50));

    if log.is_empty() {
        println!("   No workouts logged yet.");
        return;
    }

    for entry in log.entries() {
        println!(
            "   {} - {} ({}, {} min, {}, {} kcal)  [{}]",
            entry.logged_at.format("%Y-%m-%d"),
            entry.name,
            entry.workout_type,
            entry.duration_min,
            entry.intensity,
            entry.calories_burned,
            entry.id
        );
    }

    println!(
        "\n   {} workouts, {} min total, {} kcal burned",
        log.completed_count(),
        log.total_duration_min(),
        log.total_calories_burned()
    );
}

/// Display a recorded progress snapshot
pub fn display_progress_entry(entry: &ProgressEntry) {
    println!("\nRecorded progress");
    println!("{}", "=".repeat(50));
    println!("   Date: {}", entry.recorded_at.format("%Y-%m-%d %H:%M UTC"));
    println!("   Weight: {} kg", entry.weight_kg);
    if let Some(percent) = entry.body_fat_percent {
        println!("   Body Fat: {percent}%");
    }
    if let Some(kg) = entry.muscle_mass_kg {
        println!("   Muscle Mass: {kg} kg");
    }
    if let Some(notes) = &entry.notes {
        println!("   Notes: {notes}");
    }
}

/// Display the progress history, newest first
pub fn display_progress_history(history: &ProgressHistory) {
    println!("\nProgress History");
    println!("{}", "=".repeat(50));

    if history.is_empty() {
        println!("   No progress recorded yet.");
        return;
    }

    for entry in history.entries() {
        let mut line = format!(
            "   {}  {} kg",
            entry.recorded_at.format("%Y-%m-%d"),
            entry.weight_kg
        );
        if let Some(percent) = entry.body_fat_percent {
            line.push_str(&format!("  {percent}% bf"));
        }
        if let Some(kg) = entry.muscle_mass_kg {
            line.push_str(&format!("  {kg} kg muscle"));
        }
        println!("{line}");
    }

    if let Some(change) = history.weight_change() {
        println!("\n   Weight change since first record: {change:+.1} kg");
    }
}

/// Display the profile, with BMI when body data is present
pub fn display_profile(profile: &UserProfile) {
    println!("\nProfile");
    println!("{}", "=".repeat(50));
    println!("   Name: {}", profile.name);
    println!("   Email: {}", profile.email);
    if let Some(age) = profile.age {
        println!("   Age: {age}");
    }
    if let Some(gender) = &profile.gender {
        println!("   Gender: {gender}");
    }
    if let Some(height) = profile.height_cm {
        println!("   Height: {height} cm");
    }
    if let Some(weight) = profile.weight_kg {
        println!("   Weight: {weight} kg");
    }
    if let Some(goals) = &profile.fitness_goals {
        println!("   Goals: {goals}");
    }
    if let Some(target) = profile.daily_calorie_target {
        println!("   Calorie Target: {target} kcal");
    }

    if let Ok(bmi) = profile.bmi() {
        println!("\n   BMI: {bmi}");
        println!("   A healthy BMI range is 18.5 to 24.9");
    }
}

/// Display the aggregated fitness report
pub fn display_fitness_report(report: &FitnessReport, period: ReportPeriod) {
    println!("\nFitness Report - {}", period.label());
    println!("{}", "=".repeat(50));
    println!("   Total Workouts: {}", report.total_workouts);
    println!("   Calories Burned: {}", report.total_calories_burned);
    println!("   Avg Duration (min): {}", report.avg_duration_min);
    println!("   Total Hours: {}", report.total_hours);

    println!("\nWorkout Types Breakdown:");
    for (kind, stats) in &report.by_type {
        println!(
            "   {}: {} workouts, {} calories, {} minutes",
            kind, stats.count, stats.calories_burned, stats.duration_min
        );
    }
}

/// Display the aggregated nutrition report
pub fn display_nutrition_report(report: &NutritionReport, period: ReportPeriod) {
    println!("\nNutrition Report - {}", period.label());
    println!("{}", "=".repeat(50));
    println!("   Total Entries: {}", report.total_entries);
    println!("   Total Calories: {}", report.total_calories);
    println!("   Avg Daily Calories: {}", report.avg_calories);
}

/// Display the aggregated hydration report
pub fn display_hydration_report(report: &HydrationReport, period: ReportPeriod) {
    println!("\nHydration Report - {}", period.label());
    println!("{}", "=".repeat(50));
    println!("   Total Entries: {}", report.total_entries);
    println!("   Total Water: {}ml", report.total_water_ml);
    println!("   Avg Daily Water: {}ml", report.avg_water_ml);
}

/// Display the combined health summary
pub fn display_summary_report(summary: &SummaryReport, period: ReportPeriod) {
    println!("\nHealth Summary - {}", period.label());
    println!("{}", "=".repeat(50));

    if let Some(fitness) = &summary.fitness {
        println!("\nFitness Summary:");
        println!("   Total Workouts: {}", fitness.total_workouts);
        println!("   Calories Burned: {}", fitness.total_calories_burned);
        println!("   Avg Duration (min): {}", fitness.avg_duration_min);
    }

    if let Some(progress) = &summary.progress {
        println!("\nProgress Summary:");
        println!("   Current Weight: {} kg", progress.weight_kg);
        if let Some(percent) = progress.body_fat_percent {
            println!("   Body Fat: {percent}%");
        }
        if let Some(kg) = progress.muscle_mass_kg {
            println!("   Muscle Mass: {kg} kg");
        }
    }
}

/// Display today's dashboard snapshot
pub fn display_dashboard(snapshot: &DashboardSnapshot) {
    println!("\nDashboard");
    println!("{}", "=".repeat(50));
    println!(
        "   Calories Consumed: {} (Target: {})",
        snapshot.calories_consumed, snapshot.calorie_target
    );
    println!("   Calories Burned: {}", snapshot.calories_burned);
    println!("   Water: {}", snapshot.water_display());
    println!("   Health Score: {}", snapshot.health_score);
}
