// ABOUTME: Fittrack CLI - command-line tracker for nutrition, workouts, water, and progress
// ABOUTME: Persists tracker state to a JSON store and prints human or JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project
//!
//! Usage:
//! ```bash
//! # Estimate macros for a food
//! fittrack-cli estimate chicken 150
//!
//! # Log food to a meal
//! fittrack-cli log add breakfast "scrambled egg" 120
//!
//! # Track water
//! fittrack-cli water add
//! fittrack-cli water show
//!
//! # Log a workout
//! fittrack-cli workout add "Morning run" cardio 30 320
//!
//! # Record body progress
//! fittrack-cli progress record 78.5 --body-fat 18.2
//!
//! # Generate a report
//! fittrack-cli report fitness --period month
//!
//! # Today's dashboard
//! fittrack-cli dashboard
//! ```

mod commands;
mod helpers;

use clap::{Parser, Subcommand, ValueEnum};
use fittrack::config::TrackerConfig;
use fittrack::errors::AppResult;
use fittrack::logging::LoggingConfig;
use fittrack::store::{JsonFileStore, Store};
use std::path::PathBuf;
use uuid::Uuid;

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "fittrack-cli",
    about = "Fittrack nutrition and fitness tracker CLI",
    long_about = "Command-line tracker for food logging, calorie estimation, workouts, water intake, and body progress."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Store file override (defaults to ~/.fittrack/store.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Print results as JSON instead of formatted text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Estimate calories and macros for a food
    Estimate {
        /// Food name to look up
        food: String,

        /// Quantity in grams
        #[arg(default_value = "100")]
        quantity: f64,
    },

    /// Food log commands
    Log {
        #[command(subcommand)]
        action: LogCommand,
    },

    /// Water intake commands
    Water {
        #[command(subcommand)]
        action: WaterCommand,
    },

    /// Workout log commands
    Workout {
        #[command(subcommand)]
        action: WorkoutCommand,
    },

    /// Body progress commands
    Progress {
        #[command(subcommand)]
        action: ProgressCommand,
    },

    /// User profile commands
    Profile {
        #[command(subcommand)]
        action: ProfileCommand,
    },

    /// Generate a report over tracked history
    Report {
        /// Report type
        #[arg(value_enum)]
        kind: ReportKind,

        /// Reporting window (week, month, quarter)
        #[arg(long, default_value = "week")]
        period: String,
    },

    /// Today's combined dashboard
    Dashboard,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum LogCommand {
    /// Estimate a food and add it to a meal
    Add {
        /// Meal to log under (breakfast, lunch, dinner, snack)
        meal: String,

        /// Food name
        food: String,

        /// Quantity in grams
        quantity: f64,
    },

    /// Show today's food log with totals
    Show,

    /// Remove an entry from a meal by id
    Remove {
        /// Meal the entry was logged under
        meal: String,

        /// Entry id
        id: Uuid,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WaterCommand {
    /// Drink one glass
    Add,

    /// Set the glass count directly
    Set {
        /// Glasses drunk today
        glasses: u32,
    },

    /// Reset today's count to zero
    Reset,

    /// Show today's water intake
    Show,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum WorkoutCommand {
    /// Log a completed workout
    Add {
        /// Workout name
        name: String,

        /// Workout type (cardio, strength, flexibility, rest)
        #[arg(value_name = "TYPE")]
        workout_type: String,

        /// Duration in minutes
        minutes: u32,

        /// Calories burned
        calories: u32,

        /// Intensity (low, moderate, high)
        #[arg(long, default_value = "moderate")]
        intensity: String,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List logged workouts
    List,

    /// Remove a workout by id
    Remove {
        /// Workout id
        id: Uuid,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProgressCommand {
    /// Record a body progress snapshot
    Record {
        /// Weight in kilograms
        weight: f64,

        /// Body fat percentage
        #[arg(long)]
        body_fat: Option<f64>,

        /// Muscle mass in kilograms
        #[arg(long)]
        muscle: Option<f64>,

        /// Free-form notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// List recorded snapshots, newest first
    List,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ProfileCommand {
    /// Update profile fields; only the provided flags change
    Set {
        /// Display name
        #[arg(long)]
        name: Option<String>,

        /// Email address
        #[arg(long)]
        email: Option<String>,

        /// Age in years
        #[arg(long)]
        age: Option<u32>,

        /// Self-reported gender
        #[arg(long)]
        gender: Option<String>,

        /// Height in centimeters
        #[arg(long)]
        height: Option<f64>,

        /// Weight in kilograms
        #[arg(long)]
        weight: Option<f64>,

        /// Fitness goals
        #[arg(long)]
        goals: Option<String>,

        /// Daily calorie target
        #[arg(long)]
        calorie_target: Option<i64>,
    },

    /// Show the profile with BMI when body data is set
    Show,
}

/// Report type selector
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ReportKind {
    /// Workout statistics
    Fitness,
    /// Food log statistics
    Nutrition,
    /// Water intake statistics
    Hydration,
    /// Combined health summary
    Summary,
}

fn open_store(path: Option<PathBuf>) -> Result<Box<dyn Store>> {
    let store = match path {
        Some(path) => JsonFileStore::open(path)?,
        None => JsonFileStore::open_default()?,
    };
    Ok(Box::new(store))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;

    // Load configuration
    let config = TrackerConfig::from_env()?;

    // Execute command
    match cli.command {
        Command::Estimate { food, quantity } => {
            commands::estimate::run(&config, &food, quantity, cli.json)?;
        }
        Command::Log { action } => {
            let mut store = open_store(cli.store)?;
            match action {
                LogCommand::Add {
                    meal,
                    food,
                    quantity,
                } => {
                    commands::log::add(store.as_mut(), &config, &meal, &food, quantity, cli.json)?;
                }
                LogCommand::Show => {
                    commands::log::show(store.as_ref(), &config, cli.json)?;
                }
                LogCommand::Remove { meal, id } => {
                    commands::log::remove(store.as_mut(), &meal, id)?;
                }
            }
        }
        Command::Water { action } => {
            let mut store = open_store(cli.store)?;
            match action {
                WaterCommand::Add => {
                    commands::water::add(store.as_mut(), &config)?;
                }
                WaterCommand::Set { glasses } => {
                    commands::water::set(store.as_mut(), &config, glasses)?;
                }
                WaterCommand::Reset => {
                    commands::water::reset(store.as_mut(), &config)?;
                }
                WaterCommand::Show => {
                    commands::water::show(store.as_ref(), &config, cli.json)?;
                }
            }
        }
        Command::Workout { action } => {
            let mut store = open_store(cli.store)?;
            match action {
                WorkoutCommand::Add {
                    name,
                    workout_type,
                    minutes,
                    calories,
                    intensity,
                    notes,
                } => {
                    commands::workout::add(
                        store.as_mut(),
                        &name,
                        &workout_type,
                        minutes,
                        calories,
                        &intensity,
                        notes,
                    )?;
                }
                WorkoutCommand::List => {
                    commands::workout::list(store.as_ref(), cli.json)?;
                }
                WorkoutCommand::Remove { id } => {
                    commands::workout::remove(store.as_mut(), id)?;
                }
            }
        }
        Command::Progress { action } => {
            let mut store = open_store(cli.store)?;
            match action {
                ProgressCommand::Record {
                    weight,
                    body_fat,
                    muscle,
                    notes,
                } => {
                    commands::progress::record(store.as_mut(), weight, body_fat, muscle, notes)?;
                }
                ProgressCommand::List => {
                    commands::progress::list(store.as_ref(), cli.json)?;
                }
            }
        }
        Command::Profile { action } => {
            let mut store = open_store(cli.store)?;
            match action {
                ProfileCommand::Set {
                    name,
                    email,
                    age,
                    gender,
                    height,
                    weight,
                    goals,
                    calorie_target,
                } => {
                    let update = commands::profile::ProfileUpdate {
                        name,
                        email,
                        age,
                        gender,
                        height_cm: height,
                        weight_kg: weight,
                        fitness_goals: goals,
                        daily_calorie_target: calorie_target,
                    };
                    commands::profile::set(store.as_mut(), update)?;
                }
                ProfileCommand::Show => {
                    commands::profile::show(store.as_ref(), cli.json)?;
                }
            }
        }
        Command::Report { kind, period } => {
            let store = open_store(cli.store)?;
            commands::report::run(store.as_ref(), kind, &period, cli.json)?;
        }
        Command::Dashboard => {
            let store = open_store(cli.store)?;
            commands::dashboard::run(store.as_ref(), &config, cli.json)?;
        }
    }

    Ok(())
}
