// ABOUTME: Criterion benchmarks for nutrition estimation and day-log aggregation
// ABOUTME: Measures table resolution, fallback estimation, and totals over growing logs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fittrack Project

//! Criterion benchmarks for the nutrition estimator.
//!
//! Measures name resolution across the reference table, scaling and
//! fallback estimation, and daily-log aggregation at growing entry
//! counts.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fittrack::config::DailyTargets;
use fittrack::nutrition::{DailyNutritionLog, Estimator, MealType, REFERENCE_FOODS};

/// Inputs that exercise each resolution path
const FIRST_KEY: &str = "apple";
const LAST_KEY: &str = "oil";
const PARTIAL_INPUT: &str = "pineapple juice";
const MISS_INPUT: &str = "unidentified leftovers";

/// Benchmark name resolution against the reference table
fn bench_resolution(c: &mut Criterion) {
    let estimator = Estimator::new();
    let mut group = c.benchmark_group("resolution");

    group.bench_function("exact_first_entry", |b| {
        b.iter(|| estimator.resolve(black_box(FIRST_KEY)));
    });

    group.bench_function("exact_last_entry", |b| {
        b.iter(|| estimator.resolve(black_box(LAST_KEY)));
    });

    group.bench_function("partial_hit", |b| {
        b.iter(|| estimator.resolve(black_box(PARTIAL_INPUT)));
    });

    // A miss walks the whole table twice (exact pass, then partial).
    group.bench_function("miss_full_scan", |b| {
        b.iter(|| estimator.resolve(black_box(MISS_INPUT)));
    });

    group.finish();
}

/// Benchmark the full estimate path including scaling and rounding
fn bench_estimation(c: &mut Criterion) {
    let estimator = Estimator::new();
    let mut group = c.benchmark_group("estimation");

    group.bench_function("table_hit", |b| {
        b.iter(|| estimator.estimate(black_box("chicken"), black_box(150.0)));
    });

    group.bench_function("fallback_miss", |b| {
        b.iter(|| estimator.estimate(black_box(MISS_INPUT), black_box(150.0)));
    });

    // One estimate per table entry, mimicking a day of varied logging.
    group.throughput(Throughput::Elements(REFERENCE_FOODS.len() as u64));
    group.bench_function("whole_table_sweep", |b| {
        b.iter(|| {
            for food in REFERENCE_FOODS {
                black_box(estimator.estimate(food.name, 120.0));
            }
        });
    });

    group.finish();
}

/// Build a log with `count` entries spread over the meals
fn build_log(estimator: &Estimator, count: usize) -> DailyNutritionLog {
    let meals = [
        MealType::Breakfast,
        MealType::Lunch,
        MealType::Dinner,
        MealType::Snack,
    ];
    let mut log = DailyNutritionLog::for_today();
    for index in 0..count {
        let food = REFERENCE_FOODS[index % REFERENCE_FOODS.len()].name;
        let meal = meals[index % meals.len()];
        let quantity = 50.0 + (index % 200) as f64;
        log.log_food(estimator, meal, food, quantity).unwrap();
    }
    log
}

/// Benchmark day-log aggregation at growing sizes
fn bench_day_log_aggregation(c: &mut Criterion) {
    let estimator = Estimator::new();
    let targets = DailyTargets::default();
    let mut group = c.benchmark_group("day_log");

    for count in [10_usize, 100, 1000] {
        let log = build_log(&estimator, count);

        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("daily_totals", count), &log, |b, log| {
            b.iter(|| black_box(log.daily_totals()));
        });
        group.bench_with_input(
            BenchmarkId::new("progress_against", count),
            &log,
            |b, log| {
                b.iter(|| black_box(log.progress_against(&targets)));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_resolution,
    bench_estimation,
    bench_day_log_aggregation,
);
criterion_main!(benches);
