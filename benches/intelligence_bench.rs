// ABOUTME: Criterion benchmarks for the health engine
// ABOUTME: Measures metric derivation, plan composition, recipe filtering, and the dashboard
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Vitality Health Tracker

//! Criterion benchmarks for the health engine.
//!
//! Every engine call is pure and recomputed on each screen, so these track the cost
//! of a full refresh with growing numbers of selected conditions.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use vitality::intelligence::metrics::weight_history_series;
use vitality::intelligence::{
    build_dashboard, compose_weekly_exercise, compose_weekly_menu, derive_metrics, filter_recipes,
    DietTier, ExerciseTier, IntelligenceConfig, PlanCatalog, RecipeCatalog,
};
use vitality::models::{ActivityProfile, Comorbidity, Gender, Profile, WeighIn};

static CONDITIONS: [Comorbidity; 5] = Comorbidity::KNOWN;

fn bench_profile(conditions: &[Comorbidity]) -> Profile {
    Profile {
        name: "Bench User".to_owned(),
        age: 40,
        gender: Gender::Male,
        height: "1,78".to_owned(),
        weight: "91,5".to_owned(),
        activity_profile: ActivityProfile::AmateurAthlete,
        has_comorbidities: !conditions.is_empty(),
        comorbidities: conditions.to_vec(),
        other_comorbidity: String::new(),
    }
}

fn bench_metric_derivation(c: &mut Criterion) {
    let config = IntelligenceConfig::default();
    let profile = bench_profile(&[]);
    c.bench_function("derive_metrics", |b| {
        b.iter(|| derive_metrics(black_box(&profile), &config));
    });
}

fn bench_plan_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("plan_composition");
    let catalog = PlanCatalog::builtin();

    for count in [0, 1, 3, CONDITIONS.len()] {
        let selected = &CONDITIONS[..count];
        group.bench_with_input(
            BenchmarkId::new("weekly_menu", count),
            &selected,
            |b, selected| {
                b.iter(|| compose_weekly_menu(DietTier::Loss, black_box(selected), catalog));
            },
        );
        group.bench_with_input(
            BenchmarkId::new("weekly_exercise", count),
            &selected,
            |b, selected| {
                b.iter(|| {
                    compose_weekly_exercise(ExerciseTier::Active, black_box(selected), catalog)
                });
            },
        );
    }

    group.finish();
}

fn bench_recipe_filtering(c: &mut Criterion) {
    let catalog = RecipeCatalog::builtin();
    c.bench_function("filter_recipes_all_conditions", |b| {
        b.iter(|| filter_recipes(DietTier::LightDeficit, black_box(&CONDITIONS), catalog));
    });
}

#[allow(clippy::cast_precision_loss)]
fn bench_history_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("weight_history");

    for count in [10_usize, 365, 3650] {
        let entries: Vec<WeighIn> = (0..count)
            .filter_map(|index| {
                WeighIn::new(
                    format!("{:02}/01/25 08:00", index % 28 + 1),
                    90.0 - (index % 200) as f64 / 10.0,
                )
                .ok()
            })
            .collect();
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::new("series", count), &entries, |b, entries| {
            b.iter(|| weight_history_series(black_box(entries), Some(1.78)));
        });
    }

    group.finish();
}

fn bench_dashboard(c: &mut Criterion) {
    let config = IntelligenceConfig::default();
    let profile = bench_profile(&CONDITIONS);
    c.bench_function("build_dashboard_all_conditions", |b| {
        b.iter(|| build_dashboard(black_box(&profile), &config, PlanCatalog::builtin()));
    });
}

criterion_group!(
    benches,
    bench_metric_derivation,
    bench_plan_composition,
    bench_recipe_filtering,
    bench_history_series,
    bench_dashboard,
);
criterion_main!(benches);
