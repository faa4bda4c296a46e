// ABOUTME: Criterion benchmarks for nutrition aggregation and label rendering
// ABOUTME: Measures recipe computation across ingredient counts and SVG rendering across presets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Criterion benchmarks for the nutrition engine.
//!
//! Covers allergen detection, recipe aggregation for small to large recipes,
//! and label rendering at every preset and resolution.

#![allow(
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    missing_docs
)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nutrilabel::config::LabelConfig;
use nutrilabel::label::{render_label_with, LabelContent, LabelFormat, RenderOptions, Resolution};
use nutrilabel::models::{NutrientKey, NutrientProfile, NutrientSnapshot};
use nutrilabel::nutrition::{compute_recipe_nutrition, detect_allergens, ComputeOptions};
use nutrilabel::recipes::{IngredientLine, ServingSize};

const NAMES: [&str; 8] = [
    "Rolled oats",
    "Whole Milk",
    "Peanut butter",
    "Chicken breast",
    "All-purpose flour",
    "Large eggs",
    "Olive oil",
    "Low sodium soy sauce",
];

fn profile(seed: usize) -> NutrientProfile {
    NutrientKey::ALL
        .into_iter()
        .enumerate()
        .fold(NutrientProfile::unknown(), |profile, (i, key)| {
            // Every seventh ingredient misses its micronutrients
            if seed % 7 == 0 && key.is_micronutrient() {
                profile
            } else {
                profile.with(key, ((seed * 31 + i * 17) % 400) as f64 / 3.0)
            }
        })
}

fn ingredients(count: usize) -> Vec<IngredientLine> {
    (0..count)
        .map(|i| {
            let snapshot = NutrientSnapshot::capture(
                format!("fdc-{i}"),
                NAMES[i % NAMES.len()],
                profile(i),
            );
            IngredientLine::detect(snapshot, 25.0 + (i % 10) as f64 * 15.0)
        })
        .collect()
}

fn bench_allergen_detection(c: &mut Criterion) {
    let mut group = c.benchmark_group("allergen_detection");

    group.bench_function("short_name", |b| {
        b.iter(|| detect_allergens(black_box("Peanut butter cookies with milk")));
    });

    let statement = "Enriched wheat flour, sugar, palm oil, cocoa butter, whey, soy lecithin, \
                     eggs, almonds, sesame seeds, natural flavor, salt, baking soda";
    group.bench_function("ingredient_statement", |b| {
        b.iter(|| detect_allergens(black_box(statement)));
    });

    group.finish();
}

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("recipe_aggregation");
    let options = ComputeOptions {
        apply_rounding: true,
    };

    for count in [3, 12, 50, 200] {
        let lines = ingredients(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &lines, |b, lines| {
            b.iter(|| compute_recipe_nutrition(black_box(lines), 8, options).unwrap());
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("label_render");
    let config = LabelConfig::<true>::default();
    let options = ComputeOptions {
        apply_rounding: true,
    };
    let result = compute_recipe_nutrition(&ingredients(12), 8, options).unwrap();
    let content = LabelContent::new(ServingSize::new("1 cup").with_grams(240.0))
        .with_business("Sunrise Kitchen LLC", vec!["Portland, OR 97201".to_owned()])
        .with_net_weight("Net Wt. 24 oz (680g)");

    for format in LabelFormat::ALL {
        for resolution in [Resolution::Screen, Resolution::Print] {
            let options = RenderOptions::new(format, resolution).with_watermark();
            group.bench_function(format!("{format}_{resolution}"), |b| {
                b.iter(|| render_label_with(black_box(&result), &content, options, &config));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_allergen_detection, bench_aggregation, bench_render);
criterion_main!(benches);
