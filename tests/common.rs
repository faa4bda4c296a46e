// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Quiet tracing setup plus snapshot and recipe builders used across suites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `nutrilabel`

use nutrilabel::models::{NutrientKey, NutrientProfile, NutrientSnapshot};
use nutrilabel::nutrition::{compute_recipe_nutrition, ComputeOptions, ComputedNutritionResult};
use nutrilabel::recipes::{IngredientLine, Recipe, ServingSize};
use std::env;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Rounding on, independent of environment configuration
pub const fn rounded() -> ComputeOptions {
    ComputeOptions {
        apply_rounding: true,
    }
}

/// Profile with every nutrient reported
pub fn full_profile(values: [f64; 15]) -> NutrientProfile {
    NutrientKey::ALL
        .into_iter()
        .zip(values)
        .fold(NutrientProfile::unknown(), |profile, (key, value)| {
            profile.with(key, value)
        })
}

/// USDA-style rolled oats per 100g
pub fn oats() -> NutrientSnapshot {
    NutrientSnapshot::capture(
        "fdc-173904",
        "Rolled oats",
        full_profile([
            379.0, 6.5, 1.1, 0.0, 0.0, 6.0, 67.7, 10.1, 1.0, 0.0, 13.2, 0.0, 52.0, 4.3, 362.0,
        ]),
    )
}

/// Whole milk per 100g
pub fn whole_milk() -> NutrientSnapshot {
    NutrientSnapshot::capture(
        "fdc-746782",
        "Whole Milk",
        full_profile([
            61.0, 3.3, 1.9, 0.1, 10.0, 43.0, 4.8, 0.0, 5.1, 0.0, 3.2, 1.1, 113.0, 0.0, 132.0,
        ]),
    )
}

/// Peanut butter per 100g, micronutrients not reported
pub fn peanut_butter() -> NutrientSnapshot {
    let profile = NutrientProfile::unknown()
        .with(NutrientKey::Calories, 588.0)
        .with(NutrientKey::TotalFat, 50.0)
        .with(NutrientKey::SaturatedFat, 10.3)
        .with(NutrientKey::TransFat, 0.0)
        .with(NutrientKey::Cholesterol, 0.0)
        .with(NutrientKey::Sodium, 459.0)
        .with(NutrientKey::TotalCarbohydrate, 20.0)
        .with(NutrientKey::DietaryFiber, 6.0)
        .with(NutrientKey::TotalSugars, 9.2)
        .with(NutrientKey::AddedSugars, 6.0)
        .with(NutrientKey::Protein, 25.0);
    NutrientSnapshot::capture("fdc-172470", "Peanut butter, smooth", profile)
}

/// Chicken breast per 100g, no allergens
pub fn chicken_breast() -> NutrientSnapshot {
    NutrientSnapshot::capture(
        "fdc-171077",
        "Chicken breast",
        full_profile([
            165.0, 3.6, 1.0, 0.0, 85.0, 74.0, 0.0, 0.0, 0.0, 0.0, 31.0, 0.1, 15.0, 1.0, 256.0,
        ]),
    )
}

/// Overnight oats: oats, milk and peanut butter, four servings
pub fn overnight_oats() -> Recipe {
    Recipe::new("Overnight oats", 4)
        .with_serving_size(ServingSize::new("1 cup").with_grams(240.0))
        .with_ingredient(IngredientLine::detect(oats(), 160.0).with_entered_unit(2.0, "cup"))
        .with_ingredient(IngredientLine::detect(whole_milk(), 480.0).with_entered_unit(2.0, "cup"))
        .with_ingredient(IngredientLine::detect(peanut_butter(), 64.0).with_entered_unit(4.0, "tbsp"))
}

/// Computed facts for [`overnight_oats`] with rounding on
pub fn overnight_oats_result() -> ComputedNutritionResult {
    let recipe = overnight_oats();
    compute_recipe_nutrition(&recipe.ingredients, recipe.servings_per_batch, rounded()).unwrap()
}

/// Float comparison with an absolute tolerance
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
