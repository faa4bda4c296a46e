// ABOUTME: Integration tests for recipe nutrition aggregation
// ABOUTME: Validation, profile arithmetic, per-serving rounding, %DV and missing-field reporting
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Tests for the aggregation pipeline including:
//! - Input validation with the offending line reported
//! - Unknown values never summing as zero
//! - Linearity of sum followed by divide
//! - %DV derived from the rounded per-serving values

mod common;

use common::{
    approx_eq, chicken_breast, init_test_logging, oats, overnight_oats, overnight_oats_result,
    peanut_butter, rounded, whole_milk,
};
use nutrilabel::errors::ErrorCode;
use nutrilabel::models::{Allergen, NutrientKey, NutrientProfile, NutrientValue};
use nutrilabel::nutrition::profile::{divide, scale, sum};
use nutrilabel::nutrition::{compute_recipe_nutrition, ComputeOptions};
use nutrilabel::recipes::IngredientLine;

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_empty_recipe_is_rejected() {
    let err = compute_recipe_nutrition(&[], 4, rounded()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
}

#[test]
fn test_zero_servings_is_rejected() {
    let lines = vec![IngredientLine::detect(oats(), 80.0)];
    let err = compute_recipe_nutrition(&lines, 0, rounded()).unwrap_err();
    assert_eq!(err.code, ErrorCode::InvalidInput);
    assert!(err.is_validation());
}

#[test]
fn test_non_positive_grams_reports_line() {
    for grams in [0.0, -5.0, f64::NAN] {
        let lines = vec![
            IngredientLine::detect(oats(), 80.0),
            IngredientLine::detect(whole_milk(), grams),
        ];
        let err = compute_recipe_nutrition(&lines, 2, rounded()).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.details["line_index"], 1);
    }
}

// ============================================================================
// Profile Arithmetic
// ============================================================================

#[test]
fn test_scale_keeps_unknown_unknown() {
    let scaled = scale(&peanut_butter().per_100g, 50.0);
    assert_eq!(scaled.amount(NutrientKey::Calories), Some(294.0));
    assert_eq!(scaled.get(NutrientKey::TransFat), NutrientValue::Zero);
    assert_eq!(scaled.get(NutrientKey::Iron), NutrientValue::Unknown);
}

#[test]
fn test_sum_tracks_missing_fields_without_zeroing() {
    let oats = oats();
    let pb = peanut_butter();
    let batch = sum([(&oats.per_100g, 100.0), (&pb.per_100g, 100.0)]);

    assert_eq!(
        batch.missing_fields,
        vec![
            NutrientKey::VitaminD,
            NutrientKey::Calcium,
            NutrientKey::Iron,
            NutrientKey::Potassium
        ]
    );
    // Known from oats only
    assert_eq!(batch.totals.amount(NutrientKey::Iron), Some(4.3));
    assert!(approx_eq(batch.totals.amount(NutrientKey::Calories).unwrap(), 967.0));
}

#[test]
fn test_sum_of_all_unknown_stays_unknown() {
    let unknown = NutrientProfile::unknown();
    let batch = sum([(&unknown, 100.0), (&unknown, 50.0)]);
    assert!(NutrientKey::ALL
        .into_iter()
        .all(|key| !batch.totals.get(key).is_known()));
    assert_eq!(batch.missing_fields.len(), NutrientKey::ALL.len());
}

#[test]
fn test_divide_rejects_non_positive_divisor() {
    let totals = oats().per_100g;
    assert_eq!(divide(&totals, 0.0).unwrap_err().code, ErrorCode::ValueOutOfRange);
    assert_eq!(divide(&totals, -2.0).unwrap_err().code, ErrorCode::ValueOutOfRange);
    assert_eq!(divide(&totals, f64::INFINITY).unwrap_err().code, ErrorCode::ValueOutOfRange);
}

#[test]
fn test_sum_then_divide_is_linear() {
    let snapshots = [oats(), whole_milk(), chicken_breast()];
    let grams = [80.0, 240.0, 150.0];
    let n = 3.0;

    let batch = sum(snapshots.iter().zip(grams).map(|(s, g)| (&s.per_100g, g)));
    let per_serving = divide(&batch.totals, n).unwrap();

    for key in NutrientKey::ALL {
        let expected: f64 = snapshots
            .iter()
            .zip(grams)
            .map(|(s, g)| scale(&s.per_100g, g).amount(key).unwrap() / n)
            .sum();
        let actual = per_serving.amount(key).unwrap();
        assert!((actual - expected).abs() < 1e-6, "{key}: {actual} != {expected}");
    }
}

// ============================================================================
// Full Pipeline
// ============================================================================

#[test]
fn test_overnight_oats_per_serving() {
    init_test_logging();
    let result = overnight_oats_result();

    assert_eq!(result.servings_per_batch, 4);
    assert!(result.rounding_applied);

    // 1275.52 kcal per batch
    let batch_kcal = result.totals_per_batch.amount(NutrientKey::Calories).unwrap();
    assert!((batch_kcal - 1275.52).abs() < 1e-6);
    let raw_kcal = result.per_serving.amount(NutrientKey::Calories).unwrap();
    assert!((raw_kcal - 318.88).abs() < 1e-6);

    let declared = &result.per_serving_rounded;
    assert_eq!(declared.amount(NutrientKey::Calories), Some(320.0));
    assert_eq!(declared.amount(NutrientKey::TotalFat), Some(15.0));
    assert_eq!(declared.amount(NutrientKey::Cholesterol), Some(10.0));
    assert_eq!(declared.amount(NutrientKey::Sodium), Some(125.0));
    assert_eq!(declared.amount(NutrientKey::Protein), Some(13.0));
    assert_eq!(declared.amount(NutrientKey::AddedSugars), Some(1.0));
    assert!(result.less_than_fields.contains(&NutrientKey::AddedSugars));
}

#[test]
fn test_percent_daily_values_use_rounded_amounts() {
    let result = overnight_oats_result();
    let dv = &result.percent_daily_values;

    // Declared 15g fat: 15 / 78 = 19.2%
    assert_eq!(dv.get(&NutrientKey::TotalFat), Some(&19));
    // Declared 125mg sodium: 5.4%
    assert_eq!(dv.get(&NutrientKey::Sodium), Some(&5));
    // Declared 156.4mg calcium: 12.0%
    assert_eq!(dv.get(&NutrientKey::Calcium), Some(&12));
    assert!(!dv.contains_key(&NutrientKey::Calories));
}

#[test]
fn test_missing_micronutrients_are_reported_not_fatal() {
    let result = overnight_oats_result();
    assert!(!result.is_complete());
    assert_eq!(
        result.missing_fields,
        vec![
            NutrientKey::VitaminD,
            NutrientKey::Calcium,
            NutrientKey::Iron,
            NutrientKey::Potassium
        ]
    );
    assert!(result.per_serving_rounded.get(NutrientKey::Calcium).is_known());
}

#[test]
fn test_allergens_flow_into_result() {
    let result = overnight_oats_result();
    assert_eq!(
        result.allergen_statement.contains.iter().copied().collect::<Vec<_>>(),
        vec![Allergen::Milk, Allergen::Peanuts]
    );
}

#[test]
fn test_rounding_can_be_disabled() {
    let recipe = overnight_oats();
    let result =
        compute_recipe_nutrition(&recipe.ingredients, 4, ComputeOptions::unrounded()).unwrap();

    assert!(!result.rounding_applied);
    assert_eq!(result.per_serving_rounded, result.per_serving);
    assert!(result.rounding_notes.is_empty());
    assert!(result.less_than_fields.is_empty());
    // 58.24g fat / 4 = 14.56g = 18.7%
    assert_eq!(result.percent_daily_values.get(&NutrientKey::TotalFat), Some(&19));
}

#[test]
fn test_rounding_notes_cover_adjusted_values() {
    let result = overnight_oats_result();
    let calories = result
        .rounding_notes
        .iter()
        .find(|note| note.nutrient == NutrientKey::Calories)
        .unwrap();
    assert!((calories.raw_value - 318.88).abs() < 1e-6);
    assert!(approx_eq(calories.rounded_value, 320.0));
}

#[test]
fn test_result_is_reproducible() {
    let recipe = overnight_oats();
    let first = compute_recipe_nutrition(&recipe.ingredients, 4, rounded()).unwrap();
    let second = compute_recipe_nutrition(&recipe.ingredients, 4, rounded()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_result_serializes_camel_case() {
    let json = serde_json::to_value(overnight_oats_result()).unwrap();
    assert!(json.get("perServingRounded").is_some());
    assert!(json.get("missingFields").is_some());
    assert_eq!(json["allergenStatement"]["contains"][0], "Milk");
    assert!(json["perServing"]["iron"].is_f64());

    // Unknown is null, reported zero is 0
    let profile = serde_json::to_value(peanut_butter().per_100g).unwrap();
    assert!(profile["iron"].is_null());
    assert_eq!(profile["transFat"], 0.0);
}
