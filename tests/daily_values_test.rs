// ABOUTME: Integration tests for percent daily value calculation
// ABOUTME: Reference intakes, whole-percent rounding, monotonicity and label display rules
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use nutrilabel::constants::daily_values::{reference_for, REFERENCE_DIET_KCAL};
use nutrilabel::models::{NutrientKey, NutrientProfile};
use nutrilabel::nutrition::daily_values::display_percent;
use nutrilabel::nutrition::{percent_daily_value, percent_daily_values};

// ============================================================================
// Reference Values
// ============================================================================

#[test]
fn test_half_of_reference_is_fifty_percent() {
    assert_eq!(percent_daily_value(NutrientKey::TotalFat, 39.0), Some(50));
    assert_eq!(percent_daily_value(NutrientKey::Sodium, 1150.0), Some(50));
    assert_eq!(percent_daily_value(NutrientKey::DietaryFiber, 14.0), Some(50));
}

#[test]
fn test_reference_table() {
    let expected = [
        (NutrientKey::TotalFat, 78.0),
        (NutrientKey::SaturatedFat, 20.0),
        (NutrientKey::Cholesterol, 300.0),
        (NutrientKey::Sodium, 2300.0),
        (NutrientKey::TotalCarbohydrate, 275.0),
        (NutrientKey::DietaryFiber, 28.0),
        (NutrientKey::AddedSugars, 50.0),
        (NutrientKey::Protein, 50.0),
        (NutrientKey::VitaminD, 20.0),
        (NutrientKey::Calcium, 1300.0),
        (NutrientKey::Iron, 18.0),
        (NutrientKey::Potassium, 4700.0),
    ];
    for (key, reference) in expected {
        assert_eq!(reference_for(key), Some(reference), "{key}");
        assert_eq!(percent_daily_value(key, reference), Some(100), "{key}");
    }
    assert_eq!(REFERENCE_DIET_KCAL, 2000);
}

#[test]
fn test_no_dv_for_calories_trans_fat_and_total_sugars() {
    for key in [NutrientKey::Calories, NutrientKey::TransFat, NutrientKey::TotalSugars] {
        assert_eq!(reference_for(key), None);
        assert_eq!(percent_daily_value(key, 100.0), None);
    }
}

#[test]
fn test_percent_rounds_to_whole_number() {
    // 10 / 78 = 12.82%
    assert_eq!(percent_daily_value(NutrientKey::TotalFat, 10.0), Some(13));
    // 1 / 18 = 5.56%
    assert_eq!(percent_daily_value(NutrientKey::Iron, 1.0), Some(6));
    assert_eq!(percent_daily_value(NutrientKey::Sodium, 0.0), Some(0));
}

#[test]
fn test_negative_amount_clamps_to_zero() {
    assert_eq!(percent_daily_value(NutrientKey::Sodium, -50.0), Some(0));
    assert_eq!(percent_daily_value(NutrientKey::Calcium, f64::NAN), Some(0));
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_percent_is_monotonic_in_amount() {
    for key in NutrientKey::ALL {
        if reference_for(key).is_none() {
            continue;
        }
        let mut previous = 0;
        for step in 0..2000 {
            let amount = f64::from(step) * 1.7;
            let percent = percent_daily_value(key, amount).unwrap();
            assert!(percent >= previous, "{key}: {amount} gave {percent} after {previous}");
            previous = percent;
        }
    }
}

// ============================================================================
// Profiles
// ============================================================================

#[test]
fn test_unknown_fields_have_no_percent() {
    let profile = NutrientProfile::unknown()
        .with(NutrientKey::Calories, 250.0)
        .with(NutrientKey::TotalFat, 39.0)
        .with(NutrientKey::Iron, 0.0);

    let dv = percent_daily_values(&profile);

    assert_eq!(dv.get(&NutrientKey::TotalFat), Some(&50));
    assert_eq!(dv.get(&NutrientKey::Iron), Some(&0));
    assert!(!dv.contains_key(&NutrientKey::Calories));
    assert!(!dv.contains_key(&NutrientKey::Sodium));
    assert_eq!(dv.len(), 2);
}

#[test]
fn test_small_micronutrient_percent_displays_as_zero() {
    assert_eq!(display_percent(NutrientKey::Iron, 1, 2.0), 0);
    assert_eq!(display_percent(NutrientKey::Iron, 2, 2.0), 2);
    // Macronutrients always show the computed percent
    assert_eq!(display_percent(NutrientKey::Sodium, 1, 2.0), 1);
}
