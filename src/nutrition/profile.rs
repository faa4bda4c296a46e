// ABOUTME: Nutrient profile arithmetic: scale by grams, sum contributions, divide by servings
// ABOUTME: Unknown values stay unknown and per-nutrient completeness is tracked during summation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::{AppError, AppResult};
use nutrilabel_core::models::{NutrientKey, NutrientProfile};
use serde::{Deserialize, Serialize};

/// Scale a per-100g profile to the amount actually used
///
/// Every known field is multiplied by `grams / 100`; unknown fields stay unknown.
#[must_use]
pub fn scale(profile: &NutrientProfile, grams: f64) -> NutrientProfile {
    let factor = grams / 100.0;
    NutrientProfile::from_fn(|key| profile.get(key).map(|v| v * factor))
}

/// Batch totals plus the nutrients at least one ingredient could not report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileSum {
    /// Sum of every known scaled contribution
    pub totals: NutrientProfile,
    /// Keys missing from one or more contributing ingredients, in label order
    pub missing_fields: Vec<NutrientKey>,
}

/// Sum per-100g profiles weighted by grams
///
/// A nutrient total is known if at least one ingredient reported it; when no
/// ingredient did, the total is unknown rather than zero. Any ingredient
/// lacking a key marks that key as missing.
pub fn sum<'a, I>(contributions: I) -> ProfileSum
where
    I: IntoIterator<Item = (&'a NutrientProfile, f64)>,
{
    let mut totals = NutrientProfile::unknown();
    let mut incomplete = [false; NutrientKey::ALL.len()];

    for (profile, grams) in contributions {
        let scaled = scale(profile, grams);
        for (index, key) in NutrientKey::ALL.into_iter().enumerate() {
            let contribution = scaled.get(key);
            if !contribution.is_known() {
                incomplete[index] = true;
            }
            let slot = totals.get_mut(key);
            *slot = slot.combine(contribution);
        }
    }

    let missing_fields = NutrientKey::ALL
        .into_iter()
        .zip(incomplete)
        .filter_map(|(key, missing)| missing.then_some(key))
        .collect();

    ProfileSum {
        totals,
        missing_fields,
    }
}

/// Divide every known field by `n`
///
/// # Errors
///
/// Returns a `VALUE_OUT_OF_RANGE` error if `n` is not a positive finite number
pub fn divide(totals: &NutrientProfile, n: f64) -> AppResult<NutrientProfile> {
    if !n.is_finite() || n <= 0.0 {
        return Err(AppError::out_of_range(format!(
            "Cannot divide a nutrient profile by {n}; divisor must be positive"
        ))
        .with_details(serde_json::json!({ "divisor": n })));
    }
    Ok(NutrientProfile::from_fn(|key| {
        totals.get(key).map(|v| v / n)
    }))
}
