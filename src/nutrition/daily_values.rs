// ABOUTME: Percent daily value calculation against the 2020 FDA reference intakes
// ABOUTME: Produces whole-percent %DV per nutrient and the label display variant for micronutrients
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use nutrilabel_core::constants::daily_values::reference_for;
use nutrilabel_core::models::{NutrientKey, NutrientProfile};
use std::collections::BTreeMap;

/// %DV for one nutrient amount, rounded to the nearest whole percent
///
/// Returns `None` for nutrients without a reference value (calories, trans
/// fat, total sugars). Negative or non-finite amounts clamp to 0.
#[must_use]
pub fn percent_daily_value(key: NutrientKey, amount: f64) -> Option<u32> {
    let reference = reference_for(key)?;
    let amount = if amount.is_finite() { amount.max(0.0) } else { 0.0 };
    let percent = (amount / reference * 100.0).round();
    // Non-negative, and capped before the cast
    Some(percent.min(f64::from(u32::MAX)) as u32)
}

/// %DV for every known nutrient of a profile that has a reference value
#[must_use]
pub fn percent_daily_values(profile: &NutrientProfile) -> BTreeMap<NutrientKey, u32> {
    profile
        .iter()
        .filter_map(|(key, value)| {
            let amount = value.amount()?;
            percent_daily_value(key, amount).map(|percent| (key, percent))
        })
        .collect()
}

/// Percentage printed on the label
///
/// Vitamins and minerals below `zero_below` percent may be declared as 0%.
/// The stored %DV keeps the computed number.
#[must_use]
pub fn display_percent(key: NutrientKey, percent: u32, zero_below: f64) -> u32 {
    if key.is_micronutrient() && f64::from(percent) < zero_below {
        0
    } else {
        percent
    }
}
