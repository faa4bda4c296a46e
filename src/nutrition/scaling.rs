// ABOUTME: Proportional recipe scaling between serving counts
// ABOUTME: Multiplies gram amounts and entered display quantities by the same factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::{AppError, AppResult};
use crate::recipes::IngredientLine;
use tracing::debug;

/// Rescale ingredient lines from one serving count to another
///
/// Each line's grams and entered quantity are multiplied by
/// `to_servings / from_servings`. The entered unit label is unchanged and
/// quantities are not snapped to kitchen fractions.
///
/// # Errors
///
/// Returns an `INVALID_INPUT` error if either serving count is not a positive
/// finite number
pub fn scale_recipe(
    ingredients: &[IngredientLine],
    from_servings: f64,
    to_servings: f64,
) -> AppResult<Vec<IngredientLine>> {
    for (name, servings) in [("fromServings", from_servings), ("toServings", to_servings)] {
        if !(servings.is_finite() && servings > 0.0) {
            return Err(AppError::invalid_input(format!(
                "{name} must be positive, got {servings}"
            ))
            .with_details(serde_json::json!({ name: servings })));
        }
    }

    let factor = to_servings / from_servings;
    debug!(from_servings, to_servings, factor, "Scaling recipe");

    Ok(ingredients
        .iter()
        .map(|line| {
            let mut scaled = line.clone();
            scaled.amount_grams *= factor;
            if let Some(unit) = scaled.entered_unit.as_mut() {
                unit.value *= factor;
            }
            scaled
        })
        .collect())
}
