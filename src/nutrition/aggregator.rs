// ABOUTME: Recipe nutrition aggregation from ingredient lines to rounded per-serving facts
// ABOUTME: Validates input, sums snapshots, divides by servings, rounds, computes %DV and allergens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Recipe Nutrition Aggregator
//!
//! `compute_recipe_nutrition` is a pure function of its arguments. The result
//! is rebuilt from scratch on every call.
//!
//! Missing nutrient data is not an error: it is reported in
//! [`ComputedNutritionResult::missing_fields`] so the caller can warn instead
//! of failing the whole computation.

use crate::config::LabelConfig;
use crate::errors::{AppError, AppResult};
use crate::nutrition::allergens::AllergenStatement;
use crate::nutrition::daily_values::percent_daily_values;
use crate::nutrition::profile::{divide, sum};
use crate::nutrition::rounding::{round_profile, RoundingNote};
use crate::recipes::IngredientLine;
use nutrilabel_core::models::{NutrientKey, NutrientProfile};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, warn};

/// Options for a single aggregation call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeOptions {
    /// Apply FDA rounding to the per-serving values
    pub apply_rounding: bool,
}

impl ComputeOptions {
    /// Options taken from the global configuration
    #[must_use]
    pub fn from_config(config: &LabelConfig<true>) -> Self {
        Self {
            apply_rounding: config.computation.apply_rounding,
        }
    }

    /// Skip rounding; per-serving values are reported raw
    #[must_use]
    pub const fn unrounded() -> Self {
        Self {
            apply_rounding: false,
        }
    }
}

impl Default for ComputeOptions {
    fn default() -> Self {
        Self::from_config(LabelConfig::global())
    }
}

/// Everything the label and the export pipeline need about a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputedNutritionResult {
    /// Sum of all scaled ingredient contributions
    pub totals_per_batch: NutrientProfile,
    /// Batch totals divided by servings
    pub per_serving: NutrientProfile,
    /// FDA-rounded per-serving values (equal to `per_serving` when rounding is off)
    pub per_serving_rounded: NutrientProfile,
    /// Whole-percent daily values of the declared amounts
    pub percent_daily_values: BTreeMap<NutrientKey, u32>,
    /// Recipe allergen disclosure
    pub allergen_statement: AllergenStatement,
    /// Nutrients at least one ingredient could not report
    pub missing_fields: Vec<NutrientKey>,
    /// Adjustments made by rounding
    pub rounding_notes: Vec<RoundingNote>,
    /// Nutrients declared as "less than" their rounded value
    pub less_than_fields: BTreeSet<NutrientKey>,
    /// Servings the batch was divided into
    pub servings_per_batch: u32,
    /// Whether rounding was applied
    pub rounding_applied: bool,
}

impl ComputedNutritionResult {
    /// Whether every nutrient was reported by every ingredient
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_fields.is_empty()
    }
}

fn validate(ingredients: &[IngredientLine], servings_per_batch: u32) -> AppResult<()> {
    if ingredients.is_empty() {
        return Err(AppError::invalid_input(
            "Cannot compute nutrition for a recipe with no ingredients",
        ));
    }
    if servings_per_batch == 0 {
        return Err(AppError::invalid_input("servingsPerBatch must be at least 1")
            .with_details(serde_json::json!({ "servings_per_batch": servings_per_batch })));
    }
    if let Some((index, line)) = ingredients
        .iter()
        .enumerate()
        .find(|(_, line)| !(line.amount_grams.is_finite() && line.amount_grams > 0.0))
    {
        return Err(AppError::invalid_line(index, line.amount_grams));
    }
    Ok(())
}

/// Aggregate ingredient lines into per-serving nutrition facts
///
/// # Errors
///
/// Returns an `INVALID_INPUT` error when the ingredient list is empty,
/// `servings_per_batch` is zero, or any line's amount is not a positive
/// finite number of grams (the offending line index is in the details).
pub fn compute_recipe_nutrition(
    ingredients: &[IngredientLine],
    servings_per_batch: u32,
    options: ComputeOptions,
) -> AppResult<ComputedNutritionResult> {
    validate(ingredients, servings_per_batch)?;

    let batch = sum(
        ingredients
            .iter()
            .map(|line| (&line.snapshot.per_100g, line.amount_grams)),
    );
    let per_serving = divide(&batch.totals, f64::from(servings_per_batch))?;

    let (per_serving_rounded, rounding_notes, less_than_fields) = if options.apply_rounding {
        let rounded = round_profile(&per_serving);
        debug!(
            adjustments = rounded.notes.len(),
            less_than = rounded.less_than.len(),
            "Applied FDA rounding"
        );
        (rounded.profile, rounded.notes, rounded.less_than)
    } else {
        (per_serving, Vec::new(), BTreeSet::new())
    };

    let percent_daily_values = percent_daily_values(&per_serving_rounded);
    let allergen_statement =
        AllergenStatement::from_line_sets(ingredients.iter().map(IngredientLine::effective_allergens));

    debug!(
        lines = ingredients.len(),
        servings = servings_per_batch,
        missing = batch.missing_fields.len(),
        allergens = allergen_statement.contains.len(),
        "Aggregated recipe nutrition"
    );
    if !batch.missing_fields.is_empty() {
        warn!(
            missing_fields = ?batch.missing_fields,
            "Recipe nutrition is incomplete; some ingredients lack nutrient data"
        );
    }

    Ok(ComputedNutritionResult {
        totals_per_batch: batch.totals,
        per_serving,
        per_serving_rounded,
        percent_daily_values,
        allergen_statement,
        missing_fields: batch.missing_fields,
        rounding_notes,
        less_than_fields,
        servings_per_batch,
        rounding_applied: options.apply_rounding,
    })
}
