// ABOUTME: Recipe and ingredient-line records consumed by the nutrition engine
// ABOUTME: Frozen nutrient snapshots, effective allergen sets, and recipe-level convenience methods
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::errors::AppResult;
use crate::label::format_amount;
use crate::nutrition::aggregator::{compute_recipe_nutrition, ComputeOptions, ComputedNutritionResult};
use crate::nutrition::allergens::detect_for_snapshot;
use crate::nutrition::scaling::scale_recipe;
use nutrilabel_core::models::{Allergen, NutrientSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use uuid::Uuid;

static NO_ALLERGENS: BTreeSet<Allergen> = BTreeSet::new();

/// Quantity as the recipe author typed it (e.g. 2 "breast")
///
/// Display and scaling only; never used for computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnteredUnit {
    /// Numeric quantity
    pub value: f64,
    /// Free-text unit label
    pub label: String,
}

impl EnteredUnit {
    /// Create an entered unit
    #[must_use]
    pub fn new(value: f64, label: impl Into<String>) -> Self {
        Self {
            value,
            label: label.into(),
        }
    }
}

/// One ingredient of a recipe
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientLine {
    /// Per-100g nutrients captured when the ingredient was selected
    pub snapshot: NutrientSnapshot,
    /// Amount used, in grams
    pub amount_grams: f64,
    /// Allergens found by keyword detection; `None` until detection has run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detected_allergens: Option<BTreeSet<Allergen>>,
    /// Author override; replaces the detected set when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub allergen_override: Option<BTreeSet<Allergen>>,
    /// Quantity as entered
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entered_unit: Option<EnteredUnit>,
}

impl IngredientLine {
    /// Create a line on which detection has not run
    #[must_use]
    pub const fn new(snapshot: NutrientSnapshot, amount_grams: f64) -> Self {
        Self {
            snapshot,
            amount_grams,
            detected_allergens: None,
            allergen_override: None,
            entered_unit: None,
        }
    }

    /// Create a line and run allergen detection on its snapshot
    #[must_use]
    pub fn detect(snapshot: NutrientSnapshot, amount_grams: f64) -> Self {
        let detected_allergens = Some(detect_for_snapshot(&snapshot));
        Self {
            detected_allergens,
            ..Self::new(snapshot, amount_grams)
        }
    }

    /// Set the detected allergens explicitly
    #[must_use]
    pub fn with_detected(mut self, allergens: impl IntoIterator<Item = Allergen>) -> Self {
        self.detected_allergens = Some(allergens.into_iter().collect());
        self
    }

    /// Override the detected allergens
    #[must_use]
    pub fn with_override(mut self, allergens: impl IntoIterator<Item = Allergen>) -> Self {
        self.allergen_override = Some(allergens.into_iter().collect());
        self
    }

    /// Record the quantity as entered
    #[must_use]
    pub fn with_entered_unit(mut self, value: f64, label: impl Into<String>) -> Self {
        self.entered_unit = Some(EnteredUnit::new(value, label));
        self
    }

    /// Override if present, else detected, else nothing
    #[must_use]
    pub fn effective_allergens(&self) -> &BTreeSet<Allergen> {
        self.allergen_override
            .as_ref()
            .or(self.detected_allergens.as_ref())
            .unwrap_or(&NO_ALLERGENS)
    }
}

/// Serving size as printed on the label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServingSize {
    /// Household measure text, e.g. "1 cup"
    pub text: String,
    /// Gram weight, printed in parentheses when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grams: Option<f64>,
}

impl ServingSize {
    /// Serving size with household text only
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            grams: None,
        }
    }

    /// Add the gram weight
    #[must_use]
    pub const fn with_grams(mut self, grams: f64) -> Self {
        self.grams = Some(grams);
        self
    }

    /// "1 cup (240g)" or just "1 cup"
    #[must_use]
    pub fn display(&self) -> String {
        match self.grams {
            Some(grams) => format!("{} ({}g)", self.text, format_amount(grams)),
            None => self.text.clone(),
        }
    }
}

/// A recipe as supplied by the storage collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Stable identifier
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// Recipe name
    pub name: String,
    /// Number of servings one batch yields
    pub servings_per_batch: u32,
    /// Label serving size
    pub serving_size: ServingSize,
    /// Ingredient lines in display order
    pub ingredients: Vec<IngredientLine>,
}

impl Recipe {
    /// Create an empty recipe
    #[must_use]
    pub fn new(name: impl Into<String>, servings_per_batch: u32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            servings_per_batch,
            serving_size: ServingSize::new("1 serving"),
            ingredients: Vec::new(),
        }
    }

    /// Set the serving size
    #[must_use]
    pub fn with_serving_size(mut self, serving_size: ServingSize) -> Self {
        self.serving_size = serving_size;
        self
    }

    /// Append an ingredient line
    #[must_use]
    pub fn with_ingredient(mut self, line: IngredientLine) -> Self {
        self.ingredients.push(line);
        self
    }

    /// Run allergen detection on lines that carry no detected set
    ///
    /// Detected sets already on a line and author overrides are kept.
    #[must_use]
    pub fn with_detected_allergens(mut self) -> Self {
        for line in &mut self.ingredients {
            if line.detected_allergens.is_none() {
                line.detected_allergens = Some(detect_for_snapshot(&line.snapshot));
            }
        }
        self
    }

    /// Total batch weight in grams
    #[must_use]
    pub fn total_weight_grams(&self) -> f64 {
        self.ingredients.iter().map(|i| i.amount_grams).sum()
    }

    /// Compute nutrition with default options
    ///
    /// # Errors
    ///
    /// Returns a validation error if the recipe has no ingredients, zero
    /// servings, or a line with a non-positive amount
    pub fn compute_nutrition(&self) -> AppResult<ComputedNutritionResult> {
        compute_recipe_nutrition(
            &self.ingredients,
            self.servings_per_batch,
            ComputeOptions::default(),
        )
    }

    /// Rescale to a different number of servings
    ///
    /// Serving size stays as declared; the batch grows or shrinks.
    ///
    /// # Errors
    ///
    /// Returns a validation error if either serving count is zero
    pub fn scaled(&self, new_servings: u32) -> AppResult<Self> {
        let ingredients = scale_recipe(
            &self.ingredients,
            f64::from(self.servings_per_batch),
            f64::from(new_servings),
        )?;
        Ok(Self {
            id: self.id,
            name: self.name.clone(),
            servings_per_batch: new_servings,
            serving_size: self.serving_size.clone(),
            ingredients,
        })
    }
}
