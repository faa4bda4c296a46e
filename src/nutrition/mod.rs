// ABOUTME: Nutrition computation engine: profile arithmetic, rounding, %DV, allergens, aggregation
// ABOUTME: Every function here is pure and safe to call concurrently from any number of callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Nutrition Engine
//!
//! Dependency order, leaves first:
//!
//! - [`profile`] - scale, sum and divide per-100g nutrient profiles
//! - [`allergens`] - keyword allergen detection and the recipe statement
//! - [`rounding`] - FDA label rounding tables
//! - [`daily_values`] - percent daily value against 2020 FDA references
//! - [`aggregator`] - ingredient lines to a computed nutrition result
//! - [`scaling`] - proportional recipe rescaling

/// Recipe aggregation
pub mod aggregator;
/// Allergen detection
pub mod allergens;
/// Percent daily values
pub mod daily_values;
/// Nutrient profile arithmetic
pub mod profile;
/// FDA rounding
pub mod rounding;
/// Recipe scaling
pub mod scaling;

pub use aggregator::{compute_recipe_nutrition, ComputeOptions, ComputedNutritionResult};
pub use allergens::{detect_allergens, AllergenStatement};
pub use daily_values::{percent_daily_value, percent_daily_values};
pub use rounding::{round_nutrient, round_nutrient_detailed, RoundedAmount, RoundingNote};
pub use scaling::scale_recipe;
