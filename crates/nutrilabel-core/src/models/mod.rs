// ABOUTME: Core data models shared by the aggregation engine and label renderer
// ABOUTME: Re-exports nutrient profile and allergen types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Major food allergens
pub mod allergen;
/// Nutrient keys, tri-state values, profiles and frozen snapshots
pub mod nutrition;

pub use allergen::Allergen;
pub use nutrition::{NutrientKey, NutrientProfile, NutrientSnapshot, NutrientUnit, NutrientValue};
