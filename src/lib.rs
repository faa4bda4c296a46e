// ABOUTME: Main library entry point for the nutrilabel nutrition engine
// ABOUTME: Recipe nutrition computation, FDA rounding, allergen disclosure and label rendering
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Nutrilabel
//!
//! Deterministic nutrition computation and nutrition-facts label rendering.
//! A recipe (ingredient lines with frozen per-100g snapshots plus a serving
//! count) becomes FDA-rounded per-serving values, percent daily values, an
//! allergen statement, and a vector label sized for a physical preset.
//!
//! Every engine function is pure: no I/O, no shared mutable state.
//!
//! ## Example Usage
//!
//! ```rust
//! use nutrilabel::label::{render_label, LabelContent, LabelFormat, RenderOptions, Resolution};
//! use nutrilabel::nutrition::{compute_recipe_nutrition, ComputeOptions};
//! use nutrilabel::models::{NutrientKey, NutrientProfile, NutrientSnapshot};
//! use nutrilabel::recipes::{IngredientLine, ServingSize};
//!
//! # fn main() -> nutrilabel::errors::AppResult<()> {
//! let oats = NutrientProfile::unknown()
//!     .with(NutrientKey::Calories, 379.0)
//!     .with(NutrientKey::Protein, 13.2);
//! let lines = vec![IngredientLine::detect(
//!     NutrientSnapshot::capture("fdc-173904", "Rolled oats", oats),
//!     80.0,
//! )];
//!
//! let result = compute_recipe_nutrition(&lines, 2, ComputeOptions::default())?;
//! let label = render_label(
//!     &result,
//!     &LabelContent::new(ServingSize::new("1/2 cup").with_grams(40.0)),
//!     RenderOptions::new(LabelFormat::FourBySix, Resolution::Screen),
//! );
//! assert!(label.svg.contains("Nutrition Facts"));
//! # Ok(())
//! # }
//! ```

/// Engine configuration with environment overrides
pub mod config;
/// Unified error handling
pub mod errors;
/// Label layout and rendering
pub mod label;
/// Structured logging setup for the binary
pub mod logging;
/// Nutrition computation engine
pub mod nutrition;
/// Recipe and ingredient-line records
pub mod recipes;

pub use nutrilabel_core::constants;
pub use nutrilabel_core::models;
