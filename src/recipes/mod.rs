// ABOUTME: Recipe records: ingredient lines with frozen snapshots, serving sizes, recipes
// ABOUTME: Re-exports the model types used by the aggregator, scaler and renderer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Recipe data models
pub mod models;

pub use models::{EnteredUnit, IngredientLine, Recipe, ServingSize};
