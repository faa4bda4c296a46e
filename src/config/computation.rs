// ABOUTME: Computation configuration for recipe nutrition aggregation
// ABOUTME: Default rounding behavior and micronutrient %DV display threshold
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use nutrilabel_core::constants::label::MICRONUTRIENT_ZERO_DV_BELOW;
use serde::{Deserialize, Serialize};

/// Nutrition computation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputationConfig {
    /// Apply FDA rounding when the caller does not say otherwise
    pub apply_rounding: bool,
    /// Micronutrient %DV below this value is displayed as 0%
    pub micronutrient_zero_dv_below: f64,
}

impl Default for ComputationConfig {
    fn default() -> Self {
        Self {
            apply_rounding: true,
            micronutrient_zero_dv_below: MICRONUTRIENT_ZERO_DV_BELOW,
        }
    }
}
