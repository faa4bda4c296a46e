// ABOUTME: 2020 FDA daily reference values used to compute percent daily value
// ABOUTME: Lookup by nutrient key; nutrients without a reference return None
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::models::NutrientKey;

/// Total fat (g)
pub const TOTAL_FAT_G: f64 = 78.0;
/// Saturated fat (g)
pub const SATURATED_FAT_G: f64 = 20.0;
/// Cholesterol (mg)
pub const CHOLESTEROL_MG: f64 = 300.0;
/// Sodium (mg)
pub const SODIUM_MG: f64 = 2300.0;
/// Total carbohydrate (g)
pub const TOTAL_CARBOHYDRATE_G: f64 = 275.0;
/// Dietary fiber (g)
pub const DIETARY_FIBER_G: f64 = 28.0;
/// Added sugars (g)
pub const ADDED_SUGARS_G: f64 = 50.0;
/// Protein (g)
pub const PROTEIN_G: f64 = 50.0;
/// Vitamin D (mcg)
pub const VITAMIN_D_MCG: f64 = 20.0;
/// Calcium (mg)
pub const CALCIUM_MG: f64 = 1300.0;
/// Iron (mg)
pub const IRON_MG: f64 = 18.0;
/// Potassium (mg)
pub const POTASSIUM_MG: f64 = 4700.0;

/// Calorie intake the %DV footnote refers to
pub const REFERENCE_DIET_KCAL: u32 = 2000;

/// Reference amount for `key`, in the key's native unit
///
/// Calories, trans fat and total sugars have no daily value.
#[must_use]
pub const fn reference_for(key: NutrientKey) -> Option<f64> {
    match key {
        NutrientKey::TotalFat => Some(TOTAL_FAT_G),
        NutrientKey::SaturatedFat => Some(SATURATED_FAT_G),
        NutrientKey::Cholesterol => Some(CHOLESTEROL_MG),
        NutrientKey::Sodium => Some(SODIUM_MG),
        NutrientKey::TotalCarbohydrate => Some(TOTAL_CARBOHYDRATE_G),
        NutrientKey::DietaryFiber => Some(DIETARY_FIBER_G),
        NutrientKey::AddedSugars => Some(ADDED_SUGARS_G),
        NutrientKey::Protein => Some(PROTEIN_G),
        NutrientKey::VitaminD => Some(VITAMIN_D_MCG),
        NutrientKey::Calcium => Some(CALCIUM_MG),
        NutrientKey::Iron => Some(IRON_MG),
        NutrientKey::Potassium => Some(POTASSIUM_MG),
        NutrientKey::Calories | NutrientKey::TransFat | NutrientKey::TotalSugars => None,
    }
}
