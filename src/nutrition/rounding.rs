// ABOUTME: FDA nutrition-label rounding rules expressed as per-nutrient tier tables
// ABOUTME: Rounds raw per-serving values, flags "less than" amounts, and records rounding notes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! FDA Rounding Engine
//!
//! Each nutrient class owns an ordered list of tiers. The first tier whose
//! bound contains the raw value decides the strategy. Adding a nutrient or
//! moving a threshold is a table edit.
//!
//! # Reference
//!
//! 21 CFR 101.9(c) and the FDA Food Labeling Guide, Appendix H
//! (rounding the values of nutrients).
//!
//! Exact half increments round up (23 kcal -> 25, 2.25 g -> 2.5). Negative
//! and non-finite input is clamped to 0: upstream data quality is outside
//! this engine's control and rounding never fails.

use nutrilabel_core::models::{NutrientKey, NutrientProfile, NutrientValue};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Upper bound of a rounding tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    /// Values strictly below the limit
    Below(f64),
    /// Values less than or equal to the limit
    AtMost(f64),
    /// Everything not caught by an earlier tier
    Unbounded,
}

impl Bound {
    fn contains(self, value: f64) -> bool {
        match self {
            Self::Below(limit) => value < limit,
            Self::AtMost(limit) => value <= limit,
            Self::Unbounded => true,
        }
    }
}

/// How a value inside a tier is turned into its declared amount
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Strategy {
    /// Declare as zero
    Zero,
    /// Round to the nearest multiple of the increment, halves up
    Nearest(f64),
    /// Declare as "less than" the cap; numerically the cap
    LessThan(f64),
    /// Round to a fixed number of decimal places
    Decimals(i32),
}

impl Strategy {
    fn apply(self, value: f64) -> RoundedAmount {
        match self {
            Self::Zero => RoundedAmount::plain(0.0),
            Self::Nearest(increment) => RoundedAmount::plain((value / increment).round() * increment),
            Self::LessThan(cap) => RoundedAmount {
                value: cap,
                less_than: true,
            },
            Self::Decimals(places) => {
                let factor = 10_f64.powi(places);
                RoundedAmount::plain((value * factor).round() / factor)
            }
        }
    }
}

/// One row of a rounding table
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tier {
    /// Values this tier applies to (after earlier tiers were skipped)
    pub bound: Bound,
    /// Rounding applied inside the tier
    pub strategy: Strategy,
}

const fn tier(bound: Bound, strategy: Strategy) -> Tier {
    Tier { bound, strategy }
}

/// Calories: <5 -> 0, 5-50 -> nearest 5, >50 -> nearest 10
const CALORIE_TIERS: &[Tier] = &[
    tier(Bound::Below(5.0), Strategy::Zero),
    tier(Bound::AtMost(50.0), Strategy::Nearest(5.0)),
    tier(Bound::Unbounded, Strategy::Nearest(10.0)),
];

/// Total, saturated and trans fat: <0.5 -> 0, <5 -> nearest 0.5, else nearest 1
const FAT_TIERS: &[Tier] = &[
    tier(Bound::Below(0.5), Strategy::Zero),
    tier(Bound::Below(5.0), Strategy::Nearest(0.5)),
    tier(Bound::Unbounded, Strategy::Nearest(1.0)),
];

/// Cholesterol: <2 -> 0, 2-5 -> "less than 5 mg", else nearest 5
const CHOLESTEROL_TIERS: &[Tier] = &[
    tier(Bound::Below(2.0), Strategy::Zero),
    tier(Bound::Below(5.0), Strategy::LessThan(5.0)),
    tier(Bound::Unbounded, Strategy::Nearest(5.0)),
];

/// Sodium: <5 -> 0, 5-140 -> nearest 5, >140 -> nearest 10
const SODIUM_TIERS: &[Tier] = &[
    tier(Bound::Below(5.0), Strategy::Zero),
    tier(Bound::AtMost(140.0), Strategy::Nearest(5.0)),
    tier(Bound::Unbounded, Strategy::Nearest(10.0)),
];

/// Carbohydrates, sugars, fiber, protein: <0.5 -> 0, <1 -> "less than 1 g", else nearest 1
const GRAM_TIERS: &[Tier] = &[
    tier(Bound::Below(0.5), Strategy::Zero),
    tier(Bound::Below(1.0), Strategy::LessThan(1.0)),
    tier(Bound::Unbounded, Strategy::Nearest(1.0)),
];

/// Vitamins and minerals: amount shown to one decimal; only their %DV is regulated
const MICRONUTRIENT_TIERS: &[Tier] = &[tier(Bound::Unbounded, Strategy::Decimals(1))];

/// Rounding table for `key`
#[must_use]
pub const fn rule_for(key: NutrientKey) -> &'static [Tier] {
    match key {
        NutrientKey::Calories => CALORIE_TIERS,
        NutrientKey::TotalFat | NutrientKey::SaturatedFat | NutrientKey::TransFat => FAT_TIERS,
        NutrientKey::Cholesterol => CHOLESTEROL_TIERS,
        NutrientKey::Sodium => SODIUM_TIERS,
        NutrientKey::TotalCarbohydrate
        | NutrientKey::DietaryFiber
        | NutrientKey::TotalSugars
        | NutrientKey::AddedSugars
        | NutrientKey::Protein => GRAM_TIERS,
        NutrientKey::VitaminD | NutrientKey::Calcium | NutrientKey::Iron | NutrientKey::Potassium => {
            MICRONUTRIENT_TIERS
        }
    }
}

/// Declared amount after rounding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundedAmount {
    /// Numeric declared value
    pub value: f64,
    /// Declared as "less than" `value`
    pub less_than: bool,
}

impl RoundedAmount {
    const fn plain(value: f64) -> Self {
        Self {
            value,
            less_than: false,
        }
    }
}

/// Round a raw per-serving amount, keeping the "less than" qualifier
#[must_use]
pub fn round_nutrient_detailed(key: NutrientKey, raw: f64) -> RoundedAmount {
    let value = if raw.is_finite() { raw.max(0.0) } else { 0.0 };
    rule_for(key)
        .iter()
        .find(|tier| tier.bound.contains(value))
        .map_or(RoundedAmount::plain(value), |tier| tier.strategy.apply(value))
}

/// Round a raw per-serving amount to its declared numeric value
#[must_use]
pub fn round_nutrient(key: NutrientKey, raw: f64) -> f64 {
    round_nutrient_detailed(key, raw).value
}

/// Record of a raw value adjusted to its declared value
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundingNote {
    /// Nutrient that was adjusted
    pub nutrient: NutrientKey,
    /// Unrounded per-serving value
    pub raw_value: f64,
    /// Declared value
    pub rounded_value: f64,
}

/// A rounded profile with its audit trail
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RoundedProfile {
    /// Declared values; unknown stays unknown
    pub profile: NutrientProfile,
    /// One note per value that changed
    pub notes: Vec<RoundingNote>,
    /// Nutrients declared with a "less than" qualifier
    pub less_than: BTreeSet<NutrientKey>,
}

/// Round every known field of a per-serving profile
#[must_use]
pub fn round_profile(per_serving: &NutrientProfile) -> RoundedProfile {
    let mut rounded = RoundedProfile::default();
    for (key, value) in per_serving.iter() {
        let Some(raw) = value.amount() else {
            continue;
        };
        let declared = round_nutrient_detailed(key, raw);
        *rounded.profile.get_mut(key) = NutrientValue::from_amount(declared.value);
        if declared.less_than {
            rounded.less_than.insert(key);
        }
        if (declared.value - raw).abs() > f64::EPSILON {
            rounded.notes.push(RoundingNote {
                nutrient: key,
                raw_value: raw,
                rounded_value: declared.value,
            });
        }
    }
    rounded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_table_ends_unbounded() {
        for key in NutrientKey::ALL {
            let tiers = rule_for(key);
            assert!(!tiers.is_empty());
            assert_eq!(tiers[tiers.len() - 1].bound, Bound::Unbounded);
        }
    }

    #[test]
    fn test_cholesterol_less_than_five() {
        let declared = round_nutrient_detailed(NutrientKey::Cholesterol, 3.2);
        assert!(declared.less_than);
        assert!((declared.value - 5.0).abs() < f64::EPSILON);
        assert!(!round_nutrient_detailed(NutrientKey::Cholesterol, 7.0).less_than);
    }

    #[test]
    fn test_negative_and_nan_clamp_to_zero() {
        assert!(round_nutrient(NutrientKey::Sodium, -12.0).abs() < f64::EPSILON);
        assert!(round_nutrient(NutrientKey::Calories, f64::NAN).abs() < f64::EPSILON);
        assert!(round_nutrient(NutrientKey::Iron, f64::INFINITY).abs() < f64::EPSILON);
    }

    #[test]
    fn test_round_profile_skips_unknown() {
        let per_serving = NutrientProfile::unknown()
            .with(NutrientKey::Calories, 152.0)
            .with(NutrientKey::Sodium, 456.0);
        let rounded = round_profile(&per_serving);
        assert_eq!(rounded.profile.amount(NutrientKey::Calories), Some(150.0));
        assert_eq!(rounded.profile.amount(NutrientKey::Sodium), Some(460.0));
        assert_eq!(rounded.profile.get(NutrientKey::Protein), NutrientValue::Unknown);
        assert_eq!(rounded.notes.len(), 2);
    }
}
