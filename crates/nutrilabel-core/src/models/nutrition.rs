// ABOUTME: Per-100g nutrient profile model with an explicit known/zero/unknown tri-state
// ABOUTME: NutrientKey, NutrientUnit, NutrientValue, NutrientProfile, and NutrientSnapshot definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit a nutrient amount is expressed in, implied by its key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutrientUnit {
    /// Kilocalories
    Kilocalorie,
    /// Grams
    Gram,
    /// Milligrams
    Milligram,
    /// Micrograms
    Microgram,
}

impl NutrientUnit {
    /// Symbol printed after an amount on the label
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Kilocalorie => "kcal",
            Self::Gram => "g",
            Self::Milligram => "mg",
            Self::Microgram => "mcg",
        }
    }
}

/// Nutrients tracked per ingredient and declared on the label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NutrientKey {
    /// Energy (kcal)
    Calories,
    /// Total fat (g)
    TotalFat,
    /// Saturated fat (g)
    SaturatedFat,
    /// Trans fat (g)
    TransFat,
    /// Cholesterol (mg)
    Cholesterol,
    /// Sodium (mg)
    Sodium,
    /// Total carbohydrate (g)
    TotalCarbohydrate,
    /// Dietary fiber (g)
    DietaryFiber,
    /// Total sugars (g)
    TotalSugars,
    /// Added sugars (g)
    AddedSugars,
    /// Protein (g)
    Protein,
    /// Vitamin D (mcg)
    VitaminD,
    /// Calcium (mg)
    Calcium,
    /// Iron (mg)
    Iron,
    /// Potassium (mg)
    Potassium,
}

impl NutrientKey {
    /// Every key, in label declaration order
    pub const ALL: [Self; 15] = [
        Self::Calories,
        Self::TotalFat,
        Self::SaturatedFat,
        Self::TransFat,
        Self::Cholesterol,
        Self::Sodium,
        Self::TotalCarbohydrate,
        Self::DietaryFiber,
        Self::TotalSugars,
        Self::AddedSugars,
        Self::Protein,
        Self::VitaminD,
        Self::Calcium,
        Self::Iron,
        Self::Potassium,
    ];

    /// Vitamins and minerals declared below the protein row
    pub const MICRONUTRIENTS: [Self; 4] =
        [Self::VitaminD, Self::Calcium, Self::Iron, Self::Potassium];

    /// Wire name (camelCase)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Calories => "calories",
            Self::TotalFat => "totalFat",
            Self::SaturatedFat => "saturatedFat",
            Self::TransFat => "transFat",
            Self::Cholesterol => "cholesterol",
            Self::Sodium => "sodium",
            Self::TotalCarbohydrate => "totalCarbohydrate",
            Self::DietaryFiber => "dietaryFiber",
            Self::TotalSugars => "totalSugars",
            Self::AddedSugars => "addedSugars",
            Self::Protein => "protein",
            Self::VitaminD => "vitaminD",
            Self::Calcium => "calcium",
            Self::Iron => "iron",
            Self::Potassium => "potassium",
        }
    }

    /// Name printed on the label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Calories => "Calories",
            Self::TotalFat => "Total Fat",
            Self::SaturatedFat => "Saturated Fat",
            Self::TransFat => "Trans Fat",
            Self::Cholesterol => "Cholesterol",
            Self::Sodium => "Sodium",
            Self::TotalCarbohydrate => "Total Carbohydrate",
            Self::DietaryFiber => "Dietary Fiber",
            Self::TotalSugars => "Total Sugars",
            Self::AddedSugars => "Added Sugars",
            Self::Protein => "Protein",
            Self::VitaminD => "Vitamin D",
            Self::Calcium => "Calcium",
            Self::Iron => "Iron",
            Self::Potassium => "Potassium",
        }
    }

    /// Native unit of this nutrient
    #[must_use]
    pub const fn unit(&self) -> NutrientUnit {
        match self {
            Self::Calories => NutrientUnit::Kilocalorie,
            Self::Cholesterol | Self::Sodium | Self::Calcium | Self::Iron | Self::Potassium => {
                NutrientUnit::Milligram
            }
            Self::VitaminD => NutrientUnit::Microgram,
            Self::TotalFat
            | Self::SaturatedFat
            | Self::TransFat
            | Self::TotalCarbohydrate
            | Self::DietaryFiber
            | Self::TotalSugars
            | Self::AddedSugars
            | Self::Protein => NutrientUnit::Gram,
        }
    }

    /// Whether this key is a vitamin or mineral
    #[must_use]
    pub const fn is_micronutrient(&self) -> bool {
        matches!(
            self,
            Self::VitaminD | Self::Calcium | Self::Iron | Self::Potassium
        )
    }

    /// Parse a wire name, accepting `snake_case` as well
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let compact: String = name
            .chars()
            .filter(|c| *c != '_' && *c != ' ')
            .collect::<String>()
            .to_lowercase();
        Self::ALL
            .into_iter()
            .find(|key| key.as_str().to_lowercase() == compact)
    }
}

impl fmt::Display for NutrientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Amount of one nutrient
///
/// `Unknown` means the data source did not report the nutrient; it is never
/// treated as zero. `Zero` is a reported absence. On the wire this is a
/// nullable number: `null` for unknown, `0` for zero.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum NutrientValue {
    /// Not reported by the data source
    #[default]
    Unknown,
    /// Reported as absent
    Zero,
    /// Reported positive (or, from poor upstream data, negative) amount
    Amount(f64),
}

impl NutrientValue {
    /// Build from a raw reported amount; non-finite input is unknown
    #[must_use]
    pub fn from_amount(amount: f64) -> Self {
        if !amount.is_finite() {
            Self::Unknown
        } else if amount == 0.0 {
            Self::Zero
        } else {
            Self::Amount(amount)
        }
    }

    /// Numeric value when known
    #[must_use]
    pub const fn amount(&self) -> Option<f64> {
        match self {
            Self::Unknown => None,
            Self::Zero => Some(0.0),
            Self::Amount(v) => Some(*v),
        }
    }

    /// Whether a value was reported
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Apply `f` to a known amount; unknown stays unknown
    #[must_use]
    pub fn map(self, f: impl FnOnce(f64) -> f64) -> Self {
        self.amount().map_or(Self::Unknown, |v| Self::from_amount(f(v)))
    }

    /// Sum of known contributions; unknown only when both sides are unknown
    #[must_use]
    pub fn combine(self, other: Self) -> Self {
        match (self.amount(), other.amount()) {
            (Some(a), Some(b)) => Self::from_amount(a + b),
            (Some(_), None) => self,
            (None, Some(_)) => other,
            (None, None) => Self::Unknown,
        }
    }
}

impl From<Option<f64>> for NutrientValue {
    fn from(value: Option<f64>) -> Self {
        value.map_or(Self::Unknown, Self::from_amount)
    }
}

impl From<NutrientValue> for Option<f64> {
    fn from(value: NutrientValue) -> Self {
        value.amount()
    }
}

impl From<f64> for NutrientValue {
    fn from(value: f64) -> Self {
        Self::from_amount(value)
    }
}

/// Nutrient amounts keyed by [`NutrientKey`]
///
/// Used both per 100g (ingredient snapshots) and per batch or per serving
/// (computed results). Missing JSON fields deserialize as unknown.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NutrientProfile {
    /// Energy (kcal)
    pub calories: NutrientValue,
    /// Total fat (g)
    pub total_fat: NutrientValue,
    /// Saturated fat (g)
    pub saturated_fat: NutrientValue,
    /// Trans fat (g)
    pub trans_fat: NutrientValue,
    /// Cholesterol (mg)
    pub cholesterol: NutrientValue,
    /// Sodium (mg)
    pub sodium: NutrientValue,
    /// Total carbohydrate (g)
    pub total_carbohydrate: NutrientValue,
    /// Dietary fiber (g)
    pub dietary_fiber: NutrientValue,
    /// Total sugars (g)
    pub total_sugars: NutrientValue,
    /// Added sugars (g)
    pub added_sugars: NutrientValue,
    /// Protein (g)
    pub protein: NutrientValue,
    /// Vitamin D (mcg)
    pub vitamin_d: NutrientValue,
    /// Calcium (mg)
    pub calcium: NutrientValue,
    /// Iron (mg)
    pub iron: NutrientValue,
    /// Potassium (mg)
    pub potassium: NutrientValue,
}

impl NutrientProfile {
    /// Profile with every nutrient unknown
    #[must_use]
    pub fn unknown() -> Self {
        Self::default()
    }

    /// Build a profile by evaluating `f` for every key
    #[must_use]
    pub fn from_fn(mut f: impl FnMut(NutrientKey) -> NutrientValue) -> Self {
        let mut profile = Self::default();
        for key in NutrientKey::ALL {
            *profile.get_mut(key) = f(key);
        }
        profile
    }

    /// Value for `key`
    #[must_use]
    pub const fn get(&self, key: NutrientKey) -> NutrientValue {
        match key {
            NutrientKey::Calories => self.calories,
            NutrientKey::TotalFat => self.total_fat,
            NutrientKey::SaturatedFat => self.saturated_fat,
            NutrientKey::TransFat => self.trans_fat,
            NutrientKey::Cholesterol => self.cholesterol,
            NutrientKey::Sodium => self.sodium,
            NutrientKey::TotalCarbohydrate => self.total_carbohydrate,
            NutrientKey::DietaryFiber => self.dietary_fiber,
            NutrientKey::TotalSugars => self.total_sugars,
            NutrientKey::AddedSugars => self.added_sugars,
            NutrientKey::Protein => self.protein,
            NutrientKey::VitaminD => self.vitamin_d,
            NutrientKey::Calcium => self.calcium,
            NutrientKey::Iron => self.iron,
            NutrientKey::Potassium => self.potassium,
        }
    }

    /// Mutable slot for `key`
    pub fn get_mut(&mut self, key: NutrientKey) -> &mut NutrientValue {
        match key {
            NutrientKey::Calories => &mut self.calories,
            NutrientKey::TotalFat => &mut self.total_fat,
            NutrientKey::SaturatedFat => &mut self.saturated_fat,
            NutrientKey::TransFat => &mut self.trans_fat,
            NutrientKey::Cholesterol => &mut self.cholesterol,
            NutrientKey::Sodium => &mut self.sodium,
            NutrientKey::TotalCarbohydrate => &mut self.total_carbohydrate,
            NutrientKey::DietaryFiber => &mut self.dietary_fiber,
            NutrientKey::TotalSugars => &mut self.total_sugars,
            NutrientKey::AddedSugars => &mut self.added_sugars,
            NutrientKey::Protein => &mut self.protein,
            NutrientKey::VitaminD => &mut self.vitamin_d,
            NutrientKey::Calcium => &mut self.calcium,
            NutrientKey::Iron => &mut self.iron,
            NutrientKey::Potassium => &mut self.potassium,
        }
    }

    /// Set a raw amount for `key`
    #[must_use]
    pub fn with(mut self, key: NutrientKey, amount: f64) -> Self {
        *self.get_mut(key) = NutrientValue::from_amount(amount);
        self
    }

    /// Known amount for `key`
    #[must_use]
    pub const fn amount(&self, key: NutrientKey) -> Option<f64> {
        self.get(key).amount()
    }

    /// Iterate all keys with their values, in label order
    pub fn iter(&self) -> impl Iterator<Item = (NutrientKey, NutrientValue)> + '_ {
        NutrientKey::ALL.into_iter().map(|key| (key, self.get(key)))
    }
}

/// Frozen copy of a food-database record taken when the ingredient was chosen
///
/// Owned by value and never re-synchronized with its source, so a recipe's
/// computed facts stay reproducible when upstream data changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientSnapshot {
    /// Opaque identifier assigned by the ingredient-lookup provider
    pub food_id: String,
    /// Display name of the food
    pub display_name: String,
    /// Full ingredient statement, when the provider has one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingredient_text: Option<String>,
    /// Nutrients per 100g
    pub per_100g: NutrientProfile,
    /// When the snapshot was taken
    #[serde(default = "Utc::now")]
    pub captured_at: DateTime<Utc>,
}

impl NutrientSnapshot {
    /// Capture a snapshot now
    #[must_use]
    pub fn capture(
        food_id: impl Into<String>,
        display_name: impl Into<String>,
        per_100g: NutrientProfile,
    ) -> Self {
        Self {
            food_id: food_id.into(),
            display_name: display_name.into(),
            ingredient_text: None,
            per_100g,
            captured_at: Utc::now(),
        }
    }

    /// Attach the provider's ingredient statement
    #[must_use]
    pub fn with_ingredient_text(mut self, text: impl Into<String>) -> Self {
        self.ingredient_text = Some(text.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_is_not_zero() {
        assert_eq!(NutrientValue::from(None), NutrientValue::Unknown);
        assert_eq!(NutrientValue::from(Some(0.0)), NutrientValue::Zero);
        assert_eq!(NutrientValue::Zero.amount(), Some(0.0));
        assert_eq!(NutrientValue::Unknown.amount(), None);
        assert_eq!(NutrientValue::from_amount(f64::NAN), NutrientValue::Unknown);
    }

    #[test]
    fn test_combine_keeps_known_side() {
        let known = NutrientValue::from_amount(2.0);
        assert_eq!(known.combine(NutrientValue::Unknown), known);
        assert_eq!(NutrientValue::Unknown.combine(known), known);
        assert_eq!(
            NutrientValue::Unknown.combine(NutrientValue::Unknown),
            NutrientValue::Unknown
        );
        assert_eq!(
            NutrientValue::Zero.combine(NutrientValue::Zero),
            NutrientValue::Zero
        );
    }

    #[test]
    fn test_profile_json_tri_state() {
        let json = r#"{"calories": 120, "sodium": 0}"#;
        let profile: NutrientProfile = serde_json::from_str(json).unwrap_or_default();
        assert_eq!(profile.amount(NutrientKey::Calories), Some(120.0));
        assert_eq!(profile.get(NutrientKey::Sodium), NutrientValue::Zero);
        assert_eq!(profile.get(NutrientKey::Iron), NutrientValue::Unknown);

        let round_trip = serde_json::to_value(profile).unwrap_or_default();
        assert!(round_trip["iron"].is_null());
        assert_eq!(round_trip["sodium"], 0.0);
    }

    #[test]
    fn test_key_lookup() {
        assert_eq!(
            NutrientKey::from_name("total_fat"),
            Some(NutrientKey::TotalFat)
        );
        assert_eq!(
            NutrientKey::from_name("vitaminD"),
            Some(NutrientKey::VitaminD)
        );
        assert_eq!(NutrientKey::from_name("caffeine"), None);
        assert_eq!(NutrientKey::VitaminD.unit().symbol(), "mcg");
    }

    #[test]
    fn test_from_fn_visits_every_key() {
        let profile = NutrientProfile::from_fn(|_| NutrientValue::from_amount(1.0));
        assert!(profile.iter().all(|(_, value)| value.is_known()));
        assert_eq!(profile.iter().count(), NutrientKey::ALL.len());
    }
}
