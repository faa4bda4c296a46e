// ABOUTME: The nine FDA major food allergens and their label display names
// ABOUTME: Canonical ordering, lenient name parsing, and string serialization
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Major food allergen requiring disclosure
///
/// Variant order is the order used in a "Contains:" statement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Allergen {
    /// Milk and dairy derivatives
    Milk,
    /// Eggs
    Eggs,
    /// Finfish
    Fish,
    /// Crustacean shellfish
    Shellfish,
    /// Tree nuts
    TreeNuts,
    /// Peanuts
    Peanuts,
    /// Wheat
    Wheat,
    /// Soybeans
    Soybeans,
    /// Sesame
    Sesame,
}

impl Allergen {
    /// All major allergens in statement order
    pub const ALL: [Self; 9] = [
        Self::Milk,
        Self::Eggs,
        Self::Fish,
        Self::Shellfish,
        Self::TreeNuts,
        Self::Peanuts,
        Self::Wheat,
        Self::Soybeans,
        Self::Sesame,
    ];

    /// Name used in the allergen statement
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Milk => "Milk",
            Self::Eggs => "Eggs",
            Self::Fish => "Fish",
            Self::Shellfish => "Shellfish",
            Self::TreeNuts => "Tree Nuts",
            Self::Peanuts => "Peanuts",
            Self::Wheat => "Wheat",
            Self::Soybeans => "Soybeans",
            Self::Sesame => "Sesame",
        }
    }

    /// Parse a user-entered allergen name, tolerating singular forms and common synonyms
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "milk" | "dairy" => Some(Self::Milk),
            "egg" | "eggs" => Some(Self::Eggs),
            "fish" => Some(Self::Fish),
            "shellfish" | "crustacean shellfish" | "crustaceans" => Some(Self::Shellfish),
            "tree nuts" | "tree nut" | "treenuts" | "tree_nuts" => Some(Self::TreeNuts),
            "peanut" | "peanuts" => Some(Self::Peanuts),
            "wheat" => Some(Self::Wheat),
            "soy" | "soya" | "soybean" | "soybeans" => Some(Self::Soybeans),
            "sesame" => Some(Self::Sesame),
            _ => None,
        }
    }
}

impl fmt::Display for Allergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl Serialize for Allergen {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.display_name())
    }
}

impl<'de> Deserialize<'de> for Allergen {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown allergen: {name}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        for allergen in Allergen::ALL {
            assert_eq!(Allergen::from_name(allergen.display_name()), Some(allergen));
        }
        assert_eq!(Allergen::from_name("Soy"), Some(Allergen::Soybeans));
        assert_eq!(Allergen::from_name("gluten"), None);
    }

    #[test]
    fn test_serializes_as_display_name() {
        let json = serde_json::to_string(&Allergen::TreeNuts).unwrap_or_default();
        assert_eq!(json, "\"Tree Nuts\"");
        let parsed: Option<Allergen> = serde_json::from_str("\"peanut\"").ok();
        assert_eq!(parsed, Some(Allergen::Peanuts));
    }
}
