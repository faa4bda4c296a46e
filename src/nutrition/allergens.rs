// ABOUTME: Keyword detection of the nine FDA major allergens in ingredient names and statements
// ABOUTME: Longest-phrase-first lexicon with neutral phrases, plus the recipe-level allergen statement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Allergen Detector
//!
//! Detection is a pure keyword scan. The lexicon is tried longest phrase
//! first; every match is blanked out of the working text so that a shorter
//! keyword cannot fire inside it. Neutral phrases map to no allergen and exist
//! only to consume text ("peanut butter" is not milk, "eggplant" is not egg).
//!
//! A keyword only matches at the start of a word, so "tuna" does not fire
//! inside "fortunate". Hyphens read as spaces: "half-and-half" matches
//! "half and half".

use nutrilabel_core::models::{Allergen, NutrientSnapshot};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::sync::LazyLock;

/// One surface form and the allergens it declares
#[derive(Debug, Clone, Copy)]
struct LexiconEntry {
    phrase: &'static str,
    allergens: &'static [Allergen],
}

const NONE: &[Allergen] = &[];
const MILK: &[Allergen] = &[Allergen::Milk];
const EGGS: &[Allergen] = &[Allergen::Eggs];
const FISH: &[Allergen] = &[Allergen::Fish];
const SHELLFISH: &[Allergen] = &[Allergen::Shellfish];
const TREE_NUTS: &[Allergen] = &[Allergen::TreeNuts];
const PEANUTS: &[Allergen] = &[Allergen::Peanuts];
const WHEAT: &[Allergen] = &[Allergen::Wheat];
const SOYBEANS: &[Allergen] = &[Allergen::Soybeans];
const SESAME: &[Allergen] = &[Allergen::Sesame];
const SOY_AND_WHEAT: &[Allergen] = &[Allergen::Soybeans, Allergen::Wheat];

/// Lexicon source, grouped by declared allergens
const GROUPS: &[(&[Allergen], &[&str])] = &[
    (
        NONE,
        &[
            "coconut milk",
            "oat milk",
            "rice milk",
            "hemp milk",
            "coconut cream",
            "cream of tartar",
            "cocoa butter",
            "cacao butter",
            "shea butter",
            "apple butter",
            "sunflower butter",
            "eggplant",
            "buckwheat",
            "butternut",
            "water chestnut",
            "rice flour",
            "corn flour",
            "coconut flour",
            "chickpea flour",
            "oat flour",
            "tapioca flour",
            "potato flour",
            "cassava flour",
            "crab apple",
            "crabapple",
            "tiger nut",
        ],
    ),
    (
        PEANUTS,
        &["peanut butter", "peanut", "groundnut", "arachis oil"],
    ),
    (
        TREE_NUTS,
        &[
            "almond milk",
            "almond butter",
            "almond flour",
            "cashew milk",
            "almond",
            "cashew",
            "walnut",
            "pecan",
            "pistachio",
            "hazelnut",
            "filbert",
            "macadamia",
            "brazil nut",
            "pine nut",
            "chestnut",
            "praline",
            "marzipan",
            "nutella",
            "mixed nuts",
            "nut butter",
            "nut milk",
            "nuts",
        ],
    ),
    (SOYBEANS, &["soy milk", "soya", "soy", "tofu", "edamame", "tempeh", "miso"]),
    (SOY_AND_WHEAT, &["soy sauce", "shoyu"]),
    (
        SHELLFISH,
        &[
            "shellfish",
            "shrimp",
            "prawn",
            "crab",
            "lobster",
            "crayfish",
            "crawfish",
            "langoustine",
            "krill",
        ],
    ),
    (
        FISH,
        &[
            "fish sauce",
            "fish",
            "catfish",
            "swordfish",
            "monkfish",
            "salmon",
            "tuna",
            "cod",
            "halibut",
            "tilapia",
            "trout",
            "sardine",
            "anchov",
            "mackerel",
            "haddock",
            "pollock",
            "snapper",
            "sea bass",
            "herring",
            "mahi",
        ],
    ),
    (
        MILK,
        &[
            "milk",
            "buttermilk",
            "butter",
            "cream",
            "cheese",
            "cheddar",
            "mozzarella",
            "parmesan",
            "ricotta",
            "feta",
            "brie",
            "whey",
            "casein",
            "lactose",
            "yogurt",
            "yoghurt",
            "kefir",
            "ghee",
            "custard",
            "half and half",
            "creme fraiche",
            "mascarpone",
            "gruyere",
            "gruyère",
            "gouda",
            "provolone",
            "parmigiano",
            "pecorino",
            "paneer",
            "halloumi",
            "gorgonzola",
            "camembert",
            "emmental",
            "manchego",
            "asiago",
            "burrata",
            "queso",
            "monterey jack",
        ],
    ),
    (
        EGGS,
        &["egg", "mayonnaise", "mayo", "meringue", "albumin", "aioli"],
    ),
    (
        WHEAT,
        &[
            "wheat",
            "flour",
            "semolina",
            "durum",
            "spelt",
            "farro",
            "einkorn",
            "couscous",
            "bulgur",
            "seitan",
            "bread",
            "pasta",
            "spaghetti",
            "panko",
            "tortilla",
        ],
    ),
    (SESAME, &["sesame", "tahini"]),
];

/// Flattened lexicon, longest phrase first
static LEXICON: LazyLock<Vec<LexiconEntry>> = LazyLock::new(|| {
    let mut entries: Vec<LexiconEntry> = GROUPS
        .iter()
        .flat_map(|&(allergens, phrases)| {
            phrases
                .iter()
                .map(move |&phrase| LexiconEntry { phrase, allergens })
        })
        .collect();
    entries.sort_by(|a, b| {
        b.phrase
            .len()
            .cmp(&a.phrase.len())
            .then_with(|| a.phrase.cmp(b.phrase))
    });
    entries
});

fn starts_word(text: &str, index: usize) -> bool {
    !text[..index]
        .chars()
        .next_back()
        .is_some_and(char::is_alphanumeric)
}

/// Detect major allergens in free text
///
/// Case-insensitive. Returns the empty set when nothing matches.
#[must_use]
pub fn detect_allergens(text: &str) -> BTreeSet<Allergen> {
    let mut haystack = text.to_lowercase().replace('-', " ");
    let mut found = BTreeSet::new();

    for entry in LEXICON.iter() {
        let starts: Vec<usize> = haystack
            .match_indices(entry.phrase)
            .map(|(start, _)| start)
            .filter(|&start| starts_word(&haystack, start))
            .collect();
        if starts.is_empty() {
            continue;
        }
        let blank = " ".repeat(entry.phrase.len());
        for start in starts {
            haystack.replace_range(start..start + entry.phrase.len(), &blank);
        }
        found.extend(entry.allergens.iter().copied());
    }

    found
}

/// Detect allergens from a snapshot's display name and ingredient statement
#[must_use]
pub fn detect_for_snapshot(snapshot: &NutrientSnapshot) -> BTreeSet<Allergen> {
    match &snapshot.ingredient_text {
        Some(statement) => detect_allergens(&format!("{} {statement}", snapshot.display_name)),
        None => detect_allergens(&snapshot.display_name),
    }
}

/// Recipe-level allergen disclosure
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllergenStatement {
    /// Union of every line's effective allergen set
    pub contains: BTreeSet<Allergen>,
    /// Cross-contact allergens; never populated
    pub may_contain: BTreeSet<Allergen>,
}

impl AllergenStatement {
    /// Union of per-line allergen sets
    pub fn from_line_sets<'a, I>(sets: I) -> Self
    where
        I: IntoIterator<Item = &'a BTreeSet<Allergen>>,
    {
        Self {
            contains: sets.into_iter().flatten().copied().collect(),
            may_contain: BTreeSet::new(),
        }
    }

    /// "Contains: Milk, Wheat." in statement order, or `None` when empty
    #[must_use]
    pub fn statement_text(&self) -> Option<String> {
        if self.contains.is_empty() {
            return None;
        }
        let names: Vec<&str> = self.contains.iter().map(Allergen::display_name).collect();
        Some(format!("Contains: {}.", names.join(", ")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lexicon_is_longest_first() {
        let lengths: Vec<usize> = LEXICON.iter().map(|e| e.phrase.len()).collect();
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_neutral_phrases_consume_text() {
        assert!(detect_allergens("Roasted eggplant").is_empty());
        assert!(detect_allergens("Coconut milk, light").is_empty());
        assert!(detect_allergens("Butternut squash").is_empty());
    }

    #[test]
    fn test_word_start_only() {
        assert!(detect_allergens("Fortunate cookies").is_empty());
        assert_eq!(
            detect_allergens("Canned tuna"),
            BTreeSet::from([Allergen::Fish])
        );
    }

    #[test]
    fn test_statement_text_order() {
        let statement = AllergenStatement::from_line_sets([
            &BTreeSet::from([Allergen::Wheat]),
            &BTreeSet::from([Allergen::Milk, Allergen::Wheat]),
        ]);
        assert_eq!(
            statement.statement_text().as_deref(),
            Some("Contains: Milk, Wheat.")
        );
        assert!(AllergenStatement::default().statement_text().is_none());
    }
}
