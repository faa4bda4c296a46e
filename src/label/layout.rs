// ABOUTME: Single-pass nutrition-facts layout folded over an ordered list of section descriptors
// ABOUTME: The same descriptor list yields the content height and the emitted primitives
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Label Layout
//!
//! Coordinates are in layout units: the panel is `base_width` units wide
//! (200 by default) and every unit is multiplied by the canvas scale when a
//! primitive is emitted. Heights never depend on the scale, so every preset
//! and resolution is a similar rendering of the same layout.
//!
//! A [`Section`] knows its height and how to draw itself at a given top.
//! [`layout`] folds the list into placed sections with a running cursor;
//! [`Layout::emit`] replays the same list.

use super::document::{Anchor, Primitive, TextPrimitive, Weight};
use super::render::LabelContent;
use crate::nutrition::aggregator::ComputedNutritionResult;
use crate::nutrition::daily_values::display_percent;
use nutrilabel_core::models::NutrientKey;
use std::mem;

/// Left and right margin
pub const MARGIN: f64 = 4.0;
const TOP_PADDING: f64 = 4.0;
const BOTTOM_PADDING: f64 = 4.0;
/// Average glyph advance as a fraction of the font size
const CHAR_WIDTH_RATIO: f64 = 0.5;
const SUB_ROW_INDENT: f64 = 8.0;
const SERVING_SIZE_CAPTION: &str = "Serving size";
/// Space between the serving-size caption and its value
const CAPTION_GAP: f64 = 4.0;
const ADDED_SUGARS_INDENT: f64 = 16.0;

const FOOTNOTE: &str = "* The % Daily Value (DV) tells you how much a nutrient in a serving of \
food contributes to a daily diet. 2,000 calories a day is used for general nutrition advice.";

/// Divider rule weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleWeight {
    /// Below the serving size and after the macronutrients
    Thick,
    /// Below calories and after the micronutrients
    Medium,
    /// Between rows
    Thin,
}

impl RuleWeight {
    /// Stroke thickness in layout units
    #[must_use]
    pub const fn thickness(self) -> f64 {
        match self {
            Self::Thick => 7.0,
            Self::Medium => 4.0,
            Self::Thin => 0.5,
        }
    }

    const fn height(self) -> f64 {
        match self {
            Self::Thick => 8.0,
            Self::Medium => 5.0,
            Self::Thin => 2.0,
        }
    }
}

/// One nutrient line with its %DV column
#[derive(Debug, Clone, PartialEq)]
pub struct NutrientRow {
    /// Nutrient name
    pub label: String,
    /// Declared amount with unit, e.g. "<5mg" or "--"
    pub amount: String,
    /// Percent shown in the right column
    pub percent: Option<u32>,
    /// Left indent in layout units
    pub indent: f64,
    /// Bold nutrient name
    pub bold: bool,
}

/// Layout section descriptor
#[derive(Debug, Clone, PartialEq)]
pub enum Section {
    /// "Nutrition Facts"
    Title,
    /// "8 servings per container"
    ServingsPerContainer(String),
    /// "Serving size" with its value right aligned
    ServingSize(String),
    /// Divider rule
    Rule(RuleWeight),
    /// "Amount per serving"
    AmountPerServing,
    /// Large calories line
    Calories(String),
    /// "% Daily Value*" header
    DailyValueHeader,
    /// Nutrient line
    Nutrient(NutrientRow),
    /// Standard %DV footnote
    Footnote,
    /// "Contains: ..." statement
    Allergens(String),
    /// Manufacturer or distributor
    Business {
        /// Business name
        name: String,
        /// Address lines
        address_lines: Vec<String>,
    },
    /// Net quantity statement
    NetWeight(String),
}

impl Section {
    /// Height in layout units for a panel `width` units wide
    #[must_use]
    pub fn height(&self, width: f64) -> f64 {
        let inner = width - 2.0 * MARGIN;
        match self {
            Self::Title => 20.0,
            Self::Nutrient(_) => 10.0,
            Self::ServingsPerContainer(text) => 10.0 + extra_lines(text, 8.0, inner) * 10.0,
            Self::ServingSize(text) => {
                12.0 + extra_lines(text, 9.0, serving_value_width(inner)) * 10.0
            }
            Self::Rule(weight) => weight.height(),
            Self::AmountPerServing | Self::DailyValueHeader => 9.0,
            Self::Calories(_) => 22.0,
            Self::Footnote => 2.0 + line_count(FOOTNOTE, 6.0, inner) * 7.5,
            Self::Allergens(text) => 4.0 + line_count(text, 7.0, inner) * 9.0,
            Self::Business {
                name,
                address_lines,
            } => {
                let address_height: f64 = address_lines
                    .iter()
                    .map(|line| line_count(line, 6.5, inner) * 8.0)
                    .sum();
                12.0 + extra_lines(name, 7.0, inner) * 9.0 + address_height
            }
            Self::NetWeight(text) => 11.0 + extra_lines(text, 8.0, inner) * 10.0,
        }
    }

    /// Draw the section with its top edge at `top`
    pub fn emit(&self, top: f64, canvas: &mut Canvas) {
        let right = canvas.right();
        let inner = canvas.base_width - 2.0 * MARGIN;
        match self {
            Self::Title => canvas.text(MARGIN, top + 17.0, 18.0, "Nutrition Facts", Weight::Bold, Anchor::Start),
            Self::ServingsPerContainer(text) => {
                for (i, line) in wrapped(text, 8.0, inner).iter().enumerate() {
                    let baseline = top + 8.0 + count(i) * 10.0;
                    canvas.text(MARGIN, baseline, 8.0, line, Weight::Normal, Anchor::Start);
                }
            }
            Self::ServingSize(text) => {
                canvas.text(MARGIN, top + 9.5, 9.0, SERVING_SIZE_CAPTION, Weight::Bold, Anchor::Start);
                for (i, line) in wrapped(text, 9.0, serving_value_width(inner)).iter().enumerate() {
                    let baseline = top + 9.5 + count(i) * 10.0;
                    canvas.text(right, baseline, 9.0, line, Weight::Bold, Anchor::End);
                }
            }
            Self::Rule(weight) => canvas.rule(top + weight.height() / 2.0, weight.thickness()),
            Self::AmountPerServing => {
                canvas.text(MARGIN, top + 7.0, 7.0, "Amount per serving", Weight::Bold, Anchor::Start);
            }
            Self::Calories(value) => {
                canvas.text(MARGIN, top + 18.0, 15.0, "Calories", Weight::Bold, Anchor::Start);
                canvas.text(right, top + 19.0, 20.0, value, Weight::Bold, Anchor::End);
            }
            Self::DailyValueHeader => {
                canvas.text(right, top + 7.0, 7.0, "% Daily Value*", Weight::Bold, Anchor::End);
            }
            Self::Nutrient(row) => emit_row(row, top, canvas),
            Self::Footnote => {
                for (i, line) in wrap_text(FOOTNOTE, 6.0, inner).iter().enumerate() {
                    let baseline = top + 6.5 + count(i) * 7.5;
                    canvas.text(MARGIN, baseline, 6.0, line, Weight::Normal, Anchor::Start);
                }
            }
            Self::Allergens(text) => {
                for (i, line) in wrap_text(text, 7.0, inner).iter().enumerate() {
                    let baseline = top + 10.0 + count(i) * 9.0;
                    canvas.text(MARGIN, baseline, 7.0, line, Weight::Bold, Anchor::Start);
                }
            }
            Self::Business {
                name,
                address_lines,
            } => {
                let name_lines = wrapped(name, 7.0, inner);
                for (i, line) in name_lines.iter().enumerate() {
                    let baseline = top + 10.0 + count(i) * 9.0;
                    canvas.text(MARGIN, baseline, 7.0, line, Weight::Bold, Anchor::Start);
                }
                let first = top + 18.0 + count(name_lines.len() - 1) * 9.0;
                let address = address_lines
                    .iter()
                    .flat_map(|line| wrap_text(line, 6.5, inner));
                for (i, line) in address.enumerate() {
                    let baseline = first + count(i) * 8.0;
                    canvas.text(MARGIN, baseline, 6.5, &line, Weight::Normal, Anchor::Start);
                }
            }
            Self::NetWeight(text) => {
                for (i, line) in wrapped(text, 8.0, inner).iter().enumerate() {
                    let baseline = top + 9.5 + count(i) * 10.0;
                    canvas.text(MARGIN, baseline, 8.0, line, Weight::Bold, Anchor::Start);
                }
            }
        }
    }
}

fn emit_row(row: &NutrientRow, top: f64, canvas: &mut Canvas) {
    let baseline = top + 8.0;
    let x = MARGIN + row.indent;
    if row.label.is_empty() {
        canvas.text(x, baseline, 8.0, &row.amount, Weight::Normal, Anchor::Start);
    } else {
        let weight = if row.bold { Weight::Bold } else { Weight::Normal };
        canvas.text(x, baseline, 8.0, &row.label, weight, Anchor::Start);
        let amount_x = x + text_width(&row.label, 8.0) + 3.0;
        canvas.text(amount_x, baseline, 8.0, &row.amount, Weight::Normal, Anchor::Start);
    }
    if let Some(percent) = row.percent {
        let right = canvas.right();
        canvas.text(right, baseline, 8.0, &format!("{percent}%"), Weight::Bold, Anchor::End);
    }
}

/// A section with its resolved top edge
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedSection {
    /// Cursor position when the section was placed
    pub top: f64,
    /// The section
    pub section: Section,
}

/// Result of the layout pass, in layout units
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// Sections in paint order
    pub sections: Vec<PlacedSection>,
    /// Cursor after the last section plus bottom padding
    pub content_height: f64,
}

impl Layout {
    /// Emit every placed section
    pub fn emit(&self, canvas: &mut Canvas) {
        for placed in &self.sections {
            placed.section.emit(placed.top, canvas);
        }
    }
}

/// Place sections top to bottom with a running cursor
#[must_use]
pub fn layout(sections: Vec<Section>, base_width: f64) -> Layout {
    let (placed, cursor) = sections.into_iter().fold(
        (Vec::new(), TOP_PADDING),
        |(mut placed, cursor), section| {
            let height = section.height(base_width);
            placed.push(PlacedSection {
                top: cursor,
                section,
            });
            (placed, cursor + height)
        },
    );
    Layout {
        sections: placed,
        content_height: cursor + BOTTOM_PADDING,
    }
}

/// Primitive sink that converts layout units to canvas units
#[derive(Debug, Clone)]
pub struct Canvas {
    scale: f64,
    base_width: f64,
    primitives: Vec<Primitive>,
}

impl Canvas {
    /// Empty canvas
    #[must_use]
    pub const fn new(scale: f64, base_width: f64) -> Self {
        Self {
            scale,
            base_width,
            primitives: Vec::new(),
        }
    }

    /// Right text edge in layout units
    #[must_use]
    pub fn right(&self) -> f64 {
        self.base_width - MARGIN
    }

    /// Append a primitive already in canvas units
    pub fn push(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Finished primitives
    #[must_use]
    pub fn into_primitives(self) -> Vec<Primitive> {
        self.primitives
    }

    fn text(&mut self, x: f64, baseline: f64, size: f64, text: &str, weight: Weight, anchor: Anchor) {
        self.primitives.push(Primitive::Text(TextPrimitive {
            x: x * self.scale,
            y: baseline * self.scale,
            text: text.to_owned(),
            size: size * self.scale,
            weight,
            anchor,
            opacity: 1.0,
            rotate: 0.0,
        }));
    }

    fn rule(&mut self, center: f64, thickness: f64) {
        self.primitives.push(Primitive::Line {
            x1: MARGIN * self.scale,
            y1: center * self.scale,
            x2: self.right() * self.scale,
            y2: center * self.scale,
            width: thickness * self.scale,
        });
    }
}

fn count(n: usize) -> f64 {
    n as f64
}

fn text_width(text: &str, size: f64) -> f64 {
    count(text.chars().count()) * size * CHAR_WIDTH_RATIO
}

fn line_count(text: &str, size: f64, width: f64) -> f64 {
    count(wrap_text(text, size, width).len())
}

/// Wrapped lines of a single-line field; never empty
fn wrapped(text: &str, size: f64, width: f64) -> Vec<String> {
    let lines = wrap_text(text, size, width);
    if lines.is_empty() {
        vec![text.to_owned()]
    } else {
        lines
    }
}

fn extra_lines(text: &str, size: f64, width: f64) -> f64 {
    count(wrapped(text, size, width).len() - 1)
}

/// Width left for the serving-size value beside its caption
fn serving_value_width(inner: f64) -> f64 {
    inner - text_width(SERVING_SIZE_CAPTION, 9.0) - CAPTION_GAP
}

/// Greedy word wrap using an average glyph width
#[must_use]
pub fn wrap_text(text: &str, size: f64, width: f64) -> Vec<String> {
    let max_chars = ((width / (size * CHAR_WIDTH_RATIO)).floor() as usize).max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Label amount: whole numbers without decimals, otherwise one decimal
#[must_use]
pub fn format_amount(value: f64) -> String {
    let value = if value.is_finite() { value.max(0.0) } else { 0.0 };
    let tenths = (value * 10.0).round() / 10.0;
    if (tenths - tenths.round()).abs() < 1e-9 {
        format!("{tenths:.0}")
    } else {
        format!("{tenths:.1}")
    }
}

fn amount_text(result: &ComputedNutritionResult, key: NutrientKey) -> String {
    result
        .per_serving_rounded
        .amount(key)
        .map_or_else(
            || "--".to_owned(),
            |value| {
                let qualifier = if result.less_than_fields.contains(&key) { "<" } else { "" };
                format!("{qualifier}{}{}", format_amount(value), key.unit().symbol())
            },
        )
}

fn percent_for(result: &ComputedNutritionResult, key: NutrientKey, zero_below: f64) -> Option<u32> {
    if key == NutrientKey::Protein {
        return None;
    }
    result
        .percent_daily_values
        .get(&key)
        .map(|&percent| display_percent(key, percent, zero_below))
}

fn nutrient_row(
    result: &ComputedNutritionResult,
    key: NutrientKey,
    bold: bool,
    indent: f64,
    zero_below: f64,
) -> NutrientRow {
    NutrientRow {
        label: key.label().to_owned(),
        amount: amount_text(result, key),
        percent: percent_for(result, key, zero_below),
        indent,
        bold,
    }
}

/// Macronutrient rows: (key, bold, indent)
const MACRO_ROWS: [(NutrientKey, bool, f64); 9] = [
    (NutrientKey::TotalFat, true, 0.0),
    (NutrientKey::SaturatedFat, false, SUB_ROW_INDENT),
    (NutrientKey::TransFat, false, SUB_ROW_INDENT),
    (NutrientKey::Cholesterol, true, 0.0),
    (NutrientKey::Sodium, true, 0.0),
    (NutrientKey::TotalCarbohydrate, true, 0.0),
    (NutrientKey::DietaryFiber, false, SUB_ROW_INDENT),
    (NutrientKey::TotalSugars, false, SUB_ROW_INDENT),
    (NutrientKey::Protein, true, 0.0),
];

fn push_row(sections: &mut Vec<Section>, row: NutrientRow) {
    sections.push(Section::Nutrient(row));
    sections.push(Section::Rule(RuleWeight::Thin));
}

/// Ordered section list for a computed result
///
/// Mandatory sections are always present; unknown mandatory amounts show as
/// "--". Added sugars, each micronutrient, the allergen statement, business
/// identity and net weight contribute a section only when their data exists.
#[must_use]
pub fn sections_for(
    result: &ComputedNutritionResult,
    content: &LabelContent,
    micronutrient_zero_dv_below: f64,
) -> Vec<Section> {
    let zero_below = micronutrient_zero_dv_below;
    let servings_text = content.servings_per_container.clone().unwrap_or_else(|| {
        let n = result.servings_per_batch;
        if n == 1 {
            "1 serving per container".to_owned()
        } else {
            format!("{n} servings per container")
        }
    });
    let calories = result
        .per_serving_rounded
        .amount(NutrientKey::Calories)
        .map_or_else(|| "--".to_owned(), format_amount);

    let mut sections = vec![
        Section::Title,
        Section::Rule(RuleWeight::Thin),
        Section::ServingsPerContainer(servings_text),
        Section::ServingSize(content.serving_size.display()),
        Section::Rule(RuleWeight::Thick),
        Section::AmountPerServing,
        Section::Calories(calories),
        Section::Rule(RuleWeight::Medium),
        Section::DailyValueHeader,
        Section::Rule(RuleWeight::Thin),
    ];

    for (key, bold, indent) in MACRO_ROWS {
        if key == NutrientKey::Protein {
            if let Some(added) = result.per_serving_rounded.amount(NutrientKey::AddedSugars) {
                let qualifier = if result.less_than_fields.contains(&NutrientKey::AddedSugars) {
                    "<"
                } else {
                    ""
                };
                push_row(
                    &mut sections,
                    NutrientRow {
                        label: String::new(),
                        amount: format!("Includes {qualifier}{}g Added Sugars", format_amount(added)),
                        percent: percent_for(result, NutrientKey::AddedSugars, zero_below),
                        indent: ADDED_SUGARS_INDENT,
                        bold: false,
                    },
                );
            }
            sections.push(Section::Nutrient(nutrient_row(result, key, bold, indent, zero_below)));
            sections.push(Section::Rule(RuleWeight::Thick));
        } else {
            push_row(&mut sections, nutrient_row(result, key, bold, indent, zero_below));
        }
    }

    let micronutrients: Vec<NutrientRow> = NutrientKey::MICRONUTRIENTS
        .into_iter()
        .filter(|&key| result.per_serving_rounded.get(key).is_known())
        .map(|key| nutrient_row(result, key, false, 0.0, zero_below))
        .collect();
    if !micronutrients.is_empty() {
        let last = micronutrients.len() - 1;
        for (i, row) in micronutrients.into_iter().enumerate() {
            sections.push(Section::Nutrient(row));
            sections.push(Section::Rule(if i == last {
                RuleWeight::Medium
            } else {
                RuleWeight::Thin
            }));
        }
    }

    sections.push(Section::Footnote);

    if let Some(statement) = result.allergen_statement.statement_text() {
        sections.push(Section::Allergens(statement));
    }
    if let Some(business) = &content.business {
        sections.push(Section::Business {
            name: business.name.clone(),
            address_lines: business.address_lines.clone(),
        });
    }
    if let Some(net_weight) = &content.net_weight {
        sections.push(Section::NetWeight(net_weight.clone()));
    }
    sections
}
