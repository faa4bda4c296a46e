// ABOUTME: Nutrition-facts panel rendering for a physical preset and resolution
// ABOUTME: Sizes the canvas from content height, emits the layout, and overlays the preview watermark
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use super::document::{Anchor, LabelDocument, Primitive, TextPrimitive, Weight};
use super::format::{LabelFormat, Resolution};
use super::layout::{layout, sections_for, Canvas};
use crate::config::{LabelConfig, WatermarkConfig};
use crate::nutrition::aggregator::ComputedNutritionResult;
use crate::recipes::{Recipe, ServingSize};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Manufacturer, packer or distributor printed under the panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BusinessIdentity {
    /// Business name
    pub name: String,
    /// Street, city, state and so on
    #[serde(default)]
    pub address_lines: Vec<String>,
}

/// Non-nutrient text printed on the label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelContent {
    /// Serving size line
    pub serving_size: ServingSize,
    /// Replaces the default "N servings per container"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub servings_per_container: Option<String>,
    /// Business identity block
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business: Option<BusinessIdentity>,
    /// Net quantity statement, e.g. "Net Wt. 12 oz (340g)"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_weight: Option<String>,
}

impl LabelContent {
    /// Content with only a serving size
    #[must_use]
    pub const fn new(serving_size: ServingSize) -> Self {
        Self {
            serving_size,
            servings_per_container: None,
            business: None,
            net_weight: None,
        }
    }

    /// Content for a recipe's serving size
    #[must_use]
    pub fn for_recipe(recipe: &Recipe) -> Self {
        Self::new(recipe.serving_size.clone())
    }

    /// Override the servings-per-container line
    #[must_use]
    pub fn with_servings_text(mut self, text: impl Into<String>) -> Self {
        self.servings_per_container = Some(text.into());
        self
    }

    /// Add the business identity block
    #[must_use]
    pub fn with_business(mut self, name: impl Into<String>, address_lines: Vec<String>) -> Self {
        self.business = Some(BusinessIdentity {
            name: name.into(),
            address_lines,
        });
        self
    }

    /// Add the net weight line
    #[must_use]
    pub fn with_net_weight(mut self, net_weight: impl Into<String>) -> Self {
        self.net_weight = Some(net_weight.into());
        self
    }
}

/// Target preset, resolution and preview flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    /// Physical preset
    pub format: LabelFormat,
    /// Screen or print pixels
    pub resolution: Resolution,
    /// Overlay the preview watermark
    pub watermark: bool,
}

impl RenderOptions {
    /// Options for a preset at a resolution, without watermark
    #[must_use]
    pub const fn new(format: LabelFormat, resolution: Resolution) -> Self {
        Self {
            format,
            resolution,
            watermark: false,
        }
    }

    /// Enable the preview watermark
    #[must_use]
    pub const fn with_watermark(mut self) -> Self {
        self.watermark = true;
        self
    }
}

/// Rendered panel handed to the export collaborator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedLabel {
    /// Standalone SVG markup
    pub svg: String,
    /// Vector description the markup was written from
    pub document: LabelDocument,
    /// Canvas width in output pixels
    pub width: f64,
    /// Canvas height in output pixels
    pub height: f64,
    /// Height the content needs, in output pixels
    pub content_height: f64,
    /// Layout-unit to pixel multiplier
    pub scale: f64,
    /// Preset rendered
    pub format: LabelFormat,
    /// Resolution rendered
    pub resolution: Resolution,
}

/// Rendered label together with the numbers it shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelExport {
    /// The panel
    pub label: RenderedLabel,
    /// Computed facts behind it
    pub nutrition: ComputedNutritionResult,
}

/// Render with the global configuration
#[must_use]
pub fn render_label(
    result: &ComputedNutritionResult,
    content: &LabelContent,
    options: RenderOptions,
) -> RenderedLabel {
    render_label_with(result, content, options, LabelConfig::global())
}

/// Render with an explicit configuration
///
/// Canvas height is the larger of the preset's minimum height and the
/// content height. The watermark is added after layout and never changes
/// the height.
#[must_use]
pub fn render_label_with(
    result: &ComputedNutritionResult,
    content: &LabelContent,
    options: RenderOptions,
    config: &LabelConfig<true>,
) -> RenderedLabel {
    let rendering = &config.rendering;
    let geometry = options.format.geometry(options.resolution, rendering);
    let sections = sections_for(result, content, config.computation.micronutrient_zero_dv_below);
    let placed = layout(sections, rendering.base_width);

    let content_height = placed.content_height * geometry.scale;
    let height = geometry.min_height.max(content_height);

    let mut canvas = Canvas::new(geometry.scale, rendering.base_width);
    canvas.push(Primitive::Rect {
        x: geometry.scale,
        y: geometry.scale,
        width: geometry.width - 2.0 * geometry.scale,
        height: height - 2.0 * geometry.scale,
        stroke: geometry.scale,
    });
    placed.emit(&mut canvas);
    if options.watermark {
        canvas.push(watermark(&rendering.watermark, geometry.width, height));
    }

    debug!(
        format = %options.format,
        resolution = %options.resolution,
        width = geometry.width,
        height,
        content_height,
        scale = geometry.scale,
        sections = placed.sections.len(),
        "Rendered nutrition label"
    );

    let document = LabelDocument {
        width: geometry.width,
        height,
        font_family: rendering.font_family.clone(),
        primitives: canvas.into_primitives(),
    };
    RenderedLabel {
        svg: document.to_svg(),
        document,
        width: geometry.width,
        height,
        content_height,
        scale: geometry.scale,
        format: options.format,
        resolution: options.resolution,
    }
}

/// Render and bundle with the computed result
#[must_use]
pub fn export_label(
    result: ComputedNutritionResult,
    content: &LabelContent,
    options: RenderOptions,
) -> LabelExport {
    LabelExport {
        label: render_label(&result, content, options),
        nutrition: result,
    }
}

fn watermark(style: &WatermarkConfig, width: f64, height: f64) -> Primitive {
    let chars = style.text.chars().count().max(1) as f64;
    Primitive::Text(TextPrimitive {
        x: width / 2.0,
        y: height / 2.0,
        text: style.text.clone(),
        size: (width * 1.1 / (chars * 0.6)).min(height / 3.0),
        weight: Weight::Bold,
        anchor: Anchor::Middle,
        opacity: style.opacity,
        rotate: style.angle_deg,
    })
}
