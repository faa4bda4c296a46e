// ABOUTME: Rendering configuration for nutrition-facts panels
// ABOUTME: Base layout width, screen/print resolutions, font stack, and preview watermark styling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use nutrilabel_core::constants::label;
use serde::{Deserialize, Serialize};

/// Label rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Width of the layout coordinate space (units)
    pub base_width: f64,
    /// Pixels per inch for on-screen previews
    pub screen_dpi: f64,
    /// Pixels per inch for print output
    pub print_dpi: f64,
    /// Font stack written into the vector document
    pub font_family: String,
    /// Preview watermark styling
    pub watermark: WatermarkConfig,
}

/// Diagonal preview watermark styling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatermarkConfig {
    /// Text drawn across the panel
    pub text: String,
    /// Fill opacity (0.0-1.0]
    pub opacity: f64,
    /// Rotation in degrees
    pub angle_deg: f64,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            base_width: label::BASE_WIDTH,
            screen_dpi: label::SCREEN_DPI,
            print_dpi: label::PRINT_DPI,
            font_family: label::FONT_FAMILY.to_owned(),
            watermark: WatermarkConfig::default(),
        }
    }
}

impl Default for WatermarkConfig {
    fn default() -> Self {
        Self {
            text: label::WATERMARK_TEXT.to_owned(),
            opacity: label::WATERMARK_OPACITY,
            angle_deg: label::WATERMARK_ANGLE_DEG,
        }
    }
}
