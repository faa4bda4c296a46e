// ABOUTME: Label geometry constants shared by layout and the physical format presets
// ABOUTME: Base layout width, default resolutions, and watermark defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

/// Width of the layout coordinate space; every size scales by `target_width / BASE_WIDTH`
pub const BASE_WIDTH: f64 = 200.0;

/// Screen rendering resolution (CSS pixels per inch)
pub const SCREEN_DPI: f64 = 96.0;

/// Print rendering resolution
pub const PRINT_DPI: f64 = 300.0;

/// Default preview watermark text
pub const WATERMARK_TEXT: &str = "PREVIEW";

/// Default watermark fill opacity
pub const WATERMARK_OPACITY: f64 = 0.15;

/// Default watermark rotation in degrees (negative = counter-clockwise)
pub const WATERMARK_ANGLE_DEG: f64 = -35.0;

/// Default font stack for label text
pub const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

/// %DV below which micronutrients may be displayed as 0%
pub const MICRONUTRIENT_ZERO_DV_BELOW: f64 = 2.0;
