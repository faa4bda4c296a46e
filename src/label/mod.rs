// ABOUTME: Nutrition-facts label layout and vector rendering
// ABOUTME: Format presets, section layout, SVG document model and the renderer entry points
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! # Label Rendering
//!
//! Turns a [`ComputedNutritionResult`](crate::nutrition::ComputedNutritionResult)
//! into a self-contained vector document sized for a physical preset. The
//! renderer does no rasterization and no file I/O.

/// Vector document model and SVG output
pub mod document;
/// Physical presets and resolutions
pub mod format;
/// Section layout
pub mod layout;
/// Renderer entry points
pub mod render;

pub use document::{LabelDocument, Primitive};
pub use format::{CanvasGeometry, LabelFormat, Resolution};
pub use layout::{format_amount, Section};
pub use render::{
    export_label, render_label, render_label_with, BusinessIdentity, LabelContent, LabelExport,
    RenderOptions, RenderedLabel,
};
