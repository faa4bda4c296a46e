// ABOUTME: Core types and constants for the nutrilabel nutrition-facts engine
// ABOUTME: Foundation crate with error handling, FDA reference constants, and data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

#![deny(unsafe_code)]

//! # Nutrilabel Core
//!
//! Foundation crate providing shared types and constants for the nutrilabel
//! engine. It is designed to change infrequently, so the engine crate gets
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode` and `AppResult`
//! - **constants**: FDA daily reference values and label geometry
//! - **models**: Nutrient profiles (tri-state values) and allergens

/// Unified error handling system with standard error codes
pub mod errors;

/// Regulatory and layout constants organized by domain
pub mod constants;

/// Core data models (`NutrientProfile`, `NutrientSnapshot`, `Allergen`)
pub mod models;
