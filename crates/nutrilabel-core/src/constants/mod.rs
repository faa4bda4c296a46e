// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Regulatory reference values and label geometry grouped by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Constants module
//!
//! Regulatory numbers live here rather than in configuration: they are fixed by
//! the 2016/2020 FDA labeling rule and must not drift per deployment.

/// 2020 FDA daily reference values for %DV
pub mod daily_values;
/// Physical label formats and layout base geometry
pub mod label;

/// Service identifiers used in structured logs
pub mod service_names {
    /// Library and CLI service name
    pub const NUTRILABEL: &str = "nutrilabel";
}
