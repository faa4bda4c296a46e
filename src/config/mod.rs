// ABOUTME: Label engine configuration with environment overrides and validation
// ABOUTME: Orchestrates rendering and computation settings behind a validated global singleton
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

//! Label Engine Configuration
//!
//! Provides type-safe, validated configuration for the computation and
//! rendering stages. Rounding thresholds and daily values live in
//! `nutrilabel_core::constants` and are not configurable.
//!
//! # Module Structure
//!
//! - `rendering` - Layout base width, DPI per resolution, font, watermark
//! - `computation` - Default rounding behavior and %DV display threshold
//! - `error` - Configuration error types

/// Rounding defaults and %DV display threshold
pub mod computation;
/// Configuration error types
pub mod error;
/// Layout width, resolutions, font and watermark
pub mod rendering;

pub use computation::ComputationConfig;
pub use error::ConfigError;
pub use rendering::{RenderingConfig, WatermarkConfig};

use serde::{Deserialize, Serialize};
use std::env;
use std::marker::PhantomData;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static LABEL_CONFIG: OnceLock<LabelConfig<true>> = OnceLock::new();

/// Main label engine configuration container
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelConfig<const VALIDATED: bool = false> {
    /// Rendering settings
    pub rendering: RenderingConfig,
    /// Computation settings
    pub computation: ComputationConfig,
    #[serde(skip)]
    _phantom: PhantomData<()>,
}

impl LabelConfig<false> {
    /// Assemble an unvalidated configuration from its sections
    #[must_use]
    pub const fn new(rendering: RenderingConfig, computation: ComputationConfig) -> Self {
        Self {
            rendering,
            computation,
            _phantom: PhantomData,
        }
    }

    /// Validate and promote to a usable configuration
    ///
    /// # Errors
    ///
    /// Returns an error if any setting is out of range
    pub fn validate(self) -> Result<LabelConfig<true>, ConfigError> {
        validate_sections(&self.rendering, &self.computation)?;
        Ok(LabelConfig {
            rendering: self.rendering,
            computation: self.computation,
            _phantom: PhantomData,
        })
    }
}

impl LabelConfig<true> {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        LABEL_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load label config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        validate_sections(&config.rendering, &config.computation)?;
        Ok(config)
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        apply_env_value(env_var_name, env::var(env_var_name), target)
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var("NUTRILABEL_SCREEN_DPI", &mut self.rendering.screen_dpi)?;
        Self::apply_env_var("NUTRILABEL_PRINT_DPI", &mut self.rendering.print_dpi)?;
        Self::apply_env_var("NUTRILABEL_FONT_FAMILY", &mut self.rendering.font_family)?;
        Self::apply_env_var(
            "NUTRILABEL_WATERMARK_TEXT",
            &mut self.rendering.watermark.text,
        )?;
        Self::apply_env_var(
            "NUTRILABEL_WATERMARK_OPACITY",
            &mut self.rendering.watermark.opacity,
        )?;
        Self::apply_env_var(
            "NUTRILABEL_APPLY_ROUNDING",
            &mut self.computation.apply_rounding,
        )?;
        Ok(self)
    }
}

impl Default for LabelConfig<true> {
    fn default() -> Self {
        Self {
            rendering: RenderingConfig::default(),
            computation: ComputationConfig::default(),
            _phantom: PhantomData,
        }
    }
}

/// Absent variables keep the default; unreadable ones are errors
fn apply_env_value<T: FromStr>(
    env_var_name: &str,
    value: Result<String, env::VarError>,
    target: &mut T,
) -> Result<(), ConfigError> {
    match value {
        Ok(val) => {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
            Ok(())
        }
        Err(env::VarError::NotPresent) => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn is_positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

fn validate_sections(
    rendering: &RenderingConfig,
    computation: &ComputationConfig,
) -> Result<(), ConfigError> {
    if !is_positive(rendering.base_width) {
        return Err(ConfigError::ValueOutOfRange("base_width must be positive"));
    }
    if !(is_positive(rendering.screen_dpi) && is_positive(rendering.print_dpi)) {
        return Err(ConfigError::ValueOutOfRange("DPI values must be positive"));
    }
    if rendering.screen_dpi > rendering.print_dpi {
        return Err(ConfigError::InvalidRange(
            "screen_dpi must be <= print_dpi",
        ));
    }
    if !(rendering.watermark.opacity > 0.0 && rendering.watermark.opacity <= 1.0) {
        return Err(ConfigError::ValueOutOfRange(
            "watermark opacity must be in (0.0, 1.0]",
        ));
    }
    if !(0.0..=100.0).contains(&computation.micronutrient_zero_dv_below) {
        return Err(ConfigError::ValueOutOfRange(
            "micronutrient_zero_dv_below must be between 0 and 100",
        ));
    }
    Ok(())
}
