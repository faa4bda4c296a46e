// ABOUTME: Physical label format presets and output resolutions
// ABOUTME: Derives canvas width, minimum height and the uniform layout scale factor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use crate::config::RenderingConfig;
use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Physical label size
///
/// A preset fixes the canvas width and a minimum height; content may make the
/// canvas taller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LabelFormat {
    /// 2 x 4 inch shipping-style label
    #[serde(rename = "2x4")]
    TwoByFour,
    /// 3 x 4 inch label
    #[serde(rename = "3x4")]
    ThreeByFour,
    /// 4 x 6 inch label
    #[default]
    #[serde(rename = "4x6")]
    FourBySix,
    /// US letter sheet
    #[serde(rename = "8.5x11")]
    Letter,
}

impl LabelFormat {
    /// Every preset, smallest first
    pub const ALL: [Self; 4] = [
        Self::TwoByFour,
        Self::ThreeByFour,
        Self::FourBySix,
        Self::Letter,
    ];

    /// Preset name as accepted by [`FromStr`]
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::TwoByFour => "2x4",
            Self::ThreeByFour => "3x4",
            Self::FourBySix => "4x6",
            Self::Letter => "8.5x11",
        }
    }

    /// Width in inches
    #[must_use]
    pub const fn width_in(&self) -> f64 {
        match self {
            Self::TwoByFour => 2.0,
            Self::ThreeByFour => 3.0,
            Self::FourBySix => 4.0,
            Self::Letter => 8.5,
        }
    }

    /// Nominal height in inches
    #[must_use]
    pub const fn height_in(&self) -> f64 {
        match self {
            Self::TwoByFour | Self::ThreeByFour => 4.0,
            Self::FourBySix => 6.0,
            Self::Letter => 11.0,
        }
    }

    /// Canvas geometry at a resolution
    #[must_use]
    pub fn geometry(&self, resolution: Resolution, config: &RenderingConfig) -> CanvasGeometry {
        let dpi = resolution.dpi(config);
        let width = self.width_in() * dpi;
        CanvasGeometry {
            width,
            min_height: self.height_in() * dpi,
            scale: width / config.base_width,
        }
    }
}

impl fmt::Display for LabelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LabelFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .to_lowercase()
            .replace(char::is_whitespace, "")
            .replace('×', "x")
            .replace("in", "");
        if normalized == "letter" {
            return Ok(Self::Letter);
        }
        Self::ALL
            .into_iter()
            .find(|format| format.name() == normalized)
            .ok_or_else(|| {
                AppError::invalid_input(format!(
                    "Unknown label format '{s}'; expected one of 2x4, 3x4, 4x6, 8.5x11"
                ))
            })
    }
}

/// Output resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Resolution {
    /// On-screen preview
    #[default]
    Screen,
    /// Print-ready output
    Print,
}

impl Resolution {
    /// Pixels per inch under `config`
    #[must_use]
    pub const fn dpi(&self, config: &RenderingConfig) -> f64 {
        match self {
            Self::Screen => config.screen_dpi,
            Self::Print => config.print_dpi,
        }
    }

    const fn name(self) -> &'static str {
        match self {
            Self::Screen => "screen",
            Self::Print => "print",
        }
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Resolution {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "screen" => Ok(Self::Screen),
            "print" => Ok(Self::Print),
            other => Err(AppError::invalid_input(format!(
                "Unknown resolution '{other}'; expected screen or print"
            ))),
        }
    }
}

/// Canvas size and scale for one preset at one resolution
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanvasGeometry {
    /// Canvas width in output pixels
    pub width: f64,
    /// Canvas never gets shorter than this
    pub min_height: f64,
    /// Multiplier applied to every layout unit
    pub scale: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_format_names() {
        assert_eq!("4x6".parse::<LabelFormat>().ok(), Some(LabelFormat::FourBySix));
        assert_eq!("8.5 x 11".parse::<LabelFormat>().ok(), Some(LabelFormat::Letter));
        assert_eq!("2x4in".parse::<LabelFormat>().ok(), Some(LabelFormat::TwoByFour));
        assert!("5x7".parse::<LabelFormat>().is_err());
    }

    #[test]
    fn test_scale_is_width_over_base() {
        let config = RenderingConfig::default();
        let geometry = LabelFormat::FourBySix.geometry(Resolution::Screen, &config);
        assert!((geometry.width - 384.0).abs() < 1e-9);
        assert!((geometry.min_height - 576.0).abs() < 1e-9);
        assert!((geometry.scale - 1.92).abs() < 1e-9);
    }
}
