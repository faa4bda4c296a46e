// ABOUTME: Resolution-independent vector description of a rendered label
// ABOUTME: Text, line and rectangle primitives with explicit coordinates and standalone SVG output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org

use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal text alignment relative to `x`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Anchor {
    /// Left aligned
    #[default]
    Start,
    /// Centered
    Middle,
    /// Right aligned
    End,
}

impl Anchor {
    const fn svg_value(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Middle => "middle",
            Self::End => "end",
        }
    }
}

/// Font weight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weight {
    /// Regular
    #[default]
    Normal,
    /// Bold
    Bold,
}

/// A single line of text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextPrimitive {
    /// Anchor x
    pub x: f64,
    /// Baseline y
    pub y: f64,
    /// Content, unescaped
    pub text: String,
    /// Font size in canvas units
    pub size: f64,
    /// Font weight
    pub weight: Weight,
    /// Alignment
    pub anchor: Anchor,
    /// Fill opacity, 1.0 is opaque
    pub opacity: f64,
    /// Rotation in degrees around (`x`, `y`)
    pub rotate: f64,
}

/// Drawing primitive in canvas coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Primitive {
    /// Text
    Text(TextPrimitive),
    /// Straight line
    Line {
        /// Start x
        x1: f64,
        /// Start y
        y1: f64,
        /// End x
        x2: f64,
        /// End y
        y2: f64,
        /// Stroke width
        width: f64,
    },
    /// Unfilled rectangle
    Rect {
        /// Left
        x: f64,
        /// Top
        y: f64,
        /// Width
        width: f64,
        /// Height
        height: f64,
        /// Stroke width
        stroke: f64,
    },
}

/// A complete label drawing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelDocument {
    /// Canvas width
    pub width: f64,
    /// Canvas height
    pub height: f64,
    /// CSS font stack
    pub font_family: String,
    /// Primitives in paint order
    pub primitives: Vec<Primitive>,
}

impl LabelDocument {
    /// Standalone SVG markup
    #[must_use]
    pub fn to_svg(&self) -> String {
        self.to_string()
    }

    /// Text content of every text primitive, in paint order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.primitives.iter().filter_map(|p| match p {
            Primitive::Text(text) => Some(text.text.as_str()),
            Primitive::Line { .. } | Primitive::Rect { .. } => None,
        })
    }
}

/// Compact number formatting: at most two decimals, no trailing zeros
struct Num(f64);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let fixed = format!("{:.2}", self.0);
        let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
        match trimmed {
            "-0" | "" => f.write_str("0"),
            other => f.write_str(other),
        }
    }
}

fn write_text(f: &mut fmt::Formatter<'_>, text: &TextPrimitive) -> fmt::Result {
    write!(
        f,
        r##"<text x="{}" y="{}" font-size="{}""##,
        Num(text.x),
        Num(text.y),
        Num(text.size)
    )?;
    if text.weight == Weight::Bold {
        f.write_str(r##" font-weight="bold""##)?;
    }
    if text.anchor != Anchor::Start {
        write!(f, r##" text-anchor="{}""##, text.anchor.svg_value())?;
    }
    if text.opacity < 1.0 {
        write!(f, r##" fill-opacity="{}""##, Num(text.opacity))?;
    }
    if text.rotate.abs() > f64::EPSILON {
        write!(
            f,
            r##" transform="rotate({} {} {})""##,
            Num(text.rotate),
            Num(text.x),
            Num(text.y)
        )?;
    }
    write!(f, ">{}</text>", encode_text(&text.text))
}

impl fmt::Display for LabelDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (w, h) = (Num(self.width), Num(self.height));
        writeln!(
            f,
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" font-family="{}" fill="#000">"##,
            encode_double_quoted_attribute(&self.font_family)
        )?;
        writeln!(f, r##"<rect x="0" y="0" width="{w}" height="{h}" fill="#fff"/>"##)?;
        for primitive in &self.primitives {
            match primitive {
                Primitive::Text(text) => write_text(f, text)?,
                Primitive::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    width,
                } => write!(
                    f,
                    r##"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#000" stroke-width="{}"/>"##,
                    Num(*x1),
                    Num(*y1),
                    Num(*x2),
                    Num(*y2),
                    Num(*width)
                )?,
                Primitive::Rect {
                    x,
                    y,
                    width,
                    height,
                    stroke,
                } => write!(
                    f,
                    r##"<rect x="{}" y="{}" width="{}" height="{}" fill="none" stroke="#000" stroke-width="{}"/>"##,
                    Num(*x),
                    Num(*y),
                    Num(*width),
                    Num(*height),
                    Num(*stroke)
                )?,
            }
            f.write_str("\n")?;
        }
        f.write_str("</svg>\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbers_are_compact() {
        assert_eq!(Num(2.0).to_string(), "2");
        assert_eq!(Num(1.5).to_string(), "1.5");
        assert_eq!(Num(0.126).to_string(), "0.13");
        assert_eq!(Num(-0.001).to_string(), "0");
    }

    #[test]
    fn test_text_is_escaped() {
        let document = LabelDocument {
            width: 100.0,
            height: 50.0,
            font_family: "Helvetica".to_owned(),
            primitives: vec![Primitive::Text(TextPrimitive {
                x: 1.0,
                y: 2.0,
                text: "Fish & <Chips>".to_owned(),
                size: 8.0,
                weight: Weight::Bold,
                anchor: Anchor::End,
                opacity: 1.0,
                rotate: 0.0,
            })],
        };
        let svg = document.to_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Fish &amp; &lt;Chips&gt;"));
        assert!(svg.contains(r##"text-anchor="end""##));
        assert!(svg.trim_end().ends_with("</svg>"));
    }
}
