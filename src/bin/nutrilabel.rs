// ABOUTME: nutrilabel CLI - compute recipe nutrition and render nutrition-facts labels from JSON
// ABOUTME: Thin shell over the library: reads a recipe file, prints JSON or writes SVG
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Async-IO.org
//!
//! Usage:
//! ```bash
//! # Per-serving facts, %DV and allergen statement as JSON
//! nutrilabel compute recipe.json
//!
//! # Print-resolution 4x6 label with a preview watermark
//! nutrilabel render recipe.json --format 4x6 --resolution print --watermark --output label.svg
//!
//! # Rescale a recipe to a new serving count
//! nutrilabel scale recipe.json --to 12
//!
//! # List label presets
//! nutrilabel formats
//! ```

use clap::{Parser, Subcommand};
use nutrilabel::config::{LabelConfig, RenderingConfig};
use nutrilabel::errors::{AppError, AppResult, ErrorResponse};
use nutrilabel::label::{export_label, LabelContent, LabelFormat, RenderOptions, Resolution};
use nutrilabel::logging::LoggingConfig;
use nutrilabel::nutrition::{compute_recipe_nutrition, ComputeOptions, ComputedNutritionResult};
use nutrilabel::recipes::Recipe;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{info, warn};

type Result<T> = AppResult<T>;

#[derive(Parser)]
#[command(
    name = "nutrilabel",
    version,
    about = "Nutrition facts computation and label rendering",
    long_about = "Computes FDA-rounded nutrition facts, percent daily values and allergen statements \
                  for a recipe, and renders a nutrition-facts panel as SVG."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Compute nutrition facts and print them as JSON
    Compute {
        /// Recipe JSON file
        recipe: PathBuf,

        /// Report raw per-serving values without FDA rounding
        #[arg(long)]
        no_rounding: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Render a nutrition-facts label as SVG
    Render {
        /// Recipe JSON file
        recipe: PathBuf,

        /// Label preset (2x4, 3x4, 4x6, 8.5x11)
        #[arg(long, default_value = "4x6")]
        format: LabelFormat,

        /// Output resolution (screen or print)
        #[arg(long, default_value = "screen")]
        resolution: Resolution,

        /// Overlay the preview watermark
        #[arg(long)]
        watermark: bool,

        /// Replaces the "N servings per container" line
        #[arg(long)]
        servings_text: Option<String>,

        /// Net weight line, e.g. "Net Wt. 12 oz (340g)"
        #[arg(long)]
        net_weight: Option<String>,

        /// Business name printed under the panel
        #[arg(long)]
        business: Option<String>,

        /// Business address line (repeatable)
        #[arg(long = "address", requires = "business")]
        address_lines: Vec<String>,

        /// Write the SVG here instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,

        /// Print the SVG together with the computed facts as JSON
        #[arg(long, conflicts_with = "output")]
        export: bool,
    },

    /// Rescale a recipe to a new number of servings and print it as JSON
    Scale {
        /// Recipe JSON file
        recipe: PathBuf,

        /// Target servings per batch
        #[arg(long)]
        to: u32,
    },

    /// List label presets with their pixel sizes
    Formats,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    if let Err(e) = logging.init() {
        eprintln!("Failed to initialize logging: {e}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report(error);
            ExitCode::FAILURE
        }
    }
}

/// Print the error to stderr as one `ErrorResponse` JSON object
fn report(error: AppError) {
    let response = ErrorResponse::from(error);
    match serde_json::to_string(&response) {
        Ok(json) => eprintln!("{json}"),
        Err(_) => eprintln!("{}: {}", response.code.description(), response.message),
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = LabelConfig::load()?;

    match cli.command {
        Command::Compute {
            recipe,
            no_rounding,
            pretty,
        } => {
            let recipe = read_recipe(&recipe)?;
            let options = if no_rounding {
                ComputeOptions::unrounded()
            } else {
                ComputeOptions::from_config(&config)
            };
            let result = compute(&recipe, options)?;
            print_json(&result, pretty)?;
        }
        Command::Render {
            recipe,
            format,
            resolution,
            watermark,
            servings_text,
            net_weight,
            business,
            address_lines,
            output,
            export,
        } => {
            let recipe = read_recipe(&recipe)?;
            let result = compute(&recipe, ComputeOptions::from_config(&config))?;

            let mut content = LabelContent::for_recipe(&recipe);
            if let Some(text) = servings_text {
                content = content.with_servings_text(text);
            }
            if let Some(name) = business {
                content = content.with_business(name, address_lines);
            }
            if let Some(net_weight) = net_weight {
                content = content.with_net_weight(net_weight);
            }
            let mut options = RenderOptions::new(format, resolution);
            if watermark {
                options = options.with_watermark();
            }

            let exported = export_label(result, &content, options);
            if export {
                print_json(&exported, true)?;
            } else if let Some(path) = output {
                fs::write(&path, &exported.label.svg)?;
                info!(
                    path = %path.display(),
                    width = exported.label.width,
                    height = exported.label.height,
                    "Wrote label"
                );
            } else {
                print!("{}", exported.label.svg);
            }
        }
        Command::Scale { recipe, to } => {
            let scaled = read_recipe(&recipe)?.scaled(to)?;
            print_json(&scaled, true)?;
        }
        Command::Formats => print_formats(&config.rendering),
    }

    Ok(())
}

fn read_recipe(path: &Path) -> Result<Recipe> {
    let raw = fs::read_to_string(path)?;
    let recipe: Recipe = serde_json::from_str(&raw)?;
    info!(
        recipe = %recipe.name,
        ingredients = recipe.ingredients.len(),
        servings = recipe.servings_per_batch,
        "Loaded recipe"
    );
    Ok(recipe.with_detected_allergens())
}

fn compute(recipe: &Recipe, options: ComputeOptions) -> Result<ComputedNutritionResult> {
    let result = compute_recipe_nutrition(&recipe.ingredients, recipe.servings_per_batch, options)?;
    if !result.is_complete() {
        warn!(
            missing = ?result.missing_fields,
            "Some ingredients lack nutrient data; totals only include reported values"
        );
    }
    Ok(result)
}

fn print_json(value: &impl Serialize, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}

fn print_formats(rendering: &RenderingConfig) {
    println!("{:<8} {:>10} {:>16} {:>16}", "FORMAT", "INCHES", "SCREEN (px)", "PRINT (px)");
    for format in LabelFormat::ALL {
        let screen = format.geometry(Resolution::Screen, rendering);
        let print = format.geometry(Resolution::Print, rendering);
        let inches = format!("{}x{}", format.width_in(), format.height_in());
        let screen_px = format!("{:.0}x{:.0}", screen.width, screen.min_height);
        let print_px = format!("{:.0}x{:.0}", print.width, print.min_height);
        println!(
            "{:<8} {inches:>10} {screen_px:>16} {print_px:>16}",
            format.name()
        );
    }
}
