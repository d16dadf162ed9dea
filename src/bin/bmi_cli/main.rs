// ABOUTME: bmi-cli - command-line front-end for the BMI calculator
// ABOUTME: Calculates BMI, classifies values, and manages the theme preference
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors
//!
//! Usage:
//! ```bash
//! # Calculate BMI from kilograms and centimeters
//! bmi-cli calc --weight 70 --height 175 --unit cm
//!
//! # Same, as JSON with the unrounded value
//! bmi-cli calc --weight 70 --height 1.75 --unit m --format json
//!
//! # Classify an existing BMI value
//! bmi-cli category 27.4
//!
//! # Theme preference
//! bmi-cli theme show
//! bmi-cli theme toggle
//! bmi-cli theme set dark
//! ```

mod commands;
mod helpers;

use anyhow::{Context, Result};
use bmi_calc::config::AppConfig;
use bmi_calc::formatters::OutputFormat;
use bmi_calc::logging::LoggingConfig;
use bmi_calc::preferences::Theme;
use bmi_calc::{Height, HeightUnit};
use clap::{Parser, Subcommand, ValueEnum};
use commands::theme::ThemeRequest;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, error};

#[derive(Parser)]
#[command(
    name = "bmi-cli",
    about = "Body Mass Index calculator",
    long_about = "Calculates Body Mass Index from weight and height and classifies it using the WHO adult ranges.",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Output format override (defaults to BMI_OUTPUT_FORMAT, then text)
    #[arg(long, global = true, value_enum)]
    format: Option<FormatArg>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Calculate BMI and its category
    Calc {
        /// Body weight in kilograms
        #[arg(long, allow_negative_numbers = true)]
        weight: f64,

        /// Height value, in the unit given by --unit
        #[arg(long, allow_negative_numbers = true)]
        height: f64,

        /// Unit of --height (required; no unit is assumed)
        #[arg(long, value_enum)]
        unit: UnitArg,

        /// Decimal places in text output (defaults to BMI_DISPLAY_PRECISION, then 1)
        #[arg(long)]
        precision: Option<usize>,
    },

    /// Classify an existing BMI value
    Category {
        /// BMI value in kg/m²
        #[arg(allow_negative_numbers = true)]
        bmi: f64,
    },

    /// Theme preference management
    Theme {
        #[command(subcommand)]
        action: ThemeCommand,

        /// Preferences file (defaults to BMI_PREFERENCES_PATH, then the platform config dir)
        #[arg(long, global = true)]
        preferences: Option<PathBuf>,

        /// System color scheme to fall back on when nothing is stored
        #[arg(long, global = true, value_enum)]
        system: Option<ThemeArg>,
    },
}

#[non_exhaustive]
#[derive(Subcommand)]
enum ThemeCommand {
    /// Show the active theme
    Show,

    /// Switch between light and dark
    Toggle,

    /// Set the theme explicitly
    Set {
        /// Theme to activate
        #[arg(value_enum)]
        theme: ThemeArg,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitArg {
    /// Meters
    M,
    /// Centimeters
    Cm,
}

impl From<UnitArg> for HeightUnit {
    fn from(arg: UnitArg) -> Self {
        match arg {
            UnitArg::M => Self::Meters,
            UnitArg::Cm => Self::Centimeters,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum ThemeArg {
    Light,
    Dark,
}

impl From<ThemeArg> for Theme {
    fn from(arg: ThemeArg) -> Self {
        match arg {
            ThemeArg::Light => Self::Light,
            ThemeArg::Dark => Self::Dark,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(e) = LoggingConfig::from_env().verbose(cli.verbose).init() {
        eprintln!("Warning: {e}");
    }

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            error!("bmi-cli failed: {e:#}");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let config = AppConfig::from_env().context("Invalid configuration")?;
    let format = cli.format.map_or(config.output_format, OutputFormat::from);
    debug!(format = %format, "bmi-cli starting");

    match cli.command {
        Command::Calc {
            weight,
            height,
            unit,
            precision,
        } => commands::calc::run(
            weight,
            Height::new(height, unit.into()),
            format,
            precision.unwrap_or(config.display_precision),
        ),
        Command::Category { bmi } => commands::category::run(bmi, format),
        Command::Theme {
            action,
            preferences,
            system,
        } => {
            let store = commands::theme::open_store(preferences.or(config.preferences_path))?;
            let system_prefers_dark = system.map(|s| matches!(s, ThemeArg::Dark));
            let request = match action {
                ThemeCommand::Show => ThemeRequest::Show,
                ThemeCommand::Toggle => ThemeRequest::Toggle,
                ThemeCommand::Set { theme } => ThemeRequest::Set(theme.into()),
            };
            commands::theme::run(store, system_prefers_dark, request, format)
        }
    }
}
