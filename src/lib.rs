// ABOUTME: Main library entry point for the BMI calculator
// ABOUTME: Re-exports the core formula and classifier, adds config, logging, output, and preferences
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

#![deny(unsafe_code)]

//! # BMI Calc
//!
//! Body Mass Index calculation and WHO classification, plus the plumbing a
//! front-end needs around it.
//!
//! ## Architecture
//!
//! - **`bmi_core`**: pure formula, classifier, data model, and error type
//! - **Config**: environment-only configuration
//! - **Logging**: `tracing` subscriber setup
//! - **Formatters**: text and JSON rendering of results and errors
//! - **Preferences**: light/dark theme state over an injected store
//!
//! ## Example Usage
//!
//! ```rust
//! use bmi_calc::{calculate_bmi, get_category, Category, Height};
//!
//! let bmi = calculate_bmi(70.0, Height::meters(1.75))?;
//! assert!((bmi - 22.857).abs() < 0.001);
//! assert_eq!(get_category(bmi), Category::Healthy);
//!
//! let err = calculate_bmi(-70.0, Height::centimeters(180.0)).unwrap_err();
//! assert_eq!(err.message(), "Weight must be a positive number");
//! # Ok::<(), bmi_calc::CalculationError>(())
//! ```

/// Environment configuration
pub mod config;

/// Text and JSON output rendering
pub mod formatters;

/// Structured logging setup
pub mod logging;

/// Theme preference state and persistence
pub mod preferences;

pub use bmi_core::{
    assess, calculate_bmi, constants, get_category, BmiAssessment, CalculationError,
    CalculationResult, Category, Height, HeightUnit,
};
