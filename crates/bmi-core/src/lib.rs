// ABOUTME: Core types and algorithms for the BMI calculator
// ABOUTME: Foundation crate with the height model, WHO categories, errors, and formulas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

#![deny(unsafe_code)]

//! # BMI Core
//!
//! Foundation crate for the BMI calculator. Everything here is pure: no I/O,
//! no shared state, no suspension points.
//!
//! ## Modules
//!
//! - **errors**: `CalculationError`, the single invalid-input error kind
//! - **constants**: WHO threshold table and unit conversion factors
//! - **models**: `Height`, `HeightUnit`, `Category`, `BmiAssessment`
//! - **algorithms**: the BMI formula and the category classifier
//!
//! ```
//! use bmi_core::{calculate_bmi, get_category, Category, Height};
//!
//! let bmi = calculate_bmi(70.0, Height::centimeters(175.0))?;
//! assert_eq!(get_category(bmi), Category::Healthy);
//! # Ok::<(), bmi_core::CalculationError>(())
//! ```

/// Calculation error type preserving the offending inputs
pub mod errors;

/// WHO thresholds and unit conversion constants
pub mod constants;

/// Height, category, and assessment data model
pub mod models;

/// BMI formula and WHO classification
pub mod algorithms;

pub use algorithms::{assess, calculate_bmi, get_category};
pub use errors::{CalculationError, CalculationResult};
pub use models::{BmiAssessment, Category, Height, HeightUnit};
