// ABOUTME: Data model for BMI calculation inputs and results
// ABOUTME: Height with explicit unit, WHO category, and combined assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

use serde::{Deserialize, Serialize};

mod category;
mod height;

pub use category::Category;
pub use height::{Height, HeightUnit};

/// A calculated BMI together with its WHO category
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BmiAssessment {
    /// Unrounded BMI in kg/m²
    pub bmi: f64,
    /// Classification of `bmi`
    pub category: Category,
}
