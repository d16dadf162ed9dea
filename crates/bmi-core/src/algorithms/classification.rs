// ABOUTME: WHO BMI classification mapping a BMI value to one of four categories
// ABOUTME: Total function with no validation; NaN and +Infinity land in the top band
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

use crate::constants::who_thresholds::{HEALTHY_MIN, OBESITY_MIN, OVERWEIGHT_MIN};
use crate::models::Category;

/// Classify a BMI value using the WHO adult thresholds
///
/// - < 18.5 → [`Category::Underweight`]
/// - 18.5 to < 25.0 → [`Category::Healthy`]
/// - 25.0 to < 30.0 → [`Category::Overweight`]
/// - otherwise → [`Category::Obesity`]
///
/// Never fails. Non-positive values and `-inf` are underweight; `NaN`
/// compares false against every bound and falls through to obesity along
/// with `+inf`. Validate first if stricter behavior is needed.
///
/// ```
/// use bmi_core::{get_category, Category};
///
/// assert_eq!(get_category(22.3), Category::Healthy);
/// assert_eq!(get_category(31.1), Category::Obesity);
/// ```
#[must_use]
pub fn get_category(bmi: f64) -> Category {
    if bmi < HEALTHY_MIN {
        Category::Underweight
    } else if bmi < OVERWEIGHT_MIN {
        Category::Healthy
    } else if bmi < OBESITY_MIN {
        Category::Overweight
    } else {
        Category::Obesity
    }
}
