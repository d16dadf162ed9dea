// ABOUTME: Body Mass Index formula with input validation
// ABOUTME: Converts height to meters, rejects non-positive or non-finite inputs, returns kg/m²
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

use super::classification::get_category;
use crate::errors::{CalculationError, CalculationResult};
use crate::models::{BmiAssessment, Height};
use tracing::debug;

/// Calculate Body Mass Index
///
/// Formula: BMI = `weight_kg` / (`height_m`)²
///
/// Centimeter heights are converted to meters before validation, so the
/// error payload always reports meters. The result is not rounded; callers
/// format it for display.
///
/// # Arguments
/// * `weight_kg` - Body weight in kilograms
/// * `height` - Height value with an explicit unit
///
/// # Reference
/// World Health Organization, Body Mass Index (BMI) data theme
///
/// # Errors
///
/// Returns [`CalculationError::InvalidWeight`] if the weight is not a finite
/// positive number, checked first. Returns [`CalculationError::InvalidHeight`]
/// if the converted height is not a finite positive number.
pub fn calculate_bmi(weight_kg: f64, height: Height) -> CalculationResult<f64> {
    let height_m = height.to_meters();

    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        debug!(weight_kg, height_m, "Rejected BMI input: weight");
        return Err(CalculationError::invalid_weight(weight_kg, height_m));
    }

    if !height_m.is_finite() || height_m <= 0.0 {
        debug!(weight_kg, height_m, "Rejected BMI input: height");
        return Err(CalculationError::invalid_height(weight_kg, height_m));
    }

    Ok(weight_kg / height_m.powi(2))
}

/// Calculate BMI and classify it in one step
///
/// # Errors
///
/// Same validation as [`calculate_bmi`].
pub fn assess(weight_kg: f64, height: Height) -> CalculationResult<BmiAssessment> {
    let bmi = calculate_bmi(weight_kg, height)?;
    let category = get_category(bmi);
    debug!(bmi, category = %category, "BMI assessed");
    Ok(BmiAssessment { bmi, category })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;

    #[test]
    fn test_meters_reference_value() {
        let bmi = calculate_bmi(70.0, Height::meters(1.75)).unwrap();
        assert!((bmi - 22.857).abs() < 0.001, "got {bmi}");
    }

    #[test]
    fn test_weight_checked_before_height() {
        let err = calculate_bmi(0.0, Height::centimeters(0.0)).unwrap_err();
        assert!(matches!(err, CalculationError::InvalidWeight { .. }));
    }

    #[test]
    fn test_infinite_height_rejected() {
        let err = calculate_bmi(70.0, Height::meters(f64::INFINITY)).unwrap_err();
        assert!(matches!(err, CalculationError::InvalidHeight { .. }));
        assert!(err.height_m().is_infinite());
    }

    #[test]
    fn test_assess_classifies_result() {
        let assessment = assess(95.0, Height::centimeters(170.0)).unwrap();
        assert_eq!(assessment.category, Category::Obesity);
        assert!((assessment.bmi - 32.872).abs() < 0.001);
    }
}
