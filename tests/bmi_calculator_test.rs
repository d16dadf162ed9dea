// ABOUTME: Integration tests for the BMI formula through the public API
// ABOUTME: Covers unit conversion, reference values, and invalid-input error payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bmi_calc::{assess, calculate_bmi, CalculationError, Category, Height, HeightUnit};

const TOLERANCE: f64 = 1e-9;

#[test]
fn test_calculates_bmi_using_meters() {
    let bmi = calculate_bmi(70.0, Height::meters(1.75)).unwrap();
    assert!((bmi - 22.857).abs() < 0.001, "BMI should be ~22.857, got {bmi}");
}

#[test]
fn test_calculates_bmi_using_centimeters() {
    let bmi = calculate_bmi(70.0, Height::centimeters(175.0)).unwrap();
    assert!((bmi - 22.857).abs() < 0.001, "BMI should be ~22.857, got {bmi}");
}

#[test]
fn test_result_is_weight_over_height_squared() {
    for (weight, height) in [(50.0, 1.5), (82.5, 1.91), (120.0, 2.05), (3.2, 0.5)] {
        let bmi = calculate_bmi(weight, Height::meters(height)).unwrap();
        let expected = weight / (height * height);
        assert!(
            (bmi - expected).abs() < TOLERANCE,
            "w={weight} h={height}: expected {expected}, got {bmi}"
        );
    }
}

#[test]
fn test_unit_equivalence() {
    for (weight, height_m) in [(70.0, 1.75), (55.3, 1.62), (101.0, 1.98)] {
        let in_meters = calculate_bmi(weight, Height::meters(height_m)).unwrap();
        let in_cm = calculate_bmi(weight, Height::centimeters(height_m * 100.0)).unwrap();
        assert!(
            (in_meters - in_cm).abs() < TOLERANCE,
            "meters {in_meters} vs centimeters {in_cm}"
        );
    }
}

#[test]
fn test_result_is_not_rounded() {
    let bmi = calculate_bmi(70.0, Height::meters(1.75)).unwrap();
    assert!((bmi - 70.0 / 3.0625).abs() < TOLERANCE);
    assert!((bmi * 10.0).fract().abs() > 0.0);
}

// Error tests

#[test]
fn test_zero_weight_is_rejected() {
    let err = calculate_bmi(0.0, Height::centimeters(175.0)).unwrap_err();
    assert!(matches!(err, CalculationError::InvalidWeight { .. }));
    assert_eq!(err.to_string(), "Weight must be a positive number");
}

#[test]
fn test_zero_height_is_rejected() {
    let err = calculate_bmi(70.0, Height::centimeters(0.0)).unwrap_err();
    assert!(matches!(err, CalculationError::InvalidHeight { .. }));
    assert_eq!(err.to_string(), "Height must be a positive number");
}

#[test]
fn test_error_carries_weight_and_converted_height() {
    let err = calculate_bmi(-70.0, Height::centimeters(180.0)).unwrap_err();
    assert!(matches!(err, CalculationError::InvalidWeight { .. }));
    assert!((err.weight_kg() - -70.0).abs() < f64::EPSILON);
    assert!((err.height_m() - 1.8).abs() < TOLERANCE);
}

#[test]
fn test_negative_height_reports_meters() {
    let err = calculate_bmi(70.0, Height::centimeters(-150.0)).unwrap_err();
    assert!(matches!(err, CalculationError::InvalidHeight { .. }));
    assert!((err.height_m() - -1.5).abs() < TOLERANCE);
    assert!((err.weight_kg() - 70.0).abs() < f64::EPSILON);
}

#[test]
fn test_non_finite_inputs_are_rejected() {
    let cases = [
        (f64::NAN, Height::meters(1.8), "weight"),
        (f64::INFINITY, Height::meters(1.8), "weight"),
        (f64::NEG_INFINITY, Height::meters(1.8), "weight"),
        (70.0, Height::meters(f64::NAN), "height"),
        (70.0, Height::centimeters(f64::INFINITY), "height"),
    ];

    for (weight, height, field) in cases {
        let err = calculate_bmi(weight, height).unwrap_err();
        assert_eq!(err.field(), field, "w={weight} h={height}");
    }
}

#[test]
fn test_height_keeps_explicit_unit() {
    let height = Height::new(175.0, HeightUnit::Centimeters);
    assert_eq!(height.unit, HeightUnit::Centimeters);
    assert!((height.to_meters() - 1.75).abs() < TOLERANCE);
}

#[test]
fn test_assess_combines_calculation_and_category() {
    let assessment = assess(70.0, Height::centimeters(175.0)).unwrap();
    assert_eq!(assessment.category, Category::Healthy);
    assert!((assessment.bmi - 22.857).abs() < 0.001);

    let err = assess(70.0, Height::meters(0.0)).unwrap_err();
    assert!(matches!(err, CalculationError::InvalidHeight { .. }));
}
