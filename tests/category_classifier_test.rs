// ABOUTME: Integration tests for WHO category classification
// ABOUTME: Boundary table plus degenerate inputs (NaN, infinities, non-positive values)
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use bmi_calc::{get_category, Category};

#[test]
fn test_returns_category_for_boundary_table() {
    let table = [
        ("16", Category::Underweight),
        ("18.4", Category::Underweight),
        ("18.5", Category::Healthy),
        ("24.8", Category::Healthy),
        ("24.9", Category::Healthy),
        ("25", Category::Overweight),
        ("29.8", Category::Overweight),
        ("29.9", Category::Overweight),
        ("30", Category::Obesity),
        ("100", Category::Obesity),
    ];

    for (bmi, expected) in table {
        let value: f64 = bmi.parse().unwrap();
        assert_eq!(get_category(value), expected, "BMI {bmi}");
    }
}

#[test]
fn test_nan_and_infinity_are_obesity() {
    assert_eq!(get_category(f64::NAN), Category::Obesity);
    assert_eq!(get_category(f64::INFINITY), Category::Obesity);
}

#[test]
fn test_non_positive_values_are_underweight() {
    assert_eq!(get_category(0.0), Category::Underweight);
    assert_eq!(get_category(-0.0), Category::Underweight);
    assert_eq!(get_category(-1.0), Category::Underweight);
    assert_eq!(get_category(f64::NEG_INFINITY), Category::Underweight);
}

#[test]
fn test_category_tokens_are_stable() {
    let tokens: Vec<&str> = Category::ALL.iter().map(Category::as_str).collect();
    assert_eq!(tokens, ["underweight", "healthy", "overweight", "obesity"]);

    let json = serde_json::to_string(&Category::Overweight).unwrap();
    assert_eq!(json, "\"overweight\"");
    let parsed: Category = serde_json::from_str("\"obesity\"").unwrap();
    assert_eq!(parsed, Category::Obesity);
}

#[test]
fn test_categories_are_ordered_by_bmi() {
    let samples = [10.0, 20.0, 27.0, 35.0];
    let categories: Vec<Category> = samples.into_iter().map(get_category).collect();
    assert_eq!(categories, Category::ALL);
}
