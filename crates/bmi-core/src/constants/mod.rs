// ABOUTME: Constants module with domain-separated organization
// ABOUTME: WHO threshold table, unit conversion factors, and validation messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

//! Constants module
//!
//! Constants are grouped by domain rather than kept in a single flat list.

/// WHO adult BMI classification thresholds (kg/m²)
///
/// Each value is the inclusive lower bound of the next band.
pub mod who_thresholds {
    /// Lower bound of the healthy band; anything below is underweight
    pub const HEALTHY_MIN: f64 = 18.5;
    /// Lower bound of the overweight band
    pub const OVERWEIGHT_MIN: f64 = 25.0;
    /// Lower bound of the obesity band
    pub const OBESITY_MIN: f64 = 30.0;
}

/// Unit conversion and measurement constants
pub mod units {
    /// Centimeters per meter
    pub const CENTIMETERS_PER_METER: f64 = 100.0;
    /// Serialization token for meters
    pub const METERS_TOKEN: &str = "m";
    /// Serialization token for centimeters
    pub const CENTIMETERS_TOKEN: &str = "cm";
}

/// User-facing validation messages
pub mod messages {
    /// Weight failed validation
    pub const INVALID_WEIGHT: &str = "Weight must be a positive number";
    /// Height (after conversion to meters) failed validation
    pub const INVALID_HEIGHT: &str = "Height must be a positive number";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name of the command-line front-end
    pub const BMI_CLI: &str = "bmi-cli";
}
