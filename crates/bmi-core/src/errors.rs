// ABOUTME: Calculation error type for invalid BMI inputs
// ABOUTME: Preserves the offending weight and converted height for caller diagnostics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

//! # Calculation Errors
//!
//! The calculator has a single error kind, invalid input. The two variants
//! exist only so callers can tell which field was rejected; both carry the
//! same payload so a UI can echo back what it was given.

use crate::constants::messages;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use thiserror::Error;

/// Result alias for calculator operations
pub type CalculationResult<T> = Result<T, CalculationError>;

/// Invalid input passed to the BMI calculator.
///
/// `height_m` is always the height *after* conversion to meters.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum CalculationError {
    /// Weight was zero, negative, or not finite
    #[error("Weight must be a positive number")]
    InvalidWeight {
        /// Weight as supplied, in kilograms
        weight_kg: f64,
        /// Height converted to meters
        height_m: f64,
    },
    /// Height was zero, negative, or not finite after unit conversion
    #[error("Height must be a positive number")]
    InvalidHeight {
        /// Weight as supplied, in kilograms
        weight_kg: f64,
        /// Height converted to meters
        height_m: f64,
    },
}

impl CalculationError {
    /// Create an invalid weight error
    #[must_use]
    pub const fn invalid_weight(weight_kg: f64, height_m: f64) -> Self {
        Self::InvalidWeight {
            weight_kg,
            height_m,
        }
    }

    /// Create an invalid height error
    #[must_use]
    pub const fn invalid_height(weight_kg: f64, height_m: f64) -> Self {
        Self::InvalidHeight {
            weight_kg,
            height_m,
        }
    }

    /// Weight that was passed in, in kilograms
    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        match self {
            Self::InvalidWeight { weight_kg, .. } | Self::InvalidHeight { weight_kg, .. } => {
                *weight_kg
            }
        }
    }

    /// Height that was passed in, converted to meters
    #[must_use]
    pub fn height_m(&self) -> f64 {
        match self {
            Self::InvalidWeight { height_m, .. } | Self::InvalidHeight { height_m, .. } => {
                *height_m
            }
        }
    }

    /// The validation message shown to users
    #[must_use]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::InvalidWeight { .. } => messages::INVALID_WEIGHT,
            Self::InvalidHeight { .. } => messages::INVALID_HEIGHT,
        }
    }

    /// Name of the rejected field (`weight` or `height`)
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::InvalidWeight { .. } => "weight",
            Self::InvalidHeight { .. } => "height",
        }
    }
}

// Non-finite payloads serialize as strings; JSON has no NaN or Infinity.
impl Serialize for CalculationError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("CalculationError", 4)?;
        state.serialize_field("error", self.message())?;
        state.serialize_field("field", self.field())?;
        serialize_number(&mut state, "weight_kg", self.weight_kg())?;
        serialize_number(&mut state, "height_m", self.height_m())?;
        state.end()
    }
}

fn serialize_number<S>(state: &mut S, key: &'static str, value: f64) -> Result<(), S::Error>
where
    S: SerializeStruct,
{
    if value.is_finite() {
        state.serialize_field(key, &value)
    } else {
        state.serialize_field(key, &value.to_string())
    }
}
