// ABOUTME: Height value tagged with an explicit unit (meters or centimeters)
// ABOUTME: No default unit and no unit detection; callers must disambiguate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

use crate::constants::units;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit a [`Height`] value is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeightUnit {
    /// Meters
    #[serde(rename = "m")]
    Meters,
    /// Centimeters
    #[serde(rename = "cm")]
    Centimeters,
}

impl HeightUnit {
    /// Serialization token (`m` or `cm`)
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Meters => units::METERS_TOKEN,
            Self::Centimeters => units::CENTIMETERS_TOKEN,
        }
    }

    /// Parse from a unit token
    ///
    /// Accepts the tokens plus their spelled-out names; anything else is
    /// rejected rather than guessed.
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "m" | "meter" | "meters" | "metre" | "metres" => Some(Self::Meters),
            "cm" | "centimeter" | "centimeters" | "centimetre" | "centimetres" => {
                Some(Self::Centimeters)
            }
            _ => None,
        }
    }
}

impl fmt::Display for HeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A height measurement with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Height {
    /// Numeric height in `unit`
    pub value: f64,
    /// Unit of `value`
    pub unit: HeightUnit,
}

impl Height {
    /// Create a height with an explicit unit
    #[must_use]
    pub const fn new(value: f64, unit: HeightUnit) -> Self {
        Self { value, unit }
    }

    /// Height in meters
    #[must_use]
    pub const fn meters(value: f64) -> Self {
        Self::new(value, HeightUnit::Meters)
    }

    /// Height in centimeters
    #[must_use]
    pub const fn centimeters(value: f64) -> Self {
        Self::new(value, HeightUnit::Centimeters)
    }

    /// Convert to meters. No validation happens here.
    #[must_use]
    pub fn to_meters(&self) -> f64 {
        match self.unit {
            HeightUnit::Meters => self.value,
            HeightUnit::Centimeters => self.value / units::CENTIMETERS_PER_METER,
        }
    }
}

impl fmt::Display for Height {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.value, self.unit)
    }
}
