// ABOUTME: WHO BMI classification category enum with stable serialization tokens
// ABOUTME: Closed set of four bands: underweight, healthy, overweight, obesity
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

use serde::{Deserialize, Serialize};
use std::fmt;

/// BMI classification band based on the WHO adult ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// BMI below 18.5
    Underweight,
    /// BMI from 18.5 up to but not including 25.0
    Healthy,
    /// BMI from 25.0 up to but not including 30.0
    Overweight,
    /// BMI of 30.0 or more
    Obesity,
}

impl Category {
    /// All categories in ascending BMI order
    pub const ALL: [Self; 4] = [
        Self::Underweight,
        Self::Healthy,
        Self::Overweight,
        Self::Obesity,
    ];

    /// Serialization token
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Healthy => "healthy",
            Self::Overweight => "overweight",
            Self::Obesity => "obesity",
        }
    }

    /// Parse from a serialization token
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "underweight" => Some(Self::Underweight),
            "healthy" => Some(Self::Healthy),
            "overweight" => Some(Self::Overweight),
            "obesity" => Some(Self::Obesity),
            _ => None,
        }
    }

    /// Human-readable range description
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Underweight => "BMI below 18.5",
            Self::Healthy => "BMI between 18.5 and 24.9",
            Self::Overweight => "BMI between 25.0 and 29.9",
            Self::Obesity => "BMI of 30.0 or above",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
