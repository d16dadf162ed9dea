// ABOUTME: Output format abstraction for rendering BMI results and validation errors
// ABOUTME: Supports plain text (default) for terminals and JSON for scripting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

//! Output Format Abstraction Layer
//!
//! Calculation results are unrounded; rounding for display happens here and
//! nowhere else. JSON output keeps the full-precision value so scripts can do
//! their own formatting.
//!
//! ## Usage
//!
//! ```rust
//! use bmi_calc::formatters::{format_assessment, OutputFormat};
//! use bmi_calc::{assess, Height};
//!
//! let assessment = assess(70.0, Height::meters(1.75))?;
//! let output = format_assessment(&assessment, OutputFormat::Text, 1)?;
//! assert_eq!(output.data, "BMI: 22.9 (healthy)");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use crate::preferences::Theme;
use bmi_core::{BmiAssessment, CalculationError, Category};
use serde::Serialize;
use serde_json::json;
use std::error::Error;
use std::fmt;

/// Largest number of decimal places shown in text output
pub const MAX_DISPLAY_PRECISION: usize = 6;

/// Output serialization format selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable single line (default)
    #[default]
    Text,
    /// JSON object
    Json,
}

impl OutputFormat {
    /// Parse format from string parameter (case-insensitive)
    /// Returns `Text` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "json" => Self::Json,
            _ => Self::Text,
        }
    }

    /// Get the format name as a string
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Formatted output containing the rendered data and the format used
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormattedOutput {
    /// The rendered data
    pub data: String,
    /// The format used for rendering
    pub format: OutputFormat,
}

/// Error type for formatting operations
#[derive(Debug, Clone)]
pub struct FormatError {
    /// Error message describing what went wrong
    pub message: String,
    /// The format that was being used when the error occurred
    pub format: OutputFormat,
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Format error ({}): {}", self.format, self.message)
    }
}

impl Error for FormatError {}

/// Render a BMI assessment
///
/// `precision` is the number of decimal places in text output and is clamped
/// to [`MAX_DISPLAY_PRECISION`]. JSON output always carries the raw value.
///
/// # Errors
/// Returns `FormatError` if JSON serialization fails
pub fn format_assessment(
    assessment: &BmiAssessment,
    format: OutputFormat,
    precision: usize,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => format!(
            "BMI: {:.*} ({})",
            precision.min(MAX_DISPLAY_PRECISION),
            assessment.bmi,
            assessment.category
        ),
        OutputFormat::Json => to_json(
            &json!({
                "bmi": finite_or_string(assessment.bmi),
                "category": assessment.category,
                "description": assessment.category.description(),
            }),
            format,
        )?,
    };

    Ok(FormattedOutput { data, format })
}

/// Render a category lookup
///
/// # Errors
/// Returns `FormatError` if JSON serialization fails
pub fn format_category(
    bmi: f64,
    category: Category,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => format!("{category}: {}", category.description()),
        OutputFormat::Json => to_json(
            &json!({
                "bmi": finite_or_string(bmi),
                "category": category,
                "description": category.description(),
            }),
            format,
        )?,
    };

    Ok(FormattedOutput { data, format })
}

/// Render a validation failure with both payload fields
///
/// # Errors
/// Returns `FormatError` if JSON serialization fails
pub fn format_error(
    error: &CalculationError,
    format: OutputFormat,
) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => format!(
            "Error: {} (weight: {} kg, height: {} m)",
            error.message(),
            error.weight_kg(),
            error.height_m()
        ),
        OutputFormat::Json => to_json(error, format)?,
    };

    Ok(FormattedOutput { data, format })
}

/// Render the active theme and its chrome color
///
/// # Errors
/// Returns `FormatError` if JSON serialization fails
pub fn format_theme(theme: Theme, format: OutputFormat) -> Result<FormattedOutput, FormatError> {
    let data = match format {
        OutputFormat::Text => format!("{theme} ({})", theme.theme_color()),
        OutputFormat::Json => to_json(
            &json!({
                "theme": theme,
                "theme_color": theme.theme_color(),
            }),
            format,
        )?,
    };

    Ok(FormattedOutput { data, format })
}

fn to_json<T: Serialize + ?Sized>(data: &T, format: OutputFormat) -> Result<String, FormatError> {
    serde_json::to_string(data).map_err(|e| FormatError {
        message: e.to_string(),
        format,
    })
}

// serde_json writes NaN/inf as null, which would lose the input
fn finite_or_string(value: f64) -> serde_json::Value {
    if value.is_finite() {
        json!(value)
    } else {
        json!(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_param_defaults_to_text() {
        assert_eq!(OutputFormat::from_str_param("JSON"), OutputFormat::Json);
        assert_eq!(OutputFormat::from_str_param("yaml"), OutputFormat::Text);
    }

    #[test]
    fn test_precision_is_clamped() {
        let assessment = BmiAssessment {
            bmi: 22.857_142_857_142_858,
            category: Category::Healthy,
        };
        let output = format_assessment(&assessment, OutputFormat::Text, 42).unwrap();
        assert_eq!(output.data, "BMI: 22.857143 (healthy)");
    }
}
