// ABOUTME: Environment configuration for the BMI calculator front-ends
// ABOUTME: Reads output format, display precision, preferences path, and deployment mode
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

//! Environment-based configuration

use crate::formatters::{OutputFormat, MAX_DISPLAY_PRECISION};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;
use tracing::debug;

/// Output format variable (`text` or `json`)
pub const OUTPUT_FORMAT_VAR: &str = "BMI_OUTPUT_FORMAT";
/// Display precision variable (decimal places)
pub const DISPLAY_PRECISION_VAR: &str = "BMI_DISPLAY_PRECISION";
/// Preferences file override variable
pub const PREFERENCES_PATH_VAR: &str = "BMI_PREFERENCES_PATH";
/// Deployment environment variable
pub const ENVIRONMENT_VAR: &str = "ENVIRONMENT";

/// Decimal places shown when nothing is configured
pub const DEFAULT_DISPLAY_PRECISION: usize = 1;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration value
    #[error("Invalid value for {var}: {value:?}")]
    Parse {
        /// Variable name
        var: &'static str,
        /// Raw value that failed to parse
        value: String,
    },

    /// Numeric value outside valid range for parameter
    #[error("Value out of range for {var}: {value} (max {max})")]
    ValueOutOfRange {
        /// Variable name
        var: &'static str,
        /// Parsed value
        value: usize,
        /// Largest accepted value
        max: usize,
    },
}

/// Environment type
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development (default)
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Application configuration resolved from the environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Default output format for command results
    pub output_format: OutputFormat,
    /// Decimal places for text output
    pub display_precision: usize,
    /// Explicit preferences file; `None` means the platform default
    pub preferences_path: Option<PathBuf>,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            output_format: OutputFormat::Text,
            display_precision: DEFAULT_DISPLAY_PRECISION,
            preferences_path: None,
            environment: Environment::Development,
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `BMI_DISPLAY_PRECISION` is not a whole number or
    /// exceeds the supported precision
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = Self {
            output_format: OutputFormat::from_str_param(&env_var_or(OUTPUT_FORMAT_VAR, "text")),
            display_precision: parse_precision(env::var(DISPLAY_PRECISION_VAR).ok())?,
            preferences_path: env::var(PREFERENCES_PATH_VAR)
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            environment: Environment::from_str_or_default(&env_var_or(
                ENVIRONMENT_VAR,
                "development",
            )),
        };

        debug!(
            output_format = %config.output_format,
            display_precision = config.display_precision,
            environment = %config.environment,
            "Configuration loaded from environment"
        );

        Ok(config)
    }
}

fn parse_precision(raw: Option<String>) -> Result<usize, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_DISPLAY_PRECISION);
    };

    let value: usize = raw.trim().parse().map_err(|_| ConfigError::Parse {
        var: DISPLAY_PRECISION_VAR,
        value: raw.clone(),
    })?;

    if value > MAX_DISPLAY_PRECISION {
        return Err(ConfigError::ValueOutOfRange {
            var: DISPLAY_PRECISION_VAR,
            value,
            max: MAX_DISPLAY_PRECISION,
        });
    }

    Ok(value)
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
