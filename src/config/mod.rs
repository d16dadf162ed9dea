// ABOUTME: Configuration module for the BMI calculator front-ends
// ABOUTME: Environment-only configuration; command-line flags override these values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

/// Environment variable configuration
pub mod environment;

pub use environment::{AppConfig, ConfigError, Environment};
