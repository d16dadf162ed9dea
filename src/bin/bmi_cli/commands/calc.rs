// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors
// ABOUTME: BMI calculation command for bmi-cli
// ABOUTME: Validates input, prints the assessment, and reports validation failures

use crate::helpers::display::{print_error_output, print_output};
use anyhow::Result;
use bmi_calc::formatters::{format_assessment, format_error, OutputFormat};
use bmi_calc::{assess, Height};
use std::process::ExitCode;
use tracing::info;

/// Exit status for rejected input, distinct from runtime failures
const INVALID_INPUT_EXIT: u8 = 2;

pub fn run(
    weight_kg: f64,
    height: Height,
    format: OutputFormat,
    precision: usize,
) -> Result<ExitCode> {
    match assess(weight_kg, height) {
        Ok(assessment) => {
            info!(bmi = assessment.bmi, category = %assessment.category, "BMI calculated");
            print_output(&format_assessment(&assessment, format, precision)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            info!(
                field = e.field(),
                weight_kg = e.weight_kg(),
                height_m = e.height_m(),
                "BMI input rejected"
            );
            print_error_output(&format_error(&e, format)?);
            Ok(ExitCode::from(INVALID_INPUT_EXIT))
        }
    }
}
