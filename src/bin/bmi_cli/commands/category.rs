// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors
// ABOUTME: Category lookup command for bmi-cli
// ABOUTME: Classifies any numeric BMI without validation

use crate::helpers::display::print_output;
use anyhow::Result;
use bmi_calc::formatters::{format_category, OutputFormat};
use bmi_calc::get_category;
use std::process::ExitCode;

pub fn run(bmi: f64, format: OutputFormat) -> Result<ExitCode> {
    let category = get_category(bmi);
    print_output(&format_category(bmi, category, format)?);
    Ok(ExitCode::SUCCESS)
}
