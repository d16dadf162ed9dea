// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors
// ABOUTME: Output helpers for bmi-cli
// ABOUTME: Results go to stdout, validation failures to stderr

use bmi_calc::formatters::FormattedOutput;

/// Print a command result
pub fn print_output(output: &FormattedOutput) {
    println!("{}", output.data);
}

/// Print a rejected-input report
pub fn print_error_output(output: &FormattedOutput) {
    eprintln!("{}", output.data);
}
