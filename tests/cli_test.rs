// ABOUTME: End-to-end tests for the bmi-cli binary
// ABOUTME: Runs the compiled binary and checks stdout, stderr, and exit codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use serde_json::Value;
use std::path::Path;
use std::process::{Command, Output};

fn bmi_cli(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bmi-cli"))
        .args(args)
        .env_remove("BMI_OUTPUT_FORMAT")
        .env_remove("BMI_DISPLAY_PRECISION")
        .env_remove("BMI_PREFERENCES_PATH")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run bmi-cli")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).trim().to_owned()
}

fn prefs_arg(path: &Path) -> String {
    path.to_string_lossy().into_owned()
}

#[test]
fn test_calc_in_centimeters() {
    let output = bmi_cli(&["calc", "--weight", "70", "--height", "175", "--unit", "cm"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "BMI: 22.9 (healthy)");
}

#[test]
fn test_calc_json_with_meters() {
    let output = bmi_cli(&[
        "calc", "--weight", "70", "--height", "1.75", "--unit", "m", "--format", "json",
    ]);
    assert!(output.status.success());

    let json: Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["category"], "healthy");
    assert!((json["bmi"].as_f64().unwrap() - 22.857).abs() < 0.001);
}

#[test]
fn test_calc_requires_unit() {
    let output = bmi_cli(&["calc", "--weight", "70", "--height", "175"]);
    assert!(!output.status.success());
}

#[test]
fn test_calc_rejects_negative_weight() {
    let output = bmi_cli(&["calc", "--weight", "-70", "--height", "180", "--unit", "cm"]);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Weight must be a positive number"), "{stderr}");
    assert!(stderr.contains("height: 1.8 m"), "{stderr}");
}

#[test]
fn test_category_command() {
    let output = bmi_cli(&["category", "29.9"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "overweight: BMI between 25.0 and 29.9");

    let output = bmi_cli(&["category", "-5"]);
    assert!(stdout(&output).starts_with("underweight"));
}

#[test]
fn test_theme_toggle_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_arg(&dir.path().join("preferences.json"));

    let shown = bmi_cli(&["theme", "show", "--preferences", &prefs]);
    assert_eq!(stdout(&shown), "light (#076653)");

    let toggled = bmi_cli(&["theme", "toggle", "--preferences", &prefs]);
    assert_eq!(stdout(&toggled), "dark (#0C342C)");

    let shown = bmi_cli(&["theme", "show", "--preferences", &prefs, "--system", "light"]);
    assert_eq!(stdout(&shown), "dark (#0C342C)");
}

#[test]
fn test_theme_set_and_system_fallback() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = prefs_arg(&dir.path().join("preferences.json"));

    let shown = bmi_cli(&["theme", "show", "--preferences", &prefs, "--system", "dark"]);
    assert_eq!(stdout(&shown), "dark (#0C342C)");

    let set = bmi_cli(&["theme", "set", "light", "--preferences", &prefs]);
    assert!(set.status.success());
    assert_eq!(stdout(&set), "light (#076653)");
}
