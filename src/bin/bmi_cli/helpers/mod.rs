// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors
// ABOUTME: Re-exports helper modules for bmi-cli
// ABOUTME: Provides display utilities

pub mod display;
