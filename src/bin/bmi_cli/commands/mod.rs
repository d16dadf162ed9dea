// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors
// ABOUTME: Re-exports command modules for bmi-cli
// ABOUTME: Provides the calc, category, and theme commands

pub mod calc;
pub mod category;
pub mod theme;
