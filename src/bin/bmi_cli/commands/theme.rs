// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors
// ABOUTME: Theme preference command for bmi-cli
// ABOUTME: Initializes theme state from the preferences file and applies show/toggle/set

use crate::helpers::display::print_output;
use anyhow::{Context, Result};
use bmi_calc::formatters::{format_theme, OutputFormat};
use bmi_calc::preferences::{FilePreferenceStore, Theme, ThemeState};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

pub enum ThemeRequest {
    Show,
    Toggle,
    Set(Theme),
}

pub fn open_store(path: Option<PathBuf>) -> Result<FilePreferenceStore> {
    match path {
        Some(path) => Ok(FilePreferenceStore::new(path)),
        None => FilePreferenceStore::default_location()
            .context("Cannot locate preferences file; pass --preferences"),
    }
}

pub fn run(
    store: FilePreferenceStore,
    system_prefers_dark: Option<bool>,
    request: ThemeRequest,
    format: OutputFormat,
) -> Result<ExitCode> {
    let mut state = ThemeState::initialize(store, system_prefers_dark)
        .context("Failed to load theme preference")?;

    match request {
        ThemeRequest::Show => {}
        ThemeRequest::Toggle => {
            let theme = state.toggle_theme().context("Failed to save theme")?;
            info!(theme = %theme, "Theme toggled");
        }
        ThemeRequest::Set(theme) => {
            state.set_theme(theme).context("Failed to save theme")?;
            info!(theme = %theme, "Theme set");
        }
    }

    print_output(&format_theme(state.theme(), format)?);
    Ok(ExitCode::SUCCESS)
}
