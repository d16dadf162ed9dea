// ABOUTME: Light/dark theme preference with explicit startup initialization
// ABOUTME: Resolves stored or system preference once, persists every change immediately
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

use super::store::{PreferenceError, PreferenceStore};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

/// Storage key for the theme preference
pub const THEME_KEY: &str = "bmi-calc-theme";

/// Browser chrome color for the light theme
pub const LIGHT_THEME_COLOR: &str = "#076653";
/// Browser chrome color for the dark theme
pub const DARK_THEME_COLOR: &str = "#0C342C";

/// UI color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Theme {
    /// Light theme (default)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    /// Storage token
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a storage token; only the exact tokens are accepted
    #[must_use]
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    /// The other theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Color for the host's `theme-color` hint
    #[must_use]
    pub const fn theme_color(&self) -> &'static str {
        match self {
            Self::Light => LIGHT_THEME_COLOR,
            Self::Dark => DARK_THEME_COLOR,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve the startup theme
///
/// A valid stored preference wins. Otherwise the host color-scheme signal is
/// used; `None` means the host has none, which resolves to light.
#[must_use]
pub fn resolve_initial_theme(stored: Option<&str>, system_prefers_dark: Option<bool>) -> Theme {
    if let Some(theme) = stored.and_then(Theme::parse) {
        return theme;
    }

    if let Some(value) = stored {
        warn!(value, "Ignoring unrecognized stored theme");
    }

    match system_prefers_dark {
        Some(true) => Theme::Dark,
        Some(false) | None => Theme::Light,
    }
}

/// Theme preference owned by the application for its whole lifetime
///
/// Created once at startup; every change is written back to the store before
/// the call returns.
#[derive(Debug)]
pub struct ThemeState<S: PreferenceStore> {
    store: S,
    theme: Theme,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Resolve the initial theme from `store` and persist it
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written
    pub fn initialize(store: S, system_prefers_dark: Option<bool>) -> Result<Self, PreferenceError> {
        let stored = store.load(THEME_KEY)?;
        let theme = resolve_initial_theme(stored.as_deref(), system_prefers_dark);
        debug!(
            theme = %theme,
            stored = ?stored,
            system_prefers_dark = ?system_prefers_dark,
            "Theme resolved"
        );

        let state = Self { store, theme };
        state.persist()?;
        Ok(state)
    }

    /// Current theme
    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    /// Whether the light theme is active
    #[must_use]
    pub const fn is_light(&self) -> bool {
        matches!(self.theme, Theme::Light)
    }

    /// Whether the dark theme is active
    #[must_use]
    pub const fn is_dark(&self) -> bool {
        matches!(self.theme, Theme::Dark)
    }

    /// Switch to `theme` and persist it
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written; the in-memory theme
    /// is still updated
    pub fn set_theme(&mut self, theme: Theme) -> Result<(), PreferenceError> {
        self.theme = theme;
        self.persist()
    }

    /// Flip between light and dark, returning the new theme
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written
    pub fn toggle_theme(&mut self) -> Result<Theme, PreferenceError> {
        self.set_theme(self.theme.toggled())?;
        Ok(self.theme)
    }

    /// The backing store
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn persist(&self) -> Result<(), PreferenceError> {
        self.store.save(THEME_KEY, self.theme.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolution_order() {
        assert_eq!(resolve_initial_theme(Some("dark"), Some(false)), Theme::Dark);
        assert_eq!(resolve_initial_theme(None, Some(true)), Theme::Dark);
        assert_eq!(resolve_initial_theme(Some("sepia"), Some(true)), Theme::Dark);
        assert_eq!(resolve_initial_theme(Some("Dark"), None), Theme::Light);
        assert_eq!(resolve_initial_theme(None, None), Theme::Light);
    }

    #[test]
    fn test_toggle_is_involution() {
        assert_eq!(Theme::Light.toggled().toggled(), Theme::Light);
        assert_eq!(Theme::Dark.theme_color(), "#0C342C");
    }
}
