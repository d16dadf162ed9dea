// ABOUTME: UI preference state for front-ends embedding the calculator
// ABOUTME: Theme selection over an injected persistence interface

/// Persistence interface and built-in stores
pub mod store;

/// Light/dark theme state
pub mod theme;

pub use store::{FilePreferenceStore, MemoryPreferenceStore, PreferenceError, PreferenceStore};
pub use theme::{resolve_initial_theme, Theme, ThemeState, THEME_KEY};
