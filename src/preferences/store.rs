// ABOUTME: Key/value persistence interface for UI preferences
// ABOUTME: In-memory store for embedding and tests, JSON file store for the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 BMI Calc Contributors

use serde_json::{Map, Value};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::debug;

/// Directory name under the platform config dir
pub const APP_CONFIG_DIR: &str = "bmi-calc";
/// File name of the preferences document
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Errors raised by preference stores
#[derive(Debug, Error)]
pub enum PreferenceError {
    /// Reading or writing the backing file failed
    #[error("Preference storage I/O error at {path}: {source}")]
    Io {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: io::Error,
    },

    /// The backing file is not a JSON object of strings
    #[error("Preference file {path} is malformed: {source}")]
    Serialization {
        /// File being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: serde_json::Error,
    },

    /// No platform configuration directory could be determined
    #[error("No configuration directory available for preferences")]
    NoConfigDir,
}

/// Read/write access to whatever persistence the host environment provides
pub trait PreferenceStore {
    /// Load the value stored under `key`
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be read
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError>;

    /// Store `value` under `key`, replacing any previous value
    ///
    /// # Errors
    ///
    /// Returns an error if the backing storage cannot be written
    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for &T {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        (**self).load(key)
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        (**self).save(key, value)
    }
}

/// Process-local preference store
#[derive(Debug, Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryPreferenceStore {
    /// Create an empty store
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with one entry
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .values
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_owned(), value.to_owned());
        store
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(values.get(key).cloned())
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut values = self.values.lock().unwrap_or_else(PoisonError::into_inner);
        values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Preference store backed by a flat JSON object on disk
///
/// Non-string values already in the file are preserved on write but read
/// back as absent.
#[derive(Debug, Clone)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Use the file at `path`; it is created on first save
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `<config_dir>/bmi-calc/preferences.json`
    ///
    /// # Errors
    ///
    /// Returns [`PreferenceError::NoConfigDir`] if the platform has no
    /// configuration directory
    pub fn default_location() -> Result<Self, PreferenceError> {
        let dir = dirs::config_dir().ok_or(PreferenceError::NoConfigDir)?;
        Ok(Self::new(dir.join(APP_CONFIG_DIR).join(PREFERENCES_FILE)))
    }

    /// Path of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(&self) -> Result<Map<String, Value>, PreferenceError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(PreferenceError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&contents).map_err(|source| PreferenceError::Serialization {
            path: self.path.clone(),
            source,
        })
    }

    fn write_document(&self, document: &Map<String, Value>) -> Result<(), PreferenceError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| PreferenceError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let contents = serde_json::to_string_pretty(document).map_err(|source| {
            PreferenceError::Serialization {
                path: self.path.clone(),
                source,
            }
        })?;

        fs::write(&self.path, contents).map_err(|source| PreferenceError::Io {
            path: self.path.clone(),
            source,
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self, key: &str) -> Result<Option<String>, PreferenceError> {
        let document = self.read_document()?;
        Ok(document
            .get(key)
            .and_then(Value::as_str)
            .map(str::to_owned))
    }

    fn save(&self, key: &str, value: &str) -> Result<(), PreferenceError> {
        let mut document = self.read_document()?;
        document.insert(key.to_owned(), Value::String(value.to_owned()));
        self.write_document(&document)?;
        debug!(path = %self.path.display(), key, value, "Preference saved");
        Ok(())
    }
}
