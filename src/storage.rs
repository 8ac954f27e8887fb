//! Persisted user preferences
//!
//! Only the dark-mode flag survives between sessions. It is loaded once at
//! startup into a `PreferenceStore` owned by the app and written back on
//! every change.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid preferences file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default)]
    pub dark_mode: bool,
}

impl Preferences {
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("rapidread")
            .join("preferences.toml")
    }

    /// Reads preferences from `path`; a missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, StorageError> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| StorageError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save(&self, path: &Path) -> Result<(), StorageError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| StorageError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content).map_err(|source| StorageError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Preferences together with where they are persisted.
///
/// `path` is `None` for in-memory stores (tests, or when no config
/// directory is available).
#[derive(Debug, Clone, Default)]
pub struct PreferenceStore {
    prefs: Preferences,
    path: Option<PathBuf>,
}

impl PreferenceStore {
    pub fn new(prefs: Preferences, path: Option<PathBuf>) -> Self {
        Self { prefs, path }
    }

    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Loads from `path`; unreadable files fall back to defaults and the
    /// error is returned alongside so the caller can report it.
    pub fn open(path: PathBuf) -> (Self, Option<StorageError>) {
        match Preferences::load(&path) {
            Ok(prefs) => (Self::new(prefs, Some(path)), None),
            Err(err) => (Self::new(Preferences::default(), Some(path)), Some(err)),
        }
    }

    pub fn dark_mode(&self) -> bool {
        self.prefs.dark_mode
    }

    /// Updates the flag and writes it through to disk.
    pub fn set_dark_mode(&mut self, dark_mode: bool) -> Result<(), StorageError> {
        self.prefs.dark_mode = dark_mode;
        match &self.path {
            Some(path) => self.prefs.save(path),
            None => Ok(()),
        }
    }
}
