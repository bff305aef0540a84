//! Loading of the extension-to-category mapping.
//!
//! The configuration lives at a fixed well-known path,
//! `<home>/downloads_organizer_config.json`, and fully overrides the
//! built-in defaults when present and valid. A missing or malformed file
//! is never fatal; the caller is expected to warn once and fall back to
//! [`Configuration::default`].
//!
//! # Configuration File Format
//!
//! A JSON object with a required `folder_names` key mapping category
//! names to arrays of lowercase extensions (no leading dot):
//!
//! ```json
//! {
//!     "folder_names": {
//!         "Music": ["mp3", "flac"],
//!         "Papers": ["pdf"]
//!     }
//! }
//! ```
//!
//! Key order in the object is the category match order.

use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

use crate::file_category::CategoryMap;

/// File name of the configuration file inside the user's home directory.
pub const CONFIG_FILE_NAME: &str = "downloads_organizer_config.json";

/// Errors that can occur while loading the configuration.
#[derive(Debug, Clone)]
pub enum ConfigError {
    /// Configuration file not found at the well-known path.
    ConfigNotFound(PathBuf),
    /// Invalid JSON syntax or an unexpected shape.
    ConfigInvalid(String),
    /// IO error while reading the configuration.
    IoError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::ConfigNotFound(path) => {
                write!(f, "Configuration file not found: {}", path.display())
            }
            ConfigError::ConfigInvalid(msg) => write!(f, "Invalid configuration: {}", msg),
            ConfigError::IoError(msg) => write!(f, "IO error reading configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Raw on-disk shape. `serde_json`'s `preserve_order` feature keeps the
/// map in key order, which `CategoryMap` relies on for tie-breaking.
#[derive(Debug, Deserialize)]
struct RawConfig {
    folder_names: serde_json::Map<String, Value>,
}

/// The category mapping in effect for one run.
///
/// Constructed once at startup, either from the user's file or from the
/// built-in defaults, and passed explicitly to the organizer; nothing is
/// kept in global state.
#[derive(Debug, Clone, Default)]
pub struct Configuration {
    categories: CategoryMap,
}

impl Configuration {
    /// Loads the configuration from the well-known path.
    ///
    /// # Errors
    ///
    /// See [`Configuration::load_from`].
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_file_path())
    }

    /// Loads the configuration from a specific file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ConfigNotFound` if the file does not exist,
    /// `ConfigError::ConfigInvalid` if it is not a JSON object with a
    /// `folder_names` mapping of category names to extension arrays, and
    /// `ConfigError::IoError` if it cannot be read.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::ConfigNotFound(path.to_path_buf()));
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::IoError(e.to_string()))?;

        let raw: RawConfig =
            serde_json::from_str(&content).map_err(|e| ConfigError::ConfigInvalid(e.to_string()))?;

        let mut entries = Vec::with_capacity(raw.folder_names.len());
        for (name, value) in raw.folder_names {
            if name.is_empty() {
                return Err(ConfigError::ConfigInvalid(
                    "category names must be non-empty".to_string(),
                ));
            }
            let extensions: Vec<String> = serde_json::from_value(value).map_err(|_| {
                ConfigError::ConfigInvalid(format!(
                    "category '{}' must map to an array of extension strings",
                    name
                ))
            })?;
            entries.push((name, extensions));
        }

        Ok(Self {
            categories: CategoryMap::from_entries(entries),
        })
    }

    /// The category mapping this configuration carries.
    pub fn categories(&self) -> &CategoryMap {
        &self.categories
    }
}

/// Absolute path of the configuration file.
pub fn config_file_path() -> PathBuf {
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(CONFIG_FILE_NAME)
}

/// Resolves the user's home directory.
///
/// `$HOME` takes precedence when set and non-empty (works under `sudo -u`
/// and in tests); the `dirs` crate is the fallback.
pub fn home_dir() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("HOME")
        && !home.is_empty()
    {
        return Some(PathBuf::from(home));
    }
    dirs::home_dir()
}
