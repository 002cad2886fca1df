//! Durable key-value preferences
//!
//! The dashboard persists exactly one user preference, the theme, under
//! [`DARK_MODE_KEY`] with the values [`DARK_MODE_ENABLED`] or
//! [`DARK_MODE_DISABLED`]. Storage sits behind [`PreferenceStore`] so the
//! theme controller can be exercised without touching the filesystem.

use crate::error::{DashboardError, Result};
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Key under which the theme choice is stored
pub const DARK_MODE_KEY: &str = "darkMode";

/// Stored value for dark mode on
pub const DARK_MODE_ENABLED: &str = "enabled";

/// Stored value for dark mode off
pub const DARK_MODE_DISABLED: &str = "disabled";

/// Durable string key-value storage
#[cfg_attr(test, mockall::automock)]
pub trait PreferenceStore {
    /// Read a stored value
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value, overwriting any previous one
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

/// JSON-file backed preference store
///
/// The whole map is rewritten on every `set`; the file is tiny.
#[derive(Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// Open a store at `path`, starting empty if the file does not exist
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let values = if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| {
                DashboardError::Config(format!("Failed to read preferences: {}", e))
            })?;
            serde_json::from_str(&content).map_err(|e| {
                DashboardError::Config(format!("Failed to parse preferences: {}", e))
            })?
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, values })
    }

    /// Open the store in the app data directory, or an empty one on error
    pub fn open_default() -> Self {
        let path = match super::ensure_app_data_dir() {
            Ok(dir) => dir.join(super::PREFERENCES_FILE),
            Err(e) => {
                tracing::warn!("Preferences will not be persisted: {}", e);
                return Self {
                    path: PathBuf::new(),
                    values: BTreeMap::new(),
                };
            }
        };

        Self::open(&path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load preferences, using defaults: {}", e);
            Self {
                path,
                values: BTreeMap::new(),
            }
        })
    }

    fn save(&self) -> Result<()> {
        if self.path.as_os_str().is_empty() {
            return Err(DashboardError::Config(
                "No preferences location available".to_string(),
            ));
        }

        let content = serde_json::to_string_pretty(&self.values).map_err(|e| {
            DashboardError::Serialization(format!("Failed to serialize preferences: {}", e))
        })?;

        std::fs::write(&self.path, content)
            .map_err(|e| DashboardError::Config(format!("Failed to write preferences: {}", e)))
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        self.save()
    }
}

/// In-memory preference store (nothing survives the process)
#[derive(Debug, Clone, Default)]
pub struct MemoryPreferenceStore {
    values: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with one value
    pub fn with_value(key: &str, value: &str) -> Self {
        let mut values = BTreeMap::new();
        values.insert(key.to_string(), value.to_string());
        Self { values }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
