//! Configuration module for the telemetry dashboard
//!
//! This module handles:
//! - The dashboard configuration file (`config.toml`)
//! - Durable user preferences (the dark-mode toggle), see [`preferences`]
//!
//! # Locations
//!
//! The configuration file lives in the platform config directory and
//! preferences in the platform data directory, both under
//! `dev.hxyulin.telemetry-dashboard`:
//!
//! - **Linux**: `~/.config/...` and `~/.local/share/...`
//! - **macOS**: `~/Library/Application Support/...`
//! - **Windows**: `%APPDATA%\...`
//!
//! # Example
//!
//! ```toml
//! [backend]
//! base_url = "http://192.168.1.20:5000"
//! poll_interval_ms = 900
//!
//! [alerts]
//! max_visible = 5
//!
//! [thresholds]
//! profile = "legacy"
//! ```

pub mod preferences;

pub use preferences::{
    FilePreferenceStore, MemoryPreferenceStore, PreferenceStore, DARK_MODE_DISABLED,
    DARK_MODE_ENABLED, DARK_MODE_KEY,
};

use crate::classify::ThresholdProfile;
use crate::error::{DashboardError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application identifier for config and data directories
pub const APP_ID: &str = "dev.hxyulin.telemetry-dashboard";

/// Config filename
pub const CONFIG_FILE: &str = "config.toml";

/// Preferences filename
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Environment variable overriding [`BackendConfig::base_url`]
pub const BACKEND_URL_ENV: &str = "TELEMETRY_BACKEND_URL";

/// Default polling interval in milliseconds
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 800;

/// Default request timeout in milliseconds
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 2_000;

/// Default number of points kept per chart
pub const DEFAULT_CHART_CAPACITY: usize = 20;

/// Default number of history log entries
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

// ==================== Directories ====================

/// Get the application data directory path
pub fn app_data_dir() -> Option<PathBuf> {
    dirs_next::data_dir().map(|p| p.join(APP_ID))
}

/// Get the application config directory path
pub fn app_config_dir() -> Option<PathBuf> {
    dirs_next::config_dir().map(|p| p.join(APP_ID))
}

/// Ensure the app data directory exists
pub fn ensure_app_data_dir() -> Result<PathBuf> {
    let dir = app_data_dir().ok_or_else(|| {
        DashboardError::Config("Could not determine app data directory".to_string())
    })?;

    if !dir.exists() {
        std::fs::create_dir_all(&dir).map_err(|e| {
            DashboardError::Config(format!("Failed to create app data directory: {}", e))
        })?;
    }

    Ok(dir)
}

/// Get the path to the configuration file
pub fn config_path() -> Option<PathBuf> {
    app_config_dir().map(|p| p.join(CONFIG_FILE))
}

// ==================== Dashboard Config ====================

/// Complete dashboard configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub backend: BackendConfig,
    pub charts: ChartConfig,
    pub logs: LogConfig,
    pub alerts: AlertConfig,
    pub thresholds: ThresholdConfig,
}

impl DashboardConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content)
            .map_err(|e| DashboardError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load configuration from a file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| DashboardError::Config(format!("Failed to read config: {}", e)))?;
        Self::from_toml_str(&content)
    }

    /// Load from the default location, falling back to defaults on any error
    ///
    /// A missing file is not an error. The backend URL environment override
    /// is applied in every case.
    pub fn load_or_default() -> Self {
        let mut config = match config_path() {
            Some(path) if path.exists() => Self::load(&path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load config from {:?}, using defaults: {}", path, e);
                Self::default()
            }),
            _ => Self::default(),
        };
        config.apply_env_overrides();
        config
    }

    /// Save configuration as TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| DashboardError::Serialization(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path.as_ref(), content)
            .map_err(|e| DashboardError::Config(format!("Failed to write config: {}", e)))
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) {
        if let Ok(url) = std::env::var(BACKEND_URL_ENV) {
            let url = url.trim();
            if !url.is_empty() {
                tracing::info!("Backend URL overridden from {}: {}", BACKEND_URL_ENV, url);
                self.backend.base_url = url.to_string();
            }
        }
    }
}

/// Telemetry backend connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendConfig {
    /// Base URL serving `/data` and `/notifications`
    pub base_url: String,
    /// Interval between poll ticks
    pub poll_interval_ms: u64,
    /// Per-request timeout
    pub request_timeout_ms: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl BackendConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms.max(1))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms.max(1))
    }
}

/// Chart settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Points kept per chart before the oldest is evicted
    pub capacity: usize,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CHART_CAPACITY,
        }
    }
}

/// Log view settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Entries kept in the reading history
    pub history_capacity: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            history_capacity: DEFAULT_HISTORY_CAPACITY,
        }
    }
}

/// Toast alert settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AlertConfig {
    /// Delay between inserting a toast and starting its entrance
    pub entrance_delay_ms: u64,
    /// Time on screen for every severity except escalation
    pub normal_duration_ms: u64,
    /// Time on screen for escalation notifications
    pub escalation_duration_ms: u64,
    /// Length of the slide-out animation
    pub exit_transition_ms: u64,
    /// Maximum number of toasts on screen (unbounded when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_visible: Option<usize>,
    /// Maximum number of remembered notification identities (unbounded when unset)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tracked_notifications: Option<usize>,
}

impl Default for AlertConfig {
    fn default() -> Self {
        Self {
            entrance_delay_ms: 100,
            normal_duration_ms: 10_000,
            escalation_duration_ms: 20_000,
            exit_transition_ms: 300,
            max_visible: None,
            max_tracked_notifications: None,
        }
    }
}

/// Threshold band selection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdConfig {
    pub profile: ThresholdProfile,
}

// ==================== Tests ====================
