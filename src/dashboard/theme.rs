//! Theme state and its persistence

use crate::config::{PreferenceStore, DARK_MODE_DISABLED, DARK_MODE_ENABLED, DARK_MODE_KEY};
use crate::error::Result;

/// Owns the dark-mode flag and writes every change through to storage
pub struct ThemeController {
    dark: bool,
    store: Box<dyn PreferenceStore>,
}

impl ThemeController {
    /// Restore the persisted theme; anything but `enabled` means light
    pub fn new(store: Box<dyn PreferenceStore>) -> Self {
        let dark = store.get(DARK_MODE_KEY).as_deref() == Some(DARK_MODE_ENABLED);
        tracing::debug!("Restored theme: {}", if dark { "dark" } else { "light" });
        Self { dark, store }
    }

    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Apply a theme and persist it
    ///
    /// The in-memory flag changes even if persisting fails.
    pub fn set_dark(&mut self, enabled: bool) -> Result<()> {
        self.dark = enabled;
        let value = if enabled {
            DARK_MODE_ENABLED
        } else {
            DARK_MODE_DISABLED
        };
        self.store.set(DARK_MODE_KEY, value)
    }
}

impl std::fmt::Debug for ThemeController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeController")
            .field("dark", &self.dark)
            .finish_non_exhaustive()
    }
}
