//! In-memory preference store.

use std::sync::{Mutex, PoisonError};

use super::{PreferenceError, PreferenceStore, StoredPreferences};

/// Preference store that lives only as long as the process.
#[derive(Debug, Default)]
pub struct MemoryPreferences {
    inner: Mutex<StoredPreferences>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `prefs`.
    pub fn with(prefs: StoredPreferences) -> Self {
        Self {
            inner: Mutex::new(prefs),
        }
    }

    /// Copy of the current values.
    pub fn snapshot(&self) -> StoredPreferences {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl PreferenceStore for MemoryPreferences {
    fn fuel_type(&self) -> Option<String> {
        self.snapshot().fuel_type
    }

    fn radius_text(&self) -> Option<String> {
        self.snapshot().search_radius_km
    }

    fn set_fuel_type(&self, wire_token: &str) -> Result<(), PreferenceError> {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        guard.fuel_type = Some(wire_token.to_string());
        Ok(())
    }

    fn set_radius_text(&self, text: &str) -> Result<(), PreferenceError> {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        guard.search_radius_km = Some(text.to_string());
        Ok(())
    }
}
