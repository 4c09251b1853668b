//! JSON-file preference store.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use tracing::warn;

use super::{PreferenceError, PreferenceStore, StoredPreferences};

/// Preference store persisted as a small JSON file.
///
/// The file is read once when the store is opened and rewritten in full on
/// every change. A missing or unreadable file starts from empty preferences.
#[derive(Debug)]
pub struct FilePreferences {
    path: PathBuf,
    current: Mutex<StoredPreferences>,
}

impl FilePreferences {
    /// Open the store at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let current = match load(&path) {
            Ok(prefs) => prefs,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "ignoring unreadable preference file");
                StoredPreferences::default()
            }
        };

        Self {
            path,
            current: Mutex::new(current),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn update(&self, apply: impl FnOnce(&mut StoredPreferences)) -> Result<(), PreferenceError> {
        let mut guard = self.current.lock().unwrap_or_else(PoisonError::into_inner);
        apply(&mut guard);

        let json = serde_json::to_string_pretty(&*guard)?;
        std::fs::write(&self.path, json)?;
        Ok(())
    }

    fn read(&self) -> StoredPreferences {
        self.current
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn load(path: &Path) -> Result<StoredPreferences, PreferenceError> {
    match std::fs::read_to_string(path) {
        Ok(json) => Ok(serde_json::from_str(&json)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(StoredPreferences::default()),
        Err(e) => Err(e.into()),
    }
}

impl PreferenceStore for FilePreferences {
    fn fuel_type(&self) -> Option<String> {
        self.read().fuel_type
    }

    fn radius_text(&self) -> Option<String> {
        self.read().search_radius_km
    }

    fn set_fuel_type(&self, wire_token: &str) -> Result<(), PreferenceError> {
        self.update(|prefs| prefs.fuel_type = Some(wire_token.to_string()))
    }

    fn set_radius_text(&self, text: &str) -> Result<(), PreferenceError> {
        self.update(|prefs| prefs.search_radius_km = Some(text.to_string()))
    }
}
