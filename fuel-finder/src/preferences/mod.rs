//! User preference persistence.
//!
//! The search orchestrator restores the selected fuel type and the search
//! radius text from a preference store when it starts, and writes them back
//! whenever they change.

mod file;
mod memory;

use serde::{Deserialize, Serialize};

pub use file::FilePreferences;
pub use memory::MemoryPreferences;

/// Errors from writing preferences.
#[derive(Debug, thiserror::Error)]
pub enum PreferenceError {
    #[error("preference file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// The persisted preference values.
///
/// Absent values mean "never set"; callers fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredPreferences {
    /// Wire token of the selected fuel type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fuel_type: Option<String>,

    /// Search radius exactly as the user typed it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_radius_km: Option<String>,
}

/// Key-value store for the two search preferences.
pub trait PreferenceStore: Send + Sync {
    /// Stored fuel type wire token, if any.
    fn fuel_type(&self) -> Option<String>;

    /// Stored radius text, if any.
    fn radius_text(&self) -> Option<String>;

    fn set_fuel_type(&self, wire_token: &str) -> Result<(), PreferenceError>;

    fn set_radius_text(&self, text: &str) -> Result<(), PreferenceError>;
}
