//! Application state for the web layer.

use std::sync::Arc;

use crate::preferences::FilePreferences;
use crate::search::SearchOrchestrator;
use crate::source::StationBackend;

/// The orchestrator as wired up by the server binary.
pub type Orchestrator = SearchOrchestrator<StationBackend, FilePreferences>;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Owner of the published search state
    pub orchestrator: Arc<Orchestrator>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(orchestrator: Orchestrator) -> Self {
        Self {
            orchestrator: Arc::new(orchestrator),
        }
    }
}
