//! Driving searches from location updates.

use futures::{Stream, StreamExt};
use tracing::{info, warn};

use crate::domain::Coordinate;
use crate::preferences::PreferenceStore;
use crate::source::StationSource;

use super::orchestrator::SearchOrchestrator;

/// Why a location provider could not produce a position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("location access denied")]
    Denied,

    #[error("location services are disabled")]
    ServicesDisabled,

    #[error("location unavailable: {0}")]
    Failed(String),
}

/// Run a search for every position the provider reports.
///
/// Provider errors are logged and skipped; they never touch the search
/// state. Each search completes before the next update is taken. Returns
/// the number of searches run once the stream ends.
pub async fn follow_locations<S, P, L>(orchestrator: &SearchOrchestrator<S, P>, updates: L) -> usize
where
    S: StationSource,
    P: PreferenceStore,
    L: Stream<Item = Result<Coordinate, LocationError>>,
{
    let mut updates = std::pin::pin!(updates);
    let mut searches = 0;

    while let Some(update) = updates.next().await {
        match update {
            Ok(position) => {
                orchestrator.search(position).await;
                searches += 1;
            }
            Err(e) => warn!(error = %e, "location update failed"),
        }
    }

    info!(searches, "location updates ended");
    searches
}
