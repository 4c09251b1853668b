//! Search lifecycle and published search state.
//!
//! The orchestrator owns one `SearchState` and publishes every change to it
//! through a `tokio::sync::watch` channel. Each transition replaces the
//! state in a single `send_modify`, so an observer never sees a result set
//! that is half updated.
//!
//! A search moves `Idle | Ready | Failed → Searching → Ready | Failed`.
//! Overlapping searches are neither deduplicated nor cancelled: whichever
//! fetch resolves last is what ends up published.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::domain::{Coordinate, FuelType, Station};
use crate::preferences::PreferenceStore;
use crate::source::{NearbyQuery, StationSource, validate_all};

use super::config::{SearchConfig, radius_meters};
use super::rank::{SortCriterion, rank_stations};

/// Message shown for any failed fetch.
pub const FETCH_ERROR_MESSAGE: &str = "Could not load fuel stations. Please try again.";

/// Where the current search is in its lifecycle.
///
/// `Searching` is the loading state and `Failed` is the only phase that
/// carries an error, so the two can never be observed together.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SearchPhase {
    /// No search has been started yet
    #[default]
    Idle,
    /// A fetch is in flight
    Searching,
    /// The last fetch to resolve succeeded
    Ready,
    /// The last fetch to resolve failed
    Failed { message: String },
}

/// Snapshot of the search state.
#[derive(Debug, Clone)]
pub struct SearchState {
    pub phase: SearchPhase,

    /// Point the published stations were searched around. Updated only
    /// when a search succeeds.
    pub reference: Option<Coordinate>,

    /// Radius exactly as the user typed it.
    pub radius_text: String,

    /// Effective radius derived from `radius_text` (km).
    pub radius_km: f64,

    pub fuel_type: FuelType,

    pub sort: SortCriterion,

    /// Stations from the last successful fetch, in source order.
    pub fetched: Vec<Arc<Station>>,

    /// `fetched` ranked by `sort`; this is what displays show.
    pub stations: Vec<Arc<Station>>,

    /// When `stations` was last replaced by a fetch.
    pub updated_at: Option<DateTime<Utc>>,
}

impl SearchState {
    pub fn is_loading(&self) -> bool {
        self.phase == SearchPhase::Searching
    }

    /// User-visible error from the last failed search, if that is the
    /// current phase.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            SearchPhase::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Runs station searches and owns the resulting state.
///
/// Generic over the station source and the preference store so both can be
/// replaced in tests.
pub struct SearchOrchestrator<S, P> {
    source: S,
    preferences: P,
    config: SearchConfig,
    state: watch::Sender<SearchState>,
}

impl<S, P> SearchOrchestrator<S, P>
where
    S: StationSource,
    P: PreferenceStore,
{
    /// Create an orchestrator, restoring fuel type and radius from
    /// `preferences`.
    pub fn new(source: S, preferences: P, config: SearchConfig) -> Self {
        let fuel_type = match preferences.fuel_type() {
            Some(token) => FuelType::from_wire_token(&token).unwrap_or_else(|e| {
                warn!(error = %e, "ignoring stored fuel type");
                config.default_fuel_type
            }),
            None => config.default_fuel_type,
        };

        let radius_text = preferences
            .radius_text()
            .unwrap_or_else(|| config.default_radius_text.clone());
        let radius_km = config.effective_radius_km(&radius_text);

        let initial = SearchState {
            phase: SearchPhase::Idle,
            reference: None,
            radius_text,
            radius_km,
            fuel_type,
            sort: config.default_sort,
            fetched: Vec::new(),
            stations: Vec::new(),
            updated_at: None,
        };

        let (state, _) = watch::channel(initial);

        Self {
            source,
            preferences,
            config,
            state,
        }
    }

    /// Receive every state change from now on.
    pub fn subscribe(&self) -> watch::Receiver<SearchState> {
        self.state.subscribe()
    }

    /// Copy of the current state.
    pub fn snapshot(&self) -> SearchState {
        self.state.borrow().clone()
    }

    pub fn preferences(&self) -> &P {
        &self.preferences
    }

    /// Search for stations around `reference`.
    ///
    /// Issues exactly one fetch using the current radius and fuel type.
    /// Stations already published stay visible until the fetch succeeds;
    /// on failure they are kept, together with the reference they were
    /// searched around, and the phase carries a generic message.
    pub async fn search(&self, reference: Coordinate) -> SearchState {
        let query = {
            let state = self.state.borrow();
            NearbyQuery {
                latitude: reference.latitude(),
                longitude: reference.longitude(),
                radius_meters: radius_meters(state.radius_km),
                fuel_type: state.fuel_type,
            }
        };

        // The reference moves only with the stations measured from it.
        self.state.send_modify(|state| state.phase = SearchPhase::Searching);
        debug!(%reference, radius_m = query.radius_meters, fuel = query.fuel_type.wire_token(), "searching");

        match self.source.fetch_nearby(&query).await {
            Ok(records) => {
                let stations: Vec<Arc<Station>> =
                    validate_all(&records).into_iter().map(Arc::new).collect();
                debug!(
                    received = records.len(),
                    valid = stations.len(),
                    "search complete"
                );

                self.state.send_modify(|state| {
                    state.reference = Some(reference);
                    state.stations = rank_stations(&stations, state.sort, Some(&reference));
                    state.fetched = stations;
                    state.phase = SearchPhase::Ready;
                    state.updated_at = Some(Utc::now());
                });
            }
            Err(e) => {
                warn!(error = %e, "station search failed");
                self.state.send_modify(|state| {
                    state.phase = SearchPhase::Failed {
                        message: FETCH_ERROR_MESSAGE.to_string(),
                    };
                });
            }
        }

        self.snapshot()
    }

    /// Re-rank the already fetched stations. Never fetches.
    pub fn set_sort_criterion(&self, criterion: SortCriterion) -> SearchState {
        self.state.send_modify(|state| {
            state.sort = criterion;
            state.stations = rank_stations(&state.fetched, criterion, state.reference.as_ref());
        });

        self.snapshot()
    }

    /// Change the fuel type used by the next search. Never fetches.
    pub fn set_fuel_type(&self, fuel_type: FuelType) -> SearchState {
        self.state.send_modify(|state| state.fuel_type = fuel_type);

        if let Err(e) = self.preferences.set_fuel_type(fuel_type.wire_token()) {
            warn!(error = %e, "failed to persist fuel type");
        }

        self.snapshot()
    }

    /// Change the radius used by the next search. Never fetches.
    ///
    /// The text is stored as typed; see
    /// [`SearchConfig::effective_radius_km`] for how it becomes a radius.
    pub fn set_radius(&self, text: &str) -> SearchState {
        let radius_km = self.config.effective_radius_km(text);

        self.state.send_modify(|state| {
            state.radius_text = text.to_string();
            state.radius_km = radius_km;
        });

        if let Err(e) = self.preferences.set_radius_text(text) {
            warn!(error = %e, "failed to persist search radius");
        }

        self.snapshot()
    }
}

#[cfg(test)]
#[path = "orchestrator_tests.rs"]
mod tests;
