//! Station search: orchestration, ranking and radius policy.
//!
//! A search fetches records around a reference point, validates them into
//! stations, ranks them by the selected criterion and publishes the result
//! as a `SearchState` snapshot.

mod config;
pub mod location;
mod orchestrator;
mod rank;

pub use config::{SearchConfig, radius_meters};
pub use location::{LocationError, follow_locations};
pub use orchestrator::{FETCH_ERROR_MESSAGE, SearchOrchestrator, SearchPhase, SearchState};
pub use rank::{SortCriterion, rank_stations};
