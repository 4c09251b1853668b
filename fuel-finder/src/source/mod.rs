//! Remote fuel station data source.
//!
//! Fetches station records near a point, filtered by radius and fuel type,
//! and turns them into validated domain stations.
//!
//! Records come back with every field as text, and numbers may use a
//! decimal comma. Malformed records are dropped during conversion rather
//! than failing the whole response.

mod client;
mod convert;
mod error;
mod mock;
mod types;

use std::future::Future;

pub use client::{HttpStationSource, SourceConfig};
pub use convert::{RejectReason, validate_all, validate_record};
pub use error::FetchError;
pub use mock::MockStationSource;
pub use types::{NearbyQuery, StationRecord};

/// Trait for fetching station records near a point.
///
/// This abstraction allows the search orchestrator to be tested with mock
/// data.
pub trait StationSource: Send + Sync {
    /// Fetch the records within `query.radius_meters` of the query point
    /// that sell `query.fuel_type`.
    fn fetch_nearby(
        &self,
        query: &NearbyQuery,
    ) -> impl Future<Output = Result<Vec<StationRecord>, FetchError>> + Send;
}

/// The station source selected at startup.
#[derive(Debug, Clone)]
pub enum StationBackend {
    Http(HttpStationSource),
    Mock(MockStationSource),
}

impl StationSource for StationBackend {
    async fn fetch_nearby(&self, query: &NearbyQuery) -> Result<Vec<StationRecord>, FetchError> {
        match self {
            StationBackend::Http(source) => source.fetch_nearby(query).await,
            StationBackend::Mock(source) => source.fetch_nearby(query).await,
        }
    }
}
