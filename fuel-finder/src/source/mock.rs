//! Mock station source for running without the remote API.
//!
//! Serves a fixed set of records, either built in memory or loaded from a
//! JSON file, as if they were live API responses.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;

use super::StationSource;
use super::error::FetchError;
use super::types::{NearbyQuery, StationRecord};

#[derive(Debug, Default)]
struct MockInner {
    records: Vec<StationRecord>,
    failure: Option<String>,
    delay: Option<Duration>,
    queries: Vec<NearbyQuery>,
}

/// Mock station source that serves preloaded records.
///
/// Every query gets the same records regardless of position, radius or
/// fuel type. Queries are recorded so tests can inspect them.
#[derive(Debug, Clone, Default)]
pub struct MockStationSource {
    inner: Arc<RwLock<MockInner>>,
}

impl MockStationSource {
    /// Create a mock that serves the given records.
    pub fn new(records: Vec<StationRecord>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(MockInner {
                records,
                ..MockInner::default()
            })),
        }
    }

    /// Load records from a JSON file holding an array of station records.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, FetchError> {
        let path = path.as_ref();

        let json = std::fs::read_to_string(path).map_err(|e| {
            FetchError::Unavailable(format!("failed to read {}: {e}", path.display()))
        })?;

        let records: Vec<StationRecord> =
            serde_json::from_str(&json).map_err(|e| FetchError::Decoding {
                message: format!("failed to parse {}: {e}", path.display()),
                body: None,
            })?;

        Ok(Self::new(records))
    }

    /// Replace the records served by later queries.
    pub async fn set_records(&self, records: Vec<StationRecord>) {
        self.inner.write().await.records = records;
    }

    /// Make later queries fail with `message`, or succeed again with `None`.
    pub async fn set_failure(&self, message: Option<String>) {
        self.inner.write().await.failure = message;
    }

    /// Delay every response by `delay`.
    pub async fn set_delay(&self, delay: Option<Duration>) {
        self.inner.write().await.delay = delay;
    }

    /// Queries received so far, oldest first.
    pub async fn queries(&self) -> Vec<NearbyQuery> {
        self.inner.read().await.queries.clone()
    }

    async fn respond(&self, query: &NearbyQuery) -> Result<Vec<StationRecord>, FetchError> {
        let delay = {
            let mut inner = self.inner.write().await;
            inner.queries.push(*query);
            inner.delay
        };

        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let inner = self.inner.read().await;
        match &inner.failure {
            Some(message) => Err(FetchError::Unavailable(message.clone())),
            None => Ok(inner.records.clone()),
        }
    }
}

impl StationSource for MockStationSource {
    async fn fetch_nearby(&self, query: &NearbyQuery) -> Result<Vec<StationRecord>, FetchError> {
        self.respond(query).await
    }
}
