//! HTTP client for the fuel station API.

use reqwest::Url;
use tracing::{debug, warn};

use super::StationSource;
use super::error::FetchError;
use super::types::{NearbyQuery, StationRecord};

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Path of the nearby-stations endpoint, relative to the base URL.
const NEARBY_PATH: &str = "gas-stations/near";

/// Configuration for the HTTP station source.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// Base URL for the API, without the endpoint path
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl SourceConfig {
    /// Create a new config for the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Station source backed by the remote HTTP API.
#[derive(Debug, Clone)]
pub struct HttpStationSource {
    http: reqwest::Client,
    base_url: String,
}

impl HttpStationSource {
    /// Create a new HTTP station source.
    pub fn new(config: SourceConfig) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
        })
    }

    /// Build the request URL for a query.
    fn nearby_url(&self, query: &NearbyQuery) -> Result<Url, FetchError> {
        let raw = format!("{}/{}", self.base_url.trim_end_matches('/'), NEARBY_PATH);
        let mut url = Url::parse(&raw).map_err(|e| FetchError::MalformedUrl(e.to_string()))?;

        if url.cannot_be_a_base() {
            return Err(FetchError::MalformedUrl(format!(
                "{raw} cannot carry a query"
            )));
        }

        url.query_pairs_mut().extend_pairs(query.query_pairs());
        Ok(url)
    }

    /// Fetch stations near a point.
    pub async fn fetch(&self, query: &NearbyQuery) -> Result<Vec<StationRecord>, FetchError> {
        let url = self.nearby_url(query)?;
        debug!(%url, "fetching nearby stations");

        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| {
            warn!(error = %e, "station response did not decode");
            FetchError::Decoding {
                message: e.to_string(),
                body: Some(body.chars().take(500).collect()),
            }
        })
    }
}

impl StationSource for HttpStationSource {
    async fn fetch_nearby(&self, query: &NearbyQuery) -> Result<Vec<StationRecord>, FetchError> {
        self.fetch(query).await
    }
}
