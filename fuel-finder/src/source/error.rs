//! Station source error types.

/// Errors that can occur when fetching nearby stations.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The request URL could not be built from the base URL and query
    #[error("malformed URL: {0}")]
    MalformedUrl(String),

    /// Response body did not match the expected record shape
    #[error("decoding error: {message}")]
    Decoding {
        message: String,
        body: Option<String>,
    },

    /// Transport-level failure (connection, timeout, ...)
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// API returned a non-success status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Source cannot serve requests right now
    #[error("source unavailable: {0}")]
    Unavailable(String),
}
