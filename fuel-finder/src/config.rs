//! Application configuration from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

/// Default listen address.
const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Default preference file.
const DEFAULT_PREFS_PATH: &str = "fuel-finder-prefs.json";

/// Default HTTP timeout for the station API (seconds).
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Errors in configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("unknown environment {0:?} (expected development or production)")]
    UnknownEnvironment(String),

    #[error("invalid value for {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Which deployment of the station API to talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    Development,
    #[default]
    Production,
}

impl Environment {
    pub fn base_url(&self) -> &'static str {
        match self {
            Environment::Development => "http://localhost:8080",
            Environment::Production => "https://espaoil-server.onrender.com",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
        }
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" | "dev" => Ok(Environment::Development),
            "production" | "prod" => Ok(Environment::Production),
            other => Err(ConfigError::UnknownEnvironment(other.to_string())),
        }
    }
}

/// Process configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: Environment,
    /// Base URL of the station API
    pub base_url: String,
    /// HTTP timeout for the station API (seconds)
    pub timeout_secs: u64,
    /// Where preferences are persisted
    pub prefs_path: PathBuf,
    /// JSON file of station records; when set, the mock source is used
    pub mock_data: Option<PathBuf>,
    /// Address the HTTP API listens on
    pub listen_addr: SocketAddr,
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let environment = match get("FUEL_FINDER_ENV") {
            Some(value) => value.parse()?,
            None => Environment::default(),
        };

        let base_url = get("FUEL_FINDER_BASE_URL")
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| environment.base_url().to_string());

        let timeout_secs = match get("FUEL_FINDER_TIMEOUT_SECS") {
            Some(value) => value.parse().map_err(|_| ConfigError::Invalid {
                var: "FUEL_FINDER_TIMEOUT_SECS",
                value,
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let prefs_path = get("FUEL_FINDER_PREFS")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFS_PATH));

        let mock_data = get("FUEL_FINDER_MOCK_DATA")
            .filter(|path| !path.is_empty())
            .map(PathBuf::from);

        let addr = get("FUEL_FINDER_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let listen_addr = addr.parse().map_err(|_| ConfigError::Invalid {
            var: "FUEL_FINDER_ADDR",
            value: addr,
        })?;

        Ok(Self {
            environment,
            base_url,
            timeout_secs,
            prefs_path,
            mock_data,
            listen_addr,
        })
    }
}
