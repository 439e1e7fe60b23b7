//! Store connection configuration

use serde::Deserialize;

/// Endpoint of a local store instance
const DEFAULT_URI: &str = "mongodb://localhost:27017";

/// Environment variable overriding the store endpoint
const URI_ENV: &str = "PLAYLIST_STORE_URI";

/// Connection settings for the document store
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Store endpoint, e.g. "mongodb://localhost:27017"
    pub uri: String,
    /// Logical database name
    pub database: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            uri: DEFAULT_URI.to_string(),
            database: "ttchannel".to_string(),
        }
    }
}

impl StoreConfig {
    /// Config for the given endpoint and database
    pub fn new(uri: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            database: database.into(),
        }
    }

    /// Config reading the endpoint from `PLAYLIST_STORE_URI`, falling back
    /// to the local default
    pub fn from_env(database: impl Into<String>) -> Self {
        let uri = std::env::var(URI_ENV).unwrap_or_else(|_| DEFAULT_URI.to_string());
        Self {
            uri,
            database: database.into(),
        }
    }
}
