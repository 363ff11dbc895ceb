//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address, request timeout).
    pub listener: ListenerConfig,

    /// PostgreSQL connection parameters.
    pub database: DatabaseConfig,

    /// Upstream places API settings.
    pub upstream: UpstreamConfig,

    /// Execution-log sink settings.
    pub log_sink: LogSinkConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Total time budget for one inbound request in seconds.
    ///
    /// Generous by default: a request spans the whole upstream pagination
    /// walk.
    pub request_timeout_secs: u64,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            request_timeout_secs: 120,
        }
    }
}

/// PostgreSQL connection parameters.
///
/// Each field can be overridden by the matching `DB_*` environment variable
/// (`DB_USERNAME`, `DB_PASSWORD`, `DB_HOST`, `DB_PORT`, `DB_NAME`).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DatabaseConfig {
    pub username: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub name: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            username: "postgres".to_string(),
            password: String::new(),
            host: "localhost".to_string(),
            port: 5432,
            name: "places".to_string(),
        }
    }
}

/// Upstream places API settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the paginated places endpoint.
    pub base_url: String,

    /// First page number of the walk.
    pub start_page: u32,

    /// Per-page request timeout in seconds.
    pub request_timeout_secs: u64,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://kudago.com/public-api/v1.4/places".to_string(),
            start_page: 1,
            request_timeout_secs: 30,
        }
    }
}

/// Execution-log sink settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSinkConfig {
    /// Queue capacity. A full queue blocks the producing request handler.
    pub capacity: usize,
}

impl Default for LogSinkConfig {
    fn default() -> Self {
        Self { capacity: 100 }
    }
}
