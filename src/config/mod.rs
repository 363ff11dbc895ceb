//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, path from --config)
//!     → loader.rs (parse & deserialize, DB_* env overrides)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → passed by value/reference into the components that need it
//! ```
//!
//! # Design Decisions
//! - Config is an explicit struct built once at startup; no ambient accessor
//! - All fields have defaults so a minimal (or absent) config file is valid
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use schema::AppConfig;
pub use schema::DatabaseConfig;
pub use schema::ListenerConfig;
pub use schema::LogSinkConfig;
pub use schema::UpstreamConfig;
