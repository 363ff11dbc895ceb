//! Paginated places aggregation service.
//!
//! Proxies a paginated upstream "places" API: every page is fetched into
//! memory, the full list is re-serialized in a caller-chosen wire format, and
//! a timing record for the whole span is persisted asynchronously to
//! PostgreSQL.
//!
//! # Architecture Overview
//!
//! ```text
//!  GET /all?format=…    ┌─────────────────────────────────────────────────┐
//!  ─────────────────────┼─▶ http server                                   │
//!                       │       │ fetch_all                               │
//!                       │       ▼                                         │
//!                       │   places client ───▶ upstream API (page 1..n)   │
//!                       │       │ Vec<Place>                              │
//!                       │       ▼                                         │
//!  serialized bytes     │   codec (json | gob)                            │
//!  ◀────────────────────┼───────┤                                         │
//!                       │       │ ExecutionLog                            │
//!                       │       ▼                                         │
//!                       │   execlog sink ──▶ worker task ──▶ PostgreSQL   │
//!                       │                                                 │
//!                       │  ┌───────────────────────────────────────────┐  │
//!                       │  │    Cross-Cutting Concerns                 │  │
//!                       │  │  ┌────────┐ ┌──────────┐ ┌────────────┐   │  │
//!                       │  │  │ config │ │ tracing  │ │ lifecycle  │   │  │
//!                       │  │  └────────┘ └──────────┘ └────────────┘   │  │
//!                       │  └───────────────────────────────────────────┘  │
//!                       └─────────────────────────────────────────────────┘
//! ```
//!
//! The request path is fully synchronous: the handler blocks until every
//! upstream page has been retrieved. The only background task is the log
//! sink's single worker, which drains a bounded channel of timing records.

// Core subsystems
pub mod codec;
pub mod config;
pub mod http;
pub mod places;

// Persistence
pub mod db;
pub mod execlog;

// Cross-cutting concerns
pub mod lifecycle;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
