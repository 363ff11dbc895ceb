//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! GET /all?format=…
//!     → server.rs (axum setup, middleware)
//!     → handler: pick format → fetch all pages → serialize
//!     → timing record enqueued onto the log sink
//!     → serialized bytes (or a determinate error status) to the client
//! ```

pub mod server;

pub use server::{AppState, HttpServer};
