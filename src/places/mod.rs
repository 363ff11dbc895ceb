//! Upstream places API integration.
//!
//! # Data Flow
//! ```text
//! PlacesClient::fetch_all
//!     → GET {base_url}?page={n}   (Accept: application/json)
//!     → decode {results, next}
//!     → append results, advance page
//!     → stop on empty next
//! ```
//!
//! # Design Decisions
//! - Fail fast: any transport, status, or decode error aborts the whole
//!   fetch; no partial results, no retries
//! - Two concurrent requests fetch independently; there is no caching or
//!   request coalescing

pub mod client;
pub mod model;

pub use client::{FetchError, PlacesClient};
pub use model::Place;
