//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main):
//!     Load config → Connect database → Spawn log sink → Start server
//!
//! Shutdown:
//!     Ctrl-C / trigger → server stops accepting → sink closed and drained → exit
//! ```
//!
//! # Design Decisions
//! - Ordered shutdown: the server drains its requests before the sink is
//!   closed, so in-flight handlers can still enqueue their records

pub mod shutdown;

pub use shutdown::Shutdown;
