//! Execution timing records and their asynchronous persistence pipeline.
//!
//! # Data Flow
//! ```text
//! timed(task, action) ──▶ ExecutionLog ──▶ LogSink::enqueue
//!                                              │ bounded channel (FIFO)
//!                                              ▼
//!                                        worker task ──▶ LogStore (PostgreSQL)
//! ```
//!
//! # Design Decisions
//! - A single consumer drains the channel; the channel is the only shared
//!   mutable state between request handlers and the worker
//! - A full queue blocks the producer, coupling request latency to sink
//!   throughput; see [`sink::LogSink::enqueue`]
//! - Persistence failures are reported and the record dropped; the pipeline
//!   offers no durability beyond process lifetime
//! - Shutdown closes the channel first and only then waits for the
//!   in-flight count to reach zero

pub mod model;
pub mod sink;
pub mod store;
pub mod timer;

pub use model::ExecutionLog;
pub use sink::{LogSink, SinkError};
pub use store::{LogStore, PgLogStore, StoreError};
pub use timer::timed;
