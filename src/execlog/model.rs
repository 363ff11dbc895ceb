//! Timing record type.

use chrono::{DateTime, Utc};

/// A timing record for one logical operation.
///
/// Created by the timing decorator, owned transiently by the sink queue,
/// persisted by the background worker. The storage row id and its
/// `created_at` column are assigned by the database on insert.
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionLog {
    pub task_name: String,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    pub duration_seconds: f64,
}
