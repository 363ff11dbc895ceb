//! Persistence of execution logs.

use async_trait::async_trait;
use sqlx::PgPool;
use thiserror::Error;

use crate::execlog::ExecutionLog;

/// Errors that can occur while persisting a record.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Destination for execution-log records.
///
/// A seam between the sink and its storage backend: production writes to
/// PostgreSQL, tests substitute an in-memory store.
#[async_trait]
pub trait LogStore: Send + Sync {
    async fn insert(&self, entry: &ExecutionLog) -> Result<(), StoreError>;
}

/// PostgreSQL-backed store.
///
/// Expects the table
///
/// ```sql
/// CREATE TABLE execution_logs (
///     id               BIGSERIAL PRIMARY KEY,
///     task_name        TEXT NOT NULL,
///     start_time       TIMESTAMPTZ NOT NULL,
///     end_time         TIMESTAMPTZ NOT NULL,
///     duration_seconds DOUBLE PRECISION NOT NULL,
///     created_at       TIMESTAMPTZ NOT NULL DEFAULT now()
/// );
/// ```
pub struct PgLogStore {
    pool: PgPool,
}

impl PgLogStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LogStore for PgLogStore {
    async fn insert(&self, entry: &ExecutionLog) -> Result<(), StoreError> {
        sqlx::query(
            "INSERT INTO execution_logs (task_name, start_time, end_time, duration_seconds) \
             VALUES ($1, $2, $3, $4)",
        )
        .bind(&entry.task_name)
        .bind(entry.started_at)
        .bind(entry.ended_at)
        .bind(entry.duration_seconds)
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}
