//! Wall-clock timing decorator.

use std::future::Future;
use std::time::Instant;

use chrono::Utc;

use crate::execlog::ExecutionLog;

/// Await `action`, measuring its wall-clock duration.
///
/// The action runs to completion on the caller's task — no concurrency is
/// introduced — and its output, errors included, is returned untouched
/// alongside the timing record. `ended_at` derives from the monotonic
/// elapsed time, so it can never precede `started_at`.
pub async fn timed<F, T>(task_name: &str, action: F) -> (T, ExecutionLog)
where
    F: Future<Output = T>,
{
    let started_at = Utc::now();
    let start = Instant::now();

    let output = action.await;

    let elapsed = start.elapsed();
    let entry = ExecutionLog {
        task_name: task_name.to_string(),
        started_at,
        ended_at: started_at
            + chrono::Duration::from_std(elapsed).unwrap_or_else(|_| chrono::Duration::zero()),
        duration_seconds: elapsed.as_secs_f64(),
    };

    (output, entry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_preserves_the_action_output() {
        let (value, entry) = timed("sum", async { 41 + 1 }).await;
        assert_eq!(value, 42);
        assert_eq!(entry.task_name, "sum");
    }

    #[tokio::test]
    async fn test_propagates_action_errors() {
        let (result, entry) = timed("failing", async { Err::<(), &str>("boom") }).await;
        assert_eq!(result, Err("boom"));
        assert!(entry.duration_seconds >= 0.0);
    }

    #[tokio::test]
    async fn test_timestamps_are_ordered() {
        let (_, entry) = timed("noop", async {}).await;
        assert!(entry.duration_seconds >= 0.0);
        assert!(entry.ended_at >= entry.started_at);
    }

    #[tokio::test]
    async fn test_measures_elapsed_time() {
        let (_, entry) = timed("sleep", async {
            tokio::time::sleep(Duration::from_millis(25)).await;
        })
        .await;
        assert!(entry.duration_seconds >= 0.025);
        assert!((entry.ended_at - entry.started_at).num_milliseconds() >= 25);
    }
}
