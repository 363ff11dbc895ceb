//! Asynchronous execution-log sink.
//!
//! # Responsibilities
//! - Accept records from request handlers without blocking them beyond the
//!   enqueue step
//! - Drain the queue in arrival order through a single worker task
//! - Guarantee at shutdown that every accepted record was persisted or
//!   reported before the process exits

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use thiserror::Error;
use tokio::sync::{mpsc, Notify};
use tokio::task::JoinHandle;

use crate::execlog::store::LogStore;
use crate::execlog::{timed, ExecutionLog};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SinkError {
    /// The sink has been closed and accepts no further records.
    #[error("log sink is closed")]
    Closed,
}

/// Count of records accepted but not yet persisted or reported.
#[derive(Default)]
struct InFlight {
    count: AtomicUsize,
    idle: Notify,
}

impl InFlight {
    fn add(&self) {
        self.count.fetch_add(1, Ordering::AcqRel);
    }

    fn done(&self) {
        if self.count.fetch_sub(1, Ordering::AcqRel) == 1 {
            self.idle.notify_waiters();
        }
    }

    fn current(&self) -> usize {
        self.count.load(Ordering::Acquire)
    }

    async fn wait_idle(&self) {
        loop {
            if self.current() == 0 {
                return;
            }

            // Register interest before the re-check so a decrement between
            // the check and the await cannot be missed.
            let notified = self.idle.notified();
            tokio::pin!(notified);
            notified.as_mut().enable();

            if self.current() == 0 {
                return;
            }
            notified.await;
        }
    }
}

struct SinkInner {
    tx: Mutex<Option<mpsc::Sender<ExecutionLog>>>,
    in_flight: Arc<InFlight>,
}

/// Rolls the in-flight counter back unless the send completed.
///
/// An enqueue blocked on a full queue can be cancelled (the handler future
/// is dropped on client disconnect); the message was never queued then, so
/// the increment must not outlive the attempt.
struct PendingSend<'a> {
    in_flight: &'a InFlight,
    delivered: bool,
}

impl Drop for PendingSend<'_> {
    fn drop(&mut self) {
        if !self.delivered {
            self.in_flight.done();
        }
    }
}

/// Producer handle for the sink. Cheap to clone; every clone feeds the same
/// worker.
#[derive(Clone)]
pub struct LogSink {
    inner: Arc<SinkInner>,
}

impl LogSink {
    /// Spawn the single background worker and return the producer handle.
    pub fn spawn(store: Arc<dyn LogStore>, capacity: usize) -> (Self, JoinHandle<()>) {
        let (tx, rx) = mpsc::channel(capacity);
        let in_flight = Arc::new(InFlight::default());

        let worker_counter = in_flight.clone();
        let handle = tokio::spawn(run_worker(rx, store, worker_counter));

        let sink = Self {
            inner: Arc::new(SinkInner {
                tx: Mutex::new(Some(tx)),
                in_flight,
            }),
        };
        (sink, handle)
    }

    /// Queue a record for persistence.
    ///
    /// A full queue blocks the caller until the worker catches up; a closed
    /// sink rejects the record with [`SinkError::Closed`].
    pub async fn enqueue(&self, entry: ExecutionLog) -> Result<(), SinkError> {
        let tx = {
            let guard = self.inner.tx.lock().expect("sink sender lock poisoned");
            guard.clone()
        };
        let Some(tx) = tx else {
            return Err(SinkError::Closed);
        };

        self.inner.in_flight.add();
        let mut pending = PendingSend {
            in_flight: &self.inner.in_flight,
            delivered: false,
        };
        if tx.send(entry).await.is_err() {
            return Err(SinkError::Closed);
        }
        pending.delivered = true;
        Ok(())
    }

    /// Time `action` and queue the resulting record before returning its
    /// output.
    ///
    /// The action's own failure modes pass through untouched; only the
    /// bookkeeping is added. A rejected enqueue is reported, not surfaced.
    pub async fn observe<F, T>(&self, task_name: &str, action: F) -> T
    where
        F: std::future::Future<Output = T>,
    {
        let (output, entry) = timed(task_name, action).await;
        if let Err(e) = self.enqueue(entry).await {
            tracing::warn!(task = task_name, error = %e, "Execution log not recorded");
        }
        output
    }

    /// Number of records accepted but not yet persisted or reported.
    pub fn in_flight(&self) -> usize {
        self.inner.in_flight.current()
    }

    /// Stop accepting records, then wait for the worker to drain the queue.
    ///
    /// Close-then-drain: the sender side is dropped before the wait, so the
    /// in-flight count can only fall. When this returns, every accepted
    /// record has been persisted or reported, and the worker exits once its
    /// receive loop observes the closed channel.
    pub async fn close_and_drain(&self) {
        self.inner
            .tx
            .lock()
            .expect("sink sender lock poisoned")
            .take();
        self.inner.in_flight.wait_idle().await;
    }
}

async fn run_worker(
    mut rx: mpsc::Receiver<ExecutionLog>,
    store: Arc<dyn LogStore>,
    in_flight: Arc<InFlight>,
) {
    while let Some(entry) = rx.recv().await {
        if let Err(e) = store.insert(&entry).await {
            tracing::error!(
                task = %entry.task_name,
                error = %e,
                "Dropping execution log, persist failed"
            );
        }
        in_flight.done();
    }
    tracing::debug!("Log sink worker stopped");
}
