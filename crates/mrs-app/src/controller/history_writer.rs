//! Ordered background writes to the history log.
//!
//! Appends are queued in dispatch order and executed one at a time on the
//! blocking pool, so the log never sees two snapshots out of order. The
//! controller does not wait for them: a failed write is logged and counted,
//! and the in-memory state keeps the transition that produced it.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use mrs_persistence::{HistoryEntry, HistoryLog, HistoryRecord};
use tokio::sync::{mpsc, oneshot};

#[derive(Debug)]
enum WriterCommand {
    Append(HistoryRecord),
    List(oneshot::Sender<Result<Vec<HistoryEntry>, String>>),
    Flush(oneshot::Sender<()>),
}

/// Handle to the single task that owns history I/O.
#[derive(Debug)]
pub struct HistoryWriter {
    sender: mpsc::UnboundedSender<WriterCommand>,
    failed_writes: Arc<AtomicU64>,
}

impl HistoryWriter {
    /// Start the writer task. Must be called from within a tokio runtime.
    pub fn spawn<H: HistoryLog + 'static>(log: Arc<H>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        let failed_writes = Arc::new(AtomicU64::new(0));
        tokio::spawn(run_writer(log, receiver, Arc::clone(&failed_writes)));
        Self {
            sender,
            failed_writes,
        }
    }

    /// Queue a snapshot. Returns immediately.
    pub fn append(&self, record: HistoryRecord) {
        if self.sender.send(WriterCommand::Append(record)).is_err() {
            tracing::error!("History writer stopped, snapshot dropped");
            self.failed_writes.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Read the whole log after every append queued so far has run.
    pub async fn list(&self) -> Result<Vec<HistoryEntry>, String> {
        self.list_later().await
    }

    /// Same as [`list`](Self::list) but detached from `&self`, for use in
    /// spawned tasks.
    pub(crate) fn list_later(
        &self,
    ) -> impl Future<Output = Result<Vec<HistoryEntry>, String>> + Send + use<> {
        let (reply, response) = oneshot::channel();
        let queued = self.sender.send(WriterCommand::List(reply)).is_ok();
        async move {
            if !queued {
                return Err("History writer stopped".to_string());
            }
            response
                .await
                .map_err(|_| "History writer stopped".to_string())?
        }
    }

    /// Wait until every append queued so far has been attempted.
    pub async fn flush(&self) {
        let (reply, done) = oneshot::channel();
        if self.sender.send(WriterCommand::Flush(reply)).is_ok() {
            let _ = done.await;
        }
    }

    /// Appends that failed since the writer started.
    pub fn failed_writes(&self) -> u64 {
        self.failed_writes.load(Ordering::Relaxed)
    }
}

async fn run_writer<H: HistoryLog + 'static>(
    log: Arc<H>,
    mut receiver: mpsc::UnboundedReceiver<WriterCommand>,
    failed_writes: Arc<AtomicU64>,
) {
    while let Some(command) = receiver.recv().await {
        match command {
            WriterCommand::Append(record) => {
                let log = Arc::clone(&log);
                let label = record.event.label();
                match tokio::task::spawn_blocking(move || log.append(record)).await {
                    Ok(Ok(entry)) => {
                        tracing::debug!(sequence = entry.sequence, event = %label, "History entry written");
                    }
                    Ok(Err(e)) => {
                        failed_writes.fetch_add(1, Ordering::Relaxed);
                        tracing::warn!(
                            event = %label,
                            error = %e,
                            "Failed to write history entry: {}",
                            e.user_message()
                        );
                    }
                    Err(e) => {
                        failed_writes.fetch_add(1, Ordering::Relaxed);
                        tracing::error!(event = %label, "History write task panicked: {}", e);
                    }
                }
            }
            WriterCommand::List(reply) => {
                let log = Arc::clone(&log);
                let result = tokio::task::spawn_blocking(move || log.list())
                    .await
                    .map_err(|e| format!("History read task failed: {e}"))
                    .and_then(|r| r.map_err(|e| e.user_message()));
                let _ = reply.send(result);
            }
            WriterCommand::Flush(reply) => {
                let _ = reply.send(());
            }
        }
    }
    tracing::debug!("History writer stopped");
}
