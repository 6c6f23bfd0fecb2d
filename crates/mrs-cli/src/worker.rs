//! Replacement handle driven from the session prompt.

use mrs_updater::{ReplacementWorker, Result, WorkerId, WorkerMessage};

/// Stands in for the update-delivery subsystem's handle when lifecycle
/// signals are typed in by hand.
#[derive(Debug, Clone)]
pub struct ConsoleWorker {
    id: WorkerId,
    version: Option<String>,
}

impl ConsoleWorker {
    pub fn new(id: u64, version: Option<String>) -> Self {
        Self {
            id: WorkerId(id),
            version,
        }
    }
}

impl ReplacementWorker for ConsoleWorker {
    fn id(&self) -> WorkerId {
        self.id
    }

    fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    fn post_message(&self, message: WorkerMessage) -> Result<()> {
        tracing::info!(worker = %self.id, ?message, "Message posted to replacement");
        Ok(())
    }
}
