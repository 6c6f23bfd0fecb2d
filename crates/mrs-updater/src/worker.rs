//! Replacement worker handles.

use std::fmt;

use crate::error::Result;

/// Identity of a replacement worker, assigned by the delivery subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkerId(pub u64);

impl fmt::Display for WorkerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "worker#{}", self.0)
    }
}

/// Command sent to a waiting replacement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkerMessage {
    /// Stop waiting and become the active version now.
    SkipWaiting,
}

/// Lifecycle state reported by the delivery subsystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkerState {
    Installing,
    Installed,
    Activating,
    /// The replacement now serves the application.
    Activated,
    /// The replacement was discarded.
    Redundant,
}

impl WorkerState {
    /// Get the display name for this state.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Installing => "installing",
            Self::Installed => "installed",
            Self::Activating => "activating",
            Self::Activated => "activated",
            Self::Redundant => "redundant",
        }
    }
}

/// A staged replacement of the running application, as exposed by the
/// update-delivery subsystem.
pub trait ReplacementWorker: fmt::Debug + Send + Sync {
    /// Stable identity of this replacement.
    fn id(&self) -> WorkerId;

    /// Version string of the replacement, when the subsystem knows it.
    fn version(&self) -> Option<&str> {
        None
    }

    /// Deliver a command to the replacement.
    fn post_message(&self, message: WorkerMessage) -> Result<()>;
}

/// A replacement the coordinator has acquired.
///
/// Acquired on the "waiting" signal, released on activation or when the
/// coordinator goes away.
#[derive(Debug)]
pub struct PendingReplacement {
    worker: Box<dyn ReplacementWorker>,
    awaiting_activation: bool,
}

impl PendingReplacement {
    pub(crate) fn acquire(worker: Box<dyn ReplacementWorker>) -> Self {
        tracing::info!(
            worker = %worker.id(),
            version = worker.version().unwrap_or("unknown"),
            "Acquired pending replacement"
        );
        Self {
            worker,
            awaiting_activation: false,
        }
    }

    pub fn id(&self) -> WorkerId {
        self.worker.id()
    }

    pub fn version(&self) -> Option<&str> {
        self.worker.version()
    }

    /// Whether the coordinator listens for this replacement's activation.
    pub fn is_awaiting_activation(&self) -> bool {
        self.awaiting_activation
    }

    pub(crate) fn subscribe_activation(&mut self) {
        self.awaiting_activation = true;
    }

    pub(crate) fn post(&self, message: WorkerMessage) -> Result<()> {
        self.worker.post_message(message)
    }
}

impl Drop for PendingReplacement {
    fn drop(&mut self) {
        tracing::debug!(worker = %self.worker.id(), "Released pending replacement");
    }
}
