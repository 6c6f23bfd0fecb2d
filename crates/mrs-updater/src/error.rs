//! Error types for update coordination.

use thiserror::Error;

use crate::worker::WorkerId;

/// Errors that can occur while applying an update.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum UpdateError {
    /// No replacement is held.
    #[error("no pending replacement")]
    NoPendingReplacement,

    /// The replacement handle rejected the message or is gone.
    #[error("replacement {worker} is unavailable: {reason}")]
    WorkerUnavailable {
        /// Worker the message was meant for.
        worker: WorkerId,
        /// What the delivery subsystem reported.
        reason: String,
    },
}

impl UpdateError {
    /// Returns a user-friendly error message suitable for display in the UI.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::NoPendingReplacement => "No update is ready to install.",
            Self::WorkerUnavailable { .. } => {
                "The update could not be applied. Restart the application to finish updating."
            }
        }
    }
}

/// Result type alias for update operations.
pub type Result<T> = std::result::Result<T, UpdateError>;
