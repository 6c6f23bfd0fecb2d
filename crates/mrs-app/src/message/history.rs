//! History messages.

use mrs_persistence::HistoryEntry;

/// Messages for the history page.
#[derive(Debug, Clone)]
pub enum HistoryMessage {
    /// Read the history list again
    Refresh,

    /// History read finished
    Loaded(Result<Vec<HistoryEntry>, String>),

    /// Open a past entry as the current model
    Reopen { sequence: u64 },
}
