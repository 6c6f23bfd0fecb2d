//! History view state.

use mrs_persistence::HistoryEntry;

/// History list as last read from the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HistoryState {
    /// Entries in append order.
    pub entries: Vec<HistoryEntry>,

    /// A read is in flight.
    pub is_loading: bool,

    /// The last read failed.
    pub error: Option<String>,
}

impl HistoryState {
    /// Entries most recent first, as the history view lists them.
    pub fn most_recent_first(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Find a loaded entry by sequence number.
    pub fn entry(&self, sequence: u64) -> Option<&HistoryEntry> {
        self.entries.iter().find(|e| e.sequence == sequence)
    }
}
