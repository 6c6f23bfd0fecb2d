//! Append-only history of model snapshots.

mod entry;
mod json;
mod memory;

pub use entry::{HistoryEntry, HistoryEvent, HistoryRecord};
pub use json::{CURRENT_SCHEMA_VERSION, JsonHistoryStore};
pub use memory::MemoryHistoryStore;

use crate::error::Result;

/// Durable, append-only record of [`GroupedData`](mrs_model::GroupedData) snapshots.
///
/// Entries are never edited in place. Sequence numbers and timestamps are
/// assigned by the store at write time.
pub trait HistoryLog: Send + Sync {
    /// Append one snapshot and return the stored entry.
    fn append(&self, record: HistoryRecord) -> Result<HistoryEntry>;

    /// All entries in append order (oldest first).
    fn list(&self) -> Result<Vec<HistoryEntry>>;
}

impl<T: HistoryLog + ?Sized> HistoryLog for std::sync::Arc<T> {
    fn append(&self, record: HistoryRecord) -> Result<HistoryEntry> {
        (**self).append(record)
    }

    fn list(&self) -> Result<Vec<HistoryEntry>> {
        (**self).list()
    }
}
