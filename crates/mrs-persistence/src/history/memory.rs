//! In-memory history store.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use super::{HistoryEntry, HistoryLog, HistoryRecord};
use crate::error::{PersistenceError, Result};

/// History kept in process memory. Used by tests and headless runs.
#[derive(Debug, Default)]
pub struct MemoryHistoryStore {
    entries: Mutex<Vec<HistoryEntry>>,
    fail_writes: AtomicBool,
}

impl MemoryHistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make subsequent appends fail (or succeed again).
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Release);
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl HistoryLog for MemoryHistoryStore {
    fn append(&self, record: HistoryRecord) -> Result<HistoryEntry> {
        if self.fail_writes.load(Ordering::Acquire) {
            return Err(PersistenceError::Unavailable {
                reason: "writes disabled".to_string(),
            });
        }
        let mut entries = self.entries.lock().map_err(|_| PersistenceError::Unavailable {
            reason: "history lock poisoned".to_string(),
        })?;
        let entry = HistoryEntry::stamp(entries.len() as u64, record);
        entries.push(entry.clone());
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<HistoryEntry>> {
        self.entries
            .lock()
            .map(|e| e.clone())
            .map_err(|_| PersistenceError::Unavailable {
                reason: "history lock poisoned".to_string(),
            })
    }
}
