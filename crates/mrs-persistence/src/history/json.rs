//! JSON file history store.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use super::{HistoryEntry, HistoryLog, HistoryRecord};
use crate::error::{PersistenceError, Result};
use crate::io::{read_optional, write_atomic};

/// Current history document schema version.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct HistoryDocument {
    schema_version: u32,
    entries: Vec<HistoryEntry>,
}

#[derive(Deserialize)]
struct VersionProbe {
    schema_version: u32,
}

/// History log kept in a single JSON document.
///
/// Each append rewrites the document atomically. A missing file is an
/// empty history.
#[derive(Debug)]
pub struct JsonHistoryStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Store at the platform default location.
    pub fn at_default_path() -> Self {
        Self::new(crate::paths::default_history_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<Vec<HistoryEntry>> {
        let Some(content) = read_optional(&self.path)? else {
            return Ok(Vec::new());
        };
        parse_document(&content, &self.path)
    }

    fn save(&self, entries: Vec<HistoryEntry>) -> Result<()> {
        let document = HistoryDocument {
            schema_version: CURRENT_SCHEMA_VERSION,
            entries,
        };
        let bytes =
            serde_json::to_vec(&document).map_err(|e| PersistenceError::Serialization {
                kind: "history",
                source: Box::new(e),
            })?;
        write_atomic(&self.path, &bytes)
    }
}

impl HistoryLog for JsonHistoryStore {
    fn append(&self, record: HistoryRecord) -> Result<HistoryEntry> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| PersistenceError::Unavailable {
                reason: "history write lock poisoned".to_string(),
            })?;

        let mut entries = self.load()?;
        let sequence = entries.last().map_or(0, |e| e.sequence + 1);
        let entry = HistoryEntry::stamp(sequence, record);
        entries.push(entry.clone());
        self.save(entries)?;

        tracing::debug!(
            sequence,
            path = %self.path.display(),
            "Appended history entry"
        );
        Ok(entry)
    }

    fn list(&self) -> Result<Vec<HistoryEntry>> {
        self.load()
    }
}

fn parse_document(content: &str, path: &Path) -> Result<Vec<HistoryEntry>> {
    let invalid = |e: serde_json::Error| PersistenceError::InvalidFormat {
        kind: "history",
        path: path.to_path_buf(),
        reason: e.to_string(),
    };

    let probe: VersionProbe = serde_json::from_str(content).map_err(invalid)?;
    if probe.schema_version > CURRENT_SCHEMA_VERSION {
        return Err(PersistenceError::UnsupportedVersion {
            found: probe.schema_version,
            max_supported: CURRENT_SCHEMA_VERSION,
            path: path.to_path_buf(),
        });
    }

    let document: HistoryDocument = serde_json::from_str(content).map_err(invalid)?;
    Ok(document.entries)
}
