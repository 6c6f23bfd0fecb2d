//! History entry types.

use chrono::{DateTime, Utc};
use mrs_model::{GroupedData, MeasureId};
use serde::{Deserialize, Serialize};

/// What produced a snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum HistoryEvent {
    /// A fresh batch came in from the importer.
    Imported,
    /// A past entry was opened again.
    Reopened { source_sequence: u64 },
    /// One measure's `ignored` flag was flipped.
    MeasureToggled {
        group: String,
        measure_id: MeasureId,
        ignored: bool,
    },
}

impl HistoryEvent {
    /// Short label for listings.
    pub fn label(&self) -> String {
        match self {
            Self::Imported => "import".to_string(),
            Self::Reopened { source_sequence } => format!("reopen #{source_sequence}"),
            Self::MeasureToggled {
                group,
                measure_id,
                ignored,
            } => format!(
                "{} {group}/{measure_id}",
                if *ignored { "ignore" } else { "include" }
            ),
        }
    }
}

/// A snapshot waiting to be written.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRecord {
    pub event: HistoryEvent,
    pub data: GroupedData,
}

impl HistoryRecord {
    pub fn new(event: HistoryEvent, data: GroupedData) -> Self {
        Self { event, data }
    }
}

/// A stored, immutable snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Position in the log, starting at 0.
    pub sequence: u64,

    /// When the entry was written (RFC 3339).
    pub recorded_at: String,

    /// What produced the snapshot.
    pub event: HistoryEvent,

    /// The full model at that point.
    pub data: GroupedData,
}

impl HistoryEntry {
    /// Stamp a record with its sequence number and the current time.
    pub fn stamp(sequence: u64, record: HistoryRecord) -> Self {
        Self {
            sequence,
            recorded_at: Utc::now().to_rfc3339(),
            event: record.event,
            data: record.data,
        }
    }

    /// Parse the recorded_at timestamp.
    pub fn recorded_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.recorded_at)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
