//! Persistent storage for Measure Report Studio.
//!
//! Two durable collaborators of the application controller live here:
//!
//! - [`HistoryLog`]: append-only record of [`GroupedData`](mrs_model::GroupedData)
//!   snapshots, one entry per import or edit.
//! - [`ConfigurationStore`]: read access to the referential baseline and
//!   report preferences.
//!
//! # File Formats
//!
//! History is a JSON document:
//!
//! ```text
//! {
//!   "schema_version": 1,
//!   "entries": [ { "sequence": 0, "recorded_at": "...", "event": {...}, "data": {...} } ]
//! }
//! ```
//!
//! Configuration is TOML with `[referential]` and `[report]` tables.
//!
//! Writes go through a temp file and a rename so a crash never leaves a
//! half-written document behind.

mod config;
mod error;
mod history;
mod io;
mod paths;

pub use config::{
    AppConfiguration, ConfigurationStore, ReferentialSettings, ReferentialValue,
    ReportPreferences, TomlConfigurationStore,
};
pub use error::{PersistenceError, Result};
pub use history::{
    CURRENT_SCHEMA_VERSION, HistoryEntry, HistoryEvent, HistoryLog, HistoryRecord, JsonHistoryStore,
    MemoryHistoryStore,
};
