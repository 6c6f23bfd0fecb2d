//! Measurement model for Measure Report Studio.
//!
//! A [`GroupedData`] is one imported batch of measurements organized into
//! named [`MeasureGroup`]s. Every edit produces a new snapshot; previously
//! handed-out snapshots never change.
//!
//! # Invariants
//!
//! - Group names are unique within a `GroupedData`.
//! - Measure ids are unique within their group.
//! - Toggling `ignored` never changes ids, names, membership or ordering.

pub mod error;
pub mod grouped;
pub mod measure;

pub use error::{ModelError, Result};
pub use grouped::{GroupedData, ModelSummary, ToggleOutcome};
pub use measure::{Measure, MeasureGroup, MeasureId};
