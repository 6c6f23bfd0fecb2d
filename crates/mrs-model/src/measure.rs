//! Measures and measure groups.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Identifier of a measure, unique within its group.
pub type MeasureId = u32;

/// A single data point within a group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measure {
    /// Identifier, unique within the owning group.
    pub id: MeasureId,

    /// Measured value.
    pub value: f64,

    /// Excluded from report computations (kept in the batch).
    #[serde(default)]
    pub ignored: bool,

    /// Importer-supplied fields this core does not interpret.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl Measure {
    /// Create an included measure with no extra fields.
    pub fn new(id: MeasureId, value: f64) -> Self {
        Self {
            id,
            value,
            ignored: false,
            extra: BTreeMap::new(),
        }
    }

    /// Builder-style setter for the `ignored` flag.
    #[must_use]
    pub fn with_ignored(mut self, ignored: bool) -> Self {
        self.ignored = ignored;
        self
    }

    /// Attach an importer-supplied field.
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }
}

/// A named, ordered group of measures.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureGroup {
    /// Group name, unique within a [`GroupedData`](crate::GroupedData).
    pub name: String,

    /// Measures in import order.
    pub measures: Vec<Measure>,
}

impl MeasureGroup {
    /// Create a group.
    pub fn new(name: impl Into<String>, measures: Vec<Measure>) -> Self {
        Self {
            name: name.into(),
            measures,
        }
    }

    /// Find a measure by id.
    pub fn measure(&self, id: MeasureId) -> Option<&Measure> {
        self.measures.iter().find(|m| m.id == id)
    }

    pub(crate) fn position_of(&self, id: MeasureId) -> Option<usize> {
        self.measures.iter().position(|m| m.id == id)
    }

    /// Measures that take part in report computations.
    pub fn included(&self) -> impl Iterator<Item = &Measure> {
        self.measures.iter().filter(|m| !m.ignored)
    }

    /// Number of measures flagged as ignored.
    pub fn ignored_count(&self) -> usize {
        self.measures.iter().filter(|m| m.ignored).count()
    }

    /// Mean of the included values, `None` when every measure is ignored.
    pub fn included_mean(&self) -> Option<f64> {
        let (sum, count) = self
            .included()
            .fold((0.0, 0usize), |(sum, count), m| (sum + m.value, count + 1));
        (count > 0).then(|| sum / count as f64)
    }
}
