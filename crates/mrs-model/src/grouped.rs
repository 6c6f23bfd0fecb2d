//! Grouped measurement batches and their edit operations.

use std::collections::HashSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::measure::{Measure, MeasureGroup, MeasureId};

/// One imported batch of measurements, organized into named groups.
///
/// Groups sit behind `Arc` so a new snapshot shares every group it did not
/// touch with its predecessor. Edits copy the path down to the changed
/// measure; nothing reachable from an older snapshot is ever written.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "UncheckedGroupedData")]
pub struct GroupedData {
    groups: Vec<Arc<MeasureGroup>>,
}

/// Wire shape before the uniqueness checks run.
#[derive(Deserialize)]
struct UncheckedGroupedData {
    groups: Vec<MeasureGroup>,
}

impl TryFrom<UncheckedGroupedData> for GroupedData {
    type Error = ModelError;

    fn try_from(raw: UncheckedGroupedData) -> Result<Self> {
        Self::new(raw.groups)
    }
}

/// Result of [`GroupedData::toggle_ignored`].
#[derive(Debug, Clone, PartialEq)]
pub enum ToggleOutcome {
    /// The measure was found and flipped; `model` is the new snapshot.
    Toggled {
        model: GroupedData,
        /// New value of the flag.
        ignored: bool,
    },
    /// No group with that name.
    GroupNotFound,
    /// The group exists but holds no measure with that id.
    MeasureNotFound,
}

impl ToggleOutcome {
    /// Whether a new snapshot was produced.
    pub fn is_toggled(&self) -> bool {
        matches!(self, Self::Toggled { .. })
    }
}

/// Counts shown in history listings and status lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModelSummary {
    pub groups: usize,
    pub measures: usize,
    pub ignored: usize,
}

impl GroupedData {
    /// Build a batch, checking the uniqueness invariants.
    pub fn new(groups: Vec<MeasureGroup>) -> Result<Self> {
        let mut names = HashSet::with_capacity(groups.len());
        for group in &groups {
            if !names.insert(group.name.as_str()) {
                return Err(ModelError::DuplicateGroup {
                    name: group.name.clone(),
                });
            }
            let mut ids = HashSet::with_capacity(group.measures.len());
            for measure in &group.measures {
                if !ids.insert(measure.id) {
                    return Err(ModelError::DuplicateMeasure {
                        group: group.name.clone(),
                        id: measure.id,
                    });
                }
            }
        }

        Ok(Self {
            groups: groups.into_iter().map(Arc::new).collect(),
        })
    }

    /// Groups in import order.
    pub fn groups(&self) -> impl ExactSizeIterator<Item = &MeasureGroup> {
        self.groups.iter().map(|g| &**g)
    }

    /// Shared handles to the groups, for callers that need identity checks.
    pub fn group_handles(&self) -> &[Arc<MeasureGroup>] {
        &self.groups
    }

    /// Find a group by name.
    pub fn group(&self, name: &str) -> Option<&MeasureGroup> {
        self.groups().find(|g| g.name == name)
    }

    /// Find a measure by group name and id.
    pub fn measure(&self, group: &str, id: MeasureId) -> Option<&Measure> {
        self.group(group)?.measure(id)
    }

    /// Group names in import order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups().map(|g| g.name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn summary(&self) -> ModelSummary {
        self.groups().fold(
            ModelSummary {
                groups: self.groups.len(),
                ..ModelSummary::default()
            },
            |mut acc, g| {
                acc.measures += g.measures.len();
                acc.ignored += g.ignored_count();
                acc
            },
        )
    }

    /// Flip the `ignored` flag of one measure.
    ///
    /// A lookup miss is not an error: the outcome says which lookup failed
    /// and `self` is left as the current snapshot.
    pub fn toggle_ignored(&self, group: &str, measure_id: MeasureId) -> ToggleOutcome {
        let Some(group_index) = self.groups.iter().position(|g| g.name == group) else {
            return ToggleOutcome::GroupNotFound;
        };
        let Some(measure_index) = self.groups[group_index].position_of(measure_id) else {
            return ToggleOutcome::MeasureNotFound;
        };

        let mut groups = self.groups.clone();
        // `self` still holds the group, so make_mut always copies here.
        let target = Arc::make_mut(&mut groups[group_index]);
        let measure = &mut target.measures[measure_index];
        measure.ignored = !measure.ignored;
        let ignored = measure.ignored;

        ToggleOutcome::Toggled {
            model: Self { groups },
            ignored,
        }
    }

    /// Like [`toggle_ignored`](Self::toggle_ignored) but always yields a
    /// snapshot: the new one on success, this one on a miss.
    #[must_use]
    pub fn toggled(&self, group: &str, measure_id: MeasureId) -> Self {
        match self.toggle_ignored(group, measure_id) {
            ToggleOutcome::Toggled { model, .. } => model,
            ToggleOutcome::GroupNotFound | ToggleOutcome::MeasureNotFound => self.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GroupedData {
        GroupedData::new(vec![
            MeasureGroup::new("G1", vec![Measure::new(1, 1.0), Measure::new(2, 2.0)]),
            MeasureGroup::new("G2", vec![Measure::new(1, 3.0)]),
        ])
        .unwrap()
    }

    #[test]
    fn test_rejects_duplicate_group() {
        let err = GroupedData::new(vec![
            MeasureGroup::new("A", vec![]),
            MeasureGroup::new("A", vec![]),
        ])
        .unwrap_err();
        assert_eq!(err, ModelError::DuplicateGroup { name: "A".into() });
    }

    #[test]
    fn test_rejects_duplicate_measure() {
        let err = GroupedData::new(vec![MeasureGroup::new(
            "A",
            vec![Measure::new(4, 0.0), Measure::new(4, 1.0)],
        )])
        .unwrap_err();
        assert_eq!(
            err,
            ModelError::DuplicateMeasure {
                group: "A".into(),
                id: 4
            }
        );
    }

    #[test]
    fn test_same_id_allowed_across_groups() {
        assert!(sample().measure("G2", 1).is_some());
    }

    #[test]
    fn test_toggle_shares_untouched_groups() {
        let model = sample();
        let ToggleOutcome::Toggled { model: next, ignored } = model.toggle_ignored("G1", 2) else {
            panic!("expected toggle");
        };
        assert!(ignored);
        assert!(Arc::ptr_eq(
            &model.group_handles()[1],
            &next.group_handles()[1]
        ));
        assert!(!Arc::ptr_eq(
            &model.group_handles()[0],
            &next.group_handles()[0]
        ));
    }

    #[test]
    fn test_toggle_leaves_previous_snapshot_intact() {
        let model = sample();
        let next = model.toggled("G1", 1);
        assert!(!model.measure("G1", 1).unwrap().ignored);
        assert!(next.measure("G1", 1).unwrap().ignored);
    }

    #[test]
    fn test_toggle_misses() {
        let model = sample();
        assert_eq!(model.toggle_ignored("nope", 1), ToggleOutcome::GroupNotFound);
        assert_eq!(model.toggle_ignored("G2", 2), ToggleOutcome::MeasureNotFound);
    }

    #[test]
    fn test_summary() {
        let model = sample().toggled("G2", 1);
        assert_eq!(
            model.summary(),
            ModelSummary {
                groups: 2,
                measures: 3,
                ignored: 1
            }
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let json = r#"{"groups":[{"name":"A","measures":[]},{"name":"A","measures":[]}]}"#;
        assert!(serde_json::from_str::<GroupedData>(json).is_err());
    }
}
