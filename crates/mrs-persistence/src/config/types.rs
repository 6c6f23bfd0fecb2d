//! Configuration types - persisted user choices for report generation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// =============================================================================
// ROOT CONFIGURATION
// =============================================================================

/// Referential values and report display preferences.
///
/// Serialized to TOML. Read-only from the controller's point of view.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfiguration {
    /// Baseline the report compares measures against.
    pub referential: ReferentialSettings,

    /// Report display preferences.
    pub report: ReportPreferences,
}

// =============================================================================
// REFERENTIAL
// =============================================================================

/// Baseline values, keyed by group name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferentialSettings {
    /// Display name of the referential.
    pub name: String,

    /// Baseline per group.
    pub values: BTreeMap<String, ReferentialValue>,
}

impl ReferentialSettings {
    /// Baseline for a group, if one is configured.
    pub fn value_for(&self, group: &str) -> Option<&ReferentialValue> {
        self.values.get(group)
    }
}

/// Expected value and accepted deviation for one group.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ReferentialValue {
    pub target: f64,
    pub tolerance: f64,
}

impl ReferentialValue {
    /// Whether `value` lies within `target ± tolerance`.
    pub fn accepts(&self, value: f64) -> bool {
        (value - self.target).abs() <= self.tolerance
    }
}

// =============================================================================
// REPORT
// =============================================================================

/// How the report is laid out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportPreferences {
    /// Report title.
    pub title: String,

    /// Decimal places shown for values.
    pub decimal_places: u8,

    /// List ignored measures (greyed out) instead of hiding them.
    pub show_ignored: bool,
}

impl Default for ReportPreferences {
    fn default() -> Self {
        Self {
            title: "Measure report".to_string(),
            decimal_places: 2,
            show_ignored: true,
        }
    }
}
