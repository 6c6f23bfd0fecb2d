//! Report view state.

use mrs_persistence::AppConfiguration;

/// Report display toggles and the configuration read on entry.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportState {
    /// Use the measurement error instead of the tolerance for the referential.
    pub use_error_for_referential: bool,

    /// Highlight values outside the referential.
    pub display_conditional_formatting: bool,

    /// Configuration read when the report page was last entered.
    pub configuration: Option<AppConfiguration>,

    /// Why the last configuration read fell back to defaults.
    pub configuration_error: Option<String>,

    /// A configuration read is in flight.
    pub is_loading: bool,
}

impl Default for ReportState {
    fn default() -> Self {
        Self {
            use_error_for_referential: true,
            display_conditional_formatting: true,
            configuration: None,
            configuration_error: None,
            is_loading: false,
        }
    }
}
