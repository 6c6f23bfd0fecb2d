//! Report messages.

use mrs_persistence::AppConfiguration;

/// Messages for the report page.
#[derive(Debug, Clone)]
pub enum ReportMessage {
    /// Flip "use error for referential"
    ToggleUseErrorForReferential,

    /// Flip conditional formatting
    ToggleConditionalFormatting,

    /// Configuration read finished
    ConfigurationLoaded(Result<AppConfiguration, String>),
}
