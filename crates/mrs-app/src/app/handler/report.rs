//! Report page handlers.

use mrs_persistence::AppConfiguration;

use crate::app::Effect;
use crate::message::ReportMessage;
use crate::state::AppState;

impl AppState {
    /// Handle report messages. Neither toggle touches the model.
    pub(crate) fn handle_report_message(&mut self, msg: ReportMessage) -> Vec<Effect> {
        match msg {
            ReportMessage::ToggleUseErrorForReferential => {
                self.report.use_error_for_referential = !self.report.use_error_for_referential;
            }
            ReportMessage::ToggleConditionalFormatting => {
                self.report.display_conditional_formatting =
                    !self.report.display_conditional_formatting;
            }
            ReportMessage::ConfigurationLoaded(Ok(config)) => {
                self.report.is_loading = false;
                self.report.configuration = Some(config);
                self.report.configuration_error = None;
            }
            ReportMessage::ConfigurationLoaded(Err(error)) => {
                tracing::warn!(%error, "Configuration unreadable, using defaults");
                self.report.is_loading = false;
                self.report.configuration = Some(AppConfiguration::default());
                self.report.configuration_error = Some(error);
            }
        }
        Vec::new()
    }
}
