//! Update notification handlers.

use mrs_updater::UpdateCommand;

use crate::app::Effect;
use crate::message::UpdateMessage;
use crate::state::AppState;

impl AppState {
    /// Handle update lifecycle messages. The model is never touched.
    pub(crate) fn handle_update_message(&mut self, msg: UpdateMessage) -> Vec<Effect> {
        let command = match msg {
            UpdateMessage::Signal(signal) => self.updates.handle_signal(signal),
            UpdateMessage::Confirm => self.updates.confirm(),
            UpdateMessage::Dismiss => {
                self.updates.hide_prompt();
                None
            }
        };

        command
            .map(|command| match command {
                UpdateCommand::PostSkipWaiting => Effect::PostSkipWaiting,
                UpdateCommand::Reload => Effect::Reload,
            })
            .into_iter()
            .collect()
    }
}
