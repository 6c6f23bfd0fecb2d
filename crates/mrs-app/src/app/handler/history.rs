//! History page handlers.

use mrs_persistence::HistoryEvent;

use crate::app::Effect;
use crate::message::HistoryMessage;
use crate::state::AppState;

impl AppState {
    /// Handle history messages.
    pub(crate) fn handle_history_message(&mut self, msg: HistoryMessage) -> Vec<Effect> {
        match msg {
            HistoryMessage::Refresh => {
                self.history.is_loading = true;
                vec![Effect::LoadHistory]
            }
            HistoryMessage::Loaded(Ok(entries)) => {
                tracing::debug!(count = entries.len(), "History loaded");
                self.history.entries = entries;
                self.history.is_loading = false;
                self.history.error = None;
                Vec::new()
            }
            HistoryMessage::Loaded(Err(error)) => {
                tracing::warn!(%error, "Failed to load history");
                self.history.is_loading = false;
                self.history.error = Some(error);
                Vec::new()
            }
            HistoryMessage::Reopen { sequence } => {
                let Some(entry) = self.history.entry(sequence) else {
                    tracing::debug!(sequence, "Ignoring reopen of unknown history entry");
                    return Vec::new();
                };
                let model = entry.data.clone();
                self.import_model(
                    model,
                    HistoryEvent::Reopened {
                        source_sequence: sequence,
                    },
                )
            }
        }
    }
}
