//! Model import and edit handlers.

use mrs_model::{GroupedData, MeasureId, ToggleOutcome};
use mrs_persistence::{HistoryEvent, HistoryRecord};

use crate::app::Effect;
use crate::message::DataMessage;
use crate::state::{AppState, Page};

impl AppState {
    /// Handle model messages.
    pub(crate) fn handle_data_message(&mut self, msg: DataMessage) -> Vec<Effect> {
        match msg {
            DataMessage::Import(model) => self.import_model(model, HistoryEvent::Imported),
            DataMessage::ToggleIgnored { group, measure_id } => {
                self.toggle_ignored(group, measure_id)
            }
            DataMessage::SelectGroup(group) => {
                self.select_group(group);
                Vec::new()
            }
            DataMessage::Scrolled { page, offset } => {
                self.ui.scroll_offsets.insert(page, offset);
                Vec::new()
            }
        }
    }

    /// Replace the model wholesale and show it.
    pub(crate) fn import_model(&mut self, model: GroupedData, event: HistoryEvent) -> Vec<Effect> {
        let summary = model.summary();
        tracing::info!(
            groups = summary.groups,
            measures = summary.measures,
            ignored = summary.ignored,
            event = %event.label(),
            "Model imported"
        );

        self.model = Some(model.clone());
        self.ui.reset_for_import();
        self.page = Page::Raw;
        vec![Effect::AppendHistory(HistoryRecord::new(event, model))]
    }

    fn toggle_ignored(&mut self, group: String, measure_id: MeasureId) -> Vec<Effect> {
        let Some(model) = self.model.as_ref() else {
            tracing::debug!(%group, measure_id, "Ignoring toggle: no model loaded");
            return Vec::new();
        };

        match model.toggle_ignored(&group, measure_id) {
            ToggleOutcome::Toggled { model, ignored } => {
                tracing::info!(%group, measure_id, ignored, "Measure toggled");
                self.model = Some(model.clone());
                let event = HistoryEvent::MeasureToggled {
                    group,
                    measure_id,
                    ignored,
                };
                vec![Effect::AppendHistory(HistoryRecord::new(event, model))]
            }
            ToggleOutcome::GroupNotFound => {
                tracing::debug!(%group, measure_id, "Ignoring toggle: unknown group");
                Vec::new()
            }
            ToggleOutcome::MeasureNotFound => {
                tracing::debug!(%group, measure_id, "Ignoring toggle: unknown measure");
                Vec::new()
            }
        }
    }

    fn select_group(&mut self, group: Option<String>) {
        let known = match (&group, &self.model) {
            (None, _) => true,
            (Some(name), Some(model)) => model.group(name).is_some(),
            (Some(_), None) => false,
        };
        if known {
            self.ui.selected_group = group;
        } else {
            tracing::debug!(?group, "Ignoring selection of unknown group");
        }
    }
}
