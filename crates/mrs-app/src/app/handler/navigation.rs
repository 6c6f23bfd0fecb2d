//! Navigation handlers.

use crate::app::Effect;
use crate::state::{AppState, Page};

impl AppState {
    /// Switch page. Never touches the model.
    ///
    /// Raw data and report stay unreachable until a model is loaded.
    /// Entering history or report starts a fresh read of its store.
    pub(crate) fn handle_navigate(&mut self, page: Page) -> Vec<Effect> {
        if page.requires_model() && !self.has_model() {
            tracing::debug!(page = page.label(), "Ignoring navigation: no model loaded");
            return Vec::new();
        }

        self.page = page;
        match page {
            Page::History => {
                self.history.is_loading = true;
                vec![Effect::LoadHistory]
            }
            Page::Report => {
                self.report.is_loading = true;
                vec![Effect::LoadConfiguration]
            }
            Page::Import | Page::Raw | Page::Help => Vec::new(),
        }
    }

    pub(crate) fn handle_toggle_fullscreen(&mut self) -> Vec<Effect> {
        self.ui.is_fullscreen = !self.ui.is_fullscreen;
        vec![Effect::SetFullscreen(self.ui.is_fullscreen)]
    }
}
