//! View-local UI state, separated from the model.

use std::collections::BTreeMap;

use super::Page;

/// UI-only state. Never persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UiState {
    /// Group shown in the raw-data view.
    pub selected_group: Option<String>,

    /// Last scroll offset per page.
    pub scroll_offsets: BTreeMap<Page, f32>,

    /// Whether the host window is fullscreen.
    pub is_fullscreen: bool,
}

impl UiState {
    /// Forget selection and scroll positions. Called whenever a new model
    /// replaces the current one.
    pub fn reset_for_import(&mut self) {
        self.selected_group = None;
        self.scroll_offsets.clear();
    }

    pub fn scroll_offset(&self, page: Page) -> f32 {
        self.scroll_offsets.get(&page).copied().unwrap_or(0.0)
    }
}
