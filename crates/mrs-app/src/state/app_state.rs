//! Application-level state.
//!
//! This module contains `AppState` which is the root of all state.

use mrs_model::GroupedData;
use mrs_updater::UpdateCoordinator;

use super::{HistoryState, Page, ReportState, UiState};

/// Top-level application state.
///
/// Only the reducer writes to it. Views borrow it read-only.
#[derive(Debug, Default)]
pub struct AppState {
    /// Current page
    pub page: Page,
    /// Current model (None until the first import)
    pub model: Option<GroupedData>,
    /// All UI state (separated from model data)
    pub ui: UiState,
    /// Report toggles and configuration
    pub report: ReportState,
    /// History list
    pub history: HistoryState,
    /// Hot-update lifecycle
    pub updates: UpdateCoordinator,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get model reference.
    pub fn model(&self) -> Option<&GroupedData> {
        self.model.as_ref()
    }

    /// Whether the raw-data and report pages are reachable.
    pub fn has_model(&self) -> bool {
        self.model.is_some()
    }

    /// Whether a store read started by navigation has not come back yet.
    pub fn has_pending_reads(&self) -> bool {
        self.history.is_loading || self.report.is_loading
    }

    /// Whether the update notification should be shown.
    pub fn show_update_prompt(&self) -> bool {
        self.updates.is_prompt_visible()
    }
}
