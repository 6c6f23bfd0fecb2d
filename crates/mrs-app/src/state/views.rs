//! Read-only projections of [`AppState`] handed to external renderers.

use mrs_model::{GroupedData, MeasureGroup};
use mrs_persistence::AppConfiguration;
use mrs_updater::UpdateState;

use super::{AppState, Page};

/// What the navigation bar needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationView {
    pub current_page: Page,
    /// Raw-data and report buttons are enabled.
    pub enable_data_and_report: bool,
    pub is_fullscreen: bool,
    pub show_update_prompt: bool,
    /// The user dismissed the notification for the current update.
    pub update_prompt_hidden: bool,
    pub update_state: UpdateState,
}

/// What the raw-data view needs.
#[derive(Debug, Clone, Copy)]
pub struct RawDataView<'a> {
    pub data: &'a GroupedData,
    pub selected_group: Option<&'a str>,
}

impl<'a> RawDataView<'a> {
    /// The selected group, falling back to the first one.
    pub fn visible_group(&self) -> Option<&'a MeasureGroup> {
        match self.selected_group {
            Some(name) => self.data.group(name),
            None => self.data.groups().next(),
        }
    }
}

/// Inputs of the external report renderer.
#[derive(Debug, Clone, Copy)]
pub struct ReportInputs<'a> {
    pub data: &'a GroupedData,
    pub configuration: &'a AppConfiguration,
    pub use_error_for_referential: bool,
    pub display_conditional_formatting: bool,
}

impl AppState {
    pub fn navigation(&self) -> NavigationView {
        NavigationView {
            current_page: self.page,
            enable_data_and_report: self.has_model(),
            is_fullscreen: self.ui.is_fullscreen,
            show_update_prompt: self.show_update_prompt(),
            update_prompt_hidden: self.updates.is_prompt_hidden(),
            update_state: self.updates.state(),
        }
    }

    /// `None` until a model is loaded.
    pub fn raw_data_view(&self) -> Option<RawDataView<'_>> {
        Some(RawDataView {
            data: self.model.as_ref()?,
            selected_group: self.ui.selected_group.as_deref(),
        })
    }

    /// `None` until a model is loaded and the configuration has been read.
    pub fn report_inputs(&self) -> Option<ReportInputs<'_>> {
        Some(ReportInputs {
            data: self.model.as_ref()?,
            configuration: self.report.configuration.as_ref()?,
            use_error_for_referential: self.report.use_error_for_referential,
            display_conditional_formatting: self.report.display_conditional_formatting,
        })
    }
}
