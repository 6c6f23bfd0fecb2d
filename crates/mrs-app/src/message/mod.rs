//! Message module for Measure Report Studio.
//!
//! This module defines the message hierarchy for the Elm-style architecture.
//! All user interactions and events flow through these message types and
//! are applied one at a time by the reducer.

pub mod data;
pub mod history;
pub mod report;
pub mod update;

use crate::state::Page;

pub use data::DataMessage;
pub use history::HistoryMessage;
pub use report::ReportMessage;
pub use update::UpdateMessage;

/// Root message enum for the application.
#[derive(Debug)]
pub enum Message {
    // =========================================================================
    // Navigation
    // =========================================================================
    /// Show a different page
    Navigate(Page),

    /// Enter or leave fullscreen
    ToggleFullscreen,

    // =========================================================================
    // View-specific messages
    // =========================================================================
    /// Model import and editing
    Data(DataMessage),

    /// Report options and configuration reads
    Report(ReportMessage),

    /// History list and reopening past imports
    History(HistoryMessage),

    // =========================================================================
    // Update delivery
    // =========================================================================
    /// Update lifecycle signals and prompt actions
    Update(UpdateMessage),
}

impl Message {
    /// Creates an import message.
    pub fn import(model: mrs_model::GroupedData) -> Self {
        Self::Data(DataMessage::Import(model))
    }

    /// Creates a toggle message for one measure.
    pub fn toggle_ignored(group: impl Into<String>, measure_id: mrs_model::MeasureId) -> Self {
        Self::Data(DataMessage::ToggleIgnored {
            group: group.into(),
            measure_id,
        })
    }
}
