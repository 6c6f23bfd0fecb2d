//! Application state management.
//!
//! The architecture separates concerns into:
//!
//! - **AppState**: Root state, owns the current model
//! - **UiState**: View-local state (selection, scroll offsets, fullscreen)
//! - **ReportState**: Report toggles and the configuration last read
//! - **HistoryState**: The history list last read
//! - **Views**: Borrowed read-only projections handed to renderers

mod app_state;
mod history_state;
mod navigation;
mod report_state;
mod ui_state;
mod views;

pub use app_state::AppState;
pub use history_state::HistoryState;
pub use navigation::Page;
pub use report_state::ReportState;
pub use ui_state::UiState;
pub use views::{NavigationView, RawDataView, ReportInputs};
