//! Application state controller for Measure Report Studio.
//!
//! Built on the Elm architecture (State, Message, Update):
//!
//! - [`state`]: everything the views read, rooted at [`AppState`]
//! - [`message`]: every user action and system event
//! - [`app`]: the pure reducer `(state, message) -> (state, effects)`
//! - [`controller`]: holds the latest state, dispatches messages one at a
//!   time and carries out effects (history writes, store reads, host calls)
//!
//! Rendering, the importer and the report renderer are external. They talk
//! to this crate through [`Page`], the view accessors on [`AppState`] and
//! [`Message`].

pub mod app;
pub mod controller;
pub mod message;
pub mod state;

pub use app::{Effect, Transition, reduce};
pub use controller::{AppController, AppHost, HistoryWriter};
pub use message::{DataMessage, HistoryMessage, Message, ReportMessage, UpdateMessage};
pub use state::{
    AppState, HistoryState, NavigationView, Page, RawDataView, ReportInputs, ReportState, UiState,
};
