//! The reducer: `(state, message) -> (state, effects)`.
//!
//! Every transition is a function of the state it is applied to, never of a
//! value captured when the message was created. Back-to-back messages
//! therefore each see the result of the previous one.
//!
//! Side effects are returned as [`Effect`]s for the controller to carry out;
//! the reducer itself performs no I/O.

mod handler;

use mrs_persistence::HistoryRecord;

use crate::message::Message;
use crate::state::AppState;

/// Work the controller performs after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Append a snapshot to the history log (not awaited).
    AppendHistory(HistoryRecord),

    /// Read the history list; the result comes back as a message.
    LoadHistory,

    /// Read the configuration; the result comes back as a message.
    LoadConfiguration,

    /// Send the take-over message to the pending replacement.
    PostSkipWaiting,

    /// Reload the whole application.
    Reload,

    /// Ask the host window to enter or leave fullscreen.
    SetFullscreen(bool),
}

/// Result of applying one message.
#[derive(Debug)]
pub struct Transition {
    pub state: AppState,
    pub effects: Vec<Effect>,
}

/// Apply `message` to `state`.
pub fn reduce(mut state: AppState, message: Message) -> Transition {
    let effects = state.apply(message);
    Transition { state, effects }
}

impl AppState {
    /// Apply a message in place and return the effects it asks for.
    ///
    /// [`reduce`] is the by-value form.
    pub fn apply(&mut self, message: Message) -> Vec<Effect> {
        match message {
            Message::Navigate(page) => self.handle_navigate(page),
            Message::ToggleFullscreen => self.handle_toggle_fullscreen(),
            Message::Data(msg) => self.handle_data_message(msg),
            Message::Report(msg) => self.handle_report_message(msg),
            Message::History(msg) => self.handle_history_message(msg),
            Message::Update(msg) => self.handle_update_message(msg),
        }
    }
}
