//! Update coordinator state machine.

use crate::error::{Result, UpdateError};
use crate::worker::{PendingReplacement, ReplacementWorker, WorkerId, WorkerMessage, WorkerState};

/// Where the coordinator is in the update lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UpdateState {
    /// No new version known.
    #[default]
    Idle,

    /// A replacement is waiting; the user may be prompted.
    UpdateAvailable,

    /// The user confirmed; waiting for the replacement to activate.
    Updating,
}

/// Lifecycle signal from the update-delivery subsystem.
#[derive(Debug)]
pub enum UpdateSignal {
    /// A replacement finished installing and is waiting to take over.
    ReplacementWaiting(Box<dyn ReplacementWorker>),

    /// A replacement moved to a new lifecycle state.
    WorkerStateChanged {
        worker: WorkerId,
        state: WorkerState,
    },
}

/// Side effect the host must carry out after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateCommand {
    /// Send [`WorkerMessage::SkipWaiting`] to the pending replacement
    /// (see [`UpdateCoordinator::send_skip_waiting`]).
    PostSkipWaiting,

    /// Reload the whole application.
    Reload,
}

/// Tracks a pending replacement and applies it on user confirmation.
#[derive(Debug, Default)]
pub struct UpdateCoordinator {
    state: UpdateState,
    pending: Option<PendingReplacement>,
    prompt_hidden: bool,
    reload_requested: bool,
}

impl UpdateCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> UpdateState {
        self.state
    }

    /// The held replacement, if any.
    pub fn pending(&self) -> Option<&PendingReplacement> {
        self.pending.as_ref()
    }

    /// Whether the update notification should be shown.
    pub fn is_prompt_visible(&self) -> bool {
        self.state != UpdateState::Idle && !self.prompt_hidden
    }

    pub fn is_prompt_hidden(&self) -> bool {
        self.prompt_hidden
    }

    /// Whether the terminal reload has been requested.
    pub fn is_reload_requested(&self) -> bool {
        self.reload_requested
    }

    /// Feed a lifecycle signal.
    pub fn handle_signal(&mut self, signal: UpdateSignal) -> Option<UpdateCommand> {
        match signal {
            UpdateSignal::ReplacementWaiting(worker) => {
                self.on_replacement_waiting(worker);
                None
            }
            UpdateSignal::WorkerStateChanged { worker, state } => {
                self.on_worker_state(worker, state)
            }
        }
    }

    fn on_replacement_waiting(&mut self, worker: Box<dyn ReplacementWorker>) {
        match self.state {
            UpdateState::Idle | UpdateState::UpdateAvailable => {
                // A newer replacement supersedes one the user has not accepted yet.
                self.pending = Some(PendingReplacement::acquire(worker));
                self.state = UpdateState::UpdateAvailable;
                tracing::info!("Update available");
            }
            UpdateState::Updating => {
                tracing::debug!(
                    worker = %worker.id(),
                    "Ignoring replacement while an update is being applied"
                );
            }
        }
    }

    fn on_worker_state(&mut self, worker: WorkerId, state: WorkerState) -> Option<UpdateCommand> {
        let pending = self.pending.as_ref()?;
        if pending.id() != worker {
            tracing::debug!(%worker, state = state.name(), "Ignoring state of unknown worker");
            return None;
        }
        if !pending.is_awaiting_activation() {
            tracing::debug!(%worker, state = state.name(), "Replacement state changed");
            return None;
        }

        match state {
            WorkerState::Activated => {
                self.pending = None;
                self.reload_requested = true;
                tracing::info!(%worker, "Replacement activated, reloading");
                Some(UpdateCommand::Reload)
            }
            WorkerState::Redundant => {
                tracing::warn!(
                    %worker,
                    "Replacement became redundant while updating; waiting indefinitely"
                );
                None
            }
            WorkerState::Installing | WorkerState::Installed | WorkerState::Activating => {
                tracing::debug!(%worker, state = state.name(), "Replacement progressing");
                None
            }
        }
    }

    /// Hide the notification until the process restarts.
    pub fn hide_prompt(&mut self) {
        self.prompt_hidden = true;
        tracing::debug!(state = ?self.state, "Update prompt hidden");
    }

    /// The user accepted the update.
    ///
    /// Only meaningful in `UpdateAvailable`; returns the command to send the
    /// replacement its take-over message.
    pub fn confirm(&mut self) -> Option<UpdateCommand> {
        if self.state != UpdateState::UpdateAvailable {
            tracing::debug!(state = ?self.state, "Ignoring update confirmation");
            return None;
        }
        let pending = self.pending.as_mut()?;
        pending.subscribe_activation();
        self.state = UpdateState::Updating;
        tracing::info!(worker = %pending.id(), "Applying update");
        Some(UpdateCommand::PostSkipWaiting)
    }

    /// Deliver the take-over message to the held replacement.
    pub fn send_skip_waiting(&self) -> Result<()> {
        let pending = self.pending.as_ref().ok_or(UpdateError::NoPendingReplacement)?;
        pending.post(WorkerMessage::SkipWaiting)
    }
}
