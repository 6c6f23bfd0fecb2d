//! The controller: latest state, message queue and effect execution.
//!
//! Messages are applied strictly one at a time, each against the state the
//! previous one produced. Store reads run on the blocking pool and come back
//! as messages through the same queue.

mod history_writer;
mod host;

use std::mem;
use std::sync::Arc;

use mrs_persistence::{ConfigurationStore, HistoryLog};
use tokio::sync::mpsc;

use crate::app::{Effect, Transition, reduce};
use crate::message::{HistoryMessage, Message, ReportMessage};
use crate::state::AppState;

pub use history_writer::HistoryWriter;
pub use host::AppHost;

/// Owns the application state and its collaborators.
pub struct AppController<H, C>
where
    H: HistoryLog + 'static,
    C: ConfigurationStore + 'static,
{
    state: AppState,
    config: Arc<C>,
    writer: HistoryWriter,
    host: Box<dyn AppHost>,
    sender: mpsc::UnboundedSender<Message>,
    receiver: mpsc::UnboundedReceiver<Message>,
    history: Arc<H>,
}

impl<H, C> AppController<H, C>
where
    H: HistoryLog + 'static,
    C: ConfigurationStore + 'static,
{
    /// Create a controller on the import page with no model.
    ///
    /// Must be called from within a tokio runtime: the history writer task
    /// starts here.
    pub fn new(history: Arc<H>, config: Arc<C>, host: Box<dyn AppHost>) -> Self {
        let (sender, receiver) = mpsc::unbounded_channel();
        Self {
            state: AppState::new(),
            config,
            writer: HistoryWriter::spawn(Arc::clone(&history)),
            host,
            sender,
            receiver,
            history,
        }
    }

    /// The latest state.
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// The history log the writer appends to.
    pub fn history(&self) -> &Arc<H> {
        &self.history
    }

    /// Queue for messages produced outside the controller (importer,
    /// update-delivery subsystem, renderers).
    pub fn sender(&self) -> mpsc::UnboundedSender<Message> {
        self.sender.clone()
    }

    /// Apply one message now and start its effects.
    pub fn dispatch(&mut self, message: Message) -> &AppState {
        tracing::trace!(?message, "Dispatching");
        let Transition { state, effects } = reduce(mem::take(&mut self.state), message);
        self.state = state;
        for effect in effects {
            self.perform(effect);
        }
        &self.state
    }

    /// Apply the next queued message, waiting for one if the queue is empty.
    pub async fn step(&mut self) {
        // The controller holds a sender, so the queue never closes.
        if let Some(message) = self.receiver.recv().await {
            self.dispatch(message);
        }
    }

    /// Apply queued messages until every store read started so far has
    /// come back.
    pub async fn settle(&mut self) {
        while self.state.has_pending_reads() {
            self.step().await;
        }
    }

    /// Apply queued messages until `shutdown` resolves or a reload has been
    /// requested.
    pub async fn run(&mut self, shutdown: impl Future<Output = ()>) {
        tokio::pin!(shutdown);
        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Controller shutting down");
                    break;
                }
                Some(message) = self.receiver.recv() => {
                    self.dispatch(message);
                    if self.state.updates.is_reload_requested() {
                        tracing::info!("Reload requested, controller stopping");
                        break;
                    }
                }
                else => break,
            }
        }
        self.flush_history().await;
    }

    /// Apply every message already queued without waiting for new ones.
    pub fn drain(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(message) = self.receiver.try_recv() {
            self.dispatch(message);
            applied += 1;
        }
        applied
    }

    /// Wait until every history append dispatched so far has been attempted.
    pub async fn flush_history(&self) {
        self.writer.flush().await;
    }

    /// History appends that failed since start.
    pub fn failed_history_writes(&self) -> u64 {
        self.writer.failed_writes()
    }

    fn perform(&mut self, effect: Effect) {
        match effect {
            Effect::AppendHistory(record) => self.writer.append(record),
            Effect::LoadHistory => {
                let entries = self.writer.list_later();
                let sender = self.sender.clone();
                tokio::spawn(async move {
                    let result = entries.await;
                    let _ = sender.send(Message::History(HistoryMessage::Loaded(result)));
                });
            }
            Effect::LoadConfiguration => {
                let config = Arc::clone(&self.config);
                let sender = self.sender.clone();
                tokio::spawn(async move {
                    let result = tokio::task::spawn_blocking(move || config.read())
                        .await
                        .map_err(|e| format!("Configuration read task failed: {e}"))
                        .and_then(|r| r.map_err(|e| e.user_message()));
                    let _ = sender.send(Message::Report(ReportMessage::ConfigurationLoaded(result)));
                });
            }
            Effect::PostSkipWaiting => {
                if let Err(e) = self.state.updates.send_skip_waiting() {
                    tracing::warn!(error = %e, "Could not notify replacement: {}", e.user_message());
                }
            }
            Effect::Reload => self.host.reload(),
            Effect::SetFullscreen(fullscreen) => self.host.set_fullscreen(fullscreen),
        }
    }
}
