//! Line-based interactive session over the application controller.

use std::io::{BufRead, Write};
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use mrs_app::{
    AppController, DataMessage, HistoryMessage, Message, Page, ReportMessage, UpdateMessage,
};
use mrs_model::GroupedData;
use mrs_persistence::{ConfigurationStore, HistoryLog};
use mrs_updater::{UpdateSignal, WorkerId};

use crate::command::{HELP, SessionCommand};
use crate::host::{HostFlags, TerminalHost};
use crate::render;
use crate::worker::ConsoleWorker;

/// Why a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// The user typed `quit`.
    Quit,
    /// Input ran out.
    EndOfInput,
    /// An activated update asked for a reload.
    Reload,
}

/// A controller driven by typed commands.
pub struct Session<H, C>
where
    H: HistoryLog + 'static,
    C: ConfigurationStore + 'static,
{
    controller: AppController<H, C>,
    host: HostFlags,
}

impl<H, C> Session<H, C>
where
    H: HistoryLog + 'static,
    C: ConfigurationStore + 'static,
{
    /// Must be called from within a tokio runtime.
    pub fn new(history: Arc<H>, config: Arc<C>) -> Self {
        let host = TerminalHost::new();
        let flags = host.flags();
        Self {
            controller: AppController::new(history, config, Box::new(host)),
            host: flags,
        }
    }

    /// Read a JSON batch and import it.
    pub fn import_file(&mut self, path: &Path) -> Result<()> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let data: GroupedData = serde_json::from_str(&content)
            .with_context(|| format!("Invalid measurement batch in {}", path.display()))?;
        self.controller.dispatch(Message::import(data));
        Ok(())
    }

    /// Read commands until `quit`, end of input or a reload request.
    ///
    /// A command that fails prints its error and the session continues.
    pub async fn run<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<SessionEnd> {
        writeln!(out, "{}", render::status_line(&self.controller.state().navigation()))?;
        let mut end = SessionEnd::EndOfInput;

        for line in input.lines() {
            let line = line.context("Failed to read command")?;
            let command = match SessionCommand::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(out, "error: {e:#}")?;
                    continue;
                }
            };
            if command == SessionCommand::Quit {
                end = SessionEnd::Quit;
                break;
            }
            if let Err(e) = self.execute(command, &mut out).await {
                writeln!(out, "error: {e:#}")?;
            }
            if self.host.reload_requested() {
                writeln!(out, "Update activated, reloading.")?;
                end = SessionEnd::Reload;
                break;
            }
        }

        self.controller.flush_history().await;
        let failed = self.controller.failed_history_writes();
        if failed > 0 {
            writeln!(out, "warning: {failed} history write(s) failed, see the log")?;
        }
        Ok(end)
    }

    /// Apply one command and print its result.
    pub async fn execute<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<()> {
        match command {
            SessionCommand::Import(path) => {
                self.import_file(&path)?;
                self.print_raw_data(out)?;
            }
            SessionCommand::Page(page) => self.show_page(page, out).await?,
            SessionCommand::Select(group) => {
                let requested = group.clone();
                self.dispatch(Message::Data(DataMessage::SelectGroup(group)))
                    .await;
                if requested.is_some()
                    && self.controller.state().ui.selected_group != requested
                {
                    writeln!(out, "No such group.")?;
                }
                self.print_raw_data(out)?;
            }
            SessionCommand::Toggle { group, measure_id } => {
                let before = self.controller.state().model().cloned();
                self.dispatch(Message::toggle_ignored(group.clone(), measure_id))
                    .await;
                let state = self.controller.state();
                match state.model().and_then(|m| m.measure(&group, measure_id)) {
                    Some(measure) if state.model() != before.as_ref() => writeln!(
                        out,
                        "{group}/{measure_id} is now {}.",
                        if measure.ignored { "ignored" } else { "included" }
                    )?,
                    _ => writeln!(out, "Nothing to toggle.")?,
                }
            }
            SessionCommand::Show => self.print_raw_data(out)?,
            SessionCommand::History => self.show_page(Page::History, out).await?,
            SessionCommand::Reopen(sequence) => {
                if self.controller.state().history.entry(sequence).is_none() {
                    // Reopen only sees the list last loaded.
                    self.dispatch(Message::History(HistoryMessage::Refresh))
                        .await;
                }
                if self.controller.state().history.entry(sequence).is_none() {
                    writeln!(out, "No history entry #{sequence}.")?;
                    return Ok(());
                }
                self.dispatch(Message::History(HistoryMessage::Reopen { sequence }))
                    .await;
                self.print_raw_data(out)?;
            }
            SessionCommand::Report => self.show_page(Page::Report, out).await?,
            SessionCommand::ToggleUseError => {
                self.dispatch(Message::Report(ReportMessage::ToggleUseErrorForReferential))
                    .await;
                self.print_report_options(out)?;
            }
            SessionCommand::ToggleFormatting => {
                self.dispatch(Message::Report(ReportMessage::ToggleConditionalFormatting))
                    .await;
                self.print_report_options(out)?;
            }
            SessionCommand::Fullscreen => {
                self.dispatch(Message::ToggleFullscreen).await;
                writeln!(
                    out,
                    "Fullscreen {}.",
                    if self.host.is_fullscreen() { "on" } else { "off" }
                )?;
            }
            SessionCommand::UpdateWaiting { worker, version } => {
                let worker = ConsoleWorker::new(worker, version);
                self.dispatch(Message::Update(UpdateMessage::Signal(
                    UpdateSignal::ReplacementWaiting(Box::new(worker)),
                )))
                .await;
                self.print_status(out)?;
            }
            SessionCommand::UpdateState { worker, state } => {
                self.dispatch(Message::Update(UpdateMessage::Signal(
                    UpdateSignal::WorkerStateChanged {
                        worker: WorkerId(worker),
                        state,
                    },
                )))
                .await;
                self.print_status(out)?;
            }
            SessionCommand::UpdateConfirm => {
                self.dispatch(Message::Update(UpdateMessage::Confirm)).await;
                self.print_status(out)?;
            }
            SessionCommand::UpdateDismiss => {
                self.dispatch(Message::Update(UpdateMessage::Dismiss)).await;
                self.print_status(out)?;
            }
            SessionCommand::Status => self.print_status(out)?,
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Quit => {}
        }
        Ok(())
    }

    async fn show_page<W: Write>(&mut self, page: Page, out: &mut W) -> Result<()> {
        self.dispatch(Message::Navigate(page)).await;
        if self.controller.state().page != page {
            writeln!(out, "{} needs an imported model.", page.label())?;
        }
        self.print_page(out)
    }

    /// Dispatch and wait for any store read it started.
    async fn dispatch(&mut self, message: Message) {
        self.controller.dispatch(message);
        self.controller.settle().await;
    }

    fn print_page<W: Write>(&self, out: &mut W) -> Result<()> {
        let state = self.controller.state();
        match state.page {
            Page::Import => writeln!(out, "Use `import <file>` to load a batch.")?,
            Page::Help => writeln!(out, "{HELP}")?,
            Page::Raw => self.print_raw_data(out)?,
            Page::History => {
                if let Some(error) = &state.history.error {
                    writeln!(out, "History unavailable: {error}")?;
                } else if state.history.entries.is_empty() {
                    writeln!(out, "History is empty.")?;
                } else {
                    writeln!(
                        out,
                        "{}",
                        render::history_table(state.history.most_recent_first())
                    )?;
                }
            }
            Page::Report => {
                if let Some(error) = &state.report.configuration_error {
                    writeln!(out, "Configuration unreadable, using defaults: {error}")?;
                }
                match state.report_inputs() {
                    Some(inputs) => writeln!(out, "{}", render::report(&inputs))?,
                    None => writeln!(out, "Report needs an imported model.")?,
                }
            }
        }
        Ok(())
    }

    fn print_raw_data<W: Write>(&self, out: &mut W) -> Result<()> {
        match self.controller.state().raw_data_view() {
            Some(view) => writeln!(out, "{}", render::raw_data(&view))?,
            None => writeln!(out, "No model loaded.")?,
        }
        Ok(())
    }

    fn print_report_options<W: Write>(&self, out: &mut W) -> Result<()> {
        let report = &self.controller.state().report;
        writeln!(
            out,
            "Use error for referential: {}, conditional formatting: {}",
            report.use_error_for_referential, report.display_conditional_formatting
        )?;
        Ok(())
    }

    fn print_status<W: Write>(&self, out: &mut W) -> Result<()> {
        let state = self.controller.state();
        writeln!(out, "{}", render::status_line(&state.navigation()))?;
        if let Some(pending) = state.updates.pending() {
            writeln!(
                out,
                "Pending replacement {} (version {})",
                pending.id(),
                pending.version().unwrap_or("unknown")
            )?;
        }
        Ok(())
    }
}
