//! Session command parsing.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use mrs_app::Page;
use mrs_model::MeasureId;
use mrs_updater::WorkerState;

/// One line typed at the session prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// `import <file>`
    Import(PathBuf),
    /// `page <name>`
    Page(Page),
    /// `select [group]`
    Select(Option<String>),
    /// `toggle <group> <id>`
    Toggle { group: String, measure_id: MeasureId },
    /// `show`
    Show,
    /// `history`
    History,
    /// `reopen <sequence>`
    Reopen(u64),
    /// `report`
    Report,
    /// `option error`
    ToggleUseError,
    /// `option formatting`
    ToggleFormatting,
    /// `fullscreen`
    Fullscreen,
    /// `update waiting <worker> [version]`
    UpdateWaiting { worker: u64, version: Option<String> },
    /// `update state <worker> <state>`
    UpdateState { worker: u64, state: WorkerState },
    /// `update confirm`
    UpdateConfirm,
    /// `update dismiss`
    UpdateDismiss,
    /// `status`
    Status,
    /// `help`
    Help,
    /// `quit`
    Quit,
}

/// Command reference printed by `help`.
pub const HELP: &str = "\
Commands:
  import <file>                  Import a JSON batch
  page <import|history|raw|report|help>
  select [group]                 Choose the group shown by `show`
  toggle <group> <id>            Flip a measure's ignored flag
  show                           Show the current model
  history                        List past imports and edits
  reopen <sequence>              Import a history entry again
  report                         Show the report inputs
  option <error|formatting>      Flip a report option
  fullscreen                     Toggle fullscreen
  update waiting <worker> [version]
  update state <worker> <state>
  update confirm | update dismiss
  status                         Show page and update state
  quit";

impl SessionCommand {
    /// Parse a line. Blank lines and `#` comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "import" => {
                if rest.is_empty() {
                    bail!("usage: import <file>");
                }
                Self::Import(PathBuf::from(rest))
            }
            "page" | "goto" => {
                let page = Page::parse(rest).with_context(|| format!("unknown page '{rest}'"))?;
                Self::Page(page)
            }
            "select" => Self::Select((!rest.is_empty()).then(|| rest.to_string())),
            "toggle" => parse_toggle(rest)?,
            "show" => Self::Show,
            "history" => Self::History,
            "reopen" => Self::Reopen(
                rest.parse()
                    .with_context(|| format!("invalid sequence number '{rest}'"))?,
            ),
            "report" => Self::Report,
            "option" => match rest {
                "error" => Self::ToggleUseError,
                "formatting" => Self::ToggleFormatting,
                _ => bail!("usage: option <error|formatting>"),
            },
            "fullscreen" => Self::Fullscreen,
            "update" => parse_update(rest)?,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => bail!("unknown command '{other}' (try `help`)"),
        };
        Ok(Some(command))
    }
}

/// The id is the last word; everything before it is the group name.
fn parse_toggle(rest: &str) -> Result<SessionCommand> {
    let Some((group, id)) = rest.rsplit_once(char::is_whitespace) else {
        bail!("usage: toggle <group> <id>");
    };
    let measure_id = id
        .parse()
        .with_context(|| format!("invalid measure id '{id}'"))?;
    Ok(SessionCommand::Toggle {
        group: group.trim().to_string(),
        measure_id,
    })
}

fn parse_update(rest: &str) -> Result<SessionCommand> {
    let mut words = rest.split_whitespace();
    let command = match words.next() {
        Some("waiting") => {
            let worker = parse_worker(words.next())?;
            SessionCommand::UpdateWaiting {
                worker,
                version: words.next().map(str::to_string),
            }
        }
        Some("state") => {
            let worker = parse_worker(words.next())?;
            let state = match words.next() {
                Some("installing") => WorkerState::Installing,
                Some("installed") => WorkerState::Installed,
                Some("activating") => WorkerState::Activating,
                Some("activated") => WorkerState::Activated,
                Some("redundant") => WorkerState::Redundant,
                _ => bail!(
                    "usage: update state <worker> <installing|installed|activating|activated|redundant>"
                ),
            };
            SessionCommand::UpdateState { worker, state }
        }
        Some("confirm") => SessionCommand::UpdateConfirm,
        Some("dismiss") => SessionCommand::UpdateDismiss,
        _ => bail!("usage: update <waiting|state|confirm|dismiss> ..."),
    };
    Ok(command)
}

fn parse_worker(word: Option<&str>) -> Result<u64> {
    let word = word.context("missing worker id")?;
    word.parse()
        .with_context(|| format!("invalid worker id '{word}'"))
}
