//! Non-interactive subcommands.

use std::io::Write;

use anyhow::{Context, Result};
use mrs_persistence::{ConfigurationStore, HistoryLog, JsonHistoryStore, TomlConfigurationStore};

use crate::render;

/// Print the stored history, most recent first.
pub fn run_history<W: Write>(
    store: &JsonHistoryStore,
    limit: Option<usize>,
    out: &mut W,
) -> Result<()> {
    let entries = store.list().map_err(|e| {
        let hint = e.suggestion().map(|s| format!(" ({s})")).unwrap_or_default();
        anyhow::anyhow!("{}{hint}", e.user_message())
    })?;
    writeln!(out, "History: {}", store.path().display())?;
    if entries.is_empty() {
        writeln!(out, "No entries.")?;
        return Ok(());
    }
    let shown = entries.iter().rev().take(limit.unwrap_or(usize::MAX));
    writeln!(out, "{}", render::history_table(shown))?;
    Ok(())
}

/// Print the configuration path and the values the report would use.
pub fn run_config<W: Write>(store: &TomlConfigurationStore, out: &mut W) -> Result<()> {
    writeln!(out, "Configuration: {}", store.path().display())?;
    let config = store.read().map_err(|e| {
        let hint = e.suggestion().map(|s| format!(" ({s})")).unwrap_or_default();
        anyhow::anyhow!("{}{hint}", e.user_message())
    })?;
    let referential = if config.referential.name.is_empty() {
        "(none)"
    } else {
        config.referential.name.as_str()
    };
    writeln!(out, "Report title: {}", config.report.title)?;
    writeln!(out, "Decimal places: {}", config.report.decimal_places)?;
    writeln!(out, "Show ignored: {}", config.report.show_ignored)?;
    writeln!(out, "Referential: {referential}")?;
    if !config.referential.values.is_empty() {
        writeln!(out, "{}", render::configuration_table(&config))
            .context("Failed to write configuration table")?;
    }
    Ok(())
}
