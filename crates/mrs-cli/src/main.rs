//! Measure Report Studio CLI.

use std::io::{self, IsTerminal};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use mrs_cli::cli::{Cli, Command, LogFormatArg};
use mrs_cli::commands::{run_config, run_history};
use mrs_cli::host::restart_application;
use mrs_cli::logging::{LogConfig, LogFormat, init_logging};
use mrs_cli::session::{Session, SessionEnd};
use mrs_persistence::{JsonHistoryStore, TomlConfigurationStore};

fn main() {
    let cli = Cli::parse();
    cli.color.write_global();
    let log_config = log_config_from_cli(&cli);
    if let Err(error) = init_logging(&log_config) {
        eprintln!("error: failed to initialize logging: {error}");
        std::process::exit(1);
    }
    let exit_code = match run(cli) {
        Ok(()) => 0,
        Err(error) => {
            eprintln!("error: {error:#}");
            1
        }
    };
    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<()> {
    let history = cli
        .history_file
        .map_or_else(JsonHistoryStore::at_default_path, JsonHistoryStore::new);
    let config = cli
        .config_file
        .map_or_else(TomlConfigurationStore::at_default_path, TomlConfigurationStore::new);
    let mut stdout = io::stdout().lock();

    match cli.command {
        Command::Session(args) => {
            let runtime = tokio::runtime::Builder::new_multi_thread()
                .enable_all()
                .build()
                .context("Failed to start async runtime")?;
            let end = runtime.block_on(async {
                let mut session = Session::new(Arc::new(history), Arc::new(config));
                if let Some(path) = &args.import {
                    session.import_file(path)?;
                }
                session.run(io::stdin().lock(), &mut stdout).await
            })?;
            tracing::info!(?end, "Session ended");
            if end == SessionEnd::Reload {
                restart_application()?;
            }
            Ok(())
        }
        Command::History(args) => {
            run_history(&history, args.limit, &mut stdout)
        }
        Command::Config => run_config(&config, &mut stdout),
    }
}

/// Build logging configuration from CLI flags with consistent precedence.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        log_file: cli.log_file.clone(),
        with_ansi: match cli.color.color {
            ColorChoice::Always => true,
            ColorChoice::Never => false,
            ColorChoice::Auto => cli.log_file.is_none() && io::stderr().is_terminal(),
        },
        ..LogConfig::default()
    }
}
