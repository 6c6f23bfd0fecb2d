//! Terminal host for the controller.

use std::ffi::OsString;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::{Context, Result};
use mrs_app::AppHost;

/// Host calls observed by the session loop.
#[derive(Debug, Clone, Default)]
pub struct HostFlags {
    reload: Arc<AtomicBool>,
    fullscreen: Arc<AtomicBool>,
}

impl HostFlags {
    pub fn reload_requested(&self) -> bool {
        self.reload.load(Ordering::Acquire)
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen.load(Ordering::Acquire)
    }
}

/// A terminal has no window: fullscreen is only recorded, and a reload is
/// carried out by the binary once the session has ended.
#[derive(Debug, Default)]
pub struct TerminalHost {
    flags: HostFlags,
}

impl TerminalHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shared view of what the controller asked for.
    pub fn flags(&self) -> HostFlags {
        self.flags.clone()
    }
}

impl AppHost for TerminalHost {
    fn reload(&mut self) {
        tracing::info!("Reload requested by update coordinator");
        self.flags.reload.store(true, Ordering::Release);
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        tracing::debug!(fullscreen, "Fullscreen changed");
        self.flags.fullscreen.store(fullscreen, Ordering::Release);
    }
}

/// Start a fresh copy of this executable with the same arguments, then exit.
///
/// A startup import is not repeated, since it is already in history.
pub fn restart_application() -> Result<()> {
    let current_exe =
        std::env::current_exe().context("Failed to get current executable path")?;
    tracing::info!("Restarting application: {}", current_exe.display());

    std::process::Command::new(&current_exe)
        .args(restart_args(std::env::args_os().skip(1)))
        .spawn()
        .context("Failed to spawn new process")?;

    std::process::exit(0);
}

/// Arguments for the restarted process: everything except `--import`.
pub fn restart_args(args: impl IntoIterator<Item = OsString>) -> Vec<OsString> {
    let mut kept = Vec::new();
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "--import" {
            args.next();
            continue;
        }
        if arg.to_str().is_some_and(|a| a.starts_with("--import=")) {
            continue;
        }
        kept.push(arg);
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_restart_args_drop_startup_import() {
        let args = os(&[
            "--history-file",
            "h.json",
            "session",
            "--import",
            "batch.json",
        ]);
        assert_eq!(
            restart_args(args),
            os(&["--history-file", "h.json", "session"])
        );
    }

    #[test]
    fn test_restart_args_drop_inline_import() {
        let args = os(&["-v", "session", "--import=batch.json"]);
        assert_eq!(restart_args(args), os(&["-v", "session"]));
    }

    #[test]
    fn test_restart_args_keep_everything_else() {
        let args = os(&["--log-format", "json", "history", "--limit", "3"]);
        assert_eq!(restart_args(args.clone()), args);
    }
}
