//! Platform default locations.

use std::path::PathBuf;

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "MeasureReportStudio", "MRS")
}

/// Default history file path (platform data directory).
pub(crate) fn default_history_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.data_dir().join("history.json"))
        .unwrap_or_else(|| PathBuf::from("history.json"))
}

/// Default configuration file path (platform config directory).
pub(crate) fn default_config_path() -> PathBuf {
    project_dirs()
        .map(|dirs| dirs.config_dir().join("configuration.toml"))
        .unwrap_or_else(|| PathBuf::from("configuration.toml"))
}
