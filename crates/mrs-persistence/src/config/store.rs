//! Configuration store backed by a TOML file.

use std::path::{Path, PathBuf};

use super::AppConfiguration;
use crate::error::{PersistenceError, Result};
use crate::io::{read_optional, write_atomic};

/// Read access to the persisted [`AppConfiguration`].
pub trait ConfigurationStore: Send + Sync {
    /// Read the current configuration. No caching: every call hits the store.
    fn read(&self) -> Result<AppConfiguration>;
}

impl<T: ConfigurationStore + ?Sized> ConfigurationStore for std::sync::Arc<T> {
    fn read(&self) -> Result<AppConfiguration> {
        (**self).read()
    }
}

/// TOML file in the user's config directory.
#[derive(Debug, Clone)]
pub struct TomlConfigurationStore {
    path: PathBuf,
}

impl TomlConfigurationStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the platform default location.
    pub fn at_default_path() -> Self {
        Self::new(crate::paths::default_config_path())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write a configuration. The controller never calls this; it exists for
    /// tooling that seeds the file.
    pub fn save(&self, config: &AppConfiguration) -> Result<()> {
        let content =
            toml::to_string_pretty(config).map_err(|e| PersistenceError::Serialization {
                kind: "configuration",
                source: Box::new(e),
            })?;
        write_atomic(&self.path, content.as_bytes())?;
        tracing::info!("Saved configuration to {}", self.path.display());
        Ok(())
    }
}

impl ConfigurationStore for TomlConfigurationStore {
    fn read(&self) -> Result<AppConfiguration> {
        let Some(content) = read_optional(&self.path)? else {
            tracing::debug!(
                "No configuration at {}, using defaults",
                self.path.display()
            );
            return Ok(AppConfiguration::default());
        };

        toml::from_str(&content).map_err(|e| PersistenceError::InvalidFormat {
            kind: "configuration",
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }
}
