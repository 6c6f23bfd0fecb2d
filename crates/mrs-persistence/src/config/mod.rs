//! Referential and report configuration.

mod store;
mod types;

pub use store::{ConfigurationStore, TomlConfigurationStore};
pub use types::{AppConfiguration, ReferentialSettings, ReferentialValue, ReportPreferences};
