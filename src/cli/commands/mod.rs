//! Command implementations for the citizen CLI
//!
//! One module per subcommand, plus the helpers they share for loading
//! configuration and opening the session store.

use anyhow::{Context, Result};

use crate::config::{AppConfig, ConfigLoader};
use crate::session::FileStore;

pub mod config;
pub mod hazards;
pub mod login;
pub mod logout;
pub mod report;
pub mod reports;
pub mod start;
pub mod version;

/// Load the merged configuration, honouring `--config`
pub(crate) fn load_config(custom: Option<&str>) -> Result<AppConfig> {
    let loader = ConfigLoader::load_with_custom_config(custom)?;
    loader.config().context("Failed to load configuration")
}

/// Open the key-value store holding the login flag
pub(crate) fn open_store(config: &AppConfig) -> Result<FileStore> {
    let path = match config.storage.custom_path() {
        Some(path) => path,
        None => FileStore::default_path()?,
    };
    tracing::debug!("Using state file {}", path.display());
    Ok(FileStore::new(path))
}
