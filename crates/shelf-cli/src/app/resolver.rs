//! Path resolution for config file and data directory.

use std::path::PathBuf;

use crate::cli::Cli;
use crate::config::{default_config_path, default_data_dir, ShelfConfig};
use crate::constants::CONFIG_ENV;

/// Resolve the config file path, checking SHELF_CONFIG env var first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var(CONFIG_ENV) {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Resolve the data directory: CLI flag or env, then config file, then XDG default.
pub fn resolve_data_dir(cli: &Cli, config: &ShelfConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = cli.data_dir.clone() {
        return Ok(path);
    }
    if let Some(path) = config.storage.data_dir.as_deref() {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }
    default_data_dir()
}
