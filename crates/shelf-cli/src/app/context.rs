//! Application context for the Shelf CLI.
//!
//! Provides a unified context that combines CLI arguments with
//! lazily-loaded configuration and access to the catalog store.

use std::path::PathBuf;

use once_cell::unsync::OnceCell;
use tracing::debug;

use shelf_core::storage::{load_or_bootstrap, CatalogStore, JsonFileStore, Loaded};
use shelf_core::Catalog;

use crate::cli::Cli;
use crate::config::{read_config, ShelfConfig};
use crate::ui::UiContext;

use super::resolver::{resolve_config_path, resolve_data_dir};

/// Application context that bundles CLI args with configuration.
///
/// This avoids repeatedly loading config and threading multiple parameters
/// through handler functions.
pub struct AppContext<'a> {
    cli: &'a Cli,
    config: OnceCell<ShelfConfig>,
}

impl<'a> AppContext<'a> {
    /// Create a new application context from CLI arguments.
    pub fn new(cli: &'a Cli) -> Self {
        Self {
            cli,
            config: OnceCell::new(),
        }
    }

    /// Check if quiet mode is enabled.
    pub fn quiet(&self) -> bool {
        self.cli.quiet
    }

    /// Get the configuration, loading it lazily if needed.
    ///
    /// A missing config file is not an error; defaults apply.
    pub fn config(&self) -> anyhow::Result<&ShelfConfig> {
        self.config.get_or_try_init(|| {
            let path = resolve_config_path()?;
            if path.exists() {
                debug!(path = %path.display(), "reading config");
                read_config(&path)
            } else {
                Ok(ShelfConfig::default())
            }
        })
    }

    /// Resolved data directory.
    pub fn data_dir(&self) -> anyhow::Result<PathBuf> {
        resolve_data_dir(self.cli, self.config()?)
    }

    /// Store backed by the resolved data directory.
    pub fn store(&self) -> anyhow::Result<JsonFileStore> {
        Ok(JsonFileStore::new(self.data_dir()?))
    }

    /// Load the catalog, falling back to the sample books.
    pub fn load_catalog(&self) -> anyhow::Result<(JsonFileStore, Loaded)> {
        let store = self.store()?;
        let loaded = load_or_bootstrap(&store);
        Ok((store, loaded))
    }

    /// Save the catalog, turning storage failures into CLI errors.
    pub fn save_catalog(&self, store: &JsonFileStore, catalog: &Catalog) -> anyhow::Result<()> {
        store
            .save(catalog)
            .map_err(|e| anyhow::anyhow!("Failed to save catalog: {}", e))
    }

    /// Build a UI context for a command.
    pub fn ui_context(&self, json: bool, format: Option<&str>) -> UiContext {
        UiContext::from_env(json, format, self.cli.no_color, self.cli.ascii)
    }
}
