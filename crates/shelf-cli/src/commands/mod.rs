//! Command handlers, one module per command group.

pub mod books;
pub mod loans;
pub mod maintenance;
pub mod members;
pub mod misc;
pub mod shell;

use shelf_core::storage::{JsonFileStore, LoadSource};
use shelf_core::Catalog;

use crate::app::AppContext;
use crate::ui::print_error;

/// Load the catalog for a one-shot command, reporting fallbacks on stderr.
pub(crate) fn open_catalog(ctx: &AppContext) -> anyhow::Result<(JsonFileStore, Catalog)> {
    let (store, loaded) = ctx.load_catalog()?;
    match &loaded.source {
        LoadSource::Restored => {}
        LoadSource::Bootstrapped => {
            if !ctx.quiet() {
                eprintln!("No saved data, starting with sample books");
            }
        }
        LoadSource::Recovered(err) => {
            let ui_ctx = ctx.ui_context(false, None);
            print_error(
                &ui_ctx,
                &format!("Failed to load saved data: {}", err),
                Some("Continuing with sample books. The next save replaces the unreadable files."),
            );
        }
    }
    Ok((store, loaded.catalog))
}
