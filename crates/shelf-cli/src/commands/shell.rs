use std::io;

use shelf_core::storage::LoadSource;

use crate::app::AppContext;
use crate::shell::Shell;
use crate::ui::print_error;

pub fn handle_shell(ctx: &AppContext) -> anyhow::Result<()> {
    let save_on_exit = ctx.config()?.shell.save_on_exit;
    let (store, loaded) = ctx.load_catalog()?;

    match &loaded.source {
        LoadSource::Restored => println!("Library data loaded from disk"),
        LoadSource::Bootstrapped => println!("No saved data, starting with sample books"),
        LoadSource::Recovered(err) => {
            let ui_ctx = ctx.ui_context(false, None);
            print_error(
                &ui_ctx,
                &format!("Failed to load saved data: {}", err),
                Some("Continuing with sample books. Saving replaces the unreadable files."),
            );
        }
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    Shell::new(loaded.catalog, &store, stdin.lock(), stdout.lock())
        .save_on_exit(save_on_exit)
        .run()?;
    Ok(())
}
