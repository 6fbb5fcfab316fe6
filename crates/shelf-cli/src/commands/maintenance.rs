use shelf_core::storage::CatalogStore;
use shelf_core::ShelfError;

use crate::app::AppContext;
use crate::errors::CliError;
use crate::ui::{badge, hint, kv, Badge, OutputMode};

/// Verify the saved snapshot without falling back to sample books.
pub fn handle_check(ctx: &AppContext) -> anyhow::Result<()> {
    let store = ctx.store()?;
    let ui_ctx = ctx.ui_context(false, None);

    // Loading already runs the integrity checks.
    match store.load() {
        Ok(Some(catalog)) => {
            if !ctx.quiet() {
                let books = catalog.book_count().to_string();
                let members = catalog.member_count().to_string();
                match ui_ctx.mode {
                    OutputMode::Pretty => {
                        println!("{}", badge(&ui_ctx, Badge::Ok, "All checks passed"));
                        println!("  {}", kv(&ui_ctx, "Books", &books));
                        println!("  {}", kv(&ui_ctx, "Members", &members));
                    }
                    OutputMode::Plain | OutputMode::Json => {
                        println!("check=decode ok");
                        println!("check=loans ok");
                        println!("{}", kv(&ui_ctx, "books", &books));
                        println!("{}", kv(&ui_ctx, "members", &members));
                        println!("status=ok");
                    }
                }
            }
            Ok(())
        }
        Ok(None) => Err(CliError::not_found(
            format!("No saved catalog in {}", store.location().display()),
            "Hint: Run `shelf shell` and save, or any command that changes data.",
        )
        .into()),
        Err(err @ (ShelfError::Format(_) | ShelfError::Integrity(_) | ShelfError::Validation(_))) => {
            match ui_ctx.mode {
                OutputMode::Pretty => {
                    println!("{}", badge(&ui_ctx, Badge::Err, "Integrity check failed"));
                    println!(
                        "{}",
                        hint(&ui_ctx, "Fix or remove the data files before the next save.")
                    );
                }
                OutputMode::Plain | OutputMode::Json => {
                    eprintln!("status=failed");
                }
            }
            Err(CliError::IntegrityFailed(err.to_string()).into())
        }
        Err(err) => Err(anyhow::anyhow!("Failed to read catalog: {}", err)),
    }
}
