use std::io::IsTerminal;

use dialoguer::Confirm;

use shelf_core::BookId;

use crate::app::AppContext;
use crate::cli::{BookAddArgs, BookRemoveArgs, BookSearchArgs, OutputArgs, SearchField};
use crate::errors::CliError;
use crate::helpers::parse_output_format;
use crate::output::print_book_list;
use crate::ui::{badge, receipt, Badge, OutputMode};

use super::open_catalog;

const LIST_HINT: &str = "Hint: Run `shelf book list` to see book IDs.";

pub fn handle_add(ctx: &AppContext, args: &BookAddArgs) -> anyhow::Result<()> {
    let (store, mut catalog) = open_catalog(ctx)?;

    let book = catalog.add_book(args.title.as_str(), args.author.as_str(), args.copies)?;
    let items = [
        ("ID", book.id().to_string()),
        ("Title", book.title().to_string()),
        ("Author", book.author().to_string()),
        ("Copies", book.total_copies().to_string()),
    ];

    ctx.save_catalog(&store, &catalog)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        println!("{}", receipt(&ui_ctx, "Book added", &items));
    }
    Ok(())
}

pub fn handle_remove(ctx: &AppContext, args: &BookRemoveArgs) -> anyhow::Result<()> {
    let (store, mut catalog) = open_catalog(ctx)?;
    let id = BookId(args.id);

    let book = catalog
        .book(id)
        .ok_or_else(|| CliError::not_found(format!("Book {} not found", id), LIST_HINT))?;
    if book.on_loan() > 0 {
        return Err(CliError::invalid_input(format!(
            "Book {} still has {} copies on loan",
            id,
            book.on_loan()
        ))
        .into());
    }

    let ui_ctx = ctx.ui_context(false, None);

    if !args.yes && std::io::stdin().is_terminal() {
        let confirmed = Confirm::new()
            .with_prompt(format!("Remove '{}' by {}?", book.title(), book.author()))
            .default(false)
            .interact()?;

        if !confirmed {
            if !ctx.quiet() {
                match ui_ctx.mode {
                    OutputMode::Pretty => {
                        println!("{}", badge(&ui_ctx, Badge::Info, "Cancelled"));
                    }
                    OutputMode::Plain | OutputMode::Json => {
                        println!("status=cancelled");
                    }
                }
            }
            return Ok(());
        }
    }

    let title = book.title().to_string();
    if !catalog.remove_book(id) {
        return Err(CliError::invalid_input(format!("Book {} could not be removed", id)).into());
    }
    ctx.save_catalog(&store, &catalog)?;

    if !ctx.quiet() {
        println!(
            "{}",
            receipt(
                &ui_ctx,
                "Book removed",
                &[("ID", id.to_string()), ("Title", title)],
            )
        );
    }
    Ok(())
}

pub fn handle_list(ctx: &AppContext, args: &OutputArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.format.as_deref())?;
    let (_store, catalog) = open_catalog(ctx)?;

    let ui_ctx = ctx.ui_context(args.json, args.format.as_deref());
    print_book_list(
        &ui_ctx,
        &catalog.list_books(),
        format,
        ctx.quiet(),
        "No books in library.",
    )
}

pub fn handle_search(ctx: &AppContext, args: &BookSearchArgs) -> anyhow::Result<()> {
    let format = parse_output_format(args.output.format.as_deref())?;
    let (_store, catalog) = open_catalog(ctx)?;

    let books = match args.by {
        SearchField::Title => catalog.search_by_title(&args.keyword),
        SearchField::Author => catalog.search_by_author(&args.keyword),
    };

    let ui_ctx = ctx.ui_context(args.output.json, args.output.format.as_deref());
    print_book_list(&ui_ctx, &books, format, ctx.quiet(), "No matching books.")
}
