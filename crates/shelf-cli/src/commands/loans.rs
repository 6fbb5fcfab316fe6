use shelf_core::{BookId, Catalog, MemberId};

use crate::app::AppContext;
use crate::cli::LoanArgs;
use crate::errors::CliError;
use crate::ui::receipt;

use super::open_catalog;

/// Both ids must exist before a loan can change.
fn require_ids(catalog: &Catalog, member_id: MemberId, book_id: BookId) -> Result<(), CliError> {
    if catalog.member(member_id).is_none() {
        return Err(CliError::not_found(
            format!("Member {} not found", member_id),
            "Hint: Run `shelf member list` to see member IDs.",
        ));
    }
    if catalog.book(book_id).is_none() {
        return Err(CliError::not_found(
            format!("Book {} not found", book_id),
            "Hint: Run `shelf book list` to see book IDs.",
        ));
    }
    Ok(())
}

pub fn handle_issue(ctx: &AppContext, args: &LoanArgs) -> anyhow::Result<()> {
    let (store, mut catalog) = open_catalog(ctx)?;
    let member_id = MemberId(args.member_id);
    let book_id = BookId(args.book_id);
    require_ids(&catalog, member_id, book_id)?;

    if !catalog.issue_book(member_id, book_id) {
        return Err(CliError::invalid_input(format!(
            "Failed to issue book. No copies of book {} are available",
            book_id
        ))
        .into());
    }
    ctx.save_catalog(&store, &catalog)?;

    if !ctx.quiet() {
        let available = catalog
            .book(book_id)
            .map(|b| b.available_copies())
            .unwrap_or_default();
        let ui_ctx = ctx.ui_context(false, None);
        println!(
            "{}",
            receipt(
                &ui_ctx,
                "Book issued successfully",
                &[
                    ("Member", member_id.to_string()),
                    ("Book", book_id.to_string()),
                    ("Available", available.to_string()),
                ],
            )
        );
    }
    Ok(())
}

pub fn handle_return(ctx: &AppContext, args: &LoanArgs) -> anyhow::Result<()> {
    let (store, mut catalog) = open_catalog(ctx)?;
    let member_id = MemberId(args.member_id);
    let book_id = BookId(args.book_id);
    require_ids(&catalog, member_id, book_id)?;

    if !catalog.return_book(member_id, book_id) {
        return Err(CliError::invalid_input(format!(
            "Failed to return book. Member {} does not hold book {}",
            member_id, book_id
        ))
        .into());
    }
    ctx.save_catalog(&store, &catalog)?;

    if !ctx.quiet() {
        let ui_ctx = ctx.ui_context(false, None);
        println!(
            "{}",
            receipt(
                &ui_ctx,
                "Book returned successfully",
                &[
                    ("Member", member_id.to_string()),
                    ("Book", book_id.to_string()),
                ],
            )
        );
    }
    Ok(())
}
