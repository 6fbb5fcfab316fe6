//! Text and table output formatting for books and members.

use shelf_core::{Book, Member};

use crate::helpers::OutputFormat;
use crate::ui::{simple_table, Column, OutputMode, UiContext};

use super::json::{books_json, members_json};

const BOOK_COLUMNS: &[Column] = &[
    Column::new("ID"),
    Column::new("TITLE"),
    Column::new("AUTHOR"),
    Column::new("AVAILABLE"),
    Column::new("TOTAL"),
];

const MEMBER_COLUMNS: &[Column] = &[
    Column::new("ID"),
    Column::new("NAME"),
    Column::new("BORROWED"),
    Column::new("BOOK IDS"),
];

fn book_row(book: &Book) -> Vec<String> {
    vec![
        book.id().to_string(),
        book.title().to_string(),
        book.author().to_string(),
        book.available_copies().to_string(),
        book.total_copies().to_string(),
    ]
}

fn member_row(member: &Member) -> Vec<String> {
    let ids: Vec<String> = member.issued_books().map(|id| id.to_string()).collect();
    vec![
        member.id().to_string(),
        member.name().to_string(),
        member.borrowed_count().to_string(),
        ids.join(","),
    ]
}

/// Render a list in the requested format.
///
/// Table always carries a header, even when stdout is not a terminal.
/// Plain prints the one-line display form of each item.
fn render_list<T: std::fmt::Display>(
    ui_ctx: &UiContext,
    format: Option<OutputFormat>,
    columns: &[Column],
    items: &[&T],
    row: fn(&T) -> Vec<String>,
) -> String {
    match format.unwrap_or(OutputFormat::Table) {
        OutputFormat::Table => {
            let table_ctx = UiContext {
                mode: OutputMode::Pretty,
                ..ui_ctx.clone()
            };
            let rows: Vec<Vec<String>> = items.iter().map(|item| row(item)).collect();
            simple_table(&table_ctx, columns, &rows)
        }
        OutputFormat::Plain => items
            .iter()
            .map(|item| item.to_string())
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

/// Print a list of books as JSON, a table, or display lines.
pub fn print_book_list(
    ui_ctx: &UiContext,
    books: &[&Book],
    format: Option<OutputFormat>,
    quiet: bool,
    empty_message: &str,
) -> anyhow::Result<()> {
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&books_json(books))?);
        return Ok(());
    }
    if books.is_empty() {
        if !quiet {
            println!("{}", empty_message);
        }
        return Ok(());
    }
    println!(
        "{}",
        render_list(ui_ctx, format, BOOK_COLUMNS, books, book_row)
    );
    Ok(())
}

/// Print a list of members as JSON, a table, or display lines.
pub fn print_member_list(
    ui_ctx: &UiContext,
    members: &[&Member],
    format: Option<OutputFormat>,
    quiet: bool,
) -> anyhow::Result<()> {
    if ui_ctx.mode.is_json() {
        println!("{}", serde_json::to_string_pretty(&members_json(members))?);
        return Ok(());
    }
    if members.is_empty() {
        if !quiet {
            println!("No members registered");
        }
        return Ok(());
    }
    println!(
        "{}",
        render_list(ui_ctx, format, MEMBER_COLUMNS, members, member_row)
    );
    Ok(())
}
