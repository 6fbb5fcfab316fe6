//! JSON output formatting for books and members.

use shelf_core::{Book, Member};

/// Convert a book to JSON for output.
pub fn book_json(book: &Book) -> serde_json::Value {
    serde_json::json!({
        "id": book.id().0,
        "title": book.title(),
        "author": book.author(),
        "total_copies": book.total_copies(),
        "available_copies": book.available_copies(),
    })
}

/// Convert a member to JSON for output.
pub fn member_json(member: &Member) -> serde_json::Value {
    let issued: Vec<u32> = member.issued_books().map(|id| id.0).collect();
    serde_json::json!({
        "id": member.id().0,
        "name": member.name(),
        "issued_books": issued,
    })
}

/// Convert multiple books to a JSON array for output.
pub fn books_json(books: &[&Book]) -> Vec<serde_json::Value> {
    books.iter().map(|book| book_json(book)).collect()
}

/// Convert multiple members to a JSON array for output.
pub fn members_json(members: &[&Member]) -> Vec<serde_json::Value> {
    members.iter().map(|member| member_json(member)).collect()
}
