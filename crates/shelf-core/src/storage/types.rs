//! On-disk record types and their versioned encoding.
//!
//! Each collection is stored in its own file as an envelope carrying a
//! `format_version` and the records:
//!
//! ```json
//! { "format_version": 1, "books": [ { "id": 1, "title": "...", ... } ] }
//! { "format_version": 1, "members": [ { "id": 1, "name": "...", "issued_books": [2] } ] }
//! ```
//!
//! Records are written in ascending id order. Decoding checks the version
//! before the body so a newer file is reported as such, not as bad JSON.

use serde::{Deserialize, Serialize};

use crate::catalog::{Book, BookId, Catalog, Member, MemberId};
use crate::error::{Result, ShelfError};

/// Current snapshot format version.
pub const FORMAT_VERSION: u32 = 1;

/// Stored form of a [`Book`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: u32,
    pub title: String,
    pub author: String,
    pub total_copies: u32,
    pub available_copies: u32,
}

impl From<&Book> for BookRecord {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id().0,
            title: book.title().to_string(),
            author: book.author().to_string(),
            total_copies: book.total_copies(),
            available_copies: book.available_copies(),
        }
    }
}

impl TryFrom<BookRecord> for Book {
    type Error = ShelfError;

    fn try_from(record: BookRecord) -> Result<Self> {
        Book::restore(
            BookId(record.id),
            record.title,
            record.author,
            record.total_copies,
            record.available_copies,
        )
    }
}

/// Stored form of a [`Member`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub issued_books: Vec<u32>,
}

impl From<&Member> for MemberRecord {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id().0,
            name: member.name().to_string(),
            issued_books: member.issued_books().map(|id| id.0).collect(),
        }
    }
}

impl From<MemberRecord> for Member {
    fn from(record: MemberRecord) -> Self {
        Member::restore(
            MemberId(record.id),
            record.name,
            record.issued_books.into_iter().map(BookId),
        )
    }
}

/// Envelope of `books.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct BooksFile {
    pub format_version: u32,
    pub books: Vec<BookRecord>,
}

/// Envelope of `members.json`.
#[derive(Debug, Serialize, Deserialize)]
pub struct MembersFile {
    pub format_version: u32,
    pub members: Vec<MemberRecord>,
}

#[derive(Deserialize)]
struct VersionHeader {
    format_version: u32,
}

fn check_version(bytes: &[u8], what: &str) -> Result<()> {
    let header: VersionHeader = serde_json::from_slice(bytes)
        .map_err(|e| ShelfError::Format(format!("{}: {}", what, e)))?;
    if header.format_version != FORMAT_VERSION {
        return Err(ShelfError::Format(format!(
            "{}: unsupported format version {} (expected {})",
            what, header.format_version, FORMAT_VERSION
        )));
    }
    Ok(())
}

/// Encode the book collection of `catalog`.
pub fn encode_books(catalog: &Catalog) -> Result<Vec<u8>> {
    let file = BooksFile {
        format_version: FORMAT_VERSION,
        books: catalog.list_books().into_iter().map(BookRecord::from).collect(),
    };
    Ok(serde_json::to_vec_pretty(&file)?)
}

/// Decode a book collection.
pub fn decode_books(bytes: &[u8]) -> Result<Vec<Book>> {
    check_version(bytes, "books")?;
    let file: BooksFile = serde_json::from_slice(bytes)
        .map_err(|e| ShelfError::Format(format!("books: {}", e)))?;
    file.books.into_iter().map(Book::try_from).collect()
}

/// Encode the member collection of `catalog`.
pub fn encode_members(catalog: &Catalog) -> Result<Vec<u8>> {
    let file = MembersFile {
        format_version: FORMAT_VERSION,
        members: catalog
            .list_members()
            .into_iter()
            .map(MemberRecord::from)
            .collect(),
    };
    Ok(serde_json::to_vec_pretty(&file)?)
}

/// Decode a member collection.
pub fn decode_members(bytes: &[u8]) -> Result<Vec<Member>> {
    check_version(bytes, "members")?;
    let file: MembersFile = serde_json::from_slice(bytes)
        .map_err(|e| ShelfError::Format(format!("members: {}", e)))?;
    Ok(file.members.into_iter().map(Member::from).collect())
}
