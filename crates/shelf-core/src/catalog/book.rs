//! Book records.

use std::fmt;
use std::num::NonZeroU32;

use crate::error::{Result, ShelfError};

/// Identifier of a book, unique within one catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BookId(pub u32);

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One title held by the library, with its copy counters.
///
/// `available_copies` never exceeds `total_copies`; the only mutators are
/// [`Book::issue`] and [`Book::give_back`], which keep it in range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Book {
    id: BookId,
    title: String,
    author: String,
    total_copies: u32,
    available_copies: u32,
}

impl Book {
    /// Create a book with every copy on the shelf.
    pub fn new(
        id: BookId,
        title: impl Into<String>,
        author: impl Into<String>,
        copies: NonZeroU32,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            total_copies: copies.get(),
            available_copies: copies.get(),
        }
    }

    /// Rebuild a book from stored fields, rejecting impossible counters.
    pub fn restore(
        id: BookId,
        title: String,
        author: String,
        total_copies: u32,
        available_copies: u32,
    ) -> Result<Self> {
        if total_copies == 0 {
            return Err(ShelfError::Validation(format!(
                "book {} has zero total copies",
                id
            )));
        }
        if available_copies > total_copies {
            return Err(ShelfError::Validation(format!(
                "book {} has {} available copies but only {} in total",
                id, available_copies, total_copies
            )));
        }
        Ok(Self {
            id,
            title,
            author,
            total_copies,
            available_copies,
        })
    }

    pub fn id(&self) -> BookId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn total_copies(&self) -> u32 {
        self.total_copies
    }

    pub fn available_copies(&self) -> u32 {
        self.available_copies
    }

    /// Number of copies currently out on loan.
    pub fn on_loan(&self) -> u32 {
        self.total_copies - self.available_copies
    }

    pub fn is_available(&self) -> bool {
        self.available_copies > 0
    }

    /// Take one copy off the shelf. Returns `false`, changing nothing, when none is left.
    pub fn issue(&mut self) -> bool {
        if self.available_copies == 0 {
            return false;
        }
        self.available_copies -= 1;
        true
    }

    /// Put one copy back. Over-returns are ignored.
    pub fn give_back(&mut self) {
        if self.available_copies < self.total_copies {
            self.available_copies += 1;
        }
    }
}

impl fmt::Display for Book {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ID:{}] {} by {} (Available: {} / {})",
            self.id, self.title, self.author, self.available_copies, self.total_copies
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book(copies: u32) -> Book {
        Book::new(
            BookId(1),
            "1984",
            "George Orwell",
            NonZeroU32::new(copies).unwrap(),
        )
    }

    #[test]
    fn test_new_book_has_all_copies_available() {
        let b = book(2);
        assert_eq!(b.total_copies(), 2);
        assert_eq!(b.available_copies(), 2);
        assert_eq!(b.on_loan(), 0);
        assert!(b.is_available());
    }

    #[test]
    fn test_issue_stops_at_zero() {
        let mut b = book(1);
        assert!(b.issue());
        assert!(!b.is_available());
        assert!(!b.issue());
        assert_eq!(b.available_copies(), 0);
    }

    #[test]
    fn test_give_back_ignores_over_return() {
        let mut b = book(2);
        b.give_back();
        assert_eq!(b.available_copies(), 2);

        assert!(b.issue());
        b.give_back();
        b.give_back();
        assert_eq!(b.available_copies(), 2);
    }

    #[test]
    fn test_restore_rejects_bad_counters() {
        let zero = Book::restore(BookId(3), "t".into(), "a".into(), 0, 0);
        assert!(matches!(zero, Err(ShelfError::Validation(_))));

        let over = Book::restore(BookId(3), "t".into(), "a".into(), 1, 2);
        assert!(matches!(over, Err(ShelfError::Validation(_))));

        let ok = Book::restore(BookId(3), "t".into(), "a".into(), 3, 1).unwrap();
        assert_eq!(ok.on_loan(), 2);
    }

    #[test]
    fn test_display() {
        let mut b = book(2);
        b.issue();
        assert_eq!(
            b.to_string(),
            "[ID:1] 1984 by George Orwell (Available: 1 / 2)"
        );
    }
}
