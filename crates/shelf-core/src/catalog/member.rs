//! Member records.

use std::collections::BTreeSet;
use std::fmt;

use super::book::BookId;

/// Identifier of a member. Independent sequence from [`BookId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(pub u32);

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A patron and the books currently on loan to them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    name: String,
    issued_books: BTreeSet<BookId>,
}

impl Member {
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            issued_books: BTreeSet::new(),
        }
    }

    /// Rebuild a member from stored fields.
    pub fn restore(
        id: MemberId,
        name: String,
        issued_books: impl IntoIterator<Item = BookId>,
    ) -> Self {
        Self {
            id,
            name,
            issued_books: issued_books.into_iter().collect(),
        }
    }

    pub fn id(&self) -> MemberId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Books on loan, in ascending id order.
    pub fn issued_books(&self) -> impl Iterator<Item = BookId> + '_ {
        self.issued_books.iter().copied()
    }

    pub fn borrowed_count(&self) -> usize {
        self.issued_books.len()
    }

    pub fn has_book(&self, book_id: BookId) -> bool {
        self.issued_books.contains(&book_id)
    }

    pub fn borrow(&mut self, book_id: BookId) {
        self.issued_books.insert(book_id);
    }

    pub fn give_back(&mut self, book_id: BookId) {
        self.issued_books.remove(&book_id);
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[MID:{}] {} (Borrowed: {})",
            self.id,
            self.name,
            self.issued_books.len()
        )
    }
}
