//! The library catalog: books, members and the loans between them.
//!
//! The catalog owns both collections and both id counters. Every mutating
//! operation takes `&mut self`, so the paired updates of issue and return
//! (book counter plus member loan set) are never observable half-done.
//!
//! Business-rule refusals are reported as `false` rather than as errors.

mod book;
mod member;

use std::collections::{BTreeMap, HashMap};
use std::num::NonZeroU32;

use tracing::debug;

use crate::error::{Result, ShelfError};

pub use book::{Book, BookId};
pub use member::{Member, MemberId};

/// Sample titles added when no saved data exists: (title, author, copies).
pub const SAMPLE_BOOKS: &[(&str, &str, u32)] = &[
    ("The Hobbit", "J.R.R. Tolkien", 3),
    ("1984", "George Orwell", 2),
    ("Clean Code", "Robert C. Martin", 1),
];

/// All books and members plus the operations that keep them consistent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    books: BTreeMap<BookId, Book>,
    members: BTreeMap<MemberId, Member>,
    next_book_id: u32,
    next_member_id: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    /// An empty catalog whose id sequences both start at 1.
    pub fn new() -> Self {
        Self {
            books: BTreeMap::new(),
            members: BTreeMap::new(),
            next_book_id: 1,
            next_member_id: 1,
        }
    }

    /// An otherwise empty catalog holding [`SAMPLE_BOOKS`].
    pub fn with_sample_books() -> Self {
        let mut catalog = Self::new();
        for (title, author, copies) in SAMPLE_BOOKS {
            if let Some(copies) = NonZeroU32::new(*copies) {
                // A fresh counter cannot run out.
                let _ = catalog.add_book(*title, *author, copies);
            }
        }
        catalog
    }

    /// Rebuild a catalog from stored records.
    ///
    /// Id counters resume at one past the highest id of each kind. Duplicate
    /// ids and loan sets that contradict the book counters are rejected.
    pub fn from_records(
        books: impl IntoIterator<Item = Book>,
        members: impl IntoIterator<Item = Member>,
    ) -> Result<Self> {
        let mut book_map = BTreeMap::new();
        for book in books {
            let id = book.id();
            if book_map.insert(id, book).is_some() {
                return Err(ShelfError::Validation(format!("duplicate book id {}", id)));
            }
        }

        let mut member_map = BTreeMap::new();
        for member in members {
            let id = member.id();
            if member_map.insert(id, member).is_some() {
                return Err(ShelfError::Validation(format!(
                    "duplicate member id {}",
                    id
                )));
            }
        }

        let next_book_id = next_after(book_map.keys().next_back().map(|id| id.0))?;
        let next_member_id = next_after(member_map.keys().next_back().map(|id| id.0))?;

        let catalog = Self {
            books: book_map,
            members: member_map,
            next_book_id,
            next_member_id,
        };
        catalog.check_integrity()?;
        Ok(catalog)
    }

    // --- Books ---

    /// Add a new title under the next book id.
    ///
    /// Fails only once every `u32` id has been handed out.
    pub fn add_book(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
        copies: NonZeroU32,
    ) -> Result<&Book> {
        let id = BookId(take_next(&mut self.next_book_id, "book")?);
        let previous = self.books.insert(id, Book::new(id, title, author, copies));
        debug_assert!(previous.is_none());
        debug!(book_id = id.0, copies = copies.get(), "book added");
        Ok(&self.books[&id])
    }

    /// Delete a book that has no copies on loan.
    ///
    /// Returns `false` when the id is unknown or any copy is out.
    pub fn remove_book(&mut self, id: BookId) -> bool {
        match self.books.get(&id) {
            Some(book) if book.on_loan() == 0 => {
                self.books.remove(&id);
                debug!(book_id = id.0, "book removed");
                true
            }
            _ => false,
        }
    }

    pub fn book(&self, id: BookId) -> Option<&Book> {
        self.books.get(&id)
    }

    /// All books in ascending id order.
    pub fn list_books(&self) -> Vec<&Book> {
        self.books.values().collect()
    }

    pub fn book_count(&self) -> usize {
        self.books.len()
    }

    /// Case-insensitive substring match on titles. An empty keyword matches everything.
    pub fn search_by_title(&self, keyword: &str) -> Vec<&Book> {
        self.search(keyword, Book::title)
    }

    /// Case-insensitive substring match on authors. An empty keyword matches everything.
    pub fn search_by_author(&self, keyword: &str) -> Vec<&Book> {
        self.search(keyword, Book::author)
    }

    fn search(&self, keyword: &str, field: fn(&Book) -> &str) -> Vec<&Book> {
        let needle = keyword.to_lowercase();
        self.books
            .values()
            .filter(|book| field(book).to_lowercase().contains(&needle))
            .collect()
    }

    // --- Members ---

    /// Register a new member under the next member id.
    ///
    /// Fails only once every `u32` id has been handed out.
    pub fn register_member(&mut self, name: impl Into<String>) -> Result<&Member> {
        let id = MemberId(take_next(&mut self.next_member_id, "member")?);
        let previous = self.members.insert(id, Member::new(id, name));
        debug_assert!(previous.is_none());
        debug!(member_id = id.0, "member registered");
        Ok(&self.members[&id])
    }

    pub fn member(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    /// All members in ascending id order.
    pub fn list_members(&self) -> Vec<&Member> {
        self.members.values().collect()
    }

    pub fn member_count(&self) -> usize {
        self.members.len()
    }

    // --- Loans ---

    /// Lend one copy of `book_id` to `member_id`.
    ///
    /// Fails when either id is unknown or no copy is available.
    pub fn issue_book(&mut self, member_id: MemberId, book_id: BookId) -> bool {
        let (Some(member), Some(book)) = (
            self.members.get_mut(&member_id),
            self.books.get_mut(&book_id),
        ) else {
            return false;
        };
        if !book.issue() {
            return false;
        }
        member.borrow(book_id);
        debug!(member_id = member_id.0, book_id = book_id.0, "book issued");
        true
    }

    /// Take back `book_id` from `member_id`.
    ///
    /// Fails when either id is unknown or the member does not hold the book,
    /// whatever the book's own counters say.
    pub fn return_book(&mut self, member_id: MemberId, book_id: BookId) -> bool {
        let (Some(member), Some(book)) = (
            self.members.get_mut(&member_id),
            self.books.get_mut(&book_id),
        ) else {
            return false;
        };
        if !member.has_book(book_id) {
            return false;
        }
        member.give_back(book_id);
        book.give_back();
        debug!(member_id = member_id.0, book_id = book_id.0, "book returned");
        true
    }

    // --- Maintenance ---

    /// Verify the loan invariants.
    ///
    /// Every id in a loan set must name an existing book, and no book may
    /// have more holders than copies out on loan.
    pub fn check_integrity(&self) -> Result<()> {
        let mut holders: HashMap<BookId, u32> = HashMap::new();
        for member in self.members.values() {
            for book_id in member.issued_books() {
                if !self.books.contains_key(&book_id) {
                    return Err(ShelfError::Integrity(format!(
                        "member {} holds unknown book {}",
                        member.id(),
                        book_id
                    )));
                }
                *holders.entry(book_id).or_insert(0) += 1;
            }
        }

        for (book_id, count) in holders {
            if let Some(book) = self.books.get(&book_id) {
                if count > book.on_loan() {
                    return Err(ShelfError::Integrity(format!(
                        "book {} is held by {} members but only {} copies are on loan",
                        book_id,
                        count,
                        book.on_loan()
                    )));
                }
            }
        }

        Ok(())
    }

    /// Id the next added book will receive.
    pub fn next_book_id(&self) -> BookId {
        BookId(self.next_book_id)
    }

    /// Id the next registered member will receive.
    pub fn next_member_id(&self) -> MemberId {
        MemberId(self.next_member_id)
    }
}

/// Hand out the id in `counter` and advance it.
///
/// `u32::MAX` is never handed out; a counter sitting there is exhausted.
fn take_next(counter: &mut u32, kind: &str) -> Result<u32> {
    let id = *counter;
    *counter = id
        .checked_add(1)
        .ok_or_else(|| ShelfError::Validation(format!("{} id sequence exhausted", kind)))?;
    Ok(id)
}

fn next_after(max: Option<u32>) -> Result<u32> {
    match max {
        None => Ok(1),
        Some(value) => value
            .checked_add(1)
            .ok_or_else(|| ShelfError::Validation("id sequence exhausted".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn copies(n: u32) -> NonZeroU32 {
        NonZeroU32::new(n).unwrap()
    }

    #[test]
    fn test_book_ids_strictly_increase() {
        let mut catalog = Catalog::new();
        let ids: Vec<u32> = (0..5)
            .map(|i| catalog.add_book(format!("t{}", i), "a", copies(1)).unwrap().id().0)
            .collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut catalog = Catalog::new();
        catalog.add_book("a", "x", copies(1)).unwrap();
        let second = catalog.add_book("b", "x", copies(1)).unwrap().id();
        assert!(catalog.remove_book(second));
        let third = catalog.add_book("c", "x", copies(1)).unwrap().id();
        assert_eq!(third, BookId(3));
    }

    #[test]
    fn test_member_and_book_sequences_are_independent() {
        let mut catalog = Catalog::new();
        catalog.add_book("a", "x", copies(1)).unwrap();
        catalog.add_book("b", "x", copies(1)).unwrap();
        assert_eq!(catalog.register_member("Ann").unwrap().id(), MemberId(1));
    }

    #[test]
    fn test_orwell_scenario() {
        let mut catalog = Catalog::new();
        let book = catalog.add_book("1984", "Orwell", copies(2)).unwrap().id();
        assert_eq!(book, BookId(1));
        let ann = catalog.register_member("Ann").unwrap().id();
        assert_eq!(ann, MemberId(1));

        assert!(catalog.issue_book(ann, book));
        assert_eq!(catalog.book(book).unwrap().available_copies(), 1);
        assert!(catalog.issue_book(ann, book));
        assert_eq!(catalog.book(book).unwrap().available_copies(), 0);
        assert!(!catalog.issue_book(ann, book));
        assert_eq!(catalog.book(book).unwrap().available_copies(), 0);

        assert!(catalog.return_book(ann, book));
        assert_eq!(catalog.book(book).unwrap().available_copies(), 1);
    }

    #[test]
    fn test_issue_then_return_restores_state() {
        let mut catalog = Catalog::with_sample_books();
        let ann = catalog.register_member("Ann").unwrap().id();
        let before = catalog.clone();

        assert!(catalog.issue_book(ann, BookId(2)));
        assert!(catalog.return_book(ann, BookId(2)));

        assert_eq!(catalog, before);
    }

    #[test]
    fn test_issue_fails_after_all_copies_out() {
        let mut catalog = Catalog::new();
        let book = catalog.add_book("Dune", "Herbert", copies(3)).unwrap().id();
        let members: Vec<MemberId> = (0..4)
            .map(|i| catalog.register_member(format!("m{}", i)).unwrap().id())
            .collect();

        for member in &members[..3] {
            assert!(catalog.issue_book(*member, book));
        }
        assert!(!catalog.issue_book(members[3], book));
        assert!(!catalog.member(members[3]).unwrap().has_book(book));
    }

    #[test]
    fn test_issue_unknown_ids_fail_without_effect() {
        let mut catalog = Catalog::new();
        let book = catalog.add_book("Dune", "Herbert", copies(1)).unwrap().id();
        let ann = catalog.register_member("Ann").unwrap().id();

        assert!(!catalog.issue_book(MemberId(99), book));
        assert!(!catalog.issue_book(ann, BookId(99)));
        assert_eq!(catalog.book(book).unwrap().available_copies(), 1);
        assert_eq!(catalog.member(ann).unwrap().borrowed_count(), 0);
    }

    #[test]
    fn test_remove_guarded_by_outstanding_loans() {
        let mut catalog = Catalog::new();
        let book = catalog.add_book("1984", "Orwell", copies(2)).unwrap().id();
        let ann = catalog.register_member("Ann").unwrap().id();
        let bob = catalog.register_member("Bob").unwrap().id();

        assert!(catalog.issue_book(ann, book));
        assert!(catalog.issue_book(bob, book));
        assert!(catalog.return_book(bob, book));
        assert!(!catalog.remove_book(book));

        assert!(catalog.return_book(ann, book));
        assert_eq!(catalog.book(book).unwrap().available_copies(), 2);
        assert!(catalog.remove_book(book));
        assert!(catalog.book(book).is_none());
    }

    #[test]
    fn test_remove_unknown_fails() {
        let mut catalog = Catalog::new();
        assert!(!catalog.remove_book(BookId(1)));
    }

    #[test]
    fn test_return_requires_loan_membership() {
        let mut catalog = Catalog::new();
        let book = catalog.add_book("1984", "Orwell", copies(2)).unwrap().id();
        let ann = catalog.register_member("Ann").unwrap().id();
        let bob = catalog.register_member("Bob").unwrap().id();

        assert!(catalog.issue_book(ann, book));
        assert!(!catalog.return_book(bob, book));
        assert_eq!(catalog.book(book).unwrap().available_copies(), 1);

        assert!(!catalog.return_book(ann, BookId(42)));
        assert!(!catalog.return_book(MemberId(42), book));
    }

    #[test]
    fn test_search_is_case_insensitive_and_ordered() {
        let mut catalog = Catalog::with_sample_books();
        catalog.add_book("The Hobbit (Annotated)", "Tolkien & Anderson", copies(1)).unwrap();

        let titles: Vec<u32> = catalog
            .search_by_title("hobbit")
            .iter()
            .map(|b| b.id().0)
            .collect();
        assert_eq!(titles, vec![1, 4]);

        let authors: Vec<u32> = catalog
            .search_by_author("ORWELL")
            .iter()
            .map(|b| b.id().0)
            .collect();
        assert_eq!(authors, vec![2]);

        assert!(catalog.search_by_title("missing").is_empty());
    }

    #[test]
    fn test_empty_keyword_matches_everything() {
        let catalog = Catalog::with_sample_books();
        assert_eq!(catalog.search_by_title("").len(), 3);
        assert_eq!(catalog.search_by_author("").len(), 3);
    }

    #[test]
    fn test_sample_books() {
        let catalog = Catalog::with_sample_books();
        let listed: Vec<String> = catalog.list_books().iter().map(|b| b.to_string()).collect();
        assert_eq!(
            listed,
            vec![
                "[ID:1] The Hobbit by J.R.R. Tolkien (Available: 3 / 3)",
                "[ID:2] 1984 by George Orwell (Available: 2 / 2)",
                "[ID:3] Clean Code by Robert C. Martin (Available: 1 / 1)",
            ]
        );
        assert_eq!(catalog.member_count(), 0);
        assert_eq!(catalog.next_book_id(), BookId(4));
    }

    #[test]
    fn test_from_records_resumes_sequences() {
        let books = vec![
            Book::restore(BookId(7), "a".into(), "x".into(), 2, 1).unwrap(),
            Book::restore(BookId(3), "b".into(), "y".into(), 1, 1).unwrap(),
        ];
        let members = vec![Member::restore(MemberId(5), "Ann".into(), [BookId(7)])];

        let mut catalog = Catalog::from_records(books, members).unwrap();
        assert_eq!(catalog.next_book_id(), BookId(8));
        assert_eq!(catalog.next_member_id(), MemberId(6));
        assert_eq!(catalog.add_book("c", "z", copies(1)).unwrap().id(), BookId(8));
        assert_eq!(catalog.register_member("Bo").unwrap().id(), MemberId(6));
    }

    #[test]
    fn test_id_sequence_stops_before_wrapping() {
        let books = vec![Book::restore(BookId(u32::MAX - 2), "a".into(), "x".into(), 1, 1).unwrap()];
        let members = vec![Member::restore(
            MemberId(u32::MAX - 1),
            "Ann".into(),
            Vec::<BookId>::new(),
        )];
        let mut catalog = Catalog::from_records(books, members).unwrap();

        let last = catalog.add_book("b", "y", copies(1)).unwrap().id();
        assert_eq!(last, BookId(u32::MAX - 1));
        assert!(matches!(
            catalog.add_book("c", "z", copies(1)),
            Err(ShelfError::Validation(_))
        ));
        assert!(matches!(
            catalog.register_member("Bo"),
            Err(ShelfError::Validation(_))
        ));

        // Nothing was overwritten or reused.
        assert_eq!(catalog.book_count(), 2);
        assert_eq!(catalog.book(last).unwrap().title(), "b");
        assert_eq!(catalog.member_count(), 1);
        assert_eq!(catalog.member(MemberId(u32::MAX - 1)).unwrap().name(), "Ann");
    }

    #[test]
    fn test_from_records_rejects_max_id() {
        let books = vec![Book::restore(BookId(u32::MAX), "a".into(), "x".into(), 1, 1).unwrap()];
        let result = Catalog::from_records(books, Vec::new());
        assert!(matches!(result, Err(ShelfError::Validation(_))));
    }

    #[test]
    fn test_from_records_empty_starts_at_one() {
        let catalog = Catalog::from_records(Vec::new(), Vec::new()).unwrap();
        assert_eq!(catalog.next_book_id(), BookId(1));
        assert_eq!(catalog.next_member_id(), MemberId(1));
    }

    #[test]
    fn test_from_records_rejects_duplicates() {
        let books = vec![
            Book::restore(BookId(1), "a".into(), "x".into(), 1, 1).unwrap(),
            Book::restore(BookId(1), "b".into(), "y".into(), 1, 1).unwrap(),
        ];
        let result = Catalog::from_records(books, Vec::new());
        assert!(matches!(result, Err(ShelfError::Validation(_))));
    }

    #[test]
    fn test_integrity_rejects_dangling_loan() {
        let members = vec![Member::restore(MemberId(1), "Ann".into(), [BookId(9)])];
        let result = Catalog::from_records(Vec::new(), members);
        assert!(matches!(result, Err(ShelfError::Integrity(_))));
    }

    #[test]
    fn test_integrity_rejects_more_holders_than_loans() {
        let books = vec![Book::restore(BookId(1), "a".into(), "x".into(), 2, 2).unwrap()];
        let members = vec![Member::restore(MemberId(1), "Ann".into(), [BookId(1)])];
        let result = Catalog::from_records(books, members);
        assert!(matches!(result, Err(ShelfError::Integrity(_))));
    }
}
