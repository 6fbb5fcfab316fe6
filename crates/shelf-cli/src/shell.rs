//! Interactive numbered-menu session.
//!
//! The shell is generic over its input and output so it can be driven from
//! stdin/stdout or from an in-memory script. It owns the catalog for the
//! length of the session and hands it back when the session ends.

use std::io::{self, BufRead, Write};
use std::num::NonZeroU32;

use tracing::{debug, error};

use shelf_core::storage::CatalogStore;
use shelf_core::{Book, BookId, Catalog, MemberId};

use crate::helpers::parse_at_least;

/// Outcome of a menu action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Continue,
    /// Input ran out; the session ends as if "Exit" was chosen.
    Quit,
}

pub struct Shell<'s, R, W> {
    catalog: Catalog,
    store: &'s dyn CatalogStore,
    input: R,
    output: W,
    save_on_exit: bool,
}

impl<'s, R: BufRead, W: Write> Shell<'s, R, W> {
    pub fn new(catalog: Catalog, store: &'s dyn CatalogStore, input: R, output: W) -> Self {
        Self {
            catalog,
            store,
            input,
            output,
            save_on_exit: true,
        }
    }

    /// Whether choosing "Exit" (or reaching end of input) saves first.
    pub fn save_on_exit(mut self, enabled: bool) -> Self {
        self.save_on_exit = enabled;
        self
    }

    /// Run the main menu until the operator exits or input ends.
    pub fn run(mut self) -> io::Result<Catalog> {
        writeln!(self.output, "=== Welcome to Shelf ===")?;
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "1. Books: Add / Remove / List / Search")?;
            writeln!(self.output, "2. Members: Register / List")?;
            writeln!(self.output, "3. Issue Book")?;
            writeln!(self.output, "4. Return Book")?;
            writeln!(self.output, "5. Save data to disk")?;
            writeln!(self.output, "6. Exit")?;
            let Some(choice) = self.prompt_line("Choose option: ")? else {
                break;
            };

            let step = match choice.trim() {
                "1" => self.books_menu()?,
                "2" => self.members_menu()?,
                "3" => self.issue_flow()?,
                "4" => self.return_flow()?,
                "5" => {
                    self.save(true)?;
                    Step::Continue
                }
                "6" => break,
                _ => {
                    writeln!(self.output, "Invalid option. Try again.")?;
                    Step::Continue
                }
            };
            if step == Step::Quit {
                break;
            }
        }

        if self.save_on_exit {
            writeln!(self.output, "Saving before exit...")?;
            self.save(false)?;
        }
        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;
        Ok(self.catalog)
    }

    fn books_menu(&mut self) -> io::Result<Step> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Books Menu:")?;
            writeln!(self.output, "1. Add book")?;
            writeln!(self.output, "2. Remove book (by id)")?;
            writeln!(self.output, "3. List all books")?;
            writeln!(self.output, "4. Search by title")?;
            writeln!(self.output, "5. Search by author")?;
            writeln!(self.output, "6. Back")?;
            let Some(choice) = self.prompt_line("Choose: ")? else {
                return Ok(Step::Quit);
            };

            match choice.trim() {
                "1" => {
                    let Some(title) = self.prompt_line("Title: ")? else {
                        return Ok(Step::Quit);
                    };
                    let Some(author) = self.prompt_line("Author: ")? else {
                        return Ok(Step::Quit);
                    };
                    write!(self.output, "Total copies: ")?;
                    let Some(copies) = self.read_number(1)?.and_then(NonZeroU32::new) else {
                        return Ok(Step::Quit);
                    };
                    match self.catalog.add_book(title, author, copies) {
                        Ok(book) => {
                            let added = book.to_string();
                            writeln!(self.output, "Added: {}", added)?;
                        }
                        Err(err) => writeln!(self.output, "Book not added: {}", err)?,
                    }
                }
                "2" => {
                    write!(self.output, "Book ID to remove: ")?;
                    let Some(id) = self.read_number(0)? else {
                        return Ok(Step::Quit);
                    };
                    if self.catalog.remove_book(BookId(id)) {
                        writeln!(self.output, "Book removed")?;
                    } else {
                        writeln!(self.output, "Book not found or still issued")?;
                    }
                }
                "3" => {
                    if self.catalog.book_count() == 0 {
                        writeln!(self.output, "No books in library.")?;
                    } else {
                        let books = self.catalog.list_books();
                        write_books(&mut self.output, &books)?;
                    }
                }
                "4" => {
                    let Some(keyword) = self.prompt_line("Title keyword: ")? else {
                        return Ok(Step::Quit);
                    };
                    let books = self.catalog.search_by_title(&keyword);
                    write_books(&mut self.output, &books)?;
                }
                "5" => {
                    let Some(keyword) = self.prompt_line("Author keyword: ")? else {
                        return Ok(Step::Quit);
                    };
                    let books = self.catalog.search_by_author(&keyword);
                    write_books(&mut self.output, &books)?;
                }
                "6" => return Ok(Step::Continue),
                _ => writeln!(self.output, "Invalid choice")?,
            }
        }
    }

    fn members_menu(&mut self) -> io::Result<Step> {
        loop {
            writeln!(self.output)?;
            writeln!(self.output, "Members Menu:")?;
            writeln!(self.output, "1. Register new member")?;
            writeln!(self.output, "2. List members")?;
            writeln!(self.output, "3. Back")?;
            let Some(choice) = self.prompt_line("Choose: ")? else {
                return Ok(Step::Quit);
            };

            match choice.trim() {
                "1" => {
                    let Some(name) = self.prompt_line("Member name: ")? else {
                        return Ok(Step::Quit);
                    };
                    match self.catalog.register_member(name) {
                        Ok(member) => {
                            let registered = member.to_string();
                            writeln!(self.output, "Registered: {}", registered)?;
                        }
                        Err(err) => writeln!(self.output, "Member not registered: {}", err)?,
                    }
                }
                "2" => {
                    if self.catalog.member_count() == 0 {
                        writeln!(self.output, "No members registered")?;
                    } else {
                        for member in self.catalog.list_members() {
                            writeln!(self.output, "{}", member)?;
                        }
                    }
                }
                "3" => return Ok(Step::Continue),
                _ => writeln!(self.output, "Invalid choice")?,
            }
        }
    }

    fn issue_flow(&mut self) -> io::Result<Step> {
        let Some((member_id, book_id)) = self.read_loan_ids()? else {
            return Ok(Step::Quit);
        };
        if self.catalog.issue_book(member_id, book_id) {
            writeln!(self.output, "Book issued successfully")?;
        } else {
            writeln!(self.output, "Failed to issue book. Check IDs or availability")?;
        }
        Ok(Step::Continue)
    }

    fn return_flow(&mut self) -> io::Result<Step> {
        let Some((member_id, book_id)) = self.read_loan_ids()? else {
            return Ok(Step::Quit);
        };
        if self.catalog.return_book(member_id, book_id) {
            writeln!(self.output, "Book returned successfully")?;
        } else {
            writeln!(self.output, "Failed to return book. Check IDs")?;
        }
        Ok(Step::Continue)
    }

    fn read_loan_ids(&mut self) -> io::Result<Option<(MemberId, BookId)>> {
        write!(self.output, "Member ID: ")?;
        let Some(member_id) = self.read_number(0)? else {
            return Ok(None);
        };
        write!(self.output, "Book ID: ")?;
        let Some(book_id) = self.read_number(0)? else {
            return Ok(None);
        };
        Ok(Some((MemberId(member_id), BookId(book_id))))
    }

    /// Save the catalog. Failures are reported and the session goes on.
    fn save(&mut self, confirm: bool) -> io::Result<()> {
        match self.store.save(&self.catalog) {
            Ok(()) if confirm => writeln!(self.output, "Data saved."),
            Ok(()) => Ok(()),
            Err(err) => {
                error!(error = %err, "save failed");
                writeln!(self.output, "Error while saving data: {}", err)
            }
        }
    }

    /// Print `prompt` and read one line without its line terminator.
    ///
    /// Returns `None` at end of input.
    fn prompt_line(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.read_line()
    }

    /// Bytes that are not UTF-8 are replaced rather than treated as an error.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        self.output.flush()?;
        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            debug!("end of input");
            return Ok(None);
        }
        let mut line = String::from_utf8_lossy(&raw).into_owned();
        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    /// Read an integer no smaller than `min`, re-prompting until one arrives.
    ///
    /// The caller prints the first prompt. Returns `None` at end of input.
    fn read_number(&mut self, min: u32) -> io::Result<Option<u32>> {
        loop {
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            if let Some(value) = parse_at_least(&line, min) {
                return Ok(Some(value));
            }
            write!(self.output, "Please enter a valid integer >= {}: ", min)?;
        }
    }
}

fn write_books<W: Write>(output: &mut W, books: &[&Book]) -> io::Result<()> {
    for book in books {
        writeln!(output, "{}", book)?;
    }
    Ok(())
}
