//! JSON snapshot storage in a data directory.
//!
//! The catalog lives in two files, `books.json` and `members.json`. Each save
//! rewrites both through a temp file and rename, so a crash mid-save leaves
//! either the old or the new version of each file, never a torn one.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::catalog::Catalog;
use crate::error::{Result, ShelfError};
use crate::fs::write_atomic;
use crate::storage::traits::CatalogStore;
use crate::storage::types::{decode_books, decode_members, encode_books, encode_members};

pub const BOOKS_FILE: &str = "books.json";
pub const MEMBERS_FILE: &str = "members.json";

/// File-backed [`CatalogStore`] writing versioned JSON snapshots.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn books_path(&self) -> PathBuf {
        self.dir.join(BOOKS_FILE)
    }

    pub fn members_path(&self) -> PathBuf {
        self.dir.join(MEMBERS_FILE)
    }

    fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
        match fs::read(path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ShelfError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }
}

impl CatalogStore for JsonFileStore {
    fn load(&self) -> Result<Option<Catalog>> {
        let books_path = self.books_path();
        let members_path = self.members_path();
        let books = Self::read_optional(&books_path)?;
        let members = Self::read_optional(&members_path)?;

        let (books, members) = match (books, members) {
            (None, None) => {
                debug!(dir = %self.dir.display(), "no saved catalog");
                return Ok(None);
            }
            (Some(books), Some(members)) => (books, members),
            (None, Some(_)) => {
                return Err(ShelfError::Storage(format!(
                    "Incomplete snapshot: {} is missing",
                    books_path.display()
                )))
            }
            (Some(_), None) => {
                return Err(ShelfError::Storage(format!(
                    "Incomplete snapshot: {} is missing",
                    members_path.display()
                )))
            }
        };

        let catalog = Catalog::from_records(decode_books(&books)?, decode_members(&members)?)?;
        debug!(
            books = catalog.book_count(),
            members = catalog.member_count(),
            "catalog loaded"
        );
        Ok(Some(catalog))
    }

    fn save(&self, catalog: &Catalog) -> Result<()> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            ShelfError::Storage(format!(
                "Failed to create data directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let books = encode_books(catalog)?;
        let members = encode_members(catalog)?;

        for (path, bytes) in [(self.books_path(), books), (self.members_path(), members)] {
            write_atomic(&path, &bytes).map_err(|e| {
                ShelfError::Storage(format!("Failed to write {}: {}", path.display(), e))
            })?;
        }

        info!(
            dir = %self.dir.display(),
            books = catalog.book_count(),
            members = catalog.member_count(),
            "catalog saved"
        );
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_load_empty_dir_is_none() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_both_files() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nested"));
        store.save(&Catalog::with_sample_books()).unwrap();
        assert!(store.books_path().exists());
        assert!(store.members_path().exists());
    }

    #[test]
    fn test_missing_half_is_an_error() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path());
        store.save(&Catalog::new()).unwrap();
        fs::remove_file(store.members_path()).unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, ShelfError::Storage(_)));
        assert!(err.to_string().contains("members.json"));
    }

    #[test]
    fn test_location() {
        let store = JsonFileStore::new("/tmp/shelf-data");
        assert_eq!(store.location(), Path::new("/tmp/shelf-data"));
    }
}
