//! Storage abstraction for Shelf.
//!
//! This module defines the `CatalogStore` trait, the versioned record types
//! used on disk, and the JSON file backend.
//!
//! Loading at startup never fails: [`load_or_bootstrap`] falls back to a
//! catalog holding the sample books when nothing is saved yet or when the
//! saved snapshot cannot be used.

pub mod json_file;
pub mod traits;
pub mod types;

use tracing::{info, warn};

use crate::catalog::Catalog;
use crate::error::ShelfError;

// Re-export public types
pub use json_file::{JsonFileStore, BOOKS_FILE, MEMBERS_FILE};
pub use traits::CatalogStore;
pub use types::{BookRecord, MemberRecord, FORMAT_VERSION};

/// Where the catalog returned by [`load_or_bootstrap`] came from.
#[derive(Debug)]
pub enum LoadSource {
    /// Decoded from the stored snapshot.
    Restored,
    /// No saved data existed; the catalog holds the sample books.
    Bootstrapped,
    /// The stored snapshot was unusable; the catalog holds the sample books.
    Recovered(ShelfError),
}

/// Result of loading a catalog at startup.
#[derive(Debug)]
pub struct Loaded {
    pub catalog: Catalog,
    pub source: LoadSource,
}

/// Load the catalog from `store`, falling back to the sample books.
pub fn load_or_bootstrap<S: CatalogStore + ?Sized>(store: &S) -> Loaded {
    match store.load() {
        Ok(Some(catalog)) => {
            info!(location = %store.location().display(), "catalog restored");
            Loaded {
                catalog,
                source: LoadSource::Restored,
            }
        }
        Ok(None) => {
            info!(
                location = %store.location().display(),
                "no saved data, starting with sample books"
            );
            Loaded {
                catalog: Catalog::with_sample_books(),
                source: LoadSource::Bootstrapped,
            }
        }
        Err(err) => {
            warn!(
                location = %store.location().display(),
                error = %err,
                "failed to load saved data, starting with sample books"
            );
            Loaded {
                catalog: Catalog::with_sample_books(),
                source: LoadSource::Recovered(err),
            }
        }
    }
}
