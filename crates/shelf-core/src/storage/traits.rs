//! Storage trait definition.
//!
//! The `CatalogStore` trait is the seam between the catalog and durable
//! storage. Implementations persist complete snapshots; there is no
//! incremental update or append log.

use std::path::Path;

use crate::catalog::Catalog;
use crate::error::Result;

/// Durable snapshot storage for a [`Catalog`].
pub trait CatalogStore {
    /// Load the stored catalog.
    ///
    /// # Returns
    ///
    /// Returns `Ok(None)` when nothing has been saved yet, and `Ok(Some(catalog))`
    /// with id counters resumed above the stored ids otherwise.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Storage` if the snapshot cannot be read, and
    /// `ShelfError::Format`, `ShelfError::Validation` or `ShelfError::Integrity`
    /// if it cannot be decoded into a consistent catalog.
    fn load(&self) -> Result<Option<Catalog>>;

    /// Overwrite the stored snapshot with `catalog`.
    ///
    /// The in-memory catalog is never modified, whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns `ShelfError::Storage` if the snapshot cannot be written.
    fn save(&self, catalog: &Catalog) -> Result<()>;

    /// Where this store keeps its data, for display.
    fn location(&self) -> &Path;
}
