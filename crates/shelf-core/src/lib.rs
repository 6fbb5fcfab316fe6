//! # Shelf Core
//!
//! Core library for Shelf - a small, file-backed library catalog that tracks
//! books, members and the loans between them.
//!
//! This crate provides the domain records, the catalog with its loan
//! invariants, and the snapshot storage, independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **catalog**: Book and member records, issue/return, search
//! - **storage**: Storage trait, versioned JSON snapshot files, bootstrap on load
//! - **fs**: Atomic file replacement helpers

pub mod catalog;
pub mod error;
pub mod fs;
pub mod storage;

pub use catalog::{Book, BookId, Catalog, Member, MemberId};
pub use error::{Result, ShelfError};
pub use storage::{load_or_bootstrap, CatalogStore, JsonFileStore, LoadSource, Loaded};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
