//! Application-level utilities for the Shelf CLI.
//!
//! This module provides:
//! - Application context for unified CLI + config handling
//! - Path resolution for config and data directory

mod context;
mod resolver;

// Re-export public API
pub use context::AppContext;
