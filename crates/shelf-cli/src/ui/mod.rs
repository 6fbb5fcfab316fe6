//! UI primitives for the Shelf CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode) and output mode
//! - **Theme**: Badge tokens and styles
//! - **Render**: Tables, badges, hints, receipts, error messages

mod context;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::{OutputMode, UiContext};
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{badge, hint, kv, print_error, receipt, simple_table, Column};
