//! Input and parsing helper functions for the CLI.

mod parsing;

pub use parsing::{parse_at_least, parse_output_format, OutputFormat};
