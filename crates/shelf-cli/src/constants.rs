//! Constants used throughout the CLI.

/// Exit codes for the CLI.
///
/// These follow common Unix conventions:
/// - 0: Success
/// - 1: General error (used by anyhow for unhandled errors)
/// - 2: Misuse of shell command (reserved by shells, and by clap for usage errors)
/// - 3+: Application-specific errors
pub mod exit_codes {
    /// General failure.
    pub const GENERAL: i32 = 1;

    /// Resource not found (book, member, saved catalog).
    pub const NOT_FOUND: i32 = 3;

    /// Invalid user input, or an operation the catalog refused.
    pub const INVALID_INPUT: i32 = 4;

    /// Integrity check failed.
    pub const INTEGRITY_FAILED: i32 = 6;
}

/// Environment variable overriding the config file path.
pub const CONFIG_ENV: &str = "SHELF_CONFIG";

/// Environment variable holding a tracing filter directive.
pub const LOG_ENV: &str = "SHELF_LOG";
