//! Parsing helpers for output format and numeric ids.

use crate::errors::CliError;

/// Output format requested with `--format`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Plain,
}

/// Parse output format string.
pub fn parse_output_format(value: Option<&str>) -> anyhow::Result<Option<OutputFormat>> {
    match value {
        None => Ok(None),
        Some("table") => Ok(Some(OutputFormat::Table)),
        Some("plain") => Ok(Some(OutputFormat::Plain)),
        Some(other) => Err(CliError::invalid_input(format!(
            "Unsupported format: {} (use table or plain)",
            other
        ))
        .into()),
    }
}

/// Parse a menu answer as an integer no smaller than `min`.
///
/// Surrounding whitespace is ignored. Negative numbers and anything
/// that does not fit a `u32` are rejected.
pub fn parse_at_least(input: &str, min: u32) -> Option<u32> {
    input.trim().parse::<u32>().ok().filter(|n| *n >= min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format(None).unwrap(), None);
        assert_eq!(
            parse_output_format(Some("table")).unwrap(),
            Some(OutputFormat::Table)
        );
        assert_eq!(
            parse_output_format(Some("plain")).unwrap(),
            Some(OutputFormat::Plain)
        );
    }

    #[test]
    fn test_unsupported_format_is_invalid_input() {
        let err = parse_output_format(Some("csv")).unwrap_err();
        assert_eq!(crate::errors::exit_code_for(&err), 4);
        assert!(err.to_string().contains("csv"));
    }

    #[test]
    fn test_parse_at_least() {
        assert_eq!(parse_at_least(" 3 \n", 1), Some(3));
        assert_eq!(parse_at_least("0", 0), Some(0));
        assert_eq!(parse_at_least("0", 1), None);
        assert_eq!(parse_at_least("-2", 0), None);
        assert_eq!(parse_at_least("abc", 0), None);
        assert_eq!(parse_at_least("", 0), None);
        assert_eq!(parse_at_least("99999999999", 0), None);
    }
}
