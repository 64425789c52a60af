//! ui::output
//!
//! Output formatting and display.
//!
//! # Design
//!
//! Status messages go to stdout and respect the quiet flag. Errors go to
//! stderr; warnings are emitted through `tracing`.

use std::fmt::Display;

use serde_json::Value;

/// Output verbosity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// Quiet mode - minimal output
    Quiet,
    /// Normal mode - standard output
    Normal,
    /// Debug mode - verbose output
    Debug,
}

impl Verbosity {
    /// Create verbosity from flags.
    pub fn from_flags(quiet: bool, debug: bool) -> Self {
        if quiet {
            Verbosity::Quiet
        } else if debug {
            Verbosity::Debug
        } else {
            Verbosity::Normal
        }
    }

    /// Default `tracing` filter for this verbosity.
    pub fn log_filter(self) -> &'static str {
        match self {
            Verbosity::Quiet => "stacgraph=error",
            Verbosity::Normal => "stacgraph=warn",
            Verbosity::Debug => "stacgraph=debug",
        }
    }
}

/// Print a message (respects quiet mode).
pub fn print(message: impl Display, verbosity: Verbosity) {
    if verbosity != Verbosity::Quiet {
        println!("{}", message);
    }
}

/// Print an error message (always shown).
pub fn error(message: impl Display) {
    eprintln!("error: {}", message);
}

/// Format a JSON value for display.
///
/// Strings print bare, everything else as pretty JSON.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => serde_json::to_string_pretty(other).unwrap_or_else(|_| other.to_string()),
    }
}

/// Format `key: value` rows with the keys padded to the same width.
pub fn format_rows(rows: &[(&str, String)]) -> String {
    let width = rows.iter().map(|(k, _)| k.len()).max().unwrap_or(0);
    rows.iter()
        .map(|(k, v)| format!("{:width$}  {}", format!("{}:", k), v, width = width + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verbosity_from_flags() {
        assert_eq!(Verbosity::from_flags(true, true), Verbosity::Quiet);
        assert_eq!(Verbosity::from_flags(false, true), Verbosity::Debug);
        assert_eq!(Verbosity::from_flags(false, false), Verbosity::Normal);
    }

    #[test]
    fn log_filters() {
        assert_eq!(Verbosity::Debug.log_filter(), "stacgraph=debug");
        assert_eq!(Verbosity::Normal.log_filter(), "stacgraph=warn");
    }

    #[test]
    fn format_string_bare() {
        assert_eq!(format_value(&json!("2020-01-01")), "2020-01-01");
    }

    #[test]
    fn format_number_and_object() {
        assert_eq!(format_value(&json!(12.5)), "12.5");
        assert_eq!(format_value(&json!({"a": 1})), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn rows_aligned() {
        let out = format_rows(&[("id", "a".into()), ("path", "cat/a.json".into())]);
        assert_eq!(out, "id:    a\npath:  cat/a.json");
    }
}
