//! Shared helper functions for CLI commands

use rust_decimal::Decimal;
use std::io::{self, IsTerminal};

/// True when stdin is a terminal, i.e. prompts can be shown.
///
/// Piped invocations never prompt; commands that would need a prompt report
/// an error telling the caller which flag to pass instead.
pub fn stdin_is_interactive() -> bool {
    io::stdin().is_terminal()
}

/// Format a money or quantity value with two decimal places for table output
pub fn format_decimal(value: Decimal) -> String {
    format!("{:.2}", value)
}

/// Format an optional text field, showing "-" when absent
pub fn format_optional(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}
