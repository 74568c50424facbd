//! Table and structured output for list commands

use std::io;

use miette::{IntoDiagnostic, Result};
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::cli::OutputFormat;

/// Print `rows` in the requested format.
///
/// JSON and CSV serialize the raw rows; the table format renders the
/// display shape produced by `to_display`. An empty table prints
/// `empty_message` instead of a bare header.
pub fn print_rows<R, D, F>(
    rows: &[R],
    to_display: F,
    format: OutputFormat,
    empty_message: &str,
) -> Result<()>
where
    R: Serialize,
    D: Tabled,
    F: Fn(&R) -> D,
{
    match format {
        OutputFormat::Table => {
            if rows.is_empty() {
                println!("{empty_message}");
            } else {
                let display: Vec<D> = rows.iter().map(to_display).collect();
                println!("{}", render_table(display));
            }
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(rows).into_diagnostic()?;
            println!("{json}");
        }
        OutputFormat::Csv => {
            let mut writer = csv::Writer::from_writer(io::stdout());
            for row in rows {
                writer.serialize(row).into_diagnostic()?;
            }
            writer.flush().into_diagnostic()?;
        }
    }
    Ok(())
}

fn render_table<D: Tabled>(rows: Vec<D>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::sharp());
    table.to_string()
}
