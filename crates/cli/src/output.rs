//! Output formatting for CLI commands.
//!
//! Responsibilities:
//! - Render command results as tab-separated tables or pretty JSON.
//!
//! Does NOT handle:
//! - Printing (callers write the returned string to stdout).
//!
//! Invariants:
//! - Tables use tab-separation for consistent alignment in standard terminals.
//! - Missing values render as `N/A` in tables and `null` in JSON.

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

/// Placeholder for missing values in table output.
pub const DEFAULT_MISSING_VALUE: &str = "N/A";

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// A row-oriented value that can be shown as a table or serialized as JSON.
pub trait Tabular: Serialize {
    fn headers() -> &'static [&'static str];
    fn row(&self) -> Vec<String>;
}

/// Format a list of rows in the requested format.
pub fn render<T: Tabular>(items: &[T], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(items)?),
        OutputFormat::Table => Ok(render_table(items)),
    }
}

fn render_table<T: Tabular>(items: &[T]) -> String {
    if items.is_empty() {
        return "No items found.".to_string();
    }

    let mut out = T::headers().join("\t");
    for item in items {
        out.push('\n');
        out.push_str(&item.row().join("\t"));
    }
    out
}

/// Render an optional cell for table output.
pub fn cell(value: Option<&str>) -> String {
    value.unwrap_or(DEFAULT_MISSING_VALUE).to_string()
}
