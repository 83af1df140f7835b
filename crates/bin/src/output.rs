//! Output formatting helpers for JSON output.

use serde::Serialize;

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Pretty,
    Compact,
}

impl OutputFormat {
    pub fn from_compact_flag(compact: bool) -> Self {
        if compact {
            OutputFormat::Compact
        } else {
            OutputFormat::Pretty
        }
    }
}

/// Render a value as JSON in the selected format.
pub fn render_json<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Pretty => serde_json::to_string_pretty(value),
        OutputFormat::Compact => serde_json::to_string(value),
    }
}

/// Print a value as JSON to stdout.
pub fn print_json<T: Serialize + ?Sized>(
    value: &T,
    format: OutputFormat,
) -> Result<(), serde_json::Error> {
    println!("{}", render_json(value, format)?);
    Ok(())
}
