//! Terminal output for CLI handlers.
//!
//! Text mode prints sections, aligned fields and tables, coloring values
//! only when stdout supports it. JSON mode prints one line per command,
//! `{"type": <command>, "payload": <report>}`, for scripting.

use std::fmt::Display;
use std::sync::OnceLock;

use owo_colors::{OwoColorize, Stream};
use serde::Serialize;
use serde_json::json;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::error::Result;

/// Runtime output configuration shared by CLI handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct OutputConfig {
    /// Emit machine-readable JSON output instead of human-readable text.
    pub json: bool,
}

static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Apply output settings from global CLI flags. Only the first call counts.
pub fn configure(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

#[must_use]
pub fn is_json() -> bool {
    OUTPUT_CONFIG.get().copied().unwrap_or_default().json
}

/// Print `payload` as the command's JSON line.
pub fn emit_json<T: Serialize>(kind: &str, payload: &T) -> Result<()> {
    let payload = serde_json::to_value(payload)?;
    println!("{}", json!({ "type": kind, "payload": payload }));
    Ok(())
}

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!(
        "{}",
        title.if_supports_color(Stream::Stdout, |t| t.bold())
    );
    println!("{}", "─".repeat(40));
}

/// Print a labeled value.
pub fn field(label: &str, value: impl Display) {
    println!("  {label:<18} {value}");
}

/// Print rows as a rounded table, indented to match fields.
pub fn table<T: Tabled>(rows: Vec<T>) {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    for line in table.to_string().lines() {
        println!("  {line}");
    }
}

/// Print a single-line note.
pub fn note(message: &str) {
    println!("  {message}");
}

/// Print an error line to stderr.
pub fn error(message: &str) {
    eprintln!(
        "{} {message}",
        "✗".if_supports_color(Stream::Stderr, |t| t.red())
    );
}

/// Format a positive value in green.
pub fn positive(value: impl Display) -> String {
    value
        .if_supports_color(Stream::Stdout, |v| v.green())
        .to_string()
}

/// Format a negative value in red.
pub fn negative(value: impl Display) -> String {
    value
        .if_supports_color(Stream::Stdout, |v| v.red())
        .to_string()
}

/// Format a highlighted value in cyan.
pub fn highlight(value: impl Display) -> String {
    value
        .if_supports_color(Stream::Stdout, |v| v.cyan())
        .to_string()
}

/// Green when `good`, red otherwise.
pub fn signed(value: impl Display, good: bool) -> String {
    if good {
        positive(value)
    } else {
        negative(value)
    }
}
