//! Terminal output for CLI commands: tables, dotted key listings, or JSON.

use serde::Serialize;
use serde_json::Value;
use tabled::{Table, Tabled};

/// Output format selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table
    #[default]
    Table,
    /// JSON output
    Json,
}

/// Print rows as a table, or as a JSON array.
pub fn print_list<T: Serialize + Tabled>(rows: &[T], format: OutputFormat) {
    match format {
        OutputFormat::Table if rows.is_empty() => println!("Nothing to show."),
        OutputFormat::Table => println!("{}", Table::new(rows)),
        OutputFormat::Json => print_json(&rows),
    }
}

/// Print a nested value as `section.key = value` lines, or as JSON.
///
/// Dotted keys line up with the `DROPCODE__SECTION__KEY` environment overrides.
pub fn print_item<T: Serialize>(item: &T, format: OutputFormat) {
    match format {
        OutputFormat::Table => {
            let mut lines = Vec::new();
            flatten("", &serde_json::to_value(item).unwrap_or(Value::Null), &mut lines);
            for (key, value) in lines {
                println!("{key} = {value}");
            }
        }
        OutputFormat::Json => print_json(item),
    }
}

fn print_json<T: Serialize + ?Sized>(item: &T) {
    match serde_json::to_string_pretty(item) {
        Ok(json) => println!("{json}"),
        Err(e) => print_error(&format!("Could not render JSON: {e}")),
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Object(map) => {
            for (key, child) in map {
                let path = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{prefix}.{key}")
                };
                flatten(&path, child, out);
            }
        }
        leaf => out.push((prefix.to_string(), leaf.to_string())),
    }
}

/// Print a success line
pub fn print_success(msg: &str) {
    println!("✓ {msg}");
}

/// Print a warning line
pub fn print_warning(msg: &str) {
    println!("⚠ {msg}");
}

/// Print an error line to stderr
pub fn print_error(msg: &str) {
    eprintln!("✗ {msg}");
}

/// Print an indented, aligned `key: value` pair
pub fn print_kv(key: &str, value: &str) {
    println!("  {:<18} {value}", format!("{key}:"));
}
