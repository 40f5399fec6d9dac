//! Common utilities for output formatters

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt::Display;

/// Escape a value for CSV output
/// Handles commas, quotes, and newlines according to RFC 4180
pub fn escape_csv(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Pretty-print a value as JSON
pub fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error: failed to serialize JSON: {}", e),
    }
}

/// Print a value as YAML
pub fn print_yaml<T: Serialize + ?Sized>(value: &T) {
    match serde_yml::to_string(value) {
        Ok(yaml) => print!("{}", yaml),
        Err(e) => eprintln!("Error: failed to serialize YAML: {}", e),
    }
}

/// Render an optional value, empty when absent
pub fn opt<T: Display>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

/// RFC 3339 timestamp without sub-second noise
pub fn format_time(value: Option<&DateTime<Utc>>) -> String {
    value
        .map(|t| t.format("%Y-%m-%dT%H:%M:%SZ").to_string())
        .unwrap_or_default()
}
