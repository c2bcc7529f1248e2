//! Greeting formatting.
//!
//! An absent name (null or empty) selects the default "World" greeting.

use std::io::Write;

/// Name used when the caller supplies none
pub const DEFAULT_NAME: &str = "World";

/// Resolve the name to greet, treating an empty string as absent
pub fn resolve_name(name: Option<&str>) -> &str {
    match name {
        Some(name) if !name.is_empty() => name,
        _ => DEFAULT_NAME,
    }
}

/// Format a greeting line without the trailing newline
pub fn format_greeting(name: Option<&str>, origin: &str) -> String {
    format!("Hello {} from {}!", resolve_name(name), origin)
}

/// Write exactly one greeting line to `out` and flush it
pub fn write_greeting<W: Write>(out: &mut W, name: Option<&str>, origin: &str) -> std::io::Result<()> {
    writeln!(out, "{}", format_greeting(name, origin))?;
    out.flush()
}
