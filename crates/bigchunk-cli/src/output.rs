//! CLI output formatting.

use std::io::{self, Write};
use std::time::Duration;

use bigchunk_core::Magnitude;

/// Results longer than this are elided unless verbose.
const TRUNCATE_DIGITS: usize = 100;

/// Format a decimal rendering for display, potentially truncating.
#[must_use]
pub fn format_result(decimal: &str, verbose: bool) -> String {
    if !verbose && decimal.len() > TRUNCATE_DIGITS {
        format!(
            "{}...{} ({} digits)",
            &decimal[..50],
            &decimal[decimal.len() - 50..],
            format_number(decimal.len() as u64)
        )
    } else {
        decimal.to_string()
    }
}

/// One chunk per line, least-significant first.
#[must_use]
pub fn format_chunks(value: &Magnitude) -> String {
    value
        .chunks()
        .iter()
        .enumerate()
        .map(|(i, chunk)| format!("{i:>6}: {chunk}"))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format a duration for display.
#[must_use]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else {
        format!("{secs:.3}s")
    }
}

/// Format a number with thousand separators.
#[must_use]
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Write the decimal rendering of a magnitude to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, value: &Magnitude) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    writeln!(file, "{value}")?;
    Ok(())
}
