//! Styled terminal messages.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Label for a result line, e.g. `[mul]`.
#[must_use]
pub fn operation_label(op: &str) -> String {
    let label = format!("[{op}]");
    if is_color_disabled() {
        label
    } else {
        style(label).cyan().bold().to_string()
    }
}

/// Error line as printed on stderr.
#[must_use]
pub fn error_line(text: &str) -> String {
    if is_color_disabled() {
        format!("[ERROR] {text}")
    } else {
        format!("{} {text}", style("[ERROR]").red().bold())
    }
}

/// Print a warning message to stderr.
pub fn print_warning(text: &str) {
    if is_color_disabled() {
        eprintln!("[WARN] {text}");
    } else {
        eprintln!("{} {text}", style("[WARN]").yellow().bold());
    }
}
