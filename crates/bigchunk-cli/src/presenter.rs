//! CLI result presenter.

use std::io::{self, Write};
use std::time::Duration;

use bigchunk_core::Magnitude;

use crate::output::{format_chunks, format_duration, format_number, format_result};
use crate::report::OperationReport;
use crate::ui::{error_line, operation_label};

/// Presents operation results and errors to the user.
pub trait ResultPresenter {
    /// Present a successful result.
    fn present_result(&self, operation: &str, value: &Magnitude, duration: Duration) -> io::Result<()>;

    /// Present an error message on stderr.
    fn present_error(&self, error: &str);
}

/// Output switches for [`CLIResultPresenter`].
#[derive(Debug, Clone, Copy, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct PresenterOptions {
    /// Never truncate long results.
    pub verbose: bool,
    /// Only the number.
    pub quiet: bool,
    /// Digit count, chunk count and elapsed time.
    pub details: bool,
    /// Dump raw chunks.
    pub raw: bool,
    /// One JSON object per result.
    pub json: bool,
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    opts: PresenterOptions,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(opts: PresenterOptions) -> Self {
        Self { opts }
    }

    /// Render a result as the text that [`ResultPresenter::present_result`] prints.
    pub fn render(&self, operation: &str, value: &Magnitude, duration: Duration) -> io::Result<String> {
        let decimal = value.try_to_decimal().map_err(io::Error::other)?;

        if self.opts.json {
            let report = OperationReport::new(operation, value, &decimal, duration, self.opts.raw);
            return report.to_json().map_err(io::Error::other);
        }

        let mut lines = Vec::new();
        if self.opts.quiet {
            lines.push(decimal.clone());
        } else {
            lines.push(format!(
                "{} {}",
                operation_label(operation),
                format_result(&decimal, self.opts.verbose)
            ));
        }
        if self.opts.details && !self.opts.quiet {
            let radix = value.radix();
            lines.push(format!(
                "Base: {} (width {})",
                format_number(radix.base()),
                radix.width()
            ));
            lines.push(format!("Digits: {}", format_number(decimal.len() as u64)));
            lines.push(format!("Chunks: {}", format_number(value.len() as u64)));
            lines.push(format!("Duration: {}", format_duration(duration)));
        }
        if self.opts.raw {
            lines.push(format_chunks(value));
        }
        Ok(lines.join("\n"))
    }

    /// Render an error as the line that [`ResultPresenter::present_error`] prints.
    #[must_use]
    pub fn render_error(&self, error: &str) -> String {
        if self.opts.json {
            serde_json::json!({ "error": error }).to_string()
        } else {
            error_line(error)
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_result(&self, operation: &str, value: &Magnitude, duration: Duration) -> io::Result<()> {
        let text = self.render(operation, value, duration)?;
        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{text}")
    }

    fn present_error(&self, error: &str) {
        eprintln!("{}", self.render_error(error));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bigchunk_core::Radix;

    fn value(text: &str) -> Magnitude {
        Magnitude::from_decimal_in(text, Radix::DEFAULT).unwrap()
    }

    #[test]
    fn quiet_is_just_the_number() {
        let presenter = CLIResultPresenter::new(PresenterOptions {
            quiet: true,
            details: true,
            ..Default::default()
        });
        let text = presenter
            .render("add", &value("00042"), Duration::from_millis(1))
            .unwrap();
        assert_eq!(text, "42");
    }

    #[test]
    fn normal_has_label() {
        let presenter = CLIResultPresenter::new(PresenterOptions::default());
        let text = presenter.render("mul", &value("55"), Duration::ZERO).unwrap();
        assert!(text.contains("mul"));
        assert!(text.ends_with("55"));
    }

    #[test]
    fn details_lines() {
        let presenter = CLIResultPresenter::new(PresenterOptions {
            details: true,
            ..Default::default()
        });
        let text = presenter
            .render("show", &value("123456789012"), Duration::from_millis(3))
            .unwrap();
        assert!(text.contains("Base: 10,000,000 (width 7)"));
        assert!(text.contains("Digits: 12"));
        assert!(text.contains("Chunks: 2"));
        assert!(text.contains("Duration:"));
    }

    #[test]
    fn raw_dump_appended() {
        let presenter = CLIResultPresenter::new(PresenterOptions {
            quiet: true,
            raw: true,
            ..Default::default()
        });
        let text = presenter
            .render("show", &value("100000000000001"), Duration::ZERO)
            .unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "100000000000001");
        assert_eq!(lines.len(), 4);
        assert!(lines[2].ends_with(": 0"));
    }

    #[test]
    fn json_report() {
        let presenter = CLIResultPresenter::new(PresenterOptions {
            json: true,
            ..Default::default()
        });
        let text = presenter.render("scale", &value("84"), Duration::ZERO).unwrap();
        let json: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(json["operation"], "scale");
        assert_eq!(json["result"], "84");
        assert_eq!(json["chunk_count"], 1);
    }

    #[test]
    fn error_text_line() {
        let presenter = CLIResultPresenter::new(PresenterOptions::default());
        let line = presenter.render_error("chunk multiplier 10 out of range for base 10");
        assert!(line.contains("[ERROR]"));
        assert!(line.ends_with("chunk multiplier 10 out of range for base 10"));
        presenter.present_error("chunk multiplier 10 out of range for base 10");
    }

    #[test]
    fn error_json_object() {
        let presenter = CLIResultPresenter::new(PresenterOptions {
            json: true,
            ..Default::default()
        });
        let json: serde_json::Value =
            serde_json::from_str(&presenter.render_error("invalid input: \"1x\"")).unwrap();
        assert_eq!(json["error"], "invalid input: \"1x\"");
    }
}
