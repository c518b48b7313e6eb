//! Application configuration from CLI flags and environment.

use clap::{Parser, Subcommand};

use bigchunk_cli::PresenterOptions;
use bigchunk_core::DEFAULT_BASE;

/// bigchunk — arbitrary-precision arithmetic on chunked decimal magnitudes.
#[derive(Parser, Debug)]
#[command(name = "bigchunk", version, about)]
#[allow(clippy::struct_excessive_bools)]
pub struct AppConfig {
    /// Chunk base (at least 10; powers of ten keep decimal text exact).
    #[arg(short, long, default_value_t = DEFAULT_BASE, env = "BIGCHUNK_BASE", global = true)]
    pub base: u64,

    /// Accept a base that is not a power of ten. Decimal text then no longer
    /// denotes the chunk value.
    #[arg(long, global = true)]
    pub allow_non_decimal: bool,

    /// Verbose output (never truncate long results).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (only output the number).
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Show digit count, chunk count and duration.
    #[arg(short, long, global = true)]
    pub details: bool,

    /// Dump the raw chunks, least-significant first.
    #[arg(long, global = true)]
    pub raw: bool,

    /// Print a JSON report instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Output file path for the decimal result.
    #[arg(short, long, global = true)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,

    #[command(subcommand)]
    pub command: Option<Operation>,
}

/// Operation to evaluate. Operands are decimal digit strings.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    /// Add two magnitudes.
    Add { a: String, b: String },
    /// Multiply two magnitudes.
    Mul { a: String, b: String },
    /// Multiply a magnitude by one chunk value (must be below the base).
    Scale { a: String, n: u64 },
    /// Decode and re-encode a magnitude.
    Show { a: String },
}

impl Operation {
    /// Short name used in output.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Add { .. } => "add",
            Self::Mul { .. } => "mul",
            Self::Scale { .. } => "scale",
            Self::Show { .. } => "show",
        }
    }
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Presentation switches.
    #[must_use]
    pub fn presenter_options(&self) -> PresenterOptions {
        PresenterOptions {
            verbose: self.verbose,
            quiet: self.quiet,
            details: self.details,
            raw: self.raw,
            json: self.json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(args).unwrap()
    }

    #[test]
    fn default_base() {
        let config = parse(&["bigchunk", "show", "12"]);
        assert_eq!(config.base, DEFAULT_BASE);
        assert_eq!(config.command, Some(Operation::Show { a: "12".into() }));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let config = parse(&["bigchunk", "mul", "3", "4", "--base", "1000", "-q", "--raw"]);
        assert_eq!(config.base, 1_000);
        assert!(config.quiet);
        assert!(config.raw);
        assert!(!config.allow_non_decimal);
        assert_eq!(config.command.as_ref().map(Operation::name), Some("mul"));
    }

    #[test]
    fn allow_non_decimal_flag() {
        let config = parse(&["bigchunk", "--base", "999", "--allow-non-decimal", "show", "1"]);
        assert_eq!(config.base, 999);
        assert!(config.allow_non_decimal);
    }

    #[test]
    fn scale_parses_scalar() {
        let config = parse(&["bigchunk", "scale", "99", "7"]);
        assert_eq!(
            config.command,
            Some(Operation::Scale {
                a: "99".into(),
                n: 7
            })
        );
    }

    #[test]
    fn presenter_options_follow_flags() {
        let opts = parse(&["bigchunk", "-d", "--json", "add", "1", "2"]).presenter_options();
        assert!(opts.details);
        assert!(opts.json);
        assert!(!opts.quiet);
    }

    #[test]
    fn operands_stay_text() {
        // Validation belongs to the decoder, so odd operands still parse here.
        let config = parse(&["bigchunk", "add", "12x", "0"]);
        assert_eq!(
            config.command,
            Some(Operation::Add {
                a: "12x".into(),
                b: "0".into()
            })
        );
    }
}
