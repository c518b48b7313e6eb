//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use tracing::debug;

use bigchunk_cli::output::write_to_file;
use bigchunk_cli::ui::print_warning;
use bigchunk_cli::{CLIResultPresenter, ResultPresenter};
use bigchunk_core::{from_decimal, try_set_base, Magnitude, MagnitudeError, Radix};

use crate::config::{AppConfig, Operation};

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        bigchunk_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    let Some(operation) = &config.command else {
        anyhow::bail!("no operation given (try `bigchunk --help`)");
    };

    let radix = check_base(config.base, config.allow_non_decimal)
        .with_context(|| format!("configuring base {}", config.base))?;
    if !radix.is_decimal() {
        print_warning(&format!(
            "base {} is not a power of ten: decimal output does not denote the true value",
            radix.base()
        ));
    }
    try_set_base(radix.base()).with_context(|| format!("configuring base {}", config.base))?;

    let start = Instant::now();
    let value = evaluate(operation)?;
    let elapsed = start.elapsed();
    debug!(
        operation = operation.name(),
        chunks = value.len(),
        ?elapsed,
        "operation complete"
    );

    let presenter = CLIResultPresenter::new(config.presenter_options());
    presenter.present_result(operation.name(), &value, elapsed)?;

    if let Some(ref path) = config.output {
        write_to_file(path, &value).with_context(|| format!("writing {path}"))?;
    }

    Ok(())
}

/// Validate a requested base without touching the process radix.
///
/// Decimal operands and results are only exact for powers of ten, so any
/// other base needs `allow_non_decimal`.
pub fn check_base(base: u64, allow_non_decimal: bool) -> Result<Radix, MagnitudeError> {
    let radix = Radix::new(base)?;
    if !radix.is_decimal() && !allow_non_decimal {
        return Err(MagnitudeError::NonDecimalBase(base));
    }
    Ok(radix)
}

/// Evaluate an operation in the process radix.
pub fn evaluate(operation: &Operation) -> Result<Magnitude> {
    let value = match operation {
        Operation::Add { a, b } => operand(a)?.try_add(&operand(b)?)?,
        Operation::Mul { a, b } => operand(a)?.try_mul(&operand(b)?)?,
        Operation::Scale { a, n } => operand(a)?.try_mul_chunk(*n)?,
        Operation::Show { a } => operand(a)?,
    };
    Ok(value)
}

fn operand(text: &str) -> Result<Magnitude> {
    from_decimal(text).with_context(|| format!("decoding operand {text:?}"))
}
