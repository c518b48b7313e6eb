//! bigchunk — arbitrary-precision arithmetic on chunked decimal magnitudes.

use std::process::ExitCode;

use bigchunk_cli::{CLIResultPresenter, ResultPresenter};
use bigchunk_lib::{app, config, errors};

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    let presenter = CLIResultPresenter::new(config.presenter_options());
    match app::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            presenter.present_error(&format!("{err:#}"));
            ExitCode::from(u8::try_from(errors::exit_code(&err)).unwrap_or(1))
        }
    }
}
