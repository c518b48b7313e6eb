//! # bigchunk-cli
//!
//! CLI output, JSON reports, and shell completion.

pub mod completion;
pub mod output;
pub mod presenter;
pub mod report;
pub mod ui;

pub use presenter::{CLIResultPresenter, PresenterOptions, ResultPresenter};
