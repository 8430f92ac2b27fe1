//! sortwise CLI - ordering checks for sortable data tables.
//!
//! - [`cli`] - clap definitions
//! - [`commands`] - `classify`, `check` and `run`
//! - [`runner`] - scenario execution over a [`runner::ColumnProbe`]
//! - [`results`] - the per-case results log
//! - [`error`] - error types and miette conversion
//! - [`logger`] - tracing setup, including the case log file
//! - [`ui`] - terminal status messages
//!
//! ```rust,no_run
//! use sortwise_cli::logger;
//!
//! logger::init_logger(false, false, false);
//! tracing::info!("ready");
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod logger;
pub mod results;
pub mod runner;
pub mod ui;

pub use error::{CliError, Result};
pub use results::{CaseOutcome, ResultsLog};
pub use runner::ColumnProbe;
