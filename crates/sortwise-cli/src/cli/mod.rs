//! Command-line interface definition for sortwise.
//!
//! - `sortwise classify` - name the content category of a column sample
//! - `sortwise check` - check a sample against a sort direction
//! - `sortwise run` - drive the browser through configured table scenarios

mod commands;
pub mod enums;
mod tests;

use clap::Parser;

pub use commands::{CheckArgs, ClassifyArgs, Command, RunArgs};
pub use enums::*;

/// sortwise - ordering checks for sortable data tables
#[derive(Parser, Debug)]
#[command(
    name = "sortwise",
    version,
    about = "Ordering checks for sortable data tables",
    long_about = "sortwise classifies the cells of a table column (words, numbers,\n\
                  percentages, byte sizes) and checks whether they are sorted.\n\
                  The run command clicks sortable headings in a headless browser\n\
                  and verifies every click flips the order."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
