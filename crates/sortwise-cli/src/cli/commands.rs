use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;

/// Available sortwise subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the content category of a column sample
    ///
    /// A single leading or embedded empty cell is treated as a placeholder
    /// and ignored.
    Classify(ClassifyArgs),

    /// Check whether a column sample is sorted
    ///
    /// Exits non-zero when the sample is not in the requested order.
    Check(CheckArgs),

    /// Run configured table scenarios in a headless browser
    ///
    /// Loads sortwise.toml, clicks every configured heading twice and
    /// records one PASSED/FAILED line per case.
    Run(RunArgs),
}

/// Arguments for the classify command
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Cell values, in column order
    ///
    /// Examples:
    ///   sortwise classify 10% 20% 5%
    ///   sortwise classify "1 KB" "2 MB" "500 B"
    #[arg(value_name = "VALUE", conflicts_with = "json", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Read the sample from a JSON array of strings instead
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Cell values, in column order
    #[arg(value_name = "VALUE", conflicts_with = "json", allow_negative_numbers = true)]
    pub values: Vec<String>,

    /// Read the sample from a JSON array of strings instead
    #[arg(long, value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Direction the sample must be sorted in
    #[arg(short, long, value_enum)]
    pub direction: DirectionArg,

    /// Compare as this category instead of inferring one
    #[arg(long = "as", value_enum, value_name = "CATEGORY")]
    pub category: Option<CategoryArg>,

    /// Reject byte sizes with unrecognised units
    #[arg(long)]
    pub strict_units: bool,
}

/// Arguments for the run command
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Configuration file (default: ./sortwise.toml)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Run only this case (repeatable); overrides `cases` in the config
    #[arg(long = "case", value_name = "NAME")]
    pub cases: Vec<String>,

    /// Configuration profile (default: the host OS name)
    #[arg(long, value_name = "NAME")]
    pub profile: Option<String>,
}
