//! sortwise command-line entry point.

use clap::Parser;
use miette::Result;
use sortwise_cli::{cli, commands, error, logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Classify(classify_args) => commands::classify_execute(classify_args).await,
        cli::Command::Check(check_args) => commands::check_execute(check_args).await,
        cli::Command::Run(run_args) => commands::run_execute(run_args).await,
    };

    result.map_err(error::cli_error_to_miette)
}
