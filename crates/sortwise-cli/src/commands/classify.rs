//! Classify command implementation.

use crate::cli::ClassifyArgs;
use crate::commands::utils::read_sample;
use crate::error::Result;
use sortwise_core::classify;
use tracing::debug;

/// Prints the category name of the sample on stdout.
///
/// # Errors
///
/// Returns an error if the JSON sample file cannot be read.
pub async fn execute(args: ClassifyArgs) -> Result<()> {
    let sample = read_sample(args.values, args.json.as_deref())?;
    let category = classify(&sample);
    debug!("Classified {} cells as {}", sample.len(), category);
    println!("{category}");
    Ok(())
}
