//! Error handling for the sortwise CLI.
//!
//! Library errors convert into [`CliError`] via `From`; `main` turns the
//! result into a miette report.

use miette::Report;
use sortwise_browser::BrowserError;
use sortwise_config::ConfigError;
use sortwise_core::{Category, Direction, OrderError};
use std::path::PathBuf;
use thiserror::Error;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration could not be loaded or failed validation
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A sample could not be compared
    #[error("Order check error: {0}")]
    Order(#[from] OrderError),

    /// Chrome could not be launched or driven
    #[error("Browser error: {0}")]
    Browser(#[from] BrowserError),

    /// The sample is not sorted in the requested direction
    #[error("{category} sample is not in {direction} order")]
    NotOrdered {
        /// Category the sample was compared as
        category: Category,
        /// Direction that was checked
        direction: Direction,
    },

    /// One or more scenarios failed
    #[error("{failed} of {total} case(s) failed\n\nHint: see {} for details", .results.display())]
    CasesFailed {
        /// Number of failed cases
        failed: usize,
        /// Number of cases run
        total: usize,
        /// Results log holding the failure messages
        results: PathBuf,
    },

    /// File or directory not found
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Sample files that are not a JSON array of strings
    #[error("JSON error: {0}\n\nHint: a sample file must hold a JSON array of strings")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Converts a CLI error into a miette report for display.
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Config(ConfigError::InvalidValue { field, hint }) => {
            miette::miette!("Invalid configuration value for '{}'\n\nHint: {}", field, hint)
        }
        CliError::Browser(BrowserError::LaunchFailed { reason, .. }) => miette::miette!(
            "Failed to launch Chrome: {}\n\nHint: install Chrome/Chromium or set browser.chrome_path",
            reason
        ),
        _ => miette::miette!("{}", err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_ordered_message() {
        let err = CliError::NotOrdered {
            category: Category::Percentage,
            direction: Direction::Ascending,
        };
        assert_eq!(err.to_string(), "percentage sample is not in ascending order");
    }

    #[test]
    fn cases_failed_points_at_results() {
        let err = CliError::CasesFailed {
            failed: 1,
            total: 3,
            results: PathBuf::from("log/results-sortwise.log"),
        };
        let msg = err.to_string();
        assert!(msg.contains("1 of 3 case(s) failed"));
        assert!(msg.contains("log/results-sortwise.log"));
    }

    #[test]
    fn from_order_error() {
        let err: CliError = OrderError::Classification {
            category: Category::Unknown,
        }
        .into();
        assert!(matches!(err, CliError::Order(_)));
    }

    #[test]
    fn from_config_error() {
        let err: CliError = ConfigError::UnknownCase("builds".to_string()).into();
        assert!(matches!(err, CliError::Config(_)));
    }

    #[test]
    fn invalid_value_report_carries_hint() {
        let report = cli_error_to_miette(
            ConfigError::InvalidValue {
                field: "base_url".to_string(),
                hint: "set base_url".to_string(),
            }
            .into(),
        );
        let msg = report.to_string();
        assert!(msg.contains("base_url"));
        assert!(msg.contains("Hint: set base_url"));
    }
}
