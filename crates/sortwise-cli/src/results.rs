//! Per-case results log.
//!
//! One line per case, `HH:MM:SS - Testcase <name>: PASSED|FAILED|SKIPPED`,
//! followed by the failure message (indented) when there is one.

use chrono::{Local, NaiveTime};
use std::fmt;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info, warn};

/// File name of the results log inside the log directory.
pub const RESULTS_FILE: &str = "results-sortwise.log";

/// Final state of one case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CaseOutcome {
    Passed,
    Failed(String),
    Skipped(String),
}

impl CaseOutcome {
    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, CaseOutcome::Failed(_))
    }

    fn status(&self) -> &'static str {
        match self {
            CaseOutcome::Passed => "PASSED",
            CaseOutcome::Failed(_) => "FAILED",
            CaseOutcome::Skipped(_) => "SKIPPED",
        }
    }

    fn detail(&self) -> Option<&str> {
        match self {
            CaseOutcome::Passed => None,
            CaseOutcome::Failed(message) | CaseOutcome::Skipped(message) => Some(message),
        }
    }
}

impl fmt::Display for CaseOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.status())
    }
}

/// Case records for one run in `<log_dir>/results-sortwise.log`.
#[derive(Debug)]
pub struct ResultsLog {
    path: PathBuf,
    file: File,
}

impl ResultsLog {
    /// Starts a fresh results log under `log_dir`, replacing the previous
    /// run's records.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created.
    pub fn open(log_dir: &Path) -> io::Result<Self> {
        fs::create_dir_all(log_dir)?;
        let path = log_dir.join(RESULTS_FILE);
        let file = File::create(&path)?;
        Ok(Self { path, file })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Records `outcome` for `case`, stamped with the local time.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be written.
    pub fn record(&mut self, case: &str, outcome: &CaseOutcome) -> io::Result<()> {
        self.record_at(Local::now().time(), case, outcome)
    }

    /// Records `outcome` for `case` with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// Returns an error if the log cannot be written.
    pub fn record_at(&mut self, at: NaiveTime, case: &str, outcome: &CaseOutcome) -> io::Result<()> {
        let entry = format_entry(at, case, outcome);
        match outcome {
            CaseOutcome::Passed => info!("Testcase {}: {}", case, outcome),
            CaseOutcome::Failed(message) => error!("Testcase {}: {} - {}", case, outcome, message),
            CaseOutcome::Skipped(reason) => warn!("Testcase {}: {} - {}", case, outcome, reason),
        }
        self.file.write_all(entry.as_bytes())?;
        self.file.flush()
    }
}

fn format_entry(at: NaiveTime, case: &str, outcome: &CaseOutcome) -> String {
    let mut entry = format!("{} - Testcase {}: {}\n", at.format("%H:%M:%S"), case, outcome);
    if let Some(detail) = outcome.detail() {
        for line in detail.lines() {
            entry.push_str("    ");
            entry.push_str(line);
            entry.push('\n');
        }
    }
    entry
}
