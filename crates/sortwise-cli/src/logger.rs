//! Logging setup for the sortwise CLI.
//!
//! Two outputs share one filter: compact terminal output on stderr, and a
//! plain-text case log that the `run` command attaches once it knows the
//! configured log directory. Until then the file layer discards its output.
//!
//! Filter precedence: `--verbose`, then `--quiet`, then `RUST_LOG`, then
//! `logging.level` from the configuration, then `info`.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::{Mutex, OnceLock};
use tracing_subscriber::{
    fmt, layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

/// File name of the case log inside the log tmp directory.
pub const CASE_LOG_FILE: &str = "case_all.log";

const CRATES: [&str; 5] = [
    "sortwise",
    "sortwise_cli",
    "sortwise_core",
    "sortwise_config",
    "sortwise_browser",
];

struct LoggerState {
    filter: reload::Handle<EnvFilter, Registry>,
    // false once --verbose, --quiet or RUST_LOG picked the level
    configurable: bool,
}

static STATE: OnceLock<LoggerState> = OnceLock::new();
static CASE_LOG: OnceLock<Mutex<Option<File>>> = OnceLock::new();

fn case_log() -> &'static Mutex<Option<File>> {
    CASE_LOG.get_or_init(|| Mutex::new(None))
}

/// Builds a filter applying `level` to every sortwise crate.
pub fn crate_filter(level: &str) -> EnvFilter {
    let directives = CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",");
    EnvFilter::new(directives)
}

/// Initializes the global subscriber. Call once, before any logging.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let (filter, configurable) = if verbose {
        (crate_filter("debug"), false)
    } else if quiet {
        (crate_filter("error"), false)
    } else {
        match EnvFilter::try_from_default_env() {
            Ok(filter) => (filter, false),
            Err(_) => (crate_filter("info"), true),
        }
    };

    let (filter, handle) = reload::Layer::new(filter);

    let terminal = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    let file = fmt::layer()
        .with_writer(|| CaseLogWriter)
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(terminal)
        .with(file)
        .init();

    let _ = STATE.set(LoggerState {
        filter: handle,
        configurable,
    });
}

/// Applies the configured `logging.level` unless a flag or `RUST_LOG`
/// already chose one.
pub fn apply_config_level(level: &str) {
    let Some(state) = STATE.get() else {
        return;
    };
    if !state.configurable {
        return;
    }
    if let Err(e) = state.filter.reload(crate_filter(&level.to_ascii_lowercase())) {
        tracing::warn!("Could not apply log level '{}': {}", level, e);
    }
}

/// Starts appending log output to `<tmp_dir>/case_all.log`.
///
/// # Errors
///
/// Returns an error if the directory or file cannot be created.
pub fn attach_case_log(tmp_dir: &Path) -> io::Result<()> {
    fs::create_dir_all(tmp_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(tmp_dir.join(CASE_LOG_FILE))?;
    let mut guard = case_log()
        .lock()
        .map_err(|_| io::Error::other("case log lock poisoned"))?;
    *guard = Some(file);
    Ok(())
}

/// Writer for the file layer; a no-op until a case log is attached.
struct CaseLogWriter;

impl Write for CaseLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut guard = case_log()
            .lock()
            .map_err(|_| io::Error::other("case log lock poisoned"))?;
        match guard.as_mut() {
            Some(file) => file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut guard = case_log()
            .lock()
            .map_err(|_| io::Error::other("case log lock poisoned"))?;
        match guard.as_mut() {
            Some(file) => file.flush(),
            None => Ok(()),
        }
    }
}

/// Check if colored output should be enabled.
///
/// `NO_COLOR` disables and `FORCE_COLOR` forces colors; otherwise the
/// terminal decides.
pub fn should_use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    console::Term::stderr().features().colors_supported()
}
