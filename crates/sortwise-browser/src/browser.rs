//! Browser session lifecycle.
//!
//! `BrowserSession` launches Chrome, drives the DevTools event handler and
//! hands out pages. Call `close()` at the end of a run; Drop only logs.

use crate::error::{BrowserError, Result};
use crate::page::Page;
use crate::wait::WaitConfig;
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::Mutex;
use tracing::{debug, warn};

/// Configuration for launching a browser session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Run in headless mode (default: true unless the `visible` feature is on).
    pub headless: bool,

    /// Browser window size (default: 1920x1080).
    pub window_size: (u32, u32),

    /// Additional Chrome arguments.
    pub args: Vec<String>,

    /// Chrome executable path (None = auto-detect).
    pub chrome_path: Option<PathBuf>,

    /// Page-load and selector waits.
    pub wait: WaitConfig,

    /// Pause after clicks that re-render content.
    pub settle: Duration,
}

impl SessionConfig {
    /// Creates a new config with defaults for headless testing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the browser window.
    #[must_use]
    pub fn visible(mut self) -> Self {
        self.headless = false;
        self
    }

    /// Sets a custom window size.
    #[must_use]
    pub fn with_window_size(mut self, width: u32, height: u32) -> Self {
        self.window_size = (width, height);
        self
    }

    /// Adds additional Chrome arguments.
    #[must_use]
    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args.extend(args);
        self
    }

    /// Uses a specific Chrome executable.
    #[must_use]
    pub fn with_chrome_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chrome_path = Some(path.into());
        self
    }

    /// Sets page-load and selector waits.
    #[must_use]
    pub fn with_wait(mut self, wait: WaitConfig) -> Self {
        self.wait = wait;
        self
    }

    /// Sets the post-click pause.
    #[must_use]
    pub fn with_settle(mut self, settle: Duration) -> Self {
        self.settle = settle;
        self
    }

    /// Chrome command-line arguments, without the per-launch user-data dir.
    pub(crate) fn chrome_args(&self) -> Vec<String> {
        let mut args = Vec::with_capacity(self.args.len() + 2);
        if self.headless {
            args.push("--headless".to_string());
        }
        args.push(format!(
            "--window-size={},{}",
            self.window_size.0, self.window_size.1
        ));
        args.extend(self.args.iter().cloned());
        args
    }

    #[allow(clippy::result_large_err)]
    fn to_browser_config(&self, user_data_dir: &Path) -> Result<BrowserConfig> {
        let mut config = BrowserConfig::builder();

        for arg in self.chrome_args() {
            config = config.arg(arg);
        }
        config = config.arg(user_data_arg(user_data_dir));

        if let Some(path) = &self.chrome_path {
            config = config.chrome_executable(path);
        }

        config.build().map_err(|e| BrowserError::LaunchFailed {
            reason: format!("invalid browser configuration: {e}"),
            source: None,
        })
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            headless: !cfg!(feature = "visible"),
            window_size: (1920, 1080),
            args: vec![
                // Needed where user namespaces are unavailable (containers, CI).
                // Only ever point the suite at trusted applications.
                "--no-sandbox".to_string(),
                // Prevents /dev/shm exhaustion in containers
                "--disable-dev-shm-usage".to_string(),
            ],
            chrome_path: None,
            wait: WaitConfig::default(),
            settle: Duration::from_secs(1),
        }
    }
}

/// Fresh Chrome profile directory, removed when dropped. Parallel sessions
/// must not share a profile or Chrome's ProcessSingleton refuses to start.
pub(crate) fn profile_dir() -> Result<TempDir> {
    Ok(tempfile::Builder::new().prefix("sortwise-").tempdir()?)
}

pub(crate) fn user_data_arg(dir: &Path) -> String {
    format!("--user-data-dir={}", dir.display())
}

/// A running Chrome instance.
///
/// ```ignore
/// let session = BrowserSession::launch(SessionConfig::default()).await?;
/// let page = session.new_page().await?;
/// page.navigate("http://localhost:8000/toastergui/builds/").await?;
/// session.close().await?;
/// ```
pub struct BrowserSession {
    inner: Arc<Mutex<Option<Browser>>>,
    config: SessionConfig,
    // dropped after the browser, once Chrome has exited
    profile: TempDir,
}

impl BrowserSession {
    /// Launches Chrome and starts the CDP handler task.
    ///
    /// # Errors
    ///
    /// Returns `LaunchFailed` if Chrome is not installed, not executable,
    /// or fails to start.
    pub async fn launch(config: SessionConfig) -> Result<Self> {
        debug!("Launching browser with config: {:?}", config);

        let profile = profile_dir()?;
        let browser_config = config.to_browser_config(profile.path())?;

        let (browser, mut handler) =
            Browser::launch(browser_config)
                .await
                .map_err(|e| BrowserError::LaunchFailed {
                    reason: "failed to launch Chrome process".to_string(),
                    source: Some(Box::new(e)),
                })?;

        // chromiumoxide only processes CDP events while the handler is polled
        tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!("Browser handler error: {}", e);
                }
            }
        });

        debug!("Browser launched");

        Ok(Self {
            inner: Arc::new(Mutex::new(Some(browser))),
            config,
            profile,
        })
    }

    /// The configuration this session was launched with.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Chrome profile directory for this session.
    #[must_use]
    pub fn profile_path(&self) -> &Path {
        self.profile.path()
    }

    /// Opens a new tab carrying the session's wait and settle settings.
    ///
    /// # Errors
    ///
    /// Returns `AlreadyClosed` if the session has been closed.
    pub async fn new_page(&self) -> Result<Page> {
        let browser = self.inner.lock().await;

        let browser = browser.as_ref().ok_or(BrowserError::AlreadyClosed)?;

        let chrome_page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;

        Ok(Page::new(chrome_page, self.config.wait, self.config.settle))
    }

    /// Closes the browser and waits for Chrome to exit.
    ///
    /// # Errors
    ///
    /// Returns an error if the browser fails to close gracefully.
    pub async fn close(self) -> Result<()> {
        let mut guard = self.inner.lock().await;

        if let Some(mut browser) = guard.take() {
            debug!("Closing browser");
            browser
                .close()
                .await
                .map_err(|e| BrowserError::ConnectionFailed(e.to_string()))?;
            if let Err(e) = browser.wait().await {
                warn!("Chrome did not exit cleanly: {}", e);
            }
        }

        Ok(())
    }

    /// Returns true if the session has been closed.
    pub async fn is_closed(&self) -> bool {
        self.inner.lock().await.is_none()
    }
}

impl Drop for BrowserSession {
    fn drop(&mut self) {
        // chromiumoxide's Browser kills Chrome on drop if close() was skipped
        if let Ok(guard) = self.inner.try_lock() {
            if guard.is_some() {
                warn!("BrowserSession dropped without close() - forcing shutdown");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_args_are_headless_and_sandbox_free() {
        let config = SessionConfig {
            headless: true,
            ..SessionConfig::default()
        };
        let args = config.chrome_args();
        assert_eq!(args[0], "--headless");
        assert!(args.contains(&"--window-size=1920,1080".to_string()));
        assert!(args.contains(&"--no-sandbox".to_string()));
    }

    #[test]
    fn visible_drops_headless_flag() {
        let args = SessionConfig::new()
            .visible()
            .with_window_size(800, 600)
            .chrome_args();
        assert!(!args.contains(&"--headless".to_string()));
        assert!(args.contains(&"--window-size=800,600".to_string()));
    }

    #[test]
    fn extra_args_come_last() {
        let args = SessionConfig::new()
            .with_args(vec!["--disable-gpu".to_string()])
            .chrome_args();
        assert_eq!(args.last().map(String::as_str), Some("--disable-gpu"));
    }

    #[test]
    fn profile_dir_is_removed_on_drop() {
        let dir = profile_dir().unwrap();
        let path = dir.path().to_path_buf();
        assert!(path.is_dir());
        assert!(
            path.file_name()
                .unwrap()
                .to_string_lossy()
                .starts_with("sortwise-")
        );
        assert_eq!(
            user_data_arg(&path),
            format!("--user-data-dir={}", path.display())
        );

        drop(dir);
        assert!(!path.exists());
    }

    #[test]
    fn profile_dirs_are_unique() {
        let a = profile_dir().unwrap();
        let b = profile_dir().unwrap();
        assert_ne!(a.path(), b.path());
    }

    #[tokio::test]
    #[ignore] // Requires Chrome to be installed
    async fn session_launch_and_close() {
        let session = BrowserSession::launch(SessionConfig::default())
            .await
            .expect("failed to launch browser");

        assert!(!session.is_closed().await);
        let profile = session.profile_path().to_path_buf();
        assert!(profile.is_dir());

        session.close().await.expect("failed to close browser");
        assert!(!profile.exists());
    }
}
