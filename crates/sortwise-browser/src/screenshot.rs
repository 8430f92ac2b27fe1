//! Screenshots saved per test case for post-mortem inspection.

use crate::error::Result;
use crate::page::Page;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes numbered PNGs under `<root>/<case>/`.
///
/// File names are `<browser>-<kind>-<step>-<seq>.png`, with `seq` counting
/// up from 1 separately for each case.
#[derive(Debug)]
pub struct ScreenshotLog {
    root: PathBuf,
    browser: String,
    counters: HashMap<String, u32>,
}

impl ScreenshotLog {
    pub fn new(root: impl Into<PathBuf>, browser: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            browser: browser.into(),
            counters: HashMap::new(),
        }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Reserves the next path for `case`, advancing its counter.
    pub fn next_path(&mut self, case: &str, kind: &str, step: &str) -> PathBuf {
        let seq = self.counters.entry(case.to_string()).or_insert(0);
        *seq += 1;
        self.root.join(file_component(case)).join(format!(
            "{}-{}-{}-{}.png",
            file_component(&self.browser),
            file_component(kind),
            file_component(step),
            seq
        ))
    }

    /// Writes `png` to the next path for `case`, creating directories.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the directory or file cannot be written.
    pub async fn save_bytes(
        &mut self,
        case: &str,
        kind: &str,
        step: &str,
        png: &[u8],
    ) -> Result<PathBuf> {
        let path = self.next_path(case, kind, step);
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir).await?;
        }
        tokio::fs::write(&path, png).await?;
        info!("Screenshot saved to {}", path.display());
        Ok(path)
    }

    /// Captures `page` and saves it for `case`.
    ///
    /// # Errors
    ///
    /// Returns capture failures from the page or `Io` on write failure.
    pub async fn capture(
        &mut self,
        page: &Page,
        case: &str,
        kind: &str,
        step: &str,
    ) -> Result<PathBuf> {
        let png = page.screenshot().await?;
        self.save_bytes(case, kind, step, &png).await
    }
}

/// Keeps names usable as a single path component.
fn file_component(name: &str) -> String {
    name.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect()
}
