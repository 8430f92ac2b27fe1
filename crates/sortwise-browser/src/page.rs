//! A browser tab and the interactions the suite performs on it.

use crate::error::{BrowserError, Result};
use crate::table::Table;
use crate::target::Target;
use crate::wait::{settle, wait_for_result, WaitConfig};
use chromiumoxide::page::Page as ChromePage;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Encodes `value` as a JavaScript string literal.
///
/// JSON string syntax is a subset of JS string syntax, so quotes,
/// backticks and newlines cannot break out of the literal.
#[allow(clippy::result_large_err)]
pub(crate) fn js_string(value: &str) -> Result<String> {
    serde_json::to_string(value).map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
}

/// A browser tab.
///
/// Created by [`BrowserSession::new_page`](crate::BrowserSession::new_page),
/// which hands over the session's wait and settle settings.
#[derive(Debug)]
pub struct Page {
    inner: Arc<ChromePage>,
    wait: WaitConfig,
    settle: Duration,
}

impl Page {
    pub(crate) fn new(page: ChromePage, wait: WaitConfig, settle: Duration) -> Self {
        Self {
            inner: Arc::new(page),
            wait,
            settle,
        }
    }

    /// The wait settings used by this page's implicit waits.
    #[must_use]
    pub fn wait_config(&self) -> WaitConfig {
        self.wait
    }

    /// The pause applied after clicks.
    #[must_use]
    pub fn settle_delay(&self) -> Duration {
        self.settle
    }

    /// Navigates to an absolute URL and waits for the document to load.
    ///
    /// # Errors
    ///
    /// Returns `NavigationFailed` if the page fails to load, or
    /// `WaitTimeout` if it never reaches `complete`.
    pub async fn navigate(&self, url: &str) -> Result<()> {
        debug!("Navigating to {}", url);
        self.inner
            .goto(url)
            .await
            .map_err(|e| BrowserError::NavigationFailed {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        self.wait_for_load(self.wait).await
    }

    /// Navigates to `path` on `target` after its health check passes.
    ///
    /// # Errors
    ///
    /// Returns the health-check error, or any error from [`Page::navigate`].
    pub async fn navigate_to(&self, target: &dyn Target, path: &str) -> Result<()> {
        target.health_check().await?;
        self.navigate(&target.url(path)).await
    }

    /// Waits for `document.readyState` to become `complete`.
    ///
    /// # Errors
    ///
    /// Returns `WaitTimeout` if the document is still loading after the
    /// configured timeout.
    pub async fn wait_for_load(&self, config: WaitConfig) -> Result<()> {
        wait_for_result(
            || {
                let page = self.inner.clone();
                async move {
                    let result = page
                        .evaluate("document.readyState")
                        .await
                        .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

                    Ok(result
                        .value()
                        .and_then(|v| v.as_str())
                        .is_some_and(|s| s == "complete"))
                }
            },
            config,
            "document ready",
        )
        .await
    }

    /// Executes JavaScript in the page and deserializes the result.
    ///
    /// Never interpolate raw text into `script`; wrap it with JSON escaping
    /// as the other methods on this type do.
    ///
    /// # Errors
    ///
    /// Returns `ScriptExecutionFailed` if the script throws or the result
    /// does not deserialize into `T`.
    pub async fn evaluate<T>(&self, script: &str) -> Result<T>
    where
        T: serde::de::DeserializeOwned,
    {
        let result = self
            .inner
            .evaluate(script)
            .await
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

        result
            .into_value()
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
    }

    /// Waits until `selector` matches an element.
    ///
    /// # Errors
    ///
    /// Returns `WaitTimeout` if nothing matches in time.
    pub async fn wait_for_selector(&self, selector: &str, config: WaitConfig) -> Result<()> {
        let script = format!("!!document.querySelector({})", js_string(selector)?);

        wait_for_result(
            || {
                let page = self.inner.clone();
                let script = script.clone();
                async move {
                    let result = page
                        .evaluate(script.as_str())
                        .await
                        .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;

                    Ok(result
                        .value()
                        .and_then(serde_json::Value::as_bool)
                        .unwrap_or(false))
                }
            },
            config,
            &format!("selector '{selector}'"),
        )
        .await
    }

    /// Clicks the first element matching `selector`, then settles.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if nothing matches.
    pub async fn click(&self, selector: &str) -> Result<()> {
        let script = format!(
            "(() => {{ const el = document.querySelector({}); \
             if (!el) return false; el.click(); return true; }})()",
            js_string(selector)?
        );
        if !self.evaluate::<bool>(&script).await? {
            return Err(BrowserError::ElementNotFound(format!("selector '{selector}'")));
        }
        settle(self.settle).await;
        Ok(())
    }

    /// Clicks the first link whose visible text equals `text`, then settles.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if no link carries that text.
    pub async fn click_text(&self, text: &str) -> Result<()> {
        let script = format!(
            "(() => {{ const want = {}; \
             const link = Array.from(document.querySelectorAll('a')) \
               .find(a => a.innerText.trim() === want); \
             if (!link) return false; link.click(); return true; }})()",
            js_string(text)?
        );
        if !self.evaluate::<bool>(&script).await? {
            return Err(BrowserError::ElementNotFound(format!("link text '{text}'")));
        }
        settle(self.settle).await;
        Ok(())
    }

    /// Replaces the value of the input matching `selector` and fires
    /// `input` and `change` events.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if nothing matches.
    pub async fn fill(&self, selector: &str, text: &str) -> Result<()> {
        let script = format!(
            "(() => {{ const el = document.querySelector({}); \
             if (!el) return false; el.value = {}; \
             el.dispatchEvent(new Event('input', {{ bubbles: true }})); \
             el.dispatchEvent(new Event('change', {{ bubbles: true }})); \
             return true; }})()",
            js_string(selector)?,
            js_string(text)?
        );
        if !self.evaluate::<bool>(&script).await? {
            return Err(BrowserError::ElementNotFound(format!("selector '{selector}'")));
        }
        Ok(())
    }

    /// Text of the selected option of the `<select>` matching `selector`.
    ///
    /// # Errors
    ///
    /// Returns `ElementNotFound` if nothing matches or nothing is selected.
    pub async fn selected_option_text(&self, selector: &str) -> Result<String> {
        let script = format!(
            "(() => {{ const el = document.querySelector({}); \
             if (!el || !el.selectedOptions || el.selectedOptions.length === 0) return []; \
             return [el.selectedOptions[0].text.trim()]; }})()",
            js_string(selector)?
        );
        let selected: Vec<String> = self.evaluate(&script).await?;
        selected.into_iter().next().ok_or_else(|| {
            BrowserError::ElementNotFound(format!("selected option of '{selector}'"))
        })
    }

    /// Returns true when every string in `texts` occurs in the page's
    /// visible text. An empty list is trivially present.
    ///
    /// # Errors
    ///
    /// Returns `ScriptExecutionFailed` if the page cannot be queried.
    pub async fn is_text_present(&self, texts: &[&str]) -> Result<bool> {
        let wanted = serde_json::to_string(texts)
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))?;
        let script = format!(
            "(() => {{ const body = document.body ? document.body.innerText : ''; \
             return {wanted}.every(t => body.includes(t)); }})()"
        );
        self.evaluate(&script).await
    }

    /// Looks up the table with the given element id.
    #[must_use]
    pub fn table<'a>(&'a self, id: &'a str) -> Table<'a> {
        Table::new(self, id)
    }

    /// Current page URL.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn url(&self) -> Result<String> {
        self.evaluate("window.location.href").await
    }

    /// Page title.
    ///
    /// # Errors
    ///
    /// Returns an error if script execution fails.
    pub async fn title(&self) -> Result<String> {
        self.evaluate("document.title").await
    }

    /// Captures the viewport as PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if capture fails.
    pub async fn screenshot(&self) -> Result<Vec<u8>> {
        self.inner
            .screenshot(chromiumoxide::page::ScreenshotParams::default())
            .await
            .map_err(|e| BrowserError::ScriptExecutionFailed(e.to_string()))
    }

    /// Closes the tab.
    ///
    /// If an in-flight wait still holds the page, closing is left to the
    /// browser shutdown.
    ///
    /// # Errors
    ///
    /// Returns an error if Chrome rejects the close.
    pub async fn close(self) -> Result<()> {
        match Arc::try_unwrap(self.inner) {
            Ok(page) => {
                page.close().await?;
                Ok(())
            }
            Err(_) => {
                warn!("Page::close() called with outstanding references - relying on browser shutdown");
                Ok(())
            }
        }
    }
}
