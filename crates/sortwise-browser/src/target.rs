//! The application under test.
//!
//! The suite never starts the application itself; it only needs a base URL
//! to resolve scenario paths against and an optional readiness check.

use crate::error::Result;
use async_trait::async_trait;
use std::fmt;

/// A running web application the suite points the browser at.
#[async_trait]
pub trait Target: Send + Sync {
    /// Base URL such as `http://localhost:8000/toastergui/`.
    fn base_url(&self) -> &str;

    /// Called before navigation so an unreachable application fails fast.
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    /// Joins `path` to the base URL with exactly one slash between them.
    ///
    /// ```ignore
    /// target.url("/builds/") // "http://localhost:8000/builds/"
    /// ```
    fn url(&self, path: &str) -> String {
        let base = self.base_url().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }
}

impl fmt::Debug for dyn Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("base_url", &self.base_url())
            .finish()
    }
}

/// A target at a fixed URL, already running.
#[derive(Debug, Clone)]
pub struct StaticTarget {
    base_url: String,
}

impl StaticTarget {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl Target for StaticTarget {
    fn base_url(&self) -> &str {
        &self.base_url
    }
}
