//! # sortwise-browser
//!
//! Headless Chrome plumbing for the sortwise table checks, built on
//! chromiumoxide.
//!
//! - **BrowserSession**: launches and shuts down Chrome
//! - **Page**: navigation, clicks, text checks, screenshots
//! - **Table**: reads columns and clicks sortable headings
//! - **Target**: the application under test
//! - **ScreenshotLog**: per-case PNG files for failed runs
//!
//! ```ignore
//! use sortwise_browser::{BrowserSession, SessionConfig, StaticTarget};
//!
//! let session = BrowserSession::launch(SessionConfig::default()).await?;
//! let page = session.new_page().await?;
//! page.navigate_to(&StaticTarget::new("http://localhost:8000/toastergui"), "/builds/").await?;
//!
//! let table = page.table("otable");
//! table.click_heading("Outcome").await?;
//! let outcomes = table.column_by_class("outcome").await?;
//!
//! session.close().await?;
//! ```
//!
//! Tests that need Chrome are `#[ignore]`d; run them with
//! `cargo test -p sortwise-browser -- --ignored`.

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod browser;
pub mod error;
pub mod page;
pub mod screenshot;
pub mod table;
pub mod target;
pub mod wait;

pub use browser::{BrowserSession, SessionConfig};
pub use error::{BrowserError, Result};
pub use page::Page;
pub use screenshot::ScreenshotLog;
pub use table::Table;
pub use target::{StaticTarget, Target};
pub use wait::{settle, wait_for, wait_for_result, WaitConfig, DEFAULT_POLL_INTERVAL, DEFAULT_TIMEOUT};
