//! Shared harness for the browser automation cookbook
//!
//! This crate carries the glue the tutorial suites share: a headless
//! browser fixture, explicit waits, JavaScript dialog handling, cookie
//! helpers, per-test artifact directories, and a run report that can
//! attach screenshots, videos and printed pages to failed cases.
//!
//! Everything heavy is delegated: Chrome is driven over the DevTools
//! protocol by `chromiumoxide`, tests run under `cargo test`, and the
//! report is plain JSON plus a console rendering.
//!
//! # Example
//!
//! ```no_run
//! use browser_harness::session::{BrowserOptions, BrowserSession};
//! use browser_harness::wait::Waiter;
//! use std::time::Duration;
//!
//! # async fn example() -> anyhow::Result<()> {
//! let session = BrowserSession::launch(&BrowserOptions::default()).await?;
//! let page = session.page("https://example.com").await?;
//!
//! let waiter = Waiter::new(Duration::from_secs(10));
//! let heading = waiter.element(&page, "h1").await?;
//! println!("{:?}", heading.inner_text().await?);
//!
//! session.close().await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Configuration
//!
//! Harness settings load from TOML:
//!
//! ```toml
//! [browser]
//! headless = true
//! window_width = 1024
//! window_height = 768
//!
//! [timeouts]
//! wait_ms = 10000
//! poll_ms = 500
//!
//! [artifacts]
//! root = "test-results"
//! report = "test-report"
//! ```

pub mod artifacts;
pub mod capture;
pub mod config;
pub mod cookies;
pub mod dialogs;
pub mod env;
pub mod logging;
pub mod report;
pub mod reporter;
pub mod session;
pub mod wait;
pub mod warnings;

// Re-export main types for convenience
pub use config::Config;
pub use report::{CaseRecorder, CaseReport, RunReport, Status};
pub use reporter::{OutputFormat, Reporter};
pub use session::{BrowserOptions, BrowserSession};
pub use wait::{WaitError, Waiter};
