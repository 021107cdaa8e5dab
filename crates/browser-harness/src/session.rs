//! Browser session fixture
//!
//! Launching Chrome is the one piece of setup every tutorial repeats,
//! so it lives here: build a [`BrowserOptions`], call
//! [`BrowserSession::launch`], and get back a browser with its CDP
//! event handler already running on a background task.
//!
//! Each launch gets its own user data directory (pid + counter +
//! timestamp) so parallel test binaries never fight over profile locks.
//!
//! # Example
//!
//! ```no_run
//! use browser_harness::session::{BrowserOptions, BrowserSession};
//!
//! # async fn example() -> anyhow::Result<()> {
//! let options = BrowserOptions {
//!     window: (1920, 1080),
//!     ..BrowserOptions::default()
//! };
//! let session = BrowserSession::launch(&options).await?;
//! let page = session.page("https://example.com").await?;
//! println!("{:?}", page.get_title().await?);
//! session.close().await?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::Page;
use futures::StreamExt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config;

static SESSION_ID: AtomicU64 = AtomicU64::new(0);

/// Launch options for a [`BrowserSession`]
///
/// The defaults mirror the harness configuration defaults: headless,
/// 1024x768, no extra arguments.
#[derive(Debug, Clone)]
pub struct BrowserOptions {
    /// Run without a visible window
    pub headless: bool,
    /// Window size as (width, height)
    pub window: (u32, u32),
    /// Explicit Chrome executable; discovered automatically when unset
    pub chrome_path: Option<PathBuf>,
    /// Additional command line arguments
    pub args: Vec<String>,
    /// Start in incognito mode
    pub incognito: bool,
}

impl Default for BrowserOptions {
    fn default() -> Self {
        Self {
            headless: true,
            window: (1024, 768),
            chrome_path: None,
            args: Vec::new(),
            incognito: false,
        }
    }
}

impl BrowserOptions {
    /// Build options from the `[browser]` section of a harness config
    pub fn from_config(browser: &config::BrowserConfig) -> Self {
        Self {
            headless: browser.headless,
            window: (browser.window_width, browser.window_height),
            chrome_path: browser.chrome_path.clone(),
            args: browser.args.clone(),
            incognito: browser.incognito,
        }
    }

    /// Translate into a chromiumoxide [`BrowserConfig`]
    fn to_browser_config(&self) -> Result<BrowserConfig> {
        let mut builder = BrowserConfig::builder();

        if !self.headless {
            builder = builder.with_head();
        }

        let (width, height) = self.window;
        builder = builder.window_size(width, height);

        if let Some(path) = self.chrome_path.clone().or_else(find_chrome) {
            debug!("Using Chrome executable: {}", path.display());
            builder = builder.chrome_executable(path);
        }

        for arg in &self.args {
            builder = builder.arg(arg);
        }
        if self.incognito {
            builder = builder.arg("--incognito");
        }

        builder = builder.user_data_dir(unique_user_data_dir());

        builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build browser config: {}", e))
    }
}

/// A unique profile directory so parallel launches never collide
fn unique_user_data_dir() -> PathBuf {
    let session_id = SESSION_ID.fetch_add(1, Ordering::SeqCst);
    let pid = std::process::id();
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    std::env::temp_dir().join(format!(
        "browser-harness-{}-{}-{}",
        pid, session_id, timestamp
    ))
}

/// Locate a Chrome binary outside chromiumoxide's own auto-detection
///
/// Checks the `CHROME` environment variable first, then the
/// Chrome-for-Testing cache Puppeteer populates. Returns `None` when
/// neither matches, leaving detection to chromiumoxide.
pub fn find_chrome() -> Option<PathBuf> {
    if let Ok(path) = std::env::var("CHROME") {
        let path = PathBuf::from(path);
        if path.exists() {
            return Some(path);
        }
    }

    let home = std::env::var("HOME").ok()?;
    let puppeteer_cache = PathBuf::from(home).join(".cache/puppeteer/chrome");
    if !puppeteer_cache.exists() {
        return None;
    }

    let mut versions: Vec<_> = std::fs::read_dir(&puppeteer_cache)
        .ok()?
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_dir())
        .collect();
    versions.sort_by_key(|v| std::cmp::Reverse(v.path()));

    for version_dir in versions {
        let candidates = [
            "chrome-linux64/chrome",
            "chrome-mac-arm64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing",
            "chrome-mac-x64/Google Chrome for Testing.app/Contents/MacOS/Google Chrome for Testing",
        ];
        for candidate in candidates {
            let path = version_dir.path().join(candidate);
            if path.exists() {
                return Some(path);
            }
        }
    }
    None
}

/// A launched browser plus its CDP event handler task
pub struct BrowserSession {
    browser: Browser,
    handler: tokio::task::JoinHandle<()>,
}

impl BrowserSession {
    /// Launch Chrome with the given options
    ///
    /// # Errors
    ///
    /// Returns an error when no Chrome executable can be found or the
    /// process fails to start.
    pub async fn launch(options: &BrowserOptions) -> Result<Self> {
        info!(
            "Launching browser (headless={}, window={}x{})",
            options.headless, options.window.0, options.window.1
        );

        let config = options.to_browser_config()?;
        let (browser, mut handler) = Browser::launch(config)
            .await
            .context("Failed to launch browser")?;

        // Drive CDP events until the browser goes away
        let handle = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(e) = event {
                    warn!("Browser handler error: {:?}", e);
                    break;
                }
            }
        });

        // Give the browser a moment to fully initialize
        tokio::time::sleep(Duration::from_millis(500)).await;

        info!("Browser launched successfully");
        Ok(Self {
            browser,
            handler: handle,
        })
    }

    /// Launch with the default options (headless, 1024x768)
    pub async fn launch_default() -> Result<Self> {
        Self::launch(&BrowserOptions::default()).await
    }

    /// Open a new page and navigate it to `url`
    pub async fn page(&self, url: &str) -> Result<Page> {
        self.browser
            .new_page(url)
            .await
            .with_context(|| format!("Failed to open page: {}", url))
    }

    /// Open a new page on `about:blank`
    pub async fn blank_page(&self) -> Result<Page> {
        self.page("about:blank").await
    }

    /// Access the underlying chromiumoxide browser
    pub fn browser(&self) -> &Browser {
        &self.browser
    }

    /// Close the browser and stop the handler task
    pub async fn close(mut self) -> Result<()> {
        info!("Closing browser");
        self.browser.close().await.context("Failed to close browser")?;
        let _ = self.browser.wait().await;
        self.handler.abort();
        Ok(())
    }
}
