//! Per-test artifact directories
//!
//! Every test gets its own directory under the artifact root, named by
//! a sanitized version of the test identifier. Failure screenshots are
//! numbered `test-failed-<n>.png` — the exact pattern the report's
//! failure-attachment hook scans for — and the same directory collects
//! named screenshots, element screenshots and printed pages.
//!
//! # Example
//!
//! ```no_run
//! use browser_harness::artifacts::TestArtifacts;
//!
//! # async fn example(page: &chromiumoxide::Page) -> anyhow::Result<()> {
//! let mut artifacts = TestArtifacts::new("test-results", "alerts::accept_alert");
//! artifacts.save_failure_screenshot(page).await?; // test-failed-1.png
//! artifacts.save_pdf(page, "page.pdf").await?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use chromiumoxide::cdp::browser_protocol::page::{CaptureScreenshotFormat, PrintToPdfParams};
use chromiumoxide::element::Element;
use chromiumoxide::page::ScreenshotParams;
use chromiumoxide::Page;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Map a test identifier to an artifact directory name
///
/// `::`, `.`, `/`, `_` and `[` become `-`; `]` is dropped. The result
/// is stable, filesystem-safe, and shared with the attachment hook.
pub fn slug(test_id: &str) -> String {
    test_id
        .replace("::", "-")
        .chars()
        .filter_map(|c| match c {
            '.' | '/' | '_' | '[' => Some('-'),
            ']' => None,
            other => Some(other),
        })
        .collect()
}

/// Artifact directory for a single test
pub struct TestArtifacts {
    dir: PathBuf,
    screenshot_count: u32,
}

impl TestArtifacts {
    /// Create the artifact directory for `test_id` under `root`
    ///
    /// The directory itself is created lazily on first write.
    pub fn new(root: impl AsRef<Path>, test_id: &str) -> Self {
        Self {
            dir: root.as_ref().join(slug(test_id)),
            screenshot_count: 0,
        }
    }

    /// The directory artifacts are written into
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Capture a full-page screenshot under the failure naming scheme
    ///
    /// Files are numbered `test-failed-1.png`, `test-failed-2.png`, …
    /// in capture order.
    pub async fn save_failure_screenshot(&mut self, page: &Page) -> Result<PathBuf> {
        self.screenshot_count += 1;
        let name = format!("test-failed-{}.png", self.screenshot_count);
        self.save_screenshot(page, &name).await
    }

    /// Capture a full-page screenshot under an explicit file name
    pub async fn save_screenshot(&self, page: &Page, name: &str) -> Result<PathBuf> {
        let params = ScreenshotParams::builder()
            .format(CaptureScreenshotFormat::Png)
            .full_page(true)
            .build();
        let bytes = page
            .screenshot(params)
            .await
            .context("Failed to capture screenshot")?;
        self.write(name, &bytes)
    }

    /// Capture a screenshot of a single element
    pub async fn save_element_screenshot(
        &self,
        element: &Element,
        name: &str,
    ) -> Result<PathBuf> {
        let bytes = element
            .screenshot(CaptureScreenshotFormat::Png)
            .await
            .context("Failed to capture element screenshot")?;
        self.write(name, &bytes)
    }

    /// Print the current page to PDF
    pub async fn save_pdf(&self, page: &Page, name: &str) -> Result<PathBuf> {
        let bytes = page
            .pdf(PrintToPdfParams::default())
            .await
            .context("Failed to print page to PDF")?;
        self.write(name, &bytes)
    }

    /// Write raw bytes into the artifact directory
    pub fn write(&self, name: &str, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).with_context(|| {
            format!("Failed to create artifact dir: {}", self.dir.display())
        })?;
        let path = self.dir.join(name);
        fs::write(&path, bytes)
            .with_context(|| format!("Failed to write artifact: {}", path.display()))?;
        debug!("Artifact written: {}", path.display());
        Ok(path)
    }
}
