//! Harness configuration
//!
//! TOML-based settings shared by the tutorial suites: browser launch
//! parameters, wait timeouts, artifact locations and suite metadata.
//! Every field has a default, so an empty file (or no file at all) is a
//! valid configuration.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Main configuration structure loaded from TOML files
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Browser launch settings
    #[serde(default)]
    pub browser: BrowserConfig,
    /// Wait and navigation timeouts
    #[serde(default)]
    pub timeouts: TimeoutsConfig,
    /// Artifact and report locations
    #[serde(default)]
    pub artifacts: ArtifactsConfig,
    /// Suite metadata
    #[serde(default)]
    pub suite: SuiteConfig,
}

impl Config {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is
    /// malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string
    ///
    /// # Example
    ///
    /// ```
    /// use browser_harness::config::Config;
    ///
    /// # fn example() -> anyhow::Result<()> {
    /// let config = Config::from_str("[browser]\nheadless = false\n")?;
    /// assert!(!config.browser.headless);
    /// # Ok(())
    /// # }
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }
}

/// Browser launch settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowserConfig {
    /// Run Chrome without a visible window (default: true)
    #[serde(default = "default_headless")]
    pub headless: bool,
    /// Browser window width in pixels (default: 1024)
    #[serde(default = "default_window_width")]
    pub window_width: u32,
    /// Browser window height in pixels (default: 768)
    #[serde(default = "default_window_height")]
    pub window_height: u32,
    /// Explicit Chrome executable; discovered automatically when unset
    #[serde(default)]
    pub chrome_path: Option<PathBuf>,
    /// Additional command line arguments passed to Chrome
    #[serde(default)]
    pub args: Vec<String>,
    /// Start the browser in incognito mode
    #[serde(default)]
    pub incognito: bool,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        Self {
            headless: default_headless(),
            window_width: default_window_width(),
            window_height: default_window_height(),
            chrome_path: None,
            args: Vec::new(),
            incognito: false,
        }
    }
}

fn default_headless() -> bool {
    true
}

fn default_window_width() -> u32 {
    1024
}

fn default_window_height() -> u32 {
    768
}

/// Wait and navigation timeouts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutsConfig {
    /// Explicit wait timeout in milliseconds (default: 10000)
    #[serde(default = "default_wait_ms")]
    pub wait_ms: u64,
    /// Poll interval for explicit waits in milliseconds (default: 500)
    #[serde(default = "default_poll_ms")]
    pub poll_ms: u64,
    /// Navigation timeout in milliseconds (default: 30000)
    #[serde(default = "default_navigation_ms")]
    pub navigation_ms: u64,
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            wait_ms: default_wait_ms(),
            poll_ms: default_poll_ms(),
            navigation_ms: default_navigation_ms(),
        }
    }
}

impl TimeoutsConfig {
    /// Explicit wait timeout as a `Duration`
    pub fn wait(&self) -> Duration {
        Duration::from_millis(self.wait_ms)
    }

    /// Poll interval as a `Duration`
    pub fn poll(&self) -> Duration {
        Duration::from_millis(self.poll_ms)
    }

    /// Navigation timeout as a `Duration`
    pub fn navigation(&self) -> Duration {
        Duration::from_millis(self.navigation_ms)
    }
}

fn default_wait_ms() -> u64 {
    10_000
}

fn default_poll_ms() -> u64 {
    500
}

fn default_navigation_ms() -> u64 {
    30_000
}

/// Artifact and report locations
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ArtifactsConfig {
    /// Directory that holds one subdirectory per test (default: test-results)
    #[serde(default = "default_artifact_root")]
    pub root: PathBuf,
    /// Directory the run report is written into (default: test-report)
    #[serde(default = "default_report_dir")]
    pub report: PathBuf,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            root: default_artifact_root(),
            report: default_report_dir(),
        }
    }
}

fn default_artifact_root() -> PathBuf {
    PathBuf::from("test-results")
}

fn default_report_dir() -> PathBuf {
    PathBuf::from("test-report")
}

/// Suite metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuiteConfig {
    /// Suite name used in report headers (default: "browser cookbook")
    #[serde(default = "default_suite_name")]
    pub name: String,
    /// Public TodoMVC build the page object suite runs against
    #[serde(default = "default_todo_url")]
    pub todo_url: String,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            name: default_suite_name(),
            todo_url: default_todo_url(),
        }
    }
}

fn default_suite_name() -> String {
    "browser cookbook".to_string()
}

fn default_todo_url() -> String {
    "https://todomvc.com/examples/react/dist/".to_string()
}
