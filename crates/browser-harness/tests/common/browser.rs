//! Shared browser helpers for the tutorial suites

use browser_harness::session::{BrowserOptions, BrowserSession};
use chromiumoxide::Page;

/// Check if browser tests should be skipped (when Chrome isn't available)
pub fn should_skip() -> bool {
    std::env::var("SKIP_BROWSER_TESTS").is_ok()
}

/// Macro to skip a test when browser tests are disabled
#[macro_export]
macro_rules! skip_if_no_chrome {
    () => {
        if browser::should_skip() {
            eprintln!("Skipping test: SKIP_BROWSER_TESTS is set");
            return;
        }
    };
}

/// Launch options shared by all tutorial tests
///
/// `--no-sandbox` keeps Chrome bootable inside containers and CI
/// runners that execute tests as root.
pub fn tutorial_options() -> BrowserOptions {
    BrowserOptions {
        args: vec!["--no-sandbox".to_string()],
        ..BrowserOptions::default()
    }
}

/// Try to launch a session, skip the test if Chrome isn't installed
pub async fn require_session() -> Option<BrowserSession> {
    match BrowserSession::launch(&tutorial_options()).await {
        Ok(session) => Some(session),
        Err(e) => {
            let rendered = format!("{:#}", e);
            if rendered.contains("Could not auto detect") {
                eprintln!("Skipping: Chrome not installed ({})", rendered);
                None
            } else {
                panic!("Unexpected browser error: {}", rendered);
            }
        }
    }
}

/// Replace the page body, escaping the markup through JSON
///
/// Inline `onclick` handlers in the injected markup stay live;
/// `<script>` tags would not execute, so behavior beyond handlers goes
/// through `page.evaluate`.
#[allow(dead_code)]
pub async fn set_body(page: &Page, html: &str) -> anyhow::Result<()> {
    let escaped = serde_json::to_string(html)?;
    page.evaluate(format!("document.body.innerHTML = {}", escaped))
        .await?;
    Ok(())
}
