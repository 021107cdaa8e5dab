//! Shared setup for the page object suites

use browser_harness::session::{BrowserOptions, BrowserSession};
use browser_harness::Config;
use chromiumoxide::Page;
use todo_pages::loadable::Loadable;
use todo_pages::todo::TodoPage;

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

/// The TodoMVC URL: `TODO_URL` env var, then `HARNESS_CONFIG` TOML,
/// then the built-in default
#[allow(dead_code)]
fn todo_url() -> String {
    if let Ok(url) = std::env::var("TODO_URL") {
        return url;
    }
    let config = std::env::var("HARNESS_CONFIG")
        .ok()
        .and_then(|path| Config::from_file(path).ok())
        .unwrap_or_default();
    config.suite.todo_url
}

/// Try to launch a session, skip the test if Chrome isn't installed
pub async fn require_session() -> Option<BrowserSession> {
    let options = BrowserOptions {
        args: vec!["--no-sandbox".to_string()],
        ..BrowserOptions::default()
    };
    match BrowserSession::launch(&options).await {
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
#[allow(dead_code)]
pub async fn set_body(page: &Page, html: &str) -> anyhow::Result<()> {
    let escaped = serde_json::to_string(html)?;
    page.evaluate(format!("document.body.innerHTML = {}", escaped))
        .await?;
    Ok(())
}

/// Launch a browser and open the TodoMVC app
///
/// Skips (returns `None`) when Chrome is missing or the app is
/// unreachable, so the suite stays green on offline machines.
#[allow(dead_code)]
pub async fn require_todo() -> Option<(BrowserSession, TodoPage)> {
    let session = require_session().await?;

    let page = match session.blank_page().await {
        Ok(page) => page,
        Err(e) => {
            let _ = session.close().await;
            panic!("Failed to open page: {:#}", e);
        }
    };

    let todo = TodoPage::new(page, todo_url());
    if let Err(e) = todo.get().await {
        eprintln!("Skipping: TodoMVC unreachable ({:#})", e);
        let _ = session.close().await;
        return None;
    }
    Some((session, todo))
}
