//! Minimal end-to-end walkthrough: launch, navigate, find, type,
//! read, capture, quit.
//!
//! Run with: cargo run -p browser-harness --example getting_started

use browser_harness::artifacts::TestArtifacts;
use browser_harness::session::{BrowserOptions, BrowserSession};
use browser_harness::wait::Waiter;
use std::time::Duration;
use tracing::info;

const DEMO_PAGE: &str = "data:text/html,<title>GettingStarted</title>\
    <h1 id=heading>Hello, harness</h1><input id=name placeholder=your-name>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    browser_harness::logging::init();

    let options = BrowserOptions {
        args: vec!["--no-sandbox".to_string()],
        ..BrowserOptions::default()
    };
    let session = BrowserSession::launch(&options).await?;
    let page = session.page(DEMO_PAGE).await?;

    let waiter = Waiter::new(Duration::from_secs(10));
    let heading = waiter.element(&page, "#heading").await?;
    info!("Heading: {:?}", heading.inner_text().await?);
    info!("Title: {:?}", page.get_title().await?);

    let input = waiter.element(&page, "#name").await?;
    input.click().await?;
    input.type_str("Ferris").await?;
    let typed = page
        .evaluate("document.getElementById('name').value")
        .await?
        .into_value::<String>()?;
    info!("Typed: {}", typed);

    let artifacts = TestArtifacts::new("test-results", "examples::getting_started");
    let path = artifacts.save_screenshot(&page, "hello.png").await?;
    info!("Screenshot saved to {}", path.display());

    session.close().await?;
    Ok(())
}
