//! Launch option tutorials
//!
//! Everything a tutorial ever passed on the Chrome command line comes
//! through [`BrowserOptions`]: window geometry, extra switches, an
//! explicit binary. User agent overrides come in two flavors, the
//! command-line switch at launch and the DevTools emulation override
//! per page.
//!
//! Run with: cargo test -p browser-harness --test options

#[path = "common/browser.rs"]
mod browser;

use browser_harness::session::{BrowserOptions, BrowserSession};
use chromiumoxide::cdp::browser_protocol::emulation::SetUserAgentOverrideParams;

async fn launch_with(options: BrowserOptions) -> Option<BrowserSession> {
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

#[tokio::test]
async fn window_size_sets_the_viewport() {
    skip_if_no_chrome!();
    let Some(session) = launch_with(BrowserOptions {
        window: (800, 600),
        args: vec!["--no-sandbox".to_string()],
        ..BrowserOptions::default()
    })
    .await
    else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");

    // Headless windows have no chrome, so the inner width matches the
    // requested window width exactly
    let width = page
        .evaluate("window.innerWidth")
        .await
        .expect("Should read width")
        .into_value::<u32>()
        .expect("Width should be a number");
    assert_eq!(width, 800);

    session.close().await.expect("Should close browser");
}

#[tokio::test]
async fn user_agent_switch_at_launch() {
    skip_if_no_chrome!();
    let Some(session) = launch_with(BrowserOptions {
        args: vec![
            "--no-sandbox".to_string(),
            "--user-agent=tutorial-agent/1.0".to_string(),
        ],
        ..BrowserOptions::default()
    })
    .await
    else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");

    let agent = page
        .evaluate("navigator.userAgent")
        .await
        .expect("Should read user agent")
        .into_value::<String>()
        .expect("Agent should be a string");
    assert_eq!(agent, "tutorial-agent/1.0");

    session.close().await.expect("Should close browser");
}

#[tokio::test]
async fn user_agent_override_per_page() {
    skip_if_no_chrome!();
    let Some(session) = browser::require_session().await else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");

    page.execute(SetUserAgentOverrideParams::new("emulated-agent/2.0"))
        .await
        .expect("Should set override");

    let agent = page
        .evaluate("navigator.userAgent")
        .await
        .expect("Should read user agent")
        .into_value::<String>()
        .expect("Agent should be a string");
    assert_eq!(agent, "emulated-agent/2.0");

    session.close().await.expect("Should close browser");
}

#[tokio::test]
async fn incognito_flag_launches() {
    skip_if_no_chrome!();
    let Some(session) = launch_with(BrowserOptions {
        incognito: true,
        args: vec!["--no-sandbox".to_string()],
        ..BrowserOptions::default()
    })
    .await
    else {
        return;
    };

    let page = session.blank_page().await.expect("Should open page");
    let title = page.get_title().await.expect("Should read title");
    assert!(title.is_none() || title.as_deref() == Some(""));

    session.close().await.expect("Should close browser");
}
