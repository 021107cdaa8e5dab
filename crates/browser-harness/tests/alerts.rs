//! JavaScript dialog tutorials: alert, confirm and prompt
//!
//! The three dialog kinds differ in what the page gets back: alerts
//! return nothing, confirms report accept/dismiss, prompts carry text.
//! Each test parks the result in a window global so the assertion can
//! read it after the dialog is handled.
//!
//! Run with: cargo test -p browser-harness --test alerts

#[path = "common/browser.rs"]
mod browser;

use browser_harness::dialogs::DialogWatcher;
use chromiumoxide::cdp::browser_protocol::page::DialogType;
use std::time::Duration;

const DIALOG_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn accept_an_alert() {
    skip_if_no_chrome!();
    let Some(session) = browser::require_session().await else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");

    let mut watcher = DialogWatcher::attach(&page).await.expect("Should attach");
    page.evaluate("setTimeout(() => window.alert('Sample alert'), 0)")
        .await
        .expect("Should trigger alert");

    let dialog = watcher
        .next_dialog(DIALOG_TIMEOUT)
        .await
        .expect("Alert should open");
    assert_eq!(dialog.message(), "Sample alert");
    assert_eq!(*dialog.kind(), DialogType::Alert);
    dialog.accept().await.expect("Should accept alert");

    session.close().await.expect("Should close browser");
}

#[tokio::test]
async fn dismiss_a_confirm() {
    skip_if_no_chrome!();
    let Some(session) = browser::require_session().await else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");

    let mut watcher = DialogWatcher::attach(&page).await.expect("Should attach");
    page.evaluate(
        "setTimeout(() => { window.__answer = window.confirm('Are you sure?'); }, 0)",
    )
    .await
    .expect("Should trigger confirm");

    let dialog = watcher
        .next_dialog(DIALOG_TIMEOUT)
        .await
        .expect("Confirm should open");
    assert_eq!(dialog.message(), "Are you sure?");
    assert_eq!(*dialog.kind(), DialogType::Confirm);
    dialog.dismiss().await.expect("Should dismiss confirm");

    // Give the unblocked script a beat to finish the assignment
    tokio::time::sleep(Duration::from_millis(200)).await;

    // Dismissing a confirm hands false back to the page
    let answer = page
        .evaluate("window.__answer")
        .await
        .expect("Should read answer")
        .into_value::<bool>()
        .expect("Answer should be a bool");
    assert!(!answer);

    session.close().await.expect("Should close browser");
}

#[tokio::test]
async fn answer_a_prompt() {
    skip_if_no_chrome!();
    let Some(session) = browser::require_session().await else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");

    let mut watcher = DialogWatcher::attach(&page).await.expect("Should attach");
    page.evaluate(
        "setTimeout(() => { window.__tool = window.prompt('What is your tool of choice?', 'none'); }, 0)",
    )
    .await
    .expect("Should trigger prompt");

    let dialog = watcher
        .next_dialog(DIALOG_TIMEOUT)
        .await
        .expect("Prompt should open");
    assert_eq!(dialog.message(), "What is your tool of choice?");
    assert_eq!(*dialog.kind(), DialogType::Prompt);
    assert_eq!(dialog.default_prompt(), Some("none"));
    dialog
        .accept_with_text("chromiumoxide")
        .await
        .expect("Should answer prompt");

    tokio::time::sleep(Duration::from_millis(200)).await;

    let tool = page
        .evaluate("window.__tool")
        .await
        .expect("Should read tool")
        .into_value::<String>()
        .expect("Tool should be a string");
    assert_eq!(tool, "chromiumoxide");

    session.close().await.expect("Should close browser");
}

#[tokio::test]
async fn click_triggered_dialog() {
    skip_if_no_chrome!();
    let Some(session) = browser::require_session().await else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");

    browser::set_body(
        &page,
        r#"<button id="poke" onclick="window.alert('clicked')">See an example alert</button>"#,
    )
    .await
    .expect("Should set body");

    let mut watcher = DialogWatcher::attach(&page).await.expect("Should attach");
    let button = page
        .find_element("#poke")
        .await
        .expect("Button should exist");
    button.click().await.expect("Should click button");

    let dialog = watcher
        .next_dialog(DIALOG_TIMEOUT)
        .await
        .expect("Alert should open");
    assert_eq!(dialog.message(), "clicked");
    dialog.accept().await.expect("Should accept alert");

    session.close().await.expect("Should close browser");
}
