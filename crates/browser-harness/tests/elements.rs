//! Element interaction tutorials: find, click, type, read
//!
//! Run with: cargo test -p browser-harness --test elements

#[path = "common/browser.rs"]
mod browser;

use browser_harness::wait::Waiter;
use std::time::Duration;

fn waiter() -> Waiter {
    Waiter::new(Duration::from_secs(5)).with_poll(Duration::from_millis(100))
}

#[tokio::test]
async fn find_by_css_selector() {
    skip_if_no_chrome!();
    let Some(session) = browser::require_session().await else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");

    browser::set_body(
        &page,
        r#"<h1 class="heading">Welcome</h1>
           <ul>
             <li class="entry">alpha</li>
             <li class="entry">beta</li>
             <li class="entry">gamma</li>
           </ul>"#,
    )
    .await
    .expect("Should set body");

    let heading = page
        .find_element("h1.heading")
        .await
        .expect("Heading should exist");
    assert_eq!(
        heading.inner_text().await.expect("Should read text"),
        Some("Welcome".to_string())
    );

    let entries = page
        .find_elements("li.entry")
        .await
        .expect("Entries should exist");
    assert_eq!(entries.len(), 3);

    session.close().await.expect("Should close browser");
}

#[tokio::test]
async fn click_a_button() {
    skip_if_no_chrome!();
    let Some(session) = browser::require_session().await else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");

    browser::set_body(
        &page,
        r#"<button id="counter" onclick="this.textContent = 'clicked'">not clicked</button>"#,
    )
    .await
    .expect("Should set body");

    let button = page
        .find_element("#counter")
        .await
        .expect("Button should exist");
    button.click().await.expect("Should click");

    let text = waiter()
        .text_present(&page, "#counter", "clicked")
        .await
        .expect("Click handler should run");
    assert_eq!(text, "clicked");

    session.close().await.expect("Should close browser");
}

#[tokio::test]
async fn type_into_an_input() {
    skip_if_no_chrome!();
    let Some(session) = browser::require_session().await else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");

    browser::set_body(&page, r#"<input id="name" type="text">"#)
        .await
        .expect("Should set body");

    let input = page
        .find_element("#name")
        .await
        .expect("Input should exist");
    input.click().await.expect("Should focus input");
    input.type_str("Boba Fett").await.expect("Should type");

    // Typed text lands in the property, not the attribute
    let value = page
        .evaluate("document.getElementById('name').value")
        .await
        .expect("Should read value")
        .into_value::<String>()
        .expect("Value should be a string");
    assert_eq!(value, "Boba Fett");

    session.close().await.expect("Should close browser");
}

#[tokio::test]
async fn clear_an_input() {
    skip_if_no_chrome!();
    let Some(session) = browser::require_session().await else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");

    browser::set_body(&page, r#"<input id="field" value="stale text">"#)
        .await
        .expect("Should set body");

    page.evaluate(
        "const f = document.getElementById('field'); \
         f.value = ''; \
         f.dispatchEvent(new Event('input', { bubbles: true }));",
    )
    .await
    .expect("Should clear input");

    let value = page
        .evaluate("document.getElementById('field').value")
        .await
        .expect("Should read value")
        .into_value::<String>()
        .expect("Value should be a string");
    assert!(value.is_empty());

    session.close().await.expect("Should close browser");
}

#[tokio::test]
async fn read_attributes_and_text() {
    skip_if_no_chrome!();
    let Some(session) = browser::require_session().await else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");

    browser::set_body(
        &page,
        r#"<a id="docs" href="https://example.com/docs" target="_blank">Documentation</a>"#,
    )
    .await
    .expect("Should set body");

    let link = page.find_element("#docs").await.expect("Link should exist");
    assert_eq!(
        link.attribute("href").await.expect("Should read href"),
        Some("https://example.com/docs".to_string())
    );
    assert_eq!(
        link.attribute("target").await.expect("Should read target"),
        Some("_blank".to_string())
    );
    assert_eq!(
        link.inner_text().await.expect("Should read text"),
        Some("Documentation".to_string())
    );

    session.close().await.expect("Should close browser");
}

#[tokio::test]
async fn choose_from_a_select_list() {
    skip_if_no_chrome!();
    let Some(session) = browser::require_session().await else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");

    browser::set_body(
        &page,
        r#"<select id="fruit" onchange="document.getElementById('picked').textContent = this.value">
             <option value="">choose</option>
             <option value="apple">Apple</option>
             <option value="pear">Pear</option>
           </select>
           <p id="picked"></p>"#,
    )
    .await
    .expect("Should set body");

    // Headless selects don't pop a native dropdown; set the value and
    // fire the change event the way a picker would
    page.evaluate(
        "const s = document.getElementById('fruit'); \
         s.value = 'pear'; \
         s.dispatchEvent(new Event('change', { bubbles: true }));",
    )
    .await
    .expect("Should pick option");

    let picked = waiter()
        .text_present(&page, "#picked", "pear")
        .await
        .expect("Change handler should run");
    assert_eq!(picked, "pear");

    session.close().await.expect("Should close browser");
}
