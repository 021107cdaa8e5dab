//! ActionBot behavior against local markup
//!
//! The TodoMVC suite never types into a pre-filled field (the entry
//! input self-clears on Enter), so the replace-on-type contract gets
//! its own coverage here.
//!
//! Run with: cargo test -p todo-pages --test bot_actions

#[path = "common/browser.rs"]
mod browser;

use todo_pages::bot::ActionBot;

async fn field_value(bot: &ActionBot, id: &str) -> String {
    bot.page()
        .evaluate(format!("document.getElementById('{}').value", id))
        .await
        .expect("Should read value")
        .into_value::<String>()
        .expect("Value should be a string")
}

#[tokio::test]
async fn typing_replaces_existing_text() {
    skip_if_no_chrome!();
    let Some(session) = browser::require_session().await else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");
    browser::set_body(&page, r#"<input id="field" value="stale text">"#)
        .await
        .expect("Should set body");

    let bot = ActionBot::new(page);
    bot.type_text("#field", "fresh").await.expect("Should type");

    assert_eq!(field_value(&bot, "field").await, "fresh");

    session.close().await.expect("Should close browser");
}

#[tokio::test]
async fn typing_into_an_empty_field() {
    skip_if_no_chrome!();
    let Some(session) = browser::require_session().await else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");
    browser::set_body(&page, r#"<input id="field">"#)
        .await
        .expect("Should set body");

    let bot = ActionBot::new(page);
    bot.type_text("#field", "first words")
        .await
        .expect("Should type");

    assert_eq!(field_value(&bot, "field").await, "first words");

    session.close().await.expect("Should close browser");
}

#[tokio::test]
async fn consecutive_typing_does_not_accumulate() {
    skip_if_no_chrome!();
    let Some(session) = browser::require_session().await else {
        return;
    };
    let page = session.blank_page().await.expect("Should open page");
    browser::set_body(&page, r#"<input id="field">"#)
        .await
        .expect("Should set body");

    let bot = ActionBot::new(page);
    bot.type_text("#field", "draft one").await.expect("Should type");
    bot.type_text("#field", "draft two").await.expect("Should type");

    assert_eq!(field_value(&bot, "field").await, "draft two");

    session.close().await.expect("Should close browser");
}
