//! TodoMVC page object
//!
//! Wraps the React TodoMVC build behind todo-level operations. All
//! selectors live in this module; tests above it never see one.

use anyhow::{Context, Result};
use chromiumoxide::Page;
use tracing::debug;

use crate::bot::ActionBot;
use crate::loadable::Loadable;

const NEW_TODO: &str = "input.new-todo";
const TODO_ITEMS: &str = "ul.todo-list li";
const TODO_COUNT: &str = "span.todo-count";
const TOGGLE_ALL: &str = "label[for='toggle-all']";
const CLEAR_COMPLETED: &str = "button.clear-completed";

/// The expected counter text for `n` remaining todos
pub fn items_left_label(n: usize) -> String {
    if n == 1 {
        "1 item left!".to_string()
    } else {
        format!("{} items left!", n)
    }
}

fn item_selector(index: usize) -> String {
    // CSS nth-child is 1-based
    format!("{}:nth-child({})", TODO_ITEMS, index + 1)
}

/// The TodoMVC application page
pub struct TodoPage {
    bot: ActionBot,
    url: String,
}

impl TodoPage {
    /// Bind a page object to an open page and the app URL
    pub fn new(page: Page, url: impl Into<String>) -> Self {
        Self {
            bot: ActionBot::new(page),
            url: url.into(),
        }
    }

    /// The underlying action bot
    pub fn bot(&self) -> &ActionBot {
        &self.bot
    }

    /// Add a todo by typing into the entry field and pressing Enter
    pub async fn add(&self, title: &str) -> Result<()> {
        debug!("Adding todo: {}", title);
        self.bot.type_text(NEW_TODO, title).await?;
        self.bot.press_enter(NEW_TODO).await?;
        Ok(())
    }

    /// Titles of all todos in display order
    pub async fn todos(&self) -> Result<Vec<String>> {
        self.titles(TODO_ITEMS).await
    }

    /// Titles of completed todos
    pub async fn completed_todos(&self) -> Result<Vec<String>> {
        self.titles("ul.todo-list li.completed").await
    }

    /// Number of todos currently displayed
    pub async fn todo_count(&self) -> Result<usize> {
        Ok(self.bot.elements(TODO_ITEMS).await?.len())
    }

    /// Remaining count parsed from the footer counter
    pub async fn items_left(&self) -> Result<usize> {
        let text = self.bot.text(TODO_COUNT).await?;
        let digits: String = text.chars().take_while(|c| c.is_ascii_digit()).collect();
        digits
            .parse()
            .with_context(|| format!("Counter text not numeric: {:?}", text))
    }

    /// The raw footer counter text, e.g. `2 items left!`
    pub async fn items_left_text(&self) -> Result<String> {
        self.bot.text(TODO_COUNT).await
    }

    /// Toggle the completion checkbox of the todo with `title`
    pub async fn toggle(&self, title: &str) -> Result<()> {
        debug!("Toggling todo: {}", title);
        let index = self.index_of(title).await?;
        self.bot
            .click(&format!("{} input.toggle", item_selector(index)))
            .await
    }

    /// Remove the todo with `title` via its hover-revealed destroy button
    pub async fn remove(&self, title: &str) -> Result<()> {
        debug!("Removing todo: {}", title);
        let index = self.index_of(title).await?;
        let item = item_selector(index);
        self.bot.hover(&item).await?;
        self.bot.click(&format!("{} button.destroy", item)).await
    }

    /// Toggle every todo at once
    pub async fn toggle_all(&self) -> Result<()> {
        self.bot.click(TOGGLE_ALL).await
    }

    /// Remove all completed todos
    pub async fn clear_completed(&self) -> Result<()> {
        self.bot.click(CLEAR_COMPLETED).await
    }

    /// Show only active todos
    pub async fn filter_active(&self) -> Result<()> {
        self.bot.click("ul.filters a[href='#/active']").await
    }

    /// Show only completed todos
    pub async fn filter_completed(&self) -> Result<()> {
        self.bot.click("ul.filters a[href='#/completed']").await
    }

    /// Show all todos
    pub async fn filter_all(&self) -> Result<()> {
        self.bot.click("ul.filters a[href='#/']").await
    }

    /// Wait until exactly `count` todos are displayed
    ///
    /// Exact, not at-least: a shrinking list (delete, clear, filter)
    /// must not satisfy the wait while stale rows are still rendered.
    pub async fn wait_for_todo_count(&self, count: usize) -> Result<()> {
        let deadline = std::time::Instant::now() + std::time::Duration::from_secs(10);
        loop {
            if self.bot.elements(TODO_ITEMS).await?.len() == count {
                return Ok(());
            }
            if std::time::Instant::now() >= deadline {
                anyhow::bail!("Todo list did not settle at {} items", count);
            }
            tokio::time::sleep(std::time::Duration::from_millis(200)).await;
        }
    }

    async fn titles(&self, selector: &str) -> Result<Vec<String>> {
        let mut titles = Vec::new();
        for item in self.bot.elements(selector).await? {
            let label = item
                .find_element("label")
                .await
                .context("Todo item without a label")?;
            titles.push(
                label
                    .inner_text()
                    .await
                    .context("Failed to read todo label")?
                    .unwrap_or_default(),
            );
        }
        Ok(titles)
    }

    async fn index_of(&self, title: &str) -> Result<usize> {
        self.todos()
            .await?
            .iter()
            .position(|t| t == title)
            .with_context(|| format!("No todo titled {:?}", title))
    }
}

impl Loadable for TodoPage {
    async fn load(&self) -> Result<()> {
        debug!("Loading {}", self.url);
        self.bot
            .page()
            .goto(&self.url)
            .await
            .with_context(|| format!("Failed to navigate to {}", self.url))?;
        self.bot.element(NEW_TODO).await?;
        Ok(())
    }

    async fn is_loaded(&self) -> bool {
        self.bot.exists(NEW_TODO).await
    }
}
