//! Waiting element actions
//!
//! The bot is the only layer that touches selectors and raw elements.
//! Every lookup goes through an explicit wait, so page objects built on
//! top never race the renderer.

use anyhow::{Context, Result};
use browser_harness::wait::Waiter;
use chromiumoxide::cdp::browser_protocol::input::{
    DispatchMouseEventParams, DispatchMouseEventType,
};
use chromiumoxide::element::Element;
use chromiumoxide::Page;
use std::time::Duration;
use tracing::debug;

/// A page plus a waiter, exposing element actions that wait first
#[derive(Clone)]
pub struct ActionBot {
    page: Page,
    waiter: Waiter,
}

impl ActionBot {
    /// Wrap a page with a 10 second wait and 200ms poll
    pub fn new(page: Page) -> Self {
        Self {
            page,
            waiter: Waiter::new(Duration::from_secs(10)).with_poll(Duration::from_millis(200)),
        }
    }

    /// Override the waiter
    pub fn with_waiter(mut self, waiter: Waiter) -> Self {
        self.waiter = waiter;
        self
    }

    /// The underlying page
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Wait for a selector to match, then return the element
    pub async fn element(&self, selector: &str) -> Result<Element> {
        Ok(self.waiter.element(&self.page, selector).await?)
    }

    /// All elements currently matching a selector, without waiting
    pub async fn elements(&self, selector: &str) -> Result<Vec<Element>> {
        self.page
            .find_elements(selector)
            .await
            .with_context(|| format!("Failed to query `{}`", selector))
    }

    /// Whether the selector matches right now
    pub async fn exists(&self, selector: &str) -> bool {
        self.page.find_element(selector).await.is_ok()
    }

    /// Wait for an element and click it
    pub async fn click(&self, selector: &str) -> Result<()> {
        debug!("Clicking `{}`", selector);
        self.element(selector)
            .await?
            .click()
            .await
            .with_context(|| format!("Failed to click `{}`", selector))?;
        Ok(())
    }

    /// Wait for an element, clear it and type into it
    ///
    /// Typing replaces whatever the field held. The clear fires an
    /// input event so framework-bound fields notice the change.
    pub async fn type_text(&self, selector: &str, text: &str) -> Result<()> {
        debug!("Typing into `{}`", selector);
        let element = self.element(selector).await?;
        element
            .click()
            .await
            .with_context(|| format!("Failed to focus `{}`", selector))?;
        element
            .call_js_fn(
                "function() { \
                    this.value = ''; \
                    this.dispatchEvent(new Event('input', { bubbles: true })); \
                }",
                false,
            )
            .await
            .with_context(|| format!("Failed to clear `{}`", selector))?;
        element
            .type_str(text)
            .await
            .with_context(|| format!("Failed to type into `{}`", selector))?;
        Ok(())
    }

    /// Press Enter with the element focused
    pub async fn press_enter(&self, selector: &str) -> Result<()> {
        self.element(selector)
            .await?
            .press_key("Enter")
            .await
            .with_context(|| format!("Failed to press Enter on `{}`", selector))?;
        Ok(())
    }

    /// Wait for an element and read its text
    pub async fn text(&self, selector: &str) -> Result<String> {
        let text = self
            .element(selector)
            .await?
            .inner_text()
            .await
            .with_context(|| format!("Failed to read text of `{}`", selector))?;
        Ok(text.unwrap_or_default())
    }

    /// Move the mouse over an element
    ///
    /// Hover-revealed controls (like TodoMVC's destroy buttons) have no
    /// clickable box until the pointer is over their row.
    pub async fn hover(&self, selector: &str) -> Result<()> {
        debug!("Hovering `{}`", selector);
        let element = self.element(selector).await?;
        let point = element
            .clickable_point()
            .await
            .with_context(|| format!("No visible point for `{}`", selector))?;
        let params = DispatchMouseEventParams::builder()
            .r#type(DispatchMouseEventType::MouseMoved)
            .x(point.x)
            .y(point.y)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build mouse event: {}", e))?;
        self.page
            .execute(params)
            .await
            .context("Failed to dispatch mouse move")?;
        Ok(())
    }

    /// Wait until an element's text contains `needle`
    pub async fn wait_for_text(&self, selector: &str, needle: &str) -> Result<String> {
        Ok(self.waiter.text_present(&self.page, selector, needle).await?)
    }
}
