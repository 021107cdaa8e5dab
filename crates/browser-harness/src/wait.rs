//! Explicit waits
//!
//! Pages render asynchronously, so the tutorials never assert against
//! an element the instant after navigation. A [`Waiter`] polls a probe
//! until it yields a value or the deadline passes, swallowing the
//! transient lookup failures (element not there yet, node detached)
//! that a polling wait exists to ride out.
//!
//! # Example
//!
//! ```no_run
//! use browser_harness::wait::Waiter;
//! use std::time::Duration;
//!
//! # async fn example(page: &chromiumoxide::Page) -> anyhow::Result<()> {
//! let waiter = Waiter::new(Duration::from_secs(10));
//!
//! // Wait for an element to appear
//! let button = waiter.element(page, "button.submit").await?;
//! button.click().await?;
//!
//! // Wait for the page to react
//! waiter.title_contains(page, "Dashboard").await?;
//! # Ok(())
//! # }
//! ```

use chromiumoxide::element::Element;
use chromiumoxide::Page;
use std::future::Future;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::trace;

/// Error returned when a wait condition never becomes true
#[derive(Debug, Error)]
pub enum WaitError {
    /// The probe kept failing until the deadline passed
    #[error("timed out after {timeout:?} waiting for {what}")]
    Timeout {
        /// Description of the awaited condition
        what: String,
        /// The configured timeout
        timeout: Duration,
    },
}

/// Polls a condition until it holds or a deadline passes
#[derive(Debug, Clone, Copy)]
pub struct Waiter {
    timeout: Duration,
    poll: Duration,
}

impl Waiter {
    /// Create a waiter with the given timeout and a 500ms poll interval
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            poll: Duration::from_millis(500),
        }
    }

    /// Override the poll interval
    pub fn with_poll(mut self, poll: Duration) -> Self {
        self.poll = poll;
        self
    }

    /// Build a waiter from the harness timeout settings
    pub fn from_config(timeouts: &crate::config::TimeoutsConfig) -> Self {
        Self {
            timeout: timeouts.wait(),
            poll: timeouts.poll(),
        }
    }

    /// Poll `probe` until it yields a value
    ///
    /// The probe returns `None` while the condition does not hold yet.
    /// `what` names the condition in the timeout error.
    pub async fn until<T, F, Fut>(&self, what: &str, mut probe: F) -> Result<T, WaitError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Option<T>>,
    {
        let deadline = Instant::now() + self.timeout;
        loop {
            if let Some(value) = probe().await {
                return Ok(value);
            }
            if Instant::now() >= deadline {
                return Err(WaitError::Timeout {
                    what: what.to_string(),
                    timeout: self.timeout,
                });
            }
            trace!("Condition not met yet: {}", what);
            tokio::time::sleep(self.poll).await;
        }
    }

    /// Poll a boolean predicate until it returns `true`
    pub async fn until_true<F, Fut>(&self, what: &str, mut predicate: F) -> Result<(), WaitError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = bool>,
    {
        self.until(what, move || {
            let fut = predicate();
            async move { fut.await.then_some(()) }
        })
        .await
    }

    /// Wait for a CSS selector to match an element
    pub async fn element(&self, page: &Page, selector: &str) -> Result<Element, WaitError> {
        let page = page.clone();
        let sel = selector.to_string();
        self.until(&format!("element matching `{}`", selector), move || {
            let page = page.clone();
            let sel = sel.clone();
            async move { page.find_element(&sel).await.ok() }
        })
        .await
    }

    /// Wait for a CSS selector to match at least `count` elements
    pub async fn element_count(
        &self,
        page: &Page,
        selector: &str,
        count: usize,
    ) -> Result<Vec<Element>, WaitError> {
        let page = page.clone();
        let sel = selector.to_string();
        self.until(
            &format!("at least {} elements matching `{}`", count, selector),
            move || {
                let page = page.clone();
                let sel = sel.clone();
                async move {
                    match page.find_elements(&sel).await {
                        Ok(elements) if elements.len() >= count => Some(elements),
                        _ => None,
                    }
                }
            },
        )
        .await
    }

    /// Wait for the document title to contain `needle`
    pub async fn title_contains(&self, page: &Page, needle: &str) -> Result<String, WaitError> {
        let page = page.clone();
        let needle_owned = needle.to_string();
        self.until(&format!("title containing `{}`", needle), move || {
            let page = page.clone();
            let needle = needle_owned.clone();
            async move {
                match page.get_title().await {
                    Ok(Some(title)) if title.contains(&needle) => Some(title),
                    _ => None,
                }
            }
        })
        .await
    }

    /// Wait for the page URL to contain `needle`
    pub async fn url_contains(&self, page: &Page, needle: &str) -> Result<String, WaitError> {
        let page = page.clone();
        let needle_owned = needle.to_string();
        self.until(&format!("url containing `{}`", needle), move || {
            let page = page.clone();
            let needle = needle_owned.clone();
            async move {
                match page.url().await {
                    Ok(Some(url)) if url.contains(&needle) => Some(url),
                    _ => None,
                }
            }
        })
        .await
    }

    /// Wait for an element's text to contain `needle`
    pub async fn text_present(
        &self,
        page: &Page,
        selector: &str,
        needle: &str,
    ) -> Result<String, WaitError> {
        let page = page.clone();
        let sel = selector.to_string();
        let needle_owned = needle.to_string();
        self.until(
            &format!("`{}` to contain text `{}`", selector, needle),
            move || {
                let page = page.clone();
                let sel = sel.clone();
                let needle = needle_owned.clone();
                async move {
                    let element = page.find_element(&sel).await.ok()?;
                    match element.inner_text().await {
                        Ok(Some(text)) if text.contains(&needle) => Some(text),
                        _ => None,
                    }
                }
            },
        )
        .await
    }
}
