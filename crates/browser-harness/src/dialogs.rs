//! JavaScript dialog handling
//!
//! Alerts, confirms and prompts block the page until they are handled,
//! and the opening event fires exactly once. The watcher therefore has
//! to be attached *before* whatever triggers the dialog runs:
//!
//! A dialog also blocks the script that opened it, so an `evaluate`
//! that calls `confirm()` directly would never return. Trigger dialogs
//! through a timeout (or a click) instead:
//!
//! ```no_run
//! use browser_harness::dialogs::DialogWatcher;
//! use std::time::Duration;
//!
//! # async fn example(page: &chromiumoxide::Page) -> anyhow::Result<()> {
//! let mut watcher = DialogWatcher::attach(page).await?;
//! page.evaluate("setTimeout(() => window.confirm('Are you sure?'), 0)")
//!     .await?;
//!
//! let dialog = watcher.next_dialog(Duration::from_secs(2)).await?;
//! assert_eq!(dialog.message(), "Are you sure?");
//! dialog.dismiss().await?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use chromiumoxide::cdp::browser_protocol::page::{
    DialogType, EventJavascriptDialogOpening, HandleJavaScriptDialogParams,
};
use chromiumoxide::Page;
use futures::StreamExt;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::debug;

/// Subscribed stream of dialog-opening events for one page
pub struct DialogWatcher {
    page: Page,
    rx: mpsc::Receiver<DialogEvent>,
    _task: tokio::task::JoinHandle<()>,
}

struct DialogEvent {
    message: String,
    kind: DialogType,
    default_prompt: Option<String>,
}

impl DialogWatcher {
    /// Subscribe to dialog events on `page`
    ///
    /// Must be called before the dialog is triggered; events raised
    /// earlier are not replayed.
    pub async fn attach(page: &Page) -> Result<Self> {
        let mut events = page
            .event_listener::<EventJavascriptDialogOpening>()
            .await
            .context("Failed to subscribe to dialog events")?;

        let (tx, rx) = mpsc::channel(8);
        let task = tokio::spawn(async move {
            while let Some(event) = events.next().await {
                let forwarded = DialogEvent {
                    message: event.message.clone(),
                    kind: event.r#type.clone(),
                    default_prompt: event.default_prompt.clone(),
                };
                if tx.send(forwarded).await.is_err() {
                    break;
                }
            }
        });

        Ok(Self {
            page: page.clone(),
            rx,
            _task: task,
        })
    }

    /// Wait for the next dialog to open
    ///
    /// # Errors
    ///
    /// Returns an error when no dialog opens within `timeout` or the
    /// event stream closes.
    pub async fn next_dialog(&mut self, timeout: Duration) -> Result<PendingDialog> {
        let event = tokio::time::timeout(timeout, self.rx.recv())
            .await
            .context("Timed out waiting for a dialog to open")?
            .context("Dialog event stream closed")?;

        debug!(
            "Dialog opened: type={:?}, message={:?}",
            event.kind, event.message
        );

        Ok(PendingDialog {
            page: self.page.clone(),
            message: event.message,
            kind: event.kind,
            default_prompt: event.default_prompt,
        })
    }
}

/// An open dialog waiting to be accepted or dismissed
pub struct PendingDialog {
    page: Page,
    message: String,
    kind: DialogType,
    default_prompt: Option<String>,
}

impl PendingDialog {
    /// The dialog's message text
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether this is an alert, confirm, prompt or beforeunload dialog
    pub fn kind(&self) -> &DialogType {
        &self.kind
    }

    /// The prompt's pre-filled text, when present
    pub fn default_prompt(&self) -> Option<&str> {
        self.default_prompt.as_deref()
    }

    /// Accept the dialog (OK)
    pub async fn accept(self) -> Result<()> {
        self.handle(true, None).await
    }

    /// Dismiss the dialog (Cancel)
    pub async fn dismiss(self) -> Result<()> {
        self.handle(false, None).await
    }

    /// Type `text` into a prompt and accept it
    pub async fn accept_with_text(self, text: &str) -> Result<()> {
        self.handle(true, Some(text.to_string())).await
    }

    async fn handle(self, accept: bool, prompt_text: Option<String>) -> Result<()> {
        let mut builder = HandleJavaScriptDialogParams::builder().accept(accept);
        if let Some(text) = prompt_text {
            builder = builder.prompt_text(text);
        }
        let params = builder
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build dialog params: {}", e))?;

        self.page
            .execute(params)
            .await
            .context("Failed to handle dialog")?;
        debug!("Dialog handled (accept={})", accept);
        Ok(())
    }
}
