//! Page lifecycle
//!
//! A page object knows how to navigate to itself and how to tell that
//! it finished rendering. [`Loadable::get`] ties the two together:
//! already-loaded pages are left alone, everything else is loaded and
//! verified.

use anyhow::{bail, Result};

/// Pages that can load themselves and verify they did
#[allow(async_fn_in_trait)]
pub trait Loadable {
    /// Navigate to the page
    async fn load(&self) -> Result<()>;

    /// Whether the page is currently rendered
    async fn is_loaded(&self) -> bool;

    /// Load unless already loaded, then verify
    async fn get(&self) -> Result<()> {
        if !self.is_loaded().await {
            self.load().await?;
        }
        if !self.is_loaded().await {
            bail!("Page did not finish loading");
        }
        Ok(())
    }
}
