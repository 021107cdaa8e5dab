//! Cookie management
//!
//! Thin wrappers over the DevTools Network domain covering the
//! add / get-named / get-all / delete / delete-all tutorial surface,
//! SameSite included. Cookies set without an explicit domain apply to
//! the page's current URL.
//!
//! # Example
//!
//! ```no_run
//! use browser_harness::cookies::{self, CookieSpec};
//!
//! # async fn example(page: &chromiumoxide::Page) -> anyhow::Result<()> {
//! cookies::add(page, CookieSpec::new("session_id", "abc123")).await?;
//!
//! let cookie = cookies::named(page, "session_id").await?;
//! assert!(cookie.is_some());
//!
//! cookies::delete(page, "session_id").await?;
//! # Ok(())
//! # }
//! ```

use anyhow::{Context, Result};
use chromiumoxide::cdp::browser_protocol::network::{
    ClearBrowserCookiesParams, Cookie, CookieParam, CookieSameSite, DeleteCookiesParams,
    GetCookiesParams, SetCookiesParams,
};
use chromiumoxide::Page;
use tracing::debug;

/// Input for [`add`]: name and value, plus the optional attributes the
/// tutorials exercise
#[derive(Debug, Clone)]
pub struct CookieSpec {
    pub name: String,
    pub value: String,
    /// URL the cookie applies to; defaults to the page's current URL
    pub url: Option<String>,
    /// Cookie domain; defaults to the page's current host
    pub domain: Option<String>,
    /// Cookie path
    pub path: Option<String>,
    /// Restrict the cookie to HTTPS
    pub secure: bool,
    /// Hide the cookie from JavaScript
    pub http_only: bool,
    /// Cross-site sending policy
    pub same_site: Option<CookieSameSite>,
}

impl CookieSpec {
    /// A plain name/value cookie for the current page
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            url: None,
            domain: None,
            path: None,
            secure: false,
            http_only: false,
            same_site: None,
        }
    }

    /// Apply the cookie to an explicit URL instead of the current page
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    /// Set the SameSite policy
    pub fn same_site(mut self, policy: CookieSameSite) -> Self {
        self.same_site = Some(policy);
        self
    }

    /// Set the cookie domain
    pub fn domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }
}

/// Add a cookie to the current browser context
pub async fn add(page: &Page, spec: CookieSpec) -> Result<()> {
    let url = match spec.url.clone() {
        Some(url) => url,
        None => current_url(page).await?,
    };

    let mut builder = CookieParam::builder()
        .name(spec.name.clone())
        .value(spec.value)
        .url(url)
        .secure(spec.secure)
        .http_only(spec.http_only);
    if let Some(domain) = spec.domain {
        builder = builder.domain(domain);
    }
    if let Some(path) = spec.path {
        builder = builder.path(path);
    }
    if let Some(same_site) = spec.same_site {
        builder = builder.same_site(same_site);
    }
    let cookie = builder
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build cookie: {}", e))?;

    page.execute(SetCookiesParams::new(vec![cookie]))
        .await
        .context("Failed to set cookie")?;
    debug!("Cookie added: {}", spec.name);
    Ok(())
}

/// All cookies visible to the current page
pub async fn all(page: &Page) -> Result<Vec<Cookie>> {
    let response = page
        .execute(GetCookiesParams::default())
        .await
        .context("Failed to get cookies")?;
    Ok(response.result.cookies)
}

/// All cookies that would be sent to `url`
pub async fn all_for(page: &Page, url: &str) -> Result<Vec<Cookie>> {
    let params = GetCookiesParams {
        urls: Some(vec![url.to_string()]),
    };
    let response = page
        .execute(params)
        .await
        .context("Failed to get cookies")?;
    Ok(response.result.cookies)
}

/// The cookie with the given name, when present
pub async fn named(page: &Page, name: &str) -> Result<Option<Cookie>> {
    Ok(all(page).await?.into_iter().find(|c| c.name == name))
}

/// The cookie with the given name for an explicit URL
pub async fn named_for(page: &Page, name: &str, url: &str) -> Result<Option<Cookie>> {
    Ok(all_for(page, url).await?.into_iter().find(|c| c.name == name))
}

/// Delete the cookie with the given name from the current page's host
pub async fn delete(page: &Page, name: &str) -> Result<()> {
    let url = current_url(page).await?;
    delete_from(page, name, &url).await
}

/// Delete the cookie with the given name as it applies to `url`
pub async fn delete_from(page: &Page, name: &str, url: &str) -> Result<()> {
    let params = DeleteCookiesParams::builder()
        .name(name)
        .url(url)
        .build()
        .map_err(|e| anyhow::anyhow!("Failed to build delete params: {}", e))?;
    page.execute(params)
        .await
        .context("Failed to delete cookie")?;
    debug!("Cookie deleted: {}", name);
    Ok(())
}

/// Delete every cookie in the browser context
pub async fn delete_all(page: &Page) -> Result<()> {
    page.execute(ClearBrowserCookiesParams::default())
        .await
        .context("Failed to clear cookies")?;
    debug!("All cookies deleted");
    Ok(())
}

async fn current_url(page: &Page) -> Result<String> {
    page.url()
        .await
        .context("Failed to read page url")?
        .context("Page has no url")
}
