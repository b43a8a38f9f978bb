//! Where translation bundles are retrieved from.
//!
//! A location is either absolute (`/translations/es.json`, resolved against the
//! site root) or relative (`translations/es.json`, resolved against the
//! directory of the current page), the same way a browser resolves a fetch.

use crate::error::{I18nError, I18nResult};
use async_trait::async_trait;
use reqwest::Url;
use std::path::PathBuf;
use std::time::Duration;

/// Retrieves the raw text of a bundle location.
#[async_trait]
pub trait BundleSource: Send + Sync {
    /// Fetch the content at `location`.
    ///
    /// Transport errors and non-success statuses are reported as
    /// `I18nError::Retrieval`.
    async fn fetch(&self, location: &str) -> I18nResult<String>;
}

/// Fetches bundles over HTTP relative to the current page URL.
pub struct HttpSource {
    client: reqwest::Client,
    page_url: Url,
}

impl HttpSource {
    pub fn new(page_url: Url, timeout: Duration) -> reqwest::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("site-i18n/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self::with_client(client, page_url))
    }

    pub fn with_client(client: reqwest::Client, page_url: Url) -> Self {
        Self { client, page_url }
    }
}

#[async_trait]
impl BundleSource for HttpSource {
    async fn fetch(&self, location: &str) -> I18nResult<String> {
        let url = self.page_url.join(location).map_err(|e| I18nError::Retrieval {
            location: location.to_string(),
            reason: e.to_string(),
        })?;

        let retrieval_error = |reason: String| I18nError::Retrieval {
            location: url.to_string(),
            reason,
        };

        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| retrieval_error(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(retrieval_error(format!("HTTP {}", status)));
        }

        response
            .text()
            .await
            .map_err(|e| retrieval_error(e.to_string()))
    }
}

/// Reads bundles from a static site directory on disk.
pub struct FsSource {
    root: PathBuf,
    page_path: String,
}

impl FsSource {
    /// `root` is the site's document root; `page_path` is the URL path of the
    /// page being localized (e.g. `/es/plans`).
    pub fn new(root: impl Into<PathBuf>, page_path: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            page_path: page_path.into(),
        }
    }

    fn resolve(&self, location: &str) -> PathBuf {
        if let Some(absolute) = location.strip_prefix('/') {
            return self.root.join(absolute);
        }

        // Relative to the page's directory: everything up to the last '/'
        let dir = match self.page_path.rfind('/') {
            Some(idx) => &self.page_path[..idx],
            None => "",
        };

        self.root.join(dir.trim_start_matches('/')).join(location)
    }
}

#[async_trait]
impl BundleSource for FsSource {
    async fn fetch(&self, location: &str) -> I18nResult<String> {
        let path = self.resolve(location);

        tokio::fs::read_to_string(&path)
            .await
            .map_err(|e| I18nError::Retrieval {
                location: path.display().to_string(),
                reason: e.to_string(),
            })
    }
}
