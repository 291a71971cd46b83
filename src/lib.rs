// Re-export modules
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod filter;
pub mod results;

// Re-export commonly used types for convenience
pub use error::FetchError;
pub use results::{ErrorReport, PageResult};

use std::time::Duration;

/// Builder for a single fetch-and-extract run
pub struct PageFetch {
    url: String,
    timeout: Duration,
}

impl PageFetch {
    /// Create a new run for the given page URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            timeout: Duration::from_secs(fetcher::DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the fetch timeout in seconds
    pub fn with_timeout(mut self, timeout_seconds: u64) -> Self {
        self.timeout = Duration::from_secs(timeout_seconds);
        self
    }

    /// Fetch the page and extract its visible text and same-origin links.
    ///
    /// Exactly one network request; any transport, decode or URL failure
    /// short-circuits with the corresponding [`FetchError`] variant.
    pub async fn run(self) -> Result<PageResult, FetchError> {
        let html = fetcher::fetch(&self.url, self.timeout).await?;
        let result = extract::extract(&html, &self.url)?;
        Ok(result)
    }
}
