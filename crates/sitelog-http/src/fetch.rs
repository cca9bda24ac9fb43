//! PageFetcher trait and the reqwest-backed HttpFetcher.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::FetchError;

/// Fixed delay inserted before every request.
const DEFAULT_THROTTLE: Duration = Duration::from_millis(500);

/// Trait for fetching one page body. Enables mock injection for testing.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `http://{host}{path}` and return the body verbatim.
    async fn fetch_page(&self, host: &str, path: &str) -> Result<String, FetchError>;
}

/// Real fetcher using `reqwest` over plain HTTP.
pub struct HttpFetcher {
    client: reqwest::Client,
    throttle: Duration,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
            throttle: DEFAULT_THROTTLE,
        }
    }

    /// Override the fixed pre-request delay.
    #[must_use]
    pub fn with_throttle(mut self, throttle: Duration) -> Self {
        self.throttle = throttle;
        self
    }
}

impl Default for HttpFetcher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch_page(&self, host: &str, path: &str) -> Result<String, FetchError> {
        tokio::time::sleep(self.throttle).await;

        let url = format!("http://{host}{path}");
        tracing::debug!("GET {url}");

        // Status is deliberately not checked: any received body, error
        // pages included, flows downstream unchanged.
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("{status}: {} bytes", body.len());

        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_throttle_is_half_a_second() {
        let fetcher = HttpFetcher::new();
        assert_eq!(fetcher.throttle, Duration::from_millis(500));
    }

    #[test]
    fn with_throttle_overrides_default() {
        let fetcher = HttpFetcher::new().with_throttle(Duration::ZERO);
        assert_eq!(fetcher.throttle, Duration::ZERO);
    }
}
