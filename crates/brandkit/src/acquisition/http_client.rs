//! Static tier: one HTTP GET, no rendering.
//!
//! Not a browser and not retried. Any transport error, non-2xx status or
//! timeout is a failure.

use super::{FetchedPage, PageFetcher};
use crate::config::ScraperConfig;
use crate::error::{FetchTier, ScrapeError, ScrapeResult};
use async_trait::async_trait;
use std::time::Duration;

/// HTTP client for the static tier.
#[derive(Clone)]
pub struct StaticFetcher {
    client: reqwest::Client,
    timeout: Duration,
}

impl StaticFetcher {
    /// Build a client with the configured user agent and timeout.
    pub fn new(config: &ScraperConfig) -> ScrapeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.static_timeout)
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| ScrapeError::Client(e.to_string()))?;

        Ok(Self {
            client,
            timeout: config.static_timeout,
        })
    }

    /// Perform the GET and return the body. The base URL is the requested
    /// URL, not the post-redirect one.
    pub async fn get(&self, url: &str) -> ScrapeResult<FetchedPage> {
        let resp = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ScrapeError::Timeout {
                    tier: FetchTier::Static,
                    after: self.timeout,
                }
            } else {
                ScrapeError::Http(e)
            }
        })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(ScrapeError::Status(status.as_u16()));
        }

        let markup = resp.text().await.map_err(|e| {
            if e.is_timeout() {
                ScrapeError::Timeout {
                    tier: FetchTier::Static,
                    after: self.timeout,
                }
            } else {
                ScrapeError::Http(e)
            }
        })?;

        Ok(FetchedPage {
            markup,
            base_url: url.to_string(),
        })
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    fn tier(&self) -> FetchTier {
        FetchTier::Static
    }

    async fn fetch(&self, url: &str) -> ScrapeResult<FetchedPage> {
        self.get(url).await
    }
}
