//! Rendered tier: fetch a page through a headless browser.
//!
//! Strictly one browser per invocation. The browser is launched, used for a
//! single page and torn down before `fetch` returns, whether navigation
//! succeeded or not. Nothing is pooled or reused across scrapes.

pub mod chromium;

use crate::acquisition::{FetchedPage, PageFetcher};
use crate::config::ScraperConfig;
use crate::error::{FetchTier, ScrapeError, ScrapeResult};
use async_trait::async_trait;
use chromium::{find_chromium, BrowserSession};
use std::path::PathBuf;
use std::time::Duration;

/// Headless-browser fetcher.
#[derive(Debug, Clone)]
pub struct RenderedFetcher {
    chromium_path: Option<PathBuf>,
    timeout: Duration,
}

impl RenderedFetcher {
    pub fn new(config: &ScraperConfig) -> Self {
        Self {
            chromium_path: config.chromium_path.clone(),
            timeout: config.render_timeout,
        }
    }

    async fn render(&self, url: &str) -> ScrapeResult<String> {
        let chrome_path = find_chromium(self.chromium_path.as_deref()).ok_or_else(|| {
            ScrapeError::BrowserNotFound(
                "no Chromium binary found; set BRANDKIT_CHROMIUM_PATH".to_string(),
            )
        })?;

        let session = BrowserSession::launch(&chrome_path).await?;
        let html = session.capture(url, self.timeout).await;
        session.shutdown().await;
        html
    }
}

#[async_trait]
impl PageFetcher for RenderedFetcher {
    fn tier(&self) -> FetchTier {
        FetchTier::Rendered
    }

    async fn fetch(&self, url: &str) -> ScrapeResult<FetchedPage> {
        let markup = self.render(url).await?;
        Ok(FetchedPage {
            markup,
            base_url: url.to_string(),
        })
    }
}

/// Stand-in for the rendered tier in HTTP-only mode.
///
/// Always fails, so a scrape whose static tier finds no brand name ends
/// with an absent record instead of launching a browser.
#[derive(Debug, Clone, Default)]
pub struct DisabledRenderer;

#[async_trait]
impl PageFetcher for DisabledRenderer {
    fn tier(&self) -> FetchTier {
        FetchTier::Rendered
    }

    async fn fetch(&self, _url: &str) -> ScrapeResult<FetchedPage> {
        Err(ScrapeError::BrowserNotFound(
            "rendering disabled (HTTP-only mode)".to_string(),
        ))
    }
}
