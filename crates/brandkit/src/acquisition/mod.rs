//! Page acquisition: the fetch tier abstraction and the static HTTP tier.

pub mod http_client;

pub use http_client::StaticFetcher;

use crate::error::{FetchTier, ScrapeResult};
use async_trait::async_trait;

/// Markup obtained by a fetch tier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchedPage {
    /// Raw or rendered HTML.
    pub markup: String,
    /// URL that relative hrefs in `markup` resolve against.
    pub base_url: String,
}

/// One way of turning a URL into markup.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Which tier this fetcher implements.
    fn tier(&self) -> FetchTier;
    /// Fetch `url`. Failures carry no partial data.
    async fn fetch(&self, url: &str) -> ScrapeResult<FetchedPage>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Box<T> {
    fn tier(&self) -> FetchTier {
        (**self).tier()
    }

    async fn fetch(&self, url: &str) -> ScrapeResult<FetchedPage> {
        (**self).fetch(url).await
    }
}
