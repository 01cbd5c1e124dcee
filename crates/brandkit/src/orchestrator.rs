// Copyright 2026 Brandkit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Two-tier scrape: static fetch first, headless render as fallback.
//!
//! ```text
//! INIT -> STATIC_ATTEMPTED -> DONE                  (brand name found)
//!                          -> RENDER_ATTEMPTED -> DONE
//! ```
//!
//! The static tier runs exactly once. The rendered tier runs at most once,
//! and only when the static tier failed or its markup had no brand name.
//! Whatever the rendered tier yields is final; there is no third tier.

use crate::acquisition::{PageFetcher, StaticFetcher};
use crate::config::ScraperConfig;
use crate::error::{FetchTier, ScrapeResult};
use crate::extraction::extract_metadata;
use crate::model::MetadataRecord;
use crate::renderer::{DisabledRenderer, RenderedFetcher};
use serde::Serialize;

/// A scrape result plus the tier that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrapeOutcome {
    pub record: MetadataRecord,
    /// `None` when both tiers failed and the record is fully absent.
    pub tier: Option<FetchTier>,
}

impl ScrapeOutcome {
    fn failed() -> Self {
        Self {
            record: MetadataRecord::empty(),
            tier: None,
        }
    }
}

/// Fetch orchestrator over a static tier `S` and a rendered tier `R`.
pub struct Scraper<S, R> {
    static_fetcher: S,
    rendered_fetcher: R,
}

/// Production scraper: HTTP first, Chromium on fallback.
pub type DefaultScraper = Scraper<StaticFetcher, Box<dyn PageFetcher>>;

impl DefaultScraper {
    /// Build the production tiers from `config`. With rendering disabled
    /// the fallback tier always fails.
    pub fn from_config(config: &ScraperConfig) -> ScrapeResult<Self> {
        let static_fetcher = StaticFetcher::new(config)?;
        let rendered_fetcher: Box<dyn PageFetcher> = if config.render_enabled {
            Box::new(RenderedFetcher::new(config))
        } else {
            Box::new(DisabledRenderer)
        };
        Ok(Scraper::new(static_fetcher, rendered_fetcher))
    }
}

impl<S, R> Scraper<S, R>
where
    S: PageFetcher,
    R: PageFetcher,
{
    pub fn new(static_fetcher: S, rendered_fetcher: R) -> Self {
        Self {
            static_fetcher,
            rendered_fetcher,
        }
    }

    /// Scrape `url`. Never fails: tier errors are logged and degrade to
    /// absent fields.
    pub async fn scrape(&self, url: &str) -> MetadataRecord {
        self.scrape_detailed(url).await.record
    }

    /// Like [`Scraper::scrape`], also reporting which tier won.
    pub async fn scrape_detailed(&self, url: &str) -> ScrapeOutcome {
        match self.attempt(&self.static_fetcher, url).await {
            Some(record) if record.has_brand_name() => {
                return ScrapeOutcome {
                    record,
                    tier: Some(self.static_fetcher.tier()),
                };
            }
            Some(_) => tracing::info!("no brand name in static markup for {url}; rendering"),
            None => tracing::info!("static fetch failed for {url}; rendering"),
        }

        match self.attempt(&self.rendered_fetcher, url).await {
            Some(record) => ScrapeOutcome {
                record,
                tier: Some(self.rendered_fetcher.tier()),
            },
            None => ScrapeOutcome::failed(),
        }
    }

    async fn attempt<F: PageFetcher + ?Sized>(
        &self,
        fetcher: &F,
        url: &str,
    ) -> Option<MetadataRecord> {
        match fetcher.fetch(url).await {
            Ok(page) => Some(extract_metadata(&page.markup, &page.base_url)),
            Err(e) => {
                tracing::warn!("{} fetch of {url} failed: {e}", fetcher.tier());
                None
            }
        }
    }
}

/// Scrape `url` with settings from the environment, blocking the calling
/// thread until both tiers have had their chance.
///
/// Runs on a private current-thread runtime, so it must not be called from
/// inside a Tokio runtime; async callers use [`Scraper::scrape`].
pub fn scrape(url: &str) -> MetadataRecord {
    scrape_with_config(url, &ScraperConfig::from_env())
}

/// Blocking scrape with explicit settings.
pub fn scrape_with_config(url: &str, config: &ScraperConfig) -> MetadataRecord {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::warn!("failed to start scrape runtime: {e}");
            return MetadataRecord::empty();
        }
    };

    runtime.block_on(async {
        match DefaultScraper::from_config(config) {
            Ok(scraper) => scraper.scrape(url).await,
            Err(e) => {
                tracing::warn!("failed to build scraper: {e}");
                MetadataRecord::empty()
            }
        }
    })
}
