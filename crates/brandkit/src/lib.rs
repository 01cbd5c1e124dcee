// Copyright 2026 Brandkit Contributors
// SPDX-License-Identifier: Apache-2.0

//! Brandkit — brand identity extraction from a single website URL.
//!
//! [`scrape`] fetches the page over plain HTTP, falls back to a headless
//! browser when the static markup yields no brand name, and maps the markup
//! onto a [`MetadataRecord`]: brand name, slogan, logo and social links.

pub mod acquisition;
pub mod adcopy;
pub mod cli;
pub mod config;
pub mod error;
pub mod extraction;
pub mod model;
pub mod orchestrator;
pub mod renderer;
pub mod rest;

pub use acquisition::{FetchedPage, PageFetcher, StaticFetcher};
pub use config::ScraperConfig;
pub use error::{FetchTier, ScrapeError, ScrapeResult};
pub use extraction::extract_metadata;
pub use model::{MetadataRecord, Platform};
pub use orchestrator::{scrape, scrape_with_config, DefaultScraper, ScrapeOutcome, Scraper};
pub use renderer::{DisabledRenderer, RenderedFetcher};
