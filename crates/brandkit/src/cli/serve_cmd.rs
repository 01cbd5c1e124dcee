//! `brandkit serve` — run the HTTP surface.

use crate::config::ScraperConfig;
use crate::orchestrator::DefaultScraper;
use crate::rest;
use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;

/// Run the HTTP server until interrupted.
pub async fn run(host: &str, port: u16, config: &ScraperConfig) -> Result<()> {
    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .with_context(|| format!("invalid listen address {host}:{port}"))?;

    let scraper = DefaultScraper::from_config(config).context("failed to build scraper")?;
    if !config.render_enabled {
        tracing::info!("rendering disabled; serving in HTTP-only mode");
    }

    rest::start(addr, Arc::new(scraper)).await
}
