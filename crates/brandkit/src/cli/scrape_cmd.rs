//! `brandkit scrape <url>` — scrape one site and print its brand metadata.

use crate::cli::output;
use crate::config::ScraperConfig;
use crate::model::MetadataRecord;
use crate::orchestrator::{DefaultScraper, ScrapeOutcome};
use anyhow::{Context, Result};

/// Run the scrape command.
pub async fn run(url: &str, config: &ScraperConfig) -> Result<()> {
    let url = url.trim();
    if url.is_empty() {
        anyhow::bail!("missing website URL");
    }

    let scraper = DefaultScraper::from_config(config).context("failed to build scraper")?;
    let outcome = scraper.scrape_detailed(url).await;

    if output::is_json() {
        output::print_json(&serde_json::to_value(&outcome.record)?);
    } else {
        print_pretty(url, &outcome);
    }
    Ok(())
}

fn print_pretty(url: &str, outcome: &ScrapeOutcome) {
    let MetadataRecord {
        brand_name,
        slogan,
        logo_url,
        socials,
    } = &outcome.record;

    println!("{url}");
    match outcome.tier {
        Some(tier) => println!("  source:  {tier} fetch"),
        None => println!("  source:  none (both fetch tiers failed)"),
    }
    println!("  brand:   {}", brand_name.as_deref().unwrap_or("-"));
    println!("  slogan:  {}", slogan.as_deref().unwrap_or("-"));
    println!("  logo:    {}", logo_url.as_deref().unwrap_or("-"));
    if socials.is_empty() {
        println!("  socials: -");
    } else {
        println!("  socials:");
        for (platform, link) in socials {
            println!("    {platform:<10} {link}");
        }
    }
}
