//! Error types for the fetch tiers.
//!
//! These never reach callers of [`crate::Scraper::scrape`]; the orchestrator
//! logs them and degrades to an absent-field record.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Which fetch tier produced a page (or failed).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FetchTier {
    /// Plain HTTP GET of the raw markup.
    Static,
    /// Headless browser, DOM captured after load.
    Rendered,
}

impl std::fmt::Display for FetchTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchTier::Static => f.write_str("static"),
            FetchTier::Rendered => f.write_str("rendered"),
        }
    }
}

/// All errors a fetch tier can report.
#[derive(thiserror::Error, Debug)]
pub enum ScrapeError {
    #[error("failed to build HTTP client: {0}")]
    Client(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP status {0}")]
    Status(u16),

    #[error("{tier} fetch timed out after {}ms", .after.as_millis())]
    Timeout { tier: FetchTier, after: Duration },

    #[error("headless browser not available: {0}")]
    BrowserNotFound(String),

    #[error("failed to launch browser: {0}")]
    Launch(String),

    #[error("navigation failed: {0}")]
    Navigation(String),

    #[error("failed to capture rendered HTML: {0}")]
    Capture(String),
}

impl ScrapeError {
    /// True for any timeout, including reqwest's own.
    pub fn is_timeout(&self) -> bool {
        match self {
            ScrapeError::Timeout { .. } => true,
            ScrapeError::Http(e) => e.is_timeout(),
            _ => false,
        }
    }
}

pub type ScrapeResult<T> = Result<T, ScrapeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_message() {
        let e = ScrapeError::Timeout {
            tier: FetchTier::Rendered,
            after: Duration::from_secs(20),
        };
        assert_eq!(e.to_string(), "rendered fetch timed out after 20000ms");
        assert!(e.is_timeout());
        assert!(!ScrapeError::Status(404).is_timeout());
    }
}
