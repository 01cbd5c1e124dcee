//! Heuristic brand metadata extraction from raw or rendered HTML.
//!
//! Parsing uses the `scraper` crate; it never fails on malformed markup,
//! it just yields fewer elements.

pub mod metadata;
pub mod socials;
pub mod url;

pub use metadata::{extract_metadata, Candidate, BRAND_NAME_CHAIN, LOGO_URL_CHAIN, SLOGAN_CHAIN};
pub use socials::detect_socials;

use scraper::Html;

/// A parsed document plus the base URL its hrefs resolve against.
pub struct PageContext {
    pub document: Html,
    /// `None` when the base URL could not be parsed; URL-valued fields are
    /// then left absent.
    pub base: Option<::url::Url>,
}

impl PageContext {
    pub fn parse(html: &str, base_url: &str) -> Self {
        let base = match ::url::Url::parse(base_url) {
            Ok(u) => Some(u),
            Err(e) => {
                tracing::warn!("unparseable base URL {base_url:?}: {e}; URL fields will be absent");
                None
            }
        };
        Self {
            document: Html::parse_document(html),
            base,
        }
    }

    /// Resolve an href against this page's base.
    pub fn resolve(&self, href: &str) -> Option<String> {
        self.base
            .as_ref()
            .and_then(|base| self::url::resolve_against(base, href))
    }
}
