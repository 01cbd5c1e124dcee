//! Social profile link detection.
//!
//! Every `<a href>` is tested, in document order, against each platform's
//! domain substring. A later match for the same platform overwrites an
//! earlier one, so the last matching link in the document wins.

use super::PageContext;
use crate::model::Platform;
use scraper::Selector;
use std::collections::BTreeMap;

/// Collect at most one absolute profile URL per platform.
pub fn detect_socials(page: &PageContext) -> BTreeMap<Platform, String> {
    let mut socials = BTreeMap::new();
    let Ok(selector) = Selector::parse("a[href]") else {
        return socials;
    };

    for element in page.document.select(&selector) {
        let href = element.value().attr("href").unwrap_or("");
        if href.trim().is_empty() {
            continue;
        }

        for platform in Platform::ALL {
            if !href.contains(platform.domain()) {
                continue;
            }
            match page.resolve(href) {
                Some(resolved) => {
                    socials.insert(platform, resolved);
                }
                None => tracing::debug!("skipping unresolvable {platform} link {href:?}"),
            }
        }
    }

    socials
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(html: &str, base: &str) -> BTreeMap<Platform, String> {
        detect_socials(&PageContext::parse(html, base))
    }

    #[test]
    fn test_last_match_wins() {
        let html = r#"<body>
            <a href="https://facebook.com/first">one</a>
            <a href="https://www.facebook.com/second">two</a>
            </body>"#;
        let socials = detect(html, "https://ex.com/");
        assert_eq!(
            socials.get(&Platform::Facebook).map(String::as_str),
            Some("https://www.facebook.com/second")
        );
    }

    #[test]
    fn test_all_platforms() {
        let html = r#"<footer>
            <a href="https://facebook.com/acme">f</a>
            <a href="https://instagram.com/acme">i</a>
            <a href="https://twitter.com/acme">t</a>
            <a href="https://www.linkedin.com/company/acme">l</a>
            <a href="https://youtube.com/@acme">y</a>
            <a href="https://example.org/about">other</a>
            </footer>"#;
        let socials = detect(html, "https://ex.com/");
        assert_eq!(socials.len(), 5);
        assert_eq!(
            socials.get(&Platform::Linkedin).map(String::as_str),
            Some("https://www.linkedin.com/company/acme")
        );
    }

    #[test]
    fn test_scheme_less_href_resolved_against_base() {
        let html = r#"<a href="//twitter.com/acme">t</a>"#;
        let socials = detect(html, "https://ex.com/page");
        assert_eq!(
            socials.get(&Platform::Twitter).map(String::as_str),
            Some("https://twitter.com/acme")
        );
    }

    #[test]
    fn test_empty_href_and_plain_text_ignored() {
        let html = r#"<p>Follow us on facebook.com/acme</p>
            <a href="">facebook.com</a>
            <a>https://instagram.com/acme</a>"#;
        let socials = detect(html, "https://ex.com/");
        assert!(socials.is_empty());
    }

    #[test]
    fn test_no_socials_without_base() {
        let html = r#"<a href="https://twitter.com/acme">t</a>"#;
        let socials = detect(html, "relative/only");
        assert!(socials.is_empty());
    }
}
