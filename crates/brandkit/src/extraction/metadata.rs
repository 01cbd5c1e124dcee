//! Per-field priority chains.
//!
//! Each field is an ordered table of candidate functions. The first
//! candidate that yields a non-empty value wins; later candidates are not
//! evaluated.

use super::{socials, PageContext};
use crate::model::MetadataRecord;
use scraper::{Html, Selector};

/// Produces one candidate value for a field, or `None` to fall through.
pub type Candidate = fn(&PageContext) -> Option<String>;

/// `og:site_name`, then `<title>`, then the first `<h1>`.
pub const BRAND_NAME_CHAIN: &[(&str, Candidate)] = &[
    ("og:site_name", og_site_name),
    ("title", title_text),
    ("h1", first_h1_text),
];

/// `<meta name="description">`, then `og:description`.
pub const SLOGAN_CHAIN: &[(&str, Candidate)] = &[
    ("meta description", meta_description),
    ("og:description", og_description),
];

/// `og:image`, then the first `<link rel="...icon...">`, both resolved.
pub const LOGO_URL_CHAIN: &[(&str, Candidate)] = &[
    ("og:image", og_image),
    ("link rel icon", icon_link),
];

/// Build a [`MetadataRecord`] from markup and the URL it came from.
///
/// Pure: identical inputs give identical records.
pub fn extract_metadata(html: &str, base_url: &str) -> MetadataRecord {
    let page = PageContext::parse(html, base_url);
    extract_from_page(&page)
}

/// Build a [`MetadataRecord`] from an already-parsed page.
pub fn extract_from_page(page: &PageContext) -> MetadataRecord {
    MetadataRecord {
        brand_name: first_present("brand_name", BRAND_NAME_CHAIN, page),
        slogan: first_present("slogan", SLOGAN_CHAIN, page),
        logo_url: first_present("logo_url", LOGO_URL_CHAIN, page),
        socials: socials::detect_socials(page),
    }
}

/// Evaluate `chain` lazily and return the first present value.
pub fn first_present(
    field: &str,
    chain: &[(&str, Candidate)],
    page: &PageContext,
) -> Option<String> {
    chain.iter().find_map(|(source, candidate)| {
        let value = candidate(page)?;
        tracing::debug!("{field}: taken from {source}");
        Some(value)
    })
}

fn og_site_name(page: &PageContext) -> Option<String> {
    meta_property(&page.document, "og:site_name")
}

fn title_text(page: &PageContext) -> Option<String> {
    first_element_text(&page.document, "title")
}

fn first_h1_text(page: &PageContext) -> Option<String> {
    first_element_text(&page.document, "h1")
}

fn meta_description(page: &PageContext) -> Option<String> {
    meta_name(&page.document, "description")
}

fn og_description(page: &PageContext) -> Option<String> {
    meta_property(&page.document, "og:description")
}

fn og_image(page: &PageContext) -> Option<String> {
    let href = meta_property(&page.document, "og:image")?;
    page.resolve(&href)
}

fn icon_link(page: &PageContext) -> Option<String> {
    let selector = Selector::parse("link[rel]").ok()?;
    let link = page.document.select(&selector).find(|el| {
        el.value()
            .attr("rel")
            .is_some_and(|rel| rel.to_ascii_lowercase().contains("icon"))
    })?;
    let href = non_empty(link.value().attr("href")?)?;
    page.resolve(&href)
}

fn meta_property(doc: &Html, property: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[property="{property}"]"#)).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .and_then(non_empty)
}

fn meta_name(doc: &Html, name: &str) -> Option<String> {
    let selector = Selector::parse(&format!(r#"meta[name="{name}"]"#)).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .and_then(non_empty)
}

fn first_element_text(doc: &Html, tag: &str) -> Option<String> {
    let selector = Selector::parse(tag).ok()?;
    doc.select(&selector)
        .next()
        .and_then(|el| non_empty(&el.text().collect::<String>()))
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Platform;

    const BASE: &str = "https://ex.com/page";

    #[test]
    fn test_site_name_beats_title_and_h1() {
        let html = r#"<html><head>
            <title>Title Text</title>
            <meta property="og:site_name" content="  Acme Corp  ">
            </head><body><h1>Heading</h1></body></html>"#;
        let record = extract_metadata(html, BASE);
        assert_eq!(record.brand_name.as_deref(), Some("Acme Corp"));
    }

    #[test]
    fn test_title_when_no_site_name() {
        let html = "<html><head><title>\n  Acme | Home \n</title></head><body><h1>Big</h1></body></html>";
        let record = extract_metadata(html, BASE);
        assert_eq!(record.brand_name.as_deref(), Some("Acme | Home"));
    }

    #[test]
    fn test_h1_when_no_title() {
        let html = "<html><body><h1>  <span>Acme</span> Widgets </h1><h1>Second</h1></body></html>";
        let record = extract_metadata(html, BASE);
        assert_eq!(record.brand_name.as_deref(), Some("Acme Widgets"));
    }

    #[test]
    fn test_no_brand_name() {
        let html = "<html><body><p>Nothing to see</p></body></html>";
        let record = extract_metadata(html, BASE);
        assert_eq!(record.brand_name, None);
    }

    #[test]
    fn test_empty_values_fall_through() {
        let html = r#"<html><head>
            <meta property="og:site_name" content="   ">
            <title>   </title>
            </head><body><h1>Fallback</h1></body></html>"#;
        let record = extract_metadata(html, BASE);
        assert_eq!(record.brand_name.as_deref(), Some("Fallback"));
    }

    #[test]
    fn test_slogan_prefers_meta_description() {
        let html = r#"<html><head>
            <meta property="og:description" content="OG text">
            <meta name="description" content=" Best widgets in town ">
            </head></html>"#;
        let record = extract_metadata(html, BASE);
        assert_eq!(record.slogan.as_deref(), Some("Best widgets in town"));
    }

    #[test]
    fn test_slogan_og_description_fallback() {
        let html = r#"<html><head>
            <meta name="description" content="">
            <meta property="og:description" content="OG text">
            </head></html>"#;
        let record = extract_metadata(html, BASE);
        assert_eq!(record.slogan.as_deref(), Some("OG text"));
    }

    #[test]
    fn test_logo_from_og_image_resolved() {
        let html = r#"<html><head>
            <meta property="og:image" content="/logo.png">
            <link rel="icon" href="/favicon.ico">
            </head></html>"#;
        let record = extract_metadata(html, BASE);
        assert_eq!(record.logo_url.as_deref(), Some("https://ex.com/logo.png"));
    }

    #[test]
    fn test_logo_empty_og_image_falls_through() {
        let html = r#"<html><head>
            <meta property="og:image" content="  ">
            <link rel="icon" href="/f.ico">
            </head></html>"#;
        let record = extract_metadata(html, BASE);
        assert_eq!(record.logo_url.as_deref(), Some("https://ex.com/f.ico"));
    }

    #[test]
    fn test_logo_from_icon_link_case_insensitive() {
        let html = r#"<html><head>
            <link rel="stylesheet" href="/site.css">
            <link rel="Apple-Touch-ICON" href="img/touch.png">
            <link rel="icon" href="/favicon.ico">
            </head></html>"#;
        let record = extract_metadata(html, BASE);
        assert_eq!(
            record.logo_url.as_deref(),
            Some("https://ex.com/img/touch.png")
        );
    }

    #[test]
    fn test_logo_absent_with_bad_base() {
        let html = r#"<html><head>
            <title>Acme</title>
            <meta property="og:image" content="/logo.png">
            </head></html>"#;
        let record = extract_metadata(html, "::not-a-url::");
        assert_eq!(record.brand_name.as_deref(), Some("Acme"));
        assert_eq!(record.logo_url, None);
    }

    #[test]
    fn test_malformed_markup_does_not_panic() {
        let html = "<html><head><title>Acme<body><h1>unclosed <div><<<>>";
        let record = extract_metadata(html, BASE);
        assert!(record.brand_name.is_some());
    }

    #[test]
    fn test_end_to_end_acme() {
        let html = r#"<html><head><meta property="og:site_name" content="Acme"><meta property="og:description" content="Best widgets"><link rel="shortcut icon" href="/f.ico"></head><body><a href="https://twitter.com/acme">tw</a></body></html>"#;
        let record = extract_metadata(html, "https://acme.test/");
        assert_eq!(record.brand_name.as_deref(), Some("Acme"));
        assert_eq!(record.slogan.as_deref(), Some("Best widgets"));
        assert_eq!(record.logo_url.as_deref(), Some("https://acme.test/f.ico"));
        assert_eq!(record.socials.len(), 1);
        assert_eq!(
            record.socials.get(&Platform::Twitter).map(String::as_str),
            Some("https://twitter.com/acme")
        );
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let html = r#"<html><head><title>Acme</title>
            <meta property="og:image" content="logo.svg"></head>
            <body><a href="https://facebook.com/a">a</a><a href="/x">x</a>
            <a href="https://youtube.com/@acme">yt</a></body></html>"#;
        let first = serde_json::to_string(&extract_metadata(html, BASE)).unwrap();
        let second = serde_json::to_string(&extract_metadata(html, BASE)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_chain_stops_at_first_hit() {
        fn hit(_: &PageContext) -> Option<String> {
            Some("first".to_string())
        }
        fn never(_: &PageContext) -> Option<String> {
            panic!("later candidate must not run");
        }
        let page = PageContext::parse("<html></html>", BASE);
        let chain: &[(&str, Candidate)] = &[("hit", hit), ("never", never)];
        assert_eq!(
            first_present("test", chain, &page).as_deref(),
            Some("first")
        );
    }
}
