//! Static tier against a local mock HTTP server.

use brandkit::{
    DisabledRenderer, FetchTier, MetadataRecord, PageFetcher, Platform, ScrapeError, Scraper,
    ScraperConfig, StaticFetcher,
};
use std::time::Duration;
use wiremock::matchers::{header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const ACME_HTML: &str = r#"<html><head><meta property="og:site_name" content="Acme"><meta property="og:description" content="Best widgets"><link rel="shortcut icon" href="/f.ico"></head><body><a href="https://twitter.com/acme">tw</a></body></html>"#;

fn html_response(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200)
        .insert_header("content-type", "text/html; charset=utf-8")
        .set_body_string(body)
}

#[tokio::test]
async fn test_fetch_returns_body_and_requested_url() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/page"))
        .respond_with(html_response("<title>Hello</title>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = StaticFetcher::new(&ScraperConfig::default()).unwrap();
    let url = format!("{}/page", server.uri());
    let page = fetcher.fetch(&url).await.unwrap();

    assert_eq!(page.markup, "<title>Hello</title>");
    assert_eq!(page.base_url, url);
    assert_eq!(fetcher.tier(), FetchTier::Static);
}

#[tokio::test]
async fn test_sends_browser_like_user_agent() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(header_regex("user-agent", "^Mozilla/5\\.0"))
        .respond_with(html_response("<title>ok</title>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = StaticFetcher::new(&ScraperConfig::default()).unwrap();
    assert!(fetcher.fetch(&server.uri()).await.is_ok());
}

#[tokio::test]
async fn test_non_success_status_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<title>Not Found</title>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = StaticFetcher::new(&ScraperConfig::default()).unwrap();
    let err = fetcher.fetch(&server.uri()).await.unwrap_err();
    assert!(matches!(err, ScrapeError::Status(404)));
}

#[tokio::test]
async fn test_timeout_fails() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html_response("<title>slow</title>").set_delay(Duration::from_secs(2)))
        .mount(&server)
        .await;

    let config = ScraperConfig::default().with_static_timeout(Duration::from_millis(200));
    let fetcher = StaticFetcher::new(&config).unwrap();
    let err = fetcher.fetch(&server.uri()).await.unwrap_err();
    assert!(err.is_timeout(), "expected timeout, got {err}");
}

#[tokio::test]
async fn test_unreachable_host_fails() {
    let fetcher = StaticFetcher::new(&ScraperConfig::default()).unwrap();
    // Port 9 (discard) on localhost is not expected to serve HTTP.
    assert!(fetcher.fetch("http://127.0.0.1:9/").await.is_err());
}

#[tokio::test]
async fn test_scrape_end_to_end_through_static_tier() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(html_response(ACME_HTML))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = StaticFetcher::new(&ScraperConfig::default()).unwrap();
    let scraper = Scraper::new(fetcher, DisabledRenderer);
    let outcome = scraper.scrape_detailed(&format!("{}/", server.uri())).await;

    assert_eq!(outcome.tier, Some(FetchTier::Static));
    let record = outcome.record;
    assert_eq!(record.brand_name.as_deref(), Some("Acme"));
    assert_eq!(record.slogan.as_deref(), Some("Best widgets"));
    assert_eq!(
        record.logo_url,
        Some(format!("{}/f.ico", server.uri()))
    );
    assert_eq!(
        record.socials.get(&Platform::Twitter).map(String::as_str),
        Some("https://twitter.com/acme")
    );
}

#[tokio::test]
async fn test_http_only_mode_degrades_to_absent_record() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(html_response("<html><body><div id=\"root\"></div></body></html>"))
        .expect(1)
        .mount(&server)
        .await;

    let fetcher = StaticFetcher::new(&ScraperConfig::default()).unwrap();
    let scraper = Scraper::new(fetcher, DisabledRenderer);
    let outcome = scraper.scrape_detailed(&server.uri()).await;

    assert_eq!(outcome.tier, None);
    assert_eq!(outcome.record, MetadataRecord::empty());
}
