//! Resolve hrefs found in markup against the page's base URL.

use url::Url;

/// Resolve `href` against an already-parsed base.
///
/// Returns `None` for blank hrefs and hrefs the URL parser rejects, so a
/// relative path never leaks into the record. An href that is already
/// absolute comes back as written (trimmed), without normalization.
pub fn resolve_against(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() {
        return None;
    }
    if Url::parse(href).is_ok() {
        return Some(href.to_string());
    }
    base.join(href).ok().map(|u| u.to_string())
}

/// Resolve `href` against `base_url`, parsing the base first.
pub fn resolve(base_url: &str, href: &str) -> Option<String> {
    let base = Url::parse(base_url).ok()?;
    resolve_against(&base, href)
}
