// src/core/sanitize.rs
use url::Url;

/// Collapse runs of whitespace into a single space and trim.
pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for word in s.split_whitespace() {
        if !out.is_empty() { out.push(' '); }
        out.push_str(word);
    }
    out
}

/// Resolve `href` against the site origin. Absolute hrefs pass through;
/// relative ones (`/job-offer/x`, `job-offer/x`, `//host/x`) are joined.
pub fn absolutize(base: &Url, href: &str) -> Option<Url> {
    let href = href.trim();
    if href.is_empty() { return None; }
    let url = base.join(href).ok()?;
    match url.scheme() {
        "http" | "https" => Some(url),
        _ => None,
    }
}
