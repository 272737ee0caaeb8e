//! Input and URL normalization for star records.
//!
//! Rendered text is escaped by Leptos itself, so nothing here HTML-escapes.
//! These helpers only normalize what users type and decide which image
//! sources are safe to place in an `src` attribute.

#[cfg(test)]
#[path = "sanitize_test.rs"]
mod sanitize_test;

use url::Url;

/// Placeholder source for rejected image URLs.
pub const BLANK_SRC: &str = "about:blank";

const LOCAL_BASE: &str = "http://localhost/";

/// Trim surrounding whitespace and drop control characters.
///
/// Newlines and tabs survive so descriptions keep their layout; `\r\n` is
/// folded to `\n`.
pub fn clean_text(raw: &str) -> String {
    let filtered: String = raw
        .replace("\r\n", "\n")
        .chars()
        .filter(|c| !c.is_control() || matches!(c, '\n' | '\t'))
        .collect();
    filtered.trim().to_owned()
}

/// Return a normalized image source, or [`BLANK_SRC`] when the URL is unsafe.
///
/// Accepted: absolute `http`/`https` URLs, and same-origin absolute paths
/// such as `/storage/stars/1.png`. The result is percent-encoded.
pub fn safe_image_src(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return BLANK_SRC.to_owned();
    }

    match Url::parse(trimmed) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => url.into(),
        Ok(_) => BLANK_SRC.to_owned(),
        Err(url::ParseError::RelativeUrlWithoutBase) if trimmed.starts_with('/') => {
            same_origin_path(trimmed).unwrap_or_else(|| BLANK_SRC.to_owned())
        }
        Err(_) => BLANK_SRC.to_owned(),
    }
}

/// Resolve a root-relative path; reject anything that escapes to another host
/// (`//evil.example`, `/\evil.example`).
fn same_origin_path(path: &str) -> Option<String> {
    let base = Url::parse(LOCAL_BASE).ok()?;
    let joined = base.join(path).ok()?;
    if joined.host_str() != base.host_str() || joined.port() != base.port() {
        return None;
    }
    let mut out = joined.path().to_owned();
    if let Some(query) = joined.query() {
        out.push('?');
        out.push_str(query);
    }
    Some(out)
}
