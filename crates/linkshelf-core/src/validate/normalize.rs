//! URL normalization for user-entered links.

const DEFAULT_SCHEME_PREFIX: &str = "https://";

fn has_prefix_ignore_case(s: &str, prefix: &str) -> bool {
    s.get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}

/// Trim `raw` and prepend `https://` unless it already starts with `http://` or
/// `https://` (any case). Blank input stays empty.
///
/// - `normalize_url("example.com")` → `"https://example.com"`
/// - `normalize_url("HTTP://x.com")` → `"HTTP://x.com"`
pub fn normalize_url(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return String::new();
    }
    if has_prefix_ignore_case(trimmed, "http://") || has_prefix_ignore_case(trimmed, "https://") {
        return trimmed.to_string();
    }
    format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
}

/// True iff `candidate` parses as an absolute URL.
pub fn is_valid_url(candidate: &str) -> bool {
    url::Url::parse(candidate).is_ok()
}
