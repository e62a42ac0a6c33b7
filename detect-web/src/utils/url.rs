//! URL utility functions for composing query parameters

/// Append a query parameter to a URL, choosing `?` or `&` depending on
/// whether the URL already carries a query string. The value is
/// percent-encoded; keys are expected to be plain ASCII.
pub fn with_query_param(url: &str, key: &str, value: &str) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", url, separator, key, urlencoding::encode(value))
}
