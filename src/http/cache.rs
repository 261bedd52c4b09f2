//! HTTP cache control module
//!
//! `ETag` generation and conditional request handling.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate a quoted `ETag` for a response body, e.g. `"ab12cd34"`
pub fn etag_for(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    format!("\"{:x}\"", hasher.finish())
}

/// Check whether the client's `If-None-Match` header matches our `ETag`
///
/// Handles a single tag, a comma-separated list, and the `*` wildcard.
/// Returns true when the client copy is current (respond 304).
pub fn none_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|header| {
        header
            .split(',')
            .map(str::trim)
            .any(|candidate| candidate == etag || candidate == "*")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_is_quoted() {
        let etag = etag_for(b"<html></html>");
        assert!(etag.starts_with('"') && etag.ends_with('"'));
        assert!(etag.len() > 2);
    }

    #[test]
    fn test_etag_deterministic() {
        assert_eq!(etag_for(b"same bytes"), etag_for(b"same bytes"));
        assert_ne!(etag_for(b"bytes a"), etag_for(b"bytes b"));
    }

    #[test]
    fn test_none_match() {
        let etag = "\"abc123\"";
        assert!(none_match(Some("\"abc123\""), etag));
        assert!(none_match(Some("\"other\", \"abc123\""), etag));
        assert!(none_match(Some("*"), etag));
        assert!(!none_match(Some("\"different\""), etag));
        assert!(!none_match(None, etag));
    }
}
