// src/extract/resolve.rs
// =============================================================================
// This module resolves the href/src strings we find in markup into
// absolute URLs.
//
// We use the `url` crate to:
// - Parse and validate URLs
// - Resolve relative references against the page URL (like a browser does)
//
// This is a pure function: no I/O, no state. That makes it trivially
// testable, and it is the single source of truth for what string a URL
// becomes - the crawler's visited-set keys off this exact output, with no
// further normalization of trailing slashes, ports, or case.
//
// Rust concepts:
// - Option<T>: For operations that can fail without being errors
// - Pattern matching: Handling the parse/join fallback cleanly
// =============================================================================

use url::Url;

// Resolves a possibly-relative reference to an absolute URL string
//
// Parameters:
//   base: the URL of the page the reference appeared on
//   href: the raw attribute value (might be relative, might be absolute)
//
// Returns: Some(absolute_url) or None if the reference is malformed
//
// Examples:
//   base = "https://example.com/page"
//   href = "/app.js"          -> Some("https://example.com/app.js")
//   href = "../other"         -> Some("https://example.com/other")
//   href = "https://other.com" -> Some("https://other.com/")
//
// A None here means "skip this one reference" - callers must never treat
// it as a reason to abort extraction of the rest of the document.
pub fn resolve_url(base: &Url, href: &str) -> Option<String> {
    // Try to parse href as a URL on its own.
    // If it's already absolute (has a scheme), this succeeds and we return
    // its normalized string form unchanged - we do NOT re-join it against
    // the base, so cross-origin references keep their own host.
    // If it's relative, parsing fails with RelativeUrlWithoutBase, so we
    // join it with the base instead.
    match Url::parse(href) {
        Ok(url) => Some(url.to_string()),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            // Relative path, path-absolute, query-only, and fragment-only
            // references all resolve here via the standard rules
            match base.join(href) {
                Ok(url) => Some(url.to_string()),
                Err(_) => None, // Malformed reference, skip it
            }
        }
        Err(_) => None, // Malformed in some other way, skip it
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://example.com/a/page.html").unwrap()
    }

    #[test]
    fn test_absolute_ref_returned_normalized() {
        let result = resolve_url(&base(), "https://other.com");
        assert_eq!(result, Some("https://other.com/".to_string()));
    }

    #[test]
    fn test_relative_path() {
        let result = resolve_url(&base(), "b.js");
        assert_eq!(result, Some("https://example.com/a/b.js".to_string()));
    }

    #[test]
    fn test_path_absolute() {
        let result = resolve_url(&base(), "/app.js");
        assert_eq!(result, Some("https://example.com/app.js".to_string()));
    }

    #[test]
    fn test_query_only() {
        let result = resolve_url(&base(), "?v=2");
        assert_eq!(
            result,
            Some("https://example.com/a/page.html?v=2".to_string())
        );
    }

    #[test]
    fn test_fragment_only() {
        let result = resolve_url(&base(), "#section");
        assert_eq!(
            result,
            Some("https://example.com/a/page.html#section".to_string())
        );
    }

    #[test]
    fn test_malformed_ref_is_none() {
        // "https://[" has a scheme but an unparseable host
        assert_eq!(resolve_url(&base(), "https://["), None);
    }

    #[test]
    fn test_resolution_is_idempotent() {
        // Resolving an already-resolved URL must return it unchanged
        let once = resolve_url(&base(), "../x/y.js").unwrap();
        let twice = resolve_url(&base(), &once).unwrap();
        assert_eq!(once, twice);
    }
}
