// src/crawl/scope.rs
// =============================================================================
// This module decides which discovered links are in scope for crawling.
//
// The rule is strict on purpose: a link is in scope only if its host
// component equals the target domain by EXACT string comparison. No case
// folding, no subdomain matching, no scheme check.
//
// That means "www.example.com" and "example.com" are two different sites
// as far as this tool is concerned. If you want both crawled, run it twice.
//
// Rust concepts:
// - Option combinators: map_or collapses "parsed and host matches" neatly
// =============================================================================

use url::Url;

// Returns true iff `link` parses and its host equals `domain` exactly
//
// A parse failure (or a host-less URL like mailto:) yields false - the
// link is simply excluded, never a fatal error.
pub fn in_scope(link: &str, domain: &str) -> bool {
    match Url::parse(link) {
        Ok(url) => url.host_str().map_or(false, |host| host == domain),
        Err(_) => false,
    }
}
