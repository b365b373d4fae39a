// src/extract/html.rs
// =============================================================================
// This module extracts JavaScript resource URLs and anchor links from HTML.
//
// We use the `scraper` crate which:
// - Parses HTML into a DOM (Document Object Model)
// - Supports CSS selectors for finding elements
// - Is built on html5ever (Mozilla's HTML parser)
//
// html5ever is a best-effort parser: malformed markup never makes it fail,
// it just produces the tree a browser would. Selection walks that tree in
// document order, depth-first.
//
// What counts as a JS resource:
// - <script src="..."> where the RESOLVED URL ends with ".js"
// - <link rel="modulepreload"|"prefetch" as="script" href="..."> where the
//   resolved URL ends with ".js" (all three attributes must be present)
//
// The ".js" check is a case-sensitive suffix test on the full resolved URL
// string: "b.JS", "b.js.map", and "b.js?v=2" are all excluded. That matches
// what this tool has always reported; see DESIGN.md before changing it.
//
// Anchor links are collected separately, with no filtering at all - domain
// scoping happens downstream in the crawler.
// =============================================================================

use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

use super::resolve::resolve_url;

// Extracts JS resource URLs and anchor links from one page's markup
//
// Parameters:
//   html: the HTML content to parse (borrowed as &str)
//   page_url: the URL of the page (for resolving relative references)
//
// Returns: (js_urls, link_urls)
//   js_urls: deduplicated set of absolute JS resource URLs
//   link_urls: every <a href> as an absolute URL, in document order
//
// A single unresolvable attribute is silently skipped; it never aborts
// extraction of the rest of the document.
pub fn extract_resources(html: &str, page_url: &str) -> (HashSet<String>, Vec<String>) {
    let mut js_urls = HashSet::new();
    let mut link_urls = Vec::new();

    // Parse the base URL once; without it we can't resolve anything
    let base = match Url::parse(page_url) {
        Ok(url) => url,
        Err(_) => {
            eprintln!("Warning: Invalid page URL: {}", page_url);
            return (js_urls, link_urls);
        }
    };

    // Parse the HTML into a document
    let document = Html::parse_document(html);

    // These selectors are constants and known to be valid, so .unwrap()
    // is fine here (a failure would be a programmer error)
    let script_selector = Selector::parse("script[src]").unwrap();
    let link_selector = Selector::parse("link[rel][as][href]").unwrap();
    let anchor_selector = Selector::parse("a[href]").unwrap();

    // <script src="..."> elements
    for element in document.select(&script_selector) {
        if let Some(src) = element.value().attr("src") {
            if let Some(resolved) = resolve_url(&base, src) {
                if resolved.ends_with(".js") {
                    js_urls.insert(resolved);
                }
            }
        }
    }

    // <link rel as href> elements - the selector already guarantees all
    // three attributes are present, regardless of their order in the tag
    for element in document.select(&link_selector) {
        let value = element.value();
        let rel = value.attr("rel").unwrap_or("");
        let as_attr = value.attr("as").unwrap_or("");
        let href = value.attr("href").unwrap_or("");

        // Exact matches only: "preload" or as="style" don't count
        if (rel == "modulepreload" || rel == "prefetch") && as_attr == "script" {
            if let Some(resolved) = resolve_url(&base, href) {
                if resolved.ends_with(".js") {
                    js_urls.insert(resolved);
                }
            }
        }
    }

    // <a href="..."> elements - collected unfiltered
    for element in document.select(&anchor_selector) {
        if let Some(href) = element.value().attr("href") {
            if let Some(resolved) = resolve_url(&base, href) {
                link_urls.push(resolved);
            }
        }
    }

    (js_urls, link_urls)
}
