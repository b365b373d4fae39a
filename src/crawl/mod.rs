// src/crawl/mod.rs
// =============================================================================
// This module handles website crawling.
//
// Features:
// - Breadth-first crawling starting from the domain's root page
// - Respects same-domain restriction (doesn't crawl external sites)
// - Optional page-count cap for very large or untrusted sites
//
// Why crawl?
// - To find all pages on the target domain
// - To collect every JavaScript resource those pages reference
//
// Submodules:
// - scope: Decides whether a discovered link belongs to the target domain
// - queue: The visited-set + FIFO-queue drain loop itself
// =============================================================================

mod queue;
mod scope;

// Re-export the crawl entry point and its result type; the scope filter
// stays internal, only the queue loop consults it
pub use queue::{crawl_site, CrawlOutcome};
