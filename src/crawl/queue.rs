// src/crawl/queue.rs
// =============================================================================
// This module implements the breadth-first crawl loop.
//
// How it works:
// 1. Seed the visited-set and the queue with the root URL
// 2. Pop the front of the queue and fetch the page
// 3. Extract JS resources and anchor links from the markup
// 4. Union the JS resources into the accumulating set
// 5. Enqueue same-domain links we haven't seen before
// 6. Repeat until the queue is empty
//
// Two invariants keep this loop honest:
// - A URL enters the visited-set the moment it is enqueued, so the same
//   page can never sit in the queue twice. The dedup key is the resolver's
//   exact output string - no normalization of trailing slashes, ports, or
//   case happens here.
// - A page that fails to fetch contributes nothing: no resources, no
//   links, no re-queue. The crawl just moves on.
//
// Termination relies on the reachable same-domain link graph being finite;
// --max-pages exists for when you can't assume that.
//
// Rust concepts:
// - HashSet: To track visited URLs (O(1) lookup)
// - VecDeque: Double-ended queue for breadth-first crawling
// - while let: Loop until the queue hands back None
// =============================================================================

use anyhow::{anyhow, Result};
use reqwest::Client;
use std::collections::{HashSet, VecDeque};
use url::Url;

use crate::extract::extract_resources;

use super::scope::in_scope;

// What a finished crawl hands back to the caller
//
// js_resources is frozen from here on: verification only reads it.
#[derive(Debug)]
pub struct CrawlOutcome {
    /// Number of pages the crawler actually fetched (attempts, including
    /// failed ones). When --max-pages stops the crawl mid-queue this is
    /// smaller than the visited-set, which also holds enqueued-but-never-
    /// fetched pages.
    pub pages_visited: usize,
    /// Every JS resource URL discovered, deduplicated across all pages
    pub js_resources: HashSet<String>,
}

// Crawls every reachable page of one domain, breadth-first
//
// Parameters:
//   client: shared HTTP client (connection pooling, timeout already set)
//   root: the seed URL, e.g. "https://example.com/"
//   domain: the exact host string links must match to be followed
//   max_pages: optional cap on fetch attempts (None = drain the queue)
//
// Pages are fetched strictly in discovery order (FIFO), one at a time.
// Only the seed URL being invalid is a hard error; every per-page failure
// is logged and skipped.
pub async fn crawl_site(
    client: &Client,
    root: &str,
    domain: &str,
    max_pages: Option<usize>,
) -> Result<CrawlOutcome> {
    // Validate the seed before doing anything else
    Url::parse(root).map_err(|e| anyhow!("Invalid root URL '{}': {}", root, e))?;

    // Visited-set and queue start out agreeing: both hold just the root
    let mut visited = HashSet::new();
    visited.insert(root.to_string());

    let mut queue = VecDeque::new();
    queue.push_back(root.to_string());

    let mut js_resources = HashSet::new();
    let mut fetched = 0usize;

    // Process the queue until empty (or the cap says stop)
    while let Some(page) = queue.pop_front() {
        if let Some(cap) = max_pages {
            if fetched >= cap {
                println!("  Reached --max-pages cap of {}, stopping crawl", cap);
                break;
            }
        }
        fetched += 1;

        println!("  Crawling: {}", page);

        // Fetch the page; any failure just skips it
        let html = match fetch_page(client, &page).await {
            Ok(html) => html,
            Err(e) => {
                eprintln!("  Warning: Failed to fetch {}: {}", page, e);
                continue;
            }
        };

        absorb_page(&html, &page, domain, &mut visited, &mut queue, &mut js_resources);
    }

    // Report fetch attempts, not visited.len(): with the queue fully
    // drained the two are equal, but a --max-pages break leaves enqueued
    // pages in the visited-set that were never fetched
    Ok(CrawlOutcome {
        pages_visited: fetched,
        js_resources,
    })
}

// Fetches a page and returns its body as text
//
// Note: unlike a link checker, we do NOT treat a non-2xx status as a
// failure here. An error page is still a page - its markup may reference
// scripts and links worth following. Only transport errors and
// undecodable bodies skip a page.
async fn fetch_page(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?;
    let html = response.text().await?;
    Ok(html)
}

// Folds one fetched page into the crawl state
//
// This is the whole per-page step minus the network: extract, accumulate
// JS resources, and enqueue unseen same-domain links. Kept as a standalone
// function so the crawl logic is testable with fixture markup.
fn absorb_page(
    html: &str,
    page_url: &str,
    domain: &str,
    visited: &mut HashSet<String>,
    queue: &mut VecDeque<String>,
    js_resources: &mut HashSet<String>,
) {
    let (js_urls, link_urls) = extract_resources(html, page_url);

    js_resources.extend(js_urls);

    for link in link_urls {
        // Check-then-insert back to back: a link either goes into both the
        // visited-set and the queue, or into neither
        if in_scope(&link, domain) && !visited.contains(&link) {
            visited.insert(link.clone());
            queue.push_back(link);
        }
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. What is VecDeque?
//    - A double-ended queue
//    - push_back() adds to the end, pop_front() removes from the start
//    - That FIFO order is exactly what makes the crawl breadth-first:
//      pages are fetched in the order they were discovered
//
// 2. Why insert into visited when ENQUEUEING instead of when fetching?
//    - Two pages often link to the same third page
//    - If we only marked pages visited at fetch time, that page would be
//      queued twice and we'd need a second check at pop time
//    - Inserting at enqueue time makes membership-test + insert one step
//
// 3. Why is absorb_page a separate function?
//    - Everything except the HTTP GET is deterministic
//    - Splitting it out lets tests drive the crawl with fixture HTML and
//      assert on the resulting state, no network needed
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const DOMAIN: &str = "example.com";

    fn seeded_state() -> (HashSet<String>, VecDeque<String>, HashSet<String>) {
        let root = "https://example.com/".to_string();
        let mut visited = HashSet::new();
        visited.insert(root.clone());
        let mut queue = VecDeque::new();
        queue.push_back(root);
        (visited, queue, HashSet::new())
    }

    #[test]
    fn test_two_page_crawl_scenario() {
        // Seed page: one script, one internal link
        let home = r#"
            <script src="/app.js"></script>
            <a href="/about">About</a>
        "#;
        // Linked page: a modulepreload and nothing further to follow
        let about = r#"<link rel="modulepreload" as="script" href="/chunk1.js">"#;

        let (mut visited, mut queue, mut js) = seeded_state();

        let page = queue.pop_front().unwrap();
        absorb_page(home, &page, DOMAIN, &mut visited, &mut queue, &mut js);

        let page = queue.pop_front().unwrap();
        assert_eq!(page, "https://example.com/about");
        absorb_page(about, &page, DOMAIN, &mut visited, &mut queue, &mut js);

        assert!(queue.is_empty());
        assert_eq!(visited.len(), 2);
        assert_eq!(
            js,
            HashSet::from([
                "https://example.com/app.js".to_string(),
                "https://example.com/chunk1.js".to_string(),
            ])
        );
    }

    #[test]
    fn test_off_domain_links_not_enqueued() {
        let html = r#"
            <a href="https://other.com/page">external</a>
            <a href="https://sub.example.com/page">subdomain</a>
        "#;
        let (mut visited, mut queue, mut js) = seeded_state();
        let page = queue.pop_front().unwrap();
        absorb_page(html, &page, DOMAIN, &mut visited, &mut queue, &mut js);

        assert!(queue.is_empty());
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_repeated_link_enqueued_once() {
        let html = r#"
            <a href="/about">About</a>
            <a href="/about">About again</a>
        "#;
        let (mut visited, mut queue, mut js) = seeded_state();
        let page = queue.pop_front().unwrap();
        absorb_page(html, &page, DOMAIN, &mut visited, &mut queue, &mut js);

        assert_eq!(queue.len(), 1);
        assert_eq!(visited.len(), 2);
    }

    #[test]
    fn test_link_back_to_root_not_requeued() {
        let html = r#"<a href="/">Home</a>"#;
        let (mut visited, mut queue, mut js) = seeded_state();
        let page = queue.pop_front().unwrap();
        absorb_page(html, &page, DOMAIN, &mut visited, &mut queue, &mut js);

        // "/" resolves back to the seed, which is already visited
        assert!(queue.is_empty());
        assert_eq!(visited.len(), 1);
    }

    #[test]
    fn test_query_variant_counts_as_distinct_page() {
        // Dedup is on the exact resolved string, so a query-string variant
        // is a different page
        let html = r#"
            <a href="/about">About</a>
            <a href="/about?tab=1">About tab</a>
        "#;
        let (mut visited, mut queue, mut js) = seeded_state();
        let page = queue.pop_front().unwrap();
        absorb_page(html, &page, DOMAIN, &mut visited, &mut queue, &mut js);

        assert_eq!(queue.len(), 2);
    }

    #[tokio::test]
    async fn test_max_pages_cap_reports_fetched_count() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // Minimal loopback server: every page links to three more, so the
        // visited-set outgrows any small cap
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let body = r#"<a href="/a">a</a><a href="/b">b</a><a href="/c">c</a>"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );

        tokio::spawn(async move {
            loop {
                let (mut socket, _) = match listener.accept().await {
                    Ok(pair) => pair,
                    Err(_) => break,
                };
                let response = response.clone();
                tokio::spawn(async move {
                    let mut buf = [0u8; 1024];
                    let _ = socket.read(&mut buf).await;
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        let root = format!("http://127.0.0.1:{}/", port);
        let outcome = crawl_site(&client, &root, "127.0.0.1", Some(2))
            .await
            .unwrap();

        // Four pages entered the visited-set (root + a/b/c) but only two
        // were fetched before the cap fired; the count must say two
        assert_eq!(outcome.pages_visited, 2);
    }

    #[tokio::test]
    async fn test_drained_queue_counts_every_visited_page() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        // One page, no links: the queue drains and the count equals the
        // visited-set size
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();

        let body = r#"<script src="/app.js"></script>"#;
        let response = format!(
            "HTTP/1.1 200 OK\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            body.len(),
            body
        );

        tokio::spawn(async move {
            loop {
                let (mut socket, _) = match listener.accept().await {
                    Ok(pair) => pair,
                    Err(_) => break,
                };
                let response = response.clone();
                tokio::spawn(async move {
                    let mut buf = [0u8; 1024];
                    let _ = socket.read(&mut buf).await;
                    let _ = socket.write_all(response.as_bytes()).await;
                    let _ = socket.shutdown().await;
                });
            }
        });

        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(5))
            .build()
            .unwrap();
        let root = format!("http://127.0.0.1:{}/", port);
        let outcome = crawl_site(&client, &root, "127.0.0.1", None).await.unwrap();

        assert_eq!(outcome.pages_visited, 1);
        assert_eq!(
            outcome.js_resources,
            HashSet::from([format!("http://127.0.0.1:{}/app.js", port)])
        );
    }

    #[test]
    fn test_js_set_accumulates_across_pages_without_duplicates() {
        let page_a = r#"<script src="/shared.js"></script>"#;
        let page_b = r#"<script src="/shared.js"></script><script src="/b.js"></script>"#;

        let (mut visited, mut queue, mut js) = seeded_state();
        absorb_page(page_a, "https://example.com/a", DOMAIN, &mut visited, &mut queue, &mut js);
        absorb_page(page_b, "https://example.com/b", DOMAIN, &mut visited, &mut queue, &mut js);

        assert_eq!(
            js,
            HashSet::from([
                "https://example.com/shared.js".to_string(),
                "https://example.com/b.js".to_string(),
            ])
        );
    }
}
