// src/verify/http.rs
// =============================================================================
// This module checks whether JS resource URLs are actually reachable.
//
// Key functionality:
// - Makes one HTTP GET request per resource
// - Status < 400 (after the client follows redirects) => Reachable
// - Status >= 400 OR any transport error => Broken
// - Runs probes concurrently with a concurrency limit
//
// Two deliberate choices worth knowing about:
// - GET, not HEAD. Plenty of servers answer HEAD differently (or not at
//   all) for static assets, and a wrong answer here means a wrong report.
// - "Couldn't connect" and "connected but 404" both land in Broken. The
//   output files only distinguish good from bad; the message field keeps
//   the detail for humans and --json consumers.
//
// Rust concepts:
// - async/await: For concurrent network I/O
// - Enums: To represent the two-way classification
// - Streams: For processing many items concurrently
// =============================================================================

use futures::stream::{self, StreamExt}; // StreamExt gives us .buffer_unordered()
use reqwest::Client;
use serde::{Deserialize, Serialize};

// How many probes run at once. Verification order is unconstrained, so
// fanning out is safe; 50 keeps us from hammering one origin too hard.
const PROBE_CONCURRENCY: usize = 50;

// The two-way classification of a probed resource
//
// #[derive(Serialize, Deserialize)] lets us convert to/from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ResourceStatus {
    /// A response came back with status < 400
    Reachable,
    /// Status >= 400, or the request never completed
    Broken,
}

// The result of probing a single JS resource
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProbeResult {
    /// The URL that was probed
    pub url: String,
    /// Reachable or Broken
    #[serde(flatten)] // Merges the status tag into this struct's JSON
    pub status: ResourceStatus,
    /// Detail for humans: "HTTP 404", "request timed out", ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ProbeResult {
    /// Helper to check whether this resource came back Reachable
    pub fn is_reachable(&self) -> bool {
        self.status == ResourceStatus::Reachable
    }
}

// Probes every URL in the set and returns one result per URL
//
// Why async + buffer_unordered?
// - A site can easily reference hundreds of chunks
// - Each probe is mostly waiting on the network
// - Running up to PROBE_CONCURRENCY at once makes this phase fast, and
//   the input set is read-only by now so there's nothing to race on
// Results come back in completion order, which is fine: the output files
// are unordered sets anyway.
pub async fn verify_resources(urls: Vec<String>, client: &Client) -> Vec<ProbeResult> {
    let futures = urls.into_iter().map(|url| {
        let client = client.clone(); // Cheap: Client is an Arc internally
        async move { probe_resource(client, url).await }
    });

    stream::iter(futures)
        .buffer_unordered(PROBE_CONCURRENCY)
        .collect()
        .await
}

// Probes one resource and classifies the outcome
//
// Every path through here produces a ProbeResult - probe failures are a
// classification, never an error to propagate.
async fn probe_resource(client: Client, url: String) -> ProbeResult {
    match client.get(&url).send().await {
        Ok(response) => {
            let code = response.status().as_u16();
            ProbeResult {
                url,
                status: classify_status(code),
                message: Some(format!("HTTP {}", code)),
            }
        }
        Err(e) => {
            // Timeout, DNS failure, refused connection, redirect loop -
            // all of it counts as Broken, same as a 404
            let message = if e.is_timeout() {
                "request timed out".to_string()
            } else if e.is_connect() {
                "connection failed".to_string()
            } else {
                e.to_string()
            };
            ProbeResult {
                url,
                status: ResourceStatus::Broken,
                message: Some(message),
            }
        }
    }
}

// Maps an HTTP status code to the two-way classification
//
// Redirects never reach here with their 3xx code - the client follows
// them - but anything below 400 counts as Reachable regardless.
fn classify_status(code: u16) -> ResourceStatus {
    if code >= 400 {
        ResourceStatus::Broken
    } else {
        ResourceStatus::Reachable
    }
}
