// src/verify/mod.rs
// =============================================================================
// This module probes the discovered JS resources and classifies them.
//
// Submodules:
// - http: Issues the GET probes and maps outcomes to Reachable/Broken
//
// The crawl hands us a frozen set of URLs; we hand back exactly one
// classification per URL. Nothing in between mutates the set.
// =============================================================================

mod http;

pub use http::{verify_resources, ProbeResult, ResourceStatus};
