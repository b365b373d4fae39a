// src/extract/mod.rs
// =============================================================================
// This module turns one page's raw markup into URLs.
//
// Submodules:
// - resolve: Turns (possibly relative) href/src strings into absolute URLs
// - html: Walks the parsed element tree and harvests JS resources and links
//
// This file (mod.rs) is the module root - it ties everything together and
// exports the public API that other parts of our application can use.
//
// Rust concepts:
// - Modules: Organize code into namespaces
// - pub use: Re-export items to simplify imports for users of this module
// =============================================================================

// Declare submodules (tells Rust to include these files)
mod html;
mod resolve;

// Re-export the extraction entry point
// This lets callers write `extract::extract_resources()` instead of
// `extract::html::extract_resources()`. The resolver stays internal -
// everything outside this module sees URLs only after resolution.
pub use html::extract_resources;
