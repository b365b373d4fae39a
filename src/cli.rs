// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// clap is a popular Rust library for parsing command-line arguments.
// We use the "derive" API which lets us define the CLI structure using
// Rust structs and attributes (the #[...] things).
//
// Our interface is deliberately tiny: a target domain, an optional scheme,
// and a few tuning flags. No subcommands needed - this tool does one thing.
//
// Rust concepts:
// - Structs: Custom data types that group related data
// - Derive macros: Automatically generate code for our types
// - Methods on structs: impl blocks attach behavior to data
// =============================================================================

use clap::Parser;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "js-sentinel",
    version = "0.1.0",
    about = "Crawl a domain and flag broken JavaScript resources",
    long_about = "js-sentinel crawls every page of a single domain, collects the JavaScript \
                  files those pages reference (script tags plus modulepreload/prefetch links), \
                  probes each one, and writes all/good/bad URL lists to text files."
)]
pub struct Cli {
    /// Target domain to crawl (e.g., example.com)
    ///
    /// This is a positional argument (required, no flag needed).
    /// Only pages whose host matches this string exactly are crawled -
    /// "www.example.com" and "example.com" are different domains to us.
    pub domain: String,

    /// URL scheme to seed the crawl with (http or https)
    ///
    /// Optional positional argument. People often paste "https:" or
    /// "https://" here, so we sanitize trailing ':' and '/' characters
    /// before using it.
    #[arg(default_value = "https")]
    pub scheme: String,

    /// Stop crawling after this many pages
    ///
    /// By default the crawl is unbounded: it only stops when no new
    /// same-domain links remain. Set this when pointing at very large
    /// (or untrusted) sites.
    #[arg(long)]
    pub max_pages: Option<usize>,

    /// Per-request timeout in seconds
    ///
    /// Applies to both page fetches and resource probes.
    /// #[arg(long, default_value_t = 10)] creates --timeout with a default
    #[arg(long, default_value_t = 10)]
    pub timeout: u64,

    /// Output the verification results as JSON instead of a table
    ///
    /// This is an optional flag: --json
    /// The three URL list files are written either way.
    #[arg(long)]
    pub json: bool,
}

impl Cli {
    /// Returns the scheme with any trailing ':' and '/' characters stripped
    ///
    /// "https://" -> "https", "http:" -> "http", "https" -> "https"
    pub fn clean_scheme(&self) -> &str {
        self.scheme.trim_end_matches([':', '/'])
    }

    /// Builds the root URL the crawl starts from: "<scheme>://<domain>/"
    pub fn root_url(&self) -> String {
        format!("{}://{}/", self.clean_scheme(), self.domain)
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why positional arguments instead of flags?
//    - The domain and scheme are the two things you always type
//    - Positional args keep the common invocation short:
//      `js-sentinel example.com` or `js-sentinel example.com http`
//
// 2. What is Option<usize>?
//    - Option represents a value that might not exist
//    - Some(500) = the user passed --max-pages 500
//    - None = no cap, crawl until the queue drains
//
// 3. What is trim_end_matches?
//    - Removes matching characters from the END of a string, repeatedly
//    - [':', '/'] is a char array pattern: strip either character
//    - "https://" -> "https" (removes '/', '/', then ':')
// -----------------------------------------------------------------------------
