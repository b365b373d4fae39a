// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Crawl the target domain breadth-first, collecting JS resource URLs
// 3. Write the full discovery list to <domain>_all_js.txt
// 4. Probe every resource and split it into good/bad lists
// 5. Print a summary and exit with proper code (0 = all good,
//    1 = broken resources found, 2 = error)
//
// Rust concepts used:
// - async/await: The probes run concurrently on the tokio runtime
// - Result<T, E>: For error handling (T = success type, E = error type)
// - Iterator adapters: partition-style filtering of the probe results
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod crawl; // src/crawl/ - breadth-first domain crawling
mod extract; // src/extract/ - URL resolution and markup extraction
mod report; // src/report.rs - the three output files
mod verify; // src/verify/ - resource probing and classification

use std::path::Path;
use std::time::Duration;

use clap::Parser;
use cli::Cli;

// anyhow::Result is like std::result::Result but simpler for applications
// It lets us return any error type with the ? operator
use anyhow::Result;

use verify::ProbeResult;

// The #[tokio::main] attribute transforms our async main into a real main
// function. It creates a tokio runtime and runs our async code inside it.
#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(code) => code,
        Err(e) => {
            // If an unexpected error occurred, print it and exit with code 2
            eprintln!("Error: {}", e);
            2
        }
    };

    std::process::exit(exit_code);
}

// This is the main application logic
// Returns:
//   Ok(0) = no broken JS resources
//   Ok(1) = broken JS resources found
//   Err = unexpected error (becomes exit code 2)
async fn run() -> Result<i32> {
    // Parse command-line arguments into our Cli struct
    // This will automatically handle --help, --version, etc.
    let cli = Cli::parse();
    let root = cli.root_url();

    println!("🔍 Crawling {} for JavaScript resources", root);

    // One client for the whole run: connection pooling, shared timeout,
    // bounded redirect following (a redirect chain the client completes
    // below status 400 counts as reachable)
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cli.timeout))
        .redirect(reqwest::redirect::Policy::limited(5))
        .build()?;

    // Phase 1: crawl. Pages are fetched one at a time, breadth-first.
    let outcome = crawl::crawl_site(&client, &root, &cli.domain, cli.max_pages).await?;

    println!(
        "📄 Visited {} page(s), found {} JS resource(s)",
        outcome.pages_visited,
        outcome.js_resources.len()
    );

    // Nothing found means nothing to verify and no files to write
    if outcome.js_resources.is_empty() {
        println!("✅ No JS resources found; nothing to do");
        return Ok(0);
    }

    // Record the full discovery list before probing anything, so the
    // all-list survives even if verification is interrupted
    let all_path = report::all_list_path(&cli.domain);
    report::write_url_list(Path::new(&all_path), &outcome.js_resources)?;
    println!("💾 Wrote discovery list to {}", all_path);

    // Phase 2: verify. The resource set is frozen now; probes fan out
    // concurrently and come back in completion order.
    println!("\n🌐 Probing {} resource(s)...\n", outcome.js_resources.len());
    let urls: Vec<String> = outcome.js_resources.into_iter().collect();
    let results = verify::verify_resources(urls, &client).await;

    for result in &results {
        let detail = result.message.as_deref().unwrap_or("");
        if result.is_reachable() {
            println!("  ✅ {} ({})", result.url, detail);
        } else {
            println!("  ❌ {} ({})", result.url, detail);
        }
    }

    // Split into the good/bad lists. Every probed URL lands in exactly
    // one of the two.
    let good: Vec<&String> = results
        .iter()
        .filter(|r| r.is_reachable())
        .map(|r| &r.url)
        .collect();
    let bad: Vec<&String> = results
        .iter()
        .filter(|r| !r.is_reachable())
        .map(|r| &r.url)
        .collect();

    let good_path = report::good_list_path(&cli.domain);
    let bad_path = report::bad_list_path(&cli.domain);
    report::write_url_list(Path::new(&good_path), good.iter().copied())?;
    report::write_url_list(Path::new(&bad_path), bad.iter().copied())?;
    println!("\n💾 Wrote {} and {}", good_path, bad_path);

    // Print results and determine exit code
    print_results(&results, cli.json)?;

    if bad.is_empty() {
        Ok(0) // Exit code 0 = every resource reachable
    } else {
        Ok(1) // Exit code 1 = broken resources found
    }
}

// Prints the results either as a summary or JSON
fn print_results(results: &[ProbeResult], json: bool) -> Result<()> {
    if json {
        // Serialize results to JSON and print
        let json_output = serde_json::to_string_pretty(results)?;
        println!("{}", json_output);
    } else {
        let good_count = results.iter().filter(|r| r.is_reachable()).count();
        let bad_count = results.len() - good_count;

        println!("\n📊 Summary:");
        println!("   ✅ Reachable: {}", good_count);
        println!("   ❌ Broken: {}", bad_count);
        println!("   📋 Total: {}", results.len());
    }
    Ok(())
}
