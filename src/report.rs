// src/report.rs
// =============================================================================
// This module writes the three output files:
//
//   <domain>_all_js.txt   - every JS resource URL discovered
//   <domain>_good_js.txt  - the subset that probed Reachable
//   <domain>_bad_js.txt   - the subset that probed Broken
//
// Format: one absolute URL per line, no header. Line order follows set
// iteration order, which is unspecified - consumers should treat these as
// sets, not sequences.
//
// Failing to create an output file is the one fatal error in this tool:
// a run whose results can't be recorded is worthless, so we bail with
// context instead of limping on.
//
// Rust concepts:
// - BufWriter: Batches many small writes into few syscalls
// - Generic functions: One writer serves all three files
// - anyhow::Context: Attaches "which file?" to I/O errors
// =============================================================================

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

// Writes one URL per line to `path`, creating or truncating the file
pub fn write_url_list<'a, I>(path: &Path, urls: I) -> Result<()>
where
    I: IntoIterator<Item = &'a String>,
{
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for url in urls {
        writeln!(writer, "{}", url)
            .with_context(|| format!("Failed to write to {}", path.display()))?;
    }

    // BufWriter flushes on drop, but a flush error there is silently
    // swallowed - flush explicitly so it surfaces
    writer
        .flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;
    Ok(())
}

/// File name for the full discovery list: "<domain>_all_js.txt"
pub fn all_list_path(domain: &str) -> String {
    format!("{}_all_js.txt", domain)
}

/// File name for the reachable subset: "<domain>_good_js.txt"
pub fn good_list_path(domain: &str) -> String {
    format!("{}_good_js.txt", domain)
}

/// File name for the broken subset: "<domain>_bad_js.txt"
pub fn bad_list_path(domain: &str) -> String {
    format!("{}_bad_js.txt", domain)
}
