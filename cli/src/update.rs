#![deny(missing_docs)]

//! # Page Update Workflow
//!
//! Walks the fixed list of site pages, patches each one through
//! `pagefix-core`, and writes the result back only when something changed.
//! One broken page never stops the rest of the run.

use std::fs;
use std::path::Path;

use pagefix_core::{patch_document, standard_declarations};

use crate::error::CliResult;
use crate::report;

/// Every page that must carry the fixes. The home page is maintained by hand
/// and deliberately left off this list.
pub const TARGET_PAGES: [&str; 27] = [
    "car-shades.html",
    "garden-shades.html",
    "pool-shades.html",
    "school-shades.html",
    "pvc-shades.html",
    "wooden-fences.html",
    "iron-fences.html",
    "fabric-fences.html",
    "hair-houses.html",
    "hangars.html",
    "tiles.html",
    "cladding.html",
    "cantilever-shades.html",
    "pyramid-shades.html",
    "polyethylene-shades.html",
    "wooden-shades.html",
    "tensile-structures.html",
    "market-shades.html",
    "mosque-shades.html",
    "hanging-shades.html",
    "conical-shades.html",
    "school-fences.html",
    "nets.html",
    "shades.html",
    "fences.html",
    "gallery.html",
    "latest-works.html",
];

/// Counters for one batch run. Listed pages with no file on disk are warned
/// about and stay out of both counts.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Listed pages found on disk.
    pub total: usize,
    /// Pages processed without an I/O error.
    pub updated: usize,
}

/// Entry point for the `pagefix` binary: patches every target page in the
/// current directory and prints the run report.
pub fn execute() {
    let summary = process_pages(Path::new("."), &TARGET_PAGES);

    println!();
    println!("{}", report::summary(summary.updated, summary.total));
    println!("{}", report::ALL_PAGES_LINE);
}

/// Runs the patch over every listed page under `root`.
///
/// A name with no file on disk produces a warning and is excluded from the
/// totals. A page that fails to read or write is counted as found but not
/// updated; the remaining pages are still processed.
pub fn process_pages(root: &Path, pages: &[&str]) -> BatchSummary {
    let mut summary = BatchSummary::default();

    for name in pages {
        let path = root.join(name);
        if !path.exists() {
            println!("{}", report::missing_file(name));
            continue;
        }

        summary.total += 1;
        match update_page(&path) {
            Ok(()) => summary.updated += 1,
            Err(error) => println!("{}", report::update_failed(&path, &error)),
        }
    }

    summary
}

/// Patches a single page in place.
///
/// The file is rewritten only when the pass inserted something, so an
/// already-patched page is read but never touched. One progress line is
/// printed per inserted asset.
pub fn update_page(path: &Path) -> CliResult<()> {
    // 1. Read the page as UTF-8.
    let bytes = fs::read(path)?;
    let content = String::from_utf8(bytes)?;

    // 2. Insert whatever is missing.
    let outcome = patch_document(&content, &standard_declarations());

    // 3. Write back only on change, then report what was inserted.
    if outcome.changed() {
        fs::write(path, &outcome.content)?;
    }
    for asset in &outcome.applied {
        println!("{}", report::asset_added(asset, path));
    }

    Ok(())
}
