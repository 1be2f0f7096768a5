#![deny(missing_docs)]

//! # Pagefix CLI
//!
//! Command line entry point for the page maintenance tool. Running the
//! binary with no arguments patches every listed HTML page in the current
//! directory and prints an Arabic progress report.

use clap::Parser;

mod error;
mod report;
mod update;

/// The binary takes no arguments; clap only provides `--help` and
/// `--version`.
#[derive(Parser, Debug)]
#[clap(
    author,
    version,
    about = "Inserts the missing hover/social fix tags into the site's HTML pages"
)]
struct Cli {}

fn main() {
    Cli::parse();

    update::execute();
}
