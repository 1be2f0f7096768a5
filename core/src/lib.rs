#![deny(missing_docs)]

//! # Pagefix Core
//!
//! Pure patching logic for the site's static HTML pages: the catalogue of
//! required asset tags and the string-level patcher that inserts the missing
//! ones. File handling and reporting live in the CLI crate.

/// Required asset tags and their insertion rules.
pub mod declarations;

/// Document patching logic.
pub mod patcher;

pub use declarations::{standard_declarations, Anchor, AssetDeclaration, Placement};
pub use patcher::{patch_document, PatchOutcome};
