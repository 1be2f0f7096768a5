//! # Document Patcher
//!
//! Applies a set of [`AssetDeclaration`]s to HTML text. Each declaration is
//! checked, anchored, and spliced in isolation; the whole pass is pure string
//! work with no filesystem access, so callers decide what to do with the
//! result.

use crate::declarations::{Anchor, AssetDeclaration, Placement};

/// Indentation prepended to every inserted line, matching the pages' own
/// four-space style.
const INDENT: &str = "    ";

/// The result of patching one document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    /// Document text after the pass. Equal to the input when nothing applied.
    pub content: String,
    /// Asset names inserted by this pass, in application order.
    pub applied: Vec<String>,
}

impl PatchOutcome {
    /// True when at least one declaration was inserted.
    pub fn changed(&self) -> bool {
        !self.applied.is_empty()
    }
}

/// Inserts every missing asset reference into `content`.
///
/// Declarations are processed in order against the progressively updated
/// text, so a tag inserted early in the pass can anchor a later one. A
/// declaration is skipped when its presence marker already occurs anywhere
/// in the document, or when none of its anchors (nor its fallback) match.
/// Skipping is silent; the patcher never fails.
pub fn patch_document(content: &str, declarations: &[AssetDeclaration]) -> PatchOutcome {
    let mut current = content.to_string();
    let mut applied = Vec::new();

    for declaration in declarations {
        // 1. Already present anywhere in the document: nothing to do.
        if current.contains(&declaration.presence_marker) {
            continue;
        }
        // 2. Try the anchors in priority order, then the fallback.
        if let Some(updated) = insert_declaration(&current, declaration) {
            current = updated;
            applied.push(declaration.asset.clone());
        }
    }

    PatchOutcome {
        content: current,
        applied,
    }
}

// --- Helpers ---

fn insert_declaration(content: &str, declaration: &AssetDeclaration) -> Option<String> {
    for anchor in &declaration.anchors {
        if let Some(updated) = insert_at_anchor(content, anchor, &declaration.insertion_text) {
            return Some(updated);
        }
    }
    let fallback = declaration.fallback.as_ref()?;
    insert_at_anchor(content, fallback, &declaration.insertion_text)
}

/// Splices `text` around the first match of the anchor pattern. Only the
/// first occurrence is touched; later occurrences are left alone.
fn insert_at_anchor(content: &str, anchor: &Anchor, text: &str) -> Option<String> {
    let found = anchor.pattern.find(content)?;
    let mut result = String::with_capacity(content.len() + INDENT.len() + text.len() + 1);

    match anchor.placement {
        Placement::After => {
            result.push_str(&content[..found.end()]);
            result.push('\n');
            result.push_str(INDENT);
            result.push_str(text);
            result.push_str(&content[found.end()..]);
        }
        Placement::Before => {
            result.push_str(&content[..found.start()]);
            result.push_str(INDENT);
            result.push_str(text);
            result.push('\n');
            result.push_str(&content[found.start()..]);
        }
    }

    Some(result)
}
