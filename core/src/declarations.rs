#![deny(missing_docs)]

//! # Asset Declarations
//!
//! The data model for one required asset reference: the substring that proves
//! the fix is already applied, the markup to insert, and the ordered anchor
//! patterns that decide where the insertion lands.

use regex::Regex;

/// The stylesheet tag every page already ships with.
pub const RESPONSIVE_CSS_TAG: &str = r#"<link rel="stylesheet" href="css/responsive.css">"#;

/// The hover icon fix stylesheet.
pub const HOVER_CSS_TAG: &str = r#"<link rel="stylesheet" href="css/hover-fix.css">"#;

/// The script tag every page already ships with.
pub const MAIN_JS_TAG: &str = r#"<script src="js/main.js"></script>"#;

/// The hover icon fix script.
pub const HOVER_JS_TAG: &str = r#"<script src="js/hover-fix.js"></script>"#;

/// The social icon fix stylesheet.
pub const SOCIAL_CSS_TAG: &str = r#"<link rel="stylesheet" href="css/social-fix.css">"#;

/// The social icon fix script. The query parameter busts stale browser caches.
pub const SOCIAL_JS_TAG: &str = r#"<script src="js/social-fix.js?v=1"></script>"#;

/// Which side of an anchor match receives the inserted line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Insert on a new line directly after the matched text.
    After,
    /// Insert on its own line directly before the matched text.
    Before,
}

/// A pattern in the existing document text used as an insertion point.
#[derive(Debug, Clone)]
pub struct Anchor {
    /// Compiled pattern; only its first occurrence is ever used.
    pub pattern: Regex,
    /// Which side of the match receives the inserted line.
    pub placement: Placement,
}

impl Anchor {
    /// Anchor on the first occurrence of a literal tag, inserting after it.
    pub fn after(tag: &str) -> Self {
        Anchor {
            pattern: Regex::new(&regex::escape(tag)).expect("Invalid regex"),
            placement: Placement::After,
        }
    }

    /// Anchor on the first occurrence of a literal tag, inserting before it.
    pub fn before(tag: &str) -> Self {
        Anchor {
            pattern: Regex::new(&regex::escape(tag)).expect("Invalid regex"),
            placement: Placement::Before,
        }
    }
}

/// One required asset reference together with its presence check and
/// insertion strategy.
///
/// `insertion_text` must contain `presence_marker`, otherwise re-running the
/// patch would insert the tag again.
#[derive(Debug, Clone)]
pub struct AssetDeclaration {
    /// Short name used in progress messages (e.g. `hover-fix.css`).
    pub asset: String,
    /// Substring whose existence means the fix is already applied.
    pub presence_marker: String,
    /// Literal markup inserted on its own indented line.
    pub insertion_text: String,
    /// Preferred insertion points, tried in order; the first match wins.
    pub anchors: Vec<Anchor>,
    /// Structural anchor used only when no preferred anchor matches.
    /// Declarations without one are skipped silently.
    pub fallback: Option<Anchor>,
}

/// The four asset fixes every page must carry, in application order.
///
/// Order matters: each social declaration anchors first on the hover tag
/// inserted by an earlier declaration in the same pass, so a bare page gains
/// all four references in one run, grouped by kind.
pub fn standard_declarations() -> Vec<AssetDeclaration> {
    vec![
        AssetDeclaration {
            asset: "hover-fix.css".to_string(),
            presence_marker: "hover-fix.css".to_string(),
            insertion_text: HOVER_CSS_TAG.to_string(),
            anchors: vec![Anchor::after(RESPONSIVE_CSS_TAG)],
            fallback: None,
        },
        AssetDeclaration {
            asset: "hover-fix.js".to_string(),
            presence_marker: "hover-fix.js".to_string(),
            insertion_text: HOVER_JS_TAG.to_string(),
            anchors: vec![Anchor::after(MAIN_JS_TAG)],
            fallback: None,
        },
        AssetDeclaration {
            asset: "social-fix.css".to_string(),
            presence_marker: "css/social-fix.css".to_string(),
            insertion_text: SOCIAL_CSS_TAG.to_string(),
            anchors: vec![Anchor::after(HOVER_CSS_TAG), Anchor::after(RESPONSIVE_CSS_TAG)],
            fallback: Some(Anchor::before("</head>")),
        },
        AssetDeclaration {
            asset: "social-fix.js".to_string(),
            presence_marker: "js/social-fix.js".to_string(),
            insertion_text: SOCIAL_JS_TAG.to_string(),
            anchors: vec![Anchor::after(HOVER_JS_TAG), Anchor::after(MAIN_JS_TAG)],
            fallback: Some(Anchor::before("</body>")),
        },
    ]
}
