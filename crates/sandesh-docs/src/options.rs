//! Renderer configuration

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use sandesh_docs_core::{CalloutKind, Options};

/// A glyph that classifies a block quote when it appears in the quote text
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Callout {
    pub glyph: String,
    pub kind: CalloutKind,
}

impl Callout {
    pub fn new(glyph: &str, kind: CalloutKind) -> Self {
        Self {
            glyph: glyph.to_string(),
            kind,
        }
    }
}

/// Options for the Markdown renderer
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RenderOptions {
    /// Link target prefix that marks a documentation cross-reference
    pub doc_link_prefix: String,

    /// Block quote classifiers, checked in order; the first glyph found wins
    pub callouts: Vec<Callout>,

    /// Trim leading/trailing whitespace of the whole source before scanning
    pub trim_source: bool,
}

impl RenderOptions {
    /// Backend options that write cross-references with this prefix
    pub fn backend_options(&self) -> Options {
        Options::with_doc_link_prefix(&self.doc_link_prefix)
    }

    /// Classify block quote text by the configured glyphs
    pub fn classify_callout(&self, text: &str) -> CalloutKind {
        self.callouts
            .iter()
            .find(|c| !c.glyph.is_empty() && text.contains(c.glyph.as_str()))
            .map(|c| c.kind)
            .unwrap_or_default()
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            doc_link_prefix: "#/docs/".to_string(),
            // Warning outranks info when a quote carries both.
            // U+26A0 without the emoji selector matches both spellings.
            callouts: vec![
                Callout::new("\u{26A0}", CalloutKind::Warning),
                Callout::new("💡", CalloutKind::Info),
                Callout::new("✅", CalloutKind::Success),
            ],
            trim_source: true,
        }
    }
}
