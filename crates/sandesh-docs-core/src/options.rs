//! Configuration options for the rendering backends
//!
//! Only settings the renderer can read back are exposed; rules, fences and
//! emphasis delimiters have a single form in the dialect.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Marker written before unordered list items
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum BulletMarker {
    #[default]
    Dash,
    Star,
}

impl BulletMarker {
    pub fn as_char(self) -> char {
        match self {
            BulletMarker::Dash => '-',
            BulletMarker::Star => '*',
        }
    }
}

/// Options shared by the rendering backends
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Bullet list marker
    pub bullet_list_marker: BulletMarker,

    /// Prefix that turns a page id into a documentation link target.
    /// Must match the prefix the renderer recognised the links with.
    pub doc_link_prefix: String,

    /// Open external links in a new browsing context (HTML only)
    pub external_links_new_tab: bool,
}

impl Options {
    /// Default options with a different documentation link prefix
    pub fn with_doc_link_prefix(prefix: &str) -> Self {
        Self {
            doc_link_prefix: prefix.to_string(),
            ..Default::default()
        }
    }
}

impl Default for Options {
    fn default() -> Self {
        Self {
            bullet_list_marker: BulletMarker::Dash,
            doc_link_prefix: "#/docs/".to_string(),
            external_links_new_tab: true,
        }
    }
}
