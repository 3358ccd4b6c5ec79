//! Document node model
//!
//! This module defines the block and inline nodes produced by the documentation
//! renderer. The nodes are the common intermediate format consumed by every
//! rendering backend.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A block-level document node
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "snake_case"))]
pub enum Block {
    /// Heading with level (1-3) and inline content
    Heading { level: u8, content: Vec<Inline> },

    /// Paragraph containing inline content
    Paragraph(Vec<Inline>),

    /// List (ordered or unordered) of single-line items
    List {
        kind: ListKind,
        items: Vec<Vec<Inline>>,
    },

    /// Fenced code block, kept verbatim
    CodeBlock {
        language: Option<String>,
        code: String,
    },

    /// Table with header cells and body rows
    Table {
        headers: Vec<Vec<Inline>>,
        rows: Vec<Vec<Vec<Inline>>>,
    },

    /// Single-line block quote, classified as a callout
    BlockQuote {
        kind: CalloutKind,
        content: Vec<Inline>,
    },

    /// Thematic break (horizontal rule)
    ThematicBreak,
}

/// Marker family of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ListKind {
    /// `-` or `*` items
    Unordered,
    /// `1.` items
    Ordered,
}

/// Classification of a block quote
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CalloutKind {
    #[default]
    Plain,
    Info,
    Warning,
    Success,
}

impl CalloutKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalloutKind::Plain => "plain",
            CalloutKind::Info => "info",
            CalloutKind::Warning => "warning",
            CalloutKind::Success => "success",
        }
    }
}

/// An inline document node
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value", rename_all = "snake_case"))]
pub enum Inline {
    /// Plain text
    Text(String),

    /// Strong emphasis (bold)
    Strong(Vec<Inline>),

    /// Emphasis (italic)
    Emphasis(Vec<Inline>),

    /// Inline code, never styled further
    Code(String),

    /// Cross-reference to another documentation page
    DocLink { content: Vec<Inline>, page: String },

    /// Link to an external URL
    Link { content: Vec<Inline>, url: String },
}

impl Block {
    /// Check if this block is empty/blank
    pub fn is_blank(&self) -> bool {
        match self {
            Block::Paragraph(inlines) => inlines.iter().all(|i| i.is_blank()),
            Block::Heading { content, .. } | Block::BlockQuote { content, .. } => {
                content.iter().all(|i| i.is_blank())
            }
            Block::List { items, .. } => items.iter().all(|i| i.iter().all(|i| i.is_blank())),
            Block::CodeBlock { code, .. } => code.trim().is_empty(),
            Block::Table { headers, rows } => {
                headers.iter().all(|h| h.iter().all(|i| i.is_blank()))
                    && rows
                        .iter()
                        .all(|r| r.iter().all(|c| c.iter().all(|i| i.is_blank())))
            }
            Block::ThematicBreak => false,
        }
    }

    /// Short name of the node kind, for logs and diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "heading",
            Block::Paragraph(_) => "paragraph",
            Block::List {
                kind: ListKind::Unordered,
                ..
            } => "unordered_list",
            Block::List {
                kind: ListKind::Ordered,
                ..
            } => "ordered_list",
            Block::CodeBlock { .. } => "code_block",
            Block::Table { .. } => "table",
            Block::BlockQuote { .. } => "block_quote",
            Block::ThematicBreak => "thematic_break",
        }
    }
}

impl Inline {
    /// Check if this inline is empty/blank
    pub fn is_blank(&self) -> bool {
        match self {
            Inline::Text(text) => text.trim().is_empty(),
            Inline::Strong(inlines) | Inline::Emphasis(inlines) => {
                inlines.iter().all(|i| i.is_blank())
            }
            Inline::Code(code) => code.is_empty(),
            Inline::DocLink { content, .. } | Inline::Link { content, .. } => {
                content.iter().all(|i| i.is_blank())
            }
        }
    }

    /// Append the text of this inline with all markup removed
    pub fn push_plain_text(&self, out: &mut String) {
        match self {
            Inline::Text(text) | Inline::Code(text) => out.push_str(text),
            Inline::Strong(inlines)
            | Inline::Emphasis(inlines)
            | Inline::DocLink {
                content: inlines, ..
            }
            | Inline::Link {
                content: inlines, ..
            } => {
                for inline in inlines {
                    inline.push_plain_text(out);
                }
            }
        }
    }
}

/// Helper to collect the unstyled text of an inline vec
pub fn plain_text(inlines: &[Inline]) -> String {
    let mut out = String::new();
    for inline in inlines {
        inline.push_plain_text(&mut out);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_strips_markup() {
        let inlines = vec![
            Inline::Text("Read ".to_string()),
            Inline::Strong(vec![Inline::Text("this".to_string())]),
            Inline::Text(" and ".to_string()),
            Inline::DocLink {
                content: vec![Inline::Code("faq".to_string())],
                page: "faq".to_string(),
            },
        ];
        assert_eq!(plain_text(&inlines), "Read this and faq");
    }

    #[test]
    fn test_blank_blocks() {
        assert!(Block::Paragraph(vec![Inline::Text("  ".to_string())]).is_blank());
        assert!(!Block::ThematicBreak.is_blank());
        assert!(Block::CodeBlock {
            language: None,
            code: "\n".to_string(),
        }
        .is_blank());
    }

    #[test]
    fn test_kind_name() {
        let list = Block::List {
            kind: ListKind::Ordered,
            items: vec![],
        };
        assert_eq!(list.kind_name(), "ordered_list");
        assert_eq!(CalloutKind::default().as_str(), "plain");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_tagging() {
        let block = Block::BlockQuote {
            kind: CalloutKind::Warning,
            content: vec![Inline::Text("careful".to_string())],
        };
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "block_quote");
        assert_eq!(json["value"]["kind"], "warning");
    }
}
