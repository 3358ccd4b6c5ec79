//! sandesh-docs-core - document node model and rendering backends
//!
//! This crate provides the structured output of the Sandesh documentation
//! renderer and the backends that draw it. The renderer itself lives in
//! `sandesh-docs`; UI layers depend on this crate alone.
//!
//! # Architecture
//!
//! ```text
//!                            ┌──────────────┐ ──HtmlBackend──▶ HTML fragment
//! Markdown page ──render───▶ │  Vec<Block>  │
//!                            └──────────────┘ ──MarkdownBackend──▶ Markdown
//! ```
//!
//! # Example
//!
//! ```rust
//! use sandesh_docs_core::{Backend, Block, HtmlBackend, Inline};
//!
//! let blocks = vec![
//!     Block::Heading {
//!         level: 1,
//!         content: vec![Inline::Text("Quick Start".to_string())],
//!     },
//!     Block::Paragraph(vec![
//!         Inline::Text("Log in as ".to_string()),
//!         Inline::Code("admin".to_string()),
//!     ]),
//! ];
//!
//! let html = HtmlBackend::default().render(&blocks);
//! assert_eq!(html, "<h1>Quick Start</h1>\n<p>Log in as <code>admin</code></p>");
//! ```

mod ast;
mod backend;
mod html;
mod options;
mod serialize;

pub use ast::{plain_text, Block, CalloutKind, Inline, ListKind};
pub use backend::Backend;
pub use html::{to_html, HtmlBackend};
pub use options::{BulletMarker, Options};
pub use serialize::{serialize, MarkdownBackend};
