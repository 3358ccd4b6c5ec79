//! # sandesh-docs
//!
//! Markdown renderer and page store for the Sandesh documentation viewer.
//!
//! The renderer reads a small Markdown dialect (headings up to level 3,
//! paragraphs, `-`/`*` and `1.` lists, fenced code, pipe tables, single-line
//! block quotes, `---` rules) in one forward pass and returns the block nodes
//! defined in [`sandesh_docs_core`]. It never fails: malformed input degrades
//! to the closest structure the flush rules produce.
//!
//! ## Example
//!
//! ```rust
//! use sandesh_docs::{render, Block, ListKind};
//!
//! let blocks = render("- a\n- b\n\nc");
//! assert_eq!(blocks.len(), 2);
//! assert!(matches!(&blocks[0], Block::List { kind: ListKind::Unordered, items } if items.len() == 2));
//! ```
//!
//! ## Example (page store)
//!
//! ```rust
//! use sandesh_docs::{DocPage, DocStore, HtmlBackend, Backend, NavItem, NavSection, Renderer};
//!
//! let mut store = DocStore::new();
//! store.add_page(DocPage::new("faq", "FAQ", "## FAQ\n\nSee [Welcome](#/docs/welcome).")).unwrap();
//! store.add_section(NavSection::new("Reference", vec![NavItem::new("faq", "FAQ")])).unwrap();
//!
//! let id = store.route("#/docs/faq").unwrap();
//! let page = store.render_page(&Renderer::new(), id).unwrap();
//! let html = HtmlBackend::default().render(&page.blocks);
//! assert_eq!(html, "<h2>FAQ</h2>\n<p>See <a href=\"#/docs/welcome\">Welcome</a>.</p>");
//! ```

pub mod docs;
mod inline;
mod options;
pub mod scan;
mod service;

pub use docs::{Catalog, DocPage, DocStore, NavItem, NavSection, RenderedPage};
pub use inline::InlineParser;
pub use options::{Callout, RenderOptions};
pub use sandesh_docs_core::{
    plain_text, Backend, Block, BulletMarker, CalloutKind, HtmlBackend, Inline, ListKind,
    MarkdownBackend, Options,
};
pub use service::{render, Renderer};

/// Error type for documentation store operations
#[derive(Debug, thiserror::Error)]
pub enum DocsError {
    #[error("Page not found: {0}")]
    PageNotFound(String),

    #[error("Duplicate page id: {0}")]
    DuplicatePage(String),

    #[error("Navigation item refers to unknown page: {0}")]
    UnknownNavItem(String),

    #[error("Invalid documentation route: {0}")]
    InvalidRoute(String),

    #[error("Invalid documentation link prefix: {0}")]
    InvalidLinkPrefix(#[from] regex::Error),
}

pub type Result<T> = std::result::Result<T, DocsError>;
