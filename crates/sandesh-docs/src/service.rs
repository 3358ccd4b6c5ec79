//! Renderer - the main entry point for Markdown to node conversion.

use once_cell::sync::Lazy;
use sandesh_docs_core::{Backend, Block, HtmlBackend, MarkdownBackend};

use crate::inline::InlineParser;
use crate::options::RenderOptions;
use crate::scan::ScanState;
use crate::Result;

static DEFAULT_RENDERER: Lazy<Renderer> = Lazy::new(|| {
    Renderer::with_options(RenderOptions::default()).expect("default render options are valid")
});

/// Render a document with the default options
pub fn render(source: &str) -> Vec<Block> {
    DEFAULT_RENDERER.render(source)
}

/// Converts documentation Markdown into block nodes
#[derive(Debug, Clone)]
pub struct Renderer {
    options: RenderOptions,
    inline: InlineParser,
}

impl Renderer {
    /// Create a Renderer with default options
    pub fn new() -> Self {
        DEFAULT_RENDERER.clone()
    }

    /// Create a Renderer with custom options
    pub fn with_options(options: RenderOptions) -> Result<Self> {
        let inline = InlineParser::new(&options.doc_link_prefix)?;
        Ok(Self { options, inline })
    }

    /// Render a complete document into block nodes
    ///
    /// Never fails: unterminated fences, tables, and lists at the end of the
    /// input are flushed as they stand.
    pub fn render(&self, source: &str) -> Vec<Block> {
        let source = if self.options.trim_source {
            source.trim()
        } else {
            source
        };

        let blocks = source
            .split('\n')
            .fold(ScanState::new(&self.inline, &self.options), ScanState::step)
            .finish();

        log::debug!(
            "rendered {} bytes into {} blocks",
            source.len(),
            blocks.len()
        );
        blocks
    }

    /// Render a document and draw it with `backend`
    pub fn render_to<B: Backend + ?Sized>(&self, source: &str, backend: &B) -> String {
        backend.render(&self.render(source))
    }

    /// HTML backend linking cross-references with this renderer's prefix
    pub fn html_backend(&self) -> HtmlBackend {
        HtmlBackend::new(self.options.backend_options())
    }

    /// Markdown backend whose output this renderer reads back unchanged
    pub fn markdown_backend(&self) -> MarkdownBackend {
        MarkdownBackend::new(self.options.backend_options())
    }

    /// Get the current options
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Callout;
    use pretty_assertions::assert_eq;
    use sandesh_docs_core::{CalloutKind, HtmlBackend, Inline, ListKind};

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn text(s: &str) -> Inline {
        Inline::Text(s.to_string())
    }

    fn items(kind: ListKind, texts: &[&str]) -> Block {
        Block::List {
            kind,
            items: texts.iter().map(|t| vec![text(t)]).collect(),
        }
    }

    #[test]
    fn test_empty_document() {
        init_logger();
        assert_eq!(render(""), vec![]);
        assert_eq!(render("\n\n   \n"), vec![]);
    }

    #[test]
    fn test_list_closed_by_blank_line() {
        init_logger();
        assert_eq!(
            render("- a\n- b\n\nc"),
            vec![
                items(ListKind::Unordered, &["a", "b"]),
                Block::Paragraph(vec![text("c")]),
            ]
        );
    }

    #[test]
    fn test_list_kind_switch_flushes() {
        assert_eq!(
            render("- a\n1. b"),
            vec![
                items(ListKind::Unordered, &["a"]),
                items(ListKind::Ordered, &["b"]),
            ]
        );
    }

    #[test]
    fn test_mixed_bullet_markers_merge() {
        assert_eq!(
            render("- a\n* b"),
            vec![items(ListKind::Unordered, &["a", "b"])]
        );
    }

    #[test]
    fn test_paragraph_closes_list() {
        assert_eq!(
            render("1. one\n2. two\nafter"),
            vec![
                items(ListKind::Ordered, &["one", "two"]),
                Block::Paragraph(vec![text("after")]),
            ]
        );
    }

    #[test]
    fn test_code_block_verbatim() {
        assert_eq!(
            render("```\n# not a heading\n```"),
            vec![Block::CodeBlock {
                language: None,
                code: "# not a heading".to_string(),
            }]
        );
    }

    #[test]
    fn test_code_block_language_and_inline_markup() {
        assert_eq!(
            render("```bash\necho **x**\n```"),
            vec![Block::CodeBlock {
                language: Some("bash".to_string()),
                code: "echo **x**".to_string(),
            }]
        );
    }

    #[test]
    fn test_unterminated_fence_is_flushed() {
        init_logger();
        assert_eq!(
            render("intro\n```\nline one\nline two"),
            vec![
                Block::Paragraph(vec![text("intro")]),
                Block::CodeBlock {
                    language: None,
                    code: "line one\nline two".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_fence_closes_open_list() {
        assert_eq!(
            render("- a\n```\nx\n```"),
            vec![
                items(ListKind::Unordered, &["a"]),
                Block::CodeBlock {
                    language: None,
                    code: "x".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_table() {
        assert_eq!(
            render("|A|B|\n|---|---|\n|1|2|"),
            vec![Block::Table {
                headers: vec![vec![text("A")], vec![text("B")]],
                rows: vec![vec![vec![text("1")], vec![text("2")]]],
            }]
        );
    }

    #[test]
    fn test_table_cells_are_inline_processed() {
        assert_eq!(
            render("| **Role** | Access |\n|---|---|\n| Admin | `all` |\ntext"),
            vec![
                Block::Table {
                    headers: vec![
                        vec![Inline::Strong(vec![text("Role")])],
                        vec![text("Access")],
                    ],
                    rows: vec![vec![
                        vec![text("Admin")],
                        vec![Inline::Code("all".to_string())],
                    ]],
                },
                Block::Paragraph(vec![text("text")]),
            ]
        );
    }

    #[test]
    fn test_table_second_row_dropped_without_dashes() {
        assert_eq!(
            render("|A|\n|x|\n|1|"),
            vec![Block::Table {
                headers: vec![vec![text("A")]],
                rows: vec![vec![vec![text("1")]]],
            }]
        );
        assert_eq!(
            render("|A|\n|1|"),
            vec![Block::Table {
                headers: vec![vec![text("A")]],
                rows: vec![],
            }]
        );
    }

    #[test]
    fn test_table_closes_list() {
        assert_eq!(
            render("- a\n|A|\n|---|"),
            vec![
                items(ListKind::Unordered, &["a"]),
                Block::Table {
                    headers: vec![vec![text("A")]],
                    rows: vec![],
                },
            ]
        );
    }

    #[test]
    fn test_trailing_list_is_flushed() {
        assert_eq!(
            render("Steps:\n1. Log in\n2. Compose"),
            vec![
                Block::Paragraph(vec![text("Steps:")]),
                items(ListKind::Ordered, &["Log in", "Compose"]),
            ]
        );
    }

    #[test]
    fn test_headings_and_rule() {
        assert_eq!(
            render("# A\n## A\n### A\n#### A\n---"),
            vec![
                Block::Heading {
                    level: 1,
                    content: vec![text("A")],
                },
                Block::Heading {
                    level: 2,
                    content: vec![text("A")],
                },
                Block::Heading {
                    level: 3,
                    content: vec![text("A")],
                },
                Block::Paragraph(vec![text("#### A")]),
                Block::ThematicBreak,
            ]
        );
    }

    #[test]
    fn test_blockquote_callouts() {
        assert_eq!(
            render("> ⚠️ **Change the admin password!**\n> 💡 Ask\n> plain"),
            vec![
                Block::BlockQuote {
                    kind: CalloutKind::Warning,
                    content: vec![
                        text("⚠️ "),
                        Inline::Strong(vec![text("Change the admin password!")]),
                    ],
                },
                Block::BlockQuote {
                    kind: CalloutKind::Info,
                    content: vec![text("💡 Ask")],
                },
                Block::BlockQuote {
                    kind: CalloutKind::Plain,
                    content: vec![text("plain")],
                },
            ]
        );
    }

    #[test]
    fn test_custom_options() {
        let renderer = Renderer::with_options(RenderOptions {
            doc_link_prefix: "/help/".to_string(),
            callouts: vec![Callout::new("NOTE", CalloutKind::Info)],
            trim_source: false,
        })
        .unwrap();
        assert_eq!(
            renderer.render("> NOTE see [x](/help/y)\n"),
            vec![Block::BlockQuote {
                kind: CalloutKind::Info,
                content: vec![
                    text("NOTE see "),
                    Inline::DocLink {
                        content: vec![text("x")],
                        page: "y".to_string(),
                    },
                ],
            }]
        );
    }

    #[test]
    fn test_backends_keep_custom_prefix() {
        let renderer = Renderer::with_options(RenderOptions {
            doc_link_prefix: "/help/".to_string(),
            ..Default::default()
        })
        .unwrap();
        let source = "See [x](/help/y) and [z](#/docs/w)";

        let markdown = renderer.render_to(source, &renderer.markdown_backend());
        assert_eq!(markdown, source);
        assert_eq!(renderer.render(&markdown), renderer.render(source));

        let html = renderer.render_to(source, &renderer.html_backend());
        assert!(html.contains("<a href=\"/help/y\">x</a>"));
    }

    #[test]
    fn test_crlf_lines() {
        assert_eq!(
            render("- a\r\n- b\r\n"),
            vec![items(ListKind::Unordered, &["a", "b"])]
        );
    }

    #[test]
    fn test_render_is_repeatable() {
        let source = "# T\n- a\n|x|\n|---|\n```\ncode\n";
        let renderer = Renderer::new();
        assert_eq!(renderer.render(source), renderer.render(source));
    }

    #[test]
    fn test_render_to_html() {
        let html = Renderer::new().render_to("# Hi\n\n- a", &HtmlBackend::default());
        assert_eq!(html, "<h1>Hi</h1>\n<ul><li>a</li></ul>");
    }
}
