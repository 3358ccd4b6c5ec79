//! HTML rendering backend
//!
//! Writes semantic HTML for the documentation viewer. Styling is left to the
//! page stylesheet; callouts only carry a `callout-<kind>` class.

use html_escape::{encode_double_quoted_attribute_to_string, encode_text_to_string};

use crate::ast::{Block, Inline, ListKind};
use crate::backend::Backend;
use crate::options::Options;

/// Backend that writes HTML fragments
#[derive(Debug, Clone, Default)]
pub struct HtmlBackend {
    options: Options,
}

impl HtmlBackend {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl Backend for HtmlBackend {
    fn render(&self, blocks: &[Block]) -> String {
        to_html(blocks, &self.options)
    }
}

/// Render blocks to an HTML fragment, one block element per line
pub fn to_html(blocks: &[Block], options: &Options) -> String {
    let mut out = String::with_capacity(2048);
    for block in blocks {
        if !out.is_empty() {
            out.push('\n');
        }
        write_block(block, options, &mut out);
    }
    out
}

fn write_block(block: &Block, options: &Options, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            let level = (*level).clamp(1, 6);
            out.push_str(&format!("<h{level}>"));
            write_inlines(content, options, out);
            out.push_str(&format!("</h{level}>"));
        }

        Block::Paragraph(inlines) => {
            out.push_str("<p>");
            write_inlines(inlines, options, out);
            out.push_str("</p>");
        }

        Block::List { kind, items } => {
            let tag = match kind {
                ListKind::Unordered => "ul",
                ListKind::Ordered => "ol",
            };
            out.push('<');
            out.push_str(tag);
            out.push('>');
            for item in items {
                out.push_str("<li>");
                write_inlines(item, options, out);
                out.push_str("</li>");
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
        }

        Block::CodeBlock { language, code } => {
            out.push_str("<pre><code");
            if let Some(lang) = language {
                out.push_str(" class=\"language-");
                encode_double_quoted_attribute_to_string(lang, out);
                out.push('"');
            }
            out.push('>');
            encode_text_to_string(code, out);
            out.push_str("</code></pre>");
        }

        Block::Table { headers, rows } => {
            out.push_str("<table><thead><tr>");
            for cell in headers {
                out.push_str("<th>");
                write_inlines(cell, options, out);
                out.push_str("</th>");
            }
            out.push_str("</tr></thead><tbody>");
            for row in rows {
                out.push_str("<tr>");
                for cell in row {
                    out.push_str("<td>");
                    write_inlines(cell, options, out);
                    out.push_str("</td>");
                }
                out.push_str("</tr>");
            }
            out.push_str("</tbody></table>");
        }

        Block::BlockQuote { kind, content } => {
            out.push_str("<blockquote class=\"callout callout-");
            out.push_str(kind.as_str());
            out.push_str("\">");
            write_inlines(content, options, out);
            out.push_str("</blockquote>");
        }

        Block::ThematicBreak => out.push_str("<hr>"),
    }
}

fn write_inlines(inlines: &[Inline], options: &Options, out: &mut String) {
    for inline in inlines {
        write_inline(inline, options, out);
    }
}

fn write_inline(inline: &Inline, options: &Options, out: &mut String) {
    match inline {
        Inline::Text(text) => {
            encode_text_to_string(text, out);
        }

        Inline::Strong(content) => {
            out.push_str("<strong>");
            write_inlines(content, options, out);
            out.push_str("</strong>");
        }

        Inline::Emphasis(content) => {
            out.push_str("<em>");
            write_inlines(content, options, out);
            out.push_str("</em>");
        }

        Inline::Code(code) => {
            out.push_str("<code>");
            encode_text_to_string(code, out);
            out.push_str("</code>");
        }

        Inline::DocLink { content, page } => {
            out.push_str("<a href=\"");
            encode_double_quoted_attribute_to_string(&options.doc_link_prefix, out);
            encode_double_quoted_attribute_to_string(page, out);
            out.push_str("\">");
            write_inlines(content, options, out);
            out.push_str("</a>");
        }

        Inline::Link { content, url } => {
            out.push_str("<a href=\"");
            encode_double_quoted_attribute_to_string(url, out);
            out.push('"');
            if options.external_links_new_tab {
                out.push_str(" target=\"_blank\" rel=\"noopener\"");
            }
            out.push('>');
            write_inlines(content, options, out);
            out.push_str("</a>");
        }
    }
}
