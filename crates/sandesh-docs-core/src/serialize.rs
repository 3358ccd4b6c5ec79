//! Markdown serialization
//!
//! Converts document nodes back into the documentation Markdown dialect.
//! Output is normalized: one blank line between blocks, a single bullet
//! marker, ordered items renumbered from 1, and padded table columns.

use crate::ast::{Block, Inline, ListKind};
use crate::backend::Backend;
use crate::options::Options;

const RULE: &str = "---";
const FENCE: &str = "```";

/// Backend that writes the Markdown dialect
#[derive(Debug, Clone, Default)]
pub struct MarkdownBackend {
    options: Options,
}

impl MarkdownBackend {
    pub fn new(options: Options) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }
}

impl Backend for MarkdownBackend {
    fn render(&self, blocks: &[Block]) -> String {
        serialize(blocks, &self.options)
    }
}

/// Serialize blocks to a Markdown string
pub fn serialize(blocks: &[Block], options: &Options) -> String {
    let mut output = String::with_capacity(1024);
    for block in blocks {
        if !block.is_blank() {
            serialize_block(block, options, &mut output);
        }
    }

    let trimmed_len = output.trim_end_matches('\n').len();
    output.truncate(trimmed_len);
    output
}

fn serialize_block(block: &Block, options: &Options, out: &mut String) {
    match block {
        Block::Heading { level, content } => {
            for _ in 0..*level {
                out.push('#');
            }
            out.push(' ');
            serialize_inlines(content, options, out);
            out.push_str("\n\n");
        }

        Block::Paragraph(inlines) => {
            serialize_inlines(inlines, options, out);
            out.push_str("\n\n");
        }

        Block::List { kind, items } => {
            for (i, item) in items.iter().enumerate() {
                match kind {
                    ListKind::Ordered => {
                        out.push_str(&(i + 1).to_string());
                        out.push_str(". ");
                    }
                    ListKind::Unordered => {
                        out.push(options.bullet_list_marker.as_char());
                        out.push(' ');
                    }
                }
                serialize_inlines(item, options, out);
                out.push('\n');
            }
            out.push('\n');
        }

        Block::CodeBlock { language, code } => {
            out.push_str(FENCE);
            out.push_str(language.as_deref().unwrap_or(""));
            out.push('\n');
            if !code.is_empty() {
                out.push_str(code);
                out.push('\n');
            }
            out.push_str(FENCE);
            out.push_str("\n\n");
        }

        Block::Table { headers, rows } => serialize_table(headers, rows, options, out),

        Block::BlockQuote { content, .. } => {
            out.push_str("> ");
            serialize_inlines(content, options, out);
            out.push_str("\n\n");
        }

        Block::ThematicBreak => {
            out.push_str(RULE);
            out.push_str("\n\n");
        }
    }
}

fn serialize_table(
    headers: &[Vec<Inline>],
    rows: &[Vec<Vec<Inline>>],
    options: &Options,
    out: &mut String,
) {
    if headers.is_empty() {
        return;
    }

    let render_row = |cells: &[Vec<Inline>]| -> Vec<String> {
        cells
            .iter()
            .map(|cell| {
                let mut s = String::new();
                serialize_inlines(cell, options, &mut s);
                s
            })
            .collect()
    };

    let header_cells = render_row(headers);
    let body: Vec<Vec<String>> = rows.iter().map(|r| render_row(r)).collect();

    // Calculate column widths, minimum of 3 for the separator
    let mut widths: Vec<usize> = header_cells.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (i, cell) in row.iter().enumerate() {
            if i < widths.len() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
    }
    for w in &mut widths {
        *w = (*w).max(3);
    }

    write_table_row(&header_cells, &widths, out);

    out.push('|');
    for &width in &widths {
        out.push(' ');
        for _ in 0..width {
            out.push('-');
        }
        out.push_str(" |");
    }
    out.push('\n');

    for row in &body {
        write_table_row(row, &widths, out);
    }

    out.push('\n');
}

fn write_table_row(cells: &[String], widths: &[usize], out: &mut String) {
    out.push('|');
    for (i, cell) in cells.iter().enumerate() {
        out.push(' ');
        out.push_str(cell);
        let width = widths.get(i).copied().unwrap_or(3);
        for _ in 0..width.saturating_sub(cell.chars().count()) {
            out.push(' ');
        }
        out.push_str(" |");
    }
    out.push('\n');
}

fn serialize_inlines(inlines: &[Inline], options: &Options, out: &mut String) {
    for inline in inlines {
        serialize_inline(inline, options, out);
    }
}

fn serialize_inline(inline: &Inline, options: &Options, out: &mut String) {
    match inline {
        Inline::Text(text) => out.push_str(text),

        Inline::Strong(content) => {
            out.push_str("**");
            serialize_inlines(content, options, out);
            out.push_str("**");
        }

        Inline::Emphasis(content) => {
            out.push('*');
            serialize_inlines(content, options, out);
            out.push('*');
        }

        Inline::Code(code) => {
            out.push('`');
            out.push_str(code);
            out.push('`');
        }

        Inline::DocLink { content, page } => {
            out.push('[');
            serialize_inlines(content, options, out);
            out.push_str("](");
            out.push_str(&options.doc_link_prefix);
            out.push_str(page);
            out.push(')');
        }

        Inline::Link { content, url } => {
            out.push('[');
            serialize_inlines(content, options, out);
            out.push_str("](");
            out.push_str(url);
            out.push(')');
        }
    }
}
