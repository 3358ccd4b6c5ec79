//! Line scanner
//!
//! The renderer folds the source lines through a [`ScanState`]. Each line is
//! first classified on its own by [`classify`]; the state then decides which
//! open accumulator (code, table, list) the line extends or closes.

use once_cell::sync::Lazy;
use regex::Regex;
use sandesh_docs_core::{Block, ListKind};

use crate::inline::InlineParser;
use crate::options::RenderOptions;

pub const FENCE: &str = "```";

static ORDERED_ITEM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\. ").expect("valid ordered item pattern"));

/// Classification of a single line outside a code block
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line<'s> {
    /// Code fence with the text after the marker
    Fence { info: &'s str },
    /// Table row, already split into trimmed cells
    TableRow(Vec<&'s str>),
    Heading { level: u8, text: &'s str },
    Rule,
    Quote(&'s str),
    Item { kind: ListKind, text: &'s str },
    Blank,
    Text(&'s str),
}

/// Classify a line by its prefix, in rule priority order
pub fn classify(line: &str) -> Line<'_> {
    if let Some(info) = line.strip_prefix(FENCE) {
        return Line::Fence { info };
    }
    if line.starts_with('|') {
        return Line::TableRow(split_row(line));
    }
    for (level, marker) in [(3, "### "), (2, "## "), (1, "# ")] {
        if let Some(text) = line.strip_prefix(marker) {
            return Line::Heading { level, text };
        }
    }
    if line == "---" {
        return Line::Rule;
    }
    if let Some(text) = line.strip_prefix("> ") {
        return Line::Quote(text);
    }
    if let Some(text) = line.strip_prefix("- ").or_else(|| line.strip_prefix("* ")) {
        return Line::Item {
            kind: ListKind::Unordered,
            text,
        };
    }
    if let Some(m) = ORDERED_ITEM.find(line) {
        return Line::Item {
            kind: ListKind::Ordered,
            text: &line[m.end()..],
        };
    }
    if line.trim().is_empty() {
        return Line::Blank;
    }
    Line::Text(line)
}

/// Split a `|`-prefixed row into trimmed cells
///
/// The empty piece before the leading pipe is dropped, and so is the piece
/// after the trailing pipe when it is blank.
pub fn split_row(line: &str) -> Vec<&str> {
    let mut cells: Vec<&str> = line.split('|').skip(1).map(str::trim).collect();
    if cells.last().is_some_and(|c| c.is_empty()) {
        cells.pop();
    }
    cells
}

struct CodeAccumulator<'s> {
    language: Option<String>,
    lines: Vec<&'s str>,
}

struct ListAccumulator<'s> {
    kind: ListKind,
    items: Vec<&'s str>,
}

/// Transient state of one render pass
pub struct ScanState<'r, 's> {
    inline: &'r InlineParser,
    options: &'r RenderOptions,
    code: Option<CodeAccumulator<'s>>,
    table: Vec<Vec<&'s str>>,
    list: Option<ListAccumulator<'s>>,
    blocks: Vec<Block>,
}

impl<'r, 's> ScanState<'r, 's> {
    pub fn new(inline: &'r InlineParser, options: &'r RenderOptions) -> Self {
        Self {
            inline,
            options,
            code: None,
            table: Vec::new(),
            list: None,
            blocks: Vec::new(),
        }
    }

    /// Consume one source line
    pub fn step(mut self, line: &'s str) -> Self {
        let line = line.strip_suffix('\r').unwrap_or(line);

        if let Some(code) = self.code.as_mut() {
            if line.starts_with(FENCE) {
                self.close_code();
            } else {
                code.lines.push(line);
            }
            return self;
        }

        let classified = classify(line);
        log::trace!("line {:?} -> {:?}", line, classified);

        if !matches!(classified, Line::TableRow(_)) {
            self.flush_table();
        }

        match classified {
            Line::Fence { info } => {
                self.flush_list();
                let info = info.trim();
                self.code = Some(CodeAccumulator {
                    language: (!info.is_empty()).then(|| info.to_string()),
                    lines: Vec::new(),
                });
            }
            Line::TableRow(cells) => {
                self.flush_list();
                self.table.push(cells);
            }
            Line::Heading { level, text } => {
                self.flush_list();
                let content = self.inline.parse(text);
                self.blocks.push(Block::Heading { level, content });
            }
            Line::Rule => {
                self.flush_list();
                self.blocks.push(Block::ThematicBreak);
            }
            Line::Quote(text) => {
                self.flush_list();
                self.blocks.push(Block::BlockQuote {
                    kind: self.options.classify_callout(text),
                    content: self.inline.parse(text),
                });
            }
            Line::Item { kind, text } => self.push_item(kind, text),
            Line::Blank => self.flush_list(),
            Line::Text(text) => {
                self.flush_list();
                self.blocks.push(Block::Paragraph(self.inline.parse(text)));
            }
        }

        self
    }

    /// Flush whatever is still open and return the finished blocks
    pub fn finish(mut self) -> Vec<Block> {
        if self.code.is_some() {
            log::debug!("code fence left open at end of input, flushing");
            self.close_code();
        }
        self.flush_table();
        self.flush_list();
        self.blocks
    }

    fn push_item(&mut self, kind: ListKind, text: &'s str) {
        if self.list.as_ref().is_some_and(|l| l.kind != kind) {
            self.flush_list();
        }
        self.list
            .get_or_insert_with(|| ListAccumulator {
                kind,
                items: Vec::new(),
            })
            .items
            .push(text);
    }

    fn close_code(&mut self) {
        if let Some(code) = self.code.take() {
            log::debug!("flushing code block ({} lines)", code.lines.len());
            self.blocks.push(Block::CodeBlock {
                language: code.language,
                code: code.lines.join("\n"),
            });
        }
    }

    fn flush_list(&mut self) {
        if let Some(list) = self.list.take() {
            log::debug!("flushing {:?} list ({} items)", list.kind, list.items.len());
            let items = list.items.iter().map(|item| self.inline.parse(item)).collect();
            self.blocks.push(Block::List {
                kind: list.kind,
                items,
            });
        }
    }

    fn flush_table(&mut self) {
        if self.table.is_empty() {
            return;
        }
        // Row two is the separator whatever it contains
        let mut rows = std::mem::take(&mut self.table).into_iter();
        let headers = rows.next().unwrap_or_default();
        let body: Vec<Vec<&str>> = rows.skip(1).collect();
        log::debug!(
            "flushing table ({} columns, {} rows)",
            headers.len(),
            body.len()
        );

        let parse_row =
            |row: &[&str]| -> Vec<_> { row.iter().map(|cell| self.inline.parse(cell)).collect() };
        let block = Block::Table {
            headers: parse_row(&headers),
            rows: body.iter().map(|row| parse_row(row)).collect(),
        };
        self.blocks.push(block);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_classify_headings_longest_first() {
        assert_eq!(classify("# A"), Line::Heading { level: 1, text: "A" });
        assert_eq!(classify("## A"), Line::Heading { level: 2, text: "A" });
        assert_eq!(classify("### A"), Line::Heading { level: 3, text: "A" });
        assert_eq!(classify("#### A"), Line::Text("#### A"));
        assert_eq!(classify("#A"), Line::Text("#A"));
    }

    #[test]
    fn test_classify_rule_and_items() {
        assert_eq!(classify("---"), Line::Rule);
        assert_eq!(
            classify("- one"),
            Line::Item {
                kind: ListKind::Unordered,
                text: "one"
            }
        );
        assert_eq!(
            classify("* two"),
            Line::Item {
                kind: ListKind::Unordered,
                text: "two"
            }
        );
        assert_eq!(
            classify("12. twelve"),
            Line::Item {
                kind: ListKind::Ordered,
                text: "twelve"
            }
        );
        assert_eq!(classify("1.no space"), Line::Text("1.no space"));
        assert_eq!(classify("----"), Line::Text("----"));
    }

    #[test]
    fn test_classify_fence_quote_blank() {
        assert_eq!(classify("```rust"), Line::Fence { info: "rust" });
        assert_eq!(classify("> 💡 tip"), Line::Quote("💡 tip"));
        assert_eq!(classify(">no space"), Line::Text(">no space"));
        assert_eq!(classify("   "), Line::Blank);
    }

    #[test]
    fn test_split_row() {
        assert_eq!(split_row("| A | B |"), vec!["A", "B"]);
        assert_eq!(split_row("|a||c|"), vec!["a", "", "c"]);
        assert_eq!(split_row("|a|b"), vec!["a", "b"]);
        assert_eq!(split_row("|a| "), vec!["a"]);
    }

    #[test]
    fn test_second_table_row_always_dropped() {
        let inline = InlineParser::new("#/docs/").unwrap();
        let options = RenderOptions::default();
        let blocks = ["| A | B |", "| x | y |", "| 1 | 2 |"]
            .into_iter()
            .fold(ScanState::new(&inline, &options), ScanState::step)
            .finish();
        let text = |s: &str| vec![sandesh_docs_core::Inline::Text(s.to_string())];
        assert_eq!(
            blocks,
            vec![Block::Table {
                headers: vec![text("A"), text("B")],
                rows: vec![vec![text("1"), text("2")]],
            }]
        );
    }

    #[test]
    fn test_step_keeps_code_verbatim() {
        let inline = InlineParser::new("#/docs/").unwrap();
        let options = RenderOptions::default();
        let blocks = ["```", "- not a list", "| not | a table |", "```"]
            .into_iter()
            .fold(ScanState::new(&inline, &options), ScanState::step)
            .finish();
        assert_eq!(
            blocks,
            vec![Block::CodeBlock {
                language: None,
                code: "- not a list\n| not | a table |".to_string(),
            }]
        );
    }
}
