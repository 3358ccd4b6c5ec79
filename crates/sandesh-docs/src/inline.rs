//! Inline processing
//!
//! Turns the text of one line into inline nodes. The passes rewrite the text
//! in a fixed order, each on the output of the previous one:
//!
//! 1. inline code (`` `x` ``), cut out into numbered placeholders first so no
//!    later pass can style its contents
//! 2. bold (`**x**`)
//! 3. italic (`*x*`)
//! 4. documentation cross-references (`[label](#/docs/page)`)
//! 5. external links (`[label](url)`)
//!
//! Matched spans are wrapped in private-use marker characters instead of
//! markup, and the marked text is folded into an [`Inline`] tree at the end.
//! A match whose markers do not nest cleanly is left as literal text. Marker
//! characters already present in the input are replaced by U+FFFD first.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use sandesh_docs_core::Inline;

static CODE_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"`(.+?)`").expect("valid code span pattern"));
static STRONG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*(.+?)\*\*").expect("valid strong pattern"));
static EMPHASIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*(.+?)\*").expect("valid emphasis pattern"));
static LINK: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\[([^\]]+)\]\((.+?)\)").expect("valid link pattern"));

const CODE_OPEN: char = '\u{E000}';
const CODE_CLOSE: char = '\u{E001}';

/// Private-use characters the passes reserve for their markers
fn is_reserved(c: char) -> bool {
    ('\u{E000}'..='\u{E00B}').contains(&c)
}

/// A styled span produced by one of the text passes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Span {
    Strong,
    Emphasis,
    DocLink,
    Link,
}

impl Span {
    const PASSES: [Span; 4] = [Span::Strong, Span::Emphasis, Span::DocLink, Span::Link];

    fn open(self) -> char {
        match self {
            Span::Strong => '\u{E002}',
            Span::Emphasis => '\u{E004}',
            Span::DocLink => '\u{E006}',
            Span::Link => '\u{E009}',
        }
    }

    /// Separator between label and target, links only
    fn target(self) -> Option<char> {
        match self {
            Span::Strong | Span::Emphasis => None,
            Span::DocLink => Some('\u{E007}'),
            Span::Link => Some('\u{E00A}'),
        }
    }

    fn close(self) -> char {
        match self {
            Span::Strong => '\u{E003}',
            Span::Emphasis => '\u{E005}',
            Span::DocLink => '\u{E008}',
            Span::Link => '\u{E00B}',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Marker {
    Open(Span),
    Target(Span),
    Close(Span),
}

fn marker(c: char) -> Option<Marker> {
    Span::PASSES.into_iter().find_map(|span| {
        if c == span.open() {
            Some(Marker::Open(span))
        } else if Some(c) == span.target() {
            Some(Marker::Target(span))
        } else if c == span.close() {
            Some(Marker::Close(span))
        } else {
            None
        }
    })
}

/// Check that every marker in `text` opens and closes in nesting order
fn is_balanced(text: &str) -> bool {
    let mut stack: Vec<(Span, bool)> = Vec::new();
    for c in text.chars() {
        match marker(c) {
            Some(Marker::Open(span)) => stack.push((span, false)),
            Some(Marker::Target(span)) => match stack.last_mut() {
                Some((top, seen)) if *top == span && !*seen => *seen = true,
                _ => return false,
            },
            Some(Marker::Close(span)) => match stack.pop() {
                Some((top, seen)) if top == span && (seen || span.target().is_none()) => {}
                _ => return false,
            },
            None => {}
        }
    }
    stack.is_empty()
}

fn code_at<'a>(codes: &'a [String], index: &str) -> &'a str {
    index
        .parse::<usize>()
        .ok()
        .and_then(|i| codes.get(i))
        .map(String::as_str)
        .unwrap_or_default()
}

/// Inline processor for a fixed documentation link prefix
#[derive(Debug, Clone)]
pub struct InlineParser {
    doc_link_prefix: String,
    doc_link: Regex,
}

impl InlineParser {
    /// Create a parser recognising `[label](<prefix>page)` cross-references
    pub fn new(doc_link_prefix: &str) -> Result<Self, regex::Error> {
        let pattern = format!(r"\[([^\]]+)\]\({}(.+?)\)", regex::escape(doc_link_prefix));
        Ok(Self {
            doc_link_prefix: doc_link_prefix.to_string(),
            doc_link: Regex::new(&pattern)?,
        })
    }

    /// Parse one line of text into inline nodes
    pub fn parse(&self, text: &str) -> Vec<Inline> {
        let text: Cow<'_, str> = if text.contains(is_reserved) {
            Cow::Owned(text.replace(is_reserved, "\u{FFFD}"))
        } else {
            Cow::Borrowed(text)
        };

        let mut codes: Vec<String> = Vec::new();
        let masked = CODE_SPAN.replace_all(&text, |caps: &Captures| {
            codes.push(caps[1].to_string());
            format!("{}{}{}", CODE_OPEN, codes.len() - 1, CODE_CLOSE)
        });

        let mut marked = masked.into_owned();
        for span in Span::PASSES {
            marked = self.apply(span, &marked, &codes);
        }

        build(&marked, &codes)
    }

    fn pattern(&self, span: Span) -> &Regex {
        match span {
            Span::Strong => &*STRONG,
            Span::Emphasis => &*EMPHASIS,
            Span::DocLink => &self.doc_link,
            Span::Link => &*LINK,
        }
    }

    fn apply(&self, span: Span, text: &str, codes: &[String]) -> String {
        self.pattern(span)
            .replace_all(text, |caps: &Captures| {
                let whole = &caps[0];
                if !is_balanced(whole) {
                    return whole.to_string();
                }
                let mut out = String::with_capacity(whole.len() + 3);
                out.push(span.open());
                out.push_str(&caps[1]);
                if let Some(target) = span.target() {
                    out.push(target);
                    out.push_str(&self.to_source(&caps[2], codes));
                }
                out.push(span.close());
                out
            })
            .into_owned()
    }

    /// Turn marked text back into the Markdown it came from (for link targets)
    fn to_source(&self, text: &str, codes: &[String]) -> String {
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars();
        while let Some(c) = chars.next() {
            if c == CODE_OPEN {
                let index: String = chars.by_ref().take_while(|&c| c != CODE_CLOSE).collect();
                out.push('`');
                out.push_str(code_at(codes, &index));
                out.push('`');
                continue;
            }
            match marker(c) {
                Some(Marker::Open(Span::Strong) | Marker::Close(Span::Strong)) => {
                    out.push_str("**")
                }
                Some(Marker::Open(Span::Emphasis) | Marker::Close(Span::Emphasis)) => out.push('*'),
                Some(Marker::Open(_)) => out.push('['),
                Some(Marker::Target(Span::DocLink)) => {
                    out.push_str("](");
                    out.push_str(&self.doc_link_prefix);
                }
                Some(Marker::Target(_)) => out.push_str("]("),
                Some(Marker::Close(_)) => out.push(')'),
                None => out.push(c),
            }
        }
        out
    }
}

struct Frame {
    span: Span,
    content: Vec<Inline>,
    target: Option<String>,
}

fn current<'a>(stack: &'a mut [Frame], root: &'a mut Vec<Inline>) -> &'a mut Vec<Inline> {
    match stack.last_mut() {
        Some(frame) => &mut frame.content,
        None => root,
    }
}

fn flush_text(buf: &mut String, stack: &mut [Frame], root: &mut Vec<Inline>) {
    if !buf.is_empty() {
        current(stack, root).push(Inline::Text(std::mem::take(buf)));
    }
}

/// Fold marked text into an inline tree
fn build(text: &str, codes: &[String]) -> Vec<Inline> {
    let mut root: Vec<Inline> = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut buf = String::new();
    let mut chars = text.chars();

    while let Some(c) = chars.next() {
        if c == CODE_OPEN {
            flush_text(&mut buf, &mut stack, &mut root);
            let index: String = chars.by_ref().take_while(|&c| c != CODE_CLOSE).collect();
            current(&mut stack, &mut root).push(Inline::Code(code_at(codes, &index).to_string()));
            continue;
        }

        match marker(c) {
            Some(Marker::Open(span)) => {
                flush_text(&mut buf, &mut stack, &mut root);
                stack.push(Frame {
                    span,
                    content: Vec::new(),
                    target: None,
                });
            }
            Some(Marker::Target(span)) => {
                flush_text(&mut buf, &mut stack, &mut root);
                if let Some(frame) = stack.last_mut().filter(|f| f.span == span) {
                    frame.target = Some(String::new());
                }
            }
            Some(Marker::Close(span)) => {
                flush_text(&mut buf, &mut stack, &mut root);
                if stack.last().is_some_and(|f| f.span == span) {
                    if let Some(frame) = stack.pop() {
                        let node = finish(frame);
                        current(&mut stack, &mut root).push(node);
                    }
                }
            }
            None => match stack.last_mut().and_then(|f| f.target.as_mut()) {
                Some(target) => target.push(c),
                None => buf.push(c),
            },
        }
    }

    flush_text(&mut buf, &mut stack, &mut root);
    // Unclosed spans keep their content without styling
    while let Some(frame) = stack.pop() {
        current(&mut stack, &mut root).extend(frame.content);
    }
    root
}

fn finish(frame: Frame) -> Inline {
    let content = frame.content;
    match frame.span {
        Span::Strong => Inline::Strong(content),
        Span::Emphasis => Inline::Emphasis(content),
        Span::DocLink => Inline::DocLink {
            content,
            page: frame.target.unwrap_or_default(),
        },
        Span::Link => Inline::Link {
            content,
            url: frame.target.unwrap_or_default(),
        },
    }
}
