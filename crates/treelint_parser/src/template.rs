//! Template markup parser.
//!
//! Covers what the template inspections look at: elements, start and end
//! tags, attributes with binding syntax, comments and character data. It is
//! lenient about nesting the way browsers are: an end tag closes every
//! element opened after its match, an end tag without a match is kept as a
//! stray `EndTag`, and elements still open at the end of input are closed
//! there. Truncated constructs (an unclosed start tag, quote or comment) are
//! errors.

use treelint_ast::typed::template::classify_attribute_name;
use treelint_ast::{NodeKind, SyntaxTree, TreeBuilder};

use crate::{ParseError, Parser};

/// Elements that never have content or an end tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Elements whose content is raw text up to the matching end tag.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style", "textarea", "title"];

/// Template markup parser.
#[derive(Debug, Default, Clone, Copy)]
pub struct TemplateParser;

impl TemplateParser {
    /// Creates a new template parser.
    pub fn new() -> Self {
        Self
    }
}

impl Parser for TemplateParser {
    fn name(&self) -> &str {
        "template"
    }

    fn extensions(&self) -> &[&str] {
        &["html", "htm"]
    }

    fn parse(&self, source: &str) -> Result<SyntaxTree, ParseError> {
        Scanner::new(source).run()
    }
}

struct Scanner<'s> {
    source: &'s str,
    pos: usize,
    builder: TreeBuilder,
    open: Vec<&'s str>,
}

impl<'s> Scanner<'s> {
    fn new(source: &'s str) -> Self {
        Self {
            source,
            pos: 0,
            builder: TreeBuilder::new(),
            open: Vec::new(),
        }
    }

    fn run(mut self) -> Result<SyntaxTree, ParseError> {
        self.builder.start_node(NodeKind::Document);
        while self.pos < self.source.len() {
            let rest = self.rest();
            if rest.starts_with("<!--") {
                self.comment()?;
            } else if rest.starts_with("</") && starts_name(&rest[2..]) {
                self.end_tag()?;
            } else if rest.starts_with('<') && starts_name(&rest[1..]) {
                self.start_tag()?;
            } else {
                self.text();
            }
        }
        for _ in self.open.drain(..) {
            self.builder.finish_node();
        }
        self.builder.finish_node();
        Ok(self.builder.finish()?)
    }

    fn rest(&self) -> &'s str {
        &self.source[self.pos..]
    }

    fn emit(&mut self, kind: NodeKind, len: usize) {
        let text = &self.source[self.pos..self.pos + len];
        self.builder.token(kind, text);
        self.pos += len;
    }

    fn emit_whitespace(&mut self) {
        let len = self.rest().len() - self.rest().trim_start().len();
        if len > 0 {
            self.emit(NodeKind::Whitespace, len);
        }
    }

    fn comment(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        let end = self.rest()[4..]
            .find("-->")
            .ok_or_else(|| ParseError::invalid_source_at("unterminated comment", start))?;
        self.emit(NodeKind::Comment, 4 + end + 3);
        Ok(())
    }

    /// Character data up to the next tag, comment or end tag. A `<` that
    /// starts none of those is text.
    fn text(&mut self) {
        let rest = self.rest();
        let mut len = 0;
        while len < rest.len() {
            match rest[len..].find('<') {
                Some(offset) => {
                    len += offset;
                    let tail = &rest[len..];
                    let markup = tail.starts_with("<!--")
                        || (tail.starts_with("</") && starts_name(&tail[2..]))
                        || starts_name(&tail[1..]);
                    if markup && len > 0 {
                        break;
                    }
                    len += 1;
                }
                None => len = rest.len(),
            }
        }
        self.emit(NodeKind::Text, len);
    }

    fn start_tag(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        let name = name_at(&self.source[start + 1..]);
        self.builder.start_node(NodeKind::Element);
        self.builder.start_node(NodeKind::StartTag);
        self.emit(NodeKind::TagOpen, 1);
        self.emit(NodeKind::TagName, name.len());

        let self_closing = loop {
            self.emit_whitespace();
            let rest = self.rest();
            if rest.is_empty() {
                return Err(ParseError::invalid_source_at("unterminated start tag", start));
            } else if rest.starts_with("/>") {
                self.emit(NodeKind::TagClose, 2);
                break true;
            } else if rest.starts_with('>') {
                self.emit(NodeKind::TagClose, 1);
                break false;
            } else if rest.starts_with(['"', '\'', '<', '=']) {
                let len = rest.chars().next().map_or(1, char::len_utf8);
                self.emit(NodeKind::Error, len);
            } else {
                self.attribute()?;
            }
        };
        self.builder.finish_node();

        let lower = name.to_ascii_lowercase();
        if self_closing || VOID_ELEMENTS.contains(&lower.as_str()) {
            self.builder.finish_node();
            return Ok(());
        }
        self.open.push(name);
        if RAW_TEXT_ELEMENTS.contains(&lower.as_str()) {
            self.raw_text(&lower);
        }
        Ok(())
    }

    fn raw_text(&mut self, name: &str) {
        let closing = format!("</{name}");
        let rest = self.rest();
        let len = rest
            .to_ascii_lowercase()
            .find(&closing)
            .unwrap_or(rest.len());
        if len > 0 {
            self.emit(NodeKind::Text, len);
        }
    }

    fn attribute(&mut self) -> Result<(), ParseError> {
        let rest = self.rest();
        let name_len = rest
            .char_indices()
            .find(|&(i, c)| {
                c.is_whitespace()
                    || matches!(c, '=' | '>' | '"' | '\'' | '<')
                    || rest[i..].starts_with("/>")
            })
            .map_or(rest.len(), |(i, _)| i);
        let name = &rest[..name_len];

        self.builder.start_node(classify_attribute_name(name));
        self.emit(NodeKind::AttributeName, name_len);

        let before_equals = self.whitespace_len(self.pos);
        if self.source[self.pos + before_equals..].starts_with('=') {
            if before_equals > 0 {
                self.emit(NodeKind::Whitespace, before_equals);
            }
            self.emit(NodeKind::Equals, 1);
            let before_value = self.whitespace_len(self.pos);
            let value_start = self.pos + before_value;
            let starts_value = self.source[value_start..]
                .chars()
                .next()
                .is_some_and(|c| c != '>' && !self.source[value_start..].starts_with("/>"));
            if starts_value {
                if before_value > 0 {
                    self.emit(NodeKind::Whitespace, before_value);
                }
                self.value()?;
            }
        }
        self.builder.finish_node();
        Ok(())
    }

    fn value(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        self.builder.start_node(NodeKind::AttributeValue);
        let rest = self.rest();
        match rest.chars().next() {
            Some(quote @ ('"' | '\'')) => {
                let len = rest[1..].find(quote).ok_or_else(|| {
                    ParseError::invalid_source_at("unterminated attribute value", start)
                })?;
                self.emit(NodeKind::Quote, 1);
                if len > 0 {
                    self.emit(NodeKind::ValueText, len);
                }
                self.emit(NodeKind::Quote, 1);
            }
            _ => {
                let len = rest
                    .char_indices()
                    .find(|&(i, c)| c.is_whitespace() || c == '>' || rest[i..].starts_with("/>"))
                    .map_or(rest.len(), |(i, _)| i);
                self.emit(NodeKind::ValueText, len);
            }
        }
        self.builder.finish_node();
        Ok(())
    }

    fn end_tag(&mut self) -> Result<(), ParseError> {
        let start = self.pos;
        let name = name_at(&self.source[start + 2..]);
        let after_name = start + 2 + name.len();
        let gap = self.whitespace_len(after_name);
        if !self.source[after_name + gap..].starts_with('>') {
            return Err(ParseError::invalid_source_at("unterminated end tag", start));
        }

        let matching = self
            .open
            .iter()
            .rposition(|open| open.eq_ignore_ascii_case(name));
        if let Some(index) = matching {
            // Elements opened inside the match end here without an end tag.
            for _ in index + 1..self.open.len() {
                self.builder.finish_node();
            }
            self.open.truncate(index);
        }

        self.builder.start_node(NodeKind::EndTag);
        self.emit(NodeKind::TagOpen, 2);
        self.emit(NodeKind::TagName, name.len());
        if gap > 0 {
            self.emit(NodeKind::Whitespace, gap);
        }
        self.emit(NodeKind::TagClose, 1);
        self.builder.finish_node();

        if matching.is_some() {
            self.builder.finish_node();
        }
        Ok(())
    }

    fn whitespace_len(&self, at: usize) -> usize {
        let rest = &self.source[at..];
        rest.len() - rest.trim_start().len()
    }
}

fn starts_name(s: &str) -> bool {
    s.starts_with(|c: char| c.is_ascii_alphabetic())
}

fn name_at(s: &str) -> &str {
    let len = s
        .find(|c: char| c.is_whitespace() || matches!(c, '/' | '>' | '<' | '=' | '"' | '\''))
        .unwrap_or(s.len());
    &s[..len]
}
