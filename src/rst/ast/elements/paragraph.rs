//! Paragraph element
//!
//! A paragraph is a block of one or more text lines, ended by a blank line.
//!
//! Parsing Structure:
//!
//! | Element   | Prec. Blank | Head         | Tail      |
//! |-----------|-------------|--------------|-----------|
//! | Paragraph | Required    | Content line | BlankLine |
//!
//! When the last line ends in the `::` sigil and an indented block follows, the paragraph
//! introduces a [CodeBlock](super::CodeBlock). The sigil is dropped from the line text.

use super::super::range::{Position, Range};
use super::super::traits::{truncate_label, AstNode, TextNode};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paragraph {
    pub lines: Vec<String>,
    pub location: Range,
}

impl Paragraph {
    fn default_location() -> Range {
        Range::new(0..0, Position::new(0, 0), Position::new(0, 0))
    }

    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            location: Self::default_location(),
        }
    }

    pub fn from_line(line: impl Into<String>) -> Self {
        Self::new(vec![line.into()])
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }
}

impl AstNode for Paragraph {
    fn node_type(&self) -> &'static str {
        "Paragraph"
    }

    fn display_label(&self) -> String {
        format!("{} line(s)", self.lines.len())
    }

    fn range(&self) -> &Range {
        &self.location
    }
}

impl TextNode for Paragraph {
    fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let first = self.lines.first().map(String::as_str).unwrap_or_default();
        write!(f, "Paragraph('{}', {} lines)", truncate_label(first, 30), self.lines.len())
    }
}
