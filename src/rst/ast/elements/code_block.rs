//! Code block element
//!
//! A literal block of indented lines, introduced by a paragraph ending in `::`. Its lines are
//! stored with the common indentation removed, so the least indented line starts at column
//! zero and relative indentation is preserved.
//!
//! Parsing Structure:
//!
//! | Element   | Prec. Blank | Head          | Tail      |
//! |-----------|-------------|---------------|-----------|
//! | CodeBlock | Required    | Indented line | BlankLine |

use super::super::range::{Position, Range};
use super::super::traits::{AstNode, TextNode};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeBlock {
    pub lines: Vec<String>,
    pub location: Range,
}

impl CodeBlock {
    fn default_location() -> Range {
        Range::new(0..0, Position::new(0, 0), Position::new(0, 0))
    }

    pub fn new(lines: Vec<String>) -> Self {
        Self {
            lines,
            location: Self::default_location(),
        }
    }

    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }
}

impl AstNode for CodeBlock {
    fn node_type(&self) -> &'static str {
        "CodeBlock"
    }

    fn display_label(&self) -> String {
        format!("{} line(s)", self.lines.len())
    }

    fn range(&self) -> &Range {
        &self.location
    }
}

impl TextNode for CodeBlock {
    fn lines(&self) -> &[String] {
        &self.lines
    }
}

impl fmt::Display for CodeBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CodeBlock({} lines)", self.lines.len())
    }
}
