//! Header element
//!
//! A header is a single line of text bounded below by a border line, and optionally bounded
//! above by a second border line of the same glyph.
//!
//! Parsing Structure:
//!
//! | Element   | Prec. Blank | Head                | Tail        |
//! |-----------|-------------|---------------------|-------------|
//! | Header    | Required    | Border line or Text | Border line |
//!
//! Examples:
//!
//!     Title
//!     =====
//!
//!     ~~~~~~~~
//!     Overline
//!     ~~~~~~~~
//!
//! The two headers above have different styles, and so end up at different levels.

use super::super::range::{Position, Range};
use super::super::traits::{truncate_label, AstNode};
use serde::Serialize;
use std::fmt;

/// The border style of a header: the key headers are ranked by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct HeaderStyle {
    pub glyph: char,
    pub double_bordered: bool,
}

impl HeaderStyle {
    pub fn new(glyph: char, double_bordered: bool) -> Self {
        Self {
            glyph,
            double_bordered,
        }
    }
}

impl fmt::Display for HeaderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.double_bordered {
            write!(f, "{0}/{0}", self.glyph)
        } else {
            write!(f, "/{}", self.glyph)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Header {
    pub text: String,
    pub border_glyph: char,
    pub double_bordered: bool,
    /// Ordinal level, `None` until the header levels are resolved
    pub level: Option<usize>,
    pub location: Range,
}

impl Header {
    fn default_location() -> Range {
        Range::new(0..0, Position::new(0, 0), Position::new(0, 0))
    }

    pub fn new(text: impl Into<String>, border_glyph: char, double_bordered: bool) -> Self {
        Self {
            text: text.into(),
            border_glyph,
            double_bordered,
            level: None,
            location: Self::default_location(),
        }
    }

    /// Preferred builder
    pub fn at(mut self, location: Range) -> Self {
        self.location = location;
        self
    }

    pub fn with_level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }

    pub fn style(&self) -> HeaderStyle {
        HeaderStyle::new(self.border_glyph, self.double_bordered)
    }
}

impl AstNode for Header {
    fn node_type(&self) -> &'static str {
        "Header"
    }

    fn display_label(&self) -> String {
        truncate_label(&self.text, 50)
    }

    fn range(&self) -> &Range {
        &self.location
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.level {
            Some(level) => write!(f, "Header('{}', {}, level {})", self.text, self.style(), level),
            None => write!(f, "Header('{}', {})", self.text, self.style()),
        }
    }
}
