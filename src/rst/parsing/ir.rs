//! Intermediate Representation for the recognizer
//!
//! The recognizer produces a concrete parse tree of `ParseNode`s: one node per matched grammar
//! rule, with the tokens that rule consumed. The tree is un-simplified; line terminators, border
//! lines and blank separators are all still present. The [builder](crate::rst::building) turns
//! it into the semantic [Document](crate::rst::ast::Document).

use crate::rst::lexing::TokenLocation;
use crate::rst::token::Token;
use serde::Serialize;
use std::ops::Range;

/// The grammar rule a parse node was produced by.
///
/// The set is closed: the builder matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum NodeType {
    Document,
    BlankLines,
    Header,
    BorderLine,
    ContentLine,
    SigilLine,
    Paragraph,
    LiteralParagraph,
    CodeBlock,
    IndentedLine,
}

impl NodeType {
    /// Line-level nodes carry tokens and no children
    pub fn is_line(&self) -> bool {
        matches!(
            self,
            NodeType::BlankLines
                | NodeType::BorderLine
                | NodeType::ContentLine
                | NodeType::SigilLine
                | NodeType::IndentedLine
        )
    }
}

/// A node in the parse tree.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNode {
    pub node_type: NodeType,
    pub tokens: Vec<TokenLocation>,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    /// Creates a new `ParseNode`.
    pub fn new(node_type: NodeType, tokens: Vec<TokenLocation>, children: Vec<ParseNode>) -> Self {
        Self {
            node_type,
            tokens,
            children,
        }
    }

    /// A line-level node holding only tokens
    pub fn line(node_type: NodeType, tokens: Vec<TokenLocation>) -> Self {
        Self::new(node_type, tokens, Vec::new())
    }

    /// A block-level node holding only children
    pub fn block(node_type: NodeType, children: Vec<ParseNode>) -> Self {
        Self::new(node_type, Vec::new(), children)
    }

    pub fn blank_lines(tokens: Vec<TokenLocation>) -> Self {
        Self::line(NodeType::BlankLines, tokens)
    }

    pub fn is(&self, node_type: NodeType) -> bool {
        self.node_type == node_type
    }

    /// Byte range covered by this node and its descendants.
    ///
    /// Synthetic tokens (empty ranges) are ignored; `None` when nothing remains.
    pub fn byte_range(&self) -> Option<Range<usize>> {
        let own = self
            .tokens
            .iter()
            .map(|(_, range)| range.clone())
            .filter(|range| !range.is_empty());
        let nested = self.children.iter().filter_map(ParseNode::byte_range);
        own.chain(nested)
            .reduce(|acc, range| acc.start.min(range.start)..acc.end.max(range.end))
    }

    /// Width of the whitespace run that opens this line, 0 when there is none
    pub fn indentation(&self) -> usize {
        let first = if self.node_type.is_line() {
            self.tokens.first()
        } else {
            self.children.first().and_then(|child| child.tokens.first())
        };
        match first {
            Some((Token::Whitespace(n), _)) => *n,
            _ => 0,
        }
    }

    /// The glyph of a border line, if every token before the line break is that same glyph
    pub fn border_glyph(&self) -> Option<char> {
        let mut glyphs = self
            .tokens
            .iter()
            .take_while(|(token, _)| !token.is_newline())
            .map(|(token, _)| token.glyph());
        let first = glyphs.next()??;
        glyphs.all(|glyph| glyph == Some(first)).then_some(first)
    }

    /// Number of line breaks this node consumed
    pub fn line_break_count(&self) -> usize {
        self.tokens.iter().filter(|(token, _)| token.is_newline()).count()
    }
}

/// Index of the first `:` of the `::` sigil that closes a line.
///
/// Whitespace between the sigil and the line break is allowed. `None` when the line does not end
/// in the sigil.
pub fn sigil_index(tokens: &[TokenLocation]) -> Option<usize> {
    let (last, body) = tokens.split_last()?;
    if !last.0.is_newline() {
        return None;
    }
    let end = body.iter().rposition(|(token, _)| !token.is_whitespace())? + 1;
    match &body[..end] {
        [.., (a, _), (b, _)] if a.is_sigil_glyph() && b.is_sigil_glyph() => Some(end - 2),
        _ => None,
    }
}

/// A recognized document: the parse tree and the exact text its token ranges index into
#[derive(Debug, Clone, PartialEq)]
pub struct ParseTree {
    pub source: String,
    pub root: ParseNode,
}
