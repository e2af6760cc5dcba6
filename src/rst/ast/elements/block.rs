//! Block union
//!
//! The document is a flat sequence of blocks. Blank line separators are structural only and
//! have no variant here.

use super::super::range::Range;
use super::super::traits::AstNode;
use super::code_block::CodeBlock;
use super::header::Header;
use super::paragraph::Paragraph;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum Block {
    Header(Header),
    Paragraph(Paragraph),
    CodeBlock(CodeBlock),
}

impl Block {
    pub fn is_header(&self) -> bool {
        matches!(self, Block::Header(_))
    }

    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    pub fn is_code_block(&self) -> bool {
        matches!(self, Block::CodeBlock(_))
    }

    pub fn as_header(&self) -> Option<&Header> {
        match self {
            Block::Header(header) => Some(header),
            _ => None,
        }
    }

    pub fn as_paragraph(&self) -> Option<&Paragraph> {
        match self {
            Block::Paragraph(paragraph) => Some(paragraph),
            _ => None,
        }
    }

    pub fn as_code_block(&self) -> Option<&CodeBlock> {
        match self {
            Block::CodeBlock(code_block) => Some(code_block),
            _ => None,
        }
    }
}

impl AstNode for Block {
    fn node_type(&self) -> &'static str {
        match self {
            Block::Header(h) => h.node_type(),
            Block::Paragraph(p) => p.node_type(),
            Block::CodeBlock(c) => c.node_type(),
        }
    }

    fn display_label(&self) -> String {
        match self {
            Block::Header(h) => h.display_label(),
            Block::Paragraph(p) => p.display_label(),
            Block::CodeBlock(c) => c.display_label(),
        }
    }

    fn range(&self) -> &Range {
        match self {
            Block::Header(h) => h.range(),
            Block::Paragraph(p) => p.range(),
            Block::CodeBlock(c) => c.range(),
        }
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Block::Header(h) => h.fmt(f),
            Block::Paragraph(p) => p.fmt(f),
            Block::CodeBlock(c) => c.fmt(f),
        }
    }
}

impl From<Header> for Block {
    fn from(header: Header) -> Self {
        Block::Header(header)
    }
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Block::Paragraph(paragraph)
    }
}

impl From<CodeBlock> for Block {
    fn from(code_block: CodeBlock) -> Self {
        Block::CodeBlock(code_block)
    }
}
