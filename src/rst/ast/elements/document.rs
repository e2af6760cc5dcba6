//! Document element
//!
//! The document is the ordered list of blocks, in source order. Once header levels have been
//! resolved it is not modified again, so the block list is private and only exposed through
//! read-only accessors.

use super::super::range::Range;
use super::super::traits::AstNode;
use super::block::Block;
use super::header::{Header, HeaderStyle};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Document {
    blocks: Vec<Block>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_blocks(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn headers(&self) -> impl Iterator<Item = &Header> {
        self.blocks.iter().filter_map(Block::as_header)
    }

    /// Distinct header styles, in order of first appearance
    pub fn header_styles(&self) -> Vec<HeaderStyle> {
        let mut styles: Vec<HeaderStyle> = Vec::new();
        for style in self.headers().map(Header::style) {
            if !styles.contains(&style) {
                styles.push(style);
            }
        }
        styles
    }

    /// Range covering every block, if there are any
    pub fn range(&self) -> Option<Range> {
        Range::bounding_box(self.blocks.iter().map(|block| block.range()))
    }

    pub fn into_blocks(self) -> Vec<Block> {
        self.blocks
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Document({} blocks)", self.blocks.len())
    }
}

#[cfg(test)]
mod tests {
    use super::super::code_block::CodeBlock;
    use super::super::paragraph::Paragraph;
    use super::*;

    fn sample() -> Document {
        Document::from_blocks(vec![
            Header::new("One", '=', false).into(),
            Paragraph::from_line("text").into(),
            Header::new("Two", '-', false).into(),
            Header::new("Three", '=', false).into(),
            CodeBlock::new(vec!["x".to_string()]).into(),
        ])
    }

    #[test]
    fn test_accessors() {
        let doc = sample();
        assert_eq!(doc.len(), 5);
        assert!(!doc.is_empty());
        assert_eq!(doc.headers().count(), 3);
        assert!(Document::new().is_empty());
    }

    #[test]
    fn test_header_styles_first_appearance() {
        assert_eq!(
            sample().header_styles(),
            vec![HeaderStyle::new('=', false), HeaderStyle::new('-', false)]
        );
    }

    #[test]
    fn test_into_blocks_keeps_order() {
        let kinds: Vec<bool> = sample().into_blocks().iter().map(Block::is_header).collect();
        assert_eq!(kinds, vec![true, false, true, true, false]);
    }
}
