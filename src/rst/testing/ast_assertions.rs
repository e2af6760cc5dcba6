//! Fluent assertion API for documents
//!
//! Every assertion panics with the path of the block it was checking (`items[2]`), so a failing
//! test points straight at the offending block.

use super::matchers::TextMatch;
use crate::rst::ast::traits::TextNode;
use crate::rst::ast::{AstNode, Block, CodeBlock, Document, Header, Paragraph};

/// Create an assertion builder for a document
pub fn assert_ast(doc: &Document) -> DocumentAssertion<'_> {
    DocumentAssertion { doc }
}

fn summarize_blocks(blocks: &[Block]) -> String {
    blocks
        .iter()
        .map(|block| block.node_type())
        .collect::<Vec<_>>()
        .join(", ")
}

// ============================================================================
// Document
// ============================================================================

pub struct DocumentAssertion<'a> {
    pub(crate) doc: &'a Document,
}

impl<'a> DocumentAssertion<'a> {
    /// Assert the number of blocks in the document
    pub fn item_count(self, expected: usize) -> Self {
        let actual = self.doc.len();
        assert_eq!(
            actual,
            expected,
            "Expected {} items, found {} items: [{}]",
            expected,
            actual,
            summarize_blocks(self.doc.blocks())
        );
        self
    }

    /// Assert on a specific block by index
    pub fn item<F>(self, index: usize, assertion: F) -> Self
    where
        F: FnOnce(BlockAssertion<'a>),
    {
        assert!(
            index < self.doc.len(),
            "Item index {} out of bounds (document has {} items)",
            index,
            self.doc.len()
        );

        assertion(BlockAssertion {
            block: &self.doc.blocks()[index],
            context: format!("items[{}]", index),
        });
        self
    }

    /// Assert the kinds of all blocks, in order
    pub fn item_types(self, expected: &[&str]) -> Self {
        let actual: Vec<&str> = self.doc.iter().map(|block| block.node_type()).collect();
        assert_eq!(actual, expected, "Block kinds differ");
        self
    }

    /// Assert the resolved levels of all headers, in order
    pub fn header_levels(self, expected: &[usize]) -> Self {
        let actual: Vec<Option<usize>> = self.doc.headers().map(|h| h.level).collect();
        let expected: Vec<Option<usize>> = expected.iter().copied().map(Some).collect();
        assert_eq!(actual, expected, "Header levels differ");
        self
    }
}

// ============================================================================
// Block
// ============================================================================

pub struct BlockAssertion<'a> {
    pub(crate) block: &'a Block,
    pub(crate) context: String,
}

impl<'a> BlockAssertion<'a> {
    /// Assert this block is a Header and return header-specific assertions
    pub fn assert_header(self) -> HeaderAssertion<'a> {
        match self.block {
            Block::Header(header) => HeaderAssertion {
                header,
                context: self.context,
            },
            _ => panic!(
                "{}: Expected Header, found {}",
                self.context,
                self.block.node_type()
            ),
        }
    }

    /// Assert this block is a Paragraph and return paragraph-specific assertions
    pub fn assert_paragraph(self) -> ParagraphAssertion<'a> {
        match self.block {
            Block::Paragraph(para) => ParagraphAssertion {
                para,
                context: self.context,
            },
            _ => panic!(
                "{}: Expected Paragraph, found {}",
                self.context,
                self.block.node_type()
            ),
        }
    }

    /// Assert this block is a CodeBlock and return code block-specific assertions
    pub fn assert_code_block(self) -> CodeBlockAssertion<'a> {
        match self.block {
            Block::CodeBlock(code) => CodeBlockAssertion {
                code,
                context: self.context,
            },
            _ => panic!(
                "{}: Expected CodeBlock, found {}",
                self.context,
                self.block.node_type()
            ),
        }
    }

    /// Assert the block starts at the given zero-based line
    pub fn starts_at_line(self, expected: usize) -> Self {
        let actual = self.block.range().start.line;
        assert_eq!(
            actual, expected,
            "{}: Expected block to start at line {}, found line {}",
            self.context, expected, actual
        );
        self
    }
}

// ============================================================================
// Header
// ============================================================================

pub struct HeaderAssertion<'a> {
    pub(crate) header: &'a Header,
    pub(crate) context: String,
}

impl<'a> HeaderAssertion<'a> {
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.header.text, &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.header.text, &self.context);
        self
    }

    pub fn glyph(self, expected: char) -> Self {
        assert_eq!(
            self.header.border_glyph, expected,
            "{}: Expected border glyph '{}', found '{}'",
            self.context, expected, self.header.border_glyph
        );
        self
    }

    pub fn double_bordered(self, expected: bool) -> Self {
        assert_eq!(
            self.header.double_bordered, expected,
            "{}: Expected double_bordered to be {}",
            self.context, expected
        );
        self
    }

    pub fn level(self, expected: usize) -> Self {
        assert_eq!(
            self.header.level,
            Some(expected),
            "{}: Expected level {}, found {:?}",
            self.context,
            expected,
            self.header.level
        );
        self
    }

    pub fn unresolved(self) -> Self {
        assert_eq!(
            self.header.level, None,
            "{}: Expected unresolved level, found {:?}",
            self.context, self.header.level
        );
        self
    }
}

// ============================================================================
// Paragraph
// ============================================================================

pub struct ParagraphAssertion<'a> {
    pub(crate) para: &'a Paragraph,
    pub(crate) context: String,
}

impl<'a> ParagraphAssertion<'a> {
    /// Assert the paragraph text, lines joined with `\n`
    pub fn text(self, expected: &str) -> Self {
        TextMatch::Exact(expected.to_string()).assert(&self.para.text(), &self.context);
        self
    }

    pub fn text_starts_with(self, prefix: &str) -> Self {
        TextMatch::StartsWith(prefix.to_string()).assert(&self.para.text(), &self.context);
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.para.text(), &self.context);
        self
    }

    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.para.lines.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} lines, found {} lines",
            self.context, expected, actual
        );
        self
    }

    pub fn lines(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.para.lines, expected,
            "{}: Paragraph lines differ",
            self.context
        );
        self
    }
}

// ============================================================================
// CodeBlock
// ============================================================================

pub struct CodeBlockAssertion<'a> {
    pub(crate) code: &'a CodeBlock,
    pub(crate) context: String,
}

impl<'a> CodeBlockAssertion<'a> {
    pub fn line_count(self, expected: usize) -> Self {
        let actual = self.code.lines.len();
        assert_eq!(
            actual, expected,
            "{}: Expected {} lines, found {} lines",
            self.context, expected, actual
        );
        self
    }

    pub fn lines(self, expected: &[&str]) -> Self {
        assert_eq!(
            self.code.lines, expected,
            "{}: Code block lines differ",
            self.context
        );
        self
    }

    pub fn text_contains(self, substring: &str) -> Self {
        TextMatch::Contains(substring.to_string()).assert(&self.code.text(), &self.context);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::from_blocks(vec![
            Header::new("Title", '=', false).with_level(0).into(),
            Paragraph::new(vec!["a".to_string(), "b".to_string()]).into(),
            CodeBlock::new(vec!["x".to_string()]).into(),
        ])
    }

    #[test]
    fn test_fluent_chain() {
        assert_ast(&sample())
            .item_count(3)
            .item_types(&["Header", "Paragraph", "CodeBlock"])
            .header_levels(&[0])
            .item(0, |item| {
                item.assert_header()
                    .text("Title")
                    .glyph('=')
                    .double_bordered(false)
                    .level(0);
            })
            .item(1, |item| {
                item.assert_paragraph().text("a\nb").line_count(2).lines(&["a", "b"]);
            })
            .item(2, |item| {
                item.assert_code_block().lines(&["x"]).text_contains("x");
            });
    }

    #[test]
    #[should_panic(expected = "items[1]: Expected Header, found Paragraph")]
    fn test_wrong_kind_panics() {
        assert_ast(&sample()).item(1, |item| {
            item.assert_header();
        });
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_index_out_of_bounds() {
        assert_ast(&sample()).item(5, |_| {});
    }
}
