//! AST builder
//!
//! Converts the concrete parse tree into the flat semantic document. Dispatch is an exhaustive
//! match over [NodeType]: adding a node kind to the grammar without teaching the builder about
//! it does not compile.

use super::indentation::{normalize_indentation, CodeLine};
use crate::rst::ast::{Block, CodeBlock, Document, Header, Paragraph, Range, SourceLocation};
use crate::rst::error::BuildError;
use crate::rst::parsing::ir::{sigil_index, NodeType, ParseNode};

/// Builds a [Document] from a parse tree over `source`
pub struct AstBuilder<'a> {
    source: &'a str,
    source_location: SourceLocation,
}

impl<'a> AstBuilder<'a> {
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            source_location: SourceLocation::new(source),
        }
    }

    /// Build the document from the root node.
    ///
    /// Headers come out with `level: None`.
    pub fn build(&self, root: &ParseNode) -> Result<Document, BuildError> {
        if !root.is(NodeType::Document) {
            return Err(BuildError::UnexpectedNode {
                expected: "document",
                found: root.node_type,
            });
        }

        let mut blocks = Vec::new();
        let mut previous = None;
        for node in &root.children {
            if node.is(NodeType::CodeBlock) && previous != Some(NodeType::LiteralParagraph) {
                return Err(BuildError::OrphanCodeBlock);
            }
            if let Some(block) = self.build_block(node)? {
                previous = Some(node.node_type);
                blocks.push(block);
            }
        }

        log::debug!("built {} blocks", blocks.len());
        Ok(Document::from_blocks(blocks))
    }

    /// Convert one top-level node. Blank separators produce no block.
    pub fn build_block(&self, node: &ParseNode) -> Result<Option<Block>, BuildError> {
        log::trace!("building {:?} node", node.node_type);
        match node.node_type {
            NodeType::BlankLines => Ok(None),
            NodeType::Header => Ok(Some(self.build_header(node)?.into())),
            NodeType::Paragraph | NodeType::LiteralParagraph => {
                Ok(Some(self.build_paragraph(node)?.into()))
            }
            NodeType::CodeBlock => Ok(Some(self.build_code_block(node)?.into())),
            NodeType::Document
            | NodeType::BorderLine
            | NodeType::ContentLine
            | NodeType::SigilLine
            | NodeType::IndentedLine => Err(BuildError::UnexpectedNode {
                expected: "top-level block",
                found: node.node_type,
            }),
        }
    }

    fn build_header(&self, node: &ParseNode) -> Result<Header, BuildError> {
        let (text, under, double_bordered) = match node.children.as_slice() {
            [text, under] => (text, under, false),
            [over, text, under] => {
                expect(over, NodeType::BorderLine, "overline")?;
                if over.border_glyph() != under.border_glyph() {
                    return Err(BuildError::MalformedNode {
                        node_type: NodeType::Header,
                        reason: "overline and underline use different glyphs",
                    });
                }
                (text, under, true)
            }
            _ => {
                return Err(BuildError::MalformedNode {
                    node_type: NodeType::Header,
                    reason: "expected two or three lines",
                })
            }
        };
        expect(text, NodeType::ContentLine, "header text")?;
        expect(under, NodeType::BorderLine, "underline")?;

        let glyph = under.border_glyph().ok_or(BuildError::MalformedNode {
            node_type: NodeType::BorderLine,
            reason: "border line mixes glyphs",
        })?;
        let text = self.line_text(text)?.trim();

        Ok(Header::new(text, glyph, double_bordered).at(self.location(node)))
    }

    fn build_paragraph(&self, node: &ParseNode) -> Result<Paragraph, BuildError> {
        let literal = node.is(NodeType::LiteralParagraph);
        let Some((last, init)) = node.children.split_last() else {
            return Err(BuildError::MalformedNode {
                node_type: node.node_type,
                reason: "paragraph has no lines",
            });
        };

        let mut lines = Vec::with_capacity(node.children.len());
        for line in init {
            expect(line, NodeType::ContentLine, "paragraph line")?;
            lines.push(self.line_text(line)?.to_string());
        }
        if literal {
            expect(last, NodeType::SigilLine, "line ending with '::'")?;
            lines.push(self.line_text(last)?.trim_end().to_string());
        } else {
            expect(last, NodeType::ContentLine, "paragraph line")?;
            lines.push(self.line_text(last)?.to_string());
        }

        Ok(Paragraph::new(lines).at(self.location(node)))
    }

    fn build_code_block(&self, node: &ParseNode) -> Result<CodeBlock, BuildError> {
        let mut code_lines = Vec::new();
        for child in &node.children {
            match child.node_type {
                NodeType::IndentedLine => code_lines.push(self.code_line(child)?),
                NodeType::BlankLines => {
                    code_lines.extend((0..child.line_break_count()).map(|_| CodeLine::blank()))
                }
                _ => {
                    return Err(BuildError::UnexpectedNode {
                        expected: "indented line",
                        found: child.node_type,
                    })
                }
            }
        }

        Ok(CodeBlock::new(normalize_indentation(&code_lines)).at(self.location(node)))
    }

    /// Split an indented line into its whitespace run and the rest of its text
    fn code_line(&self, line: &ParseNode) -> Result<CodeLine, BuildError> {
        let text = self.line_text(line)?;
        let width = match line.tokens.first() {
            Some((token, range)) if token.is_whitespace() => range.len(),
            _ => {
                return Err(BuildError::MalformedNode {
                    node_type: NodeType::IndentedLine,
                    reason: "line does not start with whitespace",
                })
            }
        };
        let (indentation, content) = text.split_at(width.min(text.len()));
        Ok(CodeLine::new(indentation, content))
    }

    /// Source text of a line without its terminator (and sigil, for sigil lines)
    fn line_text(&self, line: &ParseNode) -> Result<&'a str, BuildError> {
        let malformed = |reason| BuildError::MalformedNode {
            node_type: line.node_type,
            reason,
        };
        let keep = match line.node_type {
            // Whitespace after the sigil is dropped with it
            NodeType::SigilLine => {
                sigil_index(&line.tokens).ok_or_else(|| malformed("line does not end with '::'"))?
            }
            NodeType::ContentLine | NodeType::IndentedLine => line.tokens.len().saturating_sub(1),
            _ => {
                return Err(BuildError::UnexpectedNode {
                    expected: "text line",
                    found: line.node_type,
                })
            }
        };

        match (line.tokens[..keep].first(), line.tokens[..keep].last()) {
            (Some((_, first)), Some((_, last))) => self
                .source
                .get(first.start..last.end)
                .ok_or_else(|| malformed("token range outside the source")),
            _ => Err(malformed("line has no content")),
        }
    }

    fn location(&self, node: &ParseNode) -> Range {
        node.byte_range()
            .map(|range| self.source_location.byte_range_to_ast_range(&range))
            .unwrap_or_default()
    }
}

fn expect(node: &ParseNode, node_type: NodeType, expected: &'static str) -> Result<(), BuildError> {
    if node.is(node_type) {
        Ok(())
    } else {
        Err(BuildError::UnexpectedNode {
            expected,
            found: node.node_type,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::ast::Position;
    use crate::rst::lexing::{ensure_source_ends_with_newline, lex};
    use crate::rst::parsing::parser::parse;
    use crate::rst::token::Token;

    fn build(source: &str) -> Document {
        let source = ensure_source_ends_with_newline(source);
        let root = parse(lex(&source), &source).unwrap();
        AstBuilder::new(&source).build(&root).unwrap()
    }

    #[test]
    fn test_header_text_is_trimmed() {
        let doc = build("  Spaced Title  \n================\n");
        let header = doc.blocks()[0].as_header().unwrap();
        assert_eq!(header.text, "Spaced Title");
        assert_eq!(header.border_glyph, '=');
        assert!(!header.double_bordered);
        assert_eq!(header.level, None);
    }

    #[test]
    fn test_overlined_header() {
        let doc = build("#######\nChapter\n#######\n");
        let header = doc.blocks()[0].as_header().unwrap();
        assert_eq!(header.text, "Chapter");
        assert!(header.double_bordered);
        assert_eq!(header.border_glyph, '#');
    }

    #[test]
    fn test_sigil_dropped_from_paragraph() {
        let doc = build("Look at this::\n\n    x = 1\n");
        let para = doc.blocks()[0].as_paragraph().unwrap();
        assert_eq!(para.lines, vec!["Look at this"]);
        let code = doc.blocks()[1].as_code_block().unwrap();
        assert_eq!(code.lines, vec!["x = 1"]);
    }

    #[test]
    fn test_expanded_sigil_form() {
        let doc = build("Example ::\n    x\n");
        assert_eq!(doc.blocks()[0].as_paragraph().unwrap().lines, vec!["Example"]);
    }

    #[test]
    fn test_whitespace_after_sigil() {
        let doc = build("Intro:: \t\n    code\n");
        assert_eq!(doc.blocks()[0].as_paragraph().unwrap().lines, vec!["Intro"]);
        assert_eq!(doc.blocks()[1].as_code_block().unwrap().lines, vec!["code"]);
    }

    #[test]
    fn test_code_block_interior_blank_lines() {
        let doc = build("Code::\n\n    a\n\n\n      b\n");
        let code = doc.blocks()[1].as_code_block().unwrap();
        assert_eq!(code.lines, vec!["a", "", "", "  b"]);
    }

    #[test]
    fn test_crlf_lines() {
        let doc = build("One\r\nTwo\r\n");
        assert_eq!(doc.blocks()[0].as_paragraph().unwrap().lines, vec!["One", "Two"]);
    }

    #[test]
    fn test_block_locations() {
        let doc = build("Title\n=====\n\nBody text\n");
        let header = doc.blocks()[0].as_header().unwrap();
        assert_eq!(header.location.span, 0..12);
        assert_eq!(header.location.start, Position::new(0, 0));
        let para = doc.blocks()[1].as_paragraph().unwrap();
        assert_eq!(para.location.span, 13..23);
        assert_eq!(para.location.start, Position::new(3, 0));
    }

    #[test]
    fn test_orphan_code_block_rejected() {
        let code = ParseNode::block(
            NodeType::CodeBlock,
            vec![ParseNode::line(
                NodeType::IndentedLine,
                vec![
                    (Token::Whitespace(2), 0..2),
                    (Token::Text("x".to_string()), 2..3),
                    (Token::Newline, 3..4),
                ],
            )],
        );
        let root = ParseNode::block(NodeType::Document, vec![code]);
        let error = AstBuilder::new("  x\n").build(&root).unwrap_err();
        assert_eq!(error, BuildError::OrphanCodeBlock);
    }

    #[test]
    fn test_line_node_at_top_level_rejected() {
        let line = ParseNode::line(
            NodeType::ContentLine,
            vec![(Token::Text("x".to_string()), 0..1), (Token::Newline, 1..2)],
        );
        let root = ParseNode::block(NodeType::Document, vec![line]);
        let error = AstBuilder::new("x\n").build(&root).unwrap_err();
        assert_eq!(
            error,
            BuildError::UnexpectedNode {
                expected: "top-level block",
                found: NodeType::ContentLine,
            }
        );
    }

    #[test]
    fn test_root_must_be_document() {
        let root = ParseNode::blank_lines(vec![]);
        assert!(matches!(
            AstBuilder::new("").build(&root),
            Err(BuildError::UnexpectedNode { expected: "document", .. })
        ));
    }
}
