//! Parsing module for the rst subset
//!
//!     This module provides the complete processing pipeline from source text to AST:
//!         1. Lexing: Tokenization of source text. See [lexing](crate::rst::lexing) module.
//!         2. Recognition: Grammar matching to produce IR nodes. See [parser] module.
//!         3. Building: Construction of the flat document from IR nodes. See
//!            [building](crate::rst::building) module.
//!         4. Assembling: Document-wide passes over the built document. See
//!            [assembling](crate::rst::assembling) module.
//!
//! Parsing End To End
//!
//!     Lexing:
//!         Logos splits the text into whitespace runs, line breaks, border glyphs and text runs.
//!         A synthetic line break is injected at the start, standing in for the blank line that
//!         every block requires before it.
//!
//!     Recognition:
//!         The grammar (see [grammar]) is a set of named chumsky combinators. The recognizer
//!         applies the block rules repeatedly, in priority order, until the input ends. Anything
//!         left unmatched fails the whole parse. The result is a concrete parse tree: each node
//!         records which rule matched and which tokens it consumed (see [ir]).
//!
//!     Building:
//!         The builder walks the parse tree, matching exhaustively on node kinds. Blank lines
//!         disappear, line text is sliced from the source, and code blocks have their common
//!         indentation removed.
//!
//!     Assembling:
//!         Header levels depend on the order in which border styles first appear across the
//!         whole document, so they are resolved in a separate pass once the document is built.

pub mod grammar;
pub mod ir;
pub mod parser;

pub use crate::rst::ast::{Block, CodeBlock, Document, Header, Paragraph};
pub use crate::rst::error::ParseError;
pub use crate::rst::formats::{serialize_ast_tag, to_treeviz_str};
pub use ir::{NodeType, ParseNode};

/// Parse source text into a document with resolved header levels.
///
/// This is the primary entry point. It runs the
/// [STRING_TO_AST](crate::rst::transforms::standard::STRING_TO_AST) pipeline.
///
/// # Example
///
/// ```rust,ignore
/// use rst_nano::rst::parsing::parse_document;
///
/// let doc = parse_document("Title\n=====\n\nHello.\n")?;
/// assert_eq!(doc.len(), 2);
/// ```
pub fn parse_document(source: &str) -> Result<Document, ParseError> {
    use crate::rst::transforms::standard::STRING_TO_AST;
    STRING_TO_AST.run(source.to_string())
}

/// Parse source text without resolving header levels.
///
/// Headers in the returned document have `level: None`.
pub fn parse_unresolved(source: &str) -> Result<Document, ParseError> {
    use crate::rst::transforms::standard::TO_UNRESOLVED_AST;
    TO_UNRESOLVED_AST.run(source.to_string())
}
