//! AST definitions for the rst subset
//!
//!     The semantic document is flat: an ordered sequence of blocks, in source order, where each
//!     block is a header, a paragraph or a code block. Blank lines separate blocks in the source
//!     but never appear in the document.
//!
//!     See [Document](elements::Document) for the document node and [Block](elements::Block)
//!     for the block union.
//!
//! Header Levels
//!
//!     A header's level is not written in the source. It is derived from its border style (the
//!     glyph, and whether the header is overlined as well as underlined) by the order in which
//!     distinct styles first appear in the document. That needs the whole document, so headers
//!     leave the builder with `level: None` and are resolved later by the
//!     [assembling](crate::rst::assembling) stage.
//!
//! Location Tracking
//!
//!     Each block carries a [Range](range::Range): the byte span of its source lines plus the
//!     zero-based line:column positions of its start and end. The span excludes the blank
//!     lines that precede the block.

pub mod elements;
pub mod range;
pub mod traits;

pub use elements::{Block, CodeBlock, Document, Header, HeaderStyle, Paragraph};
pub use range::{Position, Range, SourceLocation};
pub use traits::AstNode;
