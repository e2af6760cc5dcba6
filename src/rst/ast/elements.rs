//! Element types of the semantic document
//!
//!     | Element   | Prec. Blank | Head                    | Tail                     |
//!     |-----------|-------------|-------------------------|--------------------------|
//!     | Header    | Required    | Border line or text     | Border line              |
//!     | Paragraph | Required    | Content line            | BlankLine                |
//!     | CodeBlock | Required    | Indented line           | BlankLine                |
//!
//! A code block only exists right after a paragraph whose last line ended in the `::` sigil.

pub mod block;
pub mod code_block;
pub mod document;
pub mod header;
pub mod paragraph;

pub use block::Block;
pub use code_block::CodeBlock;
pub use document::Document;
pub use header::{Header, HeaderStyle};
pub use paragraph::Paragraph;
