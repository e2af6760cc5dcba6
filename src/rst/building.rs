//! AST building
//!
//!     This module turns the concrete parse tree into the semantic document.
//!
//!     1. Dispatch: [builder::AstBuilder] matches each top-level node by kind and produces the
//!        corresponding block. Blank separators are dropped.
//!     2. Extraction: line text is sliced from the source using token byte ranges, without the
//!        line terminator and without the `::` sigil.
//!     3. Normalization: code block lines lose their common indentation. See [indentation].
//!
//!     The builder does not resolve header levels. That needs the whole document and happens in
//!     [assembling](crate::rst::assembling).

pub mod builder;
pub mod indentation;

pub use builder::AstBuilder;
pub use indentation::{normalize_indentation, CodeLine};
