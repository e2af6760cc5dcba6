//! Main module for rst-nano library functionality
//!
//! The processing pipeline, leaves first:
//!
//!     source text
//!       -> lexing        (String -> TokenStream)
//!       -> parsing       (TokenStream -> ParseNode, the concrete parse tree)
//!       -> building      (ParseNode -> Document, levels not yet resolved)
//!       -> assembling    (Document -> Document, header levels resolved)
//!
//! Every stage is a pure function over its input. Use [parsing::parse_document] for the whole
//! pipeline, or the pre-built pipelines in [transforms::standard] to stop at any stage.

pub mod assembling;
pub mod ast;
pub mod building;
pub mod error;
pub mod formats;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
pub mod token;
pub mod transforms;

pub use ast::{Block, CodeBlock, Document, Header, HeaderStyle, Paragraph};
pub use error::{BuildError, ParseError, RecognitionError};
pub use parsing::parse_document;
