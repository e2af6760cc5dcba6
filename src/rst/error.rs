//! Error types
//!
//!     A parse either produces a whole document or fails. There is no partial result and no
//!     recovery.
//!
//!     - [RecognitionError]: the grammar could not match the input. This is a data error: the
//!       text is malformed or uses an unsupported construct.
//!     - [BuildError]: the parse tree handed to the builder does not have the shape the builder
//!       expects. This is a defect in the crate, never a problem with the input.
//!
//!     [ParseError] wraps both, plus the I/O failure the loader can hit when reading a file.

use crate::rst::ast::range::{Position, SourceLocation};
use crate::rst::lexing::TokenLocation;
use crate::rst::parsing::ir::NodeType;
use chumsky::error::{Simple, SimpleReason};
use std::path::PathBuf;
use thiserror::Error;

/// The grammar failed to match part of the input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {}, column {}: {message}", .position.line + 1, .position.column + 1)]
pub struct RecognitionError {
    pub message: String,
    /// Zero-based position of the offending input
    pub position: Position,
    /// Byte offset of the offending input
    pub offset: usize,
    pub expected: Vec<String>,
    pub found: Option<String>,
}

impl RecognitionError {
    /// Convert a chumsky error over the token stream into a source-level error.
    ///
    /// Chumsky spans index into the token stream; they are mapped back through the token's byte
    /// range. A span past the last token points at the end of the source.
    pub fn from_simple(
        error: &Simple<TokenLocation>,
        tokens: &[TokenLocation],
        source: &str,
    ) -> Self {
        let index = error.span().start;
        let offset = tokens
            .get(index)
            .map(|(_, range)| range.start)
            .unwrap_or(source.len());
        let position = SourceLocation::new(source).byte_to_position(offset);

        let mut expected: Vec<String> = error
            .expected()
            .map(|token| match token {
                Some((token, _)) => token.to_string(),
                None => "end of input".to_string(),
            })
            .collect();
        expected.sort();
        expected.dedup();

        let found = error.found().map(|(token, _)| token.to_string());

        let message = match error.reason() {
            SimpleReason::Custom(message) => message.clone(),
            SimpleReason::Unexpected | SimpleReason::Unclosed { .. } => match &found {
                Some(found) => format!("no block matches the input at {}", found),
                None => "unexpected end of input".to_string(),
            },
        };

        Self {
            message,
            position,
            offset,
            expected,
            found,
        }
    }
}

/// The parse tree does not have the shape the builder requires
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("expected {expected}, found {found:?} node")]
    UnexpectedNode {
        expected: &'static str,
        found: NodeType,
    },
    #[error("malformed {node_type:?} node: {reason}")]
    MalformedNode {
        node_type: NodeType,
        reason: &'static str,
    },
    #[error("code block is not preceded by a literal paragraph")]
    OrphanCodeBlock,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("recognition failed at {0}")]
    Recognition(#[from] RecognitionError),
    #[error("internal error: {0}")]
    Internal(#[from] BuildError),
    #[error("cannot read {}: {message}", .path.display())]
    Io { path: PathBuf, message: String },
}

impl ParseError {
    pub fn is_recognition(&self) -> bool {
        matches!(self, ParseError::Recognition(_))
    }

    /// Source position of a recognition failure
    pub fn position(&self) -> Option<Position> {
        match self {
            ParseError::Recognition(error) => Some(error.position),
            ParseError::Internal(_) | ParseError::Io { .. } => None,
        }
    }
}
