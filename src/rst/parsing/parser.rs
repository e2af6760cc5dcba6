//! Document recognizer
//!
//! Applies the block grammar repeatedly until the input is exhausted. Input that no block
//! matches is a hard failure: chumsky runs without recovery, so the first unmatched position
//! ends the parse.

use super::grammar::{block, ParserError};
use super::ir::{NodeType, ParseNode};
use crate::rst::error::{ParseError, RecognitionError};
use crate::rst::lexing::TokenLocation;
use chumsky::prelude::*;

/// The top-level recognizer: all blocks in order, then the end of input
pub fn document() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone {
    block()
        .repeated()
        .flatten()
        .then_ignore(end())
        .map(|children| ParseNode::block(NodeType::Document, children))
}

/// Recognize a lexed document.
///
/// `source` must be the exact text the tokens were produced from.
pub fn parse(tokens: Vec<TokenLocation>, source: &str) -> Result<ParseNode, ParseError> {
    match document().parse(tokens.clone()) {
        Ok(root) => {
            log::debug!("recognized {} top-level nodes", root.children.len());
            Ok(root)
        }
        Err(errors) => {
            // The error that got furthest into the input is the most specific one
            let error = errors
                .iter()
                .max_by_key(|error| error.span().start)
                .map(|error| RecognitionError::from_simple(error, &tokens, source))
                .unwrap_or_else(|| RecognitionError {
                    message: "input not recognized".to_string(),
                    position: Default::default(),
                    offset: 0,
                    expected: Vec::new(),
                    found: None,
                });
            log::debug!("recognition failed: {}", error);
            Err(error.into())
        }
    }
}
