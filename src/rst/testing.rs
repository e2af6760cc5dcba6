//! Testing utilities for the rst subset
//!
//!     All document-level testing goes through the fluent assertion API in [ast_assertions].
//!     Tests state what they expect of each block (its kind, text, level, lines) without
//!     walking the document model by hand, so a change to the model only touches the
//!     assertion implementation.
//!
//!     ```rust,ignore
//!     use rst_nano::rst::testing::{assert_ast, parse_for_test};
//!
//!     let doc = parse_for_test("Title\n=====\n\nIntro::\n    code\n");
//!     assert_ast(&doc)
//!         .item_count(3)
//!         .item(0, |item| {
//!             item.assert_header().text("Title").level(0);
//!         })
//!         .item(1, |item| {
//!             item.assert_paragraph().text("Intro");
//!         })
//!         .item(2, |item| {
//!             item.assert_code_block().lines(&["code"]);
//!         });
//!     ```

pub mod ast_assertions;
pub mod matchers;

pub use ast_assertions::{
    assert_ast, BlockAssertion, CodeBlockAssertion, DocumentAssertion, HeaderAssertion,
    ParagraphAssertion,
};
pub use matchers::TextMatch;

use crate::rst::ast::Document;
use crate::rst::parsing::parse_document;

/// Parse a source string, panicking with the error if it does not parse
pub fn parse_for_test(source: &str) -> Document {
    match parse_document(source) {
        Ok(doc) => doc,
        Err(err) => panic!("failed to parse test source {:?}: {}", source, err),
    }
}
