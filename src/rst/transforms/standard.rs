//! Standard transform definitions
//!
//! Pre-built pipelines for the common processing paths, defined as static references using
//! `once_cell::sync::Lazy`.

use crate::rst::assembling::ResolveHeaderLevels;
use crate::rst::ast::Document;
use crate::rst::lexing::{ensure_source_ends_with_newline, TokenStream};
use crate::rst::parsing::ir::ParseTree;
use crate::rst::transforms::stages::{Building, CoreTokenization, DocumentStart, Recognition};
use crate::rst::transforms::Transform;
use once_cell::sync::Lazy;

/// Type alias for lexing transform
pub type LexingTransform = Transform<String, TokenStream>;

/// Type alias for IR transform
pub type IrTransform = Transform<String, ParseTree>;

/// Type alias for AST transform
pub type AstTransform = Transform<String, Document>;

/// Lexing transform: String → TokenStream
///
/// 1. Trailing newline preprocessing
/// 2. Core tokenization (logos)
/// 3. Synthetic document start
///
/// # Example
///
/// ```rust,ignore
/// use rst_nano::rst::transforms::standard::LEXING;
///
/// let tokens = LEXING.run("Title\n=====\n".to_string())?;
/// ```
pub static LEXING: Lazy<LexingTransform> = Lazy::new(|| {
    Transform::from_fn(|s: String| Ok(ensure_source_ends_with_newline(&s)))
        .then(CoreTokenization::new())
        .then(DocumentStart::new())
});

/// String to IR transform: String → ParseTree
pub static TO_IR: Lazy<IrTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then(Recognition::new()));

/// String to AST without header level resolution: String → Document
///
/// Every header in the result has `level: None`.
pub static TO_UNRESOLVED_AST: Lazy<AstTransform> =
    Lazy::new(|| Transform::from_fn(Ok).then_transform(&TO_IR).then(Building::new()));

/// String to AST transform: String → Document
///
/// 1. Lexing
/// 2. Recognition to IR
/// 3. Building the flat document
/// 4. Resolving header levels
///
/// This is the standard transform for most use cases.
pub static STRING_TO_AST: Lazy<AstTransform> = Lazy::new(|| {
    Transform::from_fn(Ok)
        .then_transform(&TO_UNRESOLVED_AST)
        .then(ResolveHeaderLevels::new())
});
