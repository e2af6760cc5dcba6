//! Header level resolution
//!
//! A header's level is the rank of its border style, counted in order of first appearance:
//! the first distinct style in the document is level 0, the next new style level 1, and so on.
//! The glyph itself carries no rank; `=` is not "higher" than `-`.
//!
//! ```text
//!     Part          level 0   (=, underline only)
//!     ====
//!
//!     Chapter       level 1   (-, underline only)
//!     -------
//!
//!     Part two      level 0   (same style as the first header)
//!     ========
//! ```
//!
//! A style is the glyph plus whether the header is overlined, so `=` underlined and `=`
//! over-and-underlined are two different styles.
//!
//! Resolution cannot fail. Non-header blocks pass through untouched.

use crate::rst::ast::{Block, Document, HeaderStyle};
use crate::rst::error::ParseError;
use crate::rst::transforms::Runnable;
use std::collections::HashMap;

/// Map every header style in the document to its level
pub fn level_map(document: &Document) -> HashMap<HeaderStyle, usize> {
    document
        .header_styles()
        .into_iter()
        .enumerate()
        .map(|(level, style)| (style, level))
        .collect()
}

/// Rewrite the level of every header in the document
pub fn resolve_header_levels(document: Document) -> Document {
    let levels = level_map(&document);
    log::debug!("resolved {} distinct header styles", levels.len());

    let blocks = document
        .into_blocks()
        .into_iter()
        .map(|block| match block {
            Block::Header(mut header) => {
                header.level = levels.get(&header.style()).copied();
                Block::Header(header)
            }
            other => other,
        })
        .collect();
    Document::from_blocks(blocks)
}

/// Header level resolution stage
///
/// # Input
/// - `Document` - headers with `level: None`
///
/// # Output
/// - `Document` - every header with its level set
pub struct ResolveHeaderLevels;

impl ResolveHeaderLevels {
    pub fn new() -> Self {
        ResolveHeaderLevels
    }
}

impl Default for ResolveHeaderLevels {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<Document, Document> for ResolveHeaderLevels {
    fn run(&self, input: Document) -> Result<Document, ParseError> {
        Ok(resolve_header_levels(input))
    }
}
