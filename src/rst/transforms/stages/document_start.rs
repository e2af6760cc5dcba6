//! Document start stage
//!
//! Prepends the synthetic blank line that stands in for the start of input.

use crate::rst::error::ParseError;
use crate::rst::lexing::{inject_document_start, TokenStream};
use crate::rst::transforms::Runnable;

pub struct DocumentStart;

impl DocumentStart {
    pub fn new() -> Self {
        DocumentStart
    }
}

impl Default for DocumentStart {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<TokenStream, TokenStream> for DocumentStart {
    fn run(&self, input: TokenStream) -> Result<TokenStream, ParseError> {
        Ok(inject_document_start(input))
    }
}
