//! Core tokenization stage
//!
//! Converts source text into a flat stream of tokens using the logos lexer.

use crate::rst::error::ParseError;
use crate::rst::lexing::{tokenize, TokenStream};
use crate::rst::transforms::Runnable;

/// Core tokenization stage
///
/// # Input
/// - `String` - source text
///
/// # Output
/// - `TokenStream` - flat token stream with byte ranges
pub struct CoreTokenization;

impl CoreTokenization {
    pub fn new() -> Self {
        CoreTokenization
    }
}

impl Default for CoreTokenization {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, TokenStream> for CoreTokenization {
    fn run(&self, input: String) -> Result<TokenStream, ParseError> {
        let tokens = tokenize(&input);
        log::debug!("tokenized {} bytes into {} tokens", input.len(), tokens.len());
        Ok(tokens)
    }
}

impl Runnable<&str, TokenStream> for CoreTokenization {
    fn run(&self, input: &str) -> Result<TokenStream, ParseError> {
        Ok(tokenize(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::token::Token;

    #[test]
    fn test_core_tokenization() {
        let stage = CoreTokenization::new();
        let tokens = stage.run("Hello world\n".to_string()).unwrap();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0], (Token::Text("Hello".to_string()), 0..5));
    }

    #[test]
    fn test_str_input() {
        let tokens = CoreTokenization::new().run("a").unwrap();
        assert_eq!(tokens, vec![(Token::Text("a".to_string()), 0..1)]);
    }
}
