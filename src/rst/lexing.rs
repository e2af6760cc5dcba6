//! Lexer
//!
//!     This module turns source text into the token stream consumed by the grammar. Lexing is
//!     split into the base tokenization (pure logos) and transformations over the resulting
//!     token stream.
//!
//! Source Token Preservation
//!
//!     Logos tokens carry the byte range of their source text. The AST builder slices the
//!     source with these ranges to recover text, so no transformation may alter them.
//!     Synthetic tokens have no source text and carry an empty range (0..0).
//!
//! The Lexing Pipeline
//!
//!     1. Trailing newline preprocessing. Every line, including the last, must end with a
//!        terminator for the line-level grammar to apply. See [ensure_source_ends_with_newline].
//!
//!     2. Core tokenization using logos. See [tokenize].
//!
//!     3. Document start. Blocks require at least one preceding blank line, and for the first
//!        block in the document that blank line is implied by the start of input. A synthetic
//!        Newline token is injected at position 0 to represent it. See [inject_document_start].

use crate::rst::token::Token;
use logos::Logos;
use std::ops::Range;

/// A token paired with its byte range in the source
pub type TokenLocation = (Token, Range<usize>);

/// Flat token stream produced by lexing
pub type TokenStream = Vec<TokenLocation>;

/// Preprocesses source text to ensure it ends with a newline.
///
/// Returns the original string if it already ends with a newline, or is empty.
/// Otherwise, appends a newline.
pub fn ensure_source_ends_with_newline(source: &str) -> String {
    if !source.is_empty() && !source.ends_with('\n') {
        format!("{}\n", source)
    } else {
        source.to_string()
    }
}

/// Tokenize source code with location information.
///
/// Input logos cannot classify (a carriage return not followed by a line feed) is kept as a
/// `Text` token so that no source bytes go missing from the stream.
pub fn tokenize(source: &str) -> TokenStream {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(result) = lexer.next() {
        let token = result.unwrap_or_else(|_| Token::Text(lexer.slice().to_string()));
        tokens.push((token, lexer.span()));
    }

    tokens
}

/// Inject the synthetic document start blank line.
pub fn inject_document_start(tokens: TokenStream) -> TokenStream {
    let mut result = Vec::with_capacity(tokens.len() + 1);
    result.push((Token::Newline, 0..0));
    result.extend(tokens);
    result
}

/// Run the complete lexing pipeline over source text.
///
/// The caller is expected to have applied [ensure_source_ends_with_newline] already, since the
/// byte ranges must index into the exact text that the builder will later slice.
pub fn lex(source: &str) -> TokenStream {
    let tokens = tokenize(source);
    log::debug!("tokenized {} bytes into {} tokens", source.len(), tokens.len());
    inject_document_start(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strip_loc(tokens: TokenStream) -> Vec<Token> {
        tokens.into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_ensure_newline() {
        assert_eq!(ensure_source_ends_with_newline(""), "");
        assert_eq!(ensure_source_ends_with_newline("a"), "a\n");
        assert_eq!(ensure_source_ends_with_newline("a\n"), "a\n");
    }

    #[test]
    fn test_tokenize_header() {
        let tokens = tokenize("Title\n=====\n");
        assert_eq!(
            strip_loc(tokens),
            vec![
                Token::Text("Title".to_string()),
                Token::Newline,
                Token::Glyph('='),
                Token::Glyph('='),
                Token::Glyph('='),
                Token::Glyph('='),
                Token::Glyph('='),
                Token::Newline,
            ]
        );
    }

    #[test]
    fn test_tokenize_preserves_ranges() {
        let source = "Hello world::\n    code\n";
        for (token, range) in tokenize(source) {
            let text = &source[range];
            match token {
                Token::Text(s) => assert_eq!(s, text),
                Token::Glyph(c) => assert_eq!(c.to_string(), text),
                Token::Whitespace(n) => assert_eq!(n, text.len()),
                Token::Newline => assert_eq!(text, "\n"),
            }
        }
    }

    #[test]
    fn test_tokenize_crlf() {
        let tokens = strip_loc(tokenize("a\r\nb\r\n"));
        assert_eq!(
            tokens,
            vec![
                Token::Text("a".to_string()),
                Token::Newline,
                Token::Text("b".to_string()),
                Token::Newline,
            ]
        );
    }

    #[test]
    fn test_lone_carriage_return_is_kept() {
        let source = "a\rb\n";
        let tokens = tokenize(source);
        let covered: usize = tokens.iter().map(|(_, r)| r.len()).sum();
        assert_eq!(covered, source.len());
    }

    #[test]
    fn test_lex_injects_document_start() {
        let tokens = lex("Hello\n");
        assert_eq!(tokens[0], (Token::Newline, 0..0));
        assert_eq!(tokens[1], (Token::Text("Hello".to_string()), 0..5));
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_lex_empty_input() {
        assert_eq!(lex(""), vec![(Token::Newline, 0..0)]);
    }
}
