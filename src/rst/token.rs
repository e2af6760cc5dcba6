//! Token definitions for the rst subset
//!
//! Tokens are character-class level and produced by logos. They are deliberately context free:
//! the lexer does not know whether `=` belongs to a header border or to running text, nor
//! whether `::` is a literal block sigil. Those decisions belong to the grammar.
//!
//! Token classes:
//!
//!     Whitespace   a run of spaces and tabs (never contains a line break)
//!     Newline      a line terminator, `\n` or `\r\n`
//!     Glyph        one character from the header border alphabet
//!     Text         a run of any other characters
//!
//! A "word character" is any Unicode alphanumeric character. Only `Text` tokens can carry them,
//! since every glyph is punctuation.
use logos::Logos;
use std::fmt;

/// The glyph that, doubled, forms the literal block sigil `::`.
pub const SIGIL_GLYPH: char = ':';

/// All possible tokens of the rst subset
#[derive(Logos, Debug, PartialEq, Eq, Hash, Clone)]
pub enum Token {
    #[regex(r"[ \t]+", |lex| lex.slice().len())]
    Whitespace(usize),

    #[regex(r"\r?\n")]
    Newline,

    #[regex(r#"[=\-`:'"~^_*+#<>]"#, |lex| lex.slice().chars().next())]
    Glyph(char),

    // Catch-all for everything that is not whitespace, a line break or a glyph. The excluded
    // class must stay the complement of the Glyph class above.
    #[regex(r#"[^ \t\r\n=\-`:'"~^_*+#<>]+"#, |lex| lex.slice().to_string())]
    Text(String),
}

/// Whether a character counts as a word character for content lines.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric()
}

impl Token {
    pub fn is_newline(&self) -> bool {
        matches!(self, Token::Newline)
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, Token::Whitespace(_))
    }

    /// The border glyph carried by this token, if any
    pub fn glyph(&self) -> Option<char> {
        match self {
            Token::Glyph(c) => Some(*c),
            _ => None,
        }
    }

    /// Check if this token contains at least one word character
    pub fn has_word_char(&self) -> bool {
        match self {
            Token::Text(s) => s.chars().any(is_word_char),
            _ => false,
        }
    }

    /// Check if this token is half of a `::` sigil
    pub fn is_sigil_glyph(&self) -> bool {
        self.glyph() == Some(SIGIL_GLYPH)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Whitespace(n) => write!(f, "whitespace({})", n),
            Token::Newline => write!(f, "line break"),
            Token::Glyph(c) => write!(f, "'{}'", c),
            Token::Text(s) => write!(f, "text {:?}", s),
        }
    }
}
