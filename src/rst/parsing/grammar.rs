//! Grammar rules
//!
//!     Every rule is a named chumsky combinator over the token stream. Composite rules reuse the
//!     smaller ones directly, so there is a single definition of what a line, a blank line or a
//!     border line is.
//!
//!     Lines:
//!
//!         blank line      optional whitespace, then a line break
//!         content line    at least one token, then a line break; must contain a word character
//!         sigil line      a content line ending in `::`, trailing whitespace allowed
//!         border line     four or more of the same border glyph, then a line break
//!         indented line   whitespace, at least one other token, then a line break
//!
//!     Blocks (each one starts with its blank separator):
//!
//!         header          blank lines, [border line], content line, border line
//!         literal block   blank lines, content lines, sigil line, [blank lines], indented lines
//!         paragraph       blank lines, content lines
//!
//!     Chumsky alternation backtracks, so every block rule behaves like an ordered PEG choice.
//!     Repetition is greedy and never backtracks into a shorter match: that is why the literal
//!     block stops collecting lines at the first sigil line that has code below it, checked with
//!     a zero-width lookahead. Earlier lines may still end in `::`.

use super::ir::{sigil_index, NodeType, ParseNode};
use crate::rst::lexing::TokenLocation;
use crate::rst::token::{is_word_char, Token};
use chumsky::prelude::*;

/// Type alias for parser error
pub type ParserError = Simple<TokenLocation>;

/// Minimum number of glyphs in a border line
pub const MIN_BORDER_LENGTH: usize = 4;

pub(crate) fn newline() -> impl Parser<TokenLocation, TokenLocation, Error = ParserError> + Clone {
    filter(|(t, _): &TokenLocation| t.is_newline())
}

pub(crate) fn whitespace() -> impl Parser<TokenLocation, TokenLocation, Error = ParserError> + Clone
{
    filter(|(t, _): &TokenLocation| t.is_whitespace())
}

/// Any token that does not end the line
pub(crate) fn line_char() -> impl Parser<TokenLocation, TokenLocation, Error = ParserError> + Clone
{
    filter(|(t, _): &TokenLocation| !t.is_newline())
}

pub(crate) fn glyph() -> impl Parser<TokenLocation, TokenLocation, Error = ParserError> + Clone {
    filter(|(t, _): &TokenLocation| t.glyph().is_some())
}

/// A whitespace-only line
pub(crate) fn blank_line(
) -> impl Parser<TokenLocation, Vec<TokenLocation>, Error = ParserError> + Clone {
    whitespace()
        .or_not()
        .then(newline())
        .map(|(ws, nl)| ws.into_iter().chain(std::iter::once(nl)).collect::<Vec<_>>())
}

/// One or more blank lines, as a single separator node
pub(crate) fn blank_lines() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone {
    blank_line()
        .repeated()
        .at_least(1)
        .flatten()
        .map(ParseNode::blank_lines)
}

/// Raw line tokens, line break included
fn line_tokens() -> impl Parser<TokenLocation, Vec<TokenLocation>, Error = ParserError> + Clone {
    line_char()
        .repeated()
        .at_least(1)
        .then(newline())
        .map(|(mut tokens, nl)| {
            tokens.push(nl);
            tokens
        })
}

fn has_word_char(tokens: &[TokenLocation]) -> bool {
    tokens.iter().any(|(t, _)| match t {
        Token::Text(s) => s.chars().any(is_word_char),
        _ => false,
    })
}

fn word_line() -> impl Parser<TokenLocation, Vec<TokenLocation>, Error = ParserError> + Clone {
    line_tokens().try_map(|tokens, span| {
        if has_word_char(&tokens) {
            Ok(tokens)
        } else {
            Err(Simple::custom(span, "line has no word characters"))
        }
    })
}

/// A line of running text, sigil or not
pub(crate) fn content_line() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone
{
    word_line().map(|tokens| ParseNode::line(NodeType::ContentLine, tokens))
}

/// A line of running text ending in the `::` sigil
pub(crate) fn sigil_line() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone {
    word_line().try_map(|tokens, span| {
        if sigil_index(&tokens).is_some() {
            Ok(ParseNode::line(NodeType::SigilLine, tokens))
        } else {
            Err(Simple::custom(span, "expected a line ending with '::'"))
        }
    })
}

/// Four or more repetitions of one border glyph
pub(crate) fn border_line() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone
{
    glyph()
        .repeated()
        .at_least(1)
        .then(newline())
        .try_map(|(mut tokens, nl), span| {
            let count = tokens.len();
            tokens.push(nl);
            let node = ParseNode::line(NodeType::BorderLine, tokens);
            if node.border_glyph().is_none() {
                Err(Simple::custom(span, "border line mixes glyphs"))
            } else if count < MIN_BORDER_LENGTH {
                Err(Simple::custom(
                    span,
                    format!("border line needs at least {} glyphs", MIN_BORDER_LENGTH),
                ))
            } else {
                Ok(node)
            }
        })
}

/// A header, with or without an overline
pub(crate) fn header() -> impl Parser<TokenLocation, Vec<ParseNode>, Error = ParserError> + Clone {
    let overlined = border_line()
        .then(content_line())
        .then(border_line())
        .try_map(|((over, text), under), span| {
            if over.border_glyph() == under.border_glyph() {
                Ok(ParseNode::block(NodeType::Header, vec![over, text, under]))
            } else {
                Err(Simple::custom(span, "overline and underline use different glyphs"))
            }
        });

    let underlined = content_line()
        .then(border_line())
        .map(|(text, under)| ParseNode::block(NodeType::Header, vec![text, under]));

    blank_lines()
        .then(overlined.or(underlined))
        .map(|(blank, header)| vec![blank, header])
}

/// Whitespace, then the rest of a non-blank line
pub(crate) fn indented_line() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone
{
    whitespace()
        .then(line_char().repeated().at_least(1))
        .then(newline())
        .map(|((ws, content), nl)| {
            let mut tokens = Vec::with_capacity(content.len() + 2);
            tokens.push(ws);
            tokens.extend(content);
            tokens.push(nl);
            ParseNode::line(NodeType::IndentedLine, tokens)
        })
}

/// Indented lines, with blank lines allowed between them but not after the last one
pub(crate) fn code_block() -> impl Parser<TokenLocation, ParseNode, Error = ParserError> + Clone {
    indented_line()
        .then(blank_lines().or_not().then(indented_line()).repeated())
        .map(|(first, rest)| {
            let mut children = vec![first];
            for (blank, line) in rest {
                children.extend(blank);
                children.push(line);
            }
            ParseNode::block(NodeType::CodeBlock, children)
        })
}

/// Zero-width check for a sigil line with an indented line below it
fn literal_start() -> impl Parser<TokenLocation, (), Error = ParserError> + Clone {
    sigil_line()
        .then(blank_lines().or_not())
        .then(indented_line())
        .ignored()
        .rewind()
}

/// A paragraph ending in the sigil, followed by its code block.
///
/// Every code line must be indented deeper than the paragraph's first line.
pub(crate) fn literal_block(
) -> impl Parser<TokenLocation, Vec<ParseNode>, Error = ParserError> + Clone {
    let leading_line = literal_start().not().rewind().ignore_then(content_line());

    blank_lines()
        .then(leading_line.repeated())
        .then(sigil_line())
        .then(blank_lines().or_not())
        .then(code_block())
        .try_map(|((((blank, mut lines), sigil), code_blank), code), span| {
            lines.push(sigil);
            let paragraph = ParseNode::block(NodeType::LiteralParagraph, lines);
            let parent = paragraph.indentation();
            let nested = code
                .children
                .iter()
                .filter(|line| line.is(NodeType::IndentedLine))
                .all(|line| line.indentation() > parent);
            if !nested {
                return Err(Simple::custom(
                    span,
                    "code block must be indented deeper than its paragraph",
                ));
            }
            let mut nodes = vec![blank, paragraph];
            nodes.extend(code_blank);
            nodes.push(code);
            Ok(nodes)
        })
}

/// A run of content lines
pub(crate) fn paragraph() -> impl Parser<TokenLocation, Vec<ParseNode>, Error = ParserError> + Clone
{
    blank_lines()
        .then(content_line().repeated().at_least(1))
        .map(|(blank, lines)| vec![blank, ParseNode::block(NodeType::Paragraph, lines)])
}

/// Any top-level block, in priority order, or a trailing blank separator
pub(crate) fn block() -> impl Parser<TokenLocation, Vec<ParseNode>, Error = ParserError> + Clone {
    choice((
        header(),
        literal_block(),
        paragraph(),
        blank_lines().map(|blank| vec![blank]),
    ))
}
