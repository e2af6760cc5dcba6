//! Header level resolution across whole documents
//!
//! Levels follow the order in which border styles first appear, never the glyph itself.

use proptest::prelude::*;
use rst_nano::rst::ast::HeaderStyle;
use rst_nano::rst::testing::{assert_ast, parse_for_test};
use rstest::rstest;

/// Render a header in the given style
fn header_source(text: &str, style: HeaderStyle) -> String {
    let border: String = std::iter::repeat(style.glyph)
        .take(text.chars().count().max(4))
        .collect();
    if style.double_bordered {
        format!("{border}\n{text}\n{border}\n")
    } else {
        format!("{text}\n{border}\n")
    }
}

fn document_source(styles: &[HeaderStyle]) -> String {
    styles
        .iter()
        .enumerate()
        .map(|(i, style)| header_source(&format!("Header {}", i), *style))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_first_appearance_order() {
    let a = HeaderStyle::new('=', false);
    let b = HeaderStyle::new('-', false);
    let c = HeaderStyle::new('=', true);
    let doc = parse_for_test(&document_source(&[a, b, a, c]));

    assert_ast(&doc).item_count(4).header_levels(&[0, 1, 0, 2]);
}

#[test]
fn test_levels_ignore_glyph_rank() {
    // `~` appears before `=`, so it gets the outer level
    let doc = parse_for_test("Part\n~~~~\n\nChapter\n=======\n\nPart two\n~~~~~~~~\n");

    assert_ast(&doc)
        .header_levels(&[0, 1, 0])
        .item(0, |item| {
            item.assert_header().glyph('~').level(0);
        })
        .item(1, |item| {
            item.assert_header().glyph('=').level(1);
        });
}

#[test]
fn test_paragraphs_between_headers() {
    let source = "Intro\n=====\n\nSome text.\n\nDetails\n-------\n\nMore text.\n\nOutro\n=====\n";
    let doc = parse_for_test(source);

    assert_ast(&doc)
        .item_count(5)
        .item_types(&["Header", "Paragraph", "Header", "Paragraph", "Header"])
        .header_levels(&[0, 1, 0]);
}

#[rstest]
#[case::same_glyph_underlined("Aaaa\n====\n\nBbbb\n====\n", true)]
#[case::same_glyph_overlined("====\nAaaa\n====\n\n====\nBbbb\n====\n", true)]
#[case::different_glyph("Aaaa\n====\n\nBbbb\n----\n", false)]
#[case::overline_differs("====\nAaaa\n====\n\nBbbb\n====\n", false)]
#[case::border_length_irrelevant("Aaaa\n==========\n\nBbbb\n====\n", true)]
fn test_two_headers(#[case] source: &str, #[case] same_level: bool) {
    let doc = parse_for_test(source);
    let levels: Vec<_> = doc.headers().map(|h| h.level).collect();

    assert_eq!(levels.len(), 2);
    assert_eq!(levels[0] == levels[1], same_level, "levels: {:?}", levels);
}

fn style_strategy() -> impl Strategy<Value = HeaderStyle> {
    (
        prop::sample::select(vec!['=', '-', '~', '^', '*', '+', '#', '"']),
        any::<bool>(),
    )
        .prop_map(|(glyph, double_bordered)| HeaderStyle::new(glyph, double_bordered))
}

proptest! {
    #[test]
    fn prop_two_headers_share_level_iff_same_style(a in style_strategy(), b in style_strategy()) {
        let doc = parse_for_test(&document_source(&[a, b]));
        let levels: Vec<_> = doc.headers().map(|h| h.level).collect();

        prop_assert_eq!(levels.len(), 2);
        prop_assert_eq!(levels[0], Some(0));
        prop_assert_eq!(levels[0] == levels[1], a == b);
    }

    #[test]
    fn prop_levels_follow_first_appearance(
        styles in prop::collection::vec(style_strategy(), 1..12)
    ) {
        let doc = parse_for_test(&document_source(&styles));

        let mut seen: Vec<HeaderStyle> = Vec::new();
        let expected: Vec<Option<usize>> = styles
            .iter()
            .map(|style| {
                let level = seen.iter().position(|s| s == style).unwrap_or_else(|| {
                    seen.push(*style);
                    seen.len() - 1
                });
                Some(level)
            })
            .collect();
        let actual: Vec<Option<usize>> = doc.headers().map(|h| h.level).collect();

        prop_assert_eq!(actual, expected);
        prop_assert_eq!(doc.header_styles(), seen);
    }
}
