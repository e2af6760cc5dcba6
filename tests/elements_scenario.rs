//! End-to-end tests for whole documents
//!
//! Each test parses a complete document and verifies every block with assert_ast.

use rst_nano::rst::ast::{Block, CodeBlock, Header, Paragraph};
use rst_nano::rst::parsing::{parse_document, parse_unresolved};
use rst_nano::rst::testing::{assert_ast, parse_for_test};

const SCENARIO: &str = "Title
=====

First paragraph line.
Second paragraph line.

Intro line.::
    code line one
      code line two
";

#[test]
fn test_scenario_blocks() {
    let doc = parse_for_test(SCENARIO);

    assert_ast(&doc)
        .item_count(4)
        .item_types(&["Header", "Paragraph", "Paragraph", "CodeBlock"])
        .item(0, |item| {
            item.assert_header()
                .text("Title")
                .glyph('=')
                .double_bordered(false)
                .level(0);
        })
        .item(1, |item| {
            item.assert_paragraph()
                .lines(&["First paragraph line.", "Second paragraph line."]);
        })
        .item(2, |item| {
            item.assert_paragraph().lines(&["Intro line."]);
        })
        .item(3, |item| {
            item.assert_code_block()
                .lines(&["code line one", "  code line two"]);
        });
}

#[test]
fn test_scenario_values() {
    let blocks = parse_document(SCENARIO).unwrap().into_blocks();

    let expected: Vec<Block> = vec![
        Header::new("Title", '=', false).with_level(0).into(),
        Paragraph::new(vec![
            "First paragraph line.".to_string(),
            "Second paragraph line.".to_string(),
        ])
        .into(),
        Paragraph::from_line("Intro line.").into(),
        CodeBlock::new(vec![
            "code line one".to_string(),
            "  code line two".to_string(),
        ])
        .into(),
    ];

    // Locations differ from the hand-built blocks; compare content only
    assert_eq!(blocks.len(), expected.len());
    for (actual, expected) in blocks.iter().zip(&expected) {
        match (actual, expected) {
            (Block::Header(a), Block::Header(e)) => {
                assert_eq!(a.text, e.text);
                assert_eq!(a.border_glyph, e.border_glyph);
                assert_eq!(a.double_bordered, e.double_bordered);
                assert_eq!(a.level, e.level);
            }
            (Block::Paragraph(a), Block::Paragraph(e)) => assert_eq!(a.lines, e.lines),
            (Block::CodeBlock(a), Block::CodeBlock(e)) => assert_eq!(a.lines, e.lines),
            (a, e) => panic!("expected {}, found {}", e, a),
        }
    }
}

#[test]
fn test_scenario_locations() {
    let doc = parse_for_test(SCENARIO);

    assert_ast(&doc)
        .item(0, |item| {
            item.starts_at_line(0);
        })
        .item(1, |item| {
            item.starts_at_line(3);
        })
        .item(2, |item| {
            item.starts_at_line(6);
        })
        .item(3, |item| {
            item.starts_at_line(7);
        });
}

#[test]
fn test_unresolved_pipeline_leaves_levels_empty() {
    let doc = parse_unresolved(SCENARIO).unwrap();

    assert_ast(&doc).item(0, |item| {
        item.assert_header().text("Title").unresolved();
    });
}

#[test]
fn test_empty_document() {
    assert_ast(&parse_for_test("")).item_count(0);
    assert_ast(&parse_for_test("\n\n   \n")).item_count(0);
}

#[test]
fn test_missing_trailing_newline() {
    let doc = parse_for_test("Title\n=====\n\nLast line without break");

    assert_ast(&doc).item_count(2).item(1, |item| {
        item.assert_paragraph().text("Last line without break");
    });
}

#[test]
fn test_overlined_header() {
    let doc = parse_for_test("######\n Title \n####\n\nBody\n");

    assert_ast(&doc).item_count(2).item(0, |item| {
        item.assert_header()
            .text("Title")
            .glyph('#')
            .double_bordered(true)
            .level(0);
    });
}

#[test]
fn test_paragraph_keeps_line_text() {
    let doc = parse_for_test("  indented start\nplain   \n");

    assert_ast(&doc).item_count(1).item(0, |item| {
        item.assert_paragraph()
            .lines(&["  indented start", "plain   "])
            .text_starts_with("  indented");
    });
}

#[test]
fn test_unicode_text() {
    let doc = parse_for_test("Überschrift\n~~~~~~~~~~~\n\nДобрый день, 世界\n");

    assert_ast(&doc)
        .item_count(2)
        .item(0, |item| {
            item.assert_header().text("Überschrift").glyph('~');
        })
        .item(1, |item| {
            item.assert_paragraph().text("Добрый день, 世界");
        });
}
