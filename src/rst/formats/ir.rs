//! Treeviz of the concrete parse tree
//!
//! A debugging view of what the grammar matched, before the builder simplifies it. Every
//! parse node is printed, blank separators and border lines included. Line nodes show their
//! source text without the line break.
//!
//! ```text
//! ⧉ Document
//! ├─ ␣ BlankLines (1)
//! ├─ § Header
//! │ ├─ ↵ ContentLine: Title
//! │ └─ ═ BorderLine: =====
//! ├─ ␣ BlankLines (1)
//! └─ ¶ Paragraph
//!   └─ ↵ ContentLine: Hello
//! ```

use super::truncate;
use crate::rst::parsing::ir::{NodeType, ParseNode};

fn get_icon(node_type: NodeType) -> &'static str {
    match node_type {
        NodeType::Document => "⧉",
        NodeType::BlankLines => "␣",
        NodeType::Header => "§",
        NodeType::BorderLine => "═",
        NodeType::ContentLine => "↵",
        NodeType::SigilLine => "∷",
        NodeType::Paragraph => "¶",
        NodeType::LiteralParagraph => "¶",
        NodeType::CodeBlock => "𝒱",
        NodeType::IndentedLine => "℣",
    }
}

/// Source text of a line node, without its line break
fn line_text<'a>(node: &ParseNode, source: &'a str) -> &'a str {
    let mut ranges = node
        .tokens
        .iter()
        .filter(|(token, _)| !token.is_newline())
        .map(|(_, range)| range.clone());
    let Some(first) = ranges.next() else {
        return "";
    };
    let end = ranges.last().map_or(first.end, |range| range.end);
    source.get(first.start..end).unwrap_or("")
}

fn label(node: &ParseNode, source: &str) -> String {
    match node.node_type {
        NodeType::BlankLines => format!("{:?} ({})", node.node_type, node.line_break_count()),
        t if t.is_line() => format!("{:?}: {}", t, truncate(line_text(node, source), 30)),
        t => format!("{:?}", t),
    }
}

fn format_node(output: &mut String, node: &ParseNode, source: &str, prefix: &str, is_last: bool) {
    let connector = if is_last { "└─" } else { "├─" };
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        get_icon(node.node_type),
        label(node, source)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        format_node(output, child, source, &child_prefix, i + 1 == count);
    }
}

/// Render a parse tree; `source` is the text the tree was recognized from
pub fn parse_tree_to_treeviz(root: &ParseNode, source: &str) -> String {
    let mut output = format!("{} {}\n", get_icon(root.node_type), label(root, source));
    let count = root.children.len();
    for (i, child) in root.children.iter().enumerate() {
        format_node(&mut output, child, source, "", i + 1 == count);
    }
    output
}
