//! Treeviz formatter for the document
//!
//! Treeviz is a one line per node rendering of the document, which makes it quick to scan. It
//! encodes nesting with box-drawing connectors:
//!
//! ```text
//! ⧉ Document (3 blocks)
//! ├─ § Title
//! ├─ ¶ 2 line(s)
//! │ ├─ ↵ First paragraph line.
//! │ └─ ↵ Second paragraph line.
//! └─ 𝒱 1 line(s)
//!   └─ ℣ print("hi")
//! ```
//!
//! Icons
//!     Document: ⧉
//!     Header: §
//!     Paragraph: ¶
//!     TextLine: ↵
//!     CodeBlock: 𝒱
//!     CodeLine: ℣
//!
//! Labels are truncated to 30 characters. With the `show-linum` parameter each line is prefixed
//! with the (one-based) source line of the node.

use super::truncate;
use crate::rst::ast::{AstNode, Block, Document};
use std::collections::HashMap;

/// A rendered node: what gets printed on its line, and what nests below it
struct TreeNode {
    icon: &'static str,
    label: String,
    line: Option<usize>,
    children: Vec<TreeNode>,
}

impl TreeNode {
    fn leaf(icon: &'static str, label: impl Into<String>) -> Self {
        Self {
            icon,
            label: label.into(),
            line: None,
            children: Vec::new(),
        }
    }
}

fn line_nodes(icon: &'static str, lines: &[String]) -> Vec<TreeNode> {
    lines.iter().map(|line| TreeNode::leaf(icon, line.as_str())).collect()
}

fn block_node(block: &Block) -> TreeNode {
    let children = match block {
        Block::Header(_) => Vec::new(),
        Block::Paragraph(paragraph) => line_nodes("↵", &paragraph.lines),
        Block::CodeBlock(code) => line_nodes("℣", &code.lines),
    };
    let icon = match block {
        Block::Header(_) => "§",
        Block::Paragraph(_) => "¶",
        Block::CodeBlock(_) => "𝒱",
    };
    let label = match block {
        Block::Header(header) => match header.level {
            Some(level) => format!("{} [{}]", header.text, level),
            None => header.text.clone(),
        },
        _ => block.display_label(),
    };
    TreeNode {
        icon,
        label,
        line: Some(block.range().start.line),
        children,
    }
}

fn format_node(
    output: &mut String,
    node: &TreeNode,
    prefix: &str,
    is_last: bool,
    show_linum: bool,
    parent_line: Option<usize>,
) {
    let connector = if is_last { "└─" } else { "├─" };
    if show_linum {
        let line = node.line.or(parent_line).unwrap_or(0);
        output.push_str(&format!("{:02} ", line + 1));
    }
    output.push_str(&format!(
        "{}{} {} {}\n",
        prefix,
        connector,
        node.icon,
        truncate(&node.label, 30)
    ));

    let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
    let count = node.children.len();
    for (i, child) in node.children.iter().enumerate() {
        let child_line = node.line.map(|line| line + i);
        format_node(output, child, &child_prefix, i + 1 == count, show_linum, child_line);
    }
}

pub fn to_treeviz_str(doc: &Document) -> String {
    to_treeviz_str_with_params(doc, &HashMap::new())
}

pub fn to_treeviz_str_with_params(doc: &Document, params: &HashMap<String, String>) -> String {
    let show_linum = params
        .get("show-linum")
        .map(|v| v != "false")
        .unwrap_or(false);

    let mut output = format!("⧉ Document ({} blocks)\n", doc.len());
    let nodes: Vec<TreeNode> = doc.iter().map(block_node).collect();
    let count = nodes.len();
    for (i, node) in nodes.iter().enumerate() {
        format_node(&mut output, node, "", i + 1 == count, show_linum, None);
    }
    output
}
