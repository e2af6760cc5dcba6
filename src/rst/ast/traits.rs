//! AST traits - Common interfaces for uniform node access

use super::range::{Position, Range};

/// Common interface for all AST nodes
pub trait AstNode {
    fn node_type(&self) -> &'static str;
    fn display_label(&self) -> String;
    fn range(&self) -> &Range;
    fn start_position(&self) -> Position {
        self.range().start
    }
}

/// Trait for nodes whose content is a list of text lines
pub trait TextNode: AstNode {
    fn lines(&self) -> &[String];

    /// All lines joined with line breaks
    fn text(&self) -> String {
        self.lines().join("\n")
    }
}

/// Shorten a label for one-line displays.
pub(crate) fn truncate_label(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}…", text.chars().take(max_chars).collect::<String>())
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_label() {
        assert_eq!(truncate_label("short", 10), "short");
        assert_eq!(truncate_label("exactly10!", 10), "exactly10!");
        assert_eq!(truncate_label("a bit longer", 5), "a bit…");
    }
}
