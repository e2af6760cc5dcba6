//! Code block indentation normalization
//!
//! A code block's lines arrive as (leading whitespace, content) pairs. The shortest leading
//! whitespace among non-blank lines becomes the new zero column: that many characters are
//! removed from every line, so relative indentation survives.
//!
//! ```text
//!     def hello():          def hello():
//!         return 1    ->        return 1
//! ```
//!
//! The amount removed is the true minimum, whatever its size. Blank lines inside the block do
//! not take part in the minimum and come out empty.

/// One source line of a code block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeLine {
    pub indentation: String,
    pub content: String,
}

impl CodeLine {
    pub fn new(indentation: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            indentation: indentation.into(),
            content: content.into(),
        }
    }

    /// An empty line between indented lines
    pub fn blank() -> Self {
        Self::new("", "")
    }

    pub fn is_blank(&self) -> bool {
        self.content.is_empty()
    }

    /// Width of the leading whitespace, in characters
    pub fn width(&self) -> usize {
        self.indentation.chars().count()
    }
}

/// Smallest indentation among non-blank lines, 0 when there are none
pub fn common_indentation(lines: &[CodeLine]) -> usize {
    lines
        .iter()
        .filter(|line| !line.is_blank())
        .map(CodeLine::width)
        .min()
        .unwrap_or(0)
}

/// Strip the common indentation from every line.
pub fn normalize_indentation(lines: &[CodeLine]) -> Vec<String> {
    let strip = common_indentation(lines);
    lines
        .iter()
        .map(|line| {
            if line.is_blank() {
                String::new()
            } else {
                let mut text: String = line.indentation.chars().skip(strip).collect();
                text.push_str(&line.content);
                text
            }
        })
        .collect()
}
