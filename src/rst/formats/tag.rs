//! XML-like AST tag serialization
//!
//! Serializes the document to an XML-like format that directly reflects the document model.
//!
//! ## Format
//!
//! - Block kind → tag name
//! - Header fields → attributes, header text → text content
//! - Paragraph and code lines → nested `<line>` tags
//!
//! ## Example
//!
//! ```text
//! <document>
//!   <header glyph="=" level="0">Title</header>
//!   <paragraph>
//!     <line>Welcome to the guide</line>
//!   </paragraph>
//! </document>
//! ```

use crate::rst::ast::{Block, Document, Header};

struct TagSerializer {
    output: String,
    indent_level: usize,
}

impl TagSerializer {
    fn indent(&self) -> String {
        "  ".repeat(self.indent_level)
    }

    fn push_indent(&mut self, s: &str) {
        self.output.push_str(&self.indent());
        self.output.push_str(s);
    }

    fn tag_with_text(&mut self, tag: &str, text: &str) {
        self.push_indent(&format!("<{tag}>{}</{tag}>\n", escape_xml(text)));
    }

    fn lines_tag(&mut self, tag: &str, lines: &[String]) {
        if lines.is_empty() {
            self.push_indent(&format!("<{tag}></{tag}>\n"));
            return;
        }
        self.push_indent(&format!("<{tag}>\n"));
        self.indent_level += 1;
        for line in lines {
            self.tag_with_text("line", line);
        }
        self.indent_level -= 1;
        self.push_indent(&format!("</{tag}>\n"));
    }

    fn header(&mut self, header: &Header) {
        let mut attributes = format!(" glyph=\"{}\"", escape_xml(&header.border_glyph.to_string()));
        if header.double_bordered {
            attributes.push_str(" overline=\"true\"");
        }
        if let Some(level) = header.level {
            attributes.push_str(&format!(" level=\"{}\"", level));
        }
        self.push_indent(&format!(
            "<header{}>{}</header>\n",
            attributes,
            escape_xml(&header.text)
        ));
    }

    fn block(&mut self, block: &Block) {
        match block {
            Block::Header(header) => self.header(header),
            Block::Paragraph(paragraph) => self.lines_tag("paragraph", &paragraph.lines),
            Block::CodeBlock(code) => self.lines_tag("code-block", &code.lines),
        }
    }
}

/// Serialize a document to AST tag format
pub fn serialize_document(doc: &Document) -> String {
    let mut serializer = TagSerializer {
        output: String::from("<document>\n"),
        indent_level: 1,
    };
    for block in doc {
        serializer.block(block);
    }
    serializer.output.push_str("</document>");
    serializer.output
}

/// Escape XML special characters
fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
