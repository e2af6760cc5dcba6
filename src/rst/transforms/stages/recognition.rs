//! Recognition stage - produces IR (ParseNode tree)

use crate::rst::error::ParseError;
use crate::rst::lexing::ensure_source_ends_with_newline;
use crate::rst::parsing::ir::ParseTree;
use crate::rst::parsing::parser;
use crate::rst::transforms::standard::LEXING;
use crate::rst::transforms::Runnable;

/// Recognition stage: lexes the source and matches the grammar against it
///
/// # Input
/// - `String` - source text
///
/// # Output
/// - `ParseTree` - the concrete parse tree with the source it was recognized from
pub struct Recognition;

impl Recognition {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Recognition {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<String, ParseTree> for Recognition {
    fn run(&self, input: String) -> Result<ParseTree, ParseError> {
        let source = ensure_source_ends_with_newline(&input);
        let tokens = LEXING.run(source.clone())?;
        let root = parser::parse(tokens, &source)?;
        Ok(ParseTree { source, root })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::parsing::ir::NodeType;

    #[test]
    fn test_recognition_appends_newline() {
        let tree = Recognition::new().run("Hello".to_string()).unwrap();
        assert_eq!(tree.source, "Hello\n");
        assert_eq!(tree.root.node_type, NodeType::Document);
        assert_eq!(tree.root.children[1].node_type, NodeType::Paragraph);
    }

    #[test]
    fn test_recognition_failure() {
        let error = Recognition::new().run("=-=-\n".to_string()).unwrap_err();
        assert!(error.is_recognition());
    }
}
