//! Building stage - converts the parse tree into a document

use crate::rst::ast::Document;
use crate::rst::building::AstBuilder;
use crate::rst::error::ParseError;
use crate::rst::parsing::ir::ParseTree;
use crate::rst::transforms::Runnable;

/// Building stage
///
/// # Input
/// - `ParseTree` - parse tree and source
///
/// # Output
/// - `Document` - flat document, header levels unresolved
pub struct Building;

impl Building {
    pub fn new() -> Self {
        Self
    }
}

impl Default for Building {
    fn default() -> Self {
        Self::new()
    }
}

impl Runnable<ParseTree, Document> for Building {
    fn run(&self, input: ParseTree) -> Result<Document, ParseError> {
        Ok(AstBuilder::new(&input.source).build(&input.root)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rst::transforms::stages::Recognition;

    #[test]
    fn test_building_leaves_levels_unresolved() {
        let tree = Recognition::new()
            .run("Title\n=====\n".to_string())
            .unwrap();
        let doc = Building::new().run(tree).unwrap();
        assert_eq!(doc.len(), 1);
        assert_eq!(doc.headers().next().unwrap().level, None);
    }
}
