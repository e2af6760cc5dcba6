//! Data formats
//!
//! JSON and YAML renderings of the document model through serde. Blocks are internally tagged
//! with a `type` field; locations are included.

use crate::rst::ast::Document;

pub fn to_json(doc: &Document) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(doc)
}

pub fn to_yaml(doc: &Document) -> Result<String, serde_yaml::Error> {
    serde_yaml::to_string(doc)
}
