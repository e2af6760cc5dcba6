//! Output format implementations for AST serialization
//!
//! This module contains the formats the parsed document (or its parse tree) can be printed in.
//!
//!     tag       XML-like tags mirroring the document structure
//!     treeviz   one line per node, with icons
//!     json      serde_json rendering of the document model
//!     yaml      serde_yaml rendering of the document model
//!     ir        treeviz of the concrete parse tree, for debugging the grammar

pub mod data;
pub mod ir;
pub mod tag;
pub mod treeviz;

pub use data::{to_json, to_yaml};
pub use ir::parse_tree_to_treeviz;
pub use tag::serialize_document as serialize_ast_tag;
pub use treeviz::{to_treeviz_str, to_treeviz_str_with_params};

use crate::rst::ast::Document;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error that can occur while rendering a document
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("unknown output format '{0}'")]
    Unknown(String),
    #[error("cannot serialize document as JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot serialize document as YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// The renderings available for a built document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Tag,
    Treeviz,
    Json,
    Yaml,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::Tag,
        OutputFormat::Treeviz,
        OutputFormat::Json,
        OutputFormat::Yaml,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Tag => "tag",
            OutputFormat::Treeviz => "treeviz",
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = FormatError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| FormatError::Unknown(name.to_string()))
    }
}

/// Render a document in the given format
pub fn format_document(doc: &Document, format: OutputFormat) -> Result<String, FormatError> {
    Ok(match format {
        OutputFormat::Tag => serialize_ast_tag(doc),
        OutputFormat::Treeviz => to_treeviz_str(doc),
        OutputFormat::Json => to_json(doc)?,
        OutputFormat::Yaml => to_yaml(doc)?,
    })
}

/// Shorten a label to `max_chars`, marking the cut with "..."
pub(crate) fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() > max_chars {
        let mut truncated = s.chars().take(max_chars).collect::<String>();
        truncated.push_str("...");
        truncated
    } else {
        s.to_string()
    }
}
