//! Document loading
//!
//! [DocumentLoader] is the thin collaborator between the outside world and the pipelines: it
//! holds source text, read from a string, a file or any reader, and runs a transform over it.
//!
//! ```rust,ignore
//! use rst_nano::rst::loader::DocumentLoader;
//!
//! let doc = DocumentLoader::from_path("notes.rst")?.parse()?;
//! ```

use crate::rst::ast::Document;
use crate::rst::error::ParseError;
use crate::rst::lexing::TokenStream;
use crate::rst::parsing::ir::ParseTree;
use crate::rst::transforms::standard::{LEXING, STRING_TO_AST, TO_IR, TO_UNRESOLVED_AST};
use crate::rst::transforms::Transform;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub struct DocumentLoader {
    source: String,
}

impl DocumentLoader {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, ParseError> {
        let path = path.as_ref();
        let source = fs::read_to_string(path).map_err(|err| ParseError::Io {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        log::debug!("loaded {} bytes from {}", source.len(), path.display());
        Ok(DocumentLoader { source })
    }

    /// Read the whole of `reader`; `name` identifies it in errors
    pub fn from_reader<R: Read>(mut reader: R, name: &str) -> Result<Self, ParseError> {
        let mut source = String::new();
        reader
            .read_to_string(&mut source)
            .map_err(|err| ParseError::Io {
                path: PathBuf::from(name),
                message: err.to_string(),
            })?;
        Ok(DocumentLoader { source })
    }

    pub fn from_string<S: Into<String>>(source: S) -> Self {
        DocumentLoader {
            source: source.into(),
        }
    }

    /// Run any pipeline that starts from source text
    pub fn with<O: 'static>(&self, transform: &Transform<String, O>) -> Result<O, ParseError> {
        transform.run(self.source.clone())
    }

    /// Full document, header levels resolved
    pub fn parse(&self) -> Result<Document, ParseError> {
        self.with(&STRING_TO_AST)
    }

    /// Document as built, header levels left unresolved
    pub fn parse_unresolved(&self) -> Result<Document, ParseError> {
        self.with(&TO_UNRESOLVED_AST)
    }

    pub fn parse_tree(&self) -> Result<ParseTree, ParseError> {
        self.with(&TO_IR)
    }

    pub fn tokenize(&self) -> Result<TokenStream, ParseError> {
        self.with(&LEXING)
    }

    pub fn source(&self) -> &str {
        &self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_string() {
        let loader = DocumentLoader::from_string("Hello world\n");
        assert_eq!(loader.source(), "Hello world\n");
        assert_eq!(loader.parse().unwrap().len(), 1);
    }

    #[test]
    fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "Title\n=====\n\nBody\n").unwrap();
        let doc = DocumentLoader::from_path(file.path()).unwrap().parse().unwrap();
        assert_eq!(doc.len(), 2);
    }

    #[test]
    fn test_from_path_nonexistent() {
        let error = DocumentLoader::from_path("does-not-exist.rst")
            .err()
            .unwrap();
        match error {
            ParseError::Io { path, .. } => assert_eq!(path, PathBuf::from("does-not-exist.rst")),
            other => panic!("expected an I/O error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_reader() {
        let loader = DocumentLoader::from_reader("Text\n".as_bytes(), "<stdin>").unwrap();
        assert_eq!(loader.source(), "Text\n");
    }

    #[test]
    fn test_unresolved_and_tree() {
        let loader = DocumentLoader::from_string("Title\n-----\n");
        assert_eq!(loader.parse_unresolved().unwrap().headers().next().unwrap().level, None);
        assert_eq!(loader.parse_tree().unwrap().source, "Title\n-----\n");
        assert!(!loader.tokenize().unwrap().is_empty());
    }
}
