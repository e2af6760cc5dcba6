//! # rst-nano
//!
//! A parser for a small subset of reStructuredText.
//!
//! The recognised constructs are section headers (underlined, or overlined and underlined),
//! paragraphs, literal code blocks introduced by a paragraph ending in `::`, and the blank
//! lines that separate them. Everything else is rejected.
//!
//! File Layout
//!
//!     src/rst
//!       ├── token        logos tokens (lexical primitives)
//!       ├── lexing       tokenization and synthetic tokens
//!       ├── parsing      chumsky grammar producing the concrete parse tree (IR)
//!       ├── building     IR -> Document transform, code indentation normalization
//!       ├── assembling   document-wide passes (header levels)
//!       ├── ast          the semantic document
//!       ├── transforms   composable stage pipelines
//!       └── formats      serializers (tag, treeviz, json, yaml)
//!
//! For testing guidelines and the fluent assertion API, see the [testing module](rst::testing).

pub mod rst;
