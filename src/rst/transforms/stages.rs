//! Individual transformation stages
//!
//! Each stage implements the `Runnable` trait.

pub mod building;
pub mod document_start;
pub mod recognition;
pub mod tokenization;

pub use building::Building;
pub use document_start::DocumentStart;
pub use recognition::Recognition;
pub use tokenization::CoreTokenization;
