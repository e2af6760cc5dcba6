//! Document-level stages

pub mod header_levels;

pub use header_levels::ResolveHeaderLevels;
