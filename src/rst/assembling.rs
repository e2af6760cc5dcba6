//! Assembling module
//!
//!     Assembling stages operate on the built document rather than on tokens or parse nodes.
//!     They exist for information that is only known once the whole document is in place.
//!
//! Current stages:
//!
//!     - `resolve_header_levels`: Ranks header border styles by first appearance and writes
//!       each header's level. See [header_levels](stages::header_levels) for details.

pub mod stages;

pub use stages::header_levels::{level_map, resolve_header_levels};
pub use stages::ResolveHeaderLevels;
