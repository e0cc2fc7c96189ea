//! Conversion between the flat index and hierarchical tree objects
//!
//! - `builder`: flat path map to a stored tree, deepest directories first
//! - `flatten`: stored tree back to a flat path map
//!
//! Both directions walk an explicit work-list, so nesting depth is bounded by
//! memory rather than the call stack.

pub mod builder;
pub mod flatten;

pub use builder::build_tree;
pub use flatten::{flatten_tree, flatten_tree_at};
