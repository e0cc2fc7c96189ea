//! Data structures and algorithms
//!
//! - `branch`: Branch names and the HEAD state
//! - `index`: Flat path to blob mapping and path helpers
//! - `objects`: Object types (blob, tree, commit) and their identity
//! - `status`: Working tree status inspection
//! - `tree`: Conversion between the flat index and nested trees

pub mod branch;
pub mod index;
pub mod objects;
pub mod status;
pub mod tree;
