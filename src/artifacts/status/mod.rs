//! Working tree status inspection
//!
//! Compares the three snapshots a repository carries: the working tree, the
//! staging index and the tree of the HEAD commit.
//!
//! ## Components
//!
//! - `file_change`: the kinds of drift a path can show
//! - `status_info`: drift detection and the aggregated result

pub mod file_change;
pub mod status_info;
